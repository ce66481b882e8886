//! Core domain: boot, pause and camera setup.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::core::resources::RunConfig;
use crate::core::state::GameState;

pub(crate) fn finish_boot(
    run_config: Res<RunConfig>,
    mut game_state: ResMut<NextState<GameState>>,
) {
    info!("Starting run with seed: {}", run_config.seed);
    game_state.set(GameState::Playing);
}

pub(crate) fn toggle_pause(
    keyboard: Res<ButtonInput<KeyCode>>,
    state: Res<State<GameState>>,
    mut game_state: ResMut<NextState<GameState>>,
) {
    if !keyboard.just_pressed(KeyCode::Escape) {
        return;
    }

    match state.get() {
        GameState::Playing => game_state.set(GameState::Paused),
        GameState::Paused => game_state.set(GameState::Playing),
        GameState::Boot => {}
    }
}

pub(crate) fn pause_physics(mut physics_time: ResMut<Time<Physics>>) {
    physics_time.pause();
    info!("Paused");
}

pub(crate) fn resume_physics(mut physics_time: ResMut<Time<Physics>>) {
    physics_time.unpause();
}

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
