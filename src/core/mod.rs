//! Core domain: run flow state, pause handling and shared configuration.

mod resources;
mod state;
mod systems;

pub use resources::RunConfig;
pub use state::GameState;

use bevy::prelude::*;

use crate::core::systems::{finish_boot, pause_physics, resume_physics, setup_camera, toggle_pause};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<RunConfig>()
            .add_systems(Startup, (setup_camera, finish_boot))
            .add_systems(Update, toggle_pause)
            .add_systems(OnEnter(GameState::Paused), pause_physics)
            .add_systems(OnExit(GameState::Paused), resume_physics);
    }
}
