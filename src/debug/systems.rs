//! Debug domain: hotkeys, trace recording and the info overlay.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::actors::Health;
use crate::core::{GameState, RunConfig};
use crate::debug::state::{DebugState, LocomotionTrace};
use crate::debug::ui::{DebugInfoOverlay, spawn_debug_info_overlay};
use crate::level::{LevelCompletedEvent, LevelProgress};
use crate::movement::{LocomotionController, LocomotionPose, LocomotionSteppedEvent, Player};

pub const TRACE_FILE: &str = "locomotion_trace.json";

/// F1 overlay, F2 invincibility, F3 step logging, F4 trace dump
pub(crate) fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    trace: Res<LocomotionTrace>,
) {
    if keyboard.just_pressed(KeyCode::F1) {
        debug_state.show_info = !debug_state.show_info;
    }

    if keyboard.just_pressed(KeyCode::F2) {
        debug_state.invincible = !debug_state.invincible;
        let msg = if debug_state.invincible {
            "Invincibility ON"
        } else {
            "Invincibility OFF"
        };
        debug_state.set_message(msg, 2.0);
        info!("[DEBUG] {}", msg);
    }

    if keyboard.just_pressed(KeyCode::F3) {
        debug_state.log_steps = !debug_state.log_steps;
        let msg = if debug_state.log_steps {
            "Step logging ON"
        } else {
            "Step logging OFF"
        };
        debug_state.set_message(msg, 2.0);
        info!("[DEBUG] {}", msg);
    }

    if keyboard.just_pressed(KeyCode::F4) {
        let msg = match write_trace(&trace) {
            Ok(()) => format!("Wrote {} steps to {}", trace.len(), TRACE_FILE),
            Err(e) => {
                error!("[DEBUG] Failed to write {}: {}", TRACE_FILE, e);
                format!("Trace dump failed: {}", e)
            }
        };
        info!("[DEBUG] {}", msg);
        debug_state.set_message(msg, 3.0);
    }
}

fn write_trace(trace: &LocomotionTrace) -> std::io::Result<()> {
    let contents = serde_json::to_string_pretty(&trace.to_json())?;
    std::fs::write(TRACE_FILE, contents)
}

pub(crate) fn record_trace(
    mut stepped: MessageReader<LocomotionSteppedEvent>,
    debug_state: Res<DebugState>,
    mut trace: ResMut<LocomotionTrace>,
) {
    for event in stepped.read() {
        let entry = trace.record(event.report, event.commands.clone());
        if debug_state.log_steps {
            info!(
                "[TRACE] tick={} drive={:?} jumped={} profile={:?} commands={}",
                entry.tick,
                entry.report.drive,
                entry.report.jumped,
                entry.report.profile_change,
                entry.commands.commands.len()
            );
        }
    }
}

pub(crate) fn announce_level_completion(
    mut completed: MessageReader<LevelCompletedEvent>,
    mut debug_state: ResMut<DebugState>,
) {
    if let Some(event) = completed.read().last() {
        debug_state.set_message(format!("Level {} complete", event.level), 3.0);
    }
}

pub(crate) fn update_status_message(time: Res<Time>, mut debug_state: ResMut<DebugState>) {
    if let Some((_, ref mut duration)) = debug_state.status_message {
        *duration -= time.delta_secs();
        if *duration <= 0.0 {
            debug_state.status_message = None;
        }
    }
}

/// Keep the player at full health while invincible
pub(crate) fn apply_invincibility(
    debug_state: Res<DebugState>,
    mut player_query: Query<&mut Health, With<Player>>,
) {
    if !debug_state.invincible {
        return;
    }

    for mut health in &mut player_query {
        if health.current < health.max {
            health.restore();
        }
    }
}

/// Update the debug info overlay with current player state
pub(crate) fn update_debug_info_overlay(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    run_config: Res<RunConfig>,
    progress: Res<LevelProgress>,
    game_state: Res<State<GameState>>,
    player_query: Query<
        (
            &Transform,
            &LinearVelocity,
            &LocomotionController,
            &LocomotionPose,
            &Health,
        ),
        With<Player>,
    >,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
        return;
    }

    if existing_overlay.is_empty() {
        spawn_debug_info_overlay(&mut commands);
        return;
    }

    let Ok(mut text) = overlay_query.single_mut() else {
        return;
    };
    let Some((transform, velocity, controller, pose, health)) = player_query.iter().next() else {
        return;
    };

    let pos = transform.translation;
    let mut info = format!(
        "Pos: ({:.0}, {:.0})\nVel: ({:.0}, {:.0})\nFacing: {:?}\nGround: {} Ladder: {}\nProfile: {:?}\nPose: {:?}\nHP: {:.0}/{:.0}\nSeed: {}\nLevel: {}\nState: {:?}\nInvincible: {}",
        pos.x,
        pos.y,
        velocity.x,
        velocity.y,
        controller.facing,
        controller.on_ground,
        controller.on_ladder,
        controller.active_profile(),
        pose,
        health.current,
        health.max,
        run_config.seed,
        progress.level,
        game_state.get(),
        debug_state.invincible
    );
    if let Some((message, _)) = &debug_state.status_message {
        info.push('\n');
        info.push_str(message);
    }
    **text = info;
}
