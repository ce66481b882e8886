//! Debug domain: dev-tools overlay and locomotion trace capture.
//!
//! Hotkeys:
//! - F1: toggle the info overlay
//! - F2: toggle invincibility
//! - F3: toggle per-step trace logging
//! - F4: write the trace buffer to `locomotion_trace.json`

mod state;
mod systems;
mod ui;

#[cfg(test)]
mod tests;

pub use state::{DebugState, LocomotionTrace, TRACE_CAPACITY, TraceEntry};

use bevy::prelude::*;

use crate::debug::systems::{
    announce_level_completion, apply_invincibility, handle_debug_hotkeys, record_trace,
    update_debug_info_overlay, update_status_message,
};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .init_resource::<LocomotionTrace>()
            .add_systems(
                Update,
                (
                    handle_debug_hotkeys,
                    record_trace,
                    announce_level_completion,
                    update_status_message,
                    apply_invincibility,
                    update_debug_info_overlay,
                )
                    .chain(),
            );
    }
}
