//! Debug domain: debug state and the locomotion trace buffer.

use bevy::prelude::*;
use serde_json::{Value, json};
use std::collections::VecDeque;

use crate::movement::{BodyCommand, CommandLog, Drive, StepReport};

/// Roughly ten seconds of fixed steps
pub const TRACE_CAPACITY: usize = 600;

/// Resource tracking debug mode state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether the info overlay is visible
    pub show_info: bool,
    /// Whether the player is invincible
    pub invincible: bool,
    /// Whether each controller step is logged as it is recorded
    pub log_steps: bool,
    /// Message to display temporarily in the overlay
    pub status_message: Option<(String, f32)>,
}

impl DebugState {
    /// Set a status message that will fade after a duration
    pub fn set_message(&mut self, message: impl Into<String>, duration: f32) {
        self.status_message = Some((message.into(), duration));
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TraceEntry {
    pub tick: u64,
    pub report: StepReport,
    pub commands: CommandLog,
}

/// Ring buffer of the most recent controller steps.
#[derive(Resource, Debug)]
pub struct LocomotionTrace {
    entries: VecDeque<TraceEntry>,
    capacity: usize,
    next_tick: u64,
}

impl Default for LocomotionTrace {
    fn default() -> Self {
        Self::with_capacity(TRACE_CAPACITY)
    }
}

impl LocomotionTrace {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
            next_tick: 0,
        }
    }

    pub fn record(&mut self, report: StepReport, commands: CommandLog) -> &TraceEntry {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(TraceEntry {
            tick: self.next_tick,
            report,
            commands,
        });
        self.next_tick += 1;
        &self.entries[self.entries.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TraceEntry> {
        self.entries.iter()
    }

    pub fn to_json(&self) -> Value {
        Value::Array(self.entries.iter().map(entry_json).collect())
    }
}

fn entry_json(entry: &TraceEntry) -> Value {
    let drive = match entry.report.drive {
        Drive::Rest => json!({ "kind": "rest" }),
        Drive::Run {
            direction,
            airborne,
        } => json!({ "kind": "run", "direction": direction, "airborne": airborne }),
        Drive::Climb { direction } => json!({ "kind": "climb", "direction": direction }),
    };

    json!({
        "tick": entry.tick,
        "drive": drive,
        "jumped": entry.report.jumped,
        "profile_change": entry.report.profile_change.map(|p| format!("{:?}", p)),
        "facing_changed": entry.report.facing_changed,
        "commands": entry.commands.commands.iter().map(command_json).collect::<Vec<_>>(),
    })
}

fn command_json(command: &BodyCommand) -> Value {
    match *command {
        BodyCommand::ApplyForce(f) => json!({ "apply_force": [f.x, f.y] }),
        BodyCommand::ApplyImpulse(i) => json!({ "apply_impulse": [i.x, i.y] }),
        BodyCommand::SetFriction(c) => json!({ "set_friction": c }),
        BodyCommand::SetGravityOverride(g) => {
            json!({ "set_gravity_override": g.map(|g| [g.x, g.y]) })
        }
        BodyCommand::SetDamping(d) => json!({ "set_damping": d }),
        BodyCommand::SetVelocityCap {
            horizontal,
            vertical,
        } => json!({ "set_velocity_cap": [horizontal, vertical] }),
    }
}
