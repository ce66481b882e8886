//! Movement domain: locomotion messages.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::movement::{CommandLog, StepReport};

/// Emitted once per controller step with everything it issued.
#[derive(Debug, Clone)]
pub struct LocomotionSteppedEvent {
    pub entity: Entity,
    pub report: StepReport,
    pub commands: CommandLog,
}

impl Message for LocomotionSteppedEvent {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RespawnReason {
    Died,
    LevelCompleted,
}

/// Request to put the player back at the level start.
#[derive(Debug, Clone, Copy)]
pub struct RespawnPlayerEvent {
    pub reason: RespawnReason,
}

impl Message for RespawnPlayerEvent {}
