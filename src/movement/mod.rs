//! Movement domain: player locomotion, ladder profiles and body forces.

mod body;
mod bootstrap;
mod components;
mod controller;
mod events;
mod pose;
mod resources;
mod systems;


pub use body::{
    BodyCommand, BodyCommands, BodyForces, CommandLog, PlayerBody, integrate_velocity,
    player_friction,
};
pub use bootstrap::PLAYER_SIZE;
pub use components::{
    Facing, GameLayer, Ground, HorizontalInput, Ladder, LocomotionSensors, Odometer, Player,
    VerticalInput, Wall,
};
pub use controller::{Drive, LocomotionController, StepReport, StepSensors};
pub use events::{LocomotionSteppedEvent, RespawnPlayerEvent, RespawnReason};
pub use pose::{LocomotionPose, select_pose};
pub use resources::{LocomotionInput, LocomotionTuning, MotionProfile, ProfileKind};

use bevy::input::InputSystems;
use bevy::prelude::*;

use crate::core::GameState;
use crate::movement::bootstrap::{bootstrap_player, respawn_player};
use crate::movement::systems::{
    detect_ground, detect_ladder_contact, drive_locomotion, integrate_body_forces, read_input,
    sync_sprite, update_pose,
};

/// Fixed-step ordering: sensors read last step's positions, the controller
/// issues commands, then forces are folded into velocity before avian runs.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum MovementSet {
    Sense,
    Drive,
    Integrate,
}

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LocomotionTuning>()
            .init_resource::<LocomotionInput>()
            .add_message::<LocomotionSteppedEvent>()
            .add_message::<RespawnPlayerEvent>()
            .configure_sets(
                FixedUpdate,
                (MovementSet::Sense, MovementSet::Drive, MovementSet::Integrate)
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(PreUpdate, read_input.after(InputSystems))
            .add_systems(OnEnter(GameState::Playing), bootstrap_player)
            .add_systems(
                FixedUpdate,
                (detect_ground, detect_ladder_contact).in_set(MovementSet::Sense),
            )
            .add_systems(
                FixedUpdate,
                (drive_locomotion, update_pose)
                    .chain()
                    .in_set(MovementSet::Drive),
            )
            .add_systems(
                FixedUpdate,
                integrate_body_forces.in_set(MovementSet::Integrate),
            )
            .add_systems(
                Update,
                (respawn_player, sync_sprite).run_if(in_state(GameState::Playing)),
            );
    }
}
