//! Movement domain: the per-step locomotion decision table.
//!
//! Each fixed step the controller takes the sensor readings, the held input
//! and the horizontal displacement of the last step, and issues force,
//! impulse, friction and motion-profile commands to the body. It owns the
//! facing, ladder and jump-latch state; nothing else writes them.

use bevy::prelude::*;

use crate::movement::{
    BodyCommands, Facing, HorizontalInput, LocomotionInput, LocomotionTuning, ProfileKind,
    VerticalInput,
};

/// Readings taken from the physics world before this step's forces.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StepSensors {
    pub on_ground: bool,
    pub ladder_contact: bool,
    /// Horizontal displacement since the previous step
    pub horizontal_delta: f32,
}

/// Which branch of the force table fired.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Drive {
    /// No directional force; friction restored
    #[default]
    Rest,
    /// Horizontal force along the given sign (-1 or +1)
    Run { direction: f32, airborne: bool },
    /// Vertical ladder force along the given sign (-1 or +1)
    Climb { direction: f32 },
}

/// What a single step decided, for logging and animation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StepReport {
    pub drive: Drive,
    pub jumped: bool,
    pub profile_change: Option<ProfileKind>,
    pub facing_changed: bool,
}

#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct LocomotionController {
    pub facing: Facing,
    pub on_ladder: bool,
    pub on_ground: bool,
    pub horizontal: HorizontalInput,
    pub vertical: VerticalInput,
    jump_held: bool,
}

impl LocomotionController {
    pub fn active_profile(&self) -> ProfileKind {
        if self.on_ladder {
            ProfileKind::Ladder
        } else {
            ProfileKind::Ground
        }
    }

    pub fn step(
        &mut self,
        sensors: StepSensors,
        input: LocomotionInput,
        tuning: &LocomotionTuning,
        body: &mut impl BodyCommands,
    ) -> StepReport {
        let mut report = StepReport {
            facing_changed: self.update_facing(sensors.horizontal_delta, tuning.dead_zone),
            ..default()
        };

        self.on_ground = sensors.on_ground;
        self.horizontal = match (input.left, input.right) {
            (true, false) => HorizontalInput::Left,
            (false, true) => HorizontalInput::Right,
            _ => HorizontalInput::None,
        };
        self.vertical = match (input.up, input.down) {
            (true, false) => VerticalInput::Up,
            (false, true) => VerticalInput::Down,
            _ => VerticalInput::None,
        };

        if sensors.ladder_contact != self.on_ladder {
            self.on_ladder = sensors.ladder_contact;
            let kind = self.active_profile();
            body.apply_profile(&kind.profile(tuning));
            report.profile_change = Some(kind);
        }

        report.drive = self.select_drive();
        match report.drive {
            Drive::Run {
                direction,
                airborne,
            } => {
                let magnitude = if airborne {
                    tuning.air_force
                } else {
                    tuning.ground_force
                };
                body.apply_force(Vec2::new(direction * magnitude, 0.0));
                body.set_friction(0.0);
            }
            Drive::Climb { direction } => {
                body.apply_force(Vec2::new(0.0, direction * tuning.climb_force));
                body.set_friction(0.0);
            }
            Drive::Rest => body.set_friction(tuning.player_friction),
        }

        let jump_edge = input.jump_pressed || (input.jump && !self.jump_held);
        self.jump_held = input.jump;
        if jump_edge && self.on_ground && !self.on_ladder {
            body.apply_impulse(Vec2::new(0.0, tuning.jump_impulse));
            report.jumped = true;
        }

        report
    }

    fn update_facing(&mut self, dx: f32, dead_zone: f32) -> bool {
        let flipped = match self.facing {
            Facing::Right if dx < -dead_zone => Facing::Left,
            Facing::Left if dx > dead_zone => Facing::Right,
            current => current,
        };
        let changed = flipped != self.facing;
        self.facing = flipped;
        changed
    }

    // Priority: left, right, up, down, rest.
    fn select_drive(&self) -> Drive {
        let airborne = !(self.on_ground || self.on_ladder);
        match (self.horizontal, self.vertical) {
            (HorizontalInput::Left, _) => Drive::Run {
                direction: -1.0,
                airborne,
            },
            (HorizontalInput::Right, _) => Drive::Run {
                direction: 1.0,
                airborne,
            },
            (HorizontalInput::None, VerticalInput::Up) if self.on_ladder => {
                Drive::Climb { direction: 1.0 }
            }
            (HorizontalInput::None, VerticalInput::Down) if self.on_ladder => {
                Drive::Climb { direction: -1.0 }
            }
            _ => Drive::Rest,
        }
    }
}
