//! Movement domain: physics-body command seam and force integration.
//!
//! The locomotion controller never touches avian components directly. It
//! issues commands through [`BodyCommands`]; [`CommandLog`] records them and
//! [`PlayerBody`] applies them to the live components. Forces, impulses,
//! gravity, damping and speed caps are folded into `LinearVelocity` by
//! [`integrate_velocity`] before avian's own step.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::MotionProfile;

/// Physics primitives the controller is allowed to issue.
pub trait BodyCommands {
    fn apply_force(&mut self, force: Vec2);
    fn apply_impulse(&mut self, impulse: Vec2);
    fn set_friction(&mut self, coefficient: f32);
    fn set_gravity_override(&mut self, gravity: Option<Vec2>);
    fn set_damping(&mut self, damping: f32);
    fn set_velocity_cap(&mut self, horizontal: f32, vertical: f32);

    fn apply_profile(&mut self, profile: &MotionProfile) {
        self.set_gravity_override(profile.gravity);
        self.set_damping(profile.damping);
        self.set_velocity_cap(profile.max_horizontal_speed, profile.max_vertical_speed);
    }
}

/// A single recorded body command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BodyCommand {
    ApplyForce(Vec2),
    ApplyImpulse(Vec2),
    SetFriction(f32),
    SetGravityOverride(Option<Vec2>),
    SetDamping(f32),
    SetVelocityCap { horizontal: f32, vertical: f32 },
}

/// Ordered record of the commands issued during a step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandLog {
    pub commands: Vec<BodyCommand>,
}

impl CommandLog {
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn replay(&self, body: &mut impl BodyCommands) {
        for command in &self.commands {
            match *command {
                BodyCommand::ApplyForce(force) => body.apply_force(force),
                BodyCommand::ApplyImpulse(impulse) => body.apply_impulse(impulse),
                BodyCommand::SetFriction(coefficient) => body.set_friction(coefficient),
                BodyCommand::SetGravityOverride(gravity) => body.set_gravity_override(gravity),
                BodyCommand::SetDamping(damping) => body.set_damping(damping),
                BodyCommand::SetVelocityCap {
                    horizontal,
                    vertical,
                } => body.set_velocity_cap(horizontal, vertical),
            }
        }
    }

    pub fn forces(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.commands.iter().filter_map(|c| match c {
            BodyCommand::ApplyForce(f) => Some(*f),
            _ => None,
        })
    }

    pub fn impulses(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.commands.iter().filter_map(|c| match c {
            BodyCommand::ApplyImpulse(i) => Some(*i),
            _ => None,
        })
    }

    pub fn last_friction(&self) -> Option<f32> {
        self.commands.iter().rev().find_map(|c| match c {
            BodyCommand::SetFriction(f) => Some(*f),
            _ => None,
        })
    }

    /// Number of profile switches recorded (one gravity override per switch).
    pub fn profile_switches(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, BodyCommand::SetGravityOverride(_)))
            .count()
    }
}

impl BodyCommands for CommandLog {
    fn apply_force(&mut self, force: Vec2) {
        self.commands.push(BodyCommand::ApplyForce(force));
    }

    fn apply_impulse(&mut self, impulse: Vec2) {
        self.commands.push(BodyCommand::ApplyImpulse(impulse));
    }

    fn set_friction(&mut self, coefficient: f32) {
        self.commands.push(BodyCommand::SetFriction(coefficient));
    }

    fn set_gravity_override(&mut self, gravity: Option<Vec2>) {
        self.commands.push(BodyCommand::SetGravityOverride(gravity));
    }

    fn set_damping(&mut self, damping: f32) {
        self.commands.push(BodyCommand::SetDamping(damping));
    }

    fn set_velocity_cap(&mut self, horizontal: f32, vertical: f32) {
        self.commands.push(BodyCommand::SetVelocityCap {
            horizontal,
            vertical,
        });
    }
}

/// Per-body force accumulator and motion profile state.
/// Bodies carrying this use `GravityScale(0.0)`; gravity is applied here.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct BodyForces {
    pub mass: f32,
    pub pending_force: Vec2,
    pub pending_impulse: Vec2,
    pub gravity_override: Option<Vec2>,
    /// Fraction of velocity retained per second
    pub damping: f32,
    pub max_horizontal_speed: f32,
    pub max_vertical_speed: f32,
}

impl BodyForces {
    pub fn new(mass: f32, profile: &MotionProfile) -> Self {
        Self {
            mass,
            pending_force: Vec2::ZERO,
            pending_impulse: Vec2::ZERO,
            gravity_override: profile.gravity,
            damping: profile.damping,
            max_horizontal_speed: profile.max_horizontal_speed,
            max_vertical_speed: profile.max_vertical_speed,
        }
    }

    /// Uncapped, undamped body with a fixed gravity (used by projectiles).
    pub fn free(mass: f32, gravity: Vec2, damping: f32) -> Self {
        Self {
            mass,
            pending_force: Vec2::ZERO,
            pending_impulse: Vec2::ZERO,
            gravity_override: Some(gravity),
            damping,
            max_horizontal_speed: f32::INFINITY,
            max_vertical_speed: f32::INFINITY,
        }
    }
}

/// Player contact friction. Multiplying with the surface's coefficient lets
/// a zero coefficient mean no friction at all, whatever the surface.
pub fn player_friction(coefficient: f32) -> Friction {
    Friction::new(coefficient).with_combine_rule(CoefficientCombine::Multiply)
}

/// Live view of the player's physics components.
pub struct PlayerBody<'a> {
    pub forces: &'a mut BodyForces,
    pub friction: &'a mut Friction,
}

impl BodyCommands for PlayerBody<'_> {
    fn apply_force(&mut self, force: Vec2) {
        self.forces.pending_force += force;
    }

    fn apply_impulse(&mut self, impulse: Vec2) {
        self.forces.pending_impulse += impulse;
    }

    fn set_friction(&mut self, coefficient: f32) {
        *self.friction = player_friction(coefficient);
    }

    fn set_gravity_override(&mut self, gravity: Option<Vec2>) {
        self.forces.gravity_override = gravity;
    }

    fn set_damping(&mut self, damping: f32) {
        self.forces.damping = damping;
    }

    fn set_velocity_cap(&mut self, horizontal: f32, vertical: f32) {
        self.forces.max_horizontal_speed = horizontal;
        self.forces.max_vertical_speed = vertical;
    }
}

/// Fold pending force/impulse, gravity, damping and caps into a velocity,
/// then clear the accumulators.
pub fn integrate_velocity(
    forces: &mut BodyForces,
    velocity: Vec2,
    world_gravity: Vec2,
    dt: f32,
) -> Vec2 {
    let inv_mass = if forces.mass > 0.0 {
        1.0 / forces.mass
    } else {
        0.0
    };
    let gravity = forces.gravity_override.unwrap_or(world_gravity);

    let mut v = velocity + forces.pending_impulse * inv_mass;
    v += (forces.pending_force * inv_mass + gravity) * dt;
    v *= forces.damping.clamp(0.0, 1.0).powf(dt);
    let cap_x = forces.max_horizontal_speed.max(0.0);
    let cap_y = forces.max_vertical_speed.max(0.0);
    v.x = v.x.clamp(-cap_x, cap_x);
    v.y = v.y.clamp(-cap_y, cap_y);

    forces.pending_force = Vec2::ZERO;
    forces.pending_impulse = Vec2::ZERO;
    v
}
