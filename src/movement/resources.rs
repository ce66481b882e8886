//! Movement domain: tuning, motion profiles and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Every force, cap and physics constant the player and projectiles use.
/// Loaded once from `assets/data/locomotion.ron`; missing fields fall back to
/// the defaults below.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LocomotionTuning {
    /// World gravity magnitude (pixels/s^2, pointing down)
    pub gravity: f32,
    pub player_mass: f32,
    /// Fraction of velocity retained per second while off a ladder
    pub player_damping: f32,
    /// Fraction of velocity retained per second while on a ladder
    pub ladder_damping: f32,
    /// Friction coefficient while no directional input is held
    pub player_friction: f32,
    /// Horizontal force while grounded or on a ladder
    pub ground_force: f32,
    /// Horizontal force while airborne
    pub air_force: f32,
    pub climb_force: f32,
    pub jump_impulse: f32,
    pub max_horizontal_speed: f32,
    pub max_vertical_speed: f32,
    /// Displacement below which facing and pose changes are suppressed
    pub dead_zone: f32,
    /// Distance travelled before the walk/climb frame advances
    pub distance_to_change_texture: f32,
    pub bullet_move_force: f32,
    pub bullet_mass: f32,
    pub bullet_gravity: f32,
    /// Bullets below this height are removed
    pub bullet_cull_y: f32,
}

impl Default for LocomotionTuning {
    fn default() -> Self {
        Self {
            gravity: 1500.0,
            player_mass: 2.0,
            player_damping: 0.4,
            ladder_damping: 0.0001,
            player_friction: 1.0,
            ground_force: 8000.0,
            air_force: 900.0,
            climb_force: 5000.0,
            jump_impulse: 1800.0,
            max_horizontal_speed: 450.0,
            max_vertical_speed: 1600.0,
            dead_zone: 0.1,
            distance_to_change_texture: 20.0,
            bullet_move_force: 4500.0,
            bullet_mass: 0.1,
            bullet_gravity: 300.0,
            bullet_cull_y: -600.0,
        }
    }
}

impl LocomotionTuning {
    pub fn world_gravity(&self) -> Vec2 {
        Vec2::new(0.0, -self.gravity)
    }

    /// Peak height of a standing jump: h = v^2 / (2g) with v = J / m.
    pub fn jump_height(&self) -> f32 {
        let v = self.jump_impulse / self.player_mass;
        v * v / (2.0 * self.gravity)
    }
}

/// Which motion profile is applied to the player body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileKind {
    #[default]
    Ground,
    Ladder,
}

impl ProfileKind {
    pub fn profile(self, tuning: &LocomotionTuning) -> MotionProfile {
        match self {
            ProfileKind::Ground => MotionProfile::ground(tuning),
            ProfileKind::Ladder => MotionProfile::ladder(tuning),
        }
    }
}

/// Gravity, damping and speed caps applied to a body as a unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionProfile {
    /// `None` means "use world gravity"
    pub gravity: Option<Vec2>,
    pub damping: f32,
    pub max_horizontal_speed: f32,
    pub max_vertical_speed: f32,
}

impl MotionProfile {
    pub fn ground(tuning: &LocomotionTuning) -> Self {
        Self {
            gravity: None,
            damping: tuning.player_damping,
            max_horizontal_speed: tuning.max_horizontal_speed,
            max_vertical_speed: tuning.max_vertical_speed,
        }
    }

    /// Ladders switch gravity off and climb at horizontal speed.
    pub fn ladder(tuning: &LocomotionTuning) -> Self {
        Self {
            gravity: Some(Vec2::ZERO),
            damping: tuning.ladder_damping,
            max_horizontal_speed: tuning.max_horizontal_speed,
            max_vertical_speed: tuning.max_horizontal_speed,
        }
    }
}

/// Held state of the movement keys, sampled every frame.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocomotionInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub jump: bool,
    /// Jump was pressed since the last controller step. Latched across frames
    /// with no fixed step; cleared once a step has seen it.
    pub jump_pressed: bool,
}
