//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms, moving platforms)
    Ground,
    /// Wall surfaces
    Wall,
    /// Ladder regions - sensors, never block movement
    Ladder,
    /// Player character
    Player,
    /// Enemy characters
    Enemy,
    /// Player projectiles
    Projectile,
    /// Level goal sensor
    Goal,
    /// Pushable level items
    Item,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;

/// Marker for ladder sensors
#[derive(Component, Debug)]
pub struct Ladder;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalInput {
    #[default]
    None,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalInput {
    #[default]
    None,
    Up,
    Down,
}

/// Ground/ladder sensor results sampled before this step's forces.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct LocomotionSensors {
    pub on_ground: bool,
    pub ladder_contact: bool,
}

/// Displacement accumulated since the last animation frame advance.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Odometer {
    pub last: Vec2,
    /// Displacement of the most recent step
    pub delta: Vec2,
    pub x: f32,
    pub y: f32,
}

impl Odometer {
    pub fn at(position: Vec2) -> Self {
        Self {
            last: position,
            ..default()
        }
    }

    /// Forget accumulated travel, e.g. after a teleport.
    pub fn reset(&mut self, position: Vec2) {
        *self = Self::at(position);
    }

    /// Record a new position and return the displacement since the previous one.
    pub fn advance(&mut self, position: Vec2) -> Vec2 {
        let delta = position - self.last;
        self.last = position;
        self.delta = delta;
        self.x += delta.x;
        self.y += delta.y;
        delta
    }
}
