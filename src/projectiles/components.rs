//! Projectiles domain: components.

use bevy::prelude::*;

#[derive(Component, Debug)]
pub struct Bullet {
    pub damage: f32,
}
