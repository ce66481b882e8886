//! Level domain: components for level geometry.

use bevy::prelude::*;

/// Tags everything spawned as part of the level
#[derive(Component, Debug)]
pub struct LevelGeometry;

/// Pushable crate
#[derive(Component, Debug)]
pub struct Item;

/// Goal sensor; touching it completes the level
#[derive(Component, Debug)]
pub struct Goal;

/// Kinematic platform that travels between per-axis bounds.
/// Bounds are on the platform's center.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct MovingPlatform {
    pub min: Vec2,
    pub max: Vec2,
    pub speed: Vec2,
}

/// Reverse each velocity axis that has carried the center past its bound.
/// Axes moving back toward the range are left alone.
pub fn bounce(position: Vec2, velocity: Vec2, min: Vec2, max: Vec2) -> Vec2 {
    let axis = |p: f32, v: f32, lo: f32, hi: f32| {
        if (v > 0.0 && p > hi) || (v < 0.0 && p < lo) {
            -v
        } else {
            v
        }
    };

    Vec2::new(
        axis(position.x, velocity.x, min.x, max.x),
        axis(position.y, velocity.y, min.y, max.y),
    )
}
