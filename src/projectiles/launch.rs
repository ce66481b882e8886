//! Projectiles domain: launch geometry.

use bevy::prelude::*;

/// Where a bullet appears and the one-step force that sends it off.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Launch {
    pub position: Vec2,
    /// Aim angle in radians, counter-clockwise from +x
    pub angle: f32,
    pub force: Vec2,
}

/// Aim from `origin` toward `target`. The bullet starts outside the shooter,
/// half its largest dimension along the aim.
pub fn launch_toward(origin: Vec2, target: Vec2, shooter_size: Vec2, move_force: f32) -> Launch {
    let offset = target - origin;
    let angle = offset.y.atan2(offset.x);
    let aim = Vec2::from_angle(angle);

    Launch {
        position: origin + aim * shooter_size.max_element() / 2.0,
        angle,
        force: aim * move_force,
    }
}
