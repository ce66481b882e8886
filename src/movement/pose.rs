//! Movement domain: locomotion pose selection from displacement.

use bevy::prelude::*;

use crate::movement::Odometer;

const WALK_FRAMES: u8 = 8;
const CLIMB_FRAMES: u8 = 2;

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LocomotionPose {
    #[default]
    Idle,
    Walk(u8),
    Jump,
    Fall,
    Climb(u8),
}

impl LocomotionPose {
    /// Placeholder shading until the character sheet lands.
    pub fn tint(self) -> Color {
        match self {
            LocomotionPose::Idle => Color::srgb(0.9, 0.9, 0.9),
            LocomotionPose::Walk(frame) => {
                let shade = if frame % 2 == 0 { 0.85 } else { 0.8 };
                Color::srgb(shade, shade, 0.9)
            }
            LocomotionPose::Jump => Color::srgb(0.95, 0.95, 0.7),
            LocomotionPose::Fall => Color::srgb(0.8, 0.8, 0.6),
            LocomotionPose::Climb(frame) => {
                let shade = if frame == 0 { 0.7 } else { 0.6 };
                Color::srgb(shade, 0.85, shade)
            }
        }
    }
}

/// Pick the next pose. `delta` is this step's displacement; the odometer must
/// already include it. Frame counters reset the odometer axis they consume.
pub fn select_pose(
    current: LocomotionPose,
    odometer: &mut Odometer,
    delta: Vec2,
    on_ground: bool,
    on_ladder: bool,
    dead_zone: f32,
    frame_distance: f32,
) -> LocomotionPose {
    if on_ladder && !on_ground {
        let mut frame = match current {
            LocomotionPose::Climb(f) => f,
            _ => 0,
        };
        if odometer.y.abs() > frame_distance {
            odometer.y = 0.0;
            frame = (frame + 1) % CLIMB_FRAMES;
        }
        return LocomotionPose::Climb(frame);
    }

    if !on_ground {
        if delta.y > dead_zone {
            return LocomotionPose::Jump;
        } else if delta.y < -dead_zone {
            return LocomotionPose::Fall;
        }
    }

    if delta.x.abs() <= dead_zone {
        return LocomotionPose::Idle;
    }

    let mut frame = match current {
        LocomotionPose::Walk(f) => f,
        _ => 0,
    };
    if odometer.x.abs() > frame_distance {
        odometer.x = 0.0;
        frame = (frame + 1) % WALK_FRAMES;
    }
    LocomotionPose::Walk(frame)
}
