//! Level domain: test level geometry, moving platforms and the goal.

mod components;
mod events;
mod layout;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{Goal, Item, LevelGeometry, MovingPlatform, bounce};
pub use events::LevelCompletedEvent;
pub use layout::{ITEM_FRICTION, LevelPiece, PieceKind, WALL_FRICTION, test_level};
pub use resources::{LevelProgress, PlayerStart};

use bevy::prelude::*;

use crate::core::GameState;
use crate::level::layout::spawn_level;
use crate::level::systems::{detect_goal, finish_level, move_platforms};
use crate::movement::MovementSet;

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerStart>()
            .insert_resource(LevelProgress { level: 1 })
            .add_message::<LevelCompletedEvent>()
            .add_systems(OnEnter(GameState::Playing), spawn_level)
            .add_systems(FixedUpdate, move_platforms.in_set(MovementSet::Drive))
            .add_systems(
                Update,
                (detect_goal, finish_level)
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
