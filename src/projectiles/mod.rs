//! Projectiles domain: player bullets aimed with the mouse.

mod components;
mod launch;
mod systems;

#[cfg(test)]
mod tests;

pub use components::Bullet;
pub use launch::{Launch, launch_toward};

use bevy::prelude::*;

use crate::core::GameState;
use crate::projectiles::systems::{cull_projectiles, fire_projectile, resolve_bullet_hits};

pub struct ProjectilesPlugin;

impl Plugin for ProjectilesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (fire_projectile, resolve_bullet_hits, cull_projectiles)
                .run_if(in_state(GameState::Playing)),
        );
    }
}
