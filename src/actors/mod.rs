//! Actors domain: enemy behaviors, health and damage.

mod behavior;
mod components;
mod events;
mod spawn;
mod systems;

#[cfg(test)]
mod tests;

pub use behavior::{BEHAVIOR_TABLE, BehaviorFn, BehaviorInput, BehaviorOutput, behavior_for};
pub use components::{Actor, ActorBrain, Enemy, Health};
pub use events::{DamageEvent, DeathEvent};
pub use spawn::EnemyBundle;

use bevy::prelude::*;

use crate::actors::spawn::spawn_enemies;
use crate::actors::systems::{apply_damage, process_deaths, run_behaviors};
use crate::core::GameState;
use crate::movement::MovementSet;

pub struct ActorsPlugin;

impl Plugin for ActorsPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<DamageEvent>()
            .add_message::<DeathEvent>()
            .add_systems(
                OnTransition {
                    exited: GameState::Boot,
                    entered: GameState::Playing,
                },
                spawn_enemies,
            )
            .add_systems(FixedUpdate, run_behaviors.in_set(MovementSet::Drive))
            .add_systems(
                Update,
                (apply_damage, process_deaths)
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
