//! ContentRegistry resource providing lookups for loaded actor definitions.

use bevy::prelude::*;
use std::collections::HashMap;

use super::data::*;

/// Central registry for all loaded game content.
#[derive(Resource, Debug, Default)]
pub struct ContentRegistry {
    pub actors: HashMap<String, ActorDef>,
}

impl ContentRegistry {
    pub fn from_actors(actors: impl IntoIterator<Item = ActorDef>) -> Self {
        Self {
            actors: actors
                .into_iter()
                .map(|def| (def.id.clone(), def))
                .collect(),
        }
    }

    /// Actors used when assets/data/actors.ron cannot be loaded.
    pub fn builtin() -> Self {
        Self::from_actors([
            ActorDef {
                id: "player".to_string(),
                kind: BehaviorKind::Player,
                health: 100.0,
                move_speed: 0.0,
                attack_range: 0.0,
                attack_cooldown: 0.0,
                attack_damage: 0.0,
                spawn: None,
                bounds: None,
                size: (40.0, 64.0),
            },
            ActorDef {
                id: "robot".to_string(),
                kind: BehaviorKind::ChaserEnemy,
                health: 100.0,
                move_speed: 120.0,
                attack_range: 100.0,
                attack_cooldown: 1.0,
                attack_damage: 10.0,
                spawn: Some((300.0, -230.0)),
                bounds: Some((100.0, 560.0)),
                size: (40.0, 64.0),
            },
        ])
    }

    /// The player definition. With several, the lowest id wins so the choice
    /// is stable across runs.
    pub fn player(&self) -> Option<&ActorDef> {
        self.actors
            .values()
            .filter(|def| def.kind == BehaviorKind::Player)
            .min_by(|a, b| a.id.cmp(&b.id))
    }

    /// Non-player actors, sorted by id.
    pub fn enemies(&self) -> Vec<&ActorDef> {
        let mut enemies: Vec<_> = self
            .actors
            .values()
            .filter(|def| def.kind != BehaviorKind::Player)
            .collect();
        enemies.sort_by(|a, b| a.id.cmp(&b.id));
        enemies
    }

    /// Returns a summary of loaded content counts for logging.
    pub fn summary(&self) -> String {
        format!(
            "ContentRegistry loaded:\n\
             - Actors: {}\n\
             - Enemies: {}",
            self.actors.len(),
            self.enemies().len(),
        )
    }
}
