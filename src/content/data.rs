//! Data definitions for the RON content files.
//!
//! These structs mirror the structure in assets/data/*.ron and are used
//! for deserialization. The ContentRegistry provides lookup by id.

use serde::{Deserialize, Serialize};

// ============================================================================
// Common wrapper for RON files with schema_version and items
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataFile<T> {
    pub schema_version: u32,
    pub items: Vec<T>,
}

// ============================================================================
// Actors (actors.ron)
// ============================================================================

/// Behavior dispatched for an actor each step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum BehaviorKind {
    /// Driven by the locomotion controller
    Player,
    /// Walks toward the player and attacks in range
    ChaserEnemy,
    /// Stands still and attacks in range
    StaticEnemy,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ActorDef {
    pub id: String,
    pub kind: BehaviorKind,
    pub health: f32,
    #[serde(default)]
    pub move_speed: f32,
    #[serde(default)]
    pub attack_range: f32,
    #[serde(default)]
    pub attack_cooldown: f32,
    #[serde(default)]
    pub attack_damage: f32,
    /// World position; the player uses the level start when absent
    #[serde(default)]
    pub spawn: Option<(f32, f32)>,
    /// Patrol bounds (left, right) for chasers
    #[serde(default)]
    pub bounds: Option<(f32, f32)>,
    #[serde(default = "default_actor_size")]
    pub size: (f32, f32),
}

fn default_actor_size() -> (f32, f32) {
    (40.0, 64.0)
}
