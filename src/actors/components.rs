//! Actors domain: components shared by the player and enemies.

use bevy::prelude::*;

use crate::content::{ActorDef, BehaviorKind};

/// Data-driven identity every actor carries; `kind` selects its behavior.
#[derive(Component, Debug, Clone)]
pub struct Actor {
    pub id: String,
    pub kind: BehaviorKind,
}

/// Marker for non-player actors
#[derive(Component, Debug)]
pub struct Enemy;

#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

impl Health {
    pub fn new(max: f32) -> Self {
        Self { current: max, max }
    }

    pub fn take_damage(&mut self, amount: f32) -> f32 {
        let actual = amount.clamp(0.0, self.current);
        self.current -= actual;
        actual
    }

    pub fn restore(&mut self) {
        self.current = self.max;
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0.0
    }
}

/// Movement and attack parameters plus per-actor behavior state.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct ActorBrain {
    pub move_speed: f32,
    pub attack_range: f32,
    pub attack_cooldown: f32,
    pub attack_damage: f32,
    pub bounds: Option<(f32, f32)>,
    /// Current horizontal heading: -1, 0 or 1
    pub direction: f32,
    /// Seconds since the last attack
    pub since_attack: f32,
}

impl ActorBrain {
    pub fn from_def(def: &ActorDef) -> Self {
        Self {
            move_speed: def.move_speed,
            attack_range: def.attack_range,
            attack_cooldown: def.attack_cooldown,
            attack_damage: def.attack_damage,
            bounds: def.bounds,
            direction: 0.0,
            since_attack: 0.0,
        }
    }
}
