//! Actors domain: behavior lookup table and per-kind step functions.

use crate::actors::ActorBrain;
use crate::content::BehaviorKind;

/// What a behavior sees for one step.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BehaviorInput {
    pub actor_x: f32,
    pub player_x: Option<f32>,
    pub dt: f32,
}

/// What a behavior decided for one step.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BehaviorOutput {
    /// Horizontal velocity to set; `None` leaves the body alone
    pub velocity_x: Option<f32>,
    /// Damage dealt to the player this step
    pub attack: Option<f32>,
}

pub type BehaviorFn = fn(&mut ActorBrain, &BehaviorInput) -> BehaviorOutput;

pub const BEHAVIOR_TABLE: [(BehaviorKind, BehaviorFn); 3] = [
    (BehaviorKind::Player, player_driven),
    (BehaviorKind::ChaserEnemy, chase_player),
    (BehaviorKind::StaticEnemy, hold_position),
];

pub fn behavior_for(kind: BehaviorKind) -> BehaviorFn {
    BEHAVIOR_TABLE
        .iter()
        .find(|(k, _)| *k == kind)
        .map(|(_, f)| *f)
        .unwrap_or(player_driven)
}

/// The locomotion controller owns the player; nothing to do here.
fn player_driven(_brain: &mut ActorBrain, _input: &BehaviorInput) -> BehaviorOutput {
    BehaviorOutput::default()
}

fn chase_player(brain: &mut ActorBrain, input: &BehaviorInput) -> BehaviorOutput {
    brain.direction = match input.player_x {
        Some(px) if px > input.actor_x => 1.0,
        Some(px) if px < input.actor_x => -1.0,
        _ => 0.0,
    };

    if let Some((left, right)) = brain.bounds {
        if input.actor_x < left && brain.direction < 0.0 {
            brain.direction = 1.0;
        } else if input.actor_x > right && brain.direction > 0.0 {
            brain.direction = -1.0;
        }
    }

    BehaviorOutput {
        velocity_x: Some(brain.direction * brain.move_speed),
        attack: attack_if_ready(brain, input),
    }
}

fn hold_position(brain: &mut ActorBrain, input: &BehaviorInput) -> BehaviorOutput {
    brain.direction = 0.0;
    BehaviorOutput {
        velocity_x: Some(0.0),
        attack: attack_if_ready(brain, input),
    }
}

fn attack_if_ready(brain: &mut ActorBrain, input: &BehaviorInput) -> Option<f32> {
    let in_range = input
        .player_x
        .is_some_and(|px| (input.actor_x - px).abs() < brain.attack_range);

    let attack = if in_range && brain.since_attack >= brain.attack_cooldown {
        brain.since_attack = 0.0;
        Some(brain.attack_damage)
    } else {
        None
    };

    brain.since_attack += input.dt;
    attack
}
