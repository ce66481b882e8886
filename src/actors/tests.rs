//! Actors domain: tests for behaviors, health and damage handling.

use bevy::ecs::message::Messages;
use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;

use super::systems::apply_damage;
use super::{
    Actor, ActorBrain, BehaviorInput, DamageEvent, DeathEvent, EnemyBundle, Health, behavior_for,
};
use crate::content::{BehaviorKind, ContentRegistry};
use crate::movement::LocomotionTuning;

fn brain() -> ActorBrain {
    ActorBrain {
        move_speed: 120.0,
        attack_range: 100.0,
        attack_cooldown: 1.0,
        attack_damage: 10.0,
        bounds: Some((100.0, 560.0)),
        direction: 0.0,
        since_attack: 0.0,
    }
}

fn input(actor_x: f32, player_x: Option<f32>) -> BehaviorInput {
    BehaviorInput {
        actor_x,
        player_x,
        dt: 0.5,
    }
}

// -----------------------------------------------------------------------------
// Behavior tests
// -----------------------------------------------------------------------------

#[test]
fn test_chaser_moves_toward_player() {
    let chase = behavior_for(BehaviorKind::ChaserEnemy);
    let mut brain = brain();

    let out = chase(&mut brain, &input(300.0, Some(500.0)));
    assert_eq!(out.velocity_x, Some(120.0));

    let out = chase(&mut brain, &input(300.0, Some(150.0)));
    assert_eq!(out.velocity_x, Some(-120.0));
}

#[test]
fn test_chaser_without_player_stands_still() {
    let chase = behavior_for(BehaviorKind::ChaserEnemy);
    let mut brain = brain();

    let out = chase(&mut brain, &input(300.0, None));
    assert_eq!(out.velocity_x, Some(0.0));
    assert_eq!(out.attack, None);
}

#[test]
fn test_chaser_turns_back_at_bounds() {
    let chase = behavior_for(BehaviorKind::ChaserEnemy);
    let mut brain = brain();

    // Player is left of the patrol range
    let out = chase(&mut brain, &input(90.0, Some(-400.0)));
    assert_eq!(out.velocity_x, Some(120.0));

    // Player is right of the patrol range
    let out = chase(&mut brain, &input(570.0, Some(900.0)));
    assert_eq!(out.velocity_x, Some(-120.0));
}

#[test]
fn test_attack_respects_range_and_cooldown() {
    let chase = behavior_for(BehaviorKind::ChaserEnemy);
    let mut brain = brain();
    brain.since_attack = 1.0;

    // Out of range
    assert_eq!(chase(&mut brain, &input(300.0, Some(450.0))).attack, None);

    // In range and ready
    assert_eq!(chase(&mut brain, &input(300.0, Some(350.0))).attack, Some(10.0));

    // Cooling down: 0.5s after the strike
    assert_eq!(chase(&mut brain, &input(300.0, Some(350.0))).attack, None);

    // 1.0s after the strike
    assert_eq!(chase(&mut brain, &input(300.0, Some(350.0))).attack, Some(10.0));
}

#[test]
fn test_static_enemy_holds_position_and_attacks() {
    let hold = behavior_for(BehaviorKind::StaticEnemy);
    let mut brain = brain();
    brain.since_attack = 5.0;

    let out = hold(&mut brain, &input(0.0, Some(50.0)));
    assert_eq!(out.velocity_x, Some(0.0));
    assert_eq!(out.attack, Some(10.0));
}

#[test]
fn test_player_kind_is_not_driven_by_behaviors() {
    let player = behavior_for(BehaviorKind::Player);
    let mut brain = brain();
    brain.since_attack = 5.0;

    let out = player(&mut brain, &input(0.0, Some(0.0)));
    assert_eq!(out.velocity_x, None);
    assert_eq!(out.attack, None);
    assert_eq!(brain.since_attack, 5.0);
}

// -----------------------------------------------------------------------------
// Health and spawn tests
// -----------------------------------------------------------------------------

#[test]
fn test_health_damage_clamps_at_zero() {
    let mut health = Health::new(30.0);

    assert_eq!(health.take_damage(20.0), 20.0);
    assert!(!health.is_dead());
    assert_eq!(health.take_damage(20.0), 10.0);
    assert!(health.is_dead());
    assert_eq!(health.take_damage(-5.0), 0.0);

    health.restore();
    assert_eq!(health.current, 30.0);
}

#[test]
fn test_enemy_bundle_requires_spawn() {
    let tuning = LocomotionTuning::default();
    let registry = ContentRegistry::builtin();
    let robot = &registry.enemies()[0];

    let bundle = EnemyBundle::from_def(robot, &tuning).expect("robot has a spawn");
    assert_eq!(bundle.transform.translation.truncate(), Vec2::new(300.0, -230.0));
    assert_eq!(bundle.brain.bounds, Some((100.0, 560.0)));
    assert_eq!(bundle.health.max, 100.0);

    let mut nowhere = (*robot).clone();
    nowhere.spawn = None;
    assert!(EnemyBundle::from_def(&nowhere, &tuning).is_none());
}

#[test]
fn test_lethal_damage_emits_one_death() {
    let mut world = World::new();
    world.init_resource::<Messages<DamageEvent>>();
    world.init_resource::<Messages<DeathEvent>>();

    let source = world.spawn_empty().id();
    let target = world
        .spawn((
            Actor {
                id: "robot".to_string(),
                kind: BehaviorKind::ChaserEnemy,
            },
            Health::new(15.0),
        ))
        .id();

    {
        let mut damage = world.resource_mut::<Messages<DamageEvent>>();
        for _ in 0..3 {
            damage.write(DamageEvent {
                source,
                target,
                amount: 10.0,
            });
        }
    }

    world
        .run_system_once(apply_damage)
        .expect("damage system runs");

    let health = world.get::<Health>(target).expect("target has health");
    assert!(health.is_dead());
    assert_eq!(world.resource::<Messages<DeathEvent>>().len(), 1);
}
