//! Projectiles domain: tests for launch geometry and culling.

use avian2d::prelude::*;
use bevy::ecs::message::Messages;
use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;

use super::systems::{cull_projectiles, resolve_bullet_hits};
use super::{Bullet, launch_toward};
use crate::actors::DamageEvent;
use crate::level::Item;
use crate::movement::{BodyForces, LocomotionTuning, integrate_velocity};

fn contact(a: Entity, b: Entity) -> CollisionStart {
    CollisionStart {
        collider1: a,
        collider2: b,
        body1: Some(a),
        body2: Some(b),
    }
}

fn approx(a: Vec2, b: Vec2) -> bool {
    (a - b).length() < 1e-3
}

#[test]
fn test_launch_offsets_along_aim() {
    let launch = launch_toward(Vec2::ZERO, Vec2::new(100.0, 0.0), Vec2::new(40.0, 64.0), 4500.0);
    assert!(approx(launch.position, Vec2::new(32.0, 0.0)));
    assert!(approx(launch.force, Vec2::new(4500.0, 0.0)));
    assert!(launch.angle.abs() < 1e-6);

    let launch = launch_toward(
        Vec2::new(10.0, 10.0),
        Vec2::new(10.0, -200.0),
        Vec2::new(40.0, 64.0),
        100.0,
    );
    assert!(approx(launch.position, Vec2::new(10.0, -22.0)));
    assert!(approx(launch.force, Vec2::new(0.0, -100.0)));
    assert!((launch.angle + std::f32::consts::FRAC_PI_2).abs() < 1e-6);
}

#[test]
fn test_launch_force_magnitude_ignores_distance() {
    let near = launch_toward(Vec2::ZERO, Vec2::new(3.0, 4.0), Vec2::splat(10.0), 500.0);
    let far = launch_toward(Vec2::ZERO, Vec2::new(300.0, 400.0), Vec2::splat(10.0), 500.0);

    assert!(approx(near.force, far.force));
    assert!((near.force.length() - 500.0).abs() < 1e-3);
}

#[test]
fn test_launch_force_is_applied_once() {
    let tuning = LocomotionTuning::default();
    let mut forces = BodyForces::free(
        tuning.bullet_mass,
        Vec2::new(0.0, -tuning.bullet_gravity),
        1.0,
    );
    forces.pending_force = Vec2::new(tuning.bullet_move_force, 0.0);

    let dt = 0.1;
    let v = integrate_velocity(&mut forces, Vec2::ZERO, tuning.world_gravity(), dt);
    // 4500 / 0.1 * 0.1 = 4500 across, bullet gravity only downward
    assert!(approx(v, Vec2::new(4500.0, -30.0)));

    let v = integrate_velocity(&mut forces, v, tuning.world_gravity(), dt);
    assert!(approx(v, Vec2::new(4500.0, -60.0)));
}

#[test]
fn test_cull_removes_fallen_bullets() {
    let mut world = World::new();
    world.insert_resource(LocomotionTuning::default());

    let fallen = world
        .spawn((Bullet { damage: 1.0 }, Transform::from_xyz(0.0, -700.0, 0.0)))
        .id();
    let flying = world
        .spawn((Bullet { damage: 1.0 }, Transform::from_xyz(0.0, 100.0, 0.0)))
        .id();

    world
        .run_system_once(cull_projectiles)
        .expect("cull system runs");

    assert!(world.get_entity(fallen).is_err());
    assert!(world.get_entity(flying).is_ok());
}

#[test]
fn test_bullet_destroys_item_it_hits() {
    let mut world = World::new();
    world.init_resource::<Messages<CollisionStart>>();
    world.init_resource::<Messages<DamageEvent>>();

    let bullet = world.spawn(Bullet { damage: 25.0 }).id();
    let second = world.spawn(Bullet { damage: 25.0 }).id();
    let item = world.spawn(Item).id();
    let bystander = world.spawn(Item).id();

    {
        let mut contacts = world.resource_mut::<Messages<CollisionStart>>();
        contacts.write(contact(item, bullet));
        // Both bullets reach the same crate in one step
        contacts.write(contact(second, item));
    }

    world
        .run_system_once(resolve_bullet_hits)
        .expect("hit system runs");

    assert!(world.get_entity(bullet).is_err());
    assert!(world.get_entity(item).is_err());
    assert!(world.get_entity(second).is_err());
    assert!(world.get_entity(bystander).is_ok());
    assert!(world.resource::<Messages<DamageEvent>>().is_empty());
}
