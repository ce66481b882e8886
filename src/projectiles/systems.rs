//! Projectiles domain: firing, hits and culling.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use std::collections::HashSet;

use crate::actors::{DamageEvent, Enemy};
use crate::level::Item;
use crate::movement::{BodyForces, GameLayer, Ground, LocomotionTuning, PLAYER_SIZE, Player, Wall};
use crate::projectiles::{Bullet, launch_toward};

const BULLET_SIZE: f32 = 8.0;
const BULLET_DAMAGE: f32 = 25.0;
/// Bullets keep all their velocity; only gravity bends them
const BULLET_DAMPING: f32 = 1.0;

pub(crate) fn fire_projectile(
    mut commands: Commands,
    mouse: Res<ButtonInput<MouseButton>>,
    tuning: Res<LocomotionTuning>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform)>,
    player: Query<&Transform, With<Player>>,
) {
    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }

    let Ok(player_transform) = player.single() else {
        return;
    };
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };
    let Ok(target) = camera.viewport_to_world_2d(camera_transform, cursor) else {
        return;
    };

    let launch = launch_toward(
        player_transform.translation.truncate(),
        target,
        PLAYER_SIZE,
        tuning.bullet_move_force,
    );

    let mut forces = BodyForces::free(
        tuning.bullet_mass,
        Vec2::new(0.0, -tuning.bullet_gravity),
        BULLET_DAMPING,
    );
    forces.pending_force = launch.force;

    debug!("Firing bullet from {:?} toward {:?}", launch.position, target);

    commands.spawn((
        Bullet {
            damage: BULLET_DAMAGE,
        },
        Sprite {
            color: Color::srgb(1.0, 0.9, 0.3),
            custom_size: Some(Vec2::splat(BULLET_SIZE)),
            ..default()
        },
        Transform::from_xyz(launch.position.x, launch.position.y, 1.0)
            .with_rotation(Quat::from_rotation_z(launch.angle)),
        RigidBody::Dynamic,
        Collider::circle(BULLET_SIZE / 2.0),
        Sensor,
        CollisionEventsEnabled,
        CollisionLayers::new(
            GameLayer::Projectile,
            [
                GameLayer::Ground,
                GameLayer::Wall,
                GameLayer::Enemy,
                GameLayer::Item,
            ],
        ),
        LinearVelocity::default(),
        GravityScale(0.0),
        forces,
    ));
}

pub(crate) fn resolve_bullet_hits(
    mut commands: Commands,
    mut collision_start_events: MessageReader<CollisionStart>,
    mut damage_events: MessageWriter<DamageEvent>,
    bullets: Query<&Bullet>,
    solids: Query<(), Or<(With<Ground>, With<Wall>)>>,
    enemies: Query<(), With<Enemy>>,
    items: Query<(), With<Item>>,
) {
    let mut spent = HashSet::new();

    for event in collision_start_events.read() {
        let (bullet_entity, other) = if bullets.contains(event.collider1) {
            (event.collider1, event.collider2)
        } else if bullets.contains(event.collider2) {
            (event.collider2, event.collider1)
        } else {
            continue;
        };

        if spent.contains(&bullet_entity) {
            continue;
        }

        if enemies.contains(other) {
            if let Ok(bullet) = bullets.get(bullet_entity) {
                damage_events.write(DamageEvent {
                    source: bullet_entity,
                    target: other,
                    amount: bullet.damage,
                });
            }
        } else if items.contains(other) {
            // Bullets destroy the crate they hit
            if spent.insert(other) {
                commands.entity(other).despawn();
            }
        } else if !solids.contains(other) {
            continue;
        }

        spent.insert(bullet_entity);
        commands.entity(bullet_entity).despawn();
    }
}

pub(crate) fn cull_projectiles(
    mut commands: Commands,
    tuning: Res<LocomotionTuning>,
    query: Query<(Entity, &Transform), With<Bullet>>,
) {
    for (entity, transform) in &query {
        if transform.translation.y < tuning.bullet_cull_y {
            commands.entity(entity).despawn();
        }
    }
}
