//! Movement domain: player bootstrap and respawn.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::actors::{Actor, Health};
use crate::content::{BehaviorKind, ContentRegistry};
use crate::level::PlayerStart;
use crate::movement::{
    BodyForces, GameLayer, LocomotionController, LocomotionPose, LocomotionSensors,
    LocomotionTuning, MotionProfile, Odometer, Player, RespawnPlayerEvent, player_friction,
};

pub const PLAYER_SIZE: Vec2 = Vec2::new(40.0, 64.0);
const DEFAULT_PLAYER_HEALTH: f32 = 100.0;

/// Spawn the player from the content registry's player entry.
pub(crate) fn bootstrap_player(
    mut commands: Commands,
    tuning: Res<LocomotionTuning>,
    registry: Res<ContentRegistry>,
    start: Res<PlayerStart>,
    existing_player: Query<Entity, With<Player>>,
) {
    // Don't spawn if player already exists (e.g. returning from pause)
    if !existing_player.is_empty() {
        return;
    }

    let (id, health) = match registry.player() {
        Some(def) => (def.id.clone(), def.health),
        None => {
            warn!("No player actor defined, using default health");
            ("player".to_string(), DEFAULT_PLAYER_HEALTH)
        }
    };

    info!(
        "Spawning player '{}': health={}, start={:?}, jump_height={:.0}",
        id,
        health,
        start.0,
        tuning.jump_height()
    );

    commands.spawn((
        // Identity & Locomotion
        (
            Player,
            Actor {
                id,
                kind: BehaviorKind::Player,
            },
            Health::new(health),
            LocomotionController::default(),
            LocomotionSensors::default(),
            LocomotionPose::default(),
            Odometer::at(start.0),
        ),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_xyz(start.0.x, start.0.y, 1.0),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(0.0), // Gravity comes from the active motion profile
            player_friction(tuning.player_friction),
            BodyForces::new(tuning.player_mass, &MotionProfile::ground(&tuning)),
            CollidingEntities::default(),
            CollisionLayers::new(
                GameLayer::Player,
                [
                    GameLayer::Ground,
                    GameLayer::Wall,
                    GameLayer::Ladder,
                    GameLayer::Enemy,
                    GameLayer::Goal,
                    GameLayer::Item,
                ],
            ),
        ),
    ));
}

pub(crate) fn respawn_player(
    mut events: MessageReader<RespawnPlayerEvent>,
    start: Res<PlayerStart>,
    mut query: Query<(&mut Transform, &mut LinearVelocity, &mut Odometer), With<Player>>,
) {
    let Some(event) = events.read().last() else {
        return;
    };

    for (mut transform, mut velocity, mut odometer) in &mut query {
        transform.translation.x = start.0.x;
        transform.translation.y = start.0.y;
        velocity.0 = Vec2::ZERO;
        odometer.reset(start.0);
        info!("Player respawned ({:?})", event.reason);
    }
}
