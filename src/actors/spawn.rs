//! Actors domain: enemy spawning from content definitions.

use avian2d::prelude::*;
use bevy::prelude::*;
use rand::Rng;

use crate::actors::{Actor, ActorBrain, Enemy, Health};
use crate::content::{ActorDef, BehaviorKind, ContentRegistry};
use crate::core::RunConfig;
use crate::movement::{BodyForces, GameLayer, LocomotionTuning, MotionProfile};

/// RNG stream reserved for enemy attack timers
const ENEMY_RNG_STREAM: u64 = 1;
const ENEMY_FRICTION: f32 = 0.6;

#[derive(Bundle)]
pub struct EnemyBundle {
    pub enemy: Enemy,
    pub actor: Actor,
    pub health: Health,
    pub brain: ActorBrain,
    pub sprite: Sprite,
    pub transform: Transform,
    pub rigid_body: RigidBody,
    pub collider: Collider,
    pub collision_layers: CollisionLayers,
    pub velocity: LinearVelocity,
    pub locked_axes: LockedAxes,
    pub gravity_scale: GravityScale,
    pub friction: Friction,
    pub forces: BodyForces,
}

impl EnemyBundle {
    /// `None` when the definition has no spawn position.
    pub fn from_def(def: &ActorDef, tuning: &LocomotionTuning) -> Option<Self> {
        let (x, y) = def.spawn?;
        let size = Vec2::new(def.size.0, def.size.1);
        let color = match def.kind {
            BehaviorKind::StaticEnemy => Color::srgb(0.8, 0.5, 0.2),
            _ => Color::srgb(0.8, 0.2, 0.2),
        };

        Some(Self {
            enemy: Enemy,
            actor: Actor {
                id: def.id.clone(),
                kind: def.kind,
            },
            health: Health::new(def.health),
            brain: ActorBrain::from_def(def),
            sprite: Sprite {
                color,
                custom_size: Some(size),
                ..default()
            },
            transform: Transform::from_xyz(x, y, 0.5),
            rigid_body: RigidBody::Dynamic,
            collider: Collider::rectangle(size.x, size.y),
            collision_layers: CollisionLayers::new(
                GameLayer::Enemy,
                [
                    GameLayer::Ground,
                    GameLayer::Wall,
                    GameLayer::Player,
                    GameLayer::Projectile,
                    GameLayer::Item,
                ],
            ),
            velocity: LinearVelocity::default(),
            locked_axes: LockedAxes::ROTATION_LOCKED,
            gravity_scale: GravityScale(0.0),
            friction: Friction::new(ENEMY_FRICTION),
            forces: BodyForces::new(tuning.player_mass, &MotionProfile::ground(tuning)),
        })
    }
}

pub(crate) fn spawn_enemies(
    mut commands: Commands,
    registry: Res<ContentRegistry>,
    tuning: Res<LocomotionTuning>,
    run_config: Res<RunConfig>,
) {
    let mut rng = run_config.rng(ENEMY_RNG_STREAM);

    for def in registry.enemies() {
        let Some(mut bundle) = EnemyBundle::from_def(def, &tuning) else {
            warn!("Enemy '{}' has no spawn position, skipping", def.id);
            continue;
        };

        // Stagger first attacks so enemies spawned together don't strike in sync
        if bundle.brain.attack_cooldown > 0.0 {
            bundle.brain.since_attack = rng.random_range(0.0..bundle.brain.attack_cooldown);
        }

        info!(
            "Spawning {:?} '{}' at {:?}",
            def.kind,
            def.id,
            bundle.transform.translation.truncate()
        );
        commands.spawn(bundle);
    }
}
