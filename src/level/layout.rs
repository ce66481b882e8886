//! Level domain: the built-in test level and its spawning.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::level::{Goal, Item, LevelGeometry, MovingPlatform};
use crate::movement::{BodyForces, GameLayer, Ground, Ladder, LocomotionTuning, Wall};

/// Friction of floors, walls and platforms
pub const WALL_FRICTION: f32 = 0.7;
/// Friction of pushable crates
pub const ITEM_FRICTION: f32 = 0.6;
const ITEM_MASS: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PieceKind {
    Ground,
    Wall,
    Ladder,
    Goal,
    /// Pushable crate; bullets destroy it
    Item,
    Moving(MovingPlatform),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelPiece {
    pub kind: PieceKind,
    pub center: Vec2,
    pub size: Vec2,
}

impl LevelPiece {
    const fn new(kind: PieceKind, x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            kind,
            center: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }
}

/// Floor with walls either side, a ladder up to the left ledge, two moving
/// platforms, a stack of crates and a goal on the upper right platform.
///
/// The whole layout fits inside the fixed 1600x960 window around the origin
/// and the camera never moves, so a wider or taller level needs a camera
/// that follows the player first.
pub fn test_level() -> Vec<LevelPiece> {
    vec![
        // Floor and walls
        LevelPiece::new(PieceKind::Ground, 0.0, -320.0, 1500.0, 40.0),
        LevelPiece::new(PieceKind::Wall, -760.0, 0.0, 40.0, 960.0),
        LevelPiece::new(PieceKind::Wall, 760.0, 0.0, 40.0, 960.0),
        // Left ledge and its ladder
        LevelPiece::new(PieceKind::Ground, -440.0, 80.0, 240.0, 20.0),
        LevelPiece::new(PieceKind::Ladder, -290.0, -105.0, 48.0, 390.0),
        // Middle platform
        LevelPiece::new(PieceKind::Ground, 200.0, 0.0, 200.0, 20.0),
        // Moving platforms
        LevelPiece::new(
            PieceKind::Moving(MovingPlatform {
                min: Vec2::new(-150.0, -150.0),
                max: Vec2::new(150.0, -150.0),
                speed: Vec2::new(100.0, 0.0),
            }),
            -50.0,
            -150.0,
            160.0,
            20.0,
        ),
        LevelPiece::new(
            PieceKind::Moving(MovingPlatform {
                min: Vec2::new(550.0, -250.0),
                max: Vec2::new(550.0, 150.0),
                speed: Vec2::new(0.0, 80.0),
            }),
            550.0,
            -200.0,
            160.0,
            20.0,
        ),
        // Crates
        LevelPiece::new(PieceKind::Item, -100.0, -280.0, 40.0, 40.0),
        LevelPiece::new(PieceKind::Item, -100.0, -240.0, 40.0, 40.0),
        LevelPiece::new(PieceKind::Item, -56.0, -280.0, 40.0, 40.0),
        // Goal platform
        LevelPiece::new(PieceKind::Ground, 650.0, 200.0, 160.0, 20.0),
        LevelPiece::new(PieceKind::Goal, 650.0, 250.0, 40.0, 80.0),
    ]
}

pub(crate) fn spawn_level(
    mut commands: Commands,
    tuning: Res<LocomotionTuning>,
    existing: Query<(), With<LevelGeometry>>,
) {
    if !existing.is_empty() {
        return;
    }

    let ground_color = Color::srgb(0.35, 0.4, 0.35);
    let wall_color = Color::srgb(0.25, 0.25, 0.35);
    let ladder_color = Color::srgba(0.6, 0.45, 0.25, 0.8);
    let goal_color = Color::srgb(0.9, 0.8, 0.2);
    let item_color = Color::srgb(0.55, 0.4, 0.25);

    let solid_layers = |layer: GameLayer| {
        CollisionLayers::new(
            layer,
            [
                GameLayer::Player,
                GameLayer::Enemy,
                GameLayer::Projectile,
                GameLayer::Item,
            ],
        )
    };

    let pieces = test_level();
    info!("Spawning test level: {} pieces", pieces.len());

    for piece in pieces {
        let sprite = |color: Color| Sprite {
            color,
            custom_size: Some(piece.size),
            ..default()
        };
        let transform = Transform::from_xyz(piece.center.x, piece.center.y, 0.0);
        let collider = Collider::rectangle(piece.size.x, piece.size.y);

        match piece.kind {
            PieceKind::Ground => {
                commands.spawn((
                    LevelGeometry,
                    Ground,
                    sprite(ground_color),
                    transform,
                    RigidBody::Static,
                    collider,
                    Friction::new(WALL_FRICTION),
                    solid_layers(GameLayer::Ground),
                ));
            }
            PieceKind::Wall => {
                commands.spawn((
                    LevelGeometry,
                    Wall,
                    sprite(wall_color),
                    transform,
                    RigidBody::Static,
                    collider,
                    Friction::new(WALL_FRICTION),
                    solid_layers(GameLayer::Wall),
                ));
            }
            PieceKind::Ladder => {
                commands.spawn((
                    LevelGeometry,
                    Ladder,
                    sprite(ladder_color),
                    transform.with_translation(piece.center.extend(-0.5)),
                    RigidBody::Static,
                    collider,
                    Sensor,
                    CollisionLayers::new(GameLayer::Ladder, [GameLayer::Player]),
                ));
            }
            PieceKind::Goal => {
                commands.spawn((
                    LevelGeometry,
                    Goal,
                    sprite(goal_color),
                    transform,
                    RigidBody::Static,
                    collider,
                    Sensor,
                    CollisionEventsEnabled,
                    CollisionLayers::new(GameLayer::Goal, [GameLayer::Player]),
                ));
            }
            PieceKind::Item => {
                commands.spawn((
                    LevelGeometry,
                    Item,
                    sprite(item_color),
                    transform,
                    RigidBody::Dynamic,
                    collider,
                    LockedAxes::ROTATION_LOCKED,
                    Friction::new(ITEM_FRICTION),
                    LinearVelocity::default(),
                    GravityScale(0.0),
                    BodyForces::free(ITEM_MASS, tuning.world_gravity(), 1.0),
                    CollisionLayers::new(
                        GameLayer::Item,
                        [
                            GameLayer::Ground,
                            GameLayer::Wall,
                            GameLayer::Player,
                            GameLayer::Enemy,
                            GameLayer::Projectile,
                            GameLayer::Item,
                        ],
                    ),
                ));
            }
            PieceKind::Moving(platform) => {
                commands.spawn((
                    LevelGeometry,
                    Ground,
                    platform,
                    sprite(ground_color),
                    transform,
                    RigidBody::Kinematic,
                    collider,
                    Friction::new(WALL_FRICTION),
                    LinearVelocity(platform.speed),
                    solid_layers(GameLayer::Ground),
                ));
            }
        }
    }
}
