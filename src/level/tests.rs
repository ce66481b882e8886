//! Level domain: tests for platform motion, progress and layout.

use bevy::ecs::message::Messages;
use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;

use super::systems::finish_level;
use super::{LevelCompletedEvent, LevelProgress, PieceKind, PlayerStart, bounce, test_level};
use crate::movement::RespawnPlayerEvent;

#[test]
fn test_bounce_reverses_past_bounds() {
    let min = Vec2::new(-150.0, 0.0);
    let max = Vec2::new(150.0, 0.0);

    let v = bounce(Vec2::new(151.0, 0.0), Vec2::new(100.0, 0.0), min, max);
    assert_eq!(v, Vec2::new(-100.0, 0.0));

    let v = bounce(Vec2::new(-151.0, 0.0), Vec2::new(-100.0, 0.0), min, max);
    assert_eq!(v, Vec2::new(100.0, 0.0));
}

#[test]
fn test_bounce_keeps_velocity_inside_or_returning() {
    let min = Vec2::new(-150.0, -250.0);
    let max = Vec2::new(150.0, 150.0);

    // Inside the range
    let v = bounce(Vec2::ZERO, Vec2::new(100.0, 80.0), min, max);
    assert_eq!(v, Vec2::new(100.0, 80.0));

    // Outside but already heading back
    let v = bounce(Vec2::new(160.0, 0.0), Vec2::new(-100.0, 0.0), min, max);
    assert_eq!(v, Vec2::new(-100.0, 0.0));
}

#[test]
fn test_bounce_axes_are_independent() {
    let v = bounce(
        Vec2::new(0.0, 200.0),
        Vec2::new(50.0, 80.0),
        Vec2::new(-150.0, -250.0),
        Vec2::new(150.0, 150.0),
    );
    assert_eq!(v, Vec2::new(50.0, -80.0));
}

#[test]
fn test_level_progress_advances() {
    let mut progress = LevelProgress { level: 1 };
    assert_eq!(progress.complete(), 1);
    assert_eq!(progress.complete(), 2);
    assert_eq!(progress.level, 3);

    let mut fresh = LevelProgress::default();
    assert_eq!(fresh.complete(), 1);
    assert_eq!(fresh.level, 2);
}

#[test]
fn test_player_start_stands_on_floor() {
    let start = PlayerStart::default().0;
    let floor = test_level()
        .into_iter()
        .find(|p| p.kind == PieceKind::Ground)
        .expect("level has a floor");

    let floor_top = floor.center.y + floor.size.y / 2.0;
    let player_bottom = start.y - 64.0 / 2.0;
    assert!(player_bottom >= floor_top);
    assert!((start.x - floor.center.x).abs() < floor.size.x / 2.0);
}

#[test]
fn test_ladder_reaches_ledge_from_floor() {
    let level = test_level();
    let ladder = level
        .iter()
        .find(|p| p.kind == PieceKind::Ladder)
        .expect("level has a ladder");

    let ladder_bottom = ladder.center.y - ladder.size.y / 2.0;
    let ladder_top = ladder.center.y + ladder.size.y / 2.0;
    assert_eq!(ladder_bottom, -300.0);
    assert!(ladder_top >= 80.0);
}

#[test]
fn test_moving_platforms_start_within_bounds() {
    for piece in test_level() {
        if let PieceKind::Moving(platform) = piece.kind {
            assert!(piece.center.cmpge(platform.min).all());
            assert!(piece.center.cmple(platform.max).all());
            assert_ne!(platform.speed, Vec2::ZERO);
        }
    }
}

#[test]
fn test_level_has_single_goal() {
    let goals = test_level()
        .iter()
        .filter(|p| p.kind == PieceKind::Goal)
        .count();
    assert_eq!(goals, 1);
}

#[test]
fn test_items_rest_on_floor_or_each_other() {
    let level = test_level();
    let items: Vec<_> = level.iter().filter(|p| p.kind == PieceKind::Item).collect();
    assert!(!items.is_empty());

    for item in &items {
        let bottom = item.center.y - item.size.y / 2.0;
        let supported = bottom == -300.0
            || items.iter().any(|other| {
                other.center.x == item.center.x
                    && other.center.y + other.size.y / 2.0 == bottom
            });
        assert!(supported, "item at {:?} is floating", item.center);
    }
}

#[test]
fn test_level_fits_fixed_window() {
    for piece in test_level() {
        let min = piece.center - piece.size / 2.0;
        let max = piece.center + piece.size / 2.0;
        assert!(min.cmpge(Vec2::new(-800.0, -480.0)).all(), "{:?} leaves the window", piece);
        assert!(max.cmple(Vec2::new(800.0, 480.0)).all(), "{:?} leaves the window", piece);
    }
}

#[test]
fn test_completion_advances_level_once_per_frame() {
    let mut world = World::new();
    world.insert_resource(LevelProgress { level: 1 });
    world.init_resource::<Messages<LevelCompletedEvent>>();
    world.init_resource::<Messages<RespawnPlayerEvent>>();

    {
        let mut completed = world.resource_mut::<Messages<LevelCompletedEvent>>();
        completed.write(LevelCompletedEvent { level: 1 });
        completed.write(LevelCompletedEvent { level: 1 });
    }

    world.run_system_once(finish_level).expect("level system runs");
    assert_eq!(world.resource::<LevelProgress>().level, 2);
    assert_eq!(world.resource::<Messages<RespawnPlayerEvent>>().len(), 1);
}
