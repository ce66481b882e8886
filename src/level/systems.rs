//! Level domain: moving platforms and goal detection.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::level::{Goal, LevelCompletedEvent, LevelProgress, MovingPlatform, bounce};
use crate::movement::{Player, RespawnPlayerEvent, RespawnReason};

pub(crate) fn move_platforms(
    mut query: Query<(&Transform, &MovingPlatform, &mut LinearVelocity)>,
) {
    for (transform, platform, mut velocity) in &mut query {
        let next = bounce(
            transform.translation.truncate(),
            velocity.0,
            platform.min,
            platform.max,
        );
        if next != velocity.0 {
            velocity.0 = next;
        }
    }
}

pub(crate) fn detect_goal(
    mut collision_start_events: MessageReader<CollisionStart>,
    mut completed_events: MessageWriter<LevelCompletedEvent>,
    progress: Res<LevelProgress>,
    goals: Query<(), With<Goal>>,
    players: Query<(), With<Player>>,
) {
    let mut touched = false;
    for event in collision_start_events.read() {
        touched |= (goals.contains(event.collider1) && players.contains(event.collider2))
            || (goals.contains(event.collider2) && players.contains(event.collider1));
    }

    // One completion per frame even if several contacts started
    if touched {
        completed_events.write(LevelCompletedEvent {
            level: progress.level.max(1),
        });
    }
}

pub(crate) fn finish_level(
    mut completed_events: MessageReader<LevelCompletedEvent>,
    mut respawn_events: MessageWriter<RespawnPlayerEvent>,
    mut progress: ResMut<LevelProgress>,
) {
    if completed_events.read().count() == 0 {
        return;
    }

    let level = progress.complete();
    info!("Level {} complete, starting level {}", level, progress.level);
    respawn_events.write(RespawnPlayerEvent {
        reason: RespawnReason::LevelCompleted,
    });
}
