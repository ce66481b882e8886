//! Level domain: level events.

use bevy::ecs::message::Message;

#[derive(Debug)]
pub struct LevelCompletedEvent {
    pub level: u32,
}

impl Message for LevelCompletedEvent {}
