//! Level domain: player start and completion tracking.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct PlayerStart(pub Vec2);

impl Default for PlayerStart {
    fn default() -> Self {
        Self(Vec2::new(-600.0, -260.0))
    }
}

#[derive(Resource, Debug, Default)]
pub struct LevelProgress {
    /// Number of the level currently being played, starting at 1
    pub level: u32,
}

impl LevelProgress {
    pub fn complete(&mut self) -> u32 {
        let finished = self.level.max(1);
        self.level = finished + 1;
        finished
    }
}
