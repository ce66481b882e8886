//! Content domain: RON-backed tuning and actor definitions.

mod data;
mod loader;
mod registry;
mod validation;

#[cfg(test)]
mod tests;

pub use data::{ActorDef, BehaviorKind, DataFile};
pub use loader::{ContentLoadError, LoadedContent, load_all_content, parse_ron};
pub use registry::ContentRegistry;
pub use validation::{ValidationError, validate_actors, validate_tuning};

use bevy::prelude::*;
use std::path::Path;

use crate::movement::LocomotionTuning;

pub const CONTENT_PATH: &str = "assets/data";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ContentRegistry>()
            .add_systems(Startup, load_content);
    }
}

/// Load, validate and install content. Invalid pieces are replaced by
/// built-in defaults rather than aborting startup.
fn load_content(mut commands: Commands) {
    let (loaded, load_errors) = load_all_content(Path::new(CONTENT_PATH));
    for error in &load_errors {
        error!("{}", error);
    }

    let LoadedContent {
        mut registry,
        mut tuning,
    } = loaded;

    let tuning_errors = validate_tuning(&tuning);
    if !tuning_errors.is_empty() {
        for error in &tuning_errors {
            warn!("{}", error);
        }
        warn!("Locomotion tuning rejected, using defaults");
        tuning = LocomotionTuning::default();
    }

    let actor_errors = validate_actors(&registry);
    for error in &actor_errors {
        warn!("{}", error);
        if error.source_type == "Actor" {
            registry.actors.remove(&error.source_id);
        }
    }
    if registry.player().is_none() {
        warn!("No usable player definition, using built-in actors");
        registry = ContentRegistry::builtin();
    }

    info!("{}", registry.summary());
    commands.insert_resource(tuning);
    commands.insert_resource(registry);
}
