//! Validation for tuning values and actor definitions.

use super::data::*;
use super::registry::ContentRegistry;
use crate::movement::LocomotionTuning;

/// A validation error with context about what failed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub source_type: &'static str,
    pub source_id: String,
    pub field: &'static str,
    pub problem: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} '{}' has invalid field '{}': {}",
            self.source_type, self.source_id, self.field, self.problem
        )
    }
}

/// Helper macro for checking a value is finite and not negative
macro_rules! check_non_negative {
    ($errors:expr, $source_type:expr, $source_id:expr, $field:expr, $value:expr) => {
        if !$value.is_finite() || $value < 0.0 {
            $errors.push(ValidationError {
                source_type: $source_type,
                source_id: $source_id.to_string(),
                field: $field,
                problem: format!("expected a finite value >= 0, got {}", $value),
            });
        }
    };
}

/// Helper macro for checking a value is finite and strictly positive
macro_rules! check_positive {
    ($errors:expr, $source_type:expr, $source_id:expr, $field:expr, $value:expr) => {
        if !$value.is_finite() || $value <= 0.0 {
            $errors.push(ValidationError {
                source_type: $source_type,
                source_id: $source_id.to_string(),
                field: $field,
                problem: format!("expected a finite value > 0, got {}", $value),
            });
        }
    };
}

/// Validate the locomotion tuning. Returns an empty list when usable.
pub fn validate_tuning(tuning: &LocomotionTuning) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let id = "locomotion";

    check_positive!(errors, "Tuning", id, "gravity", tuning.gravity);
    check_positive!(errors, "Tuning", id, "player_mass", tuning.player_mass);
    check_positive!(errors, "Tuning", id, "bullet_mass", tuning.bullet_mass);
    check_positive!(errors, "Tuning", id, "max_horizontal_speed", tuning.max_horizontal_speed);
    check_positive!(errors, "Tuning", id, "max_vertical_speed", tuning.max_vertical_speed);
    check_non_negative!(errors, "Tuning", id, "ground_force", tuning.ground_force);
    check_non_negative!(errors, "Tuning", id, "air_force", tuning.air_force);
    check_non_negative!(errors, "Tuning", id, "climb_force", tuning.climb_force);
    check_non_negative!(errors, "Tuning", id, "jump_impulse", tuning.jump_impulse);
    check_non_negative!(errors, "Tuning", id, "player_friction", tuning.player_friction);
    check_non_negative!(errors, "Tuning", id, "dead_zone", tuning.dead_zone);
    check_non_negative!(
        errors,
        "Tuning",
        id,
        "distance_to_change_texture",
        tuning.distance_to_change_texture
    );
    check_non_negative!(errors, "Tuning", id, "bullet_move_force", tuning.bullet_move_force);
    check_non_negative!(errors, "Tuning", id, "bullet_gravity", tuning.bullet_gravity);

    for (field, damping) in [
        ("player_damping", tuning.player_damping),
        ("ladder_damping", tuning.ladder_damping),
    ] {
        if !(0.0..=1.0).contains(&damping) {
            errors.push(ValidationError {
                source_type: "Tuning",
                source_id: id.to_string(),
                field,
                problem: format!("retention per second must be within 0..=1, got {}", damping),
            });
        }
    }

    if !tuning.bullet_cull_y.is_finite() {
        errors.push(ValidationError {
            source_type: "Tuning",
            source_id: id.to_string(),
            field: "bullet_cull_y",
            problem: "must be finite".to_string(),
        });
    }

    errors
}

/// Validate every actor definition in the registry.
/// Returns a list of validation errors, empty if all actors are usable.
pub fn validate_actors(registry: &ContentRegistry) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (id, def) in &registry.actors {
        check_positive!(errors, "Actor", id, "health", def.health);
        check_positive!(errors, "Actor", id, "size.0", def.size.0);
        check_positive!(errors, "Actor", id, "size.1", def.size.1);

        if def.kind == BehaviorKind::Player {
            continue;
        }

        check_non_negative!(errors, "Actor", id, "move_speed", def.move_speed);
        check_non_negative!(errors, "Actor", id, "attack_range", def.attack_range);
        check_non_negative!(errors, "Actor", id, "attack_cooldown", def.attack_cooldown);
        check_non_negative!(errors, "Actor", id, "attack_damage", def.attack_damage);

        if def.spawn.is_none() {
            errors.push(ValidationError {
                source_type: "Actor",
                source_id: id.clone(),
                field: "spawn",
                problem: "enemies need a spawn position".to_string(),
            });
        }

        if let Some((left, right)) = def.bounds.filter(|(left, right)| left > right) {
            errors.push(ValidationError {
                source_type: "Actor",
                source_id: id.clone(),
                field: "bounds",
                problem: format!("left bound {} is right of right bound {}", left, right),
            });
        }
    }

    if registry.player().is_none() {
        errors.push(ValidationError {
            source_type: "Registry",
            source_id: "actors".to_string(),
            field: "kind",
            problem: "no actor with kind Player".to_string(),
        });
    }

    errors
}
