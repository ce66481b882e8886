//! Content domain: tests for RON parsing, registry lookups and validation.

use std::path::Path;

use super::{
    ActorDef, BehaviorKind, CONTENT_PATH, ContentRegistry, DataFile, load_all_content, parse_ron,
    validate_actors, validate_tuning,
};
use crate::movement::LocomotionTuning;

fn chaser(id: &str) -> ActorDef {
    ActorDef {
        id: id.to_string(),
        kind: BehaviorKind::ChaserEnemy,
        health: 50.0,
        move_speed: 100.0,
        attack_range: 80.0,
        attack_cooldown: 1.0,
        attack_damage: 5.0,
        spawn: Some((0.0, 0.0)),
        bounds: Some((-100.0, 100.0)),
        size: (40.0, 64.0),
    }
}

// -----------------------------------------------------------------------------
// Parsing tests
// -----------------------------------------------------------------------------

#[test]
fn test_partial_tuning_uses_defaults() {
    let tuning: LocomotionTuning =
        parse_ron("inline", "(climb_force: 4000.0, jump_impulse: 1000.0)").expect("parses");

    assert_eq!(tuning.climb_force, 4000.0);
    assert_eq!(tuning.jump_impulse, 1000.0);
    assert_eq!(tuning.ground_force, LocomotionTuning::default().ground_force);
}

#[test]
fn test_parse_actor_file() {
    let contents = r#"(
        schema_version: 1,
        items: [
            (id: "hero", kind: Player, health: 80.0),
            (
                id: "bot",
                kind: ChaserEnemy,
                health: 30.0,
                move_speed: 90.0,
                spawn: (10.0, 20.0),
                bounds: (-50.0, 50.0),
            ),
        ],
    )"#;

    let file: DataFile<ActorDef> = parse_ron("inline", contents).expect("parses");
    assert_eq!(file.schema_version, 1);
    assert_eq!(file.items.len(), 2);

    let bot = &file.items[1];
    assert_eq!(bot.kind, BehaviorKind::ChaserEnemy);
    assert_eq!(bot.spawn, Some((10.0, 20.0)));
    assert_eq!(bot.bounds, Some((-50.0, 50.0)));
    assert_eq!(bot.attack_damage, 0.0);
    assert_eq!(bot.size, (40.0, 64.0));
}

#[test]
fn test_parse_error_names_file() {
    let err = parse_ron::<LocomotionTuning>("locomotion.ron", "(gravity: )").unwrap_err();
    assert_eq!(err.file, "locomotion.ron");
    assert!(err.to_string().starts_with("Failed to load locomotion.ron"));
}

#[test]
fn test_missing_directory_falls_back_to_builtin() {
    let (loaded, errors) = load_all_content(Path::new("does/not/exist"));

    assert_eq!(errors.len(), 2);
    assert_eq!(loaded.tuning, LocomotionTuning::default());
    assert!(loaded.registry.player().is_some());
}

#[test]
fn test_shipped_content_is_valid() {
    let base = Path::new(env!("CARGO_MANIFEST_DIR")).join(CONTENT_PATH);
    let (loaded, errors) = load_all_content(&base);

    assert!(errors.is_empty(), "load errors: {:?}", errors);
    assert!(validate_tuning(&loaded.tuning).is_empty());
    assert!(validate_actors(&loaded.registry).is_empty());
    assert_eq!(loaded.tuning, LocomotionTuning::default());
    assert_eq!(loaded.registry.player().map(|p| p.id.as_str()), Some("player"));
}

// -----------------------------------------------------------------------------
// Registry tests
// -----------------------------------------------------------------------------

#[test]
fn test_registry_enemies_sorted_and_player_excluded() {
    let registry = ContentRegistry::from_actors([
        chaser("zed"),
        chaser("alpha"),
        ActorDef {
            kind: BehaviorKind::Player,
            ..chaser("hero")
        },
    ]);

    let ids: Vec<_> = registry.enemies().iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["alpha", "zed"]);
    assert_eq!(registry.player().map(|p| p.id.as_str()), Some("hero"));
}

#[test]
fn test_builtin_registry_is_valid() {
    assert!(validate_actors(&ContentRegistry::builtin()).is_empty());
}

// -----------------------------------------------------------------------------
// Validation tests
// -----------------------------------------------------------------------------

#[test]
fn test_default_tuning_is_valid() {
    assert!(validate_tuning(&LocomotionTuning::default()).is_empty());
}

#[test]
fn test_tuning_rejects_bad_values() {
    let tuning = LocomotionTuning {
        player_mass: 0.0,
        climb_force: -1.0,
        ladder_damping: 1.5,
        dead_zone: f32::NAN,
        ..Default::default()
    };

    let fields: Vec<_> = validate_tuning(&tuning).iter().map(|e| e.field).collect();
    assert!(fields.contains(&"player_mass"));
    assert!(fields.contains(&"climb_force"));
    assert!(fields.contains(&"ladder_damping"));
    assert!(fields.contains(&"dead_zone"));
    assert_eq!(fields.len(), 4);
}

#[test]
fn test_actor_validation() {
    let mut inverted = chaser("inverted");
    inverted.bounds = Some((100.0, -100.0));
    let mut nowhere = chaser("nowhere");
    nowhere.spawn = None;
    let mut ghost = chaser("ghost");
    ghost.health = 0.0;

    let registry = ContentRegistry::from_actors([inverted, nowhere, ghost]);
    let errors = validate_actors(&registry);

    assert!(errors.iter().any(|e| e.source_id == "inverted" && e.field == "bounds"));
    assert!(errors.iter().any(|e| e.source_id == "nowhere" && e.field == "spawn"));
    assert!(errors.iter().any(|e| e.source_id == "ghost" && e.field == "health"));
    assert!(errors.iter().any(|e| e.source_type == "Registry"));
}
