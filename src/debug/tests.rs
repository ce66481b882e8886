//! Debug domain: tests for the locomotion trace buffer.

use bevy::prelude::*;

use super::{LocomotionTrace, TRACE_CAPACITY};
use crate::movement::{BodyCommands, CommandLog, Drive, ProfileKind, StepReport};

fn run_step() -> (StepReport, CommandLog) {
    let mut log = CommandLog::default();
    log.apply_force(Vec2::new(8000.0, 0.0));
    log.set_friction(0.0);
    (
        StepReport {
            drive: Drive::Run {
                direction: 1.0,
                airborne: false,
            },
            ..default()
        },
        log,
    )
}

#[test]
fn test_trace_drops_oldest_when_full() {
    let mut trace = LocomotionTrace::with_capacity(3);
    for _ in 0..5 {
        let (report, log) = run_step();
        trace.record(report, log);
    }

    assert_eq!(trace.len(), 3);
    let ticks: Vec<_> = trace.iter().map(|e| e.tick).collect();
    assert_eq!(ticks, vec![2, 3, 4]);
}

#[test]
fn test_default_trace_capacity() {
    let mut trace = LocomotionTrace::default();
    assert!(trace.is_empty());
    for _ in 0..TRACE_CAPACITY + 10 {
        trace.record(StepReport::default(), CommandLog::default());
    }
    assert_eq!(trace.len(), TRACE_CAPACITY);
}

#[test]
fn test_trace_json_shape() {
    let mut trace = LocomotionTrace::default();
    let (report, log) = run_step();
    trace.record(report, log);

    let mut ladder = CommandLog::default();
    ladder.set_gravity_override(Some(Vec2::ZERO));
    trace.record(
        StepReport {
            profile_change: Some(ProfileKind::Ladder),
            jumped: false,
            ..default()
        },
        ladder,
    );

    let json = trace.to_json();
    let entries = json.as_array().expect("trace is an array");
    assert_eq!(entries.len(), 2);

    assert_eq!(entries[0]["tick"], 0);
    assert_eq!(entries[0]["drive"]["kind"], "run");
    assert_eq!(entries[0]["commands"][0]["apply_force"][0], 8000.0);
    assert_eq!(entries[0]["commands"][1]["set_friction"], 0.0);

    assert_eq!(entries[1]["drive"]["kind"], "rest");
    assert_eq!(entries[1]["profile_change"], "Ladder");
    assert_eq!(entries[1]["commands"][0]["set_gravity_override"][1], 0.0);
}
