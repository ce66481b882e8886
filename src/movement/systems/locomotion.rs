//! Movement domain: controller stepping, force integration and pose sync.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::movement::{
    BodyForces, CommandLog, Facing, LocomotionController, LocomotionInput, LocomotionPose,
    LocomotionSensors, LocomotionSteppedEvent, LocomotionTuning, Odometer, Player, PlayerBody,
    StepSensors, integrate_velocity, select_pose,
};

pub(crate) fn drive_locomotion(
    tuning: Res<LocomotionTuning>,
    mut input: ResMut<LocomotionInput>,
    mut stepped: MessageWriter<LocomotionSteppedEvent>,
    mut query: Query<
        (
            Entity,
            &Transform,
            &LocomotionSensors,
            &mut LocomotionController,
            &mut Odometer,
            &mut BodyForces,
            &mut Friction,
        ),
        With<Player>,
    >,
) {
    for (entity, transform, sensors, mut controller, mut odometer, mut forces, mut friction) in
        &mut query
    {
        let delta = odometer.advance(transform.translation.truncate());

        let mut log = CommandLog::default();
        let report = controller.step(
            StepSensors {
                on_ground: sensors.on_ground,
                ladder_contact: sensors.ladder_contact,
                horizontal_delta: delta.x,
            },
            *input,
            &tuning,
            &mut log,
        );

        log.replay(&mut PlayerBody {
            forces: &mut forces,
            friction: &mut friction,
        });

        if let Some(profile) = report.profile_change {
            debug!("Ladder contact changed: profile={:?}", profile);
        }
        if report.jumped {
            debug!("Jump: impulse={}", tuning.jump_impulse);
        }
        if report.facing_changed {
            debug!("Facing flipped: {:?}", controller.facing);
        }

        stepped.write(LocomotionSteppedEvent {
            entity,
            report,
            commands: log,
        });
    }

    input.jump_pressed = false;
}

pub(crate) fn integrate_body_forces(
    time: Res<Time>,
    tuning: Res<LocomotionTuning>,
    mut query: Query<(&mut BodyForces, &mut LinearVelocity)>,
) {
    let dt = time.delta_secs();
    let gravity = tuning.world_gravity();

    for (mut forces, mut velocity) in &mut query {
        velocity.0 = integrate_velocity(&mut forces, velocity.0, gravity, dt);
    }
}

pub(crate) fn update_pose(
    tuning: Res<LocomotionTuning>,
    mut query: Query<(&LocomotionController, &mut Odometer, &mut LocomotionPose), With<Player>>,
) {
    for (controller, mut odometer, mut pose) in &mut query {
        let delta = odometer.delta;
        let next = select_pose(
            *pose,
            &mut odometer,
            delta,
            controller.on_ground,
            controller.on_ladder,
            tuning.dead_zone,
            tuning.distance_to_change_texture,
        );

        if next != *pose {
            debug!("Pose: {:?} -> {:?}", *pose, next);
            *pose = next;
        }
    }
}

pub(crate) fn sync_sprite(
    mut query: Query<(&LocomotionController, &LocomotionPose, &mut Sprite), With<Player>>,
) {
    for (controller, pose, mut sprite) in &mut query {
        let flip = controller.facing == Facing::Left;
        if sprite.flip_x != flip {
            sprite.flip_x = flip;
        }
        sprite.color = pose.tint();
    }
}
