//! Movement domain: ground and ladder detection systems.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Ladder, LocomotionSensors, Player};

const GROUND_PROBE_DISTANCE: f32 = 4.0;

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    mut query: Query<(&Transform, &Collider, &mut LocomotionSensors), With<Player>>,
) {
    // Floors, platforms and crates can be stood on; enemies and ladders can't
    let ground_filter = SpatialQueryFilter::from_mask([GameLayer::Ground, GameLayer::Item]);

    for (transform, collider, mut sensors) in &mut query {
        let was_on_ground = sensors.on_ground;

        // Cast a short ray downward from the player's feet
        let player_half_height = match collider.shape_scaled().as_cuboid() {
            Some(c) => c.half_extents.y,
            None => 32.0,
        };

        let ray_origin = transform.translation.truncate() - Vec2::new(0.0, player_half_height);
        let hit = spatial_query.cast_ray(
            ray_origin,
            Dir2::NEG_Y,
            GROUND_PROBE_DISTANCE,
            true,
            &ground_filter,
        );

        sensors.on_ground = hit.is_some();

        if sensors.on_ground != was_on_ground {
            debug!("Ground contact changed: on_ground={}", sensors.on_ground);
        }
    }
}

pub(crate) fn detect_ladder_contact(
    ladders: Query<(), With<Ladder>>,
    mut query: Query<(&CollidingEntities, &mut LocomotionSensors), With<Player>>,
) {
    for (colliding, mut sensors) in &mut query {
        sensors.ladder_contact = colliding.iter().any(|entity| ladders.contains(*entity));
    }
}
