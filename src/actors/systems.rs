//! Actors domain: behavior stepping, damage and deaths.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::actors::{
    Actor, ActorBrain, BehaviorInput, DamageEvent, DeathEvent, Enemy, Health, behavior_for,
};
use crate::movement::{Player, RespawnPlayerEvent, RespawnReason};

pub(crate) fn run_behaviors(
    time: Res<Time>,
    mut damage_events: MessageWriter<DamageEvent>,
    player: Query<(Entity, &Transform), With<Player>>,
    mut enemies: Query<
        (
            Entity,
            &Transform,
            &Actor,
            &mut ActorBrain,
            &mut LinearVelocity,
            &mut Sprite,
        ),
        (With<Enemy>, Without<Player>),
    >,
) {
    let target = player.single().ok();
    let dt = time.delta_secs();

    for (entity, transform, actor, mut brain, mut velocity, mut sprite) in &mut enemies {
        let input = BehaviorInput {
            actor_x: transform.translation.x,
            player_x: target.map(|(_, t)| t.translation.x),
            dt,
        };

        let output = behavior_for(actor.kind)(&mut brain, &input);

        if let Some(vx) = output.velocity_x {
            velocity.x = vx;
        }
        if brain.direction != 0.0 {
            sprite.flip_x = brain.direction < 0.0;
        }

        if let (Some(amount), Some((player_entity, _))) = (output.attack, target) {
            debug!("'{}' attacks player for {}", actor.id, amount);
            damage_events.write(DamageEvent {
                source: entity,
                target: player_entity,
                amount,
            });
        }
    }
}

pub(crate) fn apply_damage(
    mut damage_events: MessageReader<DamageEvent>,
    mut death_events: MessageWriter<DeathEvent>,
    mut query: Query<(&Actor, &mut Health)>,
) {
    for event in damage_events.read() {
        let Ok((actor, mut health)) = query.get_mut(event.target) else {
            continue;
        };
        // Already dead this frame
        if health.is_dead() {
            continue;
        }

        let dealt = health.take_damage(event.amount);
        debug!(
            "'{}' took {:.0} damage ({:.0}/{:.0})",
            actor.id, dealt, health.current, health.max
        );

        if health.is_dead() {
            death_events.write(DeathEvent {
                entity: event.target,
            });
        }
    }
}

pub(crate) fn process_deaths(
    mut commands: Commands,
    mut death_events: MessageReader<DeathEvent>,
    mut respawn_events: MessageWriter<RespawnPlayerEvent>,
    mut players: Query<&mut Health, With<Player>>,
    enemies: Query<&Actor, With<Enemy>>,
) {
    for event in death_events.read() {
        if let Ok(mut health) = players.get_mut(event.entity) {
            health.restore();
            info!("Player died");
            respawn_events.write(RespawnPlayerEvent {
                reason: RespawnReason::Died,
            });
        } else if let Ok(actor) = enemies.get(event.entity) {
            info!("Enemy '{}' destroyed", actor.id);
            commands.entity(event.entity).despawn();
        }
    }
}
