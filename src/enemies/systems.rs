use bevy::prelude::*;

use crate::combat::components::{HitTilt, Stats};
use crate::combat::events::DamageEvent;
use crate::enemies::components::{Enemy, ENEMY_TURN_DEGREES_PER_SEC};
use crate::movement::components::{from_xz, to_xz, MotionState};
use crate::player::components::Player;

/// Turn `current` toward `target` by at most `max_angle` radians.
fn rotate_towards(current: Quat, target: Quat, max_angle: f32) -> Quat {
    let angle = current.angle_between(target);
    if angle <= max_angle || angle == 0.0 {
        return target;
    }
    current.slerp(target, max_angle / angle)
}

/// Walk toward the player until inside attack range.
/// Enemies in knockback or dead do not move; a hit tilt suppresses turning.
#[allow(clippy::type_complexity)]
pub fn enemy_chase_system(
    time: Res<Time>,
    player_query: Query<&Transform, With<Player>>,
    mut enemy_query: Query<
        (&mut Transform, &mut MotionState, &Stats, &Enemy, Option<&HitTilt>),
        Without<Player>,
    >,
    mut warned: Local<bool>,
) {
    let Ok(player_transform) = player_query.single() else {
        if !*warned {
            warn!("enemy chase skipped: no player in the world");
            *warned = true;
        }
        return;
    };
    let player_pos = from_xz(player_transform.translation);
    let dt = time.delta_secs();

    for (mut transform, mut motion, stats, enemy, tilt) in enemy_query.iter_mut() {
        if !motion.accepts_input() {
            continue;
        }

        let offset = player_pos - from_xz(transform.translation);
        if offset.length() <= enemy.attack_range {
            *motion = MotionState::Idle;
            continue;
        }

        let direction = to_xz(offset.normalize_or_zero());
        transform.translation += direction * stats.move_speed * dt;
        *motion = MotionState::Moving(direction);

        if tilt.is_none() && direction != Vec3::ZERO {
            let facing = Transform::IDENTITY.looking_to(direction, Vec3::Y).rotation;
            transform.rotation = rotate_towards(
                transform.rotation,
                facing,
                ENEMY_TURN_DEGREES_PER_SEC.to_radians() * dt,
            );
        }
    }
}

/// Swing at the player when in range and off cooldown.
#[allow(clippy::type_complexity)]
pub fn enemy_attack_system(
    time: Res<Time>,
    player_query: Query<(Entity, &Transform, &Stats), With<Player>>,
    mut enemy_query: Query<(Entity, &Transform, &Stats, &MotionState, &mut Enemy), Without<Player>>,
    mut damage_events: MessageWriter<DamageEvent>,
) {
    let Ok((player, player_transform, player_stats)) = player_query.single() else {
        return;
    };
    let dt = time.delta_secs();

    for (entity, transform, stats, motion, mut enemy) in enemy_query.iter_mut() {
        if motion.is_dead() {
            continue;
        }
        enemy.attack_cooldown.tick(dt);

        if !motion.accepts_input() || !player_stats.is_alive() || !enemy.attack_cooldown.is_ready() {
            continue;
        }

        let distance = from_xz(transform.translation).distance(from_xz(player_transform.translation));
        if distance > enemy.attack_range {
            continue;
        }

        damage_events.write(DamageEvent::with_source(
            player,
            stats.damage,
            entity,
            transform.translation,
        ));
        let interval = enemy.attack_interval;
        enemy.attack_cooldown.trigger(interval);
    }
}
