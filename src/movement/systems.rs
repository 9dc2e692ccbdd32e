use bevy::prelude::*;

use crate::combat::components::Stats;
use crate::combat::hit::knockback_direction;
use crate::game::resources::PlayerPosition;
use crate::movement::components::{from_xz, move_towards, Facing, Knockback, Locomotion, MotionState};
use crate::movement::events::KnockbackEvent;
use crate::player::components::{Dash, Player, PlayerIntent};

/// Accelerated input-driven player movement on the XZ plane.
/// Velocity eases toward `direction * move_speed` and slides to rest when input is released.
/// Only runs while the player is Idle or Moving.
#[allow(clippy::type_complexity)]
pub fn player_locomotion_system(
    time: Res<Time>,
    mut query: Query<
        (
            &mut Transform,
            &mut MotionState,
            &mut Locomotion,
            &mut Facing,
            &Stats,
            &PlayerIntent,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();

    for (mut transform, mut motion, mut locomotion, mut facing, stats, intent) in query.iter_mut() {
        if !motion.accepts_input() {
            continue;
        }

        let desired = intent.movement_direction();
        let rate = if desired.length() > 0.01 {
            locomotion.acceleration
        } else {
            locomotion.deceleration
        };
        let target = desired * stats.move_speed;
        locomotion.velocity = move_towards(locomotion.velocity, target, rate * dt);
        transform.translation += locomotion.velocity * dt;

        *motion = if desired == Vec3::ZERO {
            MotionState::Idle
        } else {
            MotionState::Moving(desired)
        };

        match intent.aim {
            Some(aim) => facing.look(aim),
            None => facing.look(desired),
        }
        transform.look_to(facing.direction(), Vec3::Y);
    }
}

/// Start knockback for every accepted `KnockbackEvent`.
pub fn knockback_trigger_system(
    mut knockback_events: MessageReader<KnockbackEvent>,
    mut query: Query<(&Transform, &mut MotionState, Option<&Dash>)>,
) {
    for event in knockback_events.read() {
        let Ok((transform, mut motion, dash)) = query.get_mut(event.target) else {
            continue;
        };

        // Dash outranks knockback, and a running knockback is never restacked
        if !motion.accepts_input() || dash.is_some_and(Dash::blocks_knockback) {
            debug!("knockback on {:?} rejected", event.target);
            continue;
        }

        let direction = knockback_direction(transform.translation, event.source_position);
        *motion = MotionState::Knockback(Knockback::new(direction, event.power, event.duration));
    }
}

/// Apply decaying knockback displacement; return to Idle once it runs out.
pub fn knockback_motion_system(
    time: Res<Time>,
    mut query: Query<(&mut Transform, &mut MotionState, Option<&mut Locomotion>)>,
) {
    let dt = time.delta_secs();

    for (mut transform, mut motion, locomotion) in query.iter_mut() {
        if !motion.is_knocked_back() {
            continue;
        }

        let finished = {
            let MotionState::Knockback(knockback) = &mut *motion else {
                continue;
            };
            transform.translation += knockback.step(dt);
            knockback.is_finished()
        };

        if finished {
            *motion = MotionState::Idle;
            if let Some(mut locomotion) = locomotion {
                locomotion.velocity = Vec3::ZERO;
            }
        }
    }
}

/// Mirror the player's ground position into `PlayerPosition` for spawners and AI.
pub fn track_player_position(
    player_query: Query<&Transform, With<Player>>,
    mut player_position: ResMut<PlayerPosition>,
) {
    let Ok(transform) = player_query.single() else {
        return;
    };
    player_position.0 = from_xz(transform.translation);
}
