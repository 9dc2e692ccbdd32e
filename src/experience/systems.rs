use bevy::prelude::*;

use crate::combat::components::Stats;
use crate::experience::components::*;
use crate::experience::events::*;
use crate::experience::resources::GemSettings;
use crate::game::events::LootDropEvent;
use crate::movement::components::from_xz;
use crate::player::components::Player;

/// Spherical interpolation between two unit directions, clamped to `t` in 0..=1.
fn slerp_direction(from: Vec3, to: Vec3, t: f32) -> Vec3 {
    if from == Vec3::ZERO {
        return to;
    }
    let arc = Quat::from_rotation_arc(from.normalize(), to);
    (Quat::IDENTITY.slerp(arc, t.clamp(0.0, 1.0)) * from).normalize_or_zero()
}

/// Turn each loot drop into a gem lying where it fell.
pub fn spawn_experience_gems_system(
    mut commands: Commands,
    mut loot_drop_events: MessageReader<LootDropEvent>,
) {
    for event in loot_drop_events.read() {
        commands.spawn((
            Name::new("Experience Gem"),
            ExperienceGem::new(event.experience),
            Transform::from_translation(event.position),
        ));
    }
}

/// Start homing once the player walks within the magnet radius.
pub fn magnetize_gems_system(
    settings: Res<GemSettings>,
    player_query: Query<&Transform, With<Player>>,
    mut gem_query: Query<(&Transform, &mut ExperienceGem), Without<Player>>,
) {
    let Ok(player_transform) = player_query.single() else {
        return;
    };
    let player_ground = from_xz(player_transform.translation);

    for (transform, mut gem) in gem_query.iter_mut() {
        if gem.magnetized {
            continue;
        }
        if from_xz(transform.translation).distance(player_ground) > settings.magnet_radius {
            continue;
        }
        let direction = (player_transform.translation - transform.translation).normalize_or_zero();
        gem.magnetize(settings.initial_speed, direction);
    }
}

/// Accelerate magnetized gems toward the player's chest and collect them on arrival.
///
/// A gem is collected when inside `pickup_distance` or when this frame's step
/// would carry it past the target, so fast gems never tunnel through the player.
pub fn gem_homing_system(
    mut commands: Commands,
    time: Res<Time>,
    settings: Res<GemSettings>,
    player_query: Query<&Transform, With<Player>>,
    mut gem_query: Query<(Entity, &mut Transform, &mut ExperienceGem), Without<Player>>,
    mut collected_events: MessageWriter<ExperienceCollected>,
) {
    let Ok(player_transform) = player_query.single() else {
        return;
    };
    let target = player_transform.translation + Vec3::Y * settings.height_offset;
    let dt = time.delta_secs();

    for (entity, mut transform, mut gem) in gem_query.iter_mut() {
        if !gem.magnetized {
            continue;
        }

        gem.speed += settings.acceleration * dt;

        let to_target = target - transform.translation;
        let distance = to_target.length();
        let step = gem.speed * dt;

        if distance <= step || distance <= settings.pickup_distance {
            collected_events.write(ExperienceCollected { amount: gem.amount });
            commands.entity(entity).try_despawn();
            continue;
        }

        let toward = to_target / distance;
        gem.direction = if distance < settings.lock_on_distance {
            toward
        } else {
            slerp_direction(gem.direction, toward, settings.turn_speed * dt)
        };

        transform.translation += gem.direction * step;
    }
}

/// Feed collected experience into the player's level; each level-up refills health.
pub fn apply_experience_system(
    mut collected_events: MessageReader<ExperienceCollected>,
    mut player_query: Query<(&mut LevelProgress, &mut Stats), With<Player>>,
    mut level_up_events: MessageWriter<PlayerLevelUpEvent>,
    mut warned: Local<bool>,
) {
    if collected_events.is_empty() {
        return;
    }
    let Ok((mut progress, mut stats)) = player_query.single_mut() else {
        if !*warned {
            warn!("experience dropped: no player with level progress");
            *warned = true;
        }
        collected_events.clear();
        return;
    };

    for event in collected_events.read() {
        let levels_gained = progress.add_experience(event.amount);
        if levels_gained == 0 {
            continue;
        }

        let first_new_level = progress.level() + 1 - levels_gained;
        for level in first_new_level..=progress.level() {
            level_up_events.write(PlayerLevelUpEvent { level });
        }
        stats.restore_full();
        info!(
            "player reached level {} ({} xp to next)",
            progress.level(),
            progress.experience_to_next()
        );
    }
}
