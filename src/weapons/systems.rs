use bevy::prelude::*;

use crate::combat::area::circles_overlap;
use crate::combat::components::{Hitbox, HitSet};
use crate::combat::events::DamageEvent;
use crate::enemies::components::Enemy;
use crate::movement::components::{Facing, MotionState};
use crate::player::components::Player;
use crate::weapons::components::*;

fn facing_transform(position: Vec3, facing: Vec3) -> Transform {
    let transform = Transform::from_translation(position);
    if facing == Vec3::ZERO {
        transform
    } else {
        transform.looking_to(facing, Vec3::Y)
    }
}

/// Tick every arsenal slot and launch an attack for each one that comes off cooldown.
pub fn weapon_fire_system(
    mut commands: Commands,
    time: Res<Time>,
    mut player_query: Query<(Entity, &Transform, &Facing, &MotionState, &mut Arsenal), With<Player>>,
) {
    let dt = time.delta_secs();

    for (owner, transform, facing, motion, mut arsenal) in player_query.iter_mut() {
        if motion.is_dead() {
            continue;
        }
        let position = transform.translation;
        let direction = facing.direction();

        for slot in arsenal.0.iter_mut() {
            slot.cooldown.tick(dt);
            if !slot.cooldown.is_ready() {
                continue;
            }

            match &slot.kind {
                WeaponKind::Slash(settings) => {
                    commands.spawn((
                        Name::new("Slash"),
                        SlashAttack::new(owner, settings),
                        facing_transform(position, direction),
                    ));
                }
                WeaponKind::Axe(settings) => {
                    commands.spawn((
                        Name::new("Axe"),
                        ThrownAxe::new(direction, settings),
                        facing_transform(position, direction),
                    ));
                }
                WeaponKind::Beam(settings) => {
                    commands.spawn((
                        Name::new("Beam"),
                        DamageBeam::new(direction, settings),
                        facing_transform(position, direction),
                    ));
                }
            }
            slot.cooldown.trigger(slot.interval);
        }
    }
}

fn strike_once(
    hits: &mut HitSet,
    enemy: Entity,
    damage: f32,
    source: Entity,
    source_position: Vec3,
    damage_events: &mut MessageWriter<DamageEvent>,
) {
    if hits.try_hit(enemy) {
        damage_events.write(DamageEvent::with_source(enemy, damage, source, source_position));
    }
}

/// Keep slashes on their owner, hit what they touch, and remove them when they expire.
#[allow(clippy::type_complexity)]
pub fn slash_attack_system(
    mut commands: Commands,
    time: Res<Time>,
    owner_query: Query<(&Transform, &Facing), With<Player>>,
    mut slash_query: Query<(Entity, &mut Transform, &mut SlashAttack), Without<Player>>,
    enemy_query: Query<(Entity, &Transform, &Hitbox), (With<Enemy>, Without<SlashAttack>)>,
    mut damage_events: MessageWriter<DamageEvent>,
) {
    for (entity, mut transform, mut slash) in slash_query.iter_mut() {
        let Ok((owner_transform, facing)) = owner_query.get(slash.owner) else {
            commands.entity(entity).try_despawn();
            continue;
        };
        *transform = facing_transform(owner_transform.translation, facing.direction());

        let origin = transform.translation;
        let direction = facing.direction();
        let slash = &mut *slash;
        for (enemy, enemy_transform, hitbox) in enemy_query.iter() {
            if slash
                .area
                .overlaps_circle(origin, direction, enemy_transform.translation, hitbox.radius())
            {
                strike_once(
                    &mut slash.hits,
                    enemy,
                    slash.damage,
                    slash.owner,
                    origin,
                    &mut damage_events,
                );
            }
        }

        slash.lifetime.tick(time.delta());
        if slash.lifetime.is_finished() {
            commands.entity(entity).try_despawn();
        }
    }
}

/// Fly axes forward, hit each enemy at most once, and drop them after their lifetime.
#[allow(clippy::type_complexity)]
pub fn axe_flight_system(
    mut commands: Commands,
    time: Res<Time>,
    mut axe_query: Query<(Entity, &mut Transform, &mut ThrownAxe)>,
    enemy_query: Query<(Entity, &Transform, &Hitbox), (With<Enemy>, Without<ThrownAxe>)>,
    mut damage_events: MessageWriter<DamageEvent>,
) {
    for (entity, mut transform, mut axe) in axe_query.iter_mut() {
        transform.translation += axe.direction * axe.speed * time.delta_secs();

        let position = transform.translation;
        let axe = &mut *axe;
        for (enemy, enemy_transform, hitbox) in enemy_query.iter() {
            if circles_overlap(position, axe.radius, enemy_transform.translation, hitbox.radius()) {
                strike_once(
                    &mut axe.hits,
                    enemy,
                    axe.damage,
                    entity,
                    position,
                    &mut damage_events,
                );
            }
        }

        axe.lifetime.tick(time.delta());
        if axe.lifetime.is_finished() {
            commands.entity(entity).try_despawn();
        }
    }
}

/// Damage everything inside each beam once per tick until the beam expires.
#[allow(clippy::type_complexity)]
pub fn beam_damage_system(
    mut commands: Commands,
    time: Res<Time>,
    mut beam_query: Query<(Entity, &Transform, &mut DamageBeam)>,
    enemy_query: Query<(Entity, &Transform, &Hitbox), (With<Enemy>, Without<DamageBeam>)>,
    mut damage_events: MessageWriter<DamageEvent>,
) {
    for (entity, transform, mut beam) in beam_query.iter_mut() {
        beam.tick.tick(time.delta());
        let ticks = beam.tick.times_finished_this_tick();
        let origin = transform.translation;

        for _ in 0..ticks {
            for (enemy, enemy_transform, hitbox) in enemy_query.iter() {
                if beam
                    .area
                    .overlaps_circle(origin, beam.facing, enemy_transform.translation, hitbox.radius())
                {
                    damage_events.write(DamageEvent::with_source(
                        enemy,
                        beam.damage_per_tick,
                        entity,
                        origin,
                    ));
                }
            }
        }

        beam.lifetime.tick(time.delta());
        if beam.lifetime.is_finished() {
            commands.entity(entity).try_despawn();
        }
    }
}
