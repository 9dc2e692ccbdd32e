use bevy::prelude::*;

use crate::combat::components::{ActorKind, Hitbox};
use crate::combat::events::DeathEvent;
use crate::enemies::components::Enemy;
use crate::enemy_death::components::{DeathSequence, LootTable, LOOT_HEIGHT};
use crate::game::events::{EnemyDiedEvent, LootDropEvent};
use crate::movement::components::MotionState;
use crate::rng::GameRng;

/// Enter `Dying` for each dead enemy: hit detection off, motion frozen, loot rolled once.
pub fn begin_death_sequence_system(
    mut commands: Commands,
    mut death_events: MessageReader<DeathEvent>,
    mut enemy_query: Query<(&Transform, &mut MotionState, Option<&LootTable>), With<Enemy>>,
    mut rng: ResMut<GameRng>,
    mut loot_drop_events: MessageWriter<LootDropEvent>,
    mut enemy_died_events: MessageWriter<EnemyDiedEvent>,
) {
    for event in death_events.read() {
        if event.kind != ActorKind::Enemy {
            continue;
        }
        let Ok((transform, mut motion, loot)) = enemy_query.get_mut(event.entity) else {
            continue;
        };
        // Already dying
        if motion.is_dead() {
            continue;
        }

        *motion = MotionState::Dead;
        commands
            .entity(event.entity)
            .remove::<Hitbox>()
            .insert(DeathSequence::new());

        if let Some(loot) = loot {
            for _ in 0..loot.max_drops {
                if !rng.roll_percent(loot.drop_chance) {
                    continue;
                }
                let offset = rng.point_in_disk(loot.drop_spread);
                loot_drop_events.write(LootDropEvent {
                    position: transform.translation + Vec3::new(offset.x, LOOT_HEIGHT, offset.y),
                    experience: loot.experience_amount,
                });
            }
        }

        enemy_died_events.write(EnemyDiedEvent {
            entity: event.entity,
            position: transform.translation,
        });
    }
}

/// Play out the death animation, sink the body, then remove it.
pub fn advance_death_sequence_system(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut Transform, &mut DeathSequence)>,
) {
    for (entity, mut transform, mut sequence) in query.iter_mut() {
        let step = sequence.advance(time.delta());
        transform.translation.y -= step.sink;

        if step.finished {
            commands.entity(entity).try_despawn();
        }
    }
}
