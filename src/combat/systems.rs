use bevy::prelude::*;

use super::components::{ActorKind, DamageFlash, HitReaction, HitTilt, Invincibility, Stats};
use super::events::{CameraShakeEvent, DamageEvent, DeathEvent, HitEvent};
use super::hit::{resolve_hit, HitOutcome};
use super::resources::DamageFloors;
use crate::movement::components::KnockbackSettings;
use crate::movement::events::KnockbackEvent;

/// Resolve every pending `DamageEvent` and fan the result out to the
/// reaction channels (knockback, flash, tilt, shake, death).
#[allow(clippy::type_complexity, clippy::too_many_arguments)]
pub fn apply_damage_system(
    mut commands: Commands,
    mut damage_events: MessageReader<DamageEvent>,
    mut targets: Query<(
        &mut Stats,
        &Transform,
        &ActorKind,
        Option<&Invincibility>,
        Option<&HitReaction>,
        Option<&KnockbackSettings>,
        Option<&HitTilt>,
    )>,
    floors: Option<Res<DamageFloors>>,
    mut knockback_events: MessageWriter<KnockbackEvent>,
    mut shake_events: MessageWriter<CameraShakeEvent>,
    mut hit_events: MessageWriter<HitEvent>,
    mut death_events: MessageWriter<DeathEvent>,
) {
    let floors = floors.map(|f| *f).unwrap_or_default();

    for event in damage_events.read() {
        let Ok((mut stats, transform, kind, invincibility, reaction, knockback, tilt)) =
            targets.get_mut(event.target)
        else {
            continue;
        };

        let invincible = invincibility.is_some_and(|i| i.is_active());
        let result = resolve_hit(&mut stats, invincible, event.amount, floors.for_kind(*kind));

        match result.outcome {
            HitOutcome::Ignored => {
                debug!("damage to {:?} ignored", event.target);
                continue;
            }
            HitOutcome::Died => {
                death_events.write(DeathEvent::new(event.target, transform.translation, *kind));
            }
            HitOutcome::Hit => {
                if let Some(settings) = knockback {
                    knockback_events.write(KnockbackEvent {
                        target: event.target,
                        source_position: event.source_position,
                        power: settings.power,
                        duration: settings.duration,
                    });
                }

                if let Some(reaction) = reaction {
                    let mut entity = commands.entity(event.target);
                    entity.insert(DamageFlash::new(reaction.flash_duration));

                    if let Some(settings) = reaction.tilt {
                        // A restarted tilt must lean from the upright pose, not the leaned one
                        let base = tilt.map_or(transform.rotation, |t| t.base());
                        entity.insert(HitTilt::new(base, settings));
                    }

                    if let Some(shake) = reaction.shake {
                        shake_events.write(CameraShakeEvent {
                            duration: shake.duration,
                            magnitude: shake.magnitude,
                        });
                    }
                }
            }
        }

        hit_events.write(HitEvent {
            target: event.target,
            amount: result.final_amount,
            died: result.died(),
        });
    }
}

/// Tick flash timers and drop them once they run out.
pub fn update_damage_flash_system(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut DamageFlash)>,
) {
    for (entity, mut flash) in query.iter_mut() {
        flash.tick(time.delta());

        if flash.is_finished() {
            commands.entity(entity).remove::<DamageFlash>();
        }
    }
}

/// Drive the hit recoil rotation, restoring the base rotation at the end.
pub fn update_hit_tilt_system(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut HitTilt, &mut Transform)>,
) {
    for (entity, mut tilt, mut transform) in query.iter_mut() {
        if tilt.tick(time.delta_secs()) {
            transform.rotation = tilt.base();
            commands.entity(entity).remove::<HitTilt>();
        } else {
            transform.rotation = tilt.rotation();
        }
    }
}
