use bevy::prelude::*;

use super::events::{CameraShakeEvent, DamageEvent, DeathEvent, HitEvent};
use super::resources::DamageFloors;
use super::systems::{apply_damage_system, update_damage_flash_system, update_hit_tilt_system};
use crate::game::sets::GameSet;
use crate::movement::events::KnockbackEvent;
use crate::states::GameState;

/// Combat plugin providing unified damage, death and hit feedback.
/// Damage resolves in `GameSet::Combat`; flash and tilt animate in `GameSet::Effects`.
pub fn plugin(app: &mut App) {
    app.add_message::<DamageEvent>()
        .add_message::<HitEvent>()
        .add_message::<DeathEvent>()
        .add_message::<KnockbackEvent>()
        .add_message::<CameraShakeEvent>()
        .init_resource::<DamageFloors>()
        .add_systems(
            Update,
            apply_damage_system
                .in_set(GameSet::Combat)
                .run_if(in_state(GameState::InGame)),
        )
        .add_systems(
            Update,
            (update_damage_flash_system, update_hit_tilt_system)
                .in_set(GameSet::Effects)
                .run_if(in_state(GameState::InGame)),
        );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::components::{ActorKind, Stats};

    #[test]
    fn test_plugin_registers_messages() {
        let mut app = App::new();
        app.add_plugins(bevy::state::app::StatesPlugin);
        app.init_state::<GameState>();
        app.add_plugins(plugin);

        let entity = app.world_mut().spawn_empty().id();
        app.world_mut()
            .write_message(DamageEvent::new(entity, 10.0, Vec3::ZERO));
        app.world_mut()
            .write_message(DeathEvent::new(entity, Vec3::ZERO, ActorKind::Enemy));
        app.world_mut().write_message(CameraShakeEvent {
            duration: 0.1,
            magnitude: 0.2,
        });

        assert!(app.world().contains_resource::<DamageFloors>());
    }

    #[test]
    fn test_damage_only_resolves_in_game() {
        let mut app = App::new();
        app.add_plugins(bevy::time::TimePlugin::default());
        app.add_plugins(bevy::state::app::StatesPlugin);
        app.init_state::<GameState>();
        app.add_plugins(plugin);

        let entity = app
            .world_mut()
            .spawn((Stats::new(50.0, 0.0, 1.0, 1.0), Transform::default(), ActorKind::Enemy))
            .id();

        // Intro: message stays unread by the damage system
        app.world_mut()
            .write_message(DamageEvent::new(entity, 10.0, Vec3::ZERO));
        app.update();
        assert_eq!(app.world().get::<Stats>(entity).unwrap().current_health(), 50.0);

        app.world_mut()
            .resource_mut::<NextState<GameState>>()
            .set(GameState::InGame);
        app.update();
        app.world_mut()
            .write_message(DamageEvent::new(entity, 10.0, Vec3::ZERO));
        app.update();

        let health = app.world().get::<Stats>(entity).unwrap().current_health();
        assert!(health < 50.0);
    }
}
