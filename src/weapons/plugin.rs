use bevy::prelude::*;

use crate::combat::events::DamageEvent;
use crate::combat::systems::apply_damage_system;
use crate::game::sets::GameSet;
use crate::states::*;
use crate::weapons::systems::*;

pub fn plugin(app: &mut App) {
    app.add_message::<DamageEvent>()
        .add_systems(
            Update,
            (slash_attack_system, axe_flight_system, beam_damage_system)
                .in_set(GameSet::Combat)
                .before(apply_damage_system)
                .run_if(in_state(GameState::InGame)),
        )
        .add_systems(
            Update,
            weapon_fire_system
                .in_set(GameSet::Spawning)
                .run_if(in_state(GameState::InGame)),
        );
}
