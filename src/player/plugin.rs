use bevy::prelude::*;

use crate::combat::systems::apply_damage_system;
use crate::game::events::GameOverEvent;
use crate::game::sets::GameSet;
use crate::player::events::DashEvent;
use crate::player::systems::*;
use crate::states::GameState;

pub fn plugin(app: &mut App) {
    app.add_message::<DashEvent>()
        .add_message::<GameOverEvent>()
        .add_systems(
            Update,
            (
                read_keyboard_input.run_if(resource_exists::<ButtonInput<KeyCode>>),
                dash_recovery_system,
                dash_trigger_system,
            )
                .chain()
                .in_set(GameSet::Input)
                .run_if(in_state(GameState::InGame)),
        )
        .add_systems(
            Update,
            dash_motion_system
                .in_set(GameSet::Movement)
                .run_if(in_state(GameState::InGame)),
        )
        .add_systems(
            Update,
            (
                regeneration_system.before(apply_damage_system),
                handle_player_death_system.after(apply_damage_system),
            )
                .in_set(GameSet::Combat)
                .run_if(in_state(GameState::InGame)),
        )
        .add_systems(
            Update,
            clear_intent_edges
                .in_set(GameSet::Cleanup)
                .run_if(in_state(GameState::InGame)),
        );
}
