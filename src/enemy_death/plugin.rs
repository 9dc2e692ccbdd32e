use bevy::prelude::*;

use crate::combat::systems::apply_damage_system;
use crate::enemy_death::systems::*;
use crate::game::events::{EnemyDiedEvent, LootDropEvent};
use crate::game::sets::GameSet;
use crate::rng::GameRng;
use crate::states::*;

pub fn plugin(app: &mut App) {
    app.add_message::<EnemyDiedEvent>()
        .add_message::<LootDropEvent>()
        .init_resource::<GameRng>()
        .add_systems(
            Update,
            begin_death_sequence_system
                .after(apply_damage_system)
                .in_set(GameSet::Combat)
                .run_if(in_state(GameState::InGame)),
        )
        .add_systems(
            Update,
            advance_death_sequence_system
                .in_set(GameSet::Cleanup)
                .run_if(in_state(GameState::InGame)),
        );
}
