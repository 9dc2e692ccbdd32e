use bevy::prelude::*;

use crate::combat::systems::apply_damage_system;
use crate::enemies::systems::{enemy_attack_system, enemy_chase_system};
use crate::game::sets::GameSet;
use crate::states::GameState;

/// Chase runs with the rest of movement; attacks are resolved with combat.
pub fn plugin(app: &mut App) {
    app.add_systems(
        Update,
        enemy_chase_system
            .in_set(GameSet::Movement)
            .run_if(in_state(GameState::InGame)),
    )
    .add_systems(
        Update,
        enemy_attack_system
            .before(apply_damage_system)
            .in_set(GameSet::Combat)
            .run_if(in_state(GameState::InGame)),
    );
}
