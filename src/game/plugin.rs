use bevy::prelude::*;

use crate::game::events::EnemyDiedEvent;
use crate::game::resources::*;
use crate::game::sets::GameSet;
use crate::game::systems::*;
use crate::states::*;
use crate::waves::events::WaveEvent;

/// Assembles the whole game: system-set order, state hooks and every feature plugin.
pub fn plugin(app: &mut App) {
    app.configure_sets(
        Update,
        (
            GameSet::Input,
            GameSet::Movement,
            GameSet::Combat,
            GameSet::Spawning,
            GameSet::Effects,
            GameSet::Cleanup,
        )
            .chain(),
    )
    .init_resource::<PlayerPosition>()
    .init_resource::<RunStats>()
    .init_resource::<PlayerLoadout>()
    .add_message::<EnemyDiedEvent>()
    .add_message::<WaveEvent>()
    .add_plugins((
        crate::combat::plugin,
        crate::movement::plugin,
        crate::player::plugin,
        crate::enemies::plugin,
        crate::enemy_death::plugin,
        crate::experience::plugin,
        crate::waves::plugin,
        crate::weapons::plugin,
        crate::camera::plugin,
    ))
    .add_systems(OnEnter(GameState::InGame), setup_game)
    .add_systems(OnEnter(GameState::Intro), cleanup_game)
    .add_systems(
        Update,
        game_input
            .run_if(resource_exists::<ButtonInput<KeyCode>>)
            .run_if(not(in_state(GameState::Intro))),
    )
    .add_systems(
        Update,
        track_run_stats_system
            .in_set(GameSet::Cleanup)
            .run_if(in_state(GameState::InGame)),
    );
}
