use bevy::prelude::*;

use crate::game::resources::PlayerPosition;
use crate::game::sets::GameSet;
use crate::rng::GameRng;
use crate::states::*;
use crate::waves::events::WaveEvent;
use crate::waves::resources::WaveSequencer;
use crate::waves::systems::*;

pub fn plugin(app: &mut App) {
    app.init_resource::<WaveSequencer>()
        .init_resource::<PlayerPosition>()
        .init_resource::<GameRng>()
        .add_message::<WaveEvent>()
        .add_systems(OnEnter(GameState::InGame), restart_waves_system)
        .add_systems(
            Update,
            wave_spawning_system
                .in_set(GameSet::Spawning)
                .run_if(in_state(GameState::InGame)),
        );
}
