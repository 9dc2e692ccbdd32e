use bevy::prelude::*;

use crate::game::resources::PlayerPosition;
use crate::movement::components::to_xz;
use crate::rng::GameRng;
use crate::waves::events::WaveEvent;
use crate::waves::resources::{WaveSequencer, WaveStep};

/// Advance the wave sequencer and spawn its enemies around the player.
pub fn wave_spawning_system(
    mut commands: Commands,
    time: Res<Time>,
    sequencer: Option<ResMut<WaveSequencer>>,
    player_position: Res<PlayerPosition>,
    mut rng: ResMut<GameRng>,
    mut wave_events: MessageWriter<WaveEvent>,
    mut warned: Local<bool>,
) {
    let Some(mut sequencer) = sequencer else {
        if !*warned {
            warn!("wave spawning skipped: no wave sequencer configured");
            *warned = true;
        }
        return;
    };
    if sequencer.is_finished() {
        return;
    }

    let anchor = to_xz(player_position.0);
    for step in sequencer.advance(time.delta_secs()) {
        match step {
            WaveStep::Started(wave) => {
                let current = &sequencer.waves()[wave];
                info!(
                    "wave {} started: {} x {}",
                    wave + 1,
                    current.enemy_count,
                    current.archetype.name
                );
                wave_events.write(WaveEvent::WaveStarted(wave));
            }
            WaveStep::Spawn(wave) => {
                let offset = rng.point_in_disk(sequencer.spawn_radius());
                let position = anchor + to_xz(offset);
                commands.spawn(sequencer.waves()[wave].archetype.bundle(position));
            }
            WaveStep::Cleared(wave) => {
                info!("wave {} finished spawning", wave + 1);
                wave_events.write(WaveEvent::WaveCleared(wave));
            }
            WaveStep::AllFinished => {
                info!("all waves finished");
                wave_events.write(WaveEvent::AllWavesFinished);
            }
        }
    }
}

/// Start every new game from the first wave.
pub fn restart_waves_system(sequencer: Option<ResMut<WaveSequencer>>) {
    if let Some(mut sequencer) = sequencer {
        sequencer.restart();
    }
}
