use bevy::prelude::*;

use crate::camera::components::CameraRig;
use crate::combat::components::{ActorKind, HitReaction, Hitbox, Invincibility, Stats};
use crate::enemies::components::Enemy;
use crate::experience::components::{ExperienceGem, LevelProgress};
use crate::game::events::EnemyDiedEvent;
use crate::game::resources::{PlayerLoadout, PlayerPosition, RunStats};
use crate::movement::components::{Facing, KnockbackSettings, Locomotion, MotionState};
use crate::player::components::*;
use crate::states::*;
use crate::waves::events::WaveEvent;
use crate::weapons::components::{DamageBeam, SlashAttack, ThrownAxe};

/// Components of a fresh player at the arena centre.
pub fn player_bundle(loadout: &PlayerLoadout) -> impl Bundle {
    (
        (
            Name::new("Player"),
            Player,
            PlayerIntent::default(),
            Transform::default(),
            ActorKind::Player,
            Stats::new(100.0, 0.0, 5.0, 1.0),
        ),
        (
            MotionState::default(),
            Locomotion::default(),
            Facing::default(),
            Dash::default(),
            loadout.dash,
            Invincibility::default(),
        ),
        (
            Hitbox::new(0.5),
            HitReaction::player(),
            KnockbackSettings::player(),
            Regeneration(0.0),
            LevelProgress::default(),
            loadout.arsenal.clone(),
        ),
    )
}

pub fn setup_game(mut commands: Commands, loadout: Res<PlayerLoadout>) {
    commands.spawn(player_bundle(&loadout));
    commands.insert_resource(PlayerPosition::default());
    commands.insert_resource(RunStats::default());
    info!("game started");
}

/// Escape leaves the game (or the game-over screen) for the intro.
pub fn game_input(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if keyboard_input.just_pressed(KeyCode::Escape) {
        next_state.set(GameState::Intro);
    }
}

/// Tally kills, cleared waves and play time.
pub fn track_run_stats_system(
    time: Res<Time>,
    mut stats: ResMut<RunStats>,
    mut enemy_died_events: MessageReader<EnemyDiedEvent>,
    mut wave_events: MessageReader<WaveEvent>,
) {
    stats.elapsed += time.delta_secs();
    stats.kills += enemy_died_events.read().count() as u32;

    for event in wave_events.read() {
        match event {
            WaveEvent::WaveCleared(_) => stats.waves_cleared += 1,
            WaveEvent::AllWavesFinished => stats.all_waves_finished = true,
            WaveEvent::WaveStarted(_) => {}
        }
    }
}

/// Remove every gameplay entity when returning to the intro.
#[allow(clippy::type_complexity)]
pub fn cleanup_game(
    mut commands: Commands,
    query: Query<
        Entity,
        Or<(
            With<Player>,
            With<Enemy>,
            With<ExperienceGem>,
            With<SlashAttack>,
            With<ThrownAxe>,
            With<DamageBeam>,
            With<CameraRig>,
        )>,
    >,
) {
    for entity in query.iter() {
        if let Ok(mut entity_commands) = commands.get_entity(entity) {
            entity_commands.despawn();
        }
    }
}
