use std::time::Duration;

use arena_survivor::game::config::{non_negative, positive, ConfigError};
use arena_survivor::game_plugin;
use arena_survivor::player::systems::dash_trigger_system;
use arena_survivor::prelude::*;
use bevy::app::ScheduleRunnerPlugin;
use bevy::log::{Level, LogPlugin};
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;
use clap::Parser;

/// Headless arena run: the player is driven by a simple autopilot until the
/// time limit, a game over, or the last wave is cleared.
#[derive(Parser, Debug)]
#[command(name = "arena-survivor")]
#[command(about = "Run the arena simulation without a window", long_about = None)]
struct Args {
    /// Seed for spawn points, loot rolls and camera shake
    #[arg(long, default_value_t = 7)]
    seed: u64,

    /// Simulated seconds before stopping
    #[arg(long, default_value_t = 120.0)]
    seconds: f32,

    /// Fixed frame step in seconds
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,

    /// Radius around the player where enemies appear
    #[arg(long, default_value_t = 10.0)]
    spawn_radius: f32,

    /// Leave the player standing still
    #[arg(long)]
    no_autopilot: bool,

    /// Log debug traces (rejected dashes, ignored hits)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Resource, Debug, Clone, PartialEq)]
struct SimulationConfig {
    seed: u64,
    seconds: f32,
    dt: f32,
    spawn_radius: f32,
    autopilot: bool,
    verbose: bool,
}

impl SimulationConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        positive("dt", self.dt)?;
        positive("seconds", self.seconds)?;
        non_negative("spawn radius", self.spawn_radius)
    }
}

impl From<Args> for SimulationConfig {
    fn from(args: Args) -> Self {
        Self {
            seed: args.seed,
            seconds: args.seconds,
            dt: args.dt,
            spawn_radius: args.spawn_radius,
            autopilot: !args.no_autopilot,
            verbose: args.verbose,
        }
    }
}

/// Kite away from the closest enemy, aim at it, and dash through it when cornered.
fn autopilot_system(
    mut player_query: Query<(&Transform, &mut PlayerIntent), With<Player>>,
    enemy_query: Query<&Transform, (With<Enemy>, With<Hitbox>, Without<Player>)>,
) {
    let Ok((transform, mut intent)) = player_query.single_mut() else {
        return;
    };
    let here = from_xz(transform.translation);

    let nearest = enemy_query
        .iter()
        .map(|enemy| from_xz(enemy.translation) - here)
        .min_by(|a, b| a.length_squared().total_cmp(&b.length_squared()));

    let Some(offset) = nearest else {
        intent.movement = Vec2::ZERO;
        intent.aim = None;
        return;
    };

    let distance = offset.length();
    let toward = offset.normalize_or_zero();
    intent.aim = Some(to_xz(toward));
    intent.movement = if distance < 3.0 {
        (-toward + toward.perp() * 0.5).normalize_or_zero()
    } else {
        toward.perp()
    };
    if distance < 1.2 {
        intent.dash = true;
    }
}

fn exit_system(
    config: Res<SimulationConfig>,
    run_stats: Res<RunStats>,
    state: Res<State<GameState>>,
    enemy_query: Query<&MotionState, With<Enemy>>,
    player_query: Query<(&Stats, &LevelProgress), With<Player>>,
    mut exit: MessageWriter<AppExit>,
    mut done: Local<bool>,
) {
    if *done {
        return;
    }

    let enemies_alive = enemy_query.iter().filter(|motion| !motion.is_dead()).count();
    let reason = if *state.get() == GameState::GameOver {
        "player died"
    } else if run_stats.all_waves_finished && enemies_alive == 0 {
        "all waves cleared"
    } else if run_stats.elapsed >= config.seconds {
        "time limit reached"
    } else {
        return;
    };

    let (health, level) = player_query
        .single()
        .map(|(stats, progress)| (stats.current_health(), progress.level()))
        .unwrap_or((0.0, 0));
    info!(
        "run over ({}): {:.1}s survived, {} kills, {} waves cleared, level {}, health {:.0}",
        reason, run_stats.elapsed, run_stats.kills, run_stats.waves_cleared, level, health
    );

    *done = true;
    exit.write(AppExit::Success);
}

/// Everything but the frame loop and logging, so tests can drive the app by hand.
fn add_simulation(app: &mut App, config: &SimulationConfig) -> Result<(), ConfigError> {
    config.validate()?;
    let waves = WaveSequencer::new(default_waves(), config.spawn_radius)?;
    let loadout = PlayerLoadout::default();
    loadout.validate()?;

    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f32(
        config.dt,
    )))
    .insert_state(GameState::InGame)
    .add_plugins(game_plugin)
    .insert_resource(GameRng::seeded(config.seed))
    .insert_resource(waves)
    .insert_resource(loadout)
    .insert_resource(config.clone())
    .add_systems(Update, exit_system.after(GameSet::Cleanup));

    if config.autopilot {
        app.add_systems(
            Update,
            autopilot_system
                .in_set(GameSet::Input)
                .before(dash_trigger_system)
                .run_if(in_state(GameState::InGame)),
        );
    }
    Ok(())
}

fn build_app(config: &SimulationConfig) -> Result<App, ConfigError> {
    let mut app = App::new();
    app.add_plugins((
        MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::ZERO)),
        StatesPlugin,
        LogPlugin {
            level: if config.verbose { Level::DEBUG } else { Level::INFO },
            ..default()
        },
    ));
    add_simulation(&mut app, config)?;
    Ok(app)
}

fn main() -> Result<(), ConfigError> {
    let config = SimulationConfig::from(Args::parse());
    let mut app = build_app(&config)?;
    app.run();
    Ok(())
}
