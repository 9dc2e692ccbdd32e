use bevy::prelude::*;

use crate::combat::area::AreaBox;
use crate::combat::components::{ActorKind, Hitbox, Invincibility, Stats};
use crate::combat::events::{DamageEvent, DeathEvent};
use crate::enemies::components::Enemy;
use crate::game::events::GameOverEvent;
use crate::movement::components::{DashMotion, Facing, Locomotion, MotionState};
use crate::player::components::*;
use crate::player::events::DashEvent;
use crate::states::GameState;

/// Translate WASD + Space into `PlayerIntent`.
/// W/S map to +Z/-Z, D/A to +X/-X.
pub fn read_keyboard_input(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut player_query: Query<&mut PlayerIntent, With<Player>>,
) {
    let Ok(mut intent) = player_query.single_mut() else {
        return;
    };

    let mut movement = Vec2::ZERO;
    if keyboard_input.pressed(KeyCode::KeyW) {
        movement.y += 1.0;
    }
    if keyboard_input.pressed(KeyCode::KeyS) {
        movement.y -= 1.0;
    }
    if keyboard_input.pressed(KeyCode::KeyD) {
        movement.x += 1.0;
    }
    if keyboard_input.pressed(KeyCode::KeyA) {
        movement.x -= 1.0;
    }

    intent.movement = movement;
    if keyboard_input.just_pressed(KeyCode::Space) {
        intent.dash = true;
    }
}

/// Start a dash on the intent edge when cooldown, phase and motion all allow it.
#[allow(clippy::type_complexity)]
pub fn dash_trigger_system(
    mut player_query: Query<
        (
            Entity,
            &PlayerIntent,
            &Facing,
            &DashSettings,
            &mut Dash,
            &mut MotionState,
            &mut Invincibility,
        ),
        With<Player>,
    >,
    mut dash_events: MessageWriter<DashEvent>,
) {
    for (entity, intent, facing, settings, mut dash, mut motion, mut invincibility) in
        player_query.iter_mut()
    {
        if !intent.dash {
            continue;
        }
        if !dash.can_start() || !motion.accepts_input() {
            debug!("dash rejected: phase {:?}, cooldown {:.2}s", dash.phase, dash.cooldown.remaining());
            continue;
        }

        let dash_motion = DashMotion::new(facing.direction());
        let direction = dash_motion.direction;

        invincibility.set(true);
        dash.cooldown.trigger(settings.cooldown);
        dash.phase = DashPhase::Dashing;
        *motion = MotionState::Dashing(dash_motion);

        dash_events.write(DashEvent::Started { entity, direction });
    }
}

/// Move the dashing player and strike every enemy the dash box sweeps over, once per dash.
#[allow(clippy::type_complexity)]
pub fn dash_motion_system(
    time: Res<Time>,
    mut player_query: Query<
        (Entity, &mut Transform, &mut MotionState, &mut Dash, &DashSettings),
        With<Player>,
    >,
    enemy_query: Query<(Entity, &Transform, &Hitbox), (With<Enemy>, Without<Player>)>,
    mut damage_events: MessageWriter<DamageEvent>,
    mut dash_events: MessageWriter<DashEvent>,
) {
    let dt = time.delta_secs();

    for (entity, mut transform, mut motion, mut dash, settings) in player_query.iter_mut() {
        let finished = {
            let MotionState::Dashing(dash_motion) = &mut *motion else {
                continue;
            };

            let step = dt.min(settings.duration - dash_motion.elapsed).max(0.0);
            let travel = settings.speed * step;
            transform.translation += dash_motion.direction * travel;
            dash_motion.elapsed += dt;

            strike_overlapping(
                entity,
                transform.translation,
                dash_motion,
                &settings.hitbox.swept(travel),
                settings.damage,
                &enemy_query,
                &mut damage_events,
            );

            dash_motion.elapsed >= settings.duration
        };

        if finished {
            *motion = MotionState::Idle;
            dash.phase = DashPhase::PostDashGrace(Timer::from_seconds(
                settings.post_dash_immunity,
                TimerMode::Once,
            ));
            dash_events.write(DashEvent::Ended { entity });
        }
    }
}

fn strike_overlapping(
    attacker: Entity,
    origin: Vec3,
    dash_motion: &mut DashMotion,
    area: &AreaBox,
    damage: f32,
    enemy_query: &Query<(Entity, &Transform, &Hitbox), (With<Enemy>, Without<Player>)>,
    damage_events: &mut MessageWriter<DamageEvent>,
) {
    for (enemy, enemy_transform, hitbox) in enemy_query.iter() {
        if !area.overlaps_circle(origin, dash_motion.direction, enemy_transform.translation, hitbox.radius()) {
            continue;
        }
        if dash_motion.hits.try_hit(enemy) {
            damage_events.write(DamageEvent::with_source(enemy, damage, attacker, origin));
        }
    }
}

/// Tick the dash cooldown and close the post-dash grace window.
pub fn dash_recovery_system(time: Res<Time>, mut query: Query<(&mut Dash, &mut Invincibility)>) {
    for (mut dash, mut invincibility) in query.iter_mut() {
        dash.cooldown.tick(time.delta_secs());

        let grace_over = match &mut dash.phase {
            DashPhase::PostDashGrace(timer) => {
                timer.tick(time.delta());
                timer.is_finished()
            }
            _ => false,
        };

        if grace_over {
            dash.phase = DashPhase::Ready;
            invincibility.set(false);
        }
    }
}

pub fn regeneration_system(time: Res<Time>, mut query: Query<(&mut Stats, &Regeneration)>) {
    for (mut stats, regeneration) in query.iter_mut() {
        if regeneration.0 > 0.0 && stats.current_health() < stats.max_health {
            stats.heal(regeneration.0 * time.delta_secs());
        }
    }
}

/// Stop the player for good and end the run when the player's `DeathEvent` arrives.
pub fn handle_player_death_system(
    mut death_events: MessageReader<DeathEvent>,
    mut player_query: Query<(&mut MotionState, Option<&mut Locomotion>), With<Player>>,
    mut game_over_events: MessageWriter<GameOverEvent>,
    mut next_state: ResMut<NextState<GameState>>,
    time: Res<Time>,
) {
    for event in death_events.read() {
        if event.kind != ActorKind::Player {
            continue;
        }
        let Ok((mut motion, locomotion)) = player_query.get_mut(event.entity) else {
            continue;
        };
        if motion.is_dead() {
            continue;
        }

        *motion = MotionState::Dead;
        if let Some(mut locomotion) = locomotion {
            locomotion.velocity = Vec3::ZERO;
        }

        info!("GAME OVER after {:.1}s", time.elapsed_secs());
        game_over_events.write(GameOverEvent {
            position: event.position,
            survival_time: time.elapsed_secs(),
        });
        next_state.set(GameState::GameOver);
    }
}

/// Edge inputs only live for one frame.
pub fn clear_intent_edges(mut query: Query<&mut PlayerIntent>) {
    for mut intent in query.iter_mut() {
        intent.clear_edges();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::app::App;
    use bevy::ecs::system::RunSystemOnce;
    use std::time::Duration;

    fn advance(app: &mut App, secs: f32) {
        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs_f32(secs));
    }

    fn collect<M: Message + Clone>(app: &App) -> Vec<M> {
        let messages = app.world().resource::<Messages<M>>();
        let mut cursor = messages.get_cursor();
        cursor.read(messages).cloned().collect()
    }

    fn setup_app() -> App {
        let mut app = App::new();
        app.init_resource::<Time>();
        app.add_message::<DashEvent>();
        app.add_message::<DamageEvent>();
        app
    }

    fn spawn_player(app: &mut App) -> Entity {
        app.world_mut()
            .spawn((
                Player,
                PlayerIntent {
                    dash: true,
                    ..default()
                },
                Transform::default(),
                Facing(Vec3::Z),
                DashSettings::default(),
                Dash::default(),
                MotionState::default(),
                Invincibility::default(),
            ))
            .id()
    }

    fn spawn_enemy_at(app: &mut App, position: Vec3) -> Entity {
        app.world_mut()
            .spawn((Enemy::default(), Transform::from_translation(position), Hitbox::new(0.5)))
            .id()
    }

    /// Trigger then run the dash to completion in 0.05s slices.
    fn run_dash(app: &mut App) {
        let _ = app.world_mut().run_system_once(dash_trigger_system);
        for _ in 0..5 {
            advance(app, 0.05);
            let _ = app.world_mut().run_system_once(dash_motion_system);
        }
    }

    mod dash_tests {
        use super::*;

        #[test]
        fn test_dash_starts_invincible_and_on_cooldown() {
            let mut app = setup_app();
            let player = spawn_player(&mut app);

            let _ = app.world_mut().run_system_once(dash_trigger_system);

            let dash = app.world().get::<Dash>(player).unwrap();
            assert_eq!(dash.phase, DashPhase::Dashing);
            assert_eq!(dash.cooldown.remaining(), 1.0);
            assert!(app.world().get::<Invincibility>(player).unwrap().is_active());
            assert!(app.world().get::<MotionState>(player).unwrap().is_dashing());

            let events = collect::<DashEvent>(&app);
            assert_eq!(
                events,
                vec![DashEvent::Started {
                    entity: player,
                    direction: Vec3::Z
                }]
            );
        }

        #[test]
        fn test_dash_rejected_without_edge_or_on_cooldown() {
            let mut app = setup_app();
            let player = spawn_player(&mut app);
            app.world_mut().get_mut::<Dash>(player).unwrap().cooldown.trigger(0.3);

            let _ = app.world_mut().run_system_once(dash_trigger_system);
            assert!(app.world().get::<Dash>(player).unwrap().is_ready());

            app.world_mut().get_mut::<Dash>(player).unwrap().cooldown.tick(0.3);
            app.world_mut().get_mut::<PlayerIntent>(player).unwrap().dash = false;
            let _ = app.world_mut().run_system_once(dash_trigger_system);
            assert!(app.world().get::<Dash>(player).unwrap().is_ready());
        }

        #[test]
        fn test_dash_rejected_while_knocked_back() {
            let mut app = setup_app();
            let player = spawn_player(&mut app);
            *app.world_mut().get_mut::<MotionState>(player).unwrap() = MotionState::Knockback(
                crate::movement::components::Knockback::new(Vec3::X, 8.0, 0.2),
            );

            let _ = app.world_mut().run_system_once(dash_trigger_system);

            assert!(app.world().get::<Dash>(player).unwrap().is_ready());
            assert!(!app.world().get::<Invincibility>(player).unwrap().is_active());
        }

        #[test]
        fn test_dash_travels_and_enters_grace() {
            let mut app = setup_app();
            let player = spawn_player(&mut app);

            run_dash(&mut app);

            // 20 u/s for 0.2 s
            let transform = app.world().get::<Transform>(player).unwrap();
            assert!((transform.translation.z - 4.0).abs() < 0.001);

            let dash = app.world().get::<Dash>(player).unwrap();
            assert!(matches!(dash.phase, DashPhase::PostDashGrace(_)));
            assert!(matches!(
                app.world().get::<MotionState>(player).unwrap(),
                MotionState::Idle
            ));
            assert!(app.world().get::<Invincibility>(player).unwrap().is_active());
            assert!(collect::<DashEvent>(&app).contains(&DashEvent::Ended { entity: player }));
        }

        #[test]
        fn test_dash_hits_each_enemy_once() {
            let mut app = setup_app();
            spawn_player(&mut app);
            let near = spawn_enemy_at(&mut app, Vec3::new(0.0, 0.0, 1.0));
            let far = spawn_enemy_at(&mut app, Vec3::new(0.0, 0.0, 3.0));
            let beside = spawn_enemy_at(&mut app, Vec3::new(5.0, 0.0, 1.0));

            run_dash(&mut app);

            let damage = collect::<DamageEvent>(&app);
            let count = |e: Entity| damage.iter().filter(|d| d.target == e).count();
            assert_eq!(count(near), 1);
            assert_eq!(count(far), 1);
            assert_eq!(count(beside), 0);
            assert!(damage.iter().all(|d| d.amount == 15.0));
        }

        #[test]
        fn test_dash_hits_enemy_passed_within_one_frame() {
            let mut app = setup_app();
            spawn_player(&mut app);
            let passed = spawn_enemy_at(&mut app, Vec3::new(0.0, 0.0, 0.5));

            let _ = app.world_mut().run_system_once(dash_trigger_system);
            advance(&mut app, 0.2);
            let _ = app.world_mut().run_system_once(dash_motion_system);

            let damage = collect::<DamageEvent>(&app);
            assert_eq!(damage.iter().filter(|d| d.target == passed).count(), 1);
        }

        #[test]
        fn test_grace_ends_and_cooldown_runs_independently() {
            let mut app = setup_app();
            let player = spawn_player(&mut app);
            run_dash(&mut app);

            // Grace is 0.2 s; cooldown was 1.0 s
            advance(&mut app, 0.25);
            let _ = app.world_mut().run_system_once(dash_recovery_system);

            let dash = app.world().get::<Dash>(player).unwrap();
            assert!(dash.is_ready());
            assert!(!dash.cooldown.is_ready());
            assert!(!app.world().get::<Invincibility>(player).unwrap().is_active());

            advance(&mut app, 0.75);
            let _ = app.world_mut().run_system_once(dash_recovery_system);
            assert!(app.world().get::<Dash>(player).unwrap().can_start());
        }
    }

    #[test]
    fn test_keyboard_sets_movement_and_dash_edge() {
        let mut app = App::new();
        app.init_resource::<ButtonInput<KeyCode>>();
        let player = app.world_mut().spawn((Player, PlayerIntent::default())).id();

        {
            let mut input = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
            input.press(KeyCode::KeyW);
            input.press(KeyCode::KeyD);
            input.press(KeyCode::Space);
        }
        let _ = app.world_mut().run_system_once(read_keyboard_input);

        let intent = app.world().get::<PlayerIntent>(player).unwrap();
        assert_eq!(intent.movement, Vec2::new(1.0, 1.0));
        assert!(intent.dash);

        let _ = app.world_mut().run_system_once(clear_intent_edges);
        let intent = app.world().get::<PlayerIntent>(player).unwrap();
        assert!(!intent.dash);
        assert_eq!(intent.movement, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_regeneration_heals_over_time() {
        let mut app = App::new();
        app.init_resource::<Time>();
        let player = app
            .world_mut()
            .spawn((
                Stats::new(100.0, 0.0, 5.0, 1.0).with_health(50.0),
                Regeneration(2.0),
            ))
            .id();

        advance(&mut app, 0.5);
        let _ = app.world_mut().run_system_once(regeneration_system);

        let stats = app.world().get::<Stats>(player).unwrap();
        assert_eq!(stats.current_health(), 51.0);
    }

    #[test]
    fn test_regeneration_capped_at_max() {
        let mut app = App::new();
        app.init_resource::<Time>();
        let player = app
            .world_mut()
            .spawn((
                Stats::new(100.0, 0.0, 5.0, 1.0).with_health(99.5),
                Regeneration(10.0),
            ))
            .id();

        advance(&mut app, 1.0);
        let _ = app.world_mut().run_system_once(regeneration_system);

        assert_eq!(app.world().get::<Stats>(player).unwrap().current_health(), 100.0);
    }

    #[test]
    fn test_player_death_ends_game() {
        let mut app = App::new();
        app.init_resource::<Time>();
        app.add_plugins(bevy::state::app::StatesPlugin);
        app.init_state::<GameState>();
        app.add_message::<DeathEvent>();
        app.add_message::<GameOverEvent>();
        let player = app
            .world_mut()
            .spawn((Player, MotionState::default(), Locomotion::default()))
            .id();

        app.world_mut()
            .write_message(DeathEvent::new(player, Vec3::ZERO, ActorKind::Player));
        let _ = app.world_mut().run_system_once(handle_player_death_system);

        assert!(app.world().get::<MotionState>(player).unwrap().is_dead());
        assert_eq!(collect::<GameOverEvent>(&app).len(), 1);

        app.update();
        assert_eq!(
            *app.world().resource::<State<GameState>>().get(),
            GameState::GameOver
        );
    }

    #[test]
    fn test_enemy_death_does_not_end_game() {
        let mut app = App::new();
        app.init_resource::<Time>();
        app.add_plugins(bevy::state::app::StatesPlugin);
        app.init_state::<GameState>();
        app.add_message::<DeathEvent>();
        app.add_message::<GameOverEvent>();
        let player = app
            .world_mut()
            .spawn((Player, MotionState::default()))
            .id();
        let enemy = app.world_mut().spawn_empty().id();

        app.world_mut()
            .write_message(DeathEvent::new(enemy, Vec3::ZERO, ActorKind::Enemy));
        let _ = app.world_mut().run_system_once(handle_player_death_system);

        assert!(!app.world().get::<MotionState>(player).unwrap().is_dead());
        assert!(collect::<GameOverEvent>(&app).is_empty());
    }
}
