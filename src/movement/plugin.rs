use bevy::prelude::*;

use crate::combat::systems::apply_damage_system;
use crate::game::resources::PlayerPosition;
use crate::game::sets::GameSet;
use crate::movement::systems::{
    knockback_motion_system, knockback_trigger_system, player_locomotion_system,
    track_player_position,
};
use crate::states::GameState;

/// Plugin that adds the movement module's systems to the app.
/// Locomotion and knockback run in `GameSet::Movement`; knockback requests
/// are accepted in `GameSet::Combat` right after damage resolves.
pub fn plugin(app: &mut App) {
    app.init_resource::<PlayerPosition>()
        .add_systems(
            Update,
            (
                (player_locomotion_system, knockback_motion_system),
                track_player_position,
            )
                .chain()
                .in_set(GameSet::Movement)
                .run_if(in_state(GameState::InGame)),
        )
        .add_systems(
            Update,
            knockback_trigger_system
                .after(apply_damage_system)
                .in_set(GameSet::Combat)
                .run_if(in_state(GameState::InGame)),
        );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movement::components::{Knockback, MotionState};
    use std::time::Duration;

    fn setup_app() -> App {
        let mut app = App::new();
        app.add_plugins(bevy::time::TimePlugin::default());
        app.add_plugins(bevy::state::app::StatesPlugin);
        app.init_state::<GameState>();
        app.add_message::<crate::movement::events::KnockbackEvent>();
        app.configure_sets(
            Update,
            GameSet::Movement.run_if(in_state(GameState::InGame)),
        );
        plugin(&mut app);
        app
    }

    fn spawn_knocked(app: &mut App) -> Entity {
        app.world_mut()
            .spawn((
                Transform::from_translation(Vec3::ZERO),
                MotionState::Knockback(Knockback::new(Vec3::X, 100.0, 10.0)),
            ))
            .id()
    }

    fn advance(app: &mut App) {
        let mut time = app.world_mut().get_resource_mut::<Time>().unwrap();
        time.advance_by(Duration::from_secs(1));
    }

    #[test]
    fn test_plugin_can_be_added_to_app() {
        let mut app = setup_app();
        app.update();
        assert!(app.world().contains_resource::<PlayerPosition>());
    }

    #[test]
    fn test_plugin_system_runs_in_game_state() {
        let mut app = setup_app();
        let entity = spawn_knocked(&mut app);

        advance(&mut app);
        app.update();

        let transform = app.world().get::<Transform>(entity).unwrap();
        assert_eq!(
            transform.translation.x, 0.0,
            "Entity should not move in Intro state"
        );

        app.world_mut()
            .get_resource_mut::<NextState<GameState>>()
            .unwrap()
            .set(GameState::InGame);
        app.update();

        advance(&mut app);
        app.update();

        let transform = app.world().get::<Transform>(entity).unwrap();
        assert!(
            transform.translation.x > 0.0,
            "Entity should move in InGame state"
        );
    }

    #[test]
    fn test_plugin_system_does_not_run_in_other_states() {
        let mut app = setup_app();
        let entity = spawn_knocked(&mut app);

        advance(&mut app);
        app.world_mut()
            .get_resource_mut::<NextState<GameState>>()
            .unwrap()
            .set(GameState::GameOver);
        app.update();
        app.update();

        let transform = app.world().get::<Transform>(entity).unwrap();
        assert_eq!(
            transform.translation.x, 0.0,
            "Entity should not move in GameOver state"
        );
    }
}
