use bevy::prelude::*;

use crate::combat::systems::apply_damage_system;
use crate::experience::events::*;
use crate::experience::resources::GemSettings;
use crate::experience::systems::*;
use crate::game::events::LootDropEvent;
use crate::game::sets::GameSet;
use crate::states::*;

pub fn plugin(app: &mut App) {
    app.init_resource::<GemSettings>()
        .add_message::<LootDropEvent>()
        .add_message::<ExperienceCollected>()
        .add_message::<PlayerLevelUpEvent>()
        .add_systems(
            Update,
            (magnetize_gems_system, gem_homing_system)
                .chain()
                .in_set(GameSet::Movement)
                .run_if(in_state(GameState::InGame)),
        )
        .add_systems(
            Update,
            apply_experience_system
                .after(apply_damage_system)
                .in_set(GameSet::Combat)
                .run_if(in_state(GameState::InGame)),
        )
        .add_systems(
            Update,
            spawn_experience_gems_system
                .in_set(GameSet::Spawning)
                .run_if(in_state(GameState::InGame)),
        );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::components::Stats;
    use crate::experience::components::{ExperienceGem, LevelProgress};
    use crate::player::components::Player;

    fn setup_app() -> App {
        let mut app = App::new();
        app.add_plugins(bevy::time::TimePlugin::default());
        app.add_plugins(bevy::state::app::StatesPlugin);
        app.insert_state(GameState::InGame);
        app.configure_sets(
            Update,
            (GameSet::Movement, GameSet::Combat, GameSet::Spawning).chain(),
        );
        app.add_plugins(plugin);
        app
    }

    #[test]
    fn test_plugin_registers_gem_settings() {
        let app = setup_app();
        assert_eq!(app.world().resource::<GemSettings>().magnet_radius, 3.0);
    }

    #[test]
    fn test_gem_next_to_player_is_collected() {
        let mut app = setup_app();
        let player = app
            .world_mut()
            .spawn((
                Player,
                Transform::default(),
                LevelProgress::default(),
                Stats::default(),
            ))
            .id();
        app.world_mut().write_message(LootDropEvent {
            position: Vec3::new(0.5, 0.5, 0.0),
            experience: 30,
        });

        // Spawn, then magnetize and collect
        app.update();
        app.update();
        app.update();

        let mut gems = app.world_mut().query::<&ExperienceGem>();
        assert_eq!(gems.iter(app.world()).count(), 0);
        assert_eq!(
            app.world().get::<LevelProgress>(player).unwrap().experience(),
            30
        );
    }
}
