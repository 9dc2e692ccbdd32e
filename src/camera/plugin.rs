use bevy::prelude::*;

use crate::camera::systems::*;
use crate::combat::events::CameraShakeEvent;
use crate::game::sets::GameSet;
use crate::player::events::DashEvent;
use crate::rng::GameRng;
use crate::states::GameState;

pub fn plugin(app: &mut App) {
    app.init_resource::<GameRng>()
        .add_message::<DashEvent>()
        .add_message::<CameraShakeEvent>()
        .add_systems(OnEnter(GameState::InGame), spawn_camera_rig)
        .add_systems(
            Update,
            (
                camera_dash_lag_system,
                camera_shake_trigger_system,
                camera_follow_system,
            )
                .chain()
                .in_set(GameSet::Effects)
                .run_if(in_state(GameState::InGame)),
        );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::components::CameraRig;

    #[test]
    fn test_camera_plugin_spawns_rig_on_enter() {
        let mut app = App::new();
        app.add_plugins((bevy::state::app::StatesPlugin, bevy::time::TimePlugin));
        app.insert_state(GameState::InGame);
        app.add_plugins(plugin);

        app.update();

        let mut query = app.world_mut().query::<&CameraRig>();
        assert_eq!(query.iter(app.world()).count(), 1);
    }
}
