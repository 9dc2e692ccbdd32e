use bevy::prelude::*;

use crate::camera::components::{smooth_damp, CameraRig};
use crate::combat::events::CameraShakeEvent;
use crate::player::components::Player;
use crate::player::events::DashEvent;
use crate::rng::GameRng;

pub fn spawn_camera_rig(mut commands: Commands) {
    let rig = CameraRig::default();
    let transform = Transform::from_translation(rig.follow_point(Vec3::ZERO))
        .with_rotation(rig.view_rotation());
    commands.spawn((Name::new("Camera Rig"), rig, transform));
}

/// Lag further behind the player while a dash is in flight.
pub fn camera_dash_lag_system(
    mut dash_events: MessageReader<DashEvent>,
    mut rig_query: Query<&mut CameraRig>,
) {
    for event in dash_events.read() {
        let dashing = matches!(event, DashEvent::Started { .. });
        for mut rig in rig_query.iter_mut() {
            rig.set_dash_lag(dashing);
        }
    }
}

pub fn camera_shake_trigger_system(
    mut shake_events: MessageReader<CameraShakeEvent>,
    mut rig_query: Query<&mut CameraRig>,
) {
    for event in shake_events.read() {
        for mut rig in rig_query.iter_mut() {
            rig.shake(event.duration, event.magnitude);
        }
    }
}

/// Ease the zoom, pick the follow point (plus shake), and spring the camera toward it.
pub fn camera_follow_system(
    time: Res<Time>,
    mut rng: ResMut<GameRng>,
    player_query: Query<&Transform, With<Player>>,
    mut rig_query: Query<(&mut Transform, &mut CameraRig), Without<Player>>,
) {
    let Ok(player_transform) = player_query.single() else {
        return;
    };
    let dt = time.delta_secs();

    for (mut transform, mut rig) in rig_query.iter_mut() {
        rig.ease_zoom(dt);
        let mut target = rig.follow_point(player_transform.translation);

        if let Some(shake) = rig.shake.as_mut() {
            target += rng.point_in_sphere(shake.magnitude);
            shake.remaining -= dt;
            if shake.remaining <= 0.0 {
                rig.shake = None;
            }
        }

        let smooth_time = rig.smooth_time;
        transform.translation = smooth_damp(
            transform.translation,
            target,
            &mut rig.velocity,
            smooth_time,
            dt,
        );
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

    fn setup_app() -> App {
        let mut app = App::new();
        app.init_resource::<Time>();
        app.insert_resource(GameRng::seeded(11));
        app.add_message::<DashEvent>();
        app.add_message::<CameraShakeEvent>();
        app
    }

    fn spawn_rig(app: &mut App) -> Entity {
        let _ = app.world_mut().run_system_once(spawn_camera_rig);
        let mut query = app.world_mut().query_filtered::<Entity, With<CameraRig>>();
        query.single(app.world()).unwrap()
    }

    #[test]
    fn test_rig_spawns_behind_origin() {
        let mut app = setup_app();
        let rig = spawn_rig(&mut app);

        let transform = app.world().get::<Transform>(rig).unwrap();
        assert!(transform.translation.y > 0.0);
        assert!(transform.translation.z < 0.0);
        assert!(transform.forward().z > 0.0);
    }

    #[test]
    fn test_dash_events_toggle_lag() {
        let mut app = setup_app();
        let rig = spawn_rig(&mut app);
        let player = app.world_mut().spawn(Player).id();

        app.world_mut().write_message(DashEvent::Started {
            entity: player,
            direction: Vec3::Z,
        });
        let _ = app.world_mut().run_system_once(camera_dash_lag_system);
        assert_eq!(app.world().get::<CameraRig>(rig).unwrap().smooth_time, 0.4);

        app.world_mut()
            .write_message(DashEvent::Ended { entity: player });
        let _ = app.world_mut().run_system_once(camera_dash_lag_system);
        assert_eq!(app.world().get::<CameraRig>(rig).unwrap().smooth_time, 0.1);
    }

    #[test]
    fn test_camera_follows_player() {
        let mut app = setup_app();
        let rig = spawn_rig(&mut app);
        app.world_mut()
            .spawn((Player, Transform::from_xyz(5.0, 0.0, 0.0)));

        for _ in 0..60 {
            advance(&mut app, 1.0 / 30.0);
            let _ = app.world_mut().run_system_once(camera_follow_system);
        }

        let expected = CameraRig::default().follow_point(Vec3::new(5.0, 0.0, 0.0));
        let position = app.world().get::<Transform>(rig).unwrap().translation;
        assert!(position.distance(expected) < 0.01);
    }

    #[test]
    fn test_shake_offsets_then_expires() {
        let mut app = setup_app();
        let rig = spawn_rig(&mut app);
        app.world_mut().spawn((Player, Transform::default()));

        app.world_mut().write_message(CameraShakeEvent {
            duration: 0.2,
            magnitude: 0.5,
        });
        let _ = app.world_mut().run_system_once(camera_shake_trigger_system);
        assert!(app.world().get::<CameraRig>(rig).unwrap().shake.is_some());

        for _ in 0..3 {
            advance(&mut app, 0.1);
            let _ = app.world_mut().run_system_once(camera_follow_system);
        }
        assert!(app.world().get::<CameraRig>(rig).unwrap().shake.is_none());
    }

    #[test]
    fn test_follow_without_player_leaves_camera() {
        let mut app = setup_app();
        let rig = spawn_rig(&mut app);
        let before = app.world().get::<Transform>(rig).unwrap().translation;

        advance(&mut app, 0.1);
        let _ = app.world_mut().run_system_once(camera_follow_system);

        assert_eq!(app.world().get::<Transform>(rig).unwrap().translation, before);
    }
}
