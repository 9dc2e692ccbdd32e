use bevy::prelude::*;

/// Message fired once when an enemy starts its death sequence
#[derive(Message, Debug, Clone, PartialEq)]
pub struct EnemyDiedEvent {
    pub entity: Entity,
    pub position: Vec3,
}

/// Message fired for each loot roll that succeeded
#[derive(Message, Debug, Clone, PartialEq)]
pub struct LootDropEvent {
    pub position: Vec3,
    /// Experience carried by the dropped gem
    pub experience: u32,
}

/// Event fired when the game ends (player death)
#[derive(Message, Debug, Clone, PartialEq)]
pub struct GameOverEvent {
    pub position: Vec3,
    pub survival_time: f32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::app::App;

    #[test]
    fn test_game_over_event_creation() {
        let event = GameOverEvent {
            position: Vec3::ZERO,
            survival_time: 120.5,
        };
        assert_eq!(event.survival_time, 120.5);
    }

    #[test]
    fn test_game_over_event_can_be_registered() {
        let mut app = App::new();
        app.add_message::<GameOverEvent>();
        // Should not panic
        app.update();
    }

    #[test]
    fn test_loot_drop_event_can_be_registered() {
        let mut app = App::new();
        app.add_message::<LootDropEvent>();
        app.world_mut().write_message(LootDropEvent {
            position: Vec3::Y,
            experience: 10,
        });
        app.update();
    }
}
