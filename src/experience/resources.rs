use bevy::prelude::*;

/// Tuning shared by every experience gem.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GemSettings {
    /// Speed at the moment a gem is magnetized
    pub initial_speed: f32,
    /// Speed gained per second while homing
    pub acceleration: f32,
    /// Slerp rate toward the player while farther than `lock_on_distance`
    pub turn_speed: f32,
    pub pickup_distance: f32,
    /// Inside this distance the gem flies straight at the player
    pub lock_on_distance: f32,
    /// Aim point above the player's feet
    pub height_offset: f32,
    /// Ground distance at which an idle gem starts homing
    pub magnet_radius: f32,
}

impl Default for GemSettings {
    fn default() -> Self {
        Self {
            initial_speed: 12.0,
            acceleration: 35.0,
            turn_speed: 5.0,
            pickup_distance: 1.5,
            lock_on_distance: 4.0,
            height_offset: 1.0,
            magnet_radius: 3.0,
        }
    }
}
