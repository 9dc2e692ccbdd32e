use bevy::prelude::*;

/// A gem reached the player.
#[derive(Message, Debug, Clone, PartialEq)]
pub struct ExperienceCollected {
    pub amount: u32,
}

/// Written once per level gained.
#[derive(Message, Debug, Clone, PartialEq)]
pub struct PlayerLevelUpEvent {
    pub level: u32,
}
