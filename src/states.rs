use bevy::prelude::*;

/// Top-level game flow. Gameplay systems only run in `InGame`.
#[derive(Clone, Copy, Default, Eq, PartialEq, Debug, Hash, States)]
pub enum GameState {
    /// Arena empty; entering clears any previous run
    #[default]
    Intro,
    InGame,
    /// Player died; the final scene stays in the world
    GameOver,
}
