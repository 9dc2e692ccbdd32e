use bevy::prelude::*;

/// Wave progress notifications for HUD and game flow.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveEvent {
    WaveStarted(usize),
    WaveCleared(usize),
    /// Written exactly once, after the last wave's quiet period
    AllWavesFinished,
}
