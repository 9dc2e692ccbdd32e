use bevy::prelude::*;

/// Per-frame phases of the simulation, chained in declaration order by the game plugin.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum GameSet {
    /// Player intent and dash triggers
    Input,
    /// Locomotion, dash and knockback motion, enemy chase, gem homing
    Movement,
    /// Weapon hits, damage resolution, deaths, experience
    Combat,
    /// Waves, gems and weapon attacks
    Spawning,
    /// Hit flash, hit tilt, camera
    Effects,
    /// Death sequences, intent edges, run stats
    Cleanup,
}
