use bevy::prelude::*;

use crate::game::config::{in_range, non_negative, Result};

/// How long the death animation plays before the body starts sinking.
pub const DEATH_ANIMATION_SECS: f32 = 1.5;
/// How long the body sinks before it is removed.
pub const SINK_SECS: f32 = 1.5;
/// Sink speed in units per second.
pub const SINK_SPEED: f32 = 1.0;
/// Height above the corpse where loot appears.
pub const LOOT_HEIGHT: f32 = 0.5;

/// What an enemy drops when it dies.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct LootTable {
    /// Experience carried by each dropped gem
    pub experience_amount: u32,
    /// Per-roll drop chance in percent (0-100)
    pub drop_chance: f32,
    /// Radius of the scatter disk around the corpse
    pub drop_spread: f32,
    pub max_drops: u32,
}

impl LootTable {
    pub fn validate(&self) -> Result<()> {
        non_negative("drop spread", self.drop_spread)?;
        in_range("drop chance", self.drop_chance, 0.0, 100.0)
    }
}

impl Default for LootTable {
    fn default() -> Self {
        Self {
            experience_amount: 10,
            drop_chance: 100.0,
            drop_spread: 0.5,
            max_drops: 3,
        }
    }
}

/// Result of one death-sequence tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeathStep {
    /// Distance to move down this tick
    pub sink: f32,
    /// Body is done and should be removed
    pub finished: bool,
}

/// `Dying -> Sinking -> removed`. Not cancellable once started.
#[derive(Component, Debug, Clone)]
pub enum DeathSequence {
    Dying(Timer),
    Sinking { elapsed: f32 },
}

impl DeathSequence {
    pub fn new() -> Self {
        Self::Dying(Timer::from_seconds(DEATH_ANIMATION_SECS, TimerMode::Once))
    }

    pub fn is_sinking(&self) -> bool {
        matches!(self, Self::Sinking { .. })
    }

    pub fn advance(&mut self, delta: std::time::Duration) -> DeathStep {
        match self {
            Self::Dying(timer) => {
                timer.tick(delta);
                if timer.is_finished() {
                    *self = Self::Sinking { elapsed: 0.0 };
                }
                DeathStep {
                    sink: 0.0,
                    finished: false,
                }
            }
            Self::Sinking { elapsed } => {
                let dt = delta.as_secs_f32();
                let step = dt.min(SINK_SECS - *elapsed).max(0.0);
                *elapsed += dt;
                DeathStep {
                    sink: step * SINK_SPEED,
                    finished: *elapsed >= SINK_SECS,
                }
            }
        }
    }
}

impl Default for DeathSequence {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_loot_table_defaults() {
        let loot = LootTable::default();
        assert_eq!(loot.max_drops, 3);
        assert_eq!(loot.drop_chance, 100.0);
        assert_eq!(loot.drop_spread, 0.5);
        assert!(loot.validate().is_ok());
    }

    #[test]
    fn test_loot_table_rejects_bad_chance() {
        let loot = LootTable {
            drop_chance: 120.0,
            ..default()
        };
        assert!(loot.validate().is_err());
    }

    #[test]
    fn test_death_sequence_waits_then_sinks() {
        let mut sequence = DeathSequence::new();

        let step = sequence.advance(Duration::from_secs_f32(1.0));
        assert_eq!(step.sink, 0.0);
        assert!(!sequence.is_sinking());

        sequence.advance(Duration::from_secs_f32(0.5));
        assert!(sequence.is_sinking());

        let step = sequence.advance(Duration::from_secs_f32(0.5));
        assert!((step.sink - 0.5).abs() < 0.0001);
        assert!(!step.finished);
    }

    #[test]
    fn test_death_sequence_total_sink_is_bounded() {
        let mut sequence = DeathSequence::Sinking { elapsed: 0.0 };
        let mut total = 0.0;
        let mut finished = false;
        for _ in 0..20 {
            let step = sequence.advance(Duration::from_secs_f32(0.1));
            total += step.sink;
            if step.finished {
                finished = true;
                break;
            }
        }
        assert!(finished);
        assert!((total - SINK_SECS * SINK_SPEED).abs() < 0.001);
    }
}
