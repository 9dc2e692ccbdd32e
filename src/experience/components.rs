use bevy::prelude::*;

use crate::game::config::{ConfigError, Result};

/// Player level and experience toward the next level.
///
/// After every `add_experience` call `experience < experience_to_next`;
/// the threshold grows by `growth` on each level-up and always increases.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct LevelProgress {
    level: u32,
    experience: u32,
    experience_to_next: u32,
    growth: f32,
}

impl LevelProgress {
    pub fn new(experience_to_next: u32, growth: f32) -> Result<Self> {
        if experience_to_next == 0 {
            return Err(ConfigError::ExperienceThreshold);
        }
        if growth <= 1.0 || growth.is_nan() {
            return Err(ConfigError::LevelGrowth(growth));
        }
        Ok(Self {
            level: 1,
            experience: 0,
            experience_to_next,
            growth,
        })
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn experience(&self) -> u32 {
        self.experience
    }

    pub fn experience_to_next(&self) -> u32 {
        self.experience_to_next
    }

    /// Progress through the current level (0.0 to 1.0) for a XP bar
    pub fn fraction(&self) -> f32 {
        self.experience as f32 / self.experience_to_next as f32
    }

    /// Add experience and roll over into as many levels as it covers.
    /// Returns the number of levels gained.
    pub fn add_experience(&mut self, amount: u32) -> u32 {
        self.experience = self.experience.saturating_add(amount);
        let mut levels_gained = 0;

        while self.experience >= self.experience_to_next {
            self.experience -= self.experience_to_next;
            self.level += 1;
            levels_gained += 1;
            self.experience_to_next = self.next_threshold();
        }

        levels_gained
    }

    fn next_threshold(&self) -> u32 {
        let grown = (self.experience_to_next as f32 * self.growth).round_ties_even();
        let grown = if grown >= u32::MAX as f32 {
            u32::MAX
        } else {
            grown as u32
        };
        grown.max(self.experience_to_next.saturating_add(1))
    }
}

impl Default for LevelProgress {
    fn default() -> Self {
        Self {
            level: 1,
            experience: 0,
            experience_to_next: 100,
            growth: 1.2,
        }
    }
}

/// A dropped experience pickup. Sits still until the player comes within the
/// magnet radius, then homes in on them.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct ExperienceGem {
    pub amount: u32,
    pub magnetized: bool,
    pub speed: f32,
    pub direction: Vec3,
}

impl ExperienceGem {
    pub fn new(amount: u32) -> Self {
        Self {
            amount,
            magnetized: false,
            speed: 0.0,
            direction: Vec3::ZERO,
        }
    }

    /// Start homing from `initial_speed` along `direction`.
    pub fn magnetize(&mut self, initial_speed: f32, direction: Vec3) {
        self.magnetized = true;
        self.speed = initial_speed;
        self.direction = direction;
    }
}
