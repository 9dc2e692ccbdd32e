use bevy::prelude::*;

use crate::combat::components::{ActorKind, HitReaction, Hitbox, Stats};
use crate::enemy_death::components::LootTable;
use crate::game::config::{non_negative, positive, Result};
use crate::movement::components::{KnockbackSettings, MotionState};
use crate::timing::Cooldown;

/// Maximum enemy turn rate in degrees per second.
pub const ENEMY_TURN_DEGREES_PER_SEC: f32 = 720.0;

/// Melee chaser AI state.
#[derive(Component, Debug, Clone)]
pub struct Enemy {
    /// Distance at which the enemy stops chasing and swings
    pub attack_range: f32,
    /// Seconds between swings
    pub attack_interval: f32,
    pub attack_cooldown: Cooldown,
}

impl Enemy {
    pub fn new(attack_range: f32, attack_interval: f32) -> Self {
        Self {
            attack_range,
            attack_interval,
            attack_cooldown: Cooldown::ready(),
        }
    }
}

impl Default for Enemy {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}

/// Everything needed to spawn one kind of enemy.
#[derive(Debug, Clone, PartialEq)]
pub struct EnemyArchetype {
    pub name: String,
    pub stats: Stats,
    pub hitbox_radius: f32,
    pub attack_range: f32,
    pub attack_interval: f32,
    pub knockback: KnockbackSettings,
    pub reaction: HitReaction,
    pub loot: LootTable,
}

impl EnemyArchetype {
    /// Baseline chaser.
    pub fn grunt() -> Self {
        Self {
            name: "grunt".to_string(),
            stats: Stats::new(30.0, 0.0, 3.0, 10.0),
            hitbox_radius: 0.5,
            attack_range: 1.0,
            attack_interval: 1.0,
            knockback: KnockbackSettings::enemy(),
            reaction: HitReaction::enemy(),
            loot: LootTable::default(),
        }
    }

    /// Slow, armored and worth more experience.
    pub fn brute() -> Self {
        Self {
            name: "brute".to_string(),
            stats: Stats::new(80.0, 3.0, 2.0, 20.0),
            hitbox_radius: 0.8,
            attack_range: 1.4,
            attack_interval: 1.5,
            knockback: KnockbackSettings {
                power: 2.5,
                duration: 0.2,
            },
            reaction: HitReaction::enemy(),
            loot: LootTable {
                experience_amount: 25,
                ..default()
            },
        }
    }

    pub fn validate(&self) -> Result<()> {
        positive("enemy max health", self.stats.max_health)?;
        non_negative("enemy defense", self.stats.defense)?;
        non_negative("enemy move speed", self.stats.move_speed)?;
        positive("enemy hitbox radius", self.hitbox_radius)?;
        non_negative("enemy attack range", self.attack_range)?;
        non_negative("enemy attack interval", self.attack_interval)?;
        non_negative("enemy knockback duration", self.knockback.duration)?;
        self.loot.validate()
    }

    /// Components for a live enemy of this kind at `position`.
    pub fn bundle(&self, position: Vec3) -> impl Bundle {
        (
            Name::new(self.name.clone()),
            Enemy::new(self.attack_range, self.attack_interval),
            ActorKind::Enemy,
            self.stats.clone(),
            Hitbox::new(self.hitbox_radius),
            Transform::from_translation(position),
            MotionState::default(),
            self.knockback,
            self.reaction,
            self.loot,
        )
    }
}

impl Default for EnemyArchetype {
    fn default() -> Self {
        Self::grunt()
    }
}
