//! Hit resolution: defense, damage floor and the death threshold.

use bevy::prelude::*;

use super::components::Stats;

/// What a damage request did to its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitOutcome {
    /// Target was dead or invincible; nothing changed.
    Ignored,
    /// Damage landed and the target survived.
    Hit,
    /// Damage landed and took the target to zero health.
    Died,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamageResult {
    pub final_amount: f32,
    pub outcome: HitOutcome,
}

impl DamageResult {
    pub const IGNORED: Self = Self {
        final_amount: 0.0,
        outcome: HitOutcome::Ignored,
    };

    pub fn died(&self) -> bool {
        self.outcome == HitOutcome::Died
    }

    pub fn landed(&self) -> bool {
        self.outcome != HitOutcome::Ignored
    }
}

/// Damage after defense, never below `floor`.
pub fn mitigated_damage(raw_amount: f32, defense: f32, floor: f32) -> f32 {
    (raw_amount - defense).max(floor)
}

/// Apply `raw_amount` to `stats`. Dead or invincible targets are left untouched.
pub fn resolve_hit(stats: &mut Stats, invincible: bool, raw_amount: f32, floor: f32) -> DamageResult {
    if !stats.is_alive() || invincible {
        return DamageResult::IGNORED;
    }

    let final_amount = mitigated_damage(raw_amount, stats.defense, floor);
    let died = stats.take_damage(final_amount);

    DamageResult {
        final_amount,
        outcome: if died { HitOutcome::Died } else { HitOutcome::Hit },
    }
}

/// Direction a hit pushes its target: away from the source, flattened onto the ground plane.
pub fn knockback_direction(target: Vec3, source: Vec3) -> Vec3 {
    let mut away = target - source;
    away.y = 0.0;
    away.normalize_or_zero()
}
