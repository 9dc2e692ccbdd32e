use bevy::prelude::*;

use crate::combat::area::AreaBox;
use crate::combat::components::HitSet;
use crate::game::config::{non_negative, positive, Result};
use crate::timing::Cooldown;

/// Short melee swing in front of the player. Strikes each enemy once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlashSettings {
    pub lifetime: f32,
    pub damage: f32,
    pub area: AreaBox,
}

impl Default for SlashSettings {
    fn default() -> Self {
        Self {
            lifetime: 0.2,
            damage: 10.0,
            area: AreaBox::new(1.0, 0.75, 1.0),
        }
    }
}

/// Axe thrown along the player's facing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxeSettings {
    pub speed: f32,
    pub lifetime: f32,
    pub damage: f32,
    pub radius: f32,
}

impl Default for AxeSettings {
    fn default() -> Self {
        Self {
            speed: 10.0,
            lifetime: 5.0,
            damage: 25.0,
            radius: 0.5,
        }
    }
}

/// Stationary damage-over-time strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BeamSettings {
    pub lifetime: f32,
    pub damage_interval: f32,
    pub damage_per_tick: f32,
    pub area: AreaBox,
}

impl Default for BeamSettings {
    fn default() -> Self {
        Self {
            lifetime: 3.0,
            damage_interval: 0.5,
            damage_per_tick: 5.0,
            area: AreaBox::new(0.75, 4.0, 4.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WeaponKind {
    Slash(SlashSettings),
    Axe(AxeSettings),
    Beam(BeamSettings),
}

impl WeaponKind {
    /// Delay before the first attack after the slot is equipped.
    pub fn first_delay(&self) -> f32 {
        match self {
            WeaponKind::Slash(_) => 0.1,
            WeaponKind::Axe(_) | WeaponKind::Beam(_) => 0.0,
        }
    }

    fn validate(&self) -> Result<()> {
        match self {
            WeaponKind::Slash(slash) => {
                positive("slash lifetime", slash.lifetime)?;
                non_negative("slash damage", slash.damage)
            }
            WeaponKind::Axe(axe) => {
                positive("axe lifetime", axe.lifetime)?;
                non_negative("axe speed", axe.speed)?;
                non_negative("axe damage", axe.damage)?;
                positive("axe radius", axe.radius)
            }
            WeaponKind::Beam(beam) => {
                positive("beam lifetime", beam.lifetime)?;
                positive("beam damage interval", beam.damage_interval)?;
                non_negative("beam damage per tick", beam.damage_per_tick)
            }
        }
    }
}

/// One auto-firing weapon with its own cadence.
#[derive(Debug, Clone, PartialEq)]
pub struct WeaponSlot {
    pub kind: WeaponKind,
    /// Seconds between attacks
    pub interval: f32,
    pub cooldown: Cooldown,
}

impl WeaponSlot {
    pub fn new(kind: WeaponKind, interval: f32) -> Self {
        Self {
            kind,
            interval,
            cooldown: Cooldown::from_secs(kind.first_delay()),
        }
    }
}

/// The player's equipped weapons.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Arsenal(pub Vec<WeaponSlot>);

impl Arsenal {
    pub fn validate(&self) -> Result<()> {
        for slot in &self.0 {
            positive("weapon interval", slot.interval)?;
            slot.kind.validate()?;
        }
        Ok(())
    }
}

impl Default for Arsenal {
    fn default() -> Self {
        Self(vec![
            WeaponSlot::new(WeaponKind::Slash(SlashSettings::default()), 1.0),
            WeaponSlot::new(WeaponKind::Axe(AxeSettings::default()), 1.0),
            WeaponSlot::new(WeaponKind::Beam(BeamSettings::default()), 8.0),
        ])
    }
}

/// A live slash. Stays attached to `owner` until its lifetime runs out.
#[derive(Component, Debug, Clone)]
pub struct SlashAttack {
    pub owner: Entity,
    pub damage: f32,
    pub area: AreaBox,
    pub lifetime: Timer,
    pub hits: HitSet,
}

impl SlashAttack {
    pub fn new(owner: Entity, settings: &SlashSettings) -> Self {
        Self {
            owner,
            damage: settings.damage,
            area: settings.area,
            lifetime: Timer::from_seconds(settings.lifetime, TimerMode::Once),
            hits: HitSet::default(),
        }
    }
}

/// A thrown axe flying in a straight line.
#[derive(Component, Debug, Clone)]
pub struct ThrownAxe {
    pub direction: Vec3,
    pub speed: f32,
    pub damage: f32,
    pub radius: f32,
    pub lifetime: Timer,
    pub hits: HitSet,
}

impl ThrownAxe {
    pub fn new(direction: Vec3, settings: &AxeSettings) -> Self {
        Self {
            direction,
            speed: settings.speed,
            damage: settings.damage,
            radius: settings.radius,
            lifetime: Timer::from_seconds(settings.lifetime, TimerMode::Once),
            hits: HitSet::default(),
        }
    }
}

/// A beam that hurts everything inside it every `tick`.
#[derive(Component, Debug, Clone)]
pub struct DamageBeam {
    pub facing: Vec3,
    pub damage_per_tick: f32,
    pub area: AreaBox,
    pub lifetime: Timer,
    pub tick: Timer,
}

impl DamageBeam {
    pub fn new(facing: Vec3, settings: &BeamSettings) -> Self {
        Self {
            facing,
            damage_per_tick: settings.damage_per_tick,
            area: settings.area,
            lifetime: Timer::from_seconds(settings.lifetime, TimerMode::Once),
            tick: Timer::from_seconds(settings.damage_interval, TimerMode::Repeating),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_arsenal_is_valid() {
        let arsenal = Arsenal::default();
        assert!(arsenal.validate().is_ok());
        assert_eq!(arsenal.0.len(), 3);
    }

    #[test]
    fn test_slash_waits_before_first_swing() {
        let slot = WeaponSlot::new(WeaponKind::Slash(SlashSettings::default()), 1.0);
        assert!((slot.cooldown.remaining() - 0.1).abs() < f32::EPSILON);

        let axe = WeaponSlot::new(WeaponKind::Axe(AxeSettings::default()), 1.0);
        assert!(axe.cooldown.is_ready());
    }

    #[test]
    fn test_arsenal_rejects_zero_interval() {
        let arsenal = Arsenal(vec![WeaponSlot::new(
            WeaponKind::Axe(AxeSettings::default()),
            0.0,
        )]);
        assert!(arsenal.validate().is_err());
    }

    #[test]
    fn test_beam_rejects_zero_tick() {
        let arsenal = Arsenal(vec![WeaponSlot::new(
            WeaponKind::Beam(BeamSettings {
                damage_interval: 0.0,
                ..default()
            }),
            2.0,
        )]);
        assert!(arsenal.validate().is_err());
    }
}
