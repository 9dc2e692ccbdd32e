use bevy::ecs::entity::EntityHashSet;
use bevy::prelude::*;

/// Which side an actor fights on. Drives the damage floor and death handling.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActorKind {
    Player,
    Enemy,
}

/// Survival and combat attributes shared by the player and enemies.
///
/// `current_health` stays within `0..=max_health` and `is_alive` mirrors
/// `current_health > 0`; both only change through `take_damage`/`heal`.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Stats {
    pub max_health: f32,
    current_health: f32,
    pub defense: f32,
    pub move_speed: f32,
    pub damage: f32,
    is_alive: bool,
}

impl Stats {
    /// Create stats at full health.
    pub fn new(max_health: f32, defense: f32, move_speed: f32, damage: f32) -> Self {
        let max_health = max_health.max(0.0);
        Self {
            max_health,
            current_health: max_health,
            defense,
            move_speed,
            damage,
            is_alive: max_health > 0.0,
        }
    }

    /// Start from a specific health value instead of full.
    pub fn with_health(mut self, current: f32) -> Self {
        self.current_health = current.clamp(0.0, self.max_health);
        self.is_alive = self.current_health > 0.0;
        self
    }

    pub fn current_health(&self) -> f32 {
        self.current_health
    }

    pub fn is_alive(&self) -> bool {
        self.is_alive
    }

    /// Subtract `amount`, clamping at zero. Returns true if this call killed the actor.
    pub fn take_damage(&mut self, amount: f32) -> bool {
        if !self.is_alive {
            return false;
        }
        self.current_health = (self.current_health - amount).max(0.0);
        if self.current_health <= 0.0 {
            self.current_health = 0.0;
            self.is_alive = false;
            return true;
        }
        false
    }

    /// Heal up to max. The dead stay dead.
    pub fn heal(&mut self, amount: f32) {
        if !self.is_alive {
            return;
        }
        self.current_health = (self.current_health + amount).min(self.max_health);
    }

    /// Top health back up to max (level-up reward).
    pub fn restore_full(&mut self) {
        if self.is_alive {
            self.current_health = self.max_health;
        }
    }

    /// Health as a fraction (0.0 to 1.0)
    pub fn percentage(&self) -> f32 {
        if self.max_health <= 0.0 {
            0.0
        } else {
            self.current_health / self.max_health
        }
    }
}

impl Default for Stats {
    fn default() -> Self {
        Self::new(100.0, 0.0, 5.0, 1.0)
    }
}

/// Damage immunity flag. Orthogonal to the motion state; the dash raises it
/// for the dash itself and the grace window that follows.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Invincibility {
    active: bool,
}

impl Invincibility {
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set(&mut self, active: bool) {
        self.active = active;
    }
}

/// Circular hurt area on the ground plane. Removing it turns hit detection off.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Hitbox(pub f32);

impl Hitbox {
    pub fn new(radius: f32) -> Self {
        Self(radius)
    }

    pub fn radius(&self) -> f32 {
        self.0
    }
}

impl Default for Hitbox {
    fn default() -> Self {
        Self(0.5)
    }
}

/// Entities already struck by one attack instance (a dash, a slash, an axe).
#[derive(Debug, Clone, Default)]
pub struct HitSet(EntityHashSet);

impl HitSet {
    /// Record a hit. Returns false if `entity` was already hit by this instance.
    pub fn try_hit(&mut self, entity: Entity) -> bool {
        self.0.insert(entity)
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.0.contains(&entity)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Camera shake requested when this actor is hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShakeSettings {
    pub duration: f32,
    pub magnitude: f32,
}

/// Lean-back animation parameters for hit recoil.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltSettings {
    /// Lean angle in degrees.
    pub angle: f32,
    /// How fast the actor straightens back up (fraction per second).
    pub recover_speed: f32,
}

impl Default for TiltSettings {
    fn default() -> Self {
        Self {
            angle: 25.0,
            recover_speed: 5.0,
        }
    }
}

/// How an actor reacts to a landed hit (besides knockback).
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct HitReaction {
    pub flash_duration: f32,
    pub shake: Option<ShakeSettings>,
    pub tilt: Option<TiltSettings>,
}

impl HitReaction {
    pub fn enemy() -> Self {
        Self {
            flash_duration: 0.2,
            shake: Some(ShakeSettings {
                duration: 0.1,
                magnitude: 0.2,
            }),
            tilt: Some(TiltSettings::default()),
        }
    }

    pub fn player() -> Self {
        Self {
            flash_duration: 0.2,
            shake: Some(ShakeSettings {
                duration: 0.15,
                magnitude: 0.3,
            }),
            tilt: None,
        }
    }
}

/// Visual flash when an actor takes damage.
/// Intensity ramps 0 -> 1 over the first half of the duration and back to 0
/// over the second half; the renderer blends toward its hit material by it.
#[derive(Component, Debug, Clone)]
pub struct DamageFlash {
    pub timer: Timer,
}

impl DamageFlash {
    pub fn new(duration: f32) -> Self {
        Self {
            timer: Timer::from_seconds(duration, TimerMode::Once),
        }
    }

    pub fn tick(&mut self, delta: std::time::Duration) {
        self.timer.tick(delta);
    }

    pub fn is_finished(&self) -> bool {
        self.timer.is_finished()
    }

    /// Blend weight toward the hit material.
    pub fn intensity(&self) -> f32 {
        let fraction = self.timer.fraction();
        if fraction < 0.5 {
            fraction * 2.0
        } else {
            (1.0 - fraction) * 2.0
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TiltPhase {
    Leaning,
    Recovering,
}

/// Rate at which the lean is applied (fraction per second).
const TILT_IN_SPEED: f32 = 15.0;

/// Hit recoil: lean back around the local X axis, then straighten up.
#[derive(Component, Debug, Clone)]
pub struct HitTilt {
    base: Quat,
    leaned: Quat,
    recover_speed: f32,
    phase: TiltPhase,
    progress: f32,
}

impl HitTilt {
    pub fn new(base: Quat, settings: TiltSettings) -> Self {
        Self {
            base,
            leaned: base * Quat::from_rotation_x(-settings.angle.to_radians()),
            recover_speed: settings.recover_speed,
            phase: TiltPhase::Leaning,
            progress: 0.0,
        }
    }

    /// Rotation the actor had before the tilt started.
    pub fn base(&self) -> Quat {
        self.base
    }

    /// Advance the animation. Returns true once the actor is upright again.
    pub fn tick(&mut self, delta_secs: f32) -> bool {
        match self.phase {
            TiltPhase::Leaning => {
                self.progress += delta_secs * TILT_IN_SPEED;
                if self.progress >= 1.0 {
                    self.phase = TiltPhase::Recovering;
                    self.progress = 0.0;
                }
                false
            }
            TiltPhase::Recovering => {
                self.progress += delta_secs * self.recover_speed;
                self.progress >= 1.0
            }
        }
    }

    pub fn rotation(&self) -> Quat {
        let t = self.progress.clamp(0.0, 1.0);
        match self.phase {
            TiltPhase::Leaning => self.base.slerp(self.leaned, t),
            TiltPhase::Recovering => self.leaned.slerp(self.base, t),
        }
    }
}
