use bevy::prelude::*;

use crate::combat::components::HitSet;

/// Convert a 2D vector to a 3D vector on the XZ plane (Y=0).
/// Used for movement on the ground plane in 3D space.
#[inline]
pub fn to_xz(v: Vec2) -> Vec3 {
    Vec3::new(v.x, 0.0, v.y)
}

/// Extract XZ coordinates from a 3D position as a Vec2.
/// Used to get ground-plane position for distance calculations.
#[inline]
pub fn from_xz(v: Vec3) -> Vec2 {
    Vec2::new(v.x, v.z)
}

/// Zero the vertical component and normalize.
#[inline]
pub fn flatten(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z).normalize_or_zero()
}

/// Step `current` toward `target` by at most `max_delta`.
pub fn move_towards(current: Vec3, target: Vec3, max_delta: f32) -> Vec3 {
    let delta = target - current;
    let distance = delta.length();
    if distance <= max_delta || distance == 0.0 {
        return target;
    }
    current + delta / distance * max_delta
}

/// Payload of an in-progress dash.
#[derive(Debug, Clone)]
pub struct DashMotion {
    pub elapsed: f32,
    /// Captured once when the dash starts.
    pub direction: Vec3,
    pub hits: HitSet,
}

impl DashMotion {
    pub fn new(direction: Vec3) -> Self {
        Self {
            elapsed: 0.0,
            direction: flatten(direction),
            hits: HitSet::default(),
        }
    }
}

/// Forced, decaying displacement away from a hit.
/// Speed falls linearly from `power` to zero over `duration`.
#[derive(Debug, Clone, PartialEq)]
pub struct Knockback {
    direction: Vec3,
    power: f32,
    duration: f32,
    elapsed: f32,
}

impl Knockback {
    pub fn new(direction: Vec3, power: f32, duration: f32) -> Self {
        Self {
            direction: flatten(direction),
            power,
            duration,
            elapsed: 0.0,
        }
    }

    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    pub fn power(&self) -> f32 {
        self.power
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Current push speed (ease-out).
    pub fn speed(&self) -> f32 {
        if self.duration <= 0.0 {
            return 0.0;
        }
        self.power * (1.0 - self.elapsed / self.duration).max(0.0)
    }

    /// Displacement for this slice, then advance the clock.
    pub fn step(&mut self, delta_secs: f32) -> Vec3 {
        let displacement = self.direction * self.speed() * delta_secs;
        self.elapsed += delta_secs;
        displacement
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// Mutually exclusive motion states. Exactly one is active per actor and it
/// only changes through an explicit trigger.
#[derive(Component, Debug, Clone, Default)]
pub enum MotionState {
    #[default]
    Idle,
    Moving(Vec3),
    Dashing(DashMotion),
    Knockback(Knockback),
    Dead,
}

impl MotionState {
    /// Normal movement, attacks and dash input are only honoured in Idle/Moving.
    pub fn accepts_input(&self) -> bool {
        matches!(self, MotionState::Idle | MotionState::Moving(_))
    }

    pub fn is_dashing(&self) -> bool {
        matches!(self, MotionState::Dashing(_))
    }

    pub fn is_knocked_back(&self) -> bool {
        matches!(self, MotionState::Knockback(_))
    }

    pub fn is_dead(&self) -> bool {
        matches!(self, MotionState::Dead)
    }
}

/// How hard this actor gets pushed when hit.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct KnockbackSettings {
    pub power: f32,
    pub duration: f32,
}

impl KnockbackSettings {
    pub fn enemy() -> Self {
        Self {
            power: 5.0,
            duration: 0.25,
        }
    }

    pub fn player() -> Self {
        Self {
            power: 8.0,
            duration: 0.2,
        }
    }
}

/// Ground-plane direction the actor faces. Dashes and attacks launch along it.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Facing(pub Vec3);

impl Facing {
    pub fn direction(&self) -> Vec3 {
        self.0
    }

    /// Turn toward `direction` if it has a ground-plane component.
    pub fn look(&mut self, direction: Vec3) {
        let flat = flatten(direction);
        if flat != Vec3::ZERO {
            self.0 = flat;
        }
    }
}

impl Default for Facing {
    fn default() -> Self {
        Self(Vec3::NEG_Z)
    }
}

/// Smoothed velocity for input-driven movement.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Locomotion {
    pub velocity: Vec3,
    /// Rate toward the target velocity while input is held
    pub acceleration: f32,
    /// Rate toward rest once input is released
    pub deceleration: f32,
}

impl Default for Locomotion {
    fn default() -> Self {
        Self {
            velocity: Vec3::ZERO,
            acceleration: 25.0,
            deceleration: 35.0,
        }
    }
}
