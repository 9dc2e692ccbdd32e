use bevy::prelude::*;

use crate::combat::area::AreaBox;
use crate::game::config::{non_negative, positive, Result};
use crate::movement::components::to_xz;
use crate::timing::Cooldown;

#[derive(Component, Debug, Default)]
pub struct Player;

/// What the player wants to do this frame.
/// Filled by keyboard input or the headless autopilot, consumed by movement and dash systems.
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct PlayerIntent {
    /// Stick/WASD direction; x maps to world X, y to world Z
    pub movement: Vec2,
    /// Ground-plane direction to face, if any
    pub aim: Option<Vec3>,
    /// Dash pressed this frame (edge, cleared at end of frame)
    pub dash: bool,
}

impl PlayerIntent {
    /// Normalized ground-plane movement direction.
    pub fn movement_direction(&self) -> Vec3 {
        to_xz(self.movement).normalize_or_zero()
    }

    pub fn clear_edges(&mut self) {
        self.dash = false;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DashPhase {
    Ready,
    Dashing,
    /// Still invincible after the dash ends
    PostDashGrace(Timer),
}

/// Dash state machine: `Ready -> Dashing -> PostDashGrace -> Ready`.
/// The cooldown ticks on its own and may outlast the grace window.
#[derive(Component, Debug, Clone)]
pub struct Dash {
    pub phase: DashPhase,
    pub cooldown: Cooldown,
}

impl Dash {
    pub fn is_ready(&self) -> bool {
        self.phase == DashPhase::Ready
    }

    pub fn can_start(&self) -> bool {
        self.is_ready() && self.cooldown.is_ready()
    }

    /// Dash and its grace window both shrug off knockback.
    pub fn blocks_knockback(&self) -> bool {
        !self.is_ready()
    }
}

impl Default for Dash {
    fn default() -> Self {
        Self {
            phase: DashPhase::Ready,
            cooldown: Cooldown::ready(),
        }
    }
}

#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct DashSettings {
    pub speed: f32,
    pub duration: f32,
    pub cooldown: f32,
    pub post_dash_immunity: f32,
    pub damage: f32,
    /// Strike area, placed in front of the player along the dash
    pub hitbox: AreaBox,
}

impl DashSettings {
    pub fn validate(&self) -> Result<()> {
        positive("dash speed", self.speed)?;
        positive("dash duration", self.duration)?;
        non_negative("dash cooldown", self.cooldown)?;
        non_negative("post-dash immunity", self.post_dash_immunity)?;
        non_negative("dash damage", self.damage)?;
        positive("dash hitbox width", self.hitbox.half_width)?;
        positive("dash hitbox length", self.hitbox.half_length)?;
        Ok(())
    }
}

impl Default for DashSettings {
    fn default() -> Self {
        Self {
            speed: 20.0,
            duration: 0.2,
            cooldown: 1.0,
            post_dash_immunity: 0.2,
            damage: 15.0,
            hitbox: AreaBox::new(0.75, 0.75, 0.5),
        }
    }
}

/// Health regained per second while alive.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct Regeneration(pub f32);
