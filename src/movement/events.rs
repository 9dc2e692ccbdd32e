use bevy::prelude::*;

/// Push `target` away from `source_position`.
/// Rejected while the target is already knocked back, dashing, in its post-dash
/// grace window, or dead.
#[derive(Message, Debug, Clone, PartialEq)]
pub struct KnockbackEvent {
    pub target: Entity,
    pub source_position: Vec3,
    pub power: f32,
    pub duration: f32,
}
