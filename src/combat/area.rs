//! Ground-plane overlap tests used for hit detection.
//!
//! Everything here works on the XZ plane; height is ignored.

use bevy::prelude::*;

use crate::movement::components::from_xz;

/// True if two circles on the ground plane touch.
pub fn circles_overlap(a: Vec3, radius_a: f32, b: Vec3, radius_b: f32) -> bool {
    let reach = radius_a + radius_b;
    from_xz(a).distance_squared(from_xz(b)) <= reach * reach
}

/// An oriented box on the ground plane, described relative to an origin and a facing.
///
/// The box is centred `forward_offset` units in front of the origin, extends
/// `half_length` along the facing and `half_width` across it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AreaBox {
    pub half_width: f32,
    pub half_length: f32,
    pub forward_offset: f32,
}

impl AreaBox {
    pub fn new(half_width: f32, half_length: f32, forward_offset: f32) -> Self {
        Self {
            half_width,
            half_length,
            forward_offset,
        }
    }

    /// The same box stretched back over `distance` units of travel, so a test at
    /// the end of a move covers every position along it.
    pub fn swept(&self, distance: f32) -> Self {
        let half = distance.max(0.0) / 2.0;
        Self::new(
            self.half_width,
            self.half_length + half,
            self.forward_offset - half,
        )
    }

    /// Does a circle at `point` with `radius` touch the box placed at `origin` facing `facing`?
    pub fn overlaps_circle(&self, origin: Vec3, facing: Vec3, point: Vec3, radius: f32) -> bool {
        let forward = from_xz(facing).normalize_or_zero();
        if forward == Vec2::ZERO {
            return false;
        }
        let across = forward.perp();

        let center = from_xz(origin) + forward * self.forward_offset;
        let local = from_xz(point) - center;
        let along = local.dot(forward);
        let side = local.dot(across);

        let closest = Vec2::new(
            along.clamp(-self.half_length, self.half_length),
            side.clamp(-self.half_width, self.half_width),
        );
        Vec2::new(along, side).distance_squared(closest) <= radius * radius
    }
}
