use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Shared random source for gameplay rolls (spawn points, loot, camera shake).
/// Seeded so a headless run can be replayed.
#[derive(Resource)]
pub struct GameRng(pub StdRng);

impl GameRng {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    /// Uniform float in `[min, max)`. Returns `min` for an empty range.
    pub fn range(&mut self, min: f32, max: f32) -> f32 {
        if max <= min {
            return min;
        }
        self.0.gen_range(min..max)
    }

    /// Roll `uniform(0, 100) <= chance_percent`.
    pub fn roll_percent(&mut self, chance_percent: f32) -> bool {
        self.0.gen_range(0.0..=100.0) <= chance_percent
    }

    /// Uniformly distributed point inside a disk of `radius` (area-uniform, not radius-uniform).
    pub fn point_in_disk(&mut self, radius: f32) -> Vec2 {
        let angle = self.0.gen_range(0.0..std::f32::consts::TAU);
        let distance = radius * self.0.gen::<f32>().sqrt();
        Vec2::new(angle.cos(), angle.sin()) * distance
    }

    /// Uniformly distributed point inside a sphere of `radius` (rejection sampling).
    pub fn point_in_sphere(&mut self, radius: f32) -> Vec3 {
        loop {
            let candidate = Vec3::new(
                self.0.gen_range(-1.0..=1.0),
                self.0.gen_range(-1.0..=1.0),
                self.0.gen_range(-1.0..=1.0),
            );
            if candidate.length_squared() <= 1.0 {
                return candidate * radius;
            }
        }
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self(StdRng::from_entropy())
    }
}
