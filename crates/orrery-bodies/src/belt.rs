//! Procedural asteroid belt generation: deterministic rock placement inside
//! a radial band, handed to the renderer as one instanced field.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use glam::DVec3;
use orrery_scene::RockInstance;

use crate::catalog::BeltSpec;

/// Whole-belt revolution in radians per reference frame at multiplier 1.
pub const BELT_REVOLUTION_STEP: f64 = 0.0001;

/// Vertical jitter applied to each rock so the band has some thickness.
const BELT_HEIGHT_JITTER: f64 = 2.0;

/// Per-rock uniform scale range.
const ROCK_SCALE_RANGE: (f64, f64) = (0.8, 1.2);

/// Generates a deterministic rock field from a belt spec.
pub struct BeltGenerator {
    seed: u64,
    rock_count: u32,
    inner_radius: f64,
    outer_radius: f64,
}

impl BeltGenerator {
    /// Create a new generator with the given seed, count, and radial band.
    pub fn new(seed: u64, rock_count: u32, inner_radius: f64, outer_radius: f64) -> Self {
        Self {
            seed,
            rock_count,
            inner_radius,
            outer_radius,
        }
    }

    pub fn from_spec(spec: &BeltSpec) -> Self {
        Self::new(
            spec.seed,
            spec.rock_count,
            spec.inner_radius,
            spec.outer_radius,
        )
    }

    /// Generate the rock field. Deterministic for a given seed.
    pub fn generate(&self) -> Vec<RockInstance> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let mut rocks = Vec::with_capacity(self.rock_count as usize);

        let (scale_lo, scale_hi) = ROCK_SCALE_RANGE;
        for _ in 0..self.rock_count {
            let orbit_radius = rng.random_range(self.inner_radius..self.outer_radius);
            let angle = rng.random::<f64>() * std::f64::consts::TAU;
            let height = rng.random_range(-BELT_HEIGHT_JITTER..BELT_HEIGHT_JITTER);

            rocks.push(RockInstance {
                position: DVec3::new(
                    orbit_radius * angle.cos(),
                    height,
                    orbit_radius * angle.sin(),
                ),
                scale: rng.random_range(scale_lo..scale_hi),
            });
        }

        rocks
    }
}
