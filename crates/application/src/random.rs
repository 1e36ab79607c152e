//! Explicit pseudo-random source
//!
//! Every random decision of the resolver draws from a [`RandomSource`].
//! When a seed is given, the source is reseeded right before each draw, so
//! that a draw only depends on the seed and on the draw itself.

use rand::distr::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Pseudo-random generator handle threaded through resolution.
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    /// Creates a source seeded from operating system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a source with a fixed seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Replaces the generator state when a seed is given.
    pub fn reseed(&mut self, seed: Option<u64>) {
        if let Some(seed) = seed {
            self.rng = StdRng::seed_from_u64(seed);
        }
    }

    /// Picks an index in `0..len`. Returns `None` for an empty range.
    pub fn choose_index(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.rng.random_range(0..len))
    }

    /// Uniform integer in `[min, max]`. Returns `None` when `min > max`.
    pub fn int_in(&mut self, min: i64, max: i64) -> Option<i64> {
        Uniform::new_inclusive(min, max)
            .ok()
            .map(|range| range.sample(&mut self.rng))
    }

    /// Uniform float in `[min, max]`. Returns `None` when the bounds are
    /// reversed or not finite.
    pub fn float_in(&mut self, min: f64, max: f64) -> Option<f64> {
        Uniform::new_inclusive(min, max)
            .ok()
            .map(|range| range.sample(&mut self.rng))
    }

    /// Sixteen random bytes.
    pub fn bytes(&mut self) -> [u8; 16] {
        self.rng.random()
    }

    /// Mutable access to the underlying generator.
    pub const fn rng_mut(&mut self) -> &mut StdRng {
        &mut self.rng
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::from_entropy()
    }
}
