//! Bounded noise from one long-lived random stream.
//!
//! One generator is built per run and advanced on every draw. A fixed seed
//! reproduces a run exactly; without one the stream is seeded from OS entropy.

use rand::prelude::*;

/// Uniform noise source shared by every phase of a run.
pub struct NoiseSource {
    rng: StdRng,
    seed: Option<u64>,
}

impl NoiseSource {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Self { rng, seed }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(Some(seed))
    }

    /// Seed the stream was built from, if one was given.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Uniform draw in [0, 1).
    pub fn unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// Uniform draw in [-level, level]. A level of 0 yields exactly 0.
    pub fn noise(&mut self, level: f64) -> f64 {
        self.unit() * (level + level) - level
    }
}

impl std::fmt::Debug for NoiseSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoiseSource").field("seed", &self.seed).finish()
    }
}
