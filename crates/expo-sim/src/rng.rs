//! Random source helpers.

use rand::distributions::{Distribution, Standard};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Reproducible generator: the same seed always yields the same draws.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// One standard uniform draw on `[0, 1)`.
pub fn uniform<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    Standard.sample(rng)
}
