//! Random number generator abstraction.
//!
//! Production contexts are bound to a [`StdScriptRng`]. Tests and hosts with
//! their own requirements can bind any other [`ScriptRng`].

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A reseedable generator bound to one execution context.
pub trait ScriptRng: fmt::Debug {
    /// Reset the generator so that subsequent draws are a deterministic
    /// function of `seed`.
    fn reseed(&mut self, seed: i64);

    /// Generate an `i64` uniformly in `[min, max]` inclusive.
    ///
    /// Callers guarantee `min <= max`.
    fn next_i64_range(&mut self, min: i64, max: i64) -> i64;
}

/// `ScriptRng` backed by `rand`'s `StdRng`.
#[derive(Debug, Clone)]
pub struct StdScriptRng(StdRng);

impl StdScriptRng {
    /// Create a generator seeded with `seed`.
    #[must_use]
    pub fn from_seed(seed: i64) -> Self {
        Self(StdRng::seed_from_u64(seed_bits(seed)))
    }
}

impl ScriptRng for StdScriptRng {
    fn reseed(&mut self, seed: i64) {
        self.0 = StdRng::seed_from_u64(seed_bits(seed));
    }

    fn next_i64_range(&mut self, min: i64, max: i64) -> i64 {
        self.0.random_range(min..=max)
    }
}

// Negative seeds keep their bit pattern.
fn seed_bits(seed: i64) -> u64 {
    u64::from_le_bytes(seed.to_le_bytes())
}
