//! Test entropy — deterministic `EntropySource` implementation for tests.

use scriptrand_core::entropy::EntropySource;

/// An entropy source that always yields the same seed.
#[derive(Debug, Clone, Copy)]
pub struct FixedEntropy(pub i64);

impl EntropySource for FixedEntropy {
    fn next_seed(&self) -> i64 {
        self.0
    }
}
