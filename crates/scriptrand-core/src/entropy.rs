//! Entropy source abstraction for initial seeds.

/// Source of unpredictable initial seeds for new generator bindings.
pub trait EntropySource: Send + Sync {
    /// Returns a fresh seed.
    fn next_seed(&self) -> i64;
}

/// Production entropy source backed by `rand`'s OS-seeded thread generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn next_seed(&self) -> i64 {
        rand::random()
    }
}
