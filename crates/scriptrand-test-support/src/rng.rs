//! Test RNG — deterministic `ScriptRng` implementations for tests.

use scriptrand_core::rng::ScriptRng;

/// Always draws the low bound and ignores `seed`. Lets script tests assert
/// on the exact value `random::number` returns.
#[derive(Debug)]
pub struct MockRng;

impl ScriptRng for MockRng {
    fn reseed(&mut self, _seed: i64) {}

    fn next_i64_range(&mut self, min: i64, _max: i64) -> i64 {
        min
    }
}

/// Scripted draws for tests that bind a generator to a context by hand.
///
/// Each `random::number` call yields the next queued value whatever its
/// bounds are, and `random::seed` rewinds to the first value. Draining the
/// queue panics, which fails the test at the extra draw.
#[derive(Debug)]
pub struct SequenceRng {
    values: Vec<i64>,
    index: usize,
}

impl SequenceRng {
    /// Create a new `SequenceRng` with the given values.
    #[must_use]
    pub fn new(values: Vec<i64>) -> Self {
        Self { values, index: 0 }
    }
}

impl ScriptRng for SequenceRng {
    fn reseed(&mut self, _seed: i64) {
        self.index = 0;
    }

    fn next_i64_range(&mut self, _min: i64, _max: i64) -> i64 {
        let val = self.values[self.index];
        self.index += 1;
        val
    }
}
