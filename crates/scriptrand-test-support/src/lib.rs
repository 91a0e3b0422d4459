//! Shared test doubles for scriptrand.

mod entropy;
mod rng;

pub use entropy::FixedEntropy;
pub use rng::{MockRng, SequenceRng};
