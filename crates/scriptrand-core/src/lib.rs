//! Scriptrand Core — per-context random generators for embedded scripts.
//!
//! Every execution context owns exactly one generator binding. Scripts seed
//! and draw from their own context's generator only, so concurrent
//! evaluations never share random state. This crate has no interpreter
//! dependency; bindings for a concrete interpreter live elsewhere.

pub mod context;
pub mod entropy;
pub mod error;
pub mod lifecycle;
pub mod ops;
pub mod rng;
