//! Scriptrand Rhai — the `random` module for Rhai scripts.
//!
//! Each [`ScriptThread`] pairs a Rhai engine with its own execution context,
//! so scripts only ever seed and draw from their own generator.

pub mod bindings;
pub mod config;
pub mod registry;
pub mod thread;

pub use config::ThreadConfig;
pub use thread::ScriptThread;
