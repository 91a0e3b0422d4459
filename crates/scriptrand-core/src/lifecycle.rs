//! Generator lifecycle: binding a generator to a new execution context.
//!
//! Hosts call [`attach`] once per context before any script code that uses
//! the random operations runs in it.

use crate::context::ExecutionContext;
use crate::entropy::EntropySource;
use crate::rng::{ScriptRng, StdScriptRng};

/// Binds a fresh `StdScriptRng`, seeded from `entropy`, to `context`.
///
/// Calling this on an already attached context replaces the binding.
pub fn attach(context: &ExecutionContext, entropy: &dyn EntropySource) {
    let rng = StdScriptRng::from_seed(entropy.next_seed());
    attach_with(context, Box::new(rng));
}

/// Binds a caller-supplied generator to `context`.
pub fn attach_with(context: &ExecutionContext, rng: Box<dyn ScriptRng>) {
    if context.is_attached() {
        tracing::debug!(context_id = %context.id(), "replacing generator binding");
    }
    context.bind(rng);
    tracing::debug!(context_id = %context.id(), "generator attached");
}
