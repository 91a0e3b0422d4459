//! Host integration: one Rhai engine per execution context.

use std::any::Any;
use std::fmt;

use rhai::{Engine, EvalAltResult};
use scriptrand_core::context::ExecutionContext;
use scriptrand_core::entropy::EntropySource;
use scriptrand_core::lifecycle;
use scriptrand_core::rng::ScriptRng;

use crate::bindings::build_module;
use crate::config::ThreadConfig;

/// A Rhai engine bound to a single execution context.
///
/// Scripts evaluated on this thread reach the random module under
/// `config.namespace` and only ever touch this context's generator.
pub struct ScriptThread {
    context: ExecutionContext,
    engine: Engine,
}

impl ScriptThread {
    /// Creates a thread and attaches a generator seeded from `entropy`.
    #[must_use]
    pub fn new(config: &ThreadConfig, entropy: &dyn EntropySource) -> Self {
        let thread = Self::detached(config);
        thread.attach(entropy);
        thread
    }

    /// Creates a thread without a generator. Random calls fail with an
    /// internal error until [`attach`](Self::attach) is called.
    #[must_use]
    pub fn detached(config: &ThreadConfig) -> Self {
        let context = ExecutionContext::new();

        let mut engine = Engine::new();
        engine.set_max_operations(config.max_operations);
        engine.set_max_call_levels(config.max_call_levels);
        engine.register_static_module(config.namespace.as_str(), build_module(&context).into());

        tracing::debug!(
            context_id = %context.id(),
            namespace = %config.namespace,
            "script thread created"
        );

        Self { context, engine }
    }

    /// Attaches a generator seeded from `entropy`, replacing any existing one.
    pub fn attach(&self, entropy: &dyn EntropySource) {
        lifecycle::attach(&self.context, entropy);
    }

    /// Attaches a caller-supplied generator, replacing any existing one.
    pub fn attach_with(&self, rng: Box<dyn ScriptRng>) {
        lifecycle::attach_with(&self.context, rng);
    }

    /// Returns the execution context.
    #[must_use]
    pub fn context(&self) -> &ExecutionContext {
        &self.context
    }

    /// Returns the underlying engine.
    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Evaluates `script` and returns its result.
    ///
    /// # Errors
    ///
    /// Returns the Rhai error raised by the script, including errors raised
    /// by the random module.
    pub fn eval<T: Any + Clone>(&self, script: &str) -> Result<T, Box<EvalAltResult>> {
        self.engine.eval::<T>(script)
    }

    /// Runs `script`, discarding its result.
    ///
    /// # Errors
    ///
    /// Returns the Rhai error raised by the script.
    pub fn run(&self, script: &str) -> Result<(), Box<EvalAltResult>> {
        self.engine.run(script)
    }
}

impl fmt::Debug for ScriptThread {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScriptThread")
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}
