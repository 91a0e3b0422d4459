//! Rhai bindings for the random operations.
//!
//! Functions take `Dynamic` parameters so that every script value reaches
//! the integer cast in `scriptrand_core::ops`, and fail there with the
//! documented message instead of a Rhai dispatch error.

use rhai::{Dynamic, EvalAltResult, INT, Module, Position};
use scriptrand_core::context::ExecutionContext;
use scriptrand_core::error::RandomError;
use scriptrand_core::ops::{self, IntArg};

use crate::registry::{self, FunctionDescriptor, Operation};

/// Borrowed script value at the integer boundary.
///
/// Only Rhai integers are castable; floats, strings and every other type
/// fail the cast.
#[derive(Debug, Clone, Copy)]
pub struct ScriptValue<'a>(pub &'a Dynamic);

impl IntArg for ScriptValue<'_> {
    fn to_int64(&self) -> Option<i64> {
        self.0.as_int().ok()
    }
}

/// Converts a `RandomError` into a Rhai error.
///
/// Argument errors become `ErrorRuntime` carrying the bare message, which is
/// what a script's `catch` receives. Internal errors become `ErrorSystem` so
/// a host can tell an integration defect apart from bad script input.
#[must_use]
pub fn into_eval_error(err: RandomError) -> Box<EvalAltResult> {
    match err {
        RandomError::Argument(message) => {
            EvalAltResult::ErrorRuntime(message.into(), Position::NONE).into()
        }
        err @ RandomError::Internal(_) => {
            EvalAltResult::ErrorSystem("internal error".to_owned(), Box::new(err)).into()
        }
    }
}

// Calls with fewer arguments than the descriptor lists fail as argument
// errors naming the first missing parameter.
fn missing_argument(function: &FunctionDescriptor, given: usize) -> Box<EvalAltResult> {
    into_eval_error(RandomError::Argument(format!(
        "unpacking arguments for {}: missing argument for {}",
        function.name, function.params[given]
    )))
}

/// Builds the module for one execution context.
///
/// Every function listed in the registry descriptor is registered, each
/// holding its own clone of the context handle. Short-arity overloads are
/// registered alongside so a missing argument is reported by name.
#[must_use]
pub fn build_module(context: &ExecutionContext) -> Module {
    let mut module = Module::new();

    for function in &registry::descriptor().functions {
        let context = context.clone();
        match function.operation {
            Operation::Seed => {
                module.set_native_fn(function.name, move || -> Result<(), Box<EvalAltResult>> {
                    Err(missing_argument(function, 0))
                });
                module.set_native_fn(
                    function.name,
                    move |value: Dynamic| -> Result<(), Box<EvalAltResult>> {
                        ops::seed(&context, &ScriptValue(&value)).map_err(into_eval_error)
                    },
                );
            }
            Operation::Number => {
                module.set_native_fn(function.name, move || -> Result<INT, Box<EvalAltResult>> {
                    Err(missing_argument(function, 0))
                });
                module.set_native_fn(
                    function.name,
                    move |_min: Dynamic| -> Result<INT, Box<EvalAltResult>> {
                        Err(missing_argument(function, 1))
                    },
                );
                module.set_native_fn(
                    function.name,
                    move |min: Dynamic, max: Dynamic| -> Result<INT, Box<EvalAltResult>> {
                        ops::number(&context, &ScriptValue(&min), &ScriptValue(&max))
                            .map_err(into_eval_error)
                    },
                );
            }
        }
    }

    module.build_index();
    module
}
