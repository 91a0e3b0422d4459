//! Shared helpers for script-level integration tests.

use rhai::{Array, EvalAltResult};
use scriptrand_core::entropy::OsEntropy;
use scriptrand_rhai::{ScriptThread, ThreadConfig};

/// A thread with the default configuration and an OS-seeded generator.
pub fn thread() -> ScriptThread {
    ScriptThread::new(&ThreadConfig::default(), &OsEntropy)
}

/// Evaluates a script returning an array of integers.
pub fn eval_ints(thread: &ScriptThread, script: &str) -> Vec<i64> {
    thread
        .eval::<Array>(script)
        .unwrap()
        .into_iter()
        .map(|v| v.as_int().unwrap())
        .collect()
}

/// Asserts that `result` failed with a message containing `expected`.
pub fn assert_script_error<T: std::fmt::Debug>(
    result: Result<T, Box<EvalAltResult>>,
    expected: &str,
) {
    let err = result.unwrap_err();
    let message = err.to_string();
    assert!(
        message.contains(expected),
        "expected error containing {expected:?}, got {message:?}"
    );
}
