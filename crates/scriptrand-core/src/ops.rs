//! The two script-facing operations: `seed` and `number`.
//!
//! Arguments arrive as untyped script values and are cast to `i64` at this
//! boundary, before any arithmetic. Validation order and messages are part of
//! the script-visible contract.

use crate::context::ExecutionContext;
use crate::error::RandomError;

/// A script value that may be representable as an `i64`.
pub trait IntArg {
    /// Returns the value as `i64`, or `None` if it cannot be represented.
    fn to_int64(&self) -> Option<i64>;
}

impl IntArg for i64 {
    fn to_int64(&self) -> Option<i64> {
        Some(*self)
    }
}

impl IntArg for i32 {
    fn to_int64(&self) -> Option<i64> {
        Some(i64::from(*self))
    }
}

impl IntArg for u64 {
    fn to_int64(&self) -> Option<i64> {
        i64::try_from(*self).ok()
    }
}

impl IntArg for i128 {
    fn to_int64(&self) -> Option<i64> {
        i64::try_from(*self).ok()
    }
}

/// Reseeds the context's generator with `value`.
///
/// # Errors
///
/// Returns `RandomError::Argument` if `value` does not fit in an `i64`, and
/// `RandomError::Internal` if the context has no generator.
pub fn seed(context: &ExecutionContext, value: &impl IntArg) -> Result<(), RandomError> {
    let seed = value
        .to_int64()
        .ok_or_else(|| RandomError::argument("value out of range"))?;

    context.with_generator(|rng| rng.reseed(seed))?;
    tracing::debug!(context_id = %context.id(), seed, "generator reseeded");
    Ok(())
}

/// Draws an integer uniformly from `[min, max]` using the context's generator.
///
/// # Errors
///
/// Returns `RandomError::Argument` if either bound does not fit in an `i64`,
/// if `min` is negative, or if `max < min`. Returns `RandomError::Internal`
/// if the context has no generator.
pub fn number(
    context: &ExecutionContext,
    min: &impl IntArg,
    max: &impl IntArg,
) -> Result<i64, RandomError> {
    let min = min
        .to_int64()
        .ok_or_else(|| RandomError::argument("casting min to an int64"))?;
    let max = max
        .to_int64()
        .ok_or_else(|| RandomError::argument("casting max to an int64"))?;

    if min < 0 {
        return Err(RandomError::argument("min has to be 0 or greater"));
    }
    if max < min {
        return Err(RandomError::argument("max is less than min"));
    }

    let value = context.with_generator(|rng| rng.next_i64_range(min, max))?;
    tracing::trace!(context_id = %context.id(), min, max, value, "drew number");
    Ok(value)
}
