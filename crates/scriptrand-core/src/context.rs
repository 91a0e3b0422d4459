//! Execution context handle and its generator binding.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use uuid::Uuid;

use crate::error::{NOT_ATTACHED, RandomError};
use crate::rng::ScriptRng;

type GeneratorSlot = Rc<RefCell<Option<Box<dyn ScriptRng>>>>;

/// A single logical run of script code.
///
/// Clones share the same generator slot; script bindings hold a clone of the
/// handle rather than the generator itself. The handle is `!Send`, so a
/// context and its generator stay on the thread that created them.
#[derive(Clone)]
pub struct ExecutionContext {
    id: Uuid,
    generator: GeneratorSlot,
}

impl ExecutionContext {
    /// Create a context with no generator binding.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            generator: Rc::default(),
        }
    }

    /// Returns the context identifier.
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns `true` once a generator has been attached.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.generator.borrow().is_some()
    }

    /// Replaces the generator binding.
    pub(crate) fn bind(&self, rng: Box<dyn ScriptRng>) {
        *self.generator.borrow_mut() = Some(rng);
    }

    /// Runs `f` against the bound generator.
    ///
    /// # Errors
    ///
    /// Returns `RandomError::Internal` if no generator is attached.
    pub(crate) fn with_generator<T>(
        &self,
        f: impl FnOnce(&mut dyn ScriptRng) -> T,
    ) -> Result<T, RandomError> {
        let mut slot = self.generator.borrow_mut();
        let Some(rng) = slot.as_deref_mut() else {
            tracing::warn!(context_id = %self.id, "random call on a context without a generator");
            return Err(RandomError::Internal(NOT_ATTACHED.to_owned()));
        };
        Ok(f(rng))
    }
}

impl Default for ExecutionContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ExecutionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExecutionContext")
            .field("id", &self.id)
            .field("attached", &self.is_attached())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::rng::StdScriptRng;

    #[test]
    fn test_new_context_is_unattached() {
        let context = ExecutionContext::new();
        assert!(!context.is_attached());

        let err = context.with_generator(|_| ()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Internal);
        assert_eq!(err.to_string(), "generator not attached");
    }

    #[test]
    fn test_clones_share_binding() {
        let context = ExecutionContext::new();
        let handle = context.clone();
        context.bind(Box::new(StdScriptRng::from_seed(1)));

        assert!(handle.is_attached());
        assert_eq!(handle.id(), context.id());
    }

    #[test]
    fn test_distinct_contexts_have_distinct_ids() {
        assert_ne!(ExecutionContext::new().id(), ExecutionContext::new().id());
    }

    #[test]
    fn test_debug_reports_attachment() {
        let context = ExecutionContext::new();
        assert!(format!("{context:?}").contains("attached: false"));
    }
}
