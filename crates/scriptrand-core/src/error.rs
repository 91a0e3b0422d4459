//! Error types surfaced to scripts.

use thiserror::Error;

/// Message for a context whose generator was never attached.
pub(crate) const NOT_ATTACHED: &str = "generator not attached";

/// Errors raised by the random operations.
///
/// The display form is the bare message, which is what a script sees when
/// the error is raised into it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RandomError {
    /// Malformed or out-of-domain script input.
    #[error("{0}")]
    Argument(String),

    /// The calling context has no generator binding. This is a host
    /// integration defect, not a user error.
    #[error("{0}")]
    Internal(String),
}

/// Coarse classification of a [`RandomError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// See [`RandomError::Argument`].
    Argument,
    /// See [`RandomError::Internal`].
    Internal,
}

impl RandomError {
    pub(crate) fn argument(message: &str) -> Self {
        Self::Argument(message.to_owned())
    }

    /// Returns the kind of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Argument(_) => ErrorKind::Argument,
            Self::Internal(_) => ErrorKind::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_bare_message() {
        let err = RandomError::argument("max is less than min");
        assert_eq!(err.to_string(), "max is less than min");
    }

    #[test]
    fn test_kind_matches_variant() {
        assert_eq!(
            RandomError::argument("bad input").kind(),
            ErrorKind::Argument
        );
        assert_eq!(
            RandomError::Internal(NOT_ATTACHED.to_owned()).kind(),
            ErrorKind::Internal
        );
    }
}
