//! Script thread configuration.

use crate::registry::MODULE_NAME;

/// Settings applied to every engine a [`ScriptThread`](crate::ScriptThread)
/// creates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadConfig {
    /// Namespace the module is registered under.
    pub namespace: String,
    /// Maximum operations per evaluation. Zero means unlimited.
    pub max_operations: u64,
    /// Maximum function call depth.
    pub max_call_levels: usize,
}

impl ThreadConfig {
    /// Sets the module namespace.
    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Sets the operation cap.
    #[must_use]
    pub fn with_max_operations(mut self, max_operations: u64) -> Self {
        self.max_operations = max_operations;
        self
    }

    /// Sets the call depth cap.
    #[must_use]
    pub fn with_max_call_levels(mut self, max_call_levels: usize) -> Self {
        self.max_call_levels = max_call_levels;
        self
    }
}

impl Default for ThreadConfig {
    fn default() -> Self {
        Self {
            namespace: MODULE_NAME.to_owned(),
            max_operations: 0,
            max_call_levels: 64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_module_name() {
        let config = ThreadConfig::default();
        assert_eq!(config.namespace, "random");
        assert_eq!(config.max_operations, 0);
        assert_eq!(config.max_call_levels, 64);
    }

    #[test]
    fn test_builder_overrides() {
        let config = ThreadConfig::default()
            .with_namespace("rng")
            .with_max_operations(10_000)
            .with_max_call_levels(8);
        assert_eq!(config.namespace, "rng");
        assert_eq!(config.max_operations, 10_000);
        assert_eq!(config.max_call_levels, 8);
    }
}
