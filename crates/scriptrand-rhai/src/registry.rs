//! Process-wide description of the `random` module.
//!
//! The descriptor is built once, on first use, and is read-only afterwards.
//! Bindings register exactly the functions it lists.

use std::sync::OnceLock;

use serde::Serialize;

/// Default namespace scripts use to reach the module.
pub const MODULE_NAME: &str = "random";

/// Which operation a registered function dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// `seed(seed)`.
    Seed,
    /// `number(min, max)`.
    Number,
}

/// Metadata for one script-callable function.
#[derive(Debug, Clone, Serialize)]
pub struct FunctionDescriptor {
    /// Name scripts call.
    pub name: &'static str,
    /// Positional parameter names.
    pub params: &'static [&'static str],
    /// One-line description.
    pub doc: &'static str,
    /// Operation backing the function.
    pub operation: Operation,
}

/// Metadata for the whole module.
#[derive(Debug, Clone, Serialize)]
pub struct ModuleDescriptor {
    /// Module name.
    pub name: &'static str,
    /// Exposed functions.
    pub functions: Vec<FunctionDescriptor>,
}

impl ModuleDescriptor {
    /// Looks up a function by name.
    #[must_use]
    pub fn function(&self, name: &str) -> Option<&FunctionDescriptor> {
        self.functions.iter().find(|f| f.name == name)
    }
}

static DESCRIPTOR: OnceLock<ModuleDescriptor> = OnceLock::new();

/// Returns the module descriptor, building it on first call.
pub fn descriptor() -> &'static ModuleDescriptor {
    DESCRIPTOR.get_or_init(|| {
        tracing::debug!(module = MODULE_NAME, "building module descriptor");
        ModuleDescriptor {
            name: MODULE_NAME,
            functions: vec![
                FunctionDescriptor {
                    name: "seed",
                    params: &["seed"],
                    doc: "Reseeds the calling context's generator.",
                    operation: Operation::Seed,
                },
                FunctionDescriptor {
                    name: "number",
                    params: &["min", "max"],
                    doc: "Returns an integer drawn uniformly from [min, max].",
                    operation: Operation::Number,
                },
            ],
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_is_built_once() {
        let first: *const ModuleDescriptor = descriptor();
        let second: *const ModuleDescriptor = descriptor();
        assert_eq!(first, second);
    }

    #[test]
    fn test_descriptor_is_shared_across_threads() {
        let here = std::ptr::from_ref(descriptor()) as usize;
        let there = std::thread::spawn(|| std::ptr::from_ref(descriptor()) as usize)
            .join()
            .unwrap();
        assert_eq!(here, there);
    }

    #[test]
    fn test_descriptor_lists_both_operations() {
        let module = descriptor();
        assert_eq!(module.name, "random");
        assert_eq!(module.function("seed").unwrap().params, ["seed"]);
        assert_eq!(module.function("number").unwrap().params, ["min", "max"]);
        assert!(module.function("shuffle").is_none());
    }

    #[test]
    fn test_descriptor_serializes() {
        let json = serde_json::to_value(descriptor()).unwrap();
        assert_eq!(json["name"], "random");
        assert_eq!(json["functions"][1]["name"], "number");
        assert_eq!(json["functions"][1]["operation"], "number");
        assert_eq!(json["functions"][1]["params"][0], "min");
    }
}
