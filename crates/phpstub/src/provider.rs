//! Module descriptor providers
//!
//! The generator is independent of how descriptors are obtained: it works
//! against the [`ExtensionProvider`] capability. Hosts with a live
//! introspection facility implement it over that facility; tests and
//! offline pipelines use [`ModuleRegistry`] with fixture descriptors.

use crate::error::StubError;
use crate::ir::ExtensionModule;
use indexmap::IndexMap;

/// Source of module descriptors.
pub trait ExtensionProvider {
    /// Names of the modules this provider can describe, in a stable order.
    fn module_names(&self) -> Vec<String>;

    /// Full descriptor for one module.
    ///
    /// Returns [`StubError::ModuleNotFound`] for names the provider does
    /// not know; callers treat that as a skip, not a batch failure.
    fn describe(&self, name: &str) -> Result<ExtensionModule, StubError>;
}

/// In-memory provider backed by registered descriptors.
#[derive(Debug, Default)]
pub struct ModuleRegistry {
    modules: IndexMap<String, ExtensionModule>,
}

impl ModuleRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a module descriptor, replacing any previous one of the
    /// same name
    pub fn register(&mut self, module: ExtensionModule) {
        self.modules.insert(module.name.clone(), module);
    }

    /// Number of registered modules
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl ExtensionProvider for ModuleRegistry {
    fn module_names(&self) -> Vec<String> {
        self.modules.keys().cloned().collect()
    }

    fn describe(&self, name: &str) -> Result<ExtensionModule, StubError> {
        self.modules
            .get(name)
            .cloned()
            .ok_or_else(|| StubError::ModuleNotFound(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_lookup() {
        let mut registry = ModuleRegistry::new();
        registry.register(ExtensionModule::new("demo", "1.0.0"));

        assert_eq!(registry.module_names(), vec!["demo".to_string()]);
        assert_eq!(registry.describe("demo").unwrap().version, "1.0.0");
    }

    #[test]
    fn test_unknown_module_is_not_found() {
        let registry = ModuleRegistry::new();
        match registry.describe("missing") {
            Err(StubError::ModuleNotFound(name)) => assert_eq!(name, "missing"),
            other => panic!("expected ModuleNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_register_replaces_same_name() {
        let mut registry = ModuleRegistry::new();
        registry.register(ExtensionModule::new("demo", "1.0.0"));
        registry.register(ExtensionModule::new("demo", "2.0.0"));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.describe("demo").unwrap().version, "2.0.0");
    }
}
