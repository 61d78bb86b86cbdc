//! Module and type-declaration descriptors
//!
//! An [`ExtensionModule`] is the read-only view of one loaded extension:
//! its constants, free functions, and class-like declarations. Each
//! declaration carries a [`ClassKind`] tag decided once at classification
//! time; rendering dispatches on the tag.

use crate::ir::{ConstDef, FunctionDef, MethodDef, PropertyDef};
use serde::{Deserialize, Serialize};

/// Declaration shape of a class-like type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassKind {
    /// Ordinary class
    Class,
    /// Interface: renders constants and methods only
    Interface,
    /// Trait mixin: same member layout as a class
    Trait,
}

/// One class-like declaration of an extension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassDef {
    /// Short name, without namespace
    pub name: String,

    /// Declaring namespace; empty string is the global namespace
    #[serde(default)]
    pub namespace: String,

    /// Declaration shape
    pub kind: ClassKind,

    /// Class constants in declared order
    #[serde(default)]
    pub constants: Vec<ConstDef>,

    /// Public methods in declared order
    #[serde(default)]
    pub methods: Vec<MethodDef>,

    /// Public properties in declared order
    #[serde(default)]
    pub properties: Vec<PropertyDef>,
}

impl ClassDef {
    /// Create a declaration of the given shape in the global namespace
    pub fn new(name: impl Into<String>, kind: ClassKind) -> Self {
        Self {
            name: name.into(),
            namespace: String::new(),
            kind,
            constants: Vec::new(),
            methods: Vec::new(),
            properties: Vec::new(),
        }
    }

    /// Create an ordinary class
    pub fn class(name: impl Into<String>) -> Self {
        Self::new(name, ClassKind::Class)
    }

    /// Create an interface
    pub fn interface(name: impl Into<String>) -> Self {
        Self::new(name, ClassKind::Interface)
    }

    /// Create a trait mixin
    pub fn trait_def(name: impl Into<String>) -> Self {
        Self::new(name, ClassKind::Trait)
    }

    /// Set the declaring namespace
    pub fn in_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Add a class constant
    pub fn const_def(mut self, constant: ConstDef) -> Self {
        self.constants.push(constant);
        self
    }

    /// Add a public method
    pub fn method(mut self, method: MethodDef) -> Self {
        self.methods.push(method);
        self
    }

    /// Add a public property
    pub fn property(mut self, property: PropertyDef) -> Self {
        self.properties.push(property);
        self
    }
}

/// Read-only descriptor of one loaded extension module.
///
/// Descriptors are ephemeral: read once per generation pass and discarded
/// after rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtensionModule {
    /// Extension name
    pub name: String,

    /// Extension version string; regeneration is keyed on changes to it
    pub version: String,

    /// Module-level constants in enumeration order
    #[serde(default)]
    pub constants: Vec<ConstDef>,

    /// Free functions in enumeration order
    #[serde(default)]
    pub functions: Vec<FunctionDef>,

    /// Class-like declarations in enumeration order
    #[serde(default)]
    pub classes: Vec<ClassDef>,
}

impl ExtensionModule {
    /// Create an empty module descriptor
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            constants: Vec::new(),
            functions: Vec::new(),
            classes: Vec::new(),
        }
    }

    /// Add a module-level constant
    pub fn const_def(mut self, constant: ConstDef) -> Self {
        self.constants.push(constant);
        self
    }

    /// Add a free function
    pub fn function(mut self, function: FunctionDef) -> Self {
        self.functions.push(function);
        self
    }

    /// Add a class-like declaration
    pub fn class(mut self, class: ClassDef) -> Self {
        self.classes.push(class);
        self
    }
}
