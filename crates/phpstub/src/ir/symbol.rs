//! Member descriptors: constants, parameters, functions, methods, properties
//!
//! Read-only views of one reflected entity each. The host reflection
//! surfaces only public members, so methods and properties carry no
//! visibility field.

use crate::ir::{PhpType, PhpValue};
use serde::{Deserialize, Serialize};

/// A named constant, either module-level or declared on a class.
///
/// Module-level constant names may contain `\` namespace separators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstDef {
    /// Constant name
    pub name: String,
    /// Literal value
    pub value: PhpValue,
}

impl ConstDef {
    /// Create a new constant
    pub fn new(name: impl Into<String>, value: PhpValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// One parameter of a function or method, in declared order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamDef {
    /// Parameter name, without the `$` sigil
    pub name: String,

    /// Declared type; `None` means untyped
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub ty: Option<PhpType>,

    /// Whether the parameter may be omitted at the call site
    #[serde(default)]
    pub optional: bool,

    /// Whether this is a `...` rest parameter
    #[serde(default)]
    pub variadic: bool,

    /// Whether the parameter is passed by reference
    #[serde(default)]
    pub by_ref: bool,

    /// Default value; meaningful only when optional and not variadic.
    /// `None` on an optional parameter means the default could not be
    /// resolved at reflection time.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub default: Option<PhpValue>,
}

impl ParamDef {
    /// Create an untyped parameter
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: None,
            optional: false,
            variadic: false,
            by_ref: false,
            default: None,
        }
    }

    /// Create a typed parameter
    pub fn typed(name: impl Into<String>, ty: PhpType) -> Self {
        Self {
            ty: Some(ty),
            ..Self::new(name)
        }
    }

    /// Set the declared type
    pub fn with_type(mut self, ty: PhpType) -> Self {
        self.ty = Some(ty);
        self
    }

    /// Mark as optional
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Mark as variadic
    pub fn variadic(mut self) -> Self {
        self.variadic = true;
        self
    }

    /// Mark as by-reference
    pub fn by_ref(mut self) -> Self {
        self.by_ref = true;
        self
    }

    /// Set the default value
    pub fn with_default(mut self, value: PhpValue) -> Self {
        self.default = Some(value);
        self
    }
}

/// A free function, grouped into its declaring namespace when rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDef {
    /// Short name, without namespace
    pub name: String,

    /// Declaring namespace; empty string is the global namespace
    #[serde(default)]
    pub namespace: String,

    /// Parameters in declared order
    #[serde(default)]
    pub params: Vec<ParamDef>,

    /// Return type; `None` means untyped
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub ret: Option<PhpType>,
}

impl FunctionDef {
    /// Create a function in the global namespace
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: String::new(),
            params: Vec::new(),
            ret: None,
        }
    }

    /// Set the declaring namespace
    pub fn in_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Add a parameter
    pub fn param(mut self, param: ParamDef) -> Self {
        self.params.push(param);
        self
    }

    /// Set the return type
    pub fn returns(mut self, ty: PhpType) -> Self {
        self.ret = Some(ty);
        self
    }
}

/// A public method of a class-like declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodDef {
    /// Method name
    pub name: String,

    /// Parameters in declared order
    #[serde(default)]
    pub params: Vec<ParamDef>,

    /// Return type; `None` means untyped
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub ret: Option<PhpType>,

    /// Static vs instance method
    #[serde(default)]
    pub is_static: bool,
}

impl MethodDef {
    /// Create an instance method
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            ret: None,
            is_static: false,
        }
    }

    /// Add a parameter
    pub fn param(mut self, param: ParamDef) -> Self {
        self.params.push(param);
        self
    }

    /// Set the return type
    pub fn returns(mut self, ty: PhpType) -> Self {
        self.ret = Some(ty);
        self
    }

    /// Mark as static
    pub fn as_static(mut self) -> Self {
        self.is_static = true;
        self
    }
}

/// A public property of a class-like declaration.
///
/// Reflection does not expose property defaults reliably, so properties
/// carry no type or value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDef {
    /// Property name, without the `$` sigil
    pub name: String,

    /// Static vs instance property
    #[serde(default)]
    pub is_static: bool,
}

impl PropertyDef {
    /// Create an instance property
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_static: false,
        }
    }

    /// Mark as static
    pub fn as_static(mut self) -> Self {
        self.is_static = true;
        self
    }
}
