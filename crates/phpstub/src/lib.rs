//! phpstub: IDE stub generation for compiled PHP extension modules
//!
//! Natively-compiled extensions expose constants, functions, and classes
//! that static analyzers cannot read from source. This crate turns a
//! module's reflection descriptors into syntactically valid `.php` stub
//! files with empty bodies and type-carrying doc comments, so IDEs can
//! offer completion and type hints for them.
//!
//! # Architecture
//!
//! - `ir`: descriptors for literal values, declared types, members, and
//!   whole modules
//! - `codegen`: member rendering and whole-file stub assembly
//! - `engine`: persistence of one module's stub tree under an output root
//! - `provider`: the capability boundary through which descriptors arrive
//!
//! # Usage
//!
//! ```
//! use phpstub::{ExtensionModule, FunctionDef, ParamDef, PhpType, StubWriter};
//!
//! let module = ExtensionModule::new("demo", "1.0.0").function(
//!     FunctionDef::new("greet")
//!         .in_namespace("demo")
//!         .param(ParamDef::typed("name", PhpType::named("string")))
//!         .returns(PhpType::named("string")),
//! );
//!
//! let out = tempfile::tempdir().unwrap();
//! StubWriter::new(&module).save(out.path().join("demo")).unwrap();
//! ```

pub mod codegen;
pub mod engine;
pub mod error;
pub mod ir;
pub mod provider;

// Re-export commonly used types
pub use codegen::StubGenerator;
pub use engine::{shape_dir, StubWriter};
pub use error::StubError;
pub use ir::{
    doc_type_of, ClassDef, ClassKind, ConstDef, ExtensionModule, FunctionDef, MethodDef, ParamDef,
    PhpType, PhpValue, PropertyDef,
};
pub use provider::{ExtensionProvider, ModuleRegistry};
