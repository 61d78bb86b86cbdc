//! Persisting a module's stub tree
//!
//! [`StubWriter`] walks one module descriptor and writes the generated
//! files under a caller-supplied output root:
//!
//! ```text
//! <root>/consts.php
//! <root>/functions.php
//! <root>/classes/<namespace/path>/<Name>.php
//! <root>/interfaces/<namespace/path>/<Name>.php
//! <root>/traits/<namespace/path>/<Name>.php
//! ```
//!
//! Namespace segments map 1:1 to directory segments. Every write replaces
//! the whole file; a pass over an unchanged module is byte-identical, which
//! is what lets callers key regeneration on a version check.

use crate::codegen::StubGenerator;
use crate::error::StubError;
use crate::ir::{ClassDef, ClassKind, ExtensionModule};
use std::fs;
use std::path::{Path, PathBuf};

/// Writes the stub tree for one module.
pub struct StubWriter<'a> {
    module: &'a ExtensionModule,
}

impl<'a> StubWriter<'a> {
    /// Create a writer for a module
    pub fn new(module: &'a ExtensionModule) -> Self {
        Self { module }
    }

    /// Generate and persist every stub file under `root`, creating the
    /// root and intermediate directories as needed.
    pub fn save(&self, root: impl AsRef<Path>) -> Result<(), StubError> {
        let root = root.as_ref();
        fs::create_dir_all(root)?;
        for kind in [ClassKind::Class, ClassKind::Interface, ClassKind::Trait] {
            fs::create_dir_all(root.join(shape_dir(kind)))?;
        }
        log::debug!("writing {} stubs to {}", self.module.name, root.display());

        let generator = StubGenerator::new(self.module);
        fs::write(root.join("consts.php"), generator.consts_file())?;
        fs::write(root.join("functions.php"), generator.functions_file())?;

        for class in &self.module.classes {
            let dir = root.join(class_dir(class));
            fs::create_dir_all(&dir)?;
            fs::write(
                dir.join(format!("{}.php", class.name)),
                generator.class_file(class),
            )?;
        }
        Ok(())
    }
}

/// Shape-specific subdirectory name for a declaration kind.
pub fn shape_dir(kind: ClassKind) -> &'static str {
    match kind {
        ClassKind::Class => "classes",
        ClassKind::Interface => "interfaces",
        ClassKind::Trait => "traits",
    }
}

/// Relative directory for one declaration: shape directory plus one path
/// segment per namespace segment. A global-namespace declaration lands
/// directly in the shape directory.
fn class_dir(class: &ClassDef) -> PathBuf {
    let mut dir = PathBuf::from(shape_dir(class.kind));
    for segment in class.namespace.split('\\').filter(|s| !s.is_empty()) {
        dir.push(segment);
    }
    dir
}
