//! Descriptor-directory provider
//!
//! Module descriptors arrive as one JSON document per extension,
//! `<dir>/<name>.json`, deserializing straight into the core IR. A missing
//! document is the recoverable not-loaded condition; a document that fails
//! to parse aborts that module only.

use phpstub::{ExtensionModule, ExtensionProvider, StubError};
use std::fs;
use std::io;
use std::path::PathBuf;

/// Provider reading `<name>.json` module descriptor documents from one
/// directory.
#[derive(Debug)]
pub struct DescriptorDir {
    dir: PathBuf,
}

impl DescriptorDir {
    /// Create a provider over a descriptor directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ExtensionProvider for DescriptorDir {
    fn module_names(&self) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = fs::read_dir(&self.dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().map_or(false, |ext| ext == "json") {
                    if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                        names.push(stem.to_string());
                    }
                }
            }
        }
        names.sort();
        names
    }

    fn describe(&self, name: &str) -> Result<ExtensionModule, StubError> {
        let path = self.dir.join(format!("{}.json", name));
        if !path.is_file() {
            return Err(StubError::ModuleNotFound(name.to_string()));
        }
        let text = fs::read_to_string(&path)?;
        serde_json::from_str(&text)
            .map_err(|err| StubError::Io(io::Error::new(io::ErrorKind::InvalidData, err)))
    }
}
