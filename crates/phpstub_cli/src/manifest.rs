//! Generation manifest
//!
//! Records what the last batch produced: the generator's own version plus
//! extension name -> extension version. Loaded at batch start, consulted
//! to skip extensions whose stubs are already current, and persisted
//! atomically at batch end. Generation itself is idempotent, so a stale or
//! lost manifest only costs a regeneration, never correctness.

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Version of the generator; a mismatch forces regeneration of every
/// configured extension.
pub const GENERATOR_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Pretty-printed JSON manifest at the output root.
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    /// Generator version that produced the recorded stubs
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub version: Option<String>,

    /// Extension name -> last generated extension version
    #[serde(default)]
    pub extensions: IndexMap<String, String>,
}

impl Manifest {
    /// Load from disk. A missing or unreadable manifest yields the empty
    /// default, so the batch regenerates from scratch.
    pub fn load(path: &Path) -> Manifest {
        match fs::read_to_string(path) {
            Ok(text) => serde_json::from_str(&text).unwrap_or_else(|err| {
                log::warn!("ignoring unreadable manifest {}: {}", path.display(), err);
                Manifest::default()
            }),
            Err(_) => Manifest::default(),
        }
    }

    /// Persist as pretty-printed JSON: write a sibling temp file, then
    /// rename it over the target.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let text = serde_json::to_string_pretty(self).context("serializing manifest")?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, text).with_context(|| format!("writing {}", tmp.display()))?;
        fs::rename(&tmp, path).with_context(|| format!("replacing {}", path.display()))?;
        Ok(())
    }

    /// Whether `name` at `version` must be regenerated: its recorded
    /// version differs, its output tree is missing, or the generator
    /// version changed.
    pub fn needs_update(&self, name: &str, version: &str, save_path: &Path) -> bool {
        self.version.as_deref() != Some(GENERATOR_VERSION)
            || self.extensions.get(name).map(String::as_str) != Some(version)
            || !save_path.is_dir()
    }

    /// Record a successful generation of `name` at `version`.
    pub fn record(&mut self, name: &str, version: &str) {
        self.extensions.insert(name.to_string(), version.to_string());
    }
}
