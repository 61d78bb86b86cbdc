//! Batch configuration
//!
//! A TOML document names the extensions to process and where descriptors
//! and output live:
//!
//! ```toml
//! extensions = ["swoole", "redis"]
//! descriptors = "descriptors"
//! output = "stubs"
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for one batch run.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Extension names to generate stubs for, processed in order
    pub extensions: Vec<String>,

    /// Directory holding `<name>.json` module descriptor documents
    pub descriptors: PathBuf,

    /// Output root; each extension gets its own subdirectory
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

fn default_output() -> PathBuf {
    PathBuf::from("stubs")
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Config> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }
}
