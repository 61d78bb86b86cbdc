//! phpstub: batch stub generation for configured PHP extension modules
//!
//! Reads a TOML config naming the extensions to process, pulls each
//! module's descriptor through the provider, and regenerates its stub
//! tree when the manifest says the recorded version is stale. Extensions
//! that are not available are skipped with a message; one extension's
//! failure never aborts the rest of the batch.

mod config;
mod manifest;
mod provider;

use anyhow::Result;
use clap::Parser;
use config::Config;
use manifest::{Manifest, GENERATOR_VERSION};
use phpstub::{ExtensionModule, ExtensionProvider, StubError, StubWriter};
use provider::DescriptorDir;
use std::fs;
use std::path::Path;

#[derive(Debug, Parser)]
#[command(
    name = "phpstub",
    version,
    about = "Generate IDE stub files for compiled PHP extension modules"
)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "phpstub.toml")]
    config: std::path::PathBuf,

    /// Override the configured output root
    #[arg(long)]
    output: Option<std::path::PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;
    let output = cli.output.unwrap_or_else(|| config.output.clone());
    run(&config, &output)
}

fn run(config: &Config, output: &Path) -> Result<()> {
    let provider = DescriptorDir::new(&config.descriptors);
    let manifest_path = output.join("manifest.json");
    let mut manifest = Manifest::load(&manifest_path);

    println!("phpstub: generating extension stubs...");
    let mut generated = 0usize;
    let mut up_to_date = 0usize;

    for name in &config.extensions {
        let module = match provider.describe(name) {
            Ok(module) => module,
            Err(StubError::ModuleNotFound(_)) => {
                println!("{} not found", name);
                continue;
            }
            Err(err) => {
                log::error!("failed to read descriptor for {}: {}", name, err);
                continue;
            }
        };

        let save_path = output.join(name);
        if !manifest.needs_update(name, &module.version, &save_path) {
            log::debug!("{} {} unchanged, skipping", name, module.version);
            up_to_date += 1;
            continue;
        }

        println!("Generating {}...", name);
        match regenerate(&module, &save_path) {
            Ok(()) => {
                manifest.record(name, &module.version);
                generated += 1;
            }
            Err(err) => log::error!("failed to generate {}: {}", name, err),
        }
    }

    manifest.version = Some(GENERATOR_VERSION.to_string());
    manifest.save(&manifest_path)?;
    println!(
        "phpstub: complete ({} generated, {} up to date)",
        generated, up_to_date
    );
    Ok(())
}

/// Replace an extension's stub tree wholesale. The previous tree is
/// removed first so declarations that disappeared from the module do not
/// leave orphaned files behind.
fn regenerate(module: &ExtensionModule, save_path: &Path) -> Result<(), StubError> {
    if save_path.is_dir() {
        fs::remove_dir_all(save_path)?;
    }
    StubWriter::new(module).save(save_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_descriptor(dir: &Path, name: &str, version: &str) {
        let json = format!(
            r#"{{
                "name": "{name}",
                "version": "{version}",
                "constants": [{{"name": "X", "value": 1}}],
                "classes": [{{"name": "Client", "namespace": "{name}", "kind": "class"}}]
            }}"#
        );
        fs::write(dir.join(format!("{}.json", name)), json).unwrap();
    }

    fn config_for(tmp: &Path, extensions: &[&str]) -> Config {
        Config {
            extensions: extensions.iter().map(|s| s.to_string()).collect(),
            descriptors: tmp.join("descriptors"),
            output: tmp.join("stubs"),
        }
    }

    #[test]
    fn test_batch_generates_and_records() {
        let tmp = tempfile::tempdir().unwrap();
        let descriptors = tmp.path().join("descriptors");
        fs::create_dir_all(&descriptors).unwrap();
        write_descriptor(&descriptors, "demo", "1.0.0");

        let config = config_for(tmp.path(), &["demo", "missing"]);
        run(&config, &config.output).unwrap();

        assert!(config.output.join("demo/consts.php").is_file());
        assert!(config
            .output
            .join("demo/classes/demo/Client.php")
            .is_file());
        assert!(!config.output.join("missing").exists());

        let manifest = Manifest::load(&config.output.join("manifest.json"));
        assert_eq!(manifest.version.as_deref(), Some(GENERATOR_VERSION));
        assert_eq!(
            manifest.extensions.get("demo").map(String::as_str),
            Some("1.0.0")
        );
    }

    #[test]
    fn test_unchanged_version_skips_regeneration() {
        let tmp = tempfile::tempdir().unwrap();
        let descriptors = tmp.path().join("descriptors");
        fs::create_dir_all(&descriptors).unwrap();
        write_descriptor(&descriptors, "demo", "1.0.0");

        let config = config_for(tmp.path(), &["demo"]);
        run(&config, &config.output).unwrap();

        // Plant a marker; an up-to-date second run must not rewrite the tree
        let marker = config.output.join("demo/marker");
        fs::write(&marker, "untouched").unwrap();
        run(&config, &config.output).unwrap();
        assert!(marker.is_file());

        // A version bump regenerates and clears the old tree
        write_descriptor(&descriptors, "demo", "2.0.0");
        run(&config, &config.output).unwrap();
        assert!(!marker.exists());
        assert!(config.output.join("demo/consts.php").is_file());
    }

    #[test]
    fn test_output_override_is_a_plain_path() {
        let config = Config {
            extensions: vec![],
            descriptors: PathBuf::from("desc"),
            output: PathBuf::from("stubs"),
        };
        let tmp = tempfile::tempdir().unwrap();
        run(&config, tmp.path()).unwrap();
        assert!(tmp.path().join("manifest.json").is_file());
    }
}
