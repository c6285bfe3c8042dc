//! Build configuration loader describing where sources and outputs live.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

use crate::builder::BuildContext;
use crate::manifest::ManifestOptions;

/// Configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "addon.config.json";

/// Discoverable build configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Shared source tree every target is built from.
    pub source_dir: String,
    /// Directory the per-target output directories are created under.
    pub output_root: String,
    /// Settings for the file listing helper.
    pub manifest: ManifestOptions,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            source_dir: "_common".into(),
            output_root: ".".into(),
            manifest: ManifestOptions::default(),
        }
    }
}

impl BuildConfig {
    /// Load `addon.config.json` from `dir`, falling back to defaults.
    pub fn discover(dir: &Path) -> Self {
        let candidate = dir.join(DEFAULT_CONFIG_FILE);
        if !candidate.exists() {
            return Self::default();
        }
        Self::from_path(&candidate).unwrap_or_else(|| {
            warn!("ignoring unreadable config {}", candidate.display());
            Self::default()
        })
    }

    /// Read configuration from a specific JSON file.
    pub fn from_path(path: &Path) -> Option<Self> {
        let content = fs::read_to_string(path).ok()?;
        serde_json::from_str(&content).ok()
    }

    /// Paths the builder should work with.
    pub fn build_context(&self) -> BuildContext {
        BuildContext {
            source_dir: PathBuf::from(&self.source_dir),
            output_root: PathBuf::from(&self.output_root),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn defaults_when_file_is_missing() {
        let dir = tempdir().unwrap();
        assert_eq!(BuildConfig::discover(dir.path()), BuildConfig::default());
    }

    #[test]
    fn defaults_when_file_is_invalid() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "{ not json").unwrap();
        assert_eq!(BuildConfig::discover(dir.path()), BuildConfig::default());
    }

    #[test]
    fn reads_partial_configuration() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(DEFAULT_CONFIG_FILE),
            r#"{ "source_dir": "shared", "manifest": { "output_file": "files.txt" } }"#,
        )
        .unwrap();

        let config = BuildConfig::discover(dir.path());
        assert_eq!(config.source_dir, "shared");
        assert_eq!(config.output_root, ".");
        assert_eq!(config.manifest.output_file, "files.txt");
        assert_eq!(config.manifest.relative_prefix, "data/styles/kekule");

        let context = config.build_context();
        assert_eq!(context.source_dir, PathBuf::from("shared"));
    }
}
