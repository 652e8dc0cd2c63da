//! # Configuration
//!
//! Settings are declared with [`confique`] and resolved in priority order:
//! 1. **Environment variables**: `PREPTRACK_PROGRESS_KEY`, `PREPTRACK_CATALOG_FILE`,
//!    `PREPTRACK_EXPORT_TITLE`, `PREPTRACK_DATE_FORMAT`.
//! 2. **Config file**: `<data_dir>/preptrack.toml`, if present.
//! 3. **Compiled defaults**: `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `progress_key` | `learning-progress` | Storage key of the progress record |
//! | `catalog_file` | (none) | JSON catalog replacing the built-in curriculum |
//! | `export_title` | `Coding Interview University Progress` | Markdown export heading |
//! | `date_format` | `%Y-%m-%d` | strftime pattern for the Markdown export date |
//!
//! ## CLI Usage
//!
//! - `preptrack config`: show resolved values.
//! - `preptrack config gen`: print a commented `preptrack.toml` template.

use crate::error::{PrepError, Result};
use crate::export::{ExportOptions, DEFAULT_DATE_FORMAT, DEFAULT_EXPORT_TITLE};
use crate::tracker::DEFAULT_PROGRESS_KEY;
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "preptrack.toml";

/// Configuration for preptrack, stored in `preptrack.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PrepConfig {
    /// Storage key the progress record is saved under.
    #[config(env = "PREPTRACK_PROGRESS_KEY", default = "learning-progress")]
    pub progress_key: String,

    /// Path to a JSON catalog (an array of categories). When absent the built-in
    /// curriculum is used.
    #[config(env = "PREPTRACK_CATALOG_FILE")]
    pub catalog_file: Option<PathBuf>,

    /// Heading of the Markdown export.
    #[config(
        env = "PREPTRACK_EXPORT_TITLE",
        default = "Coding Interview University Progress"
    )]
    pub export_title: String,

    /// chrono strftime pattern for the export date in Markdown exports.
    #[config(env = "PREPTRACK_DATE_FORMAT", default = "%Y-%m-%d")]
    pub date_format: String,
}

impl Default for PrepConfig {
    fn default() -> Self {
        Self {
            progress_key: DEFAULT_PROGRESS_KEY.to_string(),
            catalog_file: None,
            export_title: DEFAULT_EXPORT_TITLE.to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl PrepConfig {
    /// Loads configuration from the environment and `<dir>/preptrack.toml`.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        let config = Self::builder()
            .env()
            .file(&path)
            .load()
            .map_err(|e| PrepError::Config(e.to_string()))?;
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    pub fn export_options(&self) -> ExportOptions {
        ExportOptions {
            title: self.export_title.clone(),
            date_format: self.date_format.clone(),
        }
    }

    /// Resolved values as `(key, value)` pairs, in declaration order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("progress_key", self.progress_key.clone()),
            (
                "catalog_file",
                self.catalog_file
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "(built-in)".to_string()),
            ),
            ("export_title", self.export_title.clone()),
            ("date_format", self.date_format.clone()),
        ]
    }

    /// A commented TOML template listing every setting with its default.
    pub fn template() -> String {
        confique::toml::template::<PrepConfig>(confique::toml::FormatOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_default_config() {
        let config = PrepConfig::default();
        assert_eq!(config.progress_key, "learning-progress");
        assert!(config.catalog_file.is_none());
        assert_eq!(config.export_options(), ExportOptions::default());
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let config = PrepConfig::load(temp.path()).unwrap();
        assert_eq!(config.export_title, DEFAULT_EXPORT_TITLE);
        assert_eq!(config.date_format, DEFAULT_DATE_FORMAT);
    }

    #[test]
    fn test_load_reads_file() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "export_title = \"Algo Prep\"\ndate_format = \"%d/%m/%Y\"\n",
        )
        .unwrap();

        let config = PrepConfig::load(temp.path()).unwrap();
        assert_eq!(config.export_title, "Algo Prep");
        assert_eq!(config.date_format, "%d/%m/%Y");
        assert_eq!(config.progress_key, DEFAULT_PROGRESS_KEY);
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "export_title = [").unwrap();
        assert!(matches!(
            PrepConfig::load(temp.path()),
            Err(PrepError::Config(_))
        ));
    }

    #[test]
    fn test_entries_show_builtin_catalog() {
        let entries = PrepConfig::default().entries();
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[1], ("catalog_file", "(built-in)".to_string()));
    }

    #[test]
    fn test_template_lists_every_key() {
        let template = PrepConfig::template();
        for key in ["progress_key", "catalog_file", "export_title", "date_format"] {
            assert!(template.contains(key), "missing {key}");
        }
    }
}
