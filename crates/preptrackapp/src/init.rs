//! # Startup
//!
//! [`initialize`] wires the application together:
//!
//! 1. Resolve the data directory.
//! 2. Load [`PrepConfig`] from `<data_dir>/preptrack.toml` and the environment.
//! 3. Build the [`Catalog`]: the configured `catalog_file`, or the bundled curriculum.
//! 4. Open a [`ProgressTracker`] on an [`FsBackend`] rooted at the data directory,
//!    restoring progress saved under `progress_key`.
//!
//! ## Data Directory
//!
//! Resolved in order:
//! - the explicit override (the CLI's `--data` flag),
//! - the `PREPTRACK_DATA` environment variable,
//! - the OS data directory from [`directories::ProjectDirs`].
//!
//! The directory is created lazily, on the first write.

use crate::api::PrepApi;
use crate::catalog::Catalog;
use crate::config::PrepConfig;
use crate::error::{PrepError, Result};
use crate::store::fs_backend::FsBackend;
use crate::tracker::ProgressTracker;
use directories::ProjectDirs;
use std::path::PathBuf;

pub const DATA_DIR_ENV: &str = "PREPTRACK_DATA";

pub struct PrepContext {
    pub api: PrepApi<FsBackend>,
    pub config: PrepConfig,
    pub data_dir: PathBuf,
}

pub fn initialize(data_override: Option<PathBuf>) -> Result<PrepContext> {
    let env_dir = std::env::var_os(DATA_DIR_ENV).map(PathBuf::from);
    let data_dir = resolve_data_dir(data_override, env_dir)?;
    tracing::debug!(data_dir = %data_dir.display(), "Using data directory");

    let config = PrepConfig::load(&data_dir)?;
    let catalog = match &config.catalog_file {
        Some(path) => {
            let path = if path.is_relative() {
                data_dir.join(path)
            } else {
                path.clone()
            };
            Catalog::load(&path)?
        }
        None => Catalog::bundled(),
    };

    let store = FsBackend::new(data_dir.clone());
    let tracker = ProgressTracker::open(catalog, store, config.progress_key.clone())
        .with_export_options(config.export_options());
    let api = PrepApi::new(tracker, data_dir.clone());

    Ok(PrepContext {
        api,
        config,
        data_dir,
    })
}

fn resolve_data_dir(data_override: Option<PathBuf>, env_dir: Option<PathBuf>) -> Result<PathBuf> {
    let non_empty = |d: &PathBuf| !d.as_os_str().is_empty();
    if let Some(dir) = data_override.filter(non_empty).or(env_dir.filter(non_empty)) {
        return Ok(dir);
    }
    ProjectDirs::from("com", "preptrack", "preptrack")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| PrepError::Config("Could not determine a data directory".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ProgressStore;
    use std::fs;

    #[test]
    fn test_override_wins_over_env() {
        let dir = resolve_data_dir(Some(PathBuf::from("/a")), Some(PathBuf::from("/b"))).unwrap();
        assert_eq!(dir, PathBuf::from("/a"));
    }

    #[test]
    fn test_env_used_without_override() {
        let dir = resolve_data_dir(None, Some(PathBuf::from("/b"))).unwrap();
        assert_eq!(dir, PathBuf::from("/b"));
    }

    #[test]
    fn test_empty_env_falls_through() {
        match resolve_data_dir(None, Some(PathBuf::new())) {
            Ok(dir) => assert!(!dir.as_os_str().is_empty()),
            Err(e) => assert!(matches!(e, PrepError::Config(_))),
        }
    }

    #[test]
    fn test_empty_override_is_ignored() {
        let dir = resolve_data_dir(Some(PathBuf::new()), Some(PathBuf::from("/b"))).unwrap();
        assert_eq!(dir, PathBuf::from("/b"));
    }

    #[test]
    fn test_initialize_with_override_uses_bundled_catalog() {
        let temp = tempfile::tempdir().unwrap();
        let ctx = initialize(Some(temp.path().to_path_buf())).unwrap();

        assert_eq!(ctx.data_dir, temp.path());
        assert_eq!(ctx.api.tracker().catalog().item_count(), 33);
        assert!(ctx.api.tracker().completed_items().is_empty());
    }

    #[test]
    fn test_initialize_restores_saved_progress() {
        let temp = tempfile::tempdir().unwrap();
        let store = FsBackend::new(temp.path().to_path_buf());
        store
            .set("learning-progress", r#"{"completedItems":[4,8]}"#)
            .unwrap();

        let ctx = initialize(Some(temp.path().to_path_buf())).unwrap();
        assert_eq!(ctx.api.tracker().completed_items(), vec![4, 8]);
    }

    #[test]
    fn test_initialize_with_relative_catalog_file() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(
            temp.path().join("catalog.json"),
            r#"[{"id":"rust","name":"Rust","items":[{"id":1,"title":"Ownership","category":"rust"}]}]"#,
        )
        .unwrap();
        fs::write(
            temp.path().join("preptrack.toml"),
            "catalog_file = \"catalog.json\"\n",
        )
        .unwrap();

        let ctx = initialize(Some(temp.path().to_path_buf())).unwrap();
        assert_eq!(ctx.api.tracker().catalog().item_count(), 1);
        assert_eq!(ctx.api.tracker().categories()[0].name, "Rust");
    }

    #[test]
    fn test_initialize_with_missing_catalog_file_fails() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(
            temp.path().join("preptrack.toml"),
            "catalog_file = \"missing.json\"\n",
        )
        .unwrap();

        assert!(initialize(Some(temp.path().to_path_buf())).is_err());
    }
}
