//! # Storage Layer
//!
//! Progress is persisted through a tiny key/value abstraction, [`ProgressStore`].
//! The tracker never touches the filesystem directly; it hands a serialized record
//! to the store under a fixed key and asks for it back at startup.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: production storage. Each key is a JSON file in the
//!   data directory, written atomically (temp file, then rename).
//! - [`mem_backend::MemBackend`]: in-memory storage for tests, with optional write
//!   error simulation.
//!
//! ## The Persisted Record
//!
//! [`record`] owns the on-disk shape:
//!
//! ```text
//! <data_dir>/
//! ├── learning-progress.json   # {"completedItems": [1, 5], "lastUpdated": "..."}
//! └── preptrack.toml           # Optional configuration
//! ```
//!
//! Reading is fail-soft: a missing key, a value that is not JSON, or a document
//! without `completedItems` all read back as "no progress recorded". Writing and
//! removing propagate I/O errors.

use crate::error::Result;

pub mod fs_backend;
pub mod mem_backend;
pub mod record;

/// Abstract interface for raw key/value storage.
///
/// Values are opaque strings. Every method takes `&self`; implementations that
/// need mutation use interior mutability since the tracker is single-threaded.
pub trait ProgressStore {
    /// Fetch the value stored under `key`, or `None` if the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    /// MUST be atomic: a reader never observes a partial value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

impl<S: ProgressStore + ?Sized> ProgressStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}
