//! # Preptrack Architecture
//!
//! Preptrack tracks progress through a fixed interview-preparation curriculum. The
//! library knows nothing about terminals; the `preptrack` binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (crates/preptrack)                                     │
//! │  - Parses arguments, renders output, asks for confirmation  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs)                                               │
//! │  - Turns selectors ("3", "1-4") into item ids               │
//! │  - Dispatches to commands, returns Result<CmdResult>        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs)                                   │
//! │  - Validation, filtering, message wording                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Tracker + Catalog (tracker.rs, catalog/)                   │
//! │  - Completed set, derived statistics, export, reset         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage (store/)                                           │
//! │  - ProgressStore trait: FsBackend, MemBackend               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing writes to stdout or stderr, and nothing exits the
//! process. Diagnostics go through `tracing`; installing a subscriber is up to the
//! client.
//!
//! ## State
//!
//! The only mutable state is the set of completed item ids. It is loaded once when
//! the tracker opens and written back after every mutation. All statistics are
//! recomputed from the catalog on each read.
//!
//! ## Testing
//!
//! Commands carry most of the tests and run against `MemBackend`. Storage and
//! startup tests use temporary directories. The CLI crate has end-to-end tests that
//! drive the binary.
//!
//! ## Module Overview
//!
//! - [`api`]: facade for UI clients
//! - [`commands`]: business operations
//! - [`tracker`]: completed set and statistics
//! - [`catalog`]: categories and learning items
//! - [`roadmap`]: recommended study phases
//! - [`export`]: JSON and Markdown rendering
//! - [`store`]: key/value persistence
//! - [`config`]: layered configuration
//! - [`init`]: startup wiring
//! - [`model`]: shared data types
//! - [`error`]: error type

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod init;
pub mod model;
pub mod roadmap;
pub mod store;
pub mod tracker;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
