//! # CLI Behavior
//!
//! One UI client for preptrack. For the layering, see the crate docs in [`crate`].
//!
//! - `preptrack` with no subcommand prints the status overview.
//! - Item ids accept ranges: `preptrack done 1-4`.
//! - `export` writes `coding-interview-progress.json` (or `.md`) in the current
//!   directory unless `--output` or `--stdout` is given.
//! - `reset` asks for confirmation on the terminal; `--yes` skips it. Without a
//!   terminal and without `--yes`, nothing is reset.
//! - Logging goes to stderr, filtered by `PREPTRACK_LOG` (default `warn`, or
//!   `debug` with `-v`).
//!
//! ## Module Structure
//!
//! - `setup`: clap definitions and version string
//! - `commands`: context setup, dispatch, prompts
//! - `render`: text layout
//! - `styles`: terminal styles

mod commands;
mod render;
pub mod setup;
mod styles;

pub use commands::run;
