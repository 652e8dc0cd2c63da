//! # Preptrack CLI
//!
//! The binary is a thin client of the `preptrackapp` library: this file calls
//! `cli::run()` and turns an error into a message and exit code 1.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (crates/preptrack/src/cli/)                            │
//! │  - clap parsing (setup.rs)                                  │
//! │  - context wiring + dispatch (commands.rs)                  │
//! │  - terminal rendering (render.rs, styles.rs)                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  preptrackapp: API → commands → tracker → store             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Testing Approach
//!
//! - Argument parsing: `setup.rs` tests parse canned argument lists.
//! - Rendering: `render.rs` tests feed canned data with color disabled.
//! - End to end: `tests/cli_e2e.rs` runs the binary against a temporary data
//!   directory via `PREPTRACK_DATA`.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
