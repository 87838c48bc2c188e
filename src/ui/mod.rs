//! User interface and interaction
//!
//! This module contains CLI parsing, console output and
//! progress reporting.

pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used items
pub use cli::{Cli, cli_to_config};
pub use progress::ProgressReporter;
