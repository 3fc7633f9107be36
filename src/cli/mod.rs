//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, signal handling,
//! and the watch runner.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod presenter;
#[cfg(windows)]
pub mod signals;

// Re-export commonly used types
pub use app::{run_watch, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
pub use args::{Cli, Commands, ConfigAction, WatchOptions};
pub use presenter::{EventPrinter, Presenter};
