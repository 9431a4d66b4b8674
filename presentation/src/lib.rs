//! Presentation layer for orgsettings
//!
//! This crate contains CLI definitions, console formatters,
//! progress reporters, and the interactive edit shell.

pub mod cli;
pub mod config;
pub mod output;
pub mod progress;
pub mod shell;

// Re-export commonly used types
pub use cli::commands::{Cli, Command};
pub use config::ShellConfig;
pub use output::console::ConsoleFormatter;
pub use output::listing::{ListOptions, SortKey};
pub use output::notifier::ConsoleNotifier;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
pub use shell::{EditShell, ShellCommand};
