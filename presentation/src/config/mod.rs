//! Presentation-level configuration
//!
//! Configuration for the interactive edit shell.

use std::path::PathBuf;

/// Default number of history entries kept by the shell
pub const DEFAULT_HISTORY_SIZE: usize = 500;

/// Edit shell configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Path to the history file; `None` keeps history in memory only
    pub history_file: Option<PathBuf>,
    /// Maximum number of history entries
    pub history_size: usize,
}

impl ShellConfig {
    pub fn without_history(mut self) -> Self {
        self.history_file = None;
        self
    }

    pub fn with_history_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.history_file = Some(path.into());
        self
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            history_file: dirs::data_dir().map(|p| p.join("orgsettings").join("history.txt")),
            history_size: DEFAULT_HISTORY_SIZE,
        }
    }
}
