//! Progress reporting for network operations

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use orgsettings_application::ports::event_log::{EventLog, LogLevel};
use std::sync::Mutex;
use std::time::Duration;

/// Shows a spinner while the session talks to the network.
///
/// Also an [`EventLog`] sink: info entries become the spinner message,
/// warnings and errors are printed above it.
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    /// Start (or restart) the spinner with `message`.
    pub fn start(&self, message: &str) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.spinner.lock()
            && let Some(previous) = slot.replace(pb)
        {
            previous.finish_and_clear();
        }
    }

    /// Stop and remove the spinner.
    pub fn finish(&self) {
        if let Ok(mut slot) = self.spinner.lock()
            && let Some(pb) = slot.take()
        {
            pb.finish_and_clear();
        }
    }

    fn println(&self, line: String) {
        if let Ok(slot) = self.spinner.lock()
            && let Some(pb) = slot.as_ref()
        {
            pb.println(line);
            return;
        }
        eprintln!("{}", line);
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLog for ProgressReporter {
    fn log(&self, message: &str, level: LogLevel) {
        match level {
            LogLevel::Info => {
                if let Ok(slot) = self.spinner.lock()
                    && let Some(pb) = slot.as_ref()
                {
                    pb.set_message(message.to_string());
                }
            }
            LogLevel::Success => {}
            LogLevel::Warning => self.println(format!("{} {}", "!".yellow(), message)),
            LogLevel::Error => self.println(format!("{} {}", "x".red(), message)),
        }
    }
}

/// Simple text-based progress (no spinner)
pub struct SimpleProgress;

impl EventLog for SimpleProgress {
    fn log(&self, message: &str, level: LogLevel) {
        match level {
            LogLevel::Info => eprintln!("{} {}", "->".cyan(), message),
            LogLevel::Success => eprintln!("  {} {}", "v".green(), message),
            LogLevel::Warning => eprintln!("  {} {}", "!".yellow(), message),
            LogLevel::Error => eprintln!("  {} {}", "x".red(), message),
        }
    }
}
