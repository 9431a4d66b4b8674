//! Event log sink that forwards entries to `tracing`.

use orgsettings_application::ports::event_log::{EventLog, LogLevel};
use tracing::{error, info, warn};

/// Forwards operator events to the tracing subscriber under the
/// `orgsettings::events` target.
pub struct TracingEventLog;

impl EventLog for TracingEventLog {
    fn log(&self, message: &str, level: LogLevel) {
        match level {
            LogLevel::Info => info!(target: "orgsettings::events", "{}", message),
            LogLevel::Success => info!(target: "orgsettings::events", success = true, "{}", message),
            LogLevel::Warning => warn!(target: "orgsettings::events", "{}", message),
            LogLevel::Error => error!(target: "orgsettings::events", "{}", message),
        }
    }
}
