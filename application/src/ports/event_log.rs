//! Operator event log port.
//!
//! Records what the engine did in terms the operator understands ("Fetching
//! organization settings...", "Organization settings saved"). This is
//! separate from `tracing`: tracing carries developer diagnostics, this port
//! carries the session's user-visible history. It is never consulted for
//! control flow.

use serde::Serialize;
use std::sync::Arc;

/// Level of an event log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Info => "info",
            LogLevel::Success => "success",
            LogLevel::Warning => "warning",
            LogLevel::Error => "error",
        }
    }
}

/// Port for the operator event log.
///
/// `log` is synchronous and infallible; sinks swallow their own failures.
pub trait EventLog: Send + Sync {
    fn log(&self, message: &str, level: LogLevel);
}

/// Event log that forwards every entry to several sinks.
pub struct FanoutEventLog {
    sinks: Vec<Arc<dyn EventLog>>,
}

impl FanoutEventLog {
    pub fn new(sinks: Vec<Arc<dyn EventLog>>) -> Self {
        Self { sinks }
    }

    pub fn push(&mut self, sink: Arc<dyn EventLog>) {
        self.sinks.push(sink);
    }
}

impl EventLog for FanoutEventLog {
    fn log(&self, message: &str, level: LogLevel) {
        for sink in &self.sinks {
            sink.log(message, level);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Collect(Mutex<Vec<(String, LogLevel)>>);

    impl EventLog for Collect {
        fn log(&self, message: &str, level: LogLevel) {
            self.0.lock().unwrap().push((message.to_string(), level));
        }
    }

    #[test]
    fn test_fanout_reaches_every_sink() {
        let a = Arc::new(Collect::default());
        let b = Arc::new(Collect::default());
        let fanout = FanoutEventLog::new(vec![a.clone(), b.clone()]);

        fanout.log("Organization settings loaded", LogLevel::Success);

        assert_eq!(a.0.lock().unwrap().len(), 1);
        assert_eq!(
            b.0.lock().unwrap()[0],
            ("Organization settings loaded".to_string(), LogLevel::Success)
        );
    }

    #[test]
    fn test_level_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&LogLevel::Warning).unwrap(), "\"warning\"");
        assert_eq!(LogLevel::Success.as_str(), "success");
    }
}
