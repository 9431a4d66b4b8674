//! Logging infrastructure for the operator event log.
//!
//! Implementations of the [`EventLog`](orgsettings_application::EventLog) port:
//!
//! - [`TracingEventLog`] — forwards to the tracing subscriber
//! - [`JsonlEventLog`] — appends JSONL records to a file

mod jsonl_event_log;
mod tracing_event_log;

pub use jsonl_event_log::JsonlEventLog;
pub use tracing_event_log::TracingEventLog;
