//! Application layer for orgsettings
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod error;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::SessionConfig;
pub use error::SettingsError;
pub use ports::{
    catalog_fetcher::{CatalogFetcher, FetchError},
    connection::{ConnectionId, ConnectionPort},
    dataverse::{DataverseTransport, FetchQuery, Row, TransportError},
    event_log::{EventLog, FanoutEventLog, LogLevel},
    notifier::{NoNotifier, Notification, NotificationKind, Notifier},
};
pub use use_cases::edit_staging::{CommitOutcome, EditStagingController};
pub use use_cases::load_catalog::{CatalogLoadOutput, CatalogLoader};
pub use use_cases::reconcile::{ReconcileOutcome, ReconciliationEngine};
pub use use_cases::remote_settings::RemoteSettingsGateway;
pub use use_cases::session::{MountReport, SettingsSession};
pub use use_cases::settings_store::{SettingsStore, StoreState};
