//! Infrastructure layer for orgsettings
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod dataverse;
pub mod http;
pub mod logging;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileCatalogConfig, FileConfig, FileConnectionConfig,
    FileOutputConfig,
};
pub use dataverse::{DataverseWebApiTransport, StaticConnection};
pub use http::{HttpCatalogFetcher, build_client};
pub use logging::{JsonlEventLog, TracingEventLog};
