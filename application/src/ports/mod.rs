//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters
//! must implement.

pub mod catalog_fetcher;
pub mod connection;
pub mod dataverse;
pub mod event_log;
pub mod notifier;
