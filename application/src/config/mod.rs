//! Application-level configuration.
//!
//! - [`SessionConfig`] — catalog locations and notification timing

pub mod session_config;

pub use session_config::SessionConfig;
