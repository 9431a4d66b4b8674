//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`] — contract violations raised by edit operations
//! - [`name`] — setting-name normalization used as the join key everywhere

pub mod error;
pub mod name;
