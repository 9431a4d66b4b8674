//! Use cases
//!
//! Application-level operations that orchestrate domain logic.
//!
//! - [`load_catalog`] — download and merge the two descriptor catalogs
//! - [`remote_settings`] — read and write the live settings blob
//! - [`reconcile`] — build and re-merge the canonical list
//! - [`edit_staging`] — per-record edits and the batched commit
//! - [`session`] — the facade the display layer drives

pub mod edit_staging;
pub mod load_catalog;
pub mod reconcile;
pub mod remote_settings;
pub mod session;
pub mod settings_store;

#[cfg(test)]
pub(crate) mod test_support;
