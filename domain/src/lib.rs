//! Domain layer for orgsettings
//!
//! This crate contains the setting entities, the merge into the canonical
//! list and the XML wire formats. It performs no I/O.
//!
//! # Core Concepts
//!
//! ## Canonical list
//!
//! One [`SettingRecord`] per descriptor of the baseline catalog, carrying the
//! value read from the remote system and an optional edit overlay:
//!
//! - **Descriptor**: static metadata (type, bounds, documentation links)
//! - **Current value**: last value confirmed read from the remote system
//! - **Staged value**: operator-entered candidate, present only while editing
//!
//! ## Sticky merge
//!
//! Re-merging live values into an existing list never replaces a populated
//! current value with a blank one. See [`remerge`].

pub mod core;
pub mod setting;
pub mod xml;

// Re-export commonly used types
pub use core::{error::DomainError, name::setting_key};
pub use setting::{
    commit::CommitBatch,
    descriptor::{SettingDescriptor, ValueType},
    live_value::{LiveSettings, LiveValue},
    overlay::{OverlayEntry, enrich_with_overlay},
    reconcile::{reconcile, remerge},
    record::{EditState, SettingRecord},
    snapshot::SettingsSnapshot,
    value_policy::NumericBounds,
};
pub use xml::{
    catalog::{parse_baseline_catalog, parse_overlay_catalog},
    error::XmlError,
    org_settings::{parse_settings_blob, write_update_payload},
};
