//! Organization settings: descriptors, records and the merge into the
//! canonical list.
//!
//! - [`descriptor`] — static metadata from the catalogs
//! - [`record`] — canonical entity and its edit state machine
//! - [`overlay`] — enrichment from the community overlay catalog
//! - [`value_policy`] — clamping and Boolean toggling of staged input
//! - [`reconcile`] — fresh build and sticky re-merge of the canonical list
//! - [`commit`] — dirty subset captured for a write

pub mod commit;
pub mod descriptor;
pub mod live_value;
pub mod overlay;
pub mod reconcile;
pub mod record;
pub mod snapshot;
pub mod value_policy;
