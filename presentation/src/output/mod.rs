//! Console output
//!
//! - [`console`] — table, detail view and outcome formatting
//! - [`listing`] — filtering and sorting of table rows
//! - [`markup`] — plain-text rendering of HTML descriptions
//! - [`notifier`] — notification banners

pub mod console;
pub mod listing;
pub mod markup;
pub mod notifier;
