//! Row selection for the settings table: filter, dirty-only view and sort.

use clap::ValueEnum;
use orgsettings_domain::{SettingRecord, SettingsSnapshot};
use std::cmp::Ordering;

/// Sort column of the settings table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SortKey {
    /// Setting name, case-insensitive
    #[default]
    Name,
    /// Current value; numbers compare numerically, blanks sort last
    Current,
}

/// Which rows to show and in what order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    pub filter: Option<String>,
    pub dirty_only: bool,
    pub sort: SortKey,
}

impl ListOptions {
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn dirty_only(mut self, dirty_only: bool) -> Self {
        self.dirty_only = dirty_only;
        self
    }

    pub fn sorted_by(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Select and order the rows of `snapshot`.
    pub fn select<'a>(&self, snapshot: &'a SettingsSnapshot) -> Vec<&'a SettingRecord> {
        let needle = self
            .filter
            .as_deref()
            .map(|f| f.trim().to_lowercase())
            .filter(|f| !f.is_empty());

        let mut rows: Vec<&SettingRecord> = snapshot
            .records
            .iter()
            .filter(|r| !self.dirty_only || r.is_dirty())
            .filter(|r| match &needle {
                Some(needle) => r.name().to_lowercase().contains(needle.as_str()),
                None => true,
            })
            .collect();

        match self.sort {
            SortKey::Name => rows.sort_by_key(|r| r.key()),
            SortKey::Current => rows.sort_by(|a, b| {
                compare_values(&a.current_value, &b.current_value).then_with(|| a.key().cmp(&b.key()))
            }),
        }
        rows
    }
}

fn compare_values(a: &str, b: &str) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Greater,
        (false, true) => return Ordering::Less,
        (false, false) => {}
    }
    match (a.parse::<f64>(), b.parse::<f64>()) {
        (Ok(x), Ok(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => a.to_lowercase().cmp(&b.to_lowercase()),
    }
}
