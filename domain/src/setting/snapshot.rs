//! Immutable snapshots of the canonical list handed to the display layer.

use crate::core::name::setting_key;
use crate::setting::record::SettingRecord;
use serde::Serialize;

/// Point-in-time copy of the canonical list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SettingsSnapshot {
    /// Incremented on every published change
    pub revision: u64,
    /// Organization the live values were read from
    pub organization_id: Option<String>,
    pub records: Vec<SettingRecord>,
}

impl SettingsSnapshot {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by name, ignoring case and surrounding whitespace.
    pub fn find(&self, name: &str) -> Option<&SettingRecord> {
        let key = setting_key(name);
        self.records.iter().find(|r| r.key() == key)
    }

    pub fn dirty(&self) -> impl Iterator<Item = &SettingRecord> {
        self.records.iter().filter(|r| r.is_dirty())
    }

    pub fn dirty_count(&self) -> usize {
        self.dirty().count()
    }

    pub fn has_pending_edits(&self) -> bool {
        self.records.iter().any(|r| !r.is_clean())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setting::descriptor::{SettingDescriptor, ValueType};

    #[test]
    fn test_find_is_case_insensitive() {
        let snapshot = SettingsSnapshot {
            revision: 1,
            organization_id: None,
            records: vec![SettingRecord::new(
                SettingDescriptor::new("SkipSuffixOnKBArticles", ValueType::Boolean),
                "false",
            )],
        };
        assert!(snapshot.find("skipsuffixonkbarticles ").is_some());
        assert!(snapshot.find("missing").is_none());
        assert_eq!(snapshot.dirty_count(), 0);
        assert!(!snapshot.has_pending_edits());
    }
}
