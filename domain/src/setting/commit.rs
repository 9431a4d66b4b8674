//! Commit batches: the dirty subset of the canonical list, ready to write.

use crate::core::name::setting_key;
use crate::setting::record::SettingRecord;
use crate::xml::org_settings::write_update_payload;
use std::collections::HashSet;

/// Dirty records captured for one write.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitBatch {
    /// Normalized keys of every dirty record in the batch
    members: HashSet<String>,
    /// `(name, value)` pairs that go into the payload, in list order
    entries: Vec<(String, String)>,
}

impl CommitBatch {
    /// Collect every dirty record.
    ///
    /// A dirty record whose staged and current values are both blank is a
    /// batch member but contributes no payload element.
    pub fn collect(records: &[SettingRecord]) -> Self {
        let mut batch = Self::default();
        for record in records.iter().filter(|r| r.is_dirty()) {
            batch.members.insert(record.key());
            if record.current_value.is_empty() && record.staged_value().unwrap_or_default().is_empty()
            {
                continue;
            }
            batch
                .entries
                .push((record.name().to_string(), record.effective_value().to_string()));
        }
        batch
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Number of dirty records in the batch.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn contains(&self, name: &str) -> bool {
        self.members.contains(&setting_key(name))
    }

    /// Serialized `<orgSettings>` update payload.
    pub fn to_payload(&self) -> String {
        write_update_payload(&self.entries)
    }

    /// Promote staged values of batch members after a successful write.
    ///
    /// Returns how many records transitioned back to Clean.
    pub fn apply_success(&self, records: &mut [SettingRecord]) -> usize {
        records
            .iter_mut()
            .filter(|record| self.members.contains(&record.key()))
            .map(|record| record.mark_committed())
            .filter(|committed| *committed)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setting::descriptor::{SettingDescriptor, ValueType};
    use crate::setting::value_policy::NumericBounds;

    fn record(name: &str, current: &str) -> SettingRecord {
        SettingRecord::new(SettingDescriptor::new(name, ValueType::String), current)
    }

    fn dirty(name: &str, current: &str, staged: &str) -> SettingRecord {
        let mut r = record(name, current);
        r.begin_edit().unwrap();
        r.set_staged_value(staged).unwrap();
        r
    }

    #[test]
    fn test_collect_only_dirty_records() {
        let mut editing = record("Editing", "e");
        editing.begin_edit().unwrap();
        let records = vec![record("Clean", "c"), editing, dirty("Dirty", "1", "2")];

        let batch = CommitBatch::collect(&records);
        assert_eq!(batch.len(), 1);
        assert!(batch.contains("dirty"));
        assert_eq!(batch.entries(), &[("Dirty".to_string(), "2".to_string())]);
    }

    #[test]
    fn test_empty_batch() {
        let batch = CommitBatch::collect(&[record("A", "1")]);
        assert!(batch.is_empty());
        assert_eq!(batch.to_payload(), "<orgSettings></orgSettings>");
    }

    #[test]
    fn test_blank_record_is_member_without_payload() {
        let records = vec![dirty("Blank", "", ""), dirty("Cleared", "x", "")];
        let batch = CommitBatch::collect(&records);
        assert_eq!(batch.len(), 2);
        assert_eq!(batch.entries(), &[("Cleared".to_string(), String::new())]);
    }

    #[test]
    fn test_apply_success_promotes_members_only() {
        let mut records = vec![dirty("A", "1", "2"), record("B", "3")];
        let batch = CommitBatch::collect(&records);

        records.push(dirty("C", "4", "5"));
        assert_eq!(batch.apply_success(&mut records), 1);

        assert_eq!(records[0].current_value, "2");
        assert!(records[0].is_clean());
        assert!(records[2].is_dirty());
    }

    #[test]
    fn test_payload_uses_clamped_values() {
        let descriptor = SettingDescriptor::new("MaxDepth", ValueType::Number)
            .with_bounds(NumericBounds::new(Some(0.0), Some(10.0)));
        let mut r = SettingRecord::new(descriptor, "1");
        r.begin_edit().unwrap();
        r.set_staged_value("15").unwrap();

        let batch = CommitBatch::collect(&[r]);
        assert_eq!(batch.to_payload(), "<orgSettings><MaxDepth>10</MaxDepth></orgSettings>");
    }
}
