//! Merging descriptors with live values into the canonical list.
//!
//! Two entry points with different precedence for blank live values:
//!
//! - [`reconcile`] builds a fresh list. Missing or blank live values leave
//!   `current_value` blank.
//! - [`remerge`] rebuilds over an existing list. A blank or missing live
//!   value never downgrades a populated `current_value` (sticky merge).
//!
//! Both rebuild every record from scratch: edit overlays of the previous list
//! are discarded. Live values without a descriptor are dropped, so the result
//! always has exactly one record per descriptor.

use crate::core::name::setting_key;
use crate::setting::descriptor::SettingDescriptor;
use crate::setting::live_value::LiveValue;
use crate::setting::record::SettingRecord;
use std::collections::HashMap;

/// Build a fresh canonical list.
pub fn reconcile(descriptors: &[SettingDescriptor], live: &[LiveValue]) -> Vec<SettingRecord> {
    let live_map = live_value_map(live);

    descriptors
        .iter()
        .map(|descriptor| {
            let current = live_map
                .get(&descriptor.key())
                .copied()
                .unwrap_or_default();
            SettingRecord::new(descriptor.clone(), current)
        })
        .collect()
}

/// Rebuild the canonical list over `existing`, keeping last-known-good values.
pub fn remerge(
    existing: &[SettingRecord],
    descriptors: &[SettingDescriptor],
    live: &[LiveValue],
) -> Vec<SettingRecord> {
    let live_map = live_value_map(live);
    let prior: HashMap<String, &str> = existing
        .iter()
        .map(|record| (record.key(), record.current_value.as_str()))
        .collect();

    descriptors
        .iter()
        .map(|descriptor| {
            let key = descriptor.key();
            let current = live_map
                .get(&key)
                .or_else(|| prior.get(&key))
                .copied()
                .unwrap_or_default();
            SettingRecord::new(descriptor.clone(), current)
        })
        .collect()
}

/// Normalized name -> non-blank live value. Later duplicates win.
fn live_value_map(live: &[LiveValue]) -> HashMap<String, &str> {
    let mut map = HashMap::with_capacity(live.len());
    for value in live {
        if value.current_value.is_empty() {
            continue;
        }
        map.insert(setting_key(&value.name), value.current_value.as_str());
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setting::descriptor::ValueType;
    use crate::setting::record::EditState;

    fn descriptors(names: &[&str]) -> Vec<SettingDescriptor> {
        names
            .iter()
            .map(|name| SettingDescriptor::new(*name, ValueType::String))
            .collect()
    }

    fn current_of<'a>(records: &'a [SettingRecord], name: &str) -> &'a str {
        records
            .iter()
            .find(|r| r.name() == name)
            .map(|r| r.current_value.as_str())
            .unwrap()
    }

    #[test]
    fn test_one_record_per_descriptor() {
        let d = descriptors(&["A", "B", "C"]);
        let live = vec![
            LiveValue::new("A", "1"),
            LiveValue::new("Unknown", "x"),
            LiveValue::new("Other", "y"),
            LiveValue::new("More", "z"),
        ];
        let records = reconcile(&d, &live);
        assert_eq!(records.len(), 3);
        assert!(records.iter().all(|r| r.is_clean()));

        assert_eq!(reconcile(&d, &[]).len(), 3);
    }

    #[test]
    fn test_name_matching_ignores_case_and_whitespace() {
        let d = descriptors(&[" Foo "]);
        let records = reconcile(&d, &[LiveValue::new("foo", "42")]);
        assert_eq!(records[0].current_value, "42");
    }

    #[test]
    fn test_missing_live_value_is_blank() {
        let d = descriptors(&["A"]).into_iter().map(|d| d.with_default("true")).collect::<Vec<_>>();
        let records = reconcile(&d, &[]);
        assert_eq!(records[0].current_value, "");
    }

    #[test]
    fn test_duplicate_live_values_later_wins() {
        let d = descriptors(&["A"]);
        let live = vec![LiveValue::new("A", "first"), LiveValue::new("a", "second")];
        assert_eq!(reconcile(&d, &live)[0].current_value, "second");
    }

    #[test]
    fn test_remerge_is_sticky() {
        let d = descriptors(&["A", "B"]);
        let first = reconcile(&d, &[LiveValue::new("A", "1"), LiveValue::new("B", "2")]);

        let again = remerge(&first, &d, &[]);
        assert_eq!(current_of(&again, "A"), "1");
        assert_eq!(current_of(&again, "B"), "2");

        let blanked = remerge(&first, &d, &[LiveValue::new("A", "")]);
        assert_eq!(current_of(&blanked, "A"), "1");
    }

    #[test]
    fn test_remerge_takes_new_non_blank_values() {
        let d = descriptors(&["A"]);
        let first = reconcile(&d, &[LiveValue::new("A", "1")]);
        let updated = remerge(&first, &d, &[LiveValue::new("A", "7")]);
        assert_eq!(current_of(&updated, "A"), "7");
    }

    #[test]
    fn test_fresh_reconcile_starts_blank() {
        let d = descriptors(&["A"]);
        let _populated = reconcile(&d, &[LiveValue::new("A", "1")]);
        let fresh = reconcile(&d, &[]);
        assert_eq!(current_of(&fresh, "A"), "");
    }

    #[test]
    fn test_remerge_discards_edits() {
        let d = descriptors(&["A"]);
        let mut records = reconcile(&d, &[LiveValue::new("A", "1")]);
        records[0].begin_edit().unwrap();
        records[0].set_staged_value("2").unwrap();

        let rebuilt = remerge(&records, &d, &[]);
        assert_eq!(rebuilt[0].edit, EditState::Clean);
        assert_eq!(rebuilt[0].current_value, "1");
    }

    #[test]
    fn test_remerge_follows_new_descriptor_set() {
        let first = reconcile(&descriptors(&["A", "B"]), &[LiveValue::new("B", "2")]);
        let rebuilt = remerge(&first, &descriptors(&["B", "C"]), &[]);
        assert_eq!(rebuilt.len(), 2);
        assert_eq!(current_of(&rebuilt, "B"), "2");
        assert_eq!(current_of(&rebuilt, "C"), "");
    }
}
