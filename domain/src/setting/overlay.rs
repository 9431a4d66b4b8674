//! Community overlay catalog entries.

use crate::core::name::setting_key;
use crate::setting::descriptor::SettingDescriptor;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One `orgSetting` element of the overlay catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayEntry {
    pub name: String,
    pub url: String,
    pub description: String,
}

/// Copy overlay links and descriptions onto matching descriptors.
///
/// Matching uses the normalized setting name. Entries without a matching
/// descriptor are ignored; the overlay never adds descriptors. Returns the
/// number of entries that matched.
pub fn enrich_with_overlay(descriptors: &mut [SettingDescriptor], entries: &[OverlayEntry]) -> usize {
    let index: HashMap<String, usize> = descriptors
        .iter()
        .enumerate()
        .map(|(i, d)| (d.key(), i))
        .collect();

    let mut matched = 0;
    for entry in entries {
        let Some(&i) = index.get(&setting_key(&entry.name)) else {
            continue;
        };
        let descriptor = &mut descriptors[i];
        descriptor.overlay_url = non_blank(&entry.url);
        descriptor.overlay_description = non_blank(&entry.description);
        matched += 1;
    }
    matched
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
