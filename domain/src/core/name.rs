//! Setting name normalization.
//!
//! Setting names are the join key between the baseline catalog, the overlay
//! catalog and the live settings blob. The three sources disagree on casing
//! and occasionally carry stray whitespace, so every comparison goes through
//! [`setting_key`].

/// Normalized lookup key for a setting name (trimmed, lower-cased).
pub fn setting_key(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setting_key_trims_and_lowercases() {
        assert_eq!(setting_key(" Foo "), "foo");
        assert_eq!(setting_key("MaxRecordsForExportToExcel"), "maxrecordsforexporttoexcel");
    }
}
