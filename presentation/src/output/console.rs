//! Console output formatter for the settings table and detail view

use crate::output::markup::html_to_text;
use colored::Colorize;
use orgsettings_application::{CommitOutcome, MountReport, ReconcileOutcome};
use orgsettings_domain::{SettingRecord, SettingsSnapshot, ValueType};

/// Widest name column before names are truncated
const MAX_NAME_WIDTH: usize = 48;

/// Widest value column before values are truncated
const MAX_VALUE_WIDTH: usize = 28;

/// Formats settings for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format rows as a table: state, name, type, current and staged value.
    pub fn format_table(rows: &[&SettingRecord]) -> String {
        if rows.is_empty() {
            return format!("{}\n", "No settings to show.".dimmed());
        }

        let name_width = rows
            .iter()
            .map(|r| r.name().chars().count())
            .max()
            .unwrap_or(0)
            .clamp(4, MAX_NAME_WIDTH);
        let value_width = MAX_VALUE_WIDTH;

        let mut output = String::new();
        output.push_str(&format!(
            "  {:<name_width$}  {:<7}  {:<value_width$}  {}\n",
            "Name".bold(),
            "Type".bold(),
            "Current".bold(),
            "Staged".bold(),
        ));
        output.push_str(&format!(
            "  {}\n",
            "-".repeat(name_width + value_width * 2 + 13)
        ));

        for record in rows {
            let name = format!("{:<name_width$}", truncate(record.name(), name_width));
            let current = format!(
                "{:<value_width$}",
                truncate(&record.current_value, value_width)
            );
            let staged = record
                .staged_value()
                .map(|v| truncate(v, value_width))
                .unwrap_or_default();

            output.push_str(&format!(
                "{} {}  {:<7}  {}  {}\n",
                Self::state_marker(record),
                if record.is_dirty() { name.yellow().bold() } else { name.normal() },
                record.value_type().as_str(),
                if record.current_value.is_empty() {
                    current.dimmed()
                } else {
                    current.normal()
                },
                staged.yellow(),
            ));
        }

        let dirty = rows.iter().filter(|r| r.is_dirty()).count();
        output.push_str(&format!("\n{} settings", rows.len()));
        if dirty > 0 {
            output.push_str(&format!(", {} with staged changes", dirty.to_string().yellow()));
        }
        output.push('\n');
        output
    }

    /// Format every field of one record.
    pub fn format_detail(record: &SettingRecord) -> String {
        let descriptor = &record.descriptor;
        let mut output = String::new();

        output.push_str(&Self::header(&descriptor.name));
        output.push('\n');

        Self::field(&mut output, "Type", descriptor.value_type.as_str());
        if descriptor.value_type == ValueType::Number && !descriptor.bounds.is_unbounded() {
            Self::field(&mut output, "Bounds", &descriptor.bounds.to_string());
        }
        if let Some(range) = descriptor.version_range() {
            Self::field(&mut output, "Versions", &range);
        }
        Self::field(&mut output, "Default", &descriptor.default_value);
        Self::field(&mut output, "Current", &record.current_value);
        if let Some(staged) = record.staged_value() {
            output.push_str(&format!(
                "{:<10} {} ({})\n",
                "Staged:".cyan().bold(),
                staged.yellow(),
                record.edit.as_str()
            ));
        }

        let description = html_to_text(&descriptor.description);
        if !description.is_empty() {
            output.push_str(&Self::section_header("Description"));
            output.push_str(&description);
            output.push('\n');
        }

        if let Some(url) = &descriptor.support_url {
            output.push_str(&Self::section_header("Support"));
            if let Some(title) = &descriptor.support_url_title {
                output.push_str(&format!("{}\n", title.bold()));
            }
            output.push_str(&format!("{}\n", url.underline()));
        }

        if descriptor.has_overlay() {
            output.push_str(&Self::section_header("Community notes"));
            if let Some(notes) = &descriptor.overlay_description {
                output.push_str(&html_to_text(notes));
                output.push('\n');
            }
            if let Some(url) = &descriptor.overlay_url {
                output.push_str(&format!("{}\n", url.underline()));
            }
        }

        output
    }

    /// Format the canonical list as JSON
    pub fn format_json(snapshot: &SettingsSnapshot) -> String {
        serde_json::to_string_pretty(snapshot).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format an update payload preview
    pub fn format_payload(payload: Option<&str>) -> String {
        match payload {
            Some(payload) => format!("{}\n{}\n", "Update payload:".cyan().bold(), payload),
            None => format!("{}\n", "No changes to save.".dimmed()),
        }
    }

    /// One-line summary of mounting the session
    pub fn format_mount(report: &MountReport) -> String {
        let mut output = format!(
            "{} {} settings",
            "Loaded".green(),
            report.catalog.descriptors.len()
        );
        if report.catalog.overlay_matches > 0 {
            output.push_str(&format!(
                " ({} with community notes)",
                report.catalog.overlay_matches
            ));
        }
        output.push('\n');

        if let Some(e) = &report.catalog.baseline_error {
            output.push_str(&format!("{} settings catalog: {}\n", "x".red(), e));
        }
        if let Some(e) = &report.catalog.overlay_error {
            output.push_str(&format!("{} overlay catalog: {}\n", "!".yellow(), e));
        }
        if let ReconcileOutcome::Applied {
            live_error: Some(e),
            ..
        } = &report.reconcile
        {
            output.push_str(&format!("{} live values: {}\n", "!".yellow(), e));
        }
        output
    }

    /// Result of a save
    pub fn format_commit(outcome: &CommitOutcome) -> String {
        match outcome {
            CommitOutcome::NothingToSave => format!("{}\n", "No changes to save.".dimmed()),
            CommitOutcome::Saved { count } => {
                format!("{} {} setting(s) saved\n", "v".green(), count)
            }
            CommitOutcome::Failed(e) => format!("{} {}\n", "x".red(), e),
        }
    }

    fn state_marker(record: &SettingRecord) -> colored::ColoredString {
        if record.is_dirty() {
            "*".yellow().bold()
        } else if record.is_clean() {
            " ".normal()
        } else {
            "~".cyan()
        }
    }

    fn field(output: &mut String, label: &str, value: &str) {
        let value = if value.is_empty() { "(blank)".dimmed() } else { value.normal() };
        output.push_str(&format!("{:<10} {}\n", format!("{}:", label).cyan().bold(), value));
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }
}

/// Shorten to `width` characters, marking the cut with `…`.
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut short: String = text.chars().take(width.saturating_sub(1)).collect();
    short.push('…');
    short
}

#[cfg(test)]
mod tests {
    use super::*;
    use orgsettings_domain::{NumericBounds, SettingDescriptor};

    fn depth() -> SettingRecord {
        let mut descriptor = SettingDescriptor::new("MaxFolderDepth", ValueType::Number)
            .with_bounds(NumericBounds::new(Some(0.0), Some(10.0)))
            .with_default("3")
            .with_description("<p>Maximum depth of <b>folders</b>.</p>");
        descriptor.overlay_url = Some("https://blog.test/depth".to_string());
        SettingRecord::new(descriptor, "5")
    }

    #[test]
    fn test_table_marks_dirty_rows() {
        let clean = depth();
        let mut dirty = SettingRecord::new(
            SettingDescriptor::new("Signature", ValueType::String),
            "",
        );
        dirty.begin_edit().unwrap();
        dirty.set_staged_value("Regards").unwrap();

        let table = ConsoleFormatter::format_table(&[&clean, &dirty]);

        assert!(table.contains("MaxFolderDepth"));
        assert!(table.contains("Regards"));
        assert!(table.contains("2 settings"));
        assert!(table.contains("with staged changes"));
    }

    #[test]
    fn test_empty_table() {
        assert!(ConsoleFormatter::format_table(&[]).contains("No settings"));
    }

    #[test]
    fn test_detail_shows_all_fields() {
        let detail = ConsoleFormatter::format_detail(&depth());

        assert!(detail.contains("[0, 10]"));
        assert!(detail.contains("Maximum depth of folders."));
        assert!(!detail.contains("<b>"));
        assert!(detail.contains("https://blog.test/depth"));
        assert!(!detail.contains("Staged"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghij", 5), "abcd…");
    }

    #[test]
    fn test_commit_outcome() {
        assert!(ConsoleFormatter::format_commit(&CommitOutcome::Saved { count: 2 }).contains("2 setting(s) saved"));
        assert!(ConsoleFormatter::format_commit(&CommitOutcome::NothingToSave).contains("No changes"));
    }
}
