//! Catalog loading use case
//!
//! Downloads the baseline and overlay catalogs concurrently, parses them and
//! enriches the baseline descriptors with overlay links. The overlay is
//! optional: when it cannot be fetched or parsed the baseline result stands.

use crate::error::SettingsError;
use crate::ports::catalog_fetcher::CatalogFetcher;
use crate::ports::event_log::{EventLog, LogLevel};
use orgsettings_domain::{
    OverlayEntry, SettingDescriptor, enrich_with_overlay, parse_baseline_catalog,
    parse_overlay_catalog,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Result of loading both catalogs.
#[derive(Debug, Clone, Default)]
pub struct CatalogLoadOutput {
    /// Enriched descriptors; empty when the baseline could not be loaded
    pub descriptors: Vec<SettingDescriptor>,
    pub baseline_error: Option<SettingsError>,
    pub overlay_error: Option<SettingsError>,
    /// Overlay entries that matched a descriptor
    pub overlay_matches: usize,
}

impl CatalogLoadOutput {
    pub fn is_complete(&self) -> bool {
        self.baseline_error.is_none() && self.overlay_error.is_none()
    }
}

/// Loads setting descriptors from the two community catalogs
pub struct CatalogLoader<F: CatalogFetcher + 'static> {
    fetcher: Arc<F>,
    log: Arc<dyn EventLog>,
    baseline_url: String,
    overlay_url: String,
}

impl<F: CatalogFetcher + 'static> CatalogLoader<F> {
    pub fn new(
        fetcher: Arc<F>,
        log: Arc<dyn EventLog>,
        baseline_url: impl Into<String>,
        overlay_url: impl Into<String>,
    ) -> Self {
        Self {
            fetcher,
            log,
            baseline_url: baseline_url.into(),
            overlay_url: overlay_url.into(),
        }
    }

    /// Fetch and parse the baseline catalog.
    pub async fn load_baseline_catalog(&self) -> Result<Vec<SettingDescriptor>, SettingsError> {
        debug!("Fetching baseline catalog from {}", self.baseline_url);
        let document = self.fetcher.fetch_document(&self.baseline_url).await?;
        let descriptors = parse_baseline_catalog(&document)?;
        debug!("Baseline catalog has {} descriptors", descriptors.len());
        Ok(descriptors)
    }

    /// Fetch and parse the overlay catalog.
    pub async fn load_overlay_catalog(&self) -> Result<Vec<OverlayEntry>, SettingsError> {
        debug!("Fetching overlay catalog from {}", self.overlay_url);
        let document = self.fetcher.fetch_document(&self.overlay_url).await?;
        Ok(parse_overlay_catalog(&document)?)
    }

    /// Load both catalogs and merge the overlay into the baseline.
    ///
    /// Never fails: each failure is logged once and recorded in the output.
    /// A baseline document without its root element yields zero descriptors.
    pub async fn load(&self) -> CatalogLoadOutput {
        let (baseline, overlay) =
            futures::join!(self.load_baseline_catalog(), self.load_overlay_catalog());

        let mut output = CatalogLoadOutput::default();

        match baseline {
            Ok(descriptors) => output.descriptors = descriptors,
            Err(e) => {
                warn!("Baseline catalog unavailable: {}", e);
                self.log
                    .log(&format!("Failed to download settings catalog: {}", e), LogLevel::Error);
                output.baseline_error = Some(e);
            }
        }

        match overlay {
            Ok(entries) => {
                output.overlay_matches = enrich_with_overlay(&mut output.descriptors, &entries);
                debug!(
                    "Overlay matched {} of {} entries",
                    output.overlay_matches,
                    entries.len()
                );
            }
            Err(e) => {
                warn!("Overlay catalog unavailable: {}", e);
                self.log
                    .log(&format!("Failed to download overlay catalog: {}", e), LogLevel::Warning);
                output.overlay_error = Some(e);
            }
        }

        if output.baseline_error.is_none() {
            info!("Loaded {} setting descriptors", output.descriptors.len());
            self.log.log("Settings catalog downloaded", LogLevel::Success);
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::*;

    fn loader(fetcher: FakeFetcher, log: Arc<RecordingLog>) -> CatalogLoader<FakeFetcher> {
        CatalogLoader::new(Arc::new(fetcher), log, BASELINE_URL, OVERLAY_URL)
    }

    #[tokio::test]
    async fn test_load_merges_overlay() {
        let log = Arc::new(RecordingLog::default());
        let fetcher = FakeFetcher::default()
            .with(BASELINE_URL, BASELINE_XML)
            .with(OVERLAY_URL, OVERLAY_XML);

        let output = loader(fetcher, log.clone()).load().await;

        assert!(output.is_complete());
        assert_eq!(output.descriptors.len(), 3);
        assert_eq!(output.overlay_matches, 1);
        let depth = &output.descriptors[0];
        assert_eq!(depth.name, "MaxFolderDepth");
        assert_eq!(depth.overlay_url.as_deref(), Some("https://blog.test/depth"));
        assert_eq!(log.count(LogLevel::Success), 1);
    }

    #[tokio::test]
    async fn test_overlay_failure_keeps_baseline() {
        let log = Arc::new(RecordingLog::default());
        let fetcher = FakeFetcher::default().with(BASELINE_URL, BASELINE_XML);

        let output = loader(fetcher, log.clone()).load().await;

        assert_eq!(output.descriptors.len(), 3);
        assert!(output.baseline_error.is_none());
        assert!(matches!(output.overlay_error, Some(SettingsError::Network(_))));
        assert_eq!(log.count(LogLevel::Warning), 1);
        assert_eq!(log.count(LogLevel::Error), 0);
    }

    #[tokio::test]
    async fn test_malformed_overlay_keeps_baseline() {
        let log = Arc::new(RecordingLog::default());
        let fetcher = FakeFetcher::default()
            .with(BASELINE_URL, BASELINE_XML)
            .with(OVERLAY_URL, r#"<settings><orgSetting name="MaxFolderDepth"></settings>"#);

        let output = loader(fetcher, log.clone()).load().await;

        assert_eq!(output.descriptors.len(), 3);
        assert!(output.baseline_error.is_none());
        assert!(matches!(output.overlay_error, Some(SettingsError::Parse(_))));
        assert_eq!(output.overlay_matches, 0);
        assert!(output.descriptors.iter().all(|d| !d.has_overlay()));
        assert_eq!(log.count(LogLevel::Warning), 1);
        assert_eq!(log.count(LogLevel::Error), 0);
    }

    #[tokio::test]
    async fn test_overlay_without_matches_changes_nothing() {
        let log = Arc::new(RecordingLog::default());
        let fetcher = FakeFetcher::default()
            .with(BASELINE_URL, BASELINE_XML)
            .with(
                OVERLAY_URL,
                r#"<settings><orgSetting name="RetiredSetting" url="https://blog.test/retired" /></settings>"#,
            );

        let output = loader(fetcher, log.clone()).load().await;

        assert!(output.is_complete());
        assert_eq!(output.descriptors.len(), 3);
        assert_eq!(output.overlay_matches, 0);
        assert!(output.descriptors.iter().all(|d| !d.has_overlay()));
        assert_eq!(log.count(LogLevel::Warning), 0);
    }

    #[tokio::test]
    async fn test_baseline_network_failure_yields_empty() {
        let log = Arc::new(RecordingLog::default());
        let fetcher = FakeFetcher::default().with(OVERLAY_URL, OVERLAY_XML);

        let output = loader(fetcher, log.clone()).load().await;

        assert!(output.descriptors.is_empty());
        assert!(matches!(output.baseline_error, Some(SettingsError::Network(_))));
        assert_eq!(log.count(LogLevel::Error), 1);
        assert!(log.contains("404"));
    }

    #[tokio::test]
    async fn test_baseline_without_root_yields_empty() {
        let log = Arc::new(RecordingLog::default());
        let fetcher = FakeFetcher::default()
            .with(BASELINE_URL, "<orgSettings></orgSettings>")
            .with(OVERLAY_URL, OVERLAY_XML);

        let output = loader(fetcher, log.clone()).load().await;

        assert!(output.descriptors.is_empty());
        assert!(matches!(
            output.baseline_error,
            Some(SettingsError::Parse(ref reason)) if reason.contains("defaultOrgSettings")
        ));
        assert_eq!(output.overlay_matches, 0);
    }
}
