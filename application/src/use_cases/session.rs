//! Settings session
//!
//! Wires the catalog loader, the reconciliation engine and the edit-staging
//! controller around one [`SettingsStore`]. This is the surface the display
//! layer talks to: it reports intents by setting name and observes the
//! canonical list through published snapshots.
//!
//! Operator-initiated actions (reload, save) send notifications; passive
//! refreshes (mount enrichment, connection changes) only log.

use crate::config::SessionConfig;
use crate::error::SettingsError;
use crate::ports::catalog_fetcher::CatalogFetcher;
use crate::ports::connection::ConnectionPort;
use crate::ports::dataverse::DataverseTransport;
use crate::ports::event_log::EventLog;
use crate::ports::notifier::{Notification, NotificationKind, Notifier};
use crate::use_cases::edit_staging::{CommitOutcome, EditStagingController};
use crate::use_cases::load_catalog::{CatalogLoadOutput, CatalogLoader};
use crate::use_cases::reconcile::{ReconcileOutcome, ReconciliationEngine};
use crate::use_cases::remote_settings::RemoteSettingsGateway;
use crate::use_cases::settings_store::SettingsStore;
use orgsettings_domain::{CommitBatch, DomainError, SettingRecord, SettingsSnapshot};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::info;

/// What happened when the session was mounted
#[derive(Debug, Clone)]
pub struct MountReport {
    pub catalog: CatalogLoadOutput,
    pub reconcile: ReconcileOutcome,
}

pub struct SettingsSession<T, F>
where
    T: DataverseTransport + 'static,
    F: CatalogFetcher + 'static,
{
    loader: CatalogLoader<F>,
    engine: ReconciliationEngine<T>,
    controller: EditStagingController<T>,
    store: Arc<SettingsStore>,
    connection: Arc<dyn ConnectionPort>,
    notifier: Arc<dyn Notifier>,
    config: SessionConfig,
}

impl<T, F> SettingsSession<T, F>
where
    T: DataverseTransport + 'static,
    F: CatalogFetcher + 'static,
{
    pub fn new(
        connection: Arc<dyn ConnectionPort>,
        transport: Arc<T>,
        fetcher: Arc<F>,
        notifier: Arc<dyn Notifier>,
        log: Arc<dyn EventLog>,
        config: SessionConfig,
    ) -> Self {
        let store = Arc::new(SettingsStore::new());
        let gateway = Arc::new(RemoteSettingsGateway::new(
            connection.clone(),
            transport,
            log.clone(),
        ));
        let loader = CatalogLoader::new(
            fetcher,
            log.clone(),
            config.baseline_catalog_url.clone(),
            config.overlay_catalog_url.clone(),
        );
        let engine = ReconciliationEngine::new(gateway.clone(), connection.clone(), store.clone());
        let controller = EditStagingController::new(gateway, log);

        Self {
            loader,
            engine,
            controller,
            store,
            connection,
            notifier,
            config,
        }
    }

    // ==================== Lifecycle ====================

    /// Load both catalogs and build the canonical list.
    pub async fn mount(&self) -> MountReport {
        let catalog = self.loader.load().await;
        let reconcile = self
            .engine
            .replace_descriptors(catalog.descriptors.clone())
            .await;

        if matches!(reconcile.live_error(), Some(SettingsError::NoConnection)) {
            self.notify_no_connection("Please connect to a Dataverse environment to use this tool.");
        }
        info!(
            "Session mounted with {} descriptors",
            catalog.descriptors.len()
        );
        MountReport { catalog, reconcile }
    }

    /// Report that the host's active connection may have changed.
    pub async fn connection_changed(&self) -> ReconcileOutcome {
        self.engine.on_connection_changed().await
    }

    /// Re-read live values on operator request.
    pub async fn reload(&self) -> ReconcileOutcome {
        if !self.connection.is_active() {
            self.notify_no_connection("Please connect to a Dataverse environment to use this tool.");
        }
        self.engine.resync().await
    }

    // ==================== Edits ====================

    pub async fn begin_edit(&self, name: &str) -> Result<(), DomainError> {
        self.edit(name, |controller, record| controller.begin_edit(record))
            .await
    }

    /// Stage a value on a record that is already being edited.
    pub async fn set_value(&self, name: &str, value: &str) -> Result<String, DomainError> {
        self.edit(name, |controller, record| {
            controller.set_staged_value(record, value)
        })
        .await
    }

    /// Begin an edit if needed, then stage `value`.
    pub async fn stage(&self, name: &str, value: &str) -> Result<String, DomainError> {
        self.edit(name, |controller, record| {
            if record.is_clean() {
                controller.begin_edit(record)?;
            }
            controller.set_staged_value(record, value)
        })
        .await
    }

    pub async fn toggle(&self, name: &str) -> Result<String, DomainError> {
        self.edit(name, |controller, record| controller.toggle(record))
            .await
    }

    pub async fn revert(&self, name: &str) -> Result<(), DomainError> {
        self.edit(name, |controller, record| controller.revert(record))
            .await
    }

    async fn edit<R>(
        &self,
        name: &str,
        apply: impl FnOnce(&EditStagingController<T>, &mut SettingRecord) -> Result<R, DomainError>,
    ) -> Result<R, DomainError> {
        let mut state = self.store.lock().await;
        let record = state
            .find_mut(name)
            .ok_or_else(|| DomainError::UnknownSetting(name.trim().to_string()))?;
        let result = apply(&self.controller, record)?;
        self.store.publish(&mut state);
        Ok(result)
    }

    // ==================== Commit ====================

    /// Serialized payload a save would write right now.
    pub async fn preview_payload(&self) -> Option<String> {
        let state = self.store.lock().await;
        let batch = CommitBatch::collect(&state.records);
        (!batch.is_empty()).then(|| batch.to_payload())
    }

    /// Commit every dirty record, then re-sync live values on success.
    pub async fn save(&self) -> CommitOutcome {
        let outcome = {
            let mut state = self.store.lock().await;
            let organization_id = state.organization_id.clone();
            let outcome = self
                .controller
                .commit_all(&mut state.records, organization_id.as_deref())
                .await;
            if outcome.is_saved() {
                self.store.publish(&mut state);
            }
            outcome
        };

        match &outcome {
            CommitOutcome::NothingToSave => {}
            CommitOutcome::Saved { .. } => {
                self.notifier.notify(Notification::new(
                    NotificationKind::Success,
                    "Organization Settings Saved",
                    "The organization settings have been successfully saved.",
                ));
                self.engine.resync().await;
            }
            CommitOutcome::Failed(SettingsError::NoConnection) => {
                self.notify_no_connection("Cannot save settings without an active connection.");
            }
            CommitOutcome::Failed(e) => {
                self.notifier.notify(
                    Notification::new(NotificationKind::Error, "Save failed", e.reason())
                        .with_duration_ms(self.config.notification_duration_ms),
                );
            }
        }
        outcome
    }

    // ==================== Observation ====================

    pub fn snapshot(&self) -> Arc<SettingsSnapshot> {
        self.store.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<Arc<SettingsSnapshot>> {
        self.store.subscribe()
    }

    pub fn is_connected(&self) -> bool {
        self.connection.is_active()
    }

    fn notify_no_connection(&self, body: &str) {
        self.notifier.notify(
            Notification::new(NotificationKind::Error, "No active connection", body)
                .with_duration_ms(self.config.notification_duration_ms),
        );
    }
}
