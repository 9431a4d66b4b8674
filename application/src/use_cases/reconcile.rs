//! Reconciliation engine
//!
//! Merges the descriptor set with live values into the canonical list held
//! by the [`SettingsStore`].
//!
//! - Replacing the descriptor set builds a fresh list (blank current values
//!   where nothing is live).
//! - A connection identity change or an explicit resync re-merges into the
//!   existing list (sticky current values, edits discarded). Catalogs are
//!   not fetched again.
//!
//! Every request takes a generation number before it reads live values.
//! A request whose generation is no longer the latest when its read resolves
//! is dropped, so the last request always wins.

use crate::error::SettingsError;
use crate::ports::connection::{ConnectionId, ConnectionPort};
use crate::ports::dataverse::DataverseTransport;
use crate::use_cases::remote_settings::RemoteSettingsGateway;
use crate::use_cases::settings_store::SettingsStore;
use orgsettings_domain::{LiveSettings, SettingDescriptor, reconcile, remerge};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

/// Result of one reconciliation request
#[derive(Debug, Clone, PartialEq)]
pub enum ReconcileOutcome {
    /// The canonical list was replaced.
    Applied {
        records: usize,
        /// Why live values could not be read, if they could not
        live_error: Option<SettingsError>,
    },
    /// A newer request started while this one was reading.
    Superseded,
    /// Connection identity did not change; nothing to do.
    Unchanged,
}

impl ReconcileOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, ReconcileOutcome::Applied { .. })
    }

    pub fn live_error(&self) -> Option<&SettingsError> {
        match self {
            ReconcileOutcome::Applied { live_error, .. } => live_error.as_ref(),
            _ => None,
        }
    }
}

pub struct ReconciliationEngine<T: DataverseTransport + 'static> {
    gateway: Arc<RemoteSettingsGateway<T>>,
    connection: Arc<dyn ConnectionPort>,
    store: Arc<SettingsStore>,
    latest: AtomicU64,
    last_identity: Mutex<Option<ConnectionId>>,
}

impl<T: DataverseTransport + 'static> ReconciliationEngine<T> {
    pub fn new(
        gateway: Arc<RemoteSettingsGateway<T>>,
        connection: Arc<dyn ConnectionPort>,
        store: Arc<SettingsStore>,
    ) -> Self {
        Self {
            gateway,
            connection,
            store,
            latest: AtomicU64::new(0),
            last_identity: Mutex::new(None),
        }
    }

    /// Install a new descriptor set and build the canonical list from scratch.
    ///
    /// The descriptor set is installed before live values are read, so a
    /// request that supersedes this one still merges against it.
    pub async fn replace_descriptors(
        &self,
        descriptors: Vec<SettingDescriptor>,
    ) -> ReconcileOutcome {
        let generation = {
            let mut state = self.store.lock().await;
            state.descriptors = descriptors;
            self.next_generation()
        };
        self.remember_identity();

        let (live, live_error) = self.read_live().await;

        let mut state = self.store.lock().await;
        if !self.is_latest(generation) {
            debug!("Descriptor replacement {} superseded", generation);
            return ReconcileOutcome::Superseded;
        }

        state.records = reconcile(&state.descriptors, &live.values);
        state.organization_id = live_organization(&live);
        self.store.publish(&mut state);

        info!("Built canonical list of {} settings", state.records.len());
        ReconcileOutcome::Applied {
            records: state.records.len(),
            live_error,
        }
    }

    /// Re-merge live values if the active connection identity changed.
    pub async fn on_connection_changed(&self) -> ReconcileOutcome {
        if !self.remember_identity() {
            debug!("Connection identity unchanged; keeping canonical list");
            return ReconcileOutcome::Unchanged;
        }
        self.resync().await
    }

    /// Re-read live values and re-merge them into the existing list.
    ///
    /// Blank or missing live values keep the prior current value. Staged
    /// edits are discarded.
    pub async fn resync(&self) -> ReconcileOutcome {
        let generation = self.next_generation();

        let (live, live_error) = self.read_live().await;

        let mut state = self.store.lock().await;
        if !self.is_latest(generation) {
            debug!("Resync {} superseded", generation);
            return ReconcileOutcome::Superseded;
        }

        state.records = remerge(&state.records, &state.descriptors, &live.values);
        if let Some(organization_id) = live_organization(&live) {
            state.organization_id = Some(organization_id);
        } else if matches!(live_error, Some(SettingsError::NoConnection)) {
            state.organization_id = None;
        }
        self.store.publish(&mut state);

        debug!("Re-merged {} settings", state.records.len());
        ReconcileOutcome::Applied {
            records: state.records.len(),
            live_error,
        }
    }

    async fn read_live(&self) -> (LiveSettings, Option<SettingsError>) {
        match self.gateway.read_current_values().await {
            Ok(live) => (live, None),
            Err(e) => (LiveSettings::default(), Some(e)),
        }
    }

    fn next_generation(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_latest(&self, generation: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == generation
    }

    /// Store the current identity; returns whether it differs from the last one.
    fn remember_identity(&self) -> bool {
        let identity = self.connection.identity();
        let mut last = match self.last_identity.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if *last == identity {
            return false;
        }
        *last = identity;
        true
    }
}

fn live_organization(live: &LiveSettings) -> Option<String> {
    (!live.organization_id.is_empty()).then(|| live.organization_id.clone())
}
