//! Canonical list holder
//!
//! Owns the descriptor set and the canonical list behind one async mutex and
//! publishes an immutable [`SettingsSnapshot`] after every change. The display
//! layer subscribes to snapshot replacement instead of reading shared state.

use orgsettings_domain::{SettingDescriptor, SettingRecord, SettingsSnapshot, setting_key};
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard, watch};

/// Mutable state guarded by the store.
#[derive(Debug, Default)]
pub struct StoreState {
    pub descriptors: Vec<SettingDescriptor>,
    pub records: Vec<SettingRecord>,
    pub organization_id: Option<String>,
    revision: u64,
}

impl StoreState {
    /// Find a record by name, ignoring case and surrounding whitespace.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut SettingRecord> {
        let key = setting_key(name);
        self.records.iter_mut().find(|r| r.key() == key)
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }
}

pub struct SettingsStore {
    state: Mutex<StoreState>,
    snapshots: watch::Sender<Arc<SettingsSnapshot>>,
}

impl SettingsStore {
    pub fn new() -> Self {
        let (snapshots, _) = watch::channel(Arc::new(SettingsSnapshot::default()));
        Self {
            state: Mutex::new(StoreState::default()),
            snapshots,
        }
    }

    /// Acquire exclusive access to the canonical list.
    pub async fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().await
    }

    /// Bump the revision and publish a snapshot of `state`.
    pub fn publish(&self, state: &mut StoreState) -> Arc<SettingsSnapshot> {
        state.revision += 1;
        let snapshot = Arc::new(SettingsSnapshot {
            revision: state.revision,
            organization_id: state.organization_id.clone(),
            records: state.records.clone(),
        });
        self.snapshots.send_replace(snapshot.clone());
        snapshot
    }

    /// Latest published snapshot.
    pub fn snapshot(&self) -> Arc<SettingsSnapshot> {
        self.snapshots.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Arc<SettingsSnapshot>> {
        self.snapshots.subscribe()
    }
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new()
    }
}
