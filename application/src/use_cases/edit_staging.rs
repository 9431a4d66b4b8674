//! Edit-staging controller
//!
//! The single mutation path for records of the canonical list. Per-record
//! transitions delegate to [`SettingRecord`], which applies the value-type
//! input policy, so interactive and programmatic edits obey the same bounds.
//! [`commit_all`](EditStagingController::commit_all) writes every dirty record
//! in one update and promotes the staged values only after the write
//! succeeded.

use crate::error::SettingsError;
use crate::ports::dataverse::DataverseTransport;
use crate::ports::event_log::{EventLog, LogLevel};
use crate::use_cases::remote_settings::RemoteSettingsGateway;
use orgsettings_domain::{CommitBatch, DomainError, SettingRecord};
use std::sync::Arc;
use tracing::{debug, info};

/// Result of a commit
#[derive(Debug, Clone, PartialEq)]
pub enum CommitOutcome {
    /// No dirty records; no write was attempted.
    NothingToSave,
    /// The update was accepted; `count` records returned to Clean.
    Saved { count: usize },
    /// The update failed; every record is left as it was.
    Failed(SettingsError),
}

impl CommitOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, CommitOutcome::Saved { .. })
    }
}

pub struct EditStagingController<T: DataverseTransport + 'static> {
    gateway: Arc<RemoteSettingsGateway<T>>,
    log: Arc<dyn EventLog>,
}

impl<T: DataverseTransport + 'static> EditStagingController<T> {
    pub fn new(gateway: Arc<RemoteSettingsGateway<T>>, log: Arc<dyn EventLog>) -> Self {
        Self { gateway, log }
    }

    pub fn begin_edit(&self, record: &mut SettingRecord) -> Result<(), DomainError> {
        record.begin_edit()?;
        debug!("Editing {}", record.name());
        Ok(())
    }

    /// Stage `value`, clamped to the record's bounds. Returns the stored value.
    pub fn set_staged_value(
        &self,
        record: &mut SettingRecord,
        value: &str,
    ) -> Result<String, DomainError> {
        let staged = record.set_staged_value(value)?.to_string();
        if staged != value {
            debug!("{}: '{}' stored as '{}'", record.name(), value, staged);
        }
        Ok(staged)
    }

    /// Flip a staged Boolean value.
    pub fn toggle(&self, record: &mut SettingRecord) -> Result<String, DomainError> {
        Ok(record.toggle()?.to_string())
    }

    pub fn revert(&self, record: &mut SettingRecord) -> Result<(), DomainError> {
        record.revert()?;
        debug!("Reverted {}", record.name());
        Ok(())
    }

    /// Write every dirty record in a single update.
    ///
    /// On success each written record becomes Clean with its staged value
    /// promoted to current. On failure nothing changes, so the same staged
    /// values can be retried.
    pub async fn commit_all(
        &self,
        records: &mut [SettingRecord],
        organization_id: Option<&str>,
    ) -> CommitOutcome {
        let batch = CommitBatch::collect(records);
        if batch.is_empty() {
            self.log.log("No changes to save", LogLevel::Info);
            return CommitOutcome::NothingToSave;
        }

        self.log.log(
            &format!("Saving {} organization setting(s)...", batch.len()),
            LogLevel::Info,
        );
        let payload = batch.to_payload();
        debug!("Update payload: {}", payload);

        match self
            .gateway
            .write_values(&payload, organization_id.unwrap_or_default())
            .await
        {
            Ok(()) => {
                let count = batch.apply_success(records);
                info!("Committed {} settings", count);
                CommitOutcome::Saved { count }
            }
            Err(e) => CommitOutcome::Failed(e),
        }
    }
}
