//! Remote settings gateway
//!
//! Reads the organization's settings blob and writes an update payload back.
//! Both operations require an active connection. Every failure is logged
//! here exactly once and returned as a [`SettingsError`]; transport errors
//! never escape as anything else.

use crate::error::SettingsError;
use crate::ports::connection::ConnectionPort;
use crate::ports::dataverse::{DataverseTransport, FetchQuery, Row};
use crate::ports::event_log::{EventLog, LogLevel};
use orgsettings_domain::{LiveSettings, parse_settings_blob};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub const ORGANIZATION_ENTITY: &str = "organization";
pub const ORGANIZATION_ID_COLUMN: &str = "organizationid";
pub const SETTINGS_COLUMN: &str = "orgdborgsettings";

const SETTINGS_FETCH_XML: &str = r#"<fetch>
  <entity name="organization">
    <attribute name="orgdborgsettings" />
  </entity>
</fetch>"#;

/// Gateway to the live organization settings
pub struct RemoteSettingsGateway<T: DataverseTransport + 'static> {
    connection: Arc<dyn ConnectionPort>,
    transport: Arc<T>,
    log: Arc<dyn EventLog>,
}

impl<T: DataverseTransport + 'static> RemoteSettingsGateway<T> {
    pub fn new(
        connection: Arc<dyn ConnectionPort>,
        transport: Arc<T>,
        log: Arc<dyn EventLog>,
    ) -> Self {
        Self {
            connection,
            transport,
            log,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.connection.is_active()
    }

    /// Read the organization id and every `name -> value` pair of the blob.
    pub async fn read_current_values(&self) -> Result<LiveSettings, SettingsError> {
        self.log.log("Fetching organization settings...", LogLevel::Info);

        let result = self.read_inner().await;
        match &result {
            Ok(live) => {
                info!(
                    "Read {} live settings for organization {}",
                    live.len(),
                    live.organization_id
                );
                self.log.log("Organization settings loaded", LogLevel::Success);
            }
            Err(e) => {
                warn!("Reading organization settings failed: {}", e);
                self.log.log(
                    &format!("Failed to load organization settings: {}", e),
                    LogLevel::Error,
                );
            }
        }
        result
    }

    async fn read_inner(&self) -> Result<LiveSettings, SettingsError> {
        if !self.connection.is_active() {
            return Err(SettingsError::NoConnection);
        }

        let query = FetchQuery::new(ORGANIZATION_ENTITY, SETTINGS_FETCH_XML);
        let rows = self.transport.fetch_query(&query).await?;
        let row = rows
            .first()
            .ok_or_else(|| SettingsError::Parse("organization query returned no rows".into()))?;

        let organization_id = row
            .get(ORGANIZATION_ID_COLUMN)
            .and_then(|v| v.as_str())
            .filter(|id| !id.is_empty())
            .ok_or_else(|| {
                SettingsError::Parse(format!("organization row has no {}", ORGANIZATION_ID_COLUMN))
            })?;

        // A never-customized organization has a null blob
        let blob = row
            .get(SETTINGS_COLUMN)
            .and_then(|v| v.as_str())
            .unwrap_or_default();
        debug!("Settings blob is {} bytes", blob.len());

        let values = parse_settings_blob(blob)?;
        Ok(LiveSettings::new(organization_id, values))
    }

    /// Write a serialized `<orgSettings>` payload to the organization.
    ///
    /// The update is a single call; it either applies completely or not at all.
    pub async fn write_values(
        &self,
        serialized_blob: &str,
        organization_id: &str,
    ) -> Result<(), SettingsError> {
        self.log.log("Updating organization settings...", LogLevel::Info);

        if !self.connection.is_active() {
            let err = SettingsError::NoConnection;
            self.log.log(&err.to_string(), LogLevel::Error);
            return Err(err);
        }
        if organization_id.is_empty() {
            let err = SettingsError::WriteFailure(
                "organization id is unknown; reload settings before saving".into(),
            );
            self.log.log(
                &format!("Failed to update organization settings: {}", err.reason()),
                LogLevel::Error,
            );
            return Err(err);
        }

        let mut fields = Row::new();
        fields.insert(SETTINGS_COLUMN.to_string(), serialized_blob.into());

        match self
            .transport
            .update(ORGANIZATION_ENTITY, organization_id, fields)
            .await
        {
            Ok(()) => {
                info!("Organization {} settings updated", organization_id);
                self.log.log("Organization settings updated", LogLevel::Success);
                Ok(())
            }
            Err(e) => {
                let reason = e.reason();
                warn!("Organization update failed: {}", e);
                self.log.log(
                    &format!("Failed to update organization settings: {}", reason),
                    LogLevel::Error,
                );
                Err(SettingsError::WriteFailure(reason))
            }
        }
    }
}
