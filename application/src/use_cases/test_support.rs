//! In-memory fakes of the ports for use case tests.

use crate::ports::catalog_fetcher::{CatalogFetcher, FetchError};
use crate::ports::connection::{ConnectionId, ConnectionPort};
use crate::ports::dataverse::{DataverseTransport, FetchQuery, Row, TransportError};
use crate::ports::event_log::{EventLog, LogLevel};
use crate::ports::notifier::{Notification, Notifier};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

pub const ORG_ID: &str = "5f2a1c9e-0000-4000-8000-00000000c0de";

pub struct FakeConnection {
    identity: Mutex<Option<ConnectionId>>,
}

impl FakeConnection {
    pub fn active(id: &str) -> Self {
        Self {
            identity: Mutex::new(Some(ConnectionId::new(id))),
        }
    }

    pub fn inactive() -> Self {
        Self {
            identity: Mutex::new(None),
        }
    }

    pub fn switch_to(&self, id: Option<&str>) {
        *self.identity.lock().unwrap() = id.map(ConnectionId::new);
    }
}

impl ConnectionPort for FakeConnection {
    fn is_active(&self) -> bool {
        self.identity.lock().unwrap().is_some()
    }

    fn identity(&self) -> Option<ConnectionId> {
        self.identity.lock().unwrap().clone()
    }
}

/// Transport serving one organization row with a settings blob.
pub struct FakeTransport {
    blob: Mutex<Option<String>>,
    update_failure: Mutex<Option<String>>,
    pub updates: Mutex<Vec<(String, String, Row)>>,
    pub queries: AtomicUsize,
}

impl FakeTransport {
    pub fn with_blob(blob: &str) -> Self {
        Self {
            blob: Mutex::new(Some(blob.to_string())),
            update_failure: Mutex::new(None),
            updates: Mutex::new(Vec::new()),
            queries: AtomicUsize::new(0),
        }
    }

    pub fn set_blob(&self, blob: Option<&str>) {
        *self.blob.lock().unwrap() = blob.map(str::to_string);
    }

    pub fn fail_updates_with(&self, message: Option<&str>) {
        *self.update_failure.lock().unwrap() = message.map(str::to_string);
    }

    pub fn update_count(&self) -> usize {
        self.updates.lock().unwrap().len()
    }

    pub fn last_payload(&self) -> Option<String> {
        self.updates
            .lock()
            .unwrap()
            .last()
            .and_then(|(_, _, fields)| fields.get("orgdborgsettings"))
            .and_then(|v| v.as_str().map(str::to_string))
    }
}

#[async_trait]
impl DataverseTransport for FakeTransport {
    async fn fetch_query(&self, query: &FetchQuery) -> Result<Vec<Row>, TransportError> {
        assert_eq!(query.entity, "organization");
        self.queries.fetch_add(1, Ordering::SeqCst);
        let Some(blob) = self.blob.lock().unwrap().clone() else {
            return Err(TransportError::Request("connection reset".into()));
        };
        let mut row = Row::new();
        row.insert("organizationid".into(), ORG_ID.into());
        row.insert("orgdborgsettings".into(), blob.into());
        Ok(vec![row])
    }

    async fn update(&self, entity: &str, id: &str, fields: Row) -> Result<(), TransportError> {
        if let Some(message) = self.update_failure.lock().unwrap().clone() {
            return Err(TransportError::Status {
                status: 403,
                message,
            });
        }
        self.updates
            .lock()
            .unwrap()
            .push((entity.to_string(), id.to_string(), fields));
        Ok(())
    }
}

/// Fetcher serving documents from a map; unknown URLs return 404.
#[derive(Default)]
pub struct FakeFetcher {
    documents: HashMap<String, String>,
}

impl FakeFetcher {
    pub fn with(mut self, url: &str, body: &str) -> Self {
        self.documents.insert(url.to_string(), body.to_string());
        self
    }
}

#[async_trait]
impl CatalogFetcher for FakeFetcher {
    async fn fetch_document(&self, url: &str) -> Result<String, FetchError> {
        self.documents
            .get(url)
            .cloned()
            .ok_or(FetchError::Status(404))
    }
}

#[derive(Default)]
pub struct RecordingLog {
    pub entries: Mutex<Vec<(String, LogLevel)>>,
}

impl RecordingLog {
    pub fn count(&self, level: LogLevel) -> usize {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, l)| *l == level)
            .count()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .any(|(message, _)| message.contains(needle))
    }
}

impl EventLog for RecordingLog {
    fn log(&self, message: &str, level: LogLevel) {
        self.entries
            .lock()
            .unwrap()
            .push((message.to_string(), level));
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub notifications: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn titles(&self) -> Vec<String> {
        self.notifications
            .lock()
            .unwrap()
            .iter()
            .map(|n| n.title.clone())
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.notifications.lock().unwrap().push(notification);
    }
}

pub const BASELINE_URL: &str = "https://catalog.test/Settings.xml";
pub const OVERLAY_URL: &str = "https://catalog.test/Overlay.xml";

pub const BASELINE_XML: &str = r#"<orgSettings><defaultOrgSettings>
  <orgSetting name="MaxFolderDepth" settingType="Number" min="0" max="10" defaultValue="3" isOrganizationAttribute="false" />
  <orgSetting name="EnableBulkDelete" settingType="Boolean" defaultValue="false" isOrganizationAttribute="false" />
  <orgSetting name="Signature" settingType="String" isOrganizationAttribute="false" />
  <orgSetting name="IsAuditEnabled" settingType="Boolean" isOrganizationAttribute="true" />
</defaultOrgSettings></orgSettings>"#;

pub const OVERLAY_XML: &str = r#"<settings>
  <orgSetting name="maxfolderdepth" url="https://blog.test/depth" description="Folder depth write-up" />
  <orgSetting name="NotInBaseline" url="https://blog.test/none" description="ignored" />
</settings>"#;

pub const LIVE_BLOB: &str =
    "<OrgSettings><MaxFolderDepth>5</MaxFolderDepth><enablebulkdelete>true</enablebulkdelete><Orphan>1</Orphan></OrgSettings>";
