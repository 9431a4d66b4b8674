//! Notification port
//!
//! Fire-and-forget operator notifications (toasts in a GUI host, banners on
//! the console). Core logic never waits for or depends on delivery.

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

/// An operator-facing notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub body: String,
    pub kind: NotificationKind,
    /// How long the host should keep it visible; `None` means host default
    pub duration_ms: Option<u64>,
}

impl Notification {
    pub fn new(kind: NotificationKind, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            kind,
            duration_ms: None,
        }
    }

    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }
}

/// Sink for operator notifications
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// No-op notifier for tests and headless use
pub struct NoNotifier;

impl Notifier for NoNotifier {
    fn notify(&self, _notification: Notification) {}
}
