//! Console notification banners

use colored::Colorize;
use orgsettings_application::ports::notifier::{Notification, NotificationKind, Notifier};

/// Prints notifications to stderr as one-line banners.
///
/// The duration hint has no meaning on a console and is ignored.
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn render(notification: &Notification) -> String {
        let title = match notification.kind {
            NotificationKind::Info => notification.title.cyan().bold(),
            NotificationKind::Success => notification.title.green().bold(),
            NotificationKind::Warning => notification.title.yellow().bold(),
            NotificationKind::Error => notification.title.red().bold(),
        };
        if notification.body.is_empty() {
            format!("[{}]", title)
        } else {
            format!("[{}] {}", title, notification.body)
        }
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        eprintln!("{}", Self::render(&notification));
    }
}
