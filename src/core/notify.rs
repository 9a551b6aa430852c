//! Fire-and-forget notifications on login/logout.

use crate::ui::messages::{notice, warning};
use std::cell::RefCell;

pub const APP_TITLE: &str = "Worktime Logger";

pub trait Notifier {
    /// Delivery failures are swallowed; nothing waits for an acknowledgment.
    fn notify(&self, title: &str, body: &str);
}

/// Prints the notification as a terminal line.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, title: &str, body: &str) {
        notice(title, body);
    }
}

pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn notify(&self, _title: &str, _body: &str) {}
}

/// Desktop bubble through the session's notification daemon.
#[cfg(feature = "desktop-notify")]
pub struct DesktopNotifier;

#[cfg(feature = "desktop-notify")]
impl Notifier for DesktopNotifier {
    fn notify(&self, title: &str, body: &str) {
        let _ = notify_rust::Notification::new()
            .summary(title)
            .body(body)
            .appname("worktimelogger")
            .show();
    }
}

/// Keeps every notification, for assertions.
#[doc(hidden)]
#[derive(Default)]
pub struct RecordingNotifier {
    sent: RefCell<Vec<(String, String)>>,
}

impl RecordingNotifier {
    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, title: &str, body: &str) {
        self.sent
            .borrow_mut()
            .push((title.to_string(), body.to_string()));
    }
}

/// Backend named in the settings file.
pub fn from_name(name: &str) -> Box<dyn Notifier> {
    match name {
        "none" => Box::new(SilentNotifier),
        #[cfg(feature = "desktop-notify")]
        "desktop" => Box::new(DesktopNotifier),
        #[cfg(not(feature = "desktop-notify"))]
        "desktop" => {
            warning("Built without the `desktop-notify` feature; printing notifications instead.");
            Box::new(ConsoleNotifier)
        }
        _ => Box::new(ConsoleNotifier),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_notifier_keeps_order() {
        let n = RecordingNotifier::default();
        n.notify(APP_TITLE, "one");
        n.notify(APP_TITLE, "two");
        let sent = n.sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0], (APP_TITLE.to_string(), "one".to_string()));
        assert_eq!(sent[1].1, "two");
    }
}
