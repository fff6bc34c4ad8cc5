//! User-notification seam.

use std::sync::{Arc, RwLock};

/// Kind of user-visible notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Fire-and-forget presentation hook for user-visible notices.
///
/// The screen never consumes a return value; whatever toast or banner
/// system hosts the screen decides how to render the message.
pub trait Notifier: Send + Sync {
    fn notify(&self, kind: NoticeKind, message: &str);
}

/// A recorded notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

/// Notifier that records notices for test assertions.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    notices: Arc<RwLock<Vec<Notice>>>,
}

impl RecordingNotifier {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all recorded notices in order.
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.read().unwrap().clone()
    }

    /// Returns the most recent notice, if any.
    pub fn last(&self) -> Option<Notice> {
        self.notices.read().unwrap().last().cloned()
    }

    /// Discards all recorded notices.
    pub fn clear(&self) {
        self.notices.write().unwrap().clear();
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, kind: NoticeKind, message: &str) {
        self.notices.write().unwrap().push(Notice {
            kind,
            message: message.to_string(),
        });
    }
}
