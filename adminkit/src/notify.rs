use chrono::{DateTime, Duration, Utc};
use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub body: String,
    pub raised_at: DateTime<Utc>,
}

/// Transient confirmation queue. Toasts expire after a fixed display window
/// and are dropped lazily on the next read.
pub struct Notifier {
    queue: Mutex<VecDeque<Toast>>,
    ttl: Duration,
}

impl Notifier {
    pub fn new() -> Self {
        Notifier::with_ttl(Duration::seconds(5))
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Notifier {
            queue: Mutex::new(VecDeque::new()),
            ttl,
        }
    }

    pub fn push(&self, title: impl Into<String>, body: impl Into<String>) {
        let toast = Toast {
            title: title.into(),
            body: body.into(),
            raised_at: Utc::now(),
        };
        self.queue
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(toast);
    }

    /// Toasts still inside their display window, oldest first.
    pub fn active(&self) -> Vec<Toast> {
        let cutoff = Utc::now() - self.ttl;
        let mut queue = self.queue.lock().unwrap_or_else(PoisonError::into_inner);
        while matches!(queue.front(), Some(toast) if toast.raised_at < cutoff) {
            queue.pop_front();
        }
        queue.iter().cloned().collect()
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Notifier::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_should_keep_toasts_in_arrival_order() {
        let notifier = Notifier::new();
        notifier.push("Saved", "first");
        notifier.push("Deleted", "second");
        let active = notifier.active();
        assert_eq!(active.len(), 2);
        assert_eq!(active[0].body, "first");
        assert_eq!(active[1].body, "second");
    }

    #[test]
    fn it_should_expire_toasts_after_the_display_window() {
        let notifier = Notifier::with_ttl(Duration::microseconds(0));
        notifier.push("Saved", "gone already");
        std::thread::sleep(std::time::Duration::from_millis(2));
        assert!(notifier.active().is_empty());
    }
}
