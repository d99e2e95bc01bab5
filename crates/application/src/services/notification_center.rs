//! Transient status line
//!
//! Holds at most one visible notification. Every `notify` replaces what is
//! showing and schedules its own dismissal; a generation counter makes sure
//! only the most recent notification's timer clears the line.

use std::{
    fmt,
    sync::{Arc, Weak},
    time::Duration,
};

use domain::{Notification, Severity};
use parking_lot::Mutex;
use tokio::sync::watch;
use tracing::{debug, trace};

/// Default time a notification stays visible
pub const DEFAULT_DISMISS_AFTER: Duration = Duration::from_millis(3000);

struct Inner {
    display: watch::Sender<Option<Notification>>,
    generation: Mutex<u64>,
    dismiss_after: Duration,
}

impl Inner {
    fn expire(&self, generation: u64) {
        let current = self.generation.lock();
        if *current == generation {
            self.display.send_replace(None);
            trace!(generation, "Notification dismissed");
        } else {
            trace!(
                generation,
                current = *current,
                "Superseded notification timer ignored"
            );
        }
    }
}

/// Auto-expiring status surface shared by all mailbox components
#[derive(Clone)]
pub struct NotificationCenter {
    inner: Arc<Inner>,
}

impl fmt::Debug for NotificationCenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationCenter")
            .field("dismiss_after", &self.inner.dismiss_after)
            .field("current", &*self.inner.display.borrow())
            .finish_non_exhaustive()
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(DEFAULT_DISMISS_AFTER)
    }
}

impl NotificationCenter {
    /// Create a notification center with the given display duration
    pub fn new(dismiss_after: Duration) -> Self {
        let (display, _) = watch::channel(None);
        Self {
            inner: Arc::new(Inner {
                display,
                generation: Mutex::new(0),
                dismiss_after,
            }),
        }
    }

    /// Show `notification` now and schedule its dismissal
    ///
    /// Must be called from within a Tokio runtime. Returns the generation
    /// assigned to this notification.
    pub fn notify(&self, notification: Notification) -> u64 {
        let generation = {
            let mut current = self.inner.generation.lock();
            *current = current.wrapping_add(1);
            debug!(
                text = %notification.text,
                severity = ?notification.severity,
                generation = *current,
                "Showing notification"
            );
            self.inner.display.send_replace(Some(notification));
            *current
        };

        let inner: Weak<Inner> = Arc::downgrade(&self.inner);
        let dismiss_after = self.inner.dismiss_after;
        tokio::spawn(async move {
            tokio::time::sleep(dismiss_after).await;
            if let Some(inner) = inner.upgrade() {
                inner.expire(generation);
            }
        });

        generation
    }

    /// Show an informational message
    pub fn info(&self, text: impl Into<String>) -> u64 {
        self.notify(Notification::info(text))
    }

    /// Show an error message
    pub fn error(&self, text: impl Into<String>) -> u64 {
        self.notify(Notification::error(text))
    }

    /// Clear the status line immediately
    ///
    /// Pending timers become no-ops.
    pub fn dismiss(&self) {
        let mut current = self.inner.generation.lock();
        *current = current.wrapping_add(1);
        self.inner.display.send_replace(None);
    }

    /// Notification currently visible
    pub fn current(&self) -> Option<Notification> {
        self.inner.display.borrow().clone()
    }

    /// Severity of the visible notification
    pub fn severity(&self) -> Option<Severity> {
        self.inner.display.borrow().as_ref().map(|n| n.severity)
    }

    /// Watch the status line for changes
    pub fn subscribe(&self) -> watch::Receiver<Option<Notification>> {
        self.inner.display.subscribe()
    }

    /// Configured display duration
    pub fn dismiss_after(&self) -> Duration {
        self.inner.dismiss_after
    }
}
