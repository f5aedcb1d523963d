//! Re-armable "added to cart" notification
//!
//! The notification turns on immediately when armed and turns itself off
//! after a fixed delay measured from the most recent arm. At most one
//! deactivation is ever pending:
//! - re-arming aborts the pending task before scheduling a new one
//! - every task carries the generation it was armed with and only clears
//!   the flag if that generation is still current
//! - dropping the timer aborts the pending task, so a discarded visit is
//!   never written to
//!
//! The deadline is fixed when [`NotificationTimer::arm`] is called and
//! [`NotificationTimer::is_active`] reads it against the clock. Without a
//! Tokio runtime no task is spawned; the flag still expires on time but
//! subscribers are not told.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Default auto-dismiss delay
pub const DEFAULT_NOTIFICATION_DELAY: Duration = Duration::from_millis(2000);

/// Single-shot, re-armable notification flag
#[derive(Debug)]
pub struct NotificationTimer {
    delay: Duration,
    state: Arc<watch::Sender<bool>>,
    generation: Arc<AtomicU64>,
    deadline: Option<Instant>,
    pending: Option<JoinHandle<()>>,
}

impl NotificationTimer {
    /// Create an inactive notification with the given auto-dismiss delay
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        let (state, _) = watch::channel(false);
        Self {
            delay,
            state: Arc::new(state),
            generation: Arc::new(AtomicU64::new(0)),
            deadline: None,
            pending: None,
        }
    }

    /// Auto-dismiss delay
    #[inline]
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Whether the notification is currently shown
    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        *self.state.borrow() && self.deadline.is_some_and(|deadline| Instant::now() < deadline)
    }

    /// When the current notification expires, if one is showing
    #[inline]
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline.filter(|_| self.is_active())
    }

    /// Whether a deactivation is scheduled
    #[inline]
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Observe activation changes
    #[inline]
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.state.subscribe()
    }

    /// Show the notification and (re)start the dismiss countdown
    ///
    /// The countdown starts now, not when the dismissal task first runs.
    pub fn arm(&mut self) {
        let deadline = Instant::now() + self.delay;
        let armed = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        if let Some(previous) = self.pending.take() {
            previous.abort();
        }
        self.deadline = Some(deadline);
        self.state.send_replace(true);

        let Ok(runtime) = Handle::try_current() else {
            tracing::debug!(generation = armed, "no runtime, notification expires by clock only");
            return;
        };
        let state = Arc::clone(&self.state);
        let generation = Arc::clone(&self.generation);
        self.pending = Some(runtime.spawn(async move {
            tokio::time::sleep_until(deadline).await;
            if generation.load(Ordering::SeqCst) == armed {
                state.send_replace(false);
                tracing::debug!(generation = armed, "notification dismissed");
            }
        }));
        tracing::debug!(generation = armed, delay = ?self.delay, "notification armed");
    }

    /// Hide the notification now and drop any pending dismissal
    pub fn dismiss(&mut self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        if let Some(previous) = self.pending.take() {
            previous.abort();
        }
        self.deadline = None;
        self.state.send_replace(false);
    }
}

impl Default for NotificationTimer {
    fn default() -> Self {
        Self::new(DEFAULT_NOTIFICATION_DELAY)
    }
}

impl Drop for NotificationTimer {
    fn drop(&mut self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        if let Some(task) = self.pending.take() {
            task.abort();
        }
    }
}
