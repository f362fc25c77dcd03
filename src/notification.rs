use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::error::Error;

/// How long a toast stays up unless it is dismissed first.
pub const DEFAULT_AUTO_CLOSE: Duration = Duration::from_millis(5000);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Info,
    Error,
}

/// The outcome of a form action, as shown to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub level: Level,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Notification {
        Notification {
            message: message.into(),
            level: Level::Info,
        }
    }

    pub fn error(message: impl Into<String>) -> Notification {
        Notification {
            message: message.into(),
            level: Level::Error,
        }
    }

    pub fn from_error(err: &Error) -> Notification {
        Notification::error(err.to_string())
    }

    pub fn is_error(&self) -> bool {
        self.level == Level::Error
    }
}

#[derive(Clone, Debug)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
    created: Instant,
    deadline: Instant,
}

/// Holds the toasts that are currently on screen.
///
/// All time dependent operations take the current instant as a parameter, the front end
/// passes `Instant::now()`.
#[derive(Debug)]
pub struct Toaster {
    toasts: VecDeque<Toast>,
    auto_close: Duration,
    newest_on_top: bool,
    paused_at: Option<Instant>,
    next_id: u64,
}

impl Default for Toaster {
    fn default() -> Self {
        Toaster::new(DEFAULT_AUTO_CLOSE, false)
    }
}

impl Toaster {
    pub fn new(auto_close: Duration, newest_on_top: bool) -> Toaster {
        Toaster {
            toasts: VecDeque::new(),
            auto_close,
            newest_on_top,
            paused_at: None,
            next_id: 0,
        }
    }

    /// Shows a new toast, returns its id.
    pub fn push(&mut self, notification: Notification, now: Instant) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        log::debug!("toast {} ({:?}): {}", id, notification.level, notification.message);

        self.toasts.push_back(Toast {
            id,
            notification,
            created: now,
            deadline: now + self.auto_close,
        });
        id
    }

    /// Closes a toast before its time is up. Returns false if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        before != self.toasts.len()
    }

    /// Closes the toast that has been up the longest.
    pub fn dismiss_oldest(&mut self) -> bool {
        self.toasts.pop_front().is_some()
    }

    pub fn dismiss_all(&mut self) {
        self.toasts.clear();
    }

    /// Removes every toast whose deadline has passed, returns how many went away.
    /// Nothing expires while the toaster is paused.
    pub fn expire(&mut self, now: Instant) -> usize {
        if self.paused_at.is_some() {
            return 0;
        }
        let before = self.toasts.len();
        self.toasts.retain(|t| t.deadline > now);
        before - self.toasts.len()
    }

    pub fn pause(&mut self, now: Instant) {
        if self.paused_at.is_none() {
            self.paused_at = Some(now);
        }
    }

    /// Resumes the countdown, pushing every deadline forward by the time the toast spent
    /// paused. Toasts pushed during the pause start counting from now.
    pub fn resume(&mut self, now: Instant) {
        if let Some(paused_at) = self.paused_at.take() {
            for toast in self.toasts.iter_mut() {
                let paused_for = now.saturating_duration_since(paused_at.max(toast.created));
                toast.created += paused_for;
                toast.deadline += paused_for;
            }
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused_at.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    /// The toasts in display order.
    pub fn visible(&self) -> Vec<&Toast> {
        if self.newest_on_top {
            self.toasts.iter().rev().collect()
        } else {
            self.toasts.iter().collect()
        }
    }

    /// Fraction of the toast's lifetime that is left, 1.0 when it was just pushed.
    pub fn progress(&self, id: u64, now: Instant) -> Option<f32> {
        let toast = self.toasts.iter().find(|t| t.id == id)?;
        let now = self.paused_at.unwrap_or(now);

        let total = toast.deadline.saturating_duration_since(toast.created);
        if total.is_zero() {
            return Some(0.0);
        }
        let left = toast.deadline.saturating_duration_since(now);

        Some((left.as_secs_f32() / total.as_secs_f32()).clamp(0.0, 1.0))
    }
}

#[cfg(test)]
#[path = "tests/notification.rs"]
mod notification_tests;
