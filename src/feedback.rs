//! Transient Feedback
//!
//! Single-slot status channel. Each message restarts a 2.5 s auto-clear; a
//! newer message replaces the pending timer so a stale clear can never wipe
//! it. No queueing.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::models::Feedback;

/// Auto-clear delay for status messages
pub const FEEDBACK_TIMEOUT_MS: u32 = 2_500;

/// Copyable handle to the feedback slot. `Timeout` is not threadsafe, so the
/// pending timer lives in unsync (arena-local) storage.
#[derive(Clone, Copy)]
pub struct FeedbackChannel {
    message: RwSignal<Option<Feedback>>,
    timer: StoredValue<Option<Timeout>, LocalStorage>,
}

impl FeedbackChannel {
    pub fn new() -> Self {
        Self {
            message: RwSignal::new(None),
            timer: StoredValue::new_local(None),
        }
    }

    /// Reactive read side for the banner
    pub fn message(&self) -> RwSignal<Option<Feedback>> {
        self.message
    }

    /// Show a message, replacing any pending one and restarting the clear
    /// timer. Dropping the previous `Timeout` cancels it.
    pub fn show(&self, feedback: Feedback) {
        self.message.set(Some(feedback));
        let message = self.message;
        let next = Timeout::new(FEEDBACK_TIMEOUT_MS, move || message.set(None));
        self.timer.update_value(|slot| {
            *slot = Some(next);
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(Feedback::success(message));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(Feedback::error(message));
    }
}

impl Default for FeedbackChannel {
    fn default() -> Self {
        Self::new()
    }
}
