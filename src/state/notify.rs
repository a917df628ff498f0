//! Notification toast queue.
//!
//! DESIGN
//! ======
//! Each notification is an explicit value with a monotonic id; the
//! rendering component arms exactly one timer per toast and disarms it
//! on unmount, so an early manual dismissal never leaves a stale
//! auto-dismiss behind. The sink is an optional context: code raising
//! feedback tolerates its absence and simply drops the message.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use leptos::prelude::*;

/// How long a toast stays up before auto-dismissal, in milliseconds.
pub const DISMISS_AFTER_MS: u32 = 5_000;

/// Visual flavor of a toast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotifyKind {
    #[default]
    Success,
    Error,
}

impl NotifyKind {
    /// Title line shown above the message.
    pub fn title(self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Error => "Error",
        }
    }
}

/// One visible notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub message: String,
    pub kind: NotifyKind,
}

/// Queue of visible toasts, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotifyState {
    next_id: u64,
    pub toasts: Vec<Toast>,
}

impl NotifyState {
    /// Append a toast and return its id.
    pub fn push(&mut self, kind: NotifyKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            title: kind.title().to_owned(),
            message: message.into(),
            kind,
        });
        id
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.push(NotifyKind::Success, message)
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.push(NotifyKind::Error, message)
    }

    /// Remove a toast by id. Returns whether it was still present; a
    /// timer firing after a manual dismissal lands here as a no-op.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }
}

/// Raise a success toast on the ambient sink, if one is provided.
pub fn toast_success(sink: Option<RwSignal<NotifyState>>, message: &str) {
    if let Some(sink) = sink {
        sink.update(|state| {
            state.success(message);
        });
    }
}

/// Raise an error toast on the ambient sink, if one is provided.
pub fn toast_error(sink: Option<RwSignal<NotifyState>>, message: &str) {
    if let Some(sink) = sink {
        sink.update(|state| {
            state.error(message);
        });
    }
}
