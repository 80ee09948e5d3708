//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;
use neurogrow::notify::{Notification, Notifier};

/// How long a normal toast stays up
pub const NORMAL_TOAST_MS: u32 = 3000;

/// How long a destructive toast stays up
pub const DESTRUCTIVE_TOAST_MS: u32 = 5000;

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Toasts currently on screen, oldest first
    pub toasts: RwSignal<Vec<ToastEntry>>,
    next_toast_id: StoredValue<u64>,
}

/// A notification being shown as a toast
#[derive(Clone, Debug, PartialEq)]
pub struct ToastEntry {
    pub id: u64,
    pub notification: Notification,
}

impl ToastEntry {
    /// Time on screen before auto-dismiss
    pub fn lifetime_ms(&self) -> u32 {
        if self.notification.is_destructive() {
            DESTRUCTIVE_TOAST_MS
        } else {
            NORMAL_TOAST_MS
        }
    }
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        toasts: create_rw_signal(Vec::new()),
        next_toast_id: store_value(0),
    };

    provide_context(state);
}

/// Global state from context
pub fn use_global_state() -> GlobalState {
    expect_context::<GlobalState>()
}

impl GlobalState {
    /// Show a notification (auto-clears after its lifetime)
    pub fn show(&self, notification: Notification) {
        let id = self
            .next_toast_id
            .try_update_value(|next| {
                *next += 1;
                *next
            })
            .unwrap_or_default();
        let entry = ToastEntry { id, notification };
        let lifetime = entry.lifetime_ms();

        self.toasts.update(|toasts| toasts.push(entry));

        let toasts = self.toasts;
        gloo_timers::callback::Timeout::new(lifetime, move || {
            toasts.try_update(|toasts| toasts.retain(|t| t.id != id));
        })
        .forget();
    }

    /// Remove a toast before its timeout
    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }
}

impl Notifier for GlobalState {
    fn notify(&mut self, notification: Notification) {
        self.show(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_lifetimes() {
        let normal = ToastEntry {
            id: 1,
            notification: Notification::welcome(),
        };
        assert_eq!(normal.lifetime_ms(), 3000);

        let destructive = ToastEntry {
            id: 2,
            notification: Notification::timed_out(),
        };
        assert_eq!(destructive.lifetime_ms(), 5000);
    }
}
