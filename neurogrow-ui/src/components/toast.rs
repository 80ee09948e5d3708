//! Toast Notification Component
//!
//! Shows game and shell notifications.

use leptos::*;
use neurogrow::notify::Severity;

use crate::state::global::{use_global_state, ToastEntry};

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_global_state();

    view! {
        <div class="fixed bottom-20 md:bottom-4 right-4 z-50 space-y-2">
            <For
                each=move || state.toasts.get()
                key=|entry| entry.id
                children=move |entry| view! { <ToastMessage entry=entry /> }
            />
        </div>
    }
}

#[component]
fn ToastMessage(entry: ToastEntry) -> impl IntoView {
    let state = use_global_state();
    let (icon, bg_class) = match entry.notification.severity {
        Severity::Normal => ("✓", "bg-gray-900"),
        Severity::Destructive => ("✕", "bg-red-600"),
    };
    let id = entry.id;

    view! {
        <div
            class=format!(
                "flex items-start space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg \
                 max-w-sm cursor-pointer transform transition-all duration-300 ease-out animate-slide-in",
                bg_class
            )
            on:click=move |_| state.dismiss(id)
        >
            <span class="text-lg">{icon}</span>
            <div>
                <div class="text-sm font-semibold">{entry.notification.title}</div>
                <div class="text-sm opacity-90">{entry.notification.description}</div>
            </div>
        </div>
    }
}
