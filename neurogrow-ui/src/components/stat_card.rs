//! Stat Card Component
//!
//! A headline number with a caption.

use leptos::*;

/// Stat card component
#[component]
pub fn StatCard(
    /// Caption above the value
    #[prop(into)]
    title: String,
    /// Formatted value
    #[prop(into)]
    value: String,
    /// Emoji shown next to the caption
    #[prop(optional)]
    icon: Option<&'static str>,
    /// Text colour class for the value
    #[prop(default = "text-primary")]
    accent: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg p-4 border border-gray-200 shadow-sm">
            <div class="flex items-center justify-between">
                <span class="text-sm font-medium text-gray-700">{title}</span>
                {icon.map(|i| view! { <span class="text-gray-400">{i}</span> })}
            </div>
            <div class=format!("text-2xl font-bold mt-2 {}", accent)>{value}</div>
        </div>
    }
}

/// Compact centred stat used in the game header
#[component]
pub fn GameStat(
    #[prop(into)]
    label: String,
    #[prop(into)]
    value: Signal<String>,
    accent: &'static str,
) -> impl IntoView {
    view! {
        <div class="text-center">
            <div class=format!("text-2xl font-bold {}", accent)>{move || value.get()}</div>
            <div class="text-sm text-gray-600">{label}</div>
        </div>
    }
}
