//! Navigation Component
//!
//! Header navigation bar plus the bottom tab bar on small screens.

use leptos::*;
use leptos_router::*;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="px-4 py-6 lg:px-8">
            <div class="flex items-center justify-between max-w-7xl mx-auto">
                // Logo and brand
                <A href="/" class="flex items-center space-x-2">
                    <span class="text-3xl">"🧠"</span>
                    <span class="text-2xl font-bold text-primary">"NeuroGrow"</span>
                </A>

                <div class="hidden md:flex items-center space-x-2">
                    <NavLink href="/" label="Home" />
                    <NavLink href="/dashboard" label="Dashboard" />
                    <NavLink href="/exercises" label="Exercises" />
                </div>

                <A
                    href="/exercises"
                    class="px-4 py-2 rounded-lg bg-primary text-white hover:bg-primary/90 transition-colors"
                >
                    "Get Started"
                </A>
            </div>
        </nav>

        // Mobile navigation
        <div class="md:hidden fixed bottom-0 left-0 right-0 bg-white border-t border-gray-200 z-40">
            <div class="grid grid-cols-3 h-16">
                <TabLink href="/" icon="🧠" label="Home" />
                <TabLink href="/dashboard" icon="📈" label="Dashboard" />
                <TabLink href="/exercises" icon="🏆" label="Exercises" />
            </div>
        </div>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            exact=true
            class="px-4 py-2 rounded-lg text-gray-700 hover:text-gray-900 hover:bg-gray-100 transition-colors"
            active_class="bg-gray-100 text-gray-900"
        >
            {label}
        </A>
    }
}

#[component]
fn TabLink(
    href: &'static str,
    icon: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            exact=true
            class="flex flex-col items-center justify-center space-y-1 text-gray-600"
            active_class="text-primary"
        >
            <span class="text-xl">{icon}</span>
            <span class="text-xs">{label}</span>
        </A>
    }
}
