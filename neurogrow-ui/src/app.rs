//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::{Nav, Toast};
use crate::pages::{Dashboard, Exercises, Landing};
use crate::state::global::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_global_state();

    view! {
        <Router>
            <div class="min-h-screen bg-gradient-to-br from-slate-50 to-blue-50 flex flex-col">
                <Nav />

                <main class="flex-1 pb-24 md:pb-8">
                    <Routes>
                        <Route path="/" view=Landing />
                        <Route path="/dashboard" view=Dashboard />
                        <Route path="/exercises" view=Exercises />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                <Toast />
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🧠"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-600 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-primary text-white hover:bg-primary/90 rounded-lg font-medium transition-colors"
            >
                "Back to Home"
            </A>
        </div>
    }
}
