//! Landing Page
//!
//! Hero, feature cards and community stats.

use leptos::*;
use leptos_router::*;
use neurogrow::notify::Notification;

use crate::state::global::use_global_state;

/// Landing page component
#[component]
pub fn Landing() -> impl IntoView {
    let state = use_global_state();
    let navigate = use_navigate();

    let start_training = move |_| {
        navigate("/exercises", Default::default());
        state.show(Notification::welcome());
    };

    view! {
        // Hero
        <section class="px-4 py-12 lg:py-20 lg:px-8">
            <div class="max-w-7xl mx-auto text-center">
                <h1 class="text-4xl md:text-6xl lg:text-7xl font-bold text-gray-900 mb-6 leading-tight">
                    "Personalized " <span class="text-primary">"Cognitive"</span><br />
                    "Workouts Powered by " <span class="text-yellow-400">"AI"</span>
                </h1>
                <p class="text-xl md:text-2xl text-gray-600 mb-8 max-w-4xl mx-auto">
                    "Sharpen focus, enhance memory, and boost problem-solving with adaptive brain-training \
                     exercises tailored to your unique cognitive profile."
                </p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center items-center">
                    <button
                        on:click=start_training
                        class="bg-primary hover:bg-primary/90 text-white px-8 py-4 text-lg rounded-lg font-medium"
                    >
                        "⚡ Start Training"
                    </button>
                    <button class="px-8 py-4 text-lg rounded-lg border border-gray-300 hover:bg-gray-100">
                        "Watch Demo"
                    </button>
                </div>
            </div>
        </section>

        // Features
        <section class="px-4 py-16 lg:px-8 bg-white">
            <div class="max-w-7xl mx-auto">
                <h2 class="text-3xl md:text-4xl font-bold text-center mb-12">"Why Choose NeuroGrow?"</h2>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    <FeatureCard
                        icon="🎯"
                        title="Dynamic Difficulty"
                        body="AI algorithms adjust exercise difficulty in real-time, keeping you in the optimal learning zone."
                    />
                    <FeatureCard
                        icon="📈"
                        title="Cognitive Insights"
                        body="Track your progress across memory, attention, and processing speed with detailed analytics."
                    />
                    <FeatureCard
                        icon="👥"
                        title="Social Challenges"
                        body="Compete with friends in cognitive duels and climb the leaderboards."
                    />
                </div>
            </div>
        </section>

        // Stats strip
        <section class="px-4 py-16 lg:px-8 bg-gradient-to-r from-primary/10 to-yellow-100">
            <div class="max-w-7xl mx-auto text-center">
                <h2 class="text-3xl md:text-4xl font-bold mb-12">"Join Thousands Enhancing Their Minds"</h2>
                <div class="grid grid-cols-2 md:grid-cols-4 gap-8">
                    <CommunityStat value="50K+" label="Active Users" accent="text-primary" />
                    <CommunityStat value="15M+" label="Exercises Completed" accent="text-yellow-500" />
                    <CommunityStat value="92%" label="Improvement Rate" accent="text-green-500" />
                    <CommunityStat value="4.8★" label="User Rating" accent="text-purple-500" />
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    body: &'static str,
) -> impl IntoView {
    view! {
        <div class="rounded-lg border-2 border-gray-200 hover:border-primary/50 transition-colors duration-300 p-6">
            <div class="text-5xl mb-4">{icon}</div>
            <h3 class="text-xl font-semibold mb-2">{title}</h3>
            <p class="text-base text-gray-600">{body}</p>
        </div>
    }
}

#[component]
fn CommunityStat(
    value: &'static str,
    label: &'static str,
    accent: &'static str,
) -> impl IntoView {
    view! {
        <div class="space-y-2">
            <div class=format!("text-4xl md:text-5xl font-bold {}", accent)>{value}</div>
            <div class="text-gray-600">{label}</div>
        </div>
    }
}
