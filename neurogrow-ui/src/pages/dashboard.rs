//! Dashboard Page
//!
//! Cognitive profile overview: today's stats, weekly trend, skill radar,
//! skill breakdown and insights. Everything comes from fixed mock data.

use leptos::*;
use neurogrow::dashboard::{DashboardSnapshot, SkillScore, SkillTier, SKILL_TARGET};

use crate::components::{RadarChart, StatCard, WeeklyChart};

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let snapshot = DashboardSnapshot::mock();
    let today = snapshot.today;

    view! {
        <div class="px-4 py-8 lg:px-8 max-w-7xl mx-auto space-y-8">
            // Page header
            <div class="text-center">
                <h1 class="text-3xl md:text-4xl font-bold text-gray-900">"Cognitive Profile Dashboard"</h1>
                <p class="text-gray-600 mt-2">"Track your progress and discover insights about your cognitive abilities"</p>
            </div>

            // Today's stats
            <section class="grid grid-cols-2 md:grid-cols-4 gap-4">
                <StatCard
                    title="Exercises Today"
                    value=today.exercises_completed.to_string()
                    icon="🧠"
                />
                <StatCard
                    title="Time Spent"
                    value=format!("{}m", today.time_spent_minutes)
                    icon="⏱"
                    accent="text-yellow-600"
                />
                <StatCard
                    title="Current Streak"
                    value=format!("{} days", today.streak_days)
                    icon="📅"
                    accent="text-green-600"
                />
                <StatCard
                    title="Improvement"
                    value=format!("+{}%", today.improvement_percent)
                    icon="📈"
                    accent="text-purple-600"
                />
            </section>

            // Charts
            <div class="grid lg:grid-cols-2 gap-8">
                <section class="bg-white rounded-xl p-6 border border-gray-200">
                    <h2 class="text-xl font-semibold">"Weekly Performance Trend"</h2>
                    <p class="text-sm text-gray-600 mb-4">"Your cognitive performance over the last 7 days"</p>
                    <WeeklyChart points=snapshot.weekly_performance />
                </section>

                <section class="bg-white rounded-xl p-6 border border-gray-200">
                    <h2 class="text-xl font-semibold">"Cognitive Profile"</h2>
                    <p class="text-sm text-gray-600 mb-4">"Your strengths across different cognitive domains"</p>
                    <RadarChart skills=snapshot.cognitive_profile />
                </section>
            </div>

            // Skill breakdown
            <section class="bg-white rounded-xl p-6 border border-gray-200">
                <h2 class="text-xl font-semibold">"⚡ Skill Breakdown"</h2>
                <p class="text-sm text-gray-600 mb-6">"Detailed analysis of your cognitive abilities"</p>
                <div class="space-y-4">
                    {snapshot
                        .cognitive_profile
                        .iter()
                        .map(|skill| view! { <SkillRow skill=*skill /> })
                        .collect_view()}
                </div>
            </section>

            // Insights
            <section class="bg-white rounded-xl p-6 border border-gray-200">
                <h2 class="text-xl font-semibold mb-4">"🧠 AI-Powered Insights"</h2>
                <div class="space-y-4">
                    {snapshot
                        .insights
                        .iter()
                        .zip(["💡", "🎯"])
                        .map(|(insight, icon)| view! {
                            <div class="p-4 rounded-lg bg-blue-50">
                                <h4 class="font-semibold text-primary">{icon} " " {insight.title}</h4>
                                <p class="text-sm text-gray-600 mt-1">{insight.body}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}

/// One skill with its tier badge and progress bar
#[component]
fn SkillRow(skill: SkillScore) -> impl IntoView {
    let tier = skill.tier();

    view! {
        <div class="space-y-2">
            <div class="flex items-center justify-between">
                <span class="font-medium">{skill.skill}</span>
                <div class="flex items-center gap-2">
                    <span class="text-sm font-semibold">{format!("{}%", skill.score)}</span>
                    <span class=format!("text-xs px-2 py-1 rounded-full {}", tier_badge_class(tier))>
                        {tier.label()}
                    </span>
                </div>
            </div>
            <div class="w-full h-2 bg-gray-200 rounded-full overflow-hidden">
                <div
                    class="h-full bg-primary rounded-full"
                    style=format!("width: {:.0}%", skill.percent())
                />
            </div>
            <div class="flex justify-between text-xs text-gray-500">
                <span>"Current: " {skill.score} "%"</span>
                <span>"Target: " {SKILL_TARGET} "%"</span>
            </div>
        </div>
    }
}

fn tier_badge_class(tier: SkillTier) -> &'static str {
    match tier {
        SkillTier::Excellent => "bg-primary text-white",
        SkillTier::Good => "bg-gray-200 text-gray-900",
        SkillTier::Improving => "border border-gray-300 text-gray-700",
    }
}
