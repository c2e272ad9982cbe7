//! Dashboard Page
//!
//! Portfolio overview, recent activity, quick actions and achievements.

use leptos::*;

use carboncredx::store::TxDirection;
use carboncredx::views::dashboard::{
    earned_count, ACHIEVEMENTS, MARKET_INSIGHTS, QUICK_ACTIONS, RECENT_ACTIVITY, STATS,
};

use crate::components::StatGrid;
use crate::state::AppState;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <div class="container mx-auto px-4 py-8 space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Dashboard"</h1>
                <p class="text-gray-400">"Welcome back! Here's your carbon credit portfolio overview."</p>
            </div>

            <StatGrid stats=&STATS />

            <div class="grid lg:grid-cols-3 gap-6">
                // Recent activity
                <section class="lg:col-span-2 bg-gray-800 rounded-lg p-6">
                    <h2 class="text-xl font-semibold mb-4">"Recent Activity"</h2>
                    <div class="space-y-3">
                        {RECENT_ACTIVITY.iter().map(|activity| {
                            let icon = match activity.direction {
                                TxDirection::Received => "↓",
                                TxDirection::Sent => "↑",
                                TxDirection::Minted => "✦",
                            };
                            view! {
                                <div class="flex items-center justify-between bg-gray-700 rounded-lg p-3">
                                    <div class="flex items-center space-x-3">
                                        <span class="text-lg">{icon}</span>
                                        <div>
                                            <div class="font-medium capitalize">
                                                {format!("{} {}", activity.direction, activity.amount)}
                                            </div>
                                            <div class="text-xs text-gray-400">{activity.description()}</div>
                                        </div>
                                    </div>
                                    <div class="text-right">
                                        <div class="font-medium">{activity.value}</div>
                                        <div class="text-xs text-gray-400">{activity.when}</div>
                                    </div>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                </section>

                // Quick actions
                <section class="bg-gray-800 rounded-lg p-6">
                    <h2 class="text-xl font-semibold mb-4">"Quick Actions"</h2>
                    <div class="space-y-3">
                        {QUICK_ACTIONS.iter().map(|action| {
                            let target = action.target;
                            view! {
                                <button
                                    on:click=move |_| state.go(target)
                                    class="w-full text-left bg-gray-700 hover:bg-gray-600 rounded-lg p-3 transition-colors"
                                >
                                    <div class="font-medium">{action.label}</div>
                                    <div class="text-xs text-gray-400">{action.description}</div>
                                </button>
                            }
                        }).collect_view()}
                    </div>
                </section>
            </div>

            // Achievements
            <section class="bg-gray-800 rounded-lg p-6">
                <div class="flex items-center justify-between mb-4">
                    <h2 class="text-xl font-semibold">"Achievements"</h2>
                    <span class="text-sm text-gray-400">
                        {format!("{}/{} earned", earned_count(), ACHIEVEMENTS.len())}
                    </span>
                </div>
                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-4">
                    {ACHIEVEMENTS.iter().map(|achievement| view! {
                        <div
                            class="rounded-lg p-4 border"
                            class:border-green-600=achievement.earned
                            class:border-gray-700=!achievement.earned
                            class:opacity-50=!achievement.earned
                        >
                            <div class="font-medium">{achievement.title}</div>
                            <div class="text-xs text-gray-400 mt-1">{achievement.description}</div>
                        </div>
                    }).collect_view()}
                </div>
            </section>

            <section>
                <h2 class="text-xl font-semibold mb-4">"Market Insights"</h2>
                <StatGrid stats=&MARKET_INSIGHTS />
            </section>
        </div>
    }
}
