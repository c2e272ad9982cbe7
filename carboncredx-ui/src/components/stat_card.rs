//! Stat Card Component
//!
//! Displays a headline figure with its change and trend arrow.

use leptos::*;

use carboncredx::views::{StatCard as Stat, Trend};

/// Stat card component
#[component]
pub fn StatCard(stat: Stat) -> impl IntoView {
    let (arrow, color) = match stat.trend() {
        Trend::Up => ("↑", "text-green-400"),
        Trend::Down => ("↓", "text-red-400"),
    };

    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700 hover:border-gray-600 transition">
            <span class="text-gray-400 text-sm">{stat.title}</span>

            <div class="text-3xl font-bold mt-2">{stat.value}</div>

            <div class="mt-2">
                <span class=format!("text-sm {}", color)>
                    {arrow}
                    " "
                    {stat.change}
                </span>
            </div>
        </div>
    }
}

/// Grid of stat cards
#[component]
pub fn StatGrid(stats: &'static [Stat]) -> impl IntoView {
    view! {
        <div class="grid grid-cols-2 lg:grid-cols-4 gap-4">
            {stats.iter().map(|stat| view! { <StatCard stat=*stat /> }).collect_view()}
        </div>
    }
}
