//! Landing page

use leptos::*;

use carboncredx::views::home::{
    BADGE, CTA_TEXT, CTA_TITLE, FEATURES, GET_STARTED, HEADLINE, STATS, TAGLINE,
};

use crate::state::AppState;

#[component]
pub fn Home() -> impl IntoView {
    let state = expect_context::<AppState>();
    let get_started = move |_| state.go(GET_STARTED);

    view! {
        <div class="container mx-auto px-4 py-12 space-y-16">
            // Hero
            <section class="text-center space-y-6">
                <span class="inline-block px-4 py-1 rounded-full bg-green-900 text-green-300 text-sm">
                    {BADGE}
                </span>
                <h1 class="text-5xl font-bold">{HEADLINE}</h1>
                <p class="text-gray-400 max-w-2xl mx-auto">{TAGLINE}</p>
                <button
                    on:click=get_started
                    class="px-6 py-3 bg-green-600 hover:bg-green-700 rounded-lg font-medium transition-colors"
                >
                    "Get Started"
                </button>
            </section>

            // Platform stats
            <section class="grid grid-cols-2 md:grid-cols-4 gap-4">
                {STATS.iter().map(|stat| view! {
                    <div class="bg-gray-800 rounded-lg p-6 text-center">
                        <div class="text-3xl font-bold text-green-400">{stat.value}</div>
                        <div class="text-gray-400 text-sm mt-1">{stat.label}</div>
                    </div>
                }).collect_view()}
            </section>

            // Features
            <section class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                {FEATURES.iter().map(|feature| view! {
                    <div class="bg-gray-800 rounded-lg p-6 border border-gray-700">
                        <h3 class="text-lg font-semibold mb-2">{feature.title}</h3>
                        <p class="text-gray-400 text-sm">{feature.description}</p>
                    </div>
                }).collect_view()}
            </section>

            // Call to action
            <section class="bg-gradient-to-r from-green-700 to-emerald-600 rounded-lg p-10 text-center space-y-4">
                <h2 class="text-3xl font-bold">{CTA_TITLE}</h2>
                <p class="text-green-100">{CTA_TEXT}</p>
                <button
                    on:click=get_started
                    class="px-6 py-3 bg-white text-green-700 rounded-lg font-medium"
                >
                    "Start Your Journey"
                </button>
            </section>
        </div>
    }
}
