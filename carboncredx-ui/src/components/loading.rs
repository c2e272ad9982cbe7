//! Loading Component
//!
//! Spinners and the assistant's typing indicator.

use leptos::*;

/// Inline loading spinner
#[component]
pub fn InlineLoading() -> impl IntoView {
    view! {
        <span class="inline-block loading-spinner w-4 h-4" />
    }
}

/// Three bouncing dots
#[component]
pub fn TypingIndicator() -> impl IntoView {
    view! {
        <div class="flex space-x-1 px-4 py-3 bg-gray-700 rounded-lg w-fit">
            {(0..3).map(|i| view! {
                <span
                    class="w-2 h-2 bg-gray-400 rounded-full animate-bounce"
                    style=format!("animation-delay: {}ms", i * 150)
                />
            }).collect_view()}
        </div>
    }
}
