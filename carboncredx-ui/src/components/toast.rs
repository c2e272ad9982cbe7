//! Toast Component
//!
//! Shows the current notice (copy confirmations, verification results,
//! rejected files) in the corner of the screen.

use leptos::*;

use crate::state::{AppState, Notice, NoticeKind};

/// Toast container
#[component]
pub fn Toast() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <div class="fixed bottom-24 left-4 z-50">
            {move || state.notice.get().map(|notice| view! { <NoticeCard notice=notice /> })}
        </div>
    }
}

#[component]
fn NoticeCard(notice: Notice) -> impl IntoView {
    let state = expect_context::<AppState>();

    let (icon, bg_class) = match notice.kind {
        NoticeKind::Success => ("✓", "bg-green-600"),
        NoticeKind::Error => ("✕", "bg-red-600"),
    };

    view! {
        <div class=format!(
            "flex items-center space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg animate-slide-in",
            bg_class
        )>
            <span class="text-lg">{icon}</span>
            <span class="text-sm font-medium max-w-xs">{notice.text}</span>
            <button
                on:click=move |_| state.dismiss()
                class="text-white/70 hover:text-white text-xs"
            >
                "Dismiss"
            </button>
        </div>
    }
}
