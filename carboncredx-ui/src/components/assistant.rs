//! Assistant Widget
//!
//! Floating chat panel backed by [`ChatSession`]. Replies appear once their
//! typing delay has elapsed; a [`Wakeup`] fires at that deadline.

use leptos::*;

use carboncredx::assistant::{ActionKind, ChatMessage, ChatSession, Role, SuggestedAction};
use carboncredx::clock::{Clock, SystemClock};

use crate::components::loading::TypingIndicator;
use crate::state::{AppState, Wakeup};

/// Floating assistant button and chat panel
#[component]
pub fn AssistantWidget() -> impl IntoView {
    let state = expect_context::<AppState>();
    let config = state.config.with_value(|c| c.simulation.clone());

    let session = create_rw_signal(ChatSession::new(&config, SystemClock.now()));
    let wakeup = Wakeup::new();
    let draft = create_rw_signal(String::new());

    let is_open = move || session.with(|s| s.is_open());
    let is_minimized = move || session.with(|s| s.is_minimized());

    let submit = move || {
        let text = draft.get_untracked();
        let sent = session.try_update(|s| s.send(&text, SystemClock.now()));
        match sent {
            Some(Ok(_)) => {
                draft.set(String::new());
                schedule_reply(session, wakeup);
            }
            Some(Err(e)) => logging::log!("message not sent: {e}"),
            None => {}
        }
    };

    let on_action = move |action: &'static str| {
        let sent = session.try_update(|s| s.trigger_action(action, SystemClock.now()));
        if let Some(Ok(_)) = sent {
            schedule_reply(session, wakeup);
        }
    };

    view! {
        <div class="fixed bottom-6 right-6 z-50">
            <Show
                when=is_open
                fallback=move || view! {
                    <button
                        on:click=move |_| session.update(|s| s.toggle_open())
                        class="w-14 h-14 rounded-full bg-green-600 hover:bg-green-700 shadow-lg text-2xl"
                    >
                        "🤖"
                    </button>
                }
            >
                <div class="w-96 bg-gray-800 border border-gray-700 rounded-lg shadow-xl flex flex-col">
                    // Header
                    <div class="flex items-center justify-between px-4 py-3 border-b border-gray-700">
                        <div>
                            <div class="font-semibold">"CarbonCredX AI"</div>
                            <div class="text-xs text-gray-400">
                                {move || if session.with(|s| s.is_typing()) { "Typing..." } else { "Online" }}
                            </div>
                        </div>
                        <div class="flex space-x-2">
                            <button
                                on:click=move |_| session.update(|s| s.toggle_minimized())
                                class="px-2 text-gray-400 hover:text-white"
                            >
                                {move || if is_minimized() { "▢" } else { "–" }}
                            </button>
                            <button
                                on:click=move |_| session.update(|s| s.toggle_open())
                                class="px-2 text-gray-400 hover:text-white"
                            >
                                "✕"
                            </button>
                        </div>
                    </div>

                    <Show when=move || !is_minimized()>
                        // Transcript
                        <div class="h-96 overflow-y-auto p-4 space-y-3">
                            <For
                                each=move || session.with(|s| s.messages().to_vec())
                                key=|message| message.id
                                children=move |message| view! {
                                    <Message message=message on_action=on_action />
                                }
                            />
                            <Show when=move || session.with(|s| s.is_typing())>
                                <TypingIndicator />
                            </Show>
                        </div>

                        // Input
                        <form
                            class="flex border-t border-gray-700 p-3 space-x-2"
                            on:submit=move |ev| {
                                ev.prevent_default();
                                submit();
                            }
                        >
                            <input
                                type="text"
                                placeholder="Ask me anything about carbon credits..."
                                class="flex-1 bg-gray-700 rounded-lg px-3 py-2 text-sm focus:outline-none"
                                prop:value=move || draft.get()
                                on:input=move |ev| draft.set(event_target_value(&ev))
                            />
                            <button
                                type="submit"
                                class="px-4 py-2 bg-green-600 hover:bg-green-700 rounded-lg text-sm disabled:opacity-50"
                                disabled=move || !session.with(|s| s.can_send(&draft.get()))
                            >
                                "Send"
                            </button>
                        </form>
                    </Show>
                </div>
            </Show>
        </div>
    }
}

/// Wake up for the pending reply, if any
fn schedule_reply(session: RwSignal<ChatSession>, wakeup: Wakeup) {
    let due = session.with_untracked(|s| s.next_due());
    wakeup.arm(due, move || {
        session.update(|s| {
            s.advance(SystemClock.now());
        });
        schedule_reply(session, wakeup);
    });
}

#[component]
fn Message<F>(message: ChatMessage, on_action: F) -> impl IntoView
where
    F: Fn(&'static str) + Copy + 'static,
{
    let bubble = match message.role {
        Role::User => "ml-auto bg-green-600",
        Role::Assistant => "bg-gray-700",
    };

    view! {
        <div class="space-y-2">
            <div class=format!("max-w-[85%] w-fit rounded-lg px-4 py-2 text-sm whitespace-pre-line {}", bubble)>
                {message.content.clone()}
                <div class="text-xs text-gray-300 mt-1">
                    {message.timestamp.format("%H:%M").to_string()}
                </div>
            </div>

            <div class="flex flex-wrap gap-2">
                {message
                    .actions
                    .iter()
                    .map(|action| view! { <ActionButton action=*action on_action=on_action /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn ActionButton<F>(action: SuggestedAction, on_action: F) -> impl IntoView
where
    F: Fn(&'static str) + Copy + 'static,
{
    let color = match action.kind {
        ActionKind::Primary => "bg-green-600 hover:bg-green-700",
        ActionKind::Secondary => "bg-gray-600 hover:bg-gray-500",
        ActionKind::Warning => "bg-yellow-600 hover:bg-yellow-700",
    };

    view! {
        <button
            on:click=move |_| on_action(action.action)
            class=format!("px-3 py-1 rounded-full text-xs {}", color)
        >
            {action.label}
        </button>
    }
}
