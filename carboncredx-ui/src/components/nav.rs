//! Navigation Component
//!
//! Header navigation bar with logo, section links and the mobile drawer.

use leptos::*;

use carboncredx::navigation::Section;

use crate::state::AppState;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let state = expect_context::<AppState>();
    let drawer_open = move || state.drawer.with(|d| d.is_open());

    let toggle_drawer = move |_| {
        state.drawer.update(|d| {
            if d.is_open() {
                d.close();
            } else {
                d.open();
            }
        });
    };

    view! {
        <nav class="bg-gray-800 border-b border-gray-700 sticky top-0 z-40">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <button
                        on:click=move |_| state.go(Section::Home)
                        class="flex items-center space-x-3"
                    >
                        <span class="text-2xl">"🌿"</span>
                        <span class="text-xl font-bold text-white">"CarbonCredX"</span>
                    </button>

                    // Navigation links
                    <div class="hidden md:flex items-center space-x-1">
                        {Section::all()
                            .iter()
                            .map(|section| view! { <NavLink section=*section /> })
                            .collect_view()}
                    </div>

                    <button
                        on:click=toggle_drawer
                        class="md:hidden px-3 py-2 rounded-lg text-gray-300 hover:bg-gray-700"
                    >
                        {move || if drawer_open() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>

            // Mobile drawer
            <Show when=drawer_open>
                <div class="md:hidden border-t border-gray-700 px-4 py-2 space-y-1">
                    {Section::all()
                        .iter()
                        .map(|section| {
                            let section = *section;
                            view! {
                                <button
                                    on:click=move |_| state.choose(section)
                                    class="block w-full text-left px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700"
                                    class:bg-gray-700=move || state.is_active(section)
                                >
                                    {section.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(section: Section) -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <button
            on:click=move |_| state.go(section)
            class=move || {
                let base = "px-4 py-2 rounded-lg transition-colors";
                if state.is_active(section) {
                    format!("{} bg-gray-700 text-white", base)
                } else {
                    format!("{} text-gray-300 hover:text-white hover:bg-gray-700", base)
                }
            }
        >
            {section.label()}
        </button>
    }
}
