//! App Root Component
//!
//! Main application component with the section switch and global providers.

use leptos::*;

use carboncredx::navigation::{Route, Section};

use crate::components::{AssistantWidget, Nav, Toast};
use crate::pages::{
    Dashboard, DeFiHub, DocumentUpload, Explorer, Home, Kyc, Market, Portfolio, Wallet,
};
use crate::state::{provide_app_state, AppState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_app_state();

    let state = expect_context::<AppState>();

    // Only re-render the page body when the section itself changes
    let route = create_memo(move |_| state.route());

    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col">
            // Navigation header
            <Nav />

            // Main content area
            <main class="flex-1">
                {move || match route.get() {
                    Route::Section(section) => page(section),
                    Route::Unknown(name) => {
                        logging::warn!("unknown section {name}");
                        view! {}.into_view()
                    }
                }}
            </main>

            <Footer />

            // Floating assistant
            <AssistantWidget />

            // Toast notifications
            <Toast />
        </div>
    }
}

fn page(section: Section) -> View {
    match section {
        Section::Home => view! { <Home /> }.into_view(),
        Section::Dashboard => view! { <Dashboard /> }.into_view(),
        Section::Upload => view! { <DocumentUpload /> }.into_view(),
        Section::Kyc => view! { <Kyc /> }.into_view(),
        Section::Wallet => view! { <Wallet /> }.into_view(),
        Section::Explorer => view! { <Explorer /> }.into_view(),
        Section::Market => view! { <Market /> }.into_view(),
        Section::Defi => view! { <DeFiHub /> }.into_view(),
        Section::Rwa => view! { <Portfolio /> }.into_view(),
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-800 border-t border-gray-700 py-6 px-4">
            <div class="container mx-auto text-center text-sm text-gray-400">
                <div class="flex items-center justify-center space-x-2 mb-2">
                    <span class="text-xl">"🌿"</span>
                    <span class="font-bold text-white">"CarbonCredX"</span>
                </div>
                <p>{carboncredx::views::home::FOOTER}</p>
            </div>
        </footer>
    }
}
