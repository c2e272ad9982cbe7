//! Token Explorer Page
//!
//! Search and filter verified carbon-credit projects.

use leptos::*;

use carboncredx::views::explorer::{ExplorerView, ProjectFilter, ProjectToken, SUMMARY};

use crate::state::{AppState, BrowserClipboard};

/// Token explorer page component
#[component]
pub fn Explorer() -> impl IntoView {
    let explorer = create_rw_signal(ExplorerView::new());

    view! {
        <div class="container mx-auto px-4 py-8 space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Token Explorer"</h1>
                <p class="text-gray-400">"Explore carbon credit tokens, ownership and project details"</p>
            </div>

            <div class="grid grid-cols-2 lg:grid-cols-4 gap-4">
                {SUMMARY.iter().map(|(label, value)| view! {
                    <div class="bg-gray-800 rounded-lg p-4">
                        <div class="text-sm text-gray-400">{*label}</div>
                        <div class="text-2xl font-bold">{*value}</div>
                    </div>
                }).collect_view()}
            </div>

            // Search and filter
            <div class="flex flex-col md:flex-row gap-4">
                <input
                    type="search"
                    placeholder="Search by token ID, project name, or location..."
                    class="flex-1 bg-gray-800 border border-gray-700 rounded-lg px-4 py-2"
                    prop:value=move || explorer.with(|e| e.query().to_string())
                    on:input=move |ev| explorer.update(|e| e.set_query(&event_target_value(&ev)))
                />
                <select
                    class="bg-gray-800 border border-gray-700 rounded-lg px-4 py-2"
                    on:change=move |ev| {
                        if let Ok(filter) = event_target_value(&ev).parse::<ProjectFilter>() {
                            explorer.update(|e| e.set_filter(filter));
                        }
                    }
                >
                    {ProjectFilter::all().into_iter().map(|filter| view! {
                        <option
                            value=filter.id()
                            selected=move || explorer.with(|e| e.filter() == filter)
                        >
                            {filter.label()}
                        </option>
                    }).collect_view()}
                </select>
            </div>

            // Results
            {move || {
                let results = explorer.with(|e| e.results());
                if results.is_empty() {
                    view! {
                        <div class="text-center py-12 text-gray-400">
                            <div class="text-4xl mb-2">"🔍"</div>
                            <p>"No tokens found matching your search"</p>
                        </div>
                    }.into_view()
                } else {
                    view! {
                        <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                            {results.into_iter().map(|token| view! {
                                <ProjectCard token=token explorer=explorer />
                            }).collect_view()}
                        </div>
                    }.into_view()
                }
            }}
        </div>
    }
}

#[component]
fn ProjectCard(token: &'static ProjectToken, explorer: RwSignal<ExplorerView>) -> impl IntoView {
    let state = expect_context::<AppState>();

    let copy_id = move |_| {
        match explorer.with_untracked(|e| e.copy_token_id(token, &BrowserClipboard)) {
            Ok(()) => state.show_success(&format!("Copied {}", token.id)),
            Err(e) => state.show_error(&e.to_string()),
        }
    };

    let verified = token
        .verified_on()
        .map(|date| date.format("%d %b %Y").to_string())
        .unwrap_or_else(|| token.verification_date.to_string());

    view! {
        <div class="bg-gray-800 rounded-lg p-6 border border-gray-700 space-y-3">
            <div class="flex items-center justify-between">
                <button on:click=copy_id class="font-mono text-sm text-green-400 hover:text-green-300">
                    {token.id}
                    " 📋"
                </button>
                <span class=if token.is_active() {
                    "px-2 py-1 rounded text-xs bg-green-700"
                } else {
                    "px-2 py-1 rounded text-xs bg-gray-600"
                }>
                    {token.status}
                </span>
            </div>
            <h3 class="text-lg font-semibold">{token.name}</h3>
            <div class="text-sm text-gray-400">{token.project_type}</div>
            <dl class="grid grid-cols-2 gap-y-1 text-sm">
                <dt class="text-gray-400">"Credits"</dt>
                <dd>{token.credits_label()}</dd>
                <dt class="text-gray-400">"Price"</dt>
                <dd>{format!("₹{:.2}", token.price)}</dd>
                <dt class="text-gray-400">"Location"</dt>
                <dd>{token.location}</dd>
                <dt class="text-gray-400">"Area"</dt>
                <dd>{token.project_area}</dd>
                <dt class="text-gray-400">"Verified"</dt>
                <dd>{verified}</dd>
                <dt class="text-gray-400">"Certified by"</dt>
                <dd>{token.certification_body}</dd>
                <dt class="text-gray-400">"Issuer"</dt>
                <dd>{token.issuer}</dd>
                <dt class="text-gray-400">"Owners"</dt>
                <dd>{token.owners}</dd>
            </dl>
        </div>
    }
}
