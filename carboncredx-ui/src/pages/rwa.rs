//! RWA Portfolio Page
//!
//! Tokenized real-world assets with a type filter and grid/list modes.

use leptos::*;

use carboncredx::views::rwa::{
    AssetFilter, AssetType, RwaAsset, RwaView, ViewMode, DIVERSIFICATION, MONTHLY_CHANGE,
};
use carboncredx::views::Trend;

/// RWA portfolio page component
#[component]
pub fn Portfolio() -> impl IntoView {
    let rwa = create_rw_signal(RwaView::new());
    let summary = rwa.get_untracked();

    view! {
        <div class="container mx-auto px-4 py-8 space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"RWA Portfolio"</h1>
                <p class="text-gray-400">"Tokenized real-world assets backed by verified documentation"</p>
            </div>

            // Summary
            <div class="grid md:grid-cols-3 gap-4">
                <div class="bg-gray-800 rounded-lg p-4">
                    <div class="text-sm text-gray-400">"Total Portfolio Value"</div>
                    <div class="text-2xl font-bold">{summary.total_value_label()}</div>
                    <div class="text-sm text-green-400">{MONTHLY_CHANGE}</div>
                </div>
                <div class="bg-gray-800 rounded-lg p-4">
                    <div class="text-sm text-gray-400">"Total Tokens"</div>
                    <div class="text-2xl font-bold">{summary.total_tokens_label()}</div>
                </div>
                <div class="bg-gray-800 rounded-lg p-4">
                    <div class="text-sm text-gray-400 mb-2">"Diversification"</div>
                    {DIVERSIFICATION.iter().map(|(asset_type, percent)| view! {
                        <div class="flex items-center space-x-2 text-xs">
                            <span class="w-20">{AssetFilter::Only(*asset_type).label()}</span>
                            <div class="flex-1 bg-gray-700 rounded h-2">
                                <div class="bg-green-500 rounded h-2" style=format!("width: {}%", percent) />
                            </div>
                            <span>{format!("{}%", percent)}</span>
                        </div>
                    }).collect_view()}
                </div>
            </div>

            // Filter and view mode
            <div class="flex flex-wrap items-center justify-between gap-4">
                <div class="flex flex-wrap gap-2">
                    {AssetFilter::all().into_iter().map(|filter| view! {
                        <button
                            on:click=move |_| rwa.update(|r| r.set_filter(filter))
                            class=move || {
                                let base = "px-4 py-2 rounded-lg text-sm transition-colors";
                                if rwa.with(|r| r.filter() == filter) {
                                    format!("{} bg-green-600 text-white", base)
                                } else {
                                    format!("{} bg-gray-700 text-gray-300 hover:bg-gray-600", base)
                                }
                            }
                        >
                            {format!("{} ({})", filter.label(), filter.count())}
                        </button>
                    }).collect_view()}
                </div>
                <div class="flex space-x-1">
                    <ModeButton rwa=rwa mode=ViewMode::Grid label="▦" />
                    <ModeButton rwa=rwa mode=ViewMode::List label="☰" />
                </div>
            </div>

            {move || {
                let (assets, mode) = rwa.with(|r| (r.assets(), r.mode()));
                let layout = match mode {
                    ViewMode::Grid => "grid md:grid-cols-2 gap-6",
                    ViewMode::List => "space-y-4",
                };
                view! {
                    <div class=layout>
                        {assets.into_iter().map(|asset| view! { <AssetCard asset=asset /> }).collect_view()}
                    </div>
                }
            }}
        </div>
    }
}

#[component]
fn ModeButton(rwa: RwSignal<RwaView>, mode: ViewMode, label: &'static str) -> impl IntoView {
    view! {
        <button
            on:click=move |_| rwa.update(|r| r.set_mode(mode))
            class=move || {
                if rwa.with(|r| r.mode() == mode) {
                    "px-3 py-2 rounded-lg bg-gray-600"
                } else {
                    "px-3 py-2 rounded-lg bg-gray-800 hover:bg-gray-700"
                }
            }
        >
            {label}
        </button>
    }
}

#[component]
fn AssetCard(asset: &'static RwaAsset) -> impl IntoView {
    let change_color = match asset.trend() {
        Trend::Up => "text-green-400",
        Trend::Down => "text-red-400",
    };
    let size_label = match asset.asset_type() {
        AssetType::Commodity => "Weight",
        AssetType::Carbon | AssetType::RealEstate => "Area",
    };

    view! {
        <div class="bg-gray-800 rounded-lg p-6 border border-gray-700 space-y-3">
            <div class="flex items-center justify-between">
                <div>
                    <h3 class="text-lg font-semibold">{asset.name}</h3>
                    <div class="text-xs text-gray-400">{format!("{} • {}", asset.symbol, asset.location)}</div>
                </div>
                <span class="px-2 py-1 rounded text-xs bg-gray-700">{asset.status}</span>
            </div>
            <div class="flex items-baseline space-x-3">
                <span class="text-2xl font-bold">{asset.value_label()}</span>
                <span class=format!("text-sm {}", change_color)>{asset.change}</span>
            </div>
            <dl class="grid grid-cols-2 gap-y-1 text-sm">
                <dt class="text-gray-400">"Tokens"</dt>
                <dd>{asset.tokens}</dd>
                <dt class="text-gray-400">"Price"</dt>
                <dd>{format!("₹{:.2}", asset.price)}</dd>
                <dt class="text-gray-400">{size_label}</dt>
                <dd>{asset.details.size()}</dd>
                <dt class="text-gray-400">"Certified by"</dt>
                <dd>{asset.certification_body}</dd>
                <dt class="text-gray-400">"Since"</dt>
                <dd>{asset.project_start}</dd>
                <dt class="text-gray-400">"Risk"</dt>
                <dd>{asset.risk_level}</dd>
                <dt class="text-gray-400">"Next verification"</dt>
                <dd>{asset.next_verification}</dd>
            </dl>
            <p class="text-sm text-green-300">{asset.details.highlight()}</p>
            <div class="flex flex-wrap gap-2">
                {asset.documents.iter().map(|doc| view! {
                    <span class="px-2 py-1 rounded bg-gray-700 text-xs">{format!("📄 {}", doc)}</span>
                }).collect_view()}
            </div>
        </div>
    }
}
