//! Market Page
//!
//! Token prices, market stats and the CCX price chart.

use leptos::*;

use carboncredx::views::market::{top_tokens, MarketToken, MarketView, Timeframe, STATS, TOKENS};

use crate::components::{PriceChart, StatGrid};
use crate::state::AppState;

/// Market page component
#[component]
pub fn Market() -> impl IntoView {
    let state = expect_context::<AppState>();
    let config = state.config.with_value(|c| c.simulation.clone());

    let market = create_rw_signal(MarketView::new(&config));
    let series = Signal::derive(move || market.with(|m| m.series().to_vec()));

    view! {
        <div class="container mx-auto px-4 py-8 space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Carbon Credit Marketplace"</h1>
                <p class="text-gray-400">"Real-time pricing and trading for tokenized carbon credits"</p>
            </div>

            <StatGrid stats=&STATS />

            <div class="grid lg:grid-cols-3 gap-6">
                // Price chart
                <section class="lg:col-span-2 bg-gray-800 rounded-lg p-6 space-y-4">
                    <div class="flex items-center justify-between">
                        <h2 class="text-xl font-semibold">"CCX Price"</h2>
                        <div class="flex space-x-1">
                            {Timeframe::all().into_iter().map(|timeframe| view! {
                                <TimeframeButton timeframe=timeframe market=market />
                            }).collect_view()}
                        </div>
                    </div>
                    <PriceChart series=series />
                    <div class="text-sm text-gray-400">
                        {move || market.with(|m| m.price_range()).map(|(lo, hi)| {
                            format!("Range: ₹{:.2} – ₹{:.2}", lo, hi)
                        })}
                    </div>
                </section>

                // Top tokens
                <section class="bg-gray-800 rounded-lg p-6">
                    <h2 class="text-xl font-semibold mb-4">"Top Tokens"</h2>
                    <div class="space-y-3">
                        {top_tokens().iter().map(|token| view! {
                            <div class="flex items-center justify-between">
                                <div>
                                    <div class="font-medium">{token.symbol}</div>
                                    <div class="text-xs text-gray-400">{token.name}</div>
                                </div>
                                <div class="text-right">
                                    <div>{token.price_label()}</div>
                                    <ChangeLabel token=token />
                                </div>
                            </div>
                        }).collect_view()}
                    </div>
                </section>
            </div>

            // All tokens
            <section class="bg-gray-800 rounded-lg p-6 overflow-x-auto">
                <h2 class="text-xl font-semibold mb-4">"All Tokens"</h2>
                <table class="w-full text-sm">
                    <thead class="text-gray-400 text-left">
                        <tr>
                            <th class="py-2">"Token"</th>
                            <th>"Price"</th>
                            <th>"24h Change"</th>
                            <th>"Volume"</th>
                            <th>"Market Cap"</th>
                            <th>"Supply"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {TOKENS.iter().map(|token| view! {
                            <tr class="border-t border-gray-700">
                                <td class="py-3">
                                    <div class="font-medium">{token.symbol}</div>
                                    <div class="text-xs text-gray-400">{token.name}</div>
                                </td>
                                <td>{token.price_label()}</td>
                                <td><ChangeLabel token=token /></td>
                                <td>{token.volume_label()}</td>
                                <td>{token.market_cap_label()}</td>
                                <td>{token.supply_label()}</td>
                            </tr>
                        }).collect_view()}
                    </tbody>
                </table>
            </section>
        </div>
    }
}

#[component]
fn TimeframeButton(timeframe: Timeframe, market: RwSignal<MarketView>) -> impl IntoView {
    let is_active = create_memo(move |_| market.with(|m| m.timeframe() == timeframe));

    view! {
        <button
            on:click=move |_| {
                market.update(|m| {
                    m.select_timeframe(timeframe);
                });
            }
            class=move || {
                let base = "px-3 py-1 rounded-lg text-sm font-medium transition-colors";
                if is_active.get() {
                    format!("{} bg-green-600 text-white", base)
                } else {
                    format!("{} bg-gray-700 text-gray-300 hover:bg-gray-600", base)
                }
            }
        >
            {timeframe.id()}
        </button>
    }
}

#[component]
fn ChangeLabel(token: &'static MarketToken) -> impl IntoView {
    let color = if token.change_24h >= 0.0 {
        "text-green-400"
    } else {
        "text-red-400"
    };

    view! { <span class=format!("text-sm {}", color)>{token.change_label()}</span> }
}
