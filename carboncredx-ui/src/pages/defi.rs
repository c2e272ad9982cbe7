//! DeFi Hub Page

use leptos::*;

use carboncredx::views::defi::{
    DefiView, RiskLevel, OPPORTUNITIES, PORTFOLIO_STATS, POSITIONS, PRO_TIPS,
};

use crate::components::StatGrid;

#[component]
pub fn DeFiHub() -> impl IntoView {
    let defi = create_rw_signal(DefiView::new());

    view! {
        <div class="container mx-auto px-4 py-8 space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"DeFi Hub"</h1>
                <p class="text-gray-400">"Earn yield on your carbon credit tokens"</p>
            </div>

            <StatGrid stats=&PORTFOLIO_STATS />

            <div class="grid lg:grid-cols-3 gap-6">
                // Opportunities
                <section class="lg:col-span-2 grid md:grid-cols-2 gap-4">
                    {OPPORTUNITIES.iter().map(|opportunity| {
                        let strategy = opportunity.strategy;
                        view! {
                            <button
                                on:click=move |_| defi.update(|d| d.select(strategy))
                                class="text-left bg-gray-800 rounded-lg p-5 border-2 border-gray-700 transition-colors"
                                class:border-green-500=move || defi.with(|d| d.is_selected(strategy))
                            >
                                <div class="flex items-center justify-between mb-2">
                                    <h3 class="font-semibold">{opportunity.title}</h3>
                                    <RiskBadge risk=opportunity.risk />
                                </div>
                                <div class="text-3xl font-bold text-green-400">{opportunity.apy}</div>
                                <div class="text-xs text-gray-400 mb-2">"APY"</div>
                                <p class="text-sm text-gray-300">{opportunity.description}</p>
                                <div class="text-xs text-gray-400 mt-2">{format!("TVL {}", opportunity.tvl)}</div>
                            </button>
                        }
                    }).collect_view()}
                </section>

                // Selected strategy
                <section class="bg-gray-800 rounded-lg p-6 space-y-4">
                    {move || {
                        let selected = defi.with(|d| d.selected_opportunity());
                        view! {
                            <h2 class="text-xl font-semibold">{selected.title}</h2>
                            <dl class="grid grid-cols-2 gap-y-2 text-sm">
                                <dt class="text-gray-400">"Minimum"</dt>
                                <dd>{selected.min_amount}</dd>
                                <dt class="text-gray-400">"Lock period"</dt>
                                <dd>{selected.lock_period}</dd>
                                <dt class="text-gray-400">"Rewards"</dt>
                                <dd>{selected.rewards}</dd>
                                <dt class="text-gray-400">"Risk"</dt>
                                <dd>{selected.risk.label()}</dd>
                            </dl>
                            <p class="text-xs text-gray-400">{selected.risk.guidance()}</p>
                            <button class="w-full py-2 rounded-lg bg-green-600 hover:bg-green-700">
                                {format!("Start {}", selected.title)}
                            </button>
                        }
                    }}

                    <div>
                        <h3 class="font-semibold mb-2">"Pro Tips"</h3>
                        <ul class="list-disc list-inside text-sm text-gray-400 space-y-1">
                            {PRO_TIPS.iter().map(|tip| view! { <li>{*tip}</li> }).collect_view()}
                        </ul>
                    </div>
                </section>
            </div>

            // Active positions
            <section class="bg-gray-800 rounded-lg p-6">
                <h2 class="text-xl font-semibold mb-4">"Active Positions"</h2>
                <div class="space-y-3">
                    {POSITIONS.iter().map(|position| view! {
                        <div class="grid grid-cols-2 md:grid-cols-6 gap-2 bg-gray-700 rounded-lg p-4 text-sm">
                            <div class="font-medium">{position.protocol}</div>
                            <div>{position.amount}</div>
                            <div>{position.value}</div>
                            <div class="text-green-400">{position.apy}</div>
                            <div>{format!("Earned {}", position.earned)}</div>
                            <div class="text-gray-400">{format!("{} • {}", position.status, position.time_left)}</div>
                        </div>
                    }).collect_view()}
                </div>
            </section>
        </div>
    }
}

#[component]
fn RiskBadge(risk: RiskLevel) -> impl IntoView {
    let color = match risk {
        RiskLevel::Low => "bg-green-800 text-green-300",
        RiskLevel::Medium => "bg-yellow-800 text-yellow-300",
        RiskLevel::High => "bg-red-800 text-red-300",
    };

    view! { <span class=format!("px-2 py-1 rounded text-xs {}", color)>{risk.label()}</span> }
}
