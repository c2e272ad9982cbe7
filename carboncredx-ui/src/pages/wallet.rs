//! Wallet Page
//!
//! Balances, holdings and recent transactions with a show/hide toggle.

use leptos::*;

use carboncredx::format::inr;
use carboncredx::store::TxDirection;
use carboncredx::views::wallet::{WalletTab, WalletView, HOLDINGS, MONTHLY_CHANGE, TRANSACTIONS};
use carboncredx::views::Trend;

use crate::state::{AppState, BrowserClipboard};

/// Wallet page component
#[component]
pub fn Wallet() -> impl IntoView {
    let state = expect_context::<AppState>();
    let address = state.config.with_value(|c| c.wallet.address.clone());
    let wallet = create_rw_signal(WalletView::new(address));

    let copy_address = move |_| {
        match wallet.with_untracked(|w| w.copy_address(&BrowserClipboard)) {
            Ok(()) => state.show_success("Wallet address copied"),
            Err(e) => state.show_error(&e.to_string()),
        }
    };

    view! {
        <div class="container mx-auto px-4 py-8 space-y-8">
            <h1 class="text-3xl font-bold">"Carbon Wallet"</h1>

            // Balance card
            <section class="bg-gradient-to-r from-green-700 to-emerald-600 rounded-lg p-6 space-y-4">
                <div class="flex items-center justify-between">
                    <span class="text-green-100">"Total Balance"</span>
                    <button
                        on:click=move |_| wallet.update(|w| w.toggle_balance())
                        class="text-sm text-green-100 hover:text-white"
                    >
                        {move || if wallet.with(|w| w.is_balance_visible()) { "Hide" } else { "Show" }}
                    </button>
                </div>
                <div class="text-4xl font-bold">{move || wallet.with(|w| w.total_value_label())}</div>
                <div class="text-green-100">
                    {move || format!("{} tokens", wallet.with(|w| w.total_tokens_label()))}
                </div>
                <div class="text-sm text-green-200">{MONTHLY_CHANGE}</div>

                <div class="flex items-center space-x-2 bg-black/20 rounded-lg px-3 py-2 w-fit">
                    <span class="font-mono text-sm">{move || wallet.with(|w| w.short_address())}</span>
                    <button on:click=copy_address class="text-sm hover:text-green-200">"📋"</button>
                </div>
            </section>

            // Tabs
            <div class="flex space-x-2 border-b border-gray-700">
                {WalletTab::all().into_iter().map(|tab| view! {
                    <button
                        on:click=move |_| wallet.update(|w| w.select_tab(tab))
                        class="px-4 py-2 -mb-px border-b-2 border-transparent text-gray-400"
                        class:border-green-500=move || wallet.with(|w| w.tab() == tab)
                        class:text-white=move || wallet.with(|w| w.tab() == tab)
                    >
                        {tab.label()}
                    </button>
                }).collect_view()}
            </div>

            {move || match wallet.with(|w| w.tab()) {
                WalletTab::Overview => view! { <Holdings wallet=wallet /> }.into_view(),
                WalletTab::Transactions => view! { <Transactions /> }.into_view(),
                WalletTab::Settings => view! { <Settings wallet=wallet /> }.into_view(),
            }}
        </div>
    }
}

#[component]
fn Holdings(wallet: RwSignal<WalletView>) -> impl IntoView {
    view! {
        <div class="space-y-3">
            {HOLDINGS.into_iter().map(|token| {
                let color = match token.trend() {
                    Trend::Up => "text-green-400",
                    Trend::Down => "text-red-400",
                };
                view! {
                    <div class="flex items-center justify-between bg-gray-800 rounded-lg p-4">
                        <div>
                            <div class="font-semibold">{token.symbol}</div>
                            <div class="text-xs text-gray-400">{token.name}</div>
                        </div>
                        <div class="text-right">
                            <div>{move || wallet.with(|w| w.balance_label(&token))}</div>
                            <div class="text-sm text-gray-400">{move || wallet.with(|w| w.value_label(&token))}</div>
                            <div class=format!("text-xs {}", color)>{token.change}</div>
                        </div>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[component]
fn Transactions() -> impl IntoView {
    view! {
        <div class="space-y-3">
            {TRANSACTIONS.iter().map(|tx| {
                let sign = match tx.direction {
                    TxDirection::Sent => "-",
                    TxDirection::Received | TxDirection::Minted => "+",
                };
                view! {
                    <div class="flex items-center justify-between bg-gray-800 rounded-lg p-4">
                        <div>
                            <div class="font-medium capitalize">{tx.direction.to_string()}</div>
                            <div class="text-xs text-gray-400">{tx.description()}</div>
                            <div class="text-xs text-gray-500 font-mono">{tx.hash}</div>
                        </div>
                        <div class="text-right">
                            <div>{format!("{}{} {}", sign, tx.amount, tx.token)}</div>
                            <div class="text-sm text-gray-400">{inr(tx.value)}</div>
                            <div class="text-xs text-gray-500">{tx.when}</div>
                        </div>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[component]
fn Settings(wallet: RwSignal<WalletView>) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-6 space-y-4">
            <div>
                <div class="text-sm text-gray-400">"Wallet Address"</div>
                <div class="font-mono break-all">{move || wallet.with(|w| w.address().to_string())}</div>
            </div>
            <label class="flex items-center space-x-3">
                <input
                    type="checkbox"
                    prop:checked=move || wallet.with(|w| w.is_balance_visible())
                    on:change=move |_| wallet.update(|w| w.toggle_balance())
                />
                <span>"Show balances"</span>
            </label>
        </div>
    }
}
