//! CarbonCredX
//!
//! Carbon-credit tokenization demo built with Leptos (WASM).
//!
//! # Features
//!
//! - Section navigation across nine pages
//! - Simulated AI verification of uploaded certificates
//! - Four-step KYC wizard
//! - Wallet, market, DeFi, explorer and RWA dashboards on mock data
//! - Floating assistant with canned replies
//!
//! # Architecture
//!
//! Client-side rendered (CSR) Leptos application compiled to WebAssembly.
//! All behaviour lives in the `carboncredx` crate; components hold its state
//! machines in signals and wake them with `gloo-timers` when a deadline is due.

use leptos::*;

mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
