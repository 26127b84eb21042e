//! # stacker-client
//!
//! Leptos + WASM frontend for the Stacker board game (a Connect-Four-style
//! two-player game). Replaces the React `client/` game component with a
//! Rust-native UI layer.
//!
//! The crate is pure UI glue: it renders the grid from server snapshots,
//! maps clicks to move intents, and sends them to the external game service.
//! All rules, legality, and turn resolution live server-side; the client
//! holds no authoritative state beyond the latest snapshot.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point for client-side hydration.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(crate::app::App);
}
