//! # client
//!
//! Leptos + WASM frontend for NeuroFit, a cognitive-training app shell.
//!
//! Contains the single-page UI (loading splash, login/register form, home
//! dashboard), its view state, and the account store that keeps user
//! records and the active session in browser `localStorage`.

pub mod account;
pub mod app;
pub mod catalog;
pub mod components;
pub mod error;
pub mod pages;
pub mod state;
pub mod storage;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
