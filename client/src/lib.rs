//! # client
//!
//! Leptos + WASM frontend for the Industry-Readiness Combat Simulator.
//!
//! This crate contains pages, components, application state and the browser
//! HTTP client for the external assessment backend. Scoring, gap analysis and
//! scenario generation all happen server-side; this crate only collects input
//! and renders responses.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
