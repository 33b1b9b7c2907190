//! # musicsheet-ui
//!
//! Leptos + WASM frontend for the music sheet demo application.
//!
//! This crate contains the routing shell, the home and music sheet pages,
//! and a small browser-navigation helper. The music sheet page exists to
//! show client-side router navigation next to full browser navigation,
//! side by side.

pub mod app;
pub mod pages;
pub mod routes;
pub mod util;

/// WASM entry point — hydrates the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    leptos::mount::hydrate_body(App);
}
