//! # client
//!
//! Leptos + WASM frontend for the moderation review console. Pages render
//! server-side through the `server` crate and hydrate in the browser, where
//! they talk to the same-origin `/api` surface.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
