//! DryGripPro marketing site
//!
//! A Leptos site with two screens: the landing page and the checkout. The
//! `ssr` feature builds the axum server, `hydrate` builds the wasm bundle
//! that makes the plan selector and the referral input interactive.

pub mod app;
pub mod components;
pub mod pages;

#[cfg(feature = "ssr")]
pub mod config;
#[cfg(feature = "ssr")]
pub mod server;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    leptos::mount_to_body(app::App);
}
