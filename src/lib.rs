//! # portfolio-client
//!
//! Leptos + WASM frontend for a personal portfolio site: a public marketing
//! surface (home, about, projects, blog, contact) and a token-gated admin
//! panel for managing projects, blog posts, gallery posts, and contact
//! messages against a remote CRUD API.
//!
//! The crate contains pages, components, application state (auth session and
//! the generic fetch hook), and the REST service layer. Browser-only code is
//! gated behind the `hydrate` feature with SSR stubs.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs panic/log hooks and hydrates the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
