//! Rentboard: a property-rental marketplace client.
//!
//! ARCHITECTURE
//! ============
//! Client-rendered Leptos single-page app backed by a hosted identity and
//! record provider. `state::session` owns authentication, `util::guard`
//! gates protected routes, and `app` wires the route table. Native builds
//! (without the `csr` feature) compile the same modules with stubbed
//! network calls so the decision logic is testable off-browser.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: set up panic reporting and logging, then mount the
/// app to `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("mounting rentboard client");
    leptos::mount::mount_to_body(crate::app::App);
}
