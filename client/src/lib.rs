//! # forumhub-client
//!
//! Leptos + WASM frontend for the ForumHub "create post" flow.
//!
//! This crate contains the create-post page, its form state, the auth and
//! category context state it reads, and the `gloo-net` transport for the
//! shared `posts` submission flow. Browser-only code is behind the `csr`
//! feature so the state logic tests natively.

pub mod app;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install the panic hook and console logger, then mount.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
