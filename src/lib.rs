//! # skillforge-client
//!
//! Leptos + WASM frontend for the SkillForge learning platform: course
//! catalog, gamified profile, leaderboard, and the authentication modals
//! that drive them.
//!
//! The crate is organized around a single source of truth for "is someone
//! signed in here" — `state::session` — with pages, components, network
//! exchanges, and browser glue layered around it.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs the panic hook, wires the `log` facade to
/// the console, and hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
