//! Clinic Dashboard
//!
//! Browser client of the clinic application, built with Leptos (WASM).
//!
//! # Features
//!
//! - Login form exchanging credentials for session tokens
//! - Single-page dashboard switching between content panels
//! - Sidebar, user menu and logout
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Navigation, session and login logic live in the `clinic`
//! crate; this crate renders the markup and adapts the core's view, storage
//! and HTTP traits to Leptos signals, `localStorage` and `fetch`.

use leptos::*;

mod api;
mod app;
mod components;
mod logging;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    let config = state::config::load_config();
    logging::init(&config.logging.level);

    mount_to_body(move || view! { <app::App config=config /> });
}
