//! Activity Board
//!
//! Browser front-end for Mergington High School's extracurricular
//! activities, built with Leptos (WASM).
//!
//! # Features
//!
//! - Activity cards with live availability
//! - Debounced search
//! - Participants panel with auto-hide
//! - Signup form with school email validation
//!
//! # Architecture
//!
//! A client-side rendered (CSR) Leptos application. All behavior lives in
//! `activity_board::BoardController`; this crate supplies the `fetch`
//! client, `setTimeout` timers and a signal-backed surface.

use leptos::*;

mod api;
mod app;
mod components;
mod logging;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();
    logging::init();

    mount_to_body(|| view! { <app::App /> });
}
