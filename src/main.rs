//! THE UPGRADE SOCIETY — Ultimate Masterclass
//!
//! Marketing site for the masterclass built with Leptos (WASM).
//!
//! # Features
//!
//! - Hash-fragment routing across eight content pages
//! - YouTube hero sizzle + six testimonial embeds
//! - Stripe checkout links with a contact-page fallback
//! - Mailto-based contact and lead capture
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. There is no backend: all configuration is inline constant
//! data, checkout and mail delivery are delegated to external handlers.

use leptos::*;

mod app;
mod components;
mod config;
mod diag;
mod pages;
mod selfcheck;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Audit the inline configuration once at startup. Findings are logged
    // as a single structured diagnostic and never alter rendering.
    let report = selfcheck::run();
    if report.is_clean() {
        diag::debug("config self-check passed");
    } else {
        match serde_json::to_string(&report) {
            Ok(json) => diag::error(&format!("config self-check found issues: {}", json)),
            Err(e) => diag::error(&format!("config self-check report not serializable: {}", e)),
        }
    }

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
