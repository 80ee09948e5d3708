//! NeuroGrow Web App
//!
//! Cognitive training frontend built with Leptos (WASM).
//!
//! # Features
//!
//! - Landing page with the "Start Training" entry point
//! - Cognitive profile dashboard rendered from mock data
//! - Memory pattern game driven by browser timers
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. The game engine is the `neurogrow` crate built without its
//! native runtime; this crate only supplies the timer and the rendering.

use leptos::*;

mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
