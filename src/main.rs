//! J.A.R.V.I.S Console - Main Entry Point
//!
//! Web (WASM) entry: initializes the tracing subscriber and launches the
//! Dioxus application.

use jarvis_console::app::App;

fn main() {
    // Initialize logging BEFORE launch so startup is traced
    dioxus::logger::initialize_default();

    tracing::info!("Starting J.A.R.V.I.S console...");

    dioxus::launch(App);
}
