//! Enterprise Insights Copilot - Main Entry Point
//!
//! Serves the navigation shell through Dioxus fullstack.
//! Uses dioxus::serve() pattern for dx serve compatibility.

use enterprise_insights_copilot::app::App;

// Server entry point - NO #[tokio::main], dioxus::serve() creates its own runtime
#[cfg(feature = "server")]
fn main() {
    // Set panic hook to print full backtrace
    std::panic::set_hook(Box::new(|panic_info| {
        let backtrace = std::backtrace::Backtrace::force_capture();
        eprintln!("\n=== PANIC CAUGHT ===");
        eprintln!("Panic info: {}", panic_info);
        eprintln!("Backtrace:\n{}", backtrace);
        eprintln!("=== END PANIC ===\n");
    }));

    // Initialize tracing BEFORE dioxus::serve
    enterprise_insights_copilot::shared::logging::init_tracing();

    tracing::info!("Starting Enterprise Insights Copilot...");

    dioxus::serve(|| async move {
        let router = dioxus::server::router(App);
        Ok(router)
    });
}

// WASM entry point (browser) - no server feature
#[cfg(all(not(feature = "server"), target_arch = "wasm32"))]
fn main() {
    web_sys::console::log_1(&"[WASM] Enterprise Insights Copilot - WASM initialized!".into());
    dioxus::launch(App);
}

// Native client (desktop) - no server feature, not WASM
#[cfg(all(not(feature = "server"), not(target_arch = "wasm32")))]
fn main() {
    dioxus::launch(App);
}
