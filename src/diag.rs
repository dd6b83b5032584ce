//! Console Diagnostics
//!
//! Thin wrappers over `web_sys::console`. The non-wasm bodies are no-ops so
//! native unit tests can drive the route store and resolvers without a
//! browser console behind them.

/// Log a debug-level diagnostic.
pub fn debug(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::debug_1(&message.into());

    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}

/// Log an error-level diagnostic.
pub fn error(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&message.into());

    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}
