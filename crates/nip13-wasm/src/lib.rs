//! WebAssembly bindings for NIP-13 proof of work.
//!
//! This crate provides JavaScript-accessible APIs for:
//! - Counting and checking the difficulty of event ids
//! - Reading the committed difficulty of an event
//! - Mining an event to a target difficulty within a time budget

use wasm_bindgen::prelude::*;

pub mod clock;
pub mod miner;
pub mod state;

// Re-export main types for JS access
pub use clock::JsClock;
pub use miner::Miner;

/// Route Rust panics to the browser console when the hook is enabled.
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version of the proof-of-work bindings.
#[wasm_bindgen]
pub fn version() -> String {
    String::from(env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_matches_package() {
        assert_eq!(version(), env!("CARGO_PKG_VERSION"));
    }
}
