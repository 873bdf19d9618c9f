//! Retouch WASM - WebAssembly bindings for Retouch
//!
//! This crate exposes the retouch-core edit session to JavaScript/TypeScript
//! applications. The page owns rendering; it forwards clicks and pointer
//! events to a `JsEditSession` and draws whatever `current()` returns.
//!
//! # Module Structure
//!
//! - `session` - The edit session (edits, undo/redo, crop gestures, export)
//! - `selection` - Stand-alone drag-to-crop mapping
//! - `types` - WASM-compatible wrapper types for images and rectangles
//! - `logger` - Forwards `log` records to the browser console
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsEditSession } from '@retouch/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const session = new JsEditSession();
//! session.open_bytes(new Uint8Array(await file.arrayBuffer()));
//! console.log(session.status_text());
//! ```

use wasm_bindgen::prelude::*;

mod logger;
mod selection;
mod session;
mod types;

// Re-export public types
pub use logger::set_log_level;
pub use selection::compute_crop_box;
pub use session::JsEditSession;
pub use types::{JsCropBox, JsEditImage};

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    logger::init_logger(log::LevelFilter::Info);
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
