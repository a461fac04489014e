//! WASM live-preview controller for the label-sheet generator page.
//!
//! This crate keeps the rendered PDF preview in sync with the form: it
//! debounces field changes, POSTs the form snapshot to the preview
//! endpoint, and renders the returned page images (or an error) into the
//! preview container. All state lives in Rust; the hosting page only
//! provides the DOM contract (form, container, loading indicator, and the
//! `auto-update` marker class on fields).
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { PreviewController } from './pkg/labelsheet_wasm.js';
//!
//! await init();
//!
//! // Default contract: #pdf-form, #preview-container, #loading-spinner,
//! // .auto-update fields, POST /preview, 500ms debounce.
//! const controller = PreviewController.attach();
//!
//! // Before navigating away without a reload:
//! controller.detach();
//! ```

pub mod config;
pub mod controller;
pub mod debounce;
pub mod net;
pub mod render;

use wasm_bindgen::prelude::*;

pub use config::PreviewConfig;
pub use controller::PreviewController;
pub use render::PreviewSurface;

/// Initialize the WASM module
/// Called automatically by wasm-bindgen
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Get the library version
#[wasm_bindgen]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_version() {
        assert!(!get_version().is_empty());
    }
}
