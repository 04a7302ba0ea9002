//! GlossCore: Text Decoration Engine
//!
//! A Rust/WASM library that finds vocabulary words in HTML strings or
//! plain-data node trees and wraps each match in replacement markup,
//! without ever touching tag names, attributes, or comments.
//!
//! # Architecture
//!
//! ## Decorator Components
//! - `pattern.rs` - WordMatcher: vocabulary compilation into one alternation regex
//! - `runs.rs` - Text-run extraction: byte spans of text between tags
//! - `markup.rs` - HTML-string decoration via reverse-order splicing
//! - `node.rs` - VNode/VElement: the plain-data node tree model
//! - `tree.rs` - Node-tree decoration with identity-preserving walks
//! - `options.rs` - DecorateOptions and replacement kinds
//! - `listeners.rs` - Live-element listener wiring and class decoration
//! - `facade.rs` - TextDecorator handle and document-level JS bindings
//!
//! # Usage (WASM)
//! ```javascript,ignore
//! import init, { TextDecorator, decorateDomClasses } from 'glosscore';
//!
//! await init();
//!
//! const decorator = new TextDecorator({
//!   words: ['cloud.?', 'vapor'],
//!   replace: '<span class="glossary-word">$1</span>'
//! });
//!
//! // Decorate an HTML string
//! const html = decorator.decorateHtml('Clouds make the sky cloudy.');
//!
//! // Or decorate rendered content in place and wire up handlers
//! decorateDomClasses('prose', {
//!   words: ['cloud.?', 'vapor'],
//!   replace: '<span class="glossary-word">$1</span>'
//! }, 'glossary-word', [{ type: 'click', listener: showDefinition }]);
//! ```

pub mod decorator;

pub use decorator::*;

use wasm_bindgen::prelude::*;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator for smaller WASM bundle size.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Get version information
#[wasm_bindgen]
pub fn version() -> String {
    format!("glosscore v{}", env!("CARGO_PKG_VERSION"))
}
