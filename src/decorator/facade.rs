//! WASM facade - TextDecorator and document-level bindings
//!
//! JS-facing surface in two layers: a `TextDecorator` handle holding one
//! validated `DecorateOptions`, and free bindings that operate on the live
//! document. Conversions go through `serde-wasm-bindgen` for plain data
//! and `js-sys` reflection for listener entries (JS functions are not
//! serde values). Boundary failures become `JsValue` errors.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::listeners::{
    attach_listeners, decorate_dom_classes, detach_listeners, DomScope, EventListener,
};
use super::markup::decorate_markup;
use super::node::VNode;
use super::options::{DecorError, DecorateOptions};
use super::tree::decorate_tree;

// ==================== MAIN IMPLEMENTATION ====================

/// TextDecorator - glossary decoration entry point
///
/// Construct once with `{ words, replace }` options, then decorate HTML
/// strings or plain-data node trees with it.
#[wasm_bindgen]
pub struct TextDecorator {
    options: DecorateOptions,
}

impl TextDecorator {
    pub fn new(options: DecorateOptions) -> Self {
        TextDecorator { options }
    }

    pub fn options(&self) -> &DecorateOptions {
        &self.options
    }

    /// Decorate an HTML string (native API)
    pub fn decorate_html(&self, input: &str) -> Result<String, DecorError> {
        decorate_markup(input, &self.options)
    }

    /// Decorate a node tree (native API)
    pub fn decorate_node(&self, node: &VNode) -> VNode {
        decorate_tree(node, &self.options)
    }
}

// =============================================================================
// WASM Bindings
// =============================================================================

#[wasm_bindgen]
impl TextDecorator {
    /// Create from a JS options object: `{ words: string[], replace: string | element }`
    #[wasm_bindgen(constructor)]
    pub fn js_new(options: JsValue) -> Result<TextDecorator, JsValue> {
        let options: DecorateOptions = serde_wasm_bindgen::from_value(options)
            .map_err(|e| JsValue::from_str(&format!("Invalid decorate options: {}", e)))?;
        Ok(TextDecorator::new(options))
    }

    /// Decorate an HTML string (JS binding)
    #[wasm_bindgen(js_name = decorateHtml)]
    pub fn js_decorate_html(&self, input: &str) -> Result<String, JsValue> {
        self.decorate_html(input)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Decorate a plain-data node tree (JS binding)
    #[wasm_bindgen(js_name = decorateTree)]
    pub fn js_decorate_tree(&self, node: JsValue) -> Result<JsValue, JsValue> {
        let node: VNode = serde_wasm_bindgen::from_value(node)
            .map_err(|e| JsValue::from_str(&format!("Invalid node tree: {}", e)))?;
        let decorated = self.decorate_node(&node);
        serde_wasm_bindgen::to_value(&decorated).map_err(|e| {
            web_sys::console::error_1(
                &format!("[TextDecorator] Serialization failed: {:?}", e).into(),
            );
            JsValue::from_str(&format!("Serialization error: {}", e))
        })
    }
}

/// Attach handlers to every element bearing the class (JS binding).
/// `listeners` is one `{type, listener}` entry or an array of them.
#[wasm_bindgen(js_name = addEventListeners)]
pub fn js_add_event_listeners(class_name: &str, listeners: JsValue) -> Result<(), JsValue> {
    let listeners = listeners_from_js(&listeners)?;
    attach_listeners(&document_scope()?, class_name, &listeners);
    Ok(())
}

/// Remove handlers previously attached with `addEventListeners` (JS binding)
#[wasm_bindgen(js_name = removeEventListeners)]
pub fn js_remove_event_listeners(class_name: &str, listeners: JsValue) -> Result<(), JsValue> {
    let listeners = listeners_from_js(&listeners)?;
    detach_listeners(&document_scope()?, class_name, &listeners);
    Ok(())
}

/// Decorate the inner HTML of elements by class, then wire listeners onto
/// the word-class elements the replacement markup created (JS binding).
/// `text_classes` is a single class string or an array of classes.
#[wasm_bindgen(js_name = decorateDomClasses)]
pub fn js_decorate_dom_classes(
    text_classes: JsValue,
    options: JsValue,
    word_class: Option<String>,
    listeners: JsValue,
) -> Result<(), JsValue> {
    let classes: Vec<String> = match text_classes.as_string() {
        Some(single) => vec![single],
        None => serde_wasm_bindgen::from_value(text_classes)
            .map_err(|e| JsValue::from_str(&format!("Invalid text classes: {}", e)))?,
    };
    let options: DecorateOptions = serde_wasm_bindgen::from_value(options)
        .map_err(|e| JsValue::from_str(&format!("Invalid decorate options: {}", e)))?;
    let listeners = if listeners.is_undefined() || listeners.is_null() {
        Vec::new()
    } else {
        listeners_from_js(&listeners)?
    };
    let scope = document_scope()?;
    let class_refs: Vec<&str> = classes.iter().map(String::as_str).collect();
    decorate_dom_classes(
        &scope,
        &class_refs,
        &options,
        word_class.as_deref(),
        &listeners,
    )
    .map_err(|e| JsValue::from_str(&e.to_string()))
}

fn document_scope() -> Result<DomScope, JsValue> {
    DomScope::document().ok_or_else(|| JsValue::from_str("No browser document available"))
}

/// Accept one `{type, listener}` entry or an array of them
fn listeners_from_js(listeners: &JsValue) -> Result<Vec<EventListener<js_sys::Function>>, JsValue> {
    let array = if js_sys::Array::is_array(listeners) {
        js_sys::Array::from(listeners)
    } else {
        let single = js_sys::Array::new();
        single.push(listeners);
        single
    };
    let mut out = Vec::with_capacity(array.length() as usize);
    for entry in array.iter() {
        let event_type = js_sys::Reflect::get(&entry, &JsValue::from_str("type"))?
            .as_string()
            .ok_or_else(|| JsValue::from_str("Listener entry needs a string `type`"))?;
        let handler = js_sys::Reflect::get(&entry, &JsValue::from_str("listener"))?
            .dyn_into::<js_sys::Function>()
            .map_err(|_| JsValue::from_str("Listener entry needs a function `listener`"))?;
        out.push(EventListener::new(event_type, handler));
    }
    Ok(out)
}

// ==================== TESTS ====================


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn constructs_from_js_options() {
        let options = serde_wasm_bindgen::to_value(&DecorateOptions::with_text(&["word"], "X"))
            .expect("options to JsValue");
        let decorator = TextDecorator::js_new(options).expect("construct");
        assert_eq!(
            decorator.js_decorate_html("a word").expect("decorate"),
            "a X"
        );
    }
}
