//! Live-element helpers - listener wiring and DOM class decoration
//!
//! Markup decoration is pure string splicing, so it cannot wire event
//! handlers onto the elements it creates. Once the decorated HTML is in a
//! live view, `attach_listeners` registers handlers on every element
//! bearing the word class and `detach_listeners` reverses exactly that
//! registration. Neither touches the matching core.
//!
//! The live element collection is a collaborator behind the
//! `ElementScope` trait: the browser implementation (`DomScope`) talks to
//! the real document through `web-sys`, tests use an in-memory scope.

use super::markup::decorate_markup;
use super::options::{DecorError, DecorateOptions};

// ==================== TYPE DEFINITIONS ====================

/// One event registration: an event type plus the handler value for it
#[derive(Clone, Debug)]
pub struct EventListener<H> {
    pub event_type: String,
    pub handler: H,
}

impl<H> EventListener<H> {
    pub fn new(event_type: impl Into<String>, handler: H) -> Self {
        EventListener {
            event_type: event_type.into(),
            handler,
        }
    }
}

/// A scope that can enumerate live elements by class and manage their
/// handlers and inner markup. `Handler` values are cloned references:
/// detaching with the same handler value must reverse a prior attach.
pub trait ElementScope {
    type Element;
    type Handler: Clone;

    fn elements_with_class(&self, class_name: &str) -> Vec<Self::Element>;
    fn add_listener(&self, element: &Self::Element, event_type: &str, handler: &Self::Handler);
    fn remove_listener(&self, element: &Self::Element, event_type: &str, handler: &Self::Handler);
    fn inner_html(&self, element: &Self::Element) -> String;
    fn set_inner_html(&self, element: &Self::Element, html: &str);
}

// ==================== MAIN IMPLEMENTATION ====================

/// Register every listener on every element bearing the class.
/// No-op when the scope has no such elements.
pub fn attach_listeners<S: ElementScope>(
    scope: &S,
    class_name: &str,
    listeners: &[EventListener<S::Handler>],
) {
    for element in scope.elements_with_class(class_name) {
        for listener in listeners {
            scope.add_listener(&element, &listener.event_type, &listener.handler);
        }
    }
}

/// Exact inverse of `attach_listeners` for the same class, handlers, and
/// scope.
pub fn detach_listeners<S: ElementScope>(
    scope: &S,
    class_name: &str,
    listeners: &[EventListener<S::Handler>],
) {
    for element in scope.elements_with_class(class_name) {
        for listener in listeners {
            scope.remove_listener(&element, &listener.event_type, &listener.handler);
        }
    }
}

/// Decorate the inner HTML of every element bearing one of `text_classes`,
/// then attach `listeners` to the elements bearing `word_class` (the class
/// the replacement markup puts on each wrapped word).
///
/// Calling this repeatedly on the same elements nests decorations and
/// re-adds listeners; it is meant to run once, right after the content
/// renders.
pub fn decorate_dom_classes<S: ElementScope>(
    scope: &S,
    text_classes: &[&str],
    options: &DecorateOptions,
    word_class: Option<&str>,
    listeners: &[EventListener<S::Handler>],
) -> Result<(), DecorError> {
    for class_name in text_classes {
        for element in scope.elements_with_class(class_name) {
            let html = scope.inner_html(&element);
            let decorated = decorate_markup(&html, options)?;
            if decorated != html {
                scope.set_inner_html(&element, &decorated);
            }
        }
    }
    if let Some(word_class) = word_class {
        if !listeners.is_empty() {
            attach_listeners(scope, word_class, listeners);
        }
    }
    Ok(())
}

// ==================== BROWSER SCOPE ====================

enum DomRoot {
    Document(web_sys::Document),
    Element(web_sys::Element),
}

/// Browser-backed scope over the whole document or a container element
pub struct DomScope {
    root: DomRoot,
}

impl DomScope {
    /// Whole-document scope; `None` outside a browser context
    pub fn document() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(DomScope {
            root: DomRoot::Document(document),
        })
    }

    /// Scope limited to a container element
    pub fn container(element: web_sys::Element) -> Self {
        DomScope {
            root: DomRoot::Element(element),
        }
    }

    fn collection(&self, class_name: &str) -> web_sys::HtmlCollection {
        match &self.root {
            DomRoot::Document(document) => document.get_elements_by_class_name(class_name),
            DomRoot::Element(element) => element.get_elements_by_class_name(class_name),
        }
    }
}

impl ElementScope for DomScope {
    type Element = web_sys::Element;
    type Handler = js_sys::Function;

    fn elements_with_class(&self, class_name: &str) -> Vec<web_sys::Element> {
        let collection = self.collection(class_name);
        (0..collection.length())
            .filter_map(|i| collection.item(i))
            .collect()
    }

    fn add_listener(&self, element: &web_sys::Element, event_type: &str, handler: &js_sys::Function) {
        if let Err(e) = element.add_event_listener_with_callback(event_type, handler) {
            web_sys::console::error_1(&e);
        }
    }

    fn remove_listener(
        &self,
        element: &web_sys::Element,
        event_type: &str,
        handler: &js_sys::Function,
    ) {
        if let Err(e) = element.remove_event_listener_with_callback(event_type, handler) {
            web_sys::console::error_1(&e);
        }
    }

    fn inner_html(&self, element: &web_sys::Element) -> String {
        element.inner_html()
    }

    fn set_inner_html(&self, element: &web_sys::Element, html: &str) {
        element.set_inner_html(html);
    }
}

// ==================== TESTS ====================
