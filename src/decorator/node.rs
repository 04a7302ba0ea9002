//! Framework-agnostic node trees
//!
//! A closed tagged union standing in for whatever the host UI framework uses
//! as its virtual DOM. Heap variants are `Rc`-backed so an unchanged subtree
//! can be returned as the same underlying node, and so "did anything change"
//! is a pointer comparison rather than a deep walk.
//!
//! Trees are immutable inputs: decoration never mutates a node, it either
//! hands back the original handle or allocates a new one.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::rc::Rc;

// ==================== TYPE DEFINITIONS ====================

/// One node of UI content: a primitive, a text fragment, an ordered
/// sequence of nodes, an element with children, or an opaque component
/// whose children cannot be introspected.
///
/// Serialized untagged so plain-data JS trees map onto it directly:
/// `null` / `true` / `1` / `"text"` / `[...]` / `{tag, ...}` / `{component}`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum VNode {
    Empty,
    Bool(bool),
    Number(f64),
    Text(Rc<str>),
    Seq(Rc<Vec<VNode>>),
    Element(Rc<VElement>),
    Opaque(Rc<OpaqueNode>),
}

/// An element node: tag name, attributes, optional reconciliation key,
/// and a child tree (which may itself be a sequence).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct VElement {
    pub tag: String,
    #[serde(default)]
    pub attrs: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default)]
    pub children: VNode,
}

/// A component boundary the decorator cannot see into. Returned unchanged
/// by every operation.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct OpaqueNode {
    /// Host-framework identifier for the component
    pub component: String,
}

impl Default for VNode {
    fn default() -> Self {
        VNode::Empty
    }
}

// ==================== MAIN IMPLEMENTATION ====================

impl VNode {
    /// Text node from any string-ish value
    pub fn text(value: impl AsRef<str>) -> Self {
        VNode::Text(Rc::from(value.as_ref()))
    }

    /// Sequence node from a list of children
    pub fn seq(children: Vec<VNode>) -> Self {
        VNode::Seq(Rc::new(children))
    }

    /// Element node from a built `VElement`
    pub fn element(element: VElement) -> Self {
        VNode::Element(Rc::new(element))
    }

    /// Identity comparison: true when `other` is the very same node --
    /// shared allocation for heap variants, equal value for primitives.
    /// This is the reference-equality check the decorator uses to decide
    /// whether a parent needs re-allocation.
    pub fn same_node(&self, other: &VNode) -> bool {
        match (self, other) {
            (VNode::Empty, VNode::Empty) => true,
            (VNode::Bool(a), VNode::Bool(b)) => a == b,
            (VNode::Number(a), VNode::Number(b)) => a == b,
            (VNode::Text(a), VNode::Text(b)) => Rc::ptr_eq(a, b),
            (VNode::Seq(a), VNode::Seq(b)) => Rc::ptr_eq(a, b),
            (VNode::Element(a), VNode::Element(b)) => Rc::ptr_eq(a, b),
            (VNode::Opaque(a), VNode::Opaque(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// True for the child shapes a replacement template treats as "empty":
    /// no children, an empty string, or an empty sequence.
    pub fn is_empty_children(&self) -> bool {
        match self {
            VNode::Empty => true,
            VNode::Text(text) => text.is_empty(),
            VNode::Seq(children) => children.is_empty(),
            _ => false,
        }
    }
}

impl VElement {
    /// Bare element with no attributes, key, or children
    pub fn new(tag: impl Into<String>) -> Self {
        VElement {
            tag: tag.into(),
            attrs: BTreeMap::new(),
            key: None,
            children: VNode::Empty,
        }
    }

    /// Builder-style attribute
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Builder-style children
    pub fn with_children(mut self, children: VNode) -> Self {
        self.children = children;
        self
    }
}

// ==================== TESTS ====================
