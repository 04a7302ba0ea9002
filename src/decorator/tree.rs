//! Tree-node decoration
//!
//! Walks a `VNode` tree and replaces matched text fragments with
//! replacement nodes, preserving node identity for every subtree the walk
//! leaves untouched. The walk never mutates its input: each step returns
//! either the original handle or a freshly built node, and parents
//! re-allocate only when a child actually changed.
//!
//! Decoration is not idempotent in general: if the replacement content
//! itself still matches the vocabulary, running the decorator over its own
//! output wraps the matches again.

use std::borrow::Cow;
use std::rc::Rc;

use super::node::{VElement, VNode};
use super::options::{DecorateOptions, Replacement};
use super::pattern::WordMatcher;

// ==================== MAIN IMPLEMENTATION ====================

/// Decorate a node tree. Returns the input handle unchanged when the
/// options are a no-op or nothing matches anywhere.
pub fn decorate_tree(node: &VNode, options: &DecorateOptions) -> VNode {
    let replace = match (&options.replace, options.words.is_empty()) {
        (Some(replace), false) => replace,
        _ => return node.clone(),
    };
    let matcher = WordMatcher::compile(&options.words);
    if matcher.is_empty() {
        return node.clone();
    }
    decorate_node(node, &matcher, replace)
}

/// Decorate whatever child tree the caller holds. Convenience form for
/// callers sitting on a children value rather than a single root node.
pub fn decorate_children(children: &VNode, options: &DecorateOptions) -> VNode {
    decorate_tree(children, options)
}

/// Wraps a render function and decorates whatever it produces on every
/// `render()` call.
pub struct DecoratedRender<F> {
    render: F,
    options: DecorateOptions,
}

impl<F> DecoratedRender<F>
where
    F: Fn() -> VNode,
{
    pub fn new(render: F, options: DecorateOptions) -> Self {
        DecoratedRender { render, options }
    }

    pub fn render(&self) -> VNode {
        decorate_tree(&(self.render)(), &self.options)
    }
}

fn decorate_node(node: &VNode, matcher: &WordMatcher, replace: &Replacement) -> VNode {
    match node {
        // leaves the walk cannot (or must not) enter
        VNode::Empty | VNode::Bool(_) | VNode::Number(_) | VNode::Opaque(_) => node.clone(),
        VNode::Text(text) => decorate_text(node, text, matcher, replace),
        VNode::Seq(children) => decorate_seq(node, children, matcher, replace),
        VNode::Element(element) => {
            let new_children = decorate_node(&element.children, matcher, replace);
            if new_children.same_node(&element.children) {
                return node.clone();
            }
            // shallow clone: children swap, everything else carries over,
            // and no key is forced onto the element itself
            VNode::Element(Rc::new(VElement {
                tag: element.tag.clone(),
                attrs: element.attrs.clone(),
                key: element.key.clone(),
                children: new_children,
            }))
        }
    }
}

fn decorate_text(node: &VNode, text: &Rc<str>, matcher: &WordMatcher, replace: &Replacement) -> VNode {
    let template = match replace {
        Replacement::Text(replace_str) => {
            // string mode: one substitution pass over the whole fragment
            return match matcher.replace_all(text, replace_str) {
                Cow::Borrowed(_) => node.clone(),
                Cow::Owned(new_text) => VNode::Text(Rc::from(new_text)),
            };
        }
        Replacement::Template(template) => template,
    };

    let spans = matcher.find_spans(text);
    if spans.is_empty() {
        return node.clone();
    }

    // whole-fragment match: a single replacement element, no wrapper
    if spans.len() == 1 && spans[0].start == 0 && spans[0].end == text.len() {
        return VNode::Element(Rc::new(replace_element(template, text, 0, matcher)));
    }

    // partial matches: alternate gap text and keyed replacement elements,
    // omitting boundary gaps rather than emitting empty strings
    let mut nodes: Vec<VNode> = Vec::with_capacity(spans.len() * 2 + 1);
    let mut prev_end = 0;
    for (index, span) in spans.iter().enumerate() {
        if span.start > prev_end {
            nodes.push(VNode::Text(Rc::from(&text[prev_end..span.start])));
        }
        let matched = &text[span.start..span.end];
        nodes.push(VNode::Element(Rc::new(replace_element(
            template, matched, index, matcher,
        ))));
        prev_end = span.end;
    }
    if prev_end < text.len() {
        nodes.push(VNode::Text(Rc::from(&text[prev_end..])));
    }
    VNode::Seq(Rc::new(nodes))
}

/// Clone the template for one match, keyed `{match}-{index}` where the
/// index counts matches within the current text fragment.
///
/// Children rules: empty children infer `$1` (the match becomes the sole
/// child); a string child gets the match substituted into its `$1`
/// placeholder; richer children are used verbatim -- `$1` is NOT
/// substituted inside nested replacement content.
fn replace_element(
    template: &VElement,
    matched: &str,
    index: usize,
    matcher: &WordMatcher,
) -> VElement {
    let children = if template.children.is_empty_children() {
        VNode::Text(Rc::from(matched))
    } else if let VNode::Text(child) = &template.children {
        VNode::Text(Rc::from(matcher.replace_all(matched, child).into_owned()))
    } else {
        template.children.clone()
    };
    VElement {
        tag: template.tag.clone(),
        attrs: template.attrs.clone(),
        key: Some(format!("{}-{}", matched, index)),
        children,
    }
}

fn decorate_seq(
    node: &VNode,
    children: &Rc<Vec<VNode>>,
    matcher: &WordMatcher,
    replace: &Replacement,
) -> VNode {
    let mut out: Vec<VNode> = Vec::with_capacity(children.len());
    let mut changed = false;
    for child in children.iter() {
        match decorate_node(child, matcher, replace) {
            // a split string expands in place instead of nesting a sequence
            VNode::Seq(items) => {
                changed = true;
                out.extend(items.iter().cloned());
            }
            decorated => {
                if !decorated.same_node(child) {
                    changed = true;
                }
                out.push(decorated);
            }
        }
    }
    if changed {
        VNode::Seq(Rc::new(out))
    } else {
        node.clone()
    }
}

// ==================== TESTS ====================
