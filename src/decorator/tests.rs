//! Cross-cutting decoration properties
//!
//! End-to-end checks that exercise both front doors together: the markup
//! pipeline (pattern -> runs -> splice) and the tree pipeline
//! (pattern -> walk). Unit tests for the individual pieces live next to
//! the pieces.

use super::markup::decorate_markup;
use super::node::{VElement, VNode};
use super::options::DecorateOptions;
use super::tree::decorate_tree;

fn decorate(input: &str, words: &[&str], replace: &str) -> String {
    decorate_markup(input, &DecorateOptions::with_text(words, replace))
        .expect("string replacement never errors")
}

#[test]
fn structure_preserved_when_nothing_matches() {
    let inputs = [
        "Some Text",
        "Some <span>More</span> Text",
        "<div><p a=\"b\">x</p><!-- c --></div>",
        "<ul><li>one</li><li>two</li></ul>trailer",
        "<div></span></div>",
    ];
    for input in inputs {
        assert_eq!(decorate(input, &["absent"], "<b>$1</b>"), input);
    }
}

#[test]
fn tag_names_are_blind_to_the_vocabulary() {
    assert_eq!(
        decorate("span<span>div</span>", &["span"], "<b>$1</b>"),
        "<b>span</b><span>div</span>"
    );
}

#[test]
fn comment_content_is_blind_to_the_vocabulary() {
    let input = "Some <!-- More --> Text";
    assert_eq!(decorate(input, &["More"], "X"), input);
}

#[test]
fn matching_is_case_insensitive_and_case_preserving() {
    assert_eq!(
        decorate("Some Text with more text", &["More", "Text"], "<i>$1</i>"),
        "Some <i>Text</i> with <i>more</i> <i>text</i>"
    );
}

#[test]
fn wildcard_and_optional_patterns_work_end_to_end() {
    assert_eq!(
        decorate("Clouds make the sky cloudy.", &["cloud.?"], "<i>$1</i>"),
        "<i>Clouds</i> make the sky <i>cloudy</i>."
    );
}

#[test]
fn unbalanced_bracket_patterns_fall_back_to_literals() {
    let input = "They then them";
    assert_eq!(
        decorate(input, &["the[ym", "theym]", "the]ym["], "<i>$1</i>"),
        input
    );
}

#[test]
fn markup_and_tree_pipelines_agree_on_string_replacement() {
    let words = ["More", "Text"];
    let markup = decorate("Some Text with more text", &words, "($1)");
    let tree = decorate_tree(
        &VNode::text("Some Text with more text"),
        &DecorateOptions::with_text(&words, "($1)"),
    );
    assert_eq!(tree, VNode::text(markup.as_str()));
}

#[test]
fn unmatched_tree_is_returned_by_identity() {
    let tree = VNode::element(VElement::new("div").with_children(VNode::seq(vec![
        VNode::text("Some "),
        VNode::element(VElement::new("span").with_children(VNode::text("Text"))),
        VNode::Number(3.0),
    ])));
    let options = DecorateOptions::with_template(&["absent"], VElement::new("span"));
    assert!(decorate_tree(&tree, &options).same_node(&tree));
}

#[test]
fn whole_and_partial_matches_differ_in_node_shape() {
    let options = DecorateOptions::with_template(&["word"], VElement::new("span"));

    // whole-fragment match: one element, no wrapper sequence
    let whole = decorate_tree(&VNode::text("word"), &options);
    assert!(matches!(&whole, VNode::Element(e) if e.key.as_deref() == Some("word-0")));

    // mid-fragment match: [prefix, element, suffix]
    let partial = decorate_tree(&VNode::text("a word b"), &options);
    let VNode::Seq(nodes) = &partial else {
        panic!("expected sequence, got {:?}", partial);
    };
    assert_eq!(nodes.len(), 3);
    assert_eq!(nodes[0], VNode::text("a "));
    assert!(matches!(&nodes[1], VNode::Element(_)));
    assert_eq!(nodes[2], VNode::text(" b"));

    // boundary match: the empty gap is omitted, not an empty string
    let leading = decorate_tree(&VNode::text("word b"), &options);
    let VNode::Seq(nodes) = &leading else {
        panic!("expected sequence, got {:?}", leading);
    };
    assert_eq!(nodes.len(), 2);
}

#[test]
fn decorated_output_parses_back_with_expected_runs() {
    // the spliced markup is itself well-formed: re-extracting runs from it
    // finds the wrapped words as standalone text
    use super::runs::extract_text_runs;
    let output = decorate("Some Text with more text", &["More", "Text"], "<i>$1</i>");
    let runs = extract_text_runs(&output);
    let texts: Vec<&str> = runs.iter().map(|r| &output[r.start..r.end]).collect();
    assert_eq!(texts, vec!["Some ", "Text", " with ", "more", " ", "text"]);
}

#[test]
fn glossary_sized_vocabulary_over_page_sized_content() {
    let words: Vec<String> = (0..50).map(|i| format!("term{}", i)).collect();
    let word_refs: Vec<&str> = words.iter().map(String::as_str).collect();
    let page = "<p>about term7 and term33</p>".repeat(40);
    let result = decorate(&page, &word_refs, "<b>$1</b>");
    assert_eq!(
        result,
        "<p>about <b>term7</b> and <b>term33</b></p>".repeat(40)
    );
}
