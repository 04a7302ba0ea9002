//! Decoration configuration
//!
//! One options type feeds both front doors (markup splicing and tree
//! decoration). The two replacement kinds are mutually exclusive by
//! contract: the markup pipeline splices strings and cannot accept an
//! element template -- that misuse is the single configuration error the
//! crate surfaces.

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use thiserror::Error;

use super::node::VElement;

// ==================== TYPE DEFINITIONS ====================

/// What to put in place of each matched word
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum Replacement {
    /// Literal replacement string; may embed `$1` for the whole match
    Text(String),
    /// Element template cloned once per match. Children rules:
    /// empty children infer `$1`; a string child gets `$1` substituted;
    /// richer children are used verbatim (no substitution inside).
    Template(Rc<VElement>),
}

/// Decoration configuration shared by both pipelines.
///
/// An empty word list or a missing replacement makes decoration a
/// documented no-op, never an error.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct DecorateOptions {
    #[serde(default)]
    pub words: Vec<String>,
    #[serde(default)]
    pub replace: Option<Replacement>,
}

/// The one expected failure in the system: calling the markup pipeline
/// with a replacement kind it cannot splice.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum DecorError {
    #[error("markup decoration requires a string replacement, not an element template")]
    NonStringReplacement,
}

// ==================== MAIN IMPLEMENTATION ====================

impl DecorateOptions {
    /// Options with a string replacement
    pub fn with_text(words: &[&str], replace: impl Into<String>) -> Self {
        DecorateOptions {
            words: words.iter().map(|w| (*w).to_string()).collect(),
            replace: Some(Replacement::Text(replace.into())),
        }
    }

    /// Options with an element-template replacement
    pub fn with_template(words: &[&str], template: VElement) -> Self {
        DecorateOptions {
            words: words.iter().map(|w| (*w).to_string()).collect(),
            replace: Some(Replacement::Template(Rc::new(template))),
        }
    }

    /// True when decoration cannot change anything
    pub fn is_noop(&self) -> bool {
        self.words.is_empty() || self.replace.is_none()
    }
}

// ==================== TESTS ====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_detection() {
        assert!(DecorateOptions::default().is_noop());
        assert!(DecorateOptions::with_text(&[], "x").is_noop());
        let no_replace = DecorateOptions {
            words: vec!["word".to_string()],
            replace: None,
        };
        assert!(no_replace.is_noop());
        assert!(!DecorateOptions::with_text(&["word"], "x").is_noop());
    }

    #[test]
    fn test_options_deserialize_string_replacement() {
        let options: DecorateOptions =
            serde_json::from_str(r#"{"words":["More"],"replace":"<span>$1</span>"}"#)
                .expect("deserialize");
        assert_eq!(options.words, vec!["More"]);
        assert_eq!(
            options.replace,
            Some(Replacement::Text("<span>$1</span>".to_string()))
        );
    }

    #[test]
    fn test_options_deserialize_template_replacement() {
        let options: DecorateOptions = serde_json::from_str(
            r#"{"words":["More"],"replace":{"tag":"span","attrs":{"class":"glossary-word"}}}"#,
        )
        .expect("deserialize");
        match options.replace {
            Some(Replacement::Template(template)) => {
                assert_eq!(template.tag, "span");
                assert_eq!(template.attrs.get("class").map(String::as_str), Some("glossary-word"));
            }
            other => panic!("expected template replacement, got {:?}", other),
        }
    }
}
