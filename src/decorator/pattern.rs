//! Word-pattern compilation - vocabulary mini-language to one regex
//!
//! Each vocabulary word may use a restricted pattern syntax:
//! - `.` - any single character (`*` is not supported)
//! - `?` - makes the previous character optional
//! - `[', `]` - a character class, e.g. `[aeiou]`, when balanced
//!
//! Everything else regex-special is escaped to a literal, and a word whose
//! brackets are unbalanced gets its brackets escaped too. The surviving
//! words join into a single case-insensitive alternation anchored on word
//! boundaries: `(?:^|\b)(w1|w2|...)(?:\b|$)`.
//!
//! Malformed words never raise: a word that still fails to compile after
//! escaping degrades to a fully-escaped literal. The matcher is a per-call
//! value -- callers compile one per decoration pass and drop it.

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

// ==================== TYPE DEFINITIONS ====================

/// A matched span within a single text fragment, byte offsets `[start, end)`
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchSpan {
    pub start: usize,
    pub end: usize,
}

/// Compiled vocabulary matcher.
///
/// Holds `None` when the vocabulary compiled down to zero alternatives --
/// an empty alternation is invalid regex, so the zero-word case is guarded
/// here instead, and such a matcher never matches anything.
///
/// Word boundaries and case folding are Unicode-aware (the `regex` crate's
/// `\b` and `(?i)` semantics), which is broader than an ASCII-only engine.
#[derive(Clone, Debug)]
pub struct WordMatcher {
    regex: Option<Regex>,
}

// ==================== MAIN IMPLEMENTATION ====================

impl WordMatcher {
    /// Compile a vocabulary into one word-boundary-anchored alternation
    pub fn compile(words: &[String]) -> Self {
        let alternatives: Vec<String> = words
            .iter()
            .filter_map(|word| compile_word_pattern(word))
            .collect();
        if alternatives.is_empty() {
            return WordMatcher { regex: None };
        }
        let source = format!(r"(?:^|\b)({})(?:\b|$)", alternatives.join("|"));
        // Every alternative is validated in isolation and contains no bare
        // `|` or `)`, so the combined pattern compiles; `.ok()` keeps the
        // no-throw contract regardless.
        let regex = RegexBuilder::new(&source).case_insensitive(true).build().ok();
        WordMatcher { regex }
    }

    /// True when the vocabulary compiled to zero alternatives
    pub fn is_empty(&self) -> bool {
        self.regex.is_none()
    }

    /// Does the text contain at least one vocabulary word?
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.as_ref().is_some_and(|re| re.is_match(text))
    }

    /// All disjoint match spans in the text, in document order
    pub fn find_spans(&self, text: &str) -> Vec<MatchSpan> {
        match &self.regex {
            Some(re) => re
                .find_iter(text)
                .map(|m| MatchSpan {
                    start: m.start(),
                    end: m.end(),
                })
                .collect(),
            None => Vec::new(),
        }
    }

    /// Replace every match in `text` with `replacement`, which may embed
    /// `$1` for the whole matched word. Returns `Cow::Borrowed` when
    /// nothing matched, so callers can skip splicing unchanged text.
    pub fn replace_all<'t>(&self, text: &'t str, replacement: &str) -> Cow<'t, str> {
        match &self.regex {
            Some(re) => {
                let replacement = brace_backrefs(replacement);
                re.replace_all(text, replacement.as_ref())
            }
            None => Cow::Borrowed(text),
        }
    }
}

/// `$1` is the only supported placeholder. Brace it so a following word
/// character is not read as part of the capture name (`X$1Y` means
/// "group 1 then Y", not "group 1Y").
fn brace_backrefs(replacement: &str) -> Cow<'_, str> {
    if replacement.contains("$1") {
        Cow::Owned(replacement.replace("$1", "${1}"))
    } else {
        Cow::Borrowed(replacement)
    }
}

/// Left-to-right bracket balance scan. Unbalanced means the counter goes
/// negative or ends non-zero.
fn has_unbalanced_brackets(pattern: &str) -> bool {
    let mut depth: i32 = 0;
    for c in pattern.chars() {
        match c {
            '[' => depth += 1,
            ']' => {
                if depth <= 0 {
                    return true;
                }
                depth -= 1;
            }
            _ => {}
        }
    }
    depth != 0
}

/// Escape regex metacharacters, keeping `.` and `?` live and keeping
/// brackets live only when balanced.
fn escape_word_pattern(pattern: &str) -> String {
    let escape_brackets = has_unbalanced_brackets(pattern);
    let mut out = String::with_capacity(pattern.len() + 4);
    for c in pattern.chars() {
        match c {
            '-' | '/' | '{' | '}' | '(' | ')' | '*' | '+' | '\\' | '^' | '$' | '|' => {
                out.push('\\');
                out.push(c);
            }
            '[' | ']' if escape_brackets => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}

/// One vocabulary word to one validated alternative, or `None` when the
/// word contributes nothing.
fn compile_word_pattern(word: &str) -> Option<String> {
    let escaped = escape_word_pattern(word);
    if escaped.is_empty() {
        return None;
    }
    if Regex::new(&escaped).is_ok() {
        return Some(escaped);
    }
    // The mini-language form is still invalid regex (e.g. a leading `?`
    // with nothing to modify): degrade to literal matching.
    let literal = regex::escape(word);
    (!literal.is_empty()).then_some(literal)
}

// ==================== TESTS ====================
