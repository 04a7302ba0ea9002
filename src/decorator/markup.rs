//! HTML markup decoration - text-run splicing
//!
//! Applies the compiled matcher to each text run of the source string and
//! splices the replacements in place. Runs are processed in reverse
//! document order: edits land at the highest offsets first, so the stored
//! offsets of earlier runs stay valid in the working string and no offset
//! remapping is ever needed.
//!
//! The replacement must be a string (it is spliced into markup); an
//! element template here is the one configuration misuse the crate
//! reports as an error.

use std::borrow::Cow;

use super::options::{DecorError, DecorateOptions, Replacement};
use super::pattern::WordMatcher;
use super::runs::extract_text_runs;

// ==================== MAIN IMPLEMENTATION ====================

/// Decorate the text content of an HTML string, leaving tags, attributes,
/// and comments untouched. With no matching words the input comes back
/// byte-for-byte.
pub fn decorate_markup(input: &str, options: &DecorateOptions) -> Result<String, DecorError> {
    let replace = match &options.replace {
        None => return Ok(input.to_string()),
        Some(Replacement::Text(replace)) => replace,
        Some(Replacement::Template(_)) => return Err(DecorError::NonStringReplacement),
    };

    let matcher = WordMatcher::compile(&options.words);
    if matcher.is_empty() {
        return Ok(input.to_string());
    }

    let runs = extract_text_runs(input);
    let mut result = input.to_string();
    for run in runs.iter().rev() {
        let new_text = match matcher.replace_all(&result[run.start..run.end], replace) {
            // unchanged run: skip the splice entirely
            Cow::Borrowed(_) => continue,
            Cow::Owned(new_text) => new_text,
        };
        // empty prefix at string start / empty suffix at string end fall
        // out of the slicing naturally
        let mut next = String::with_capacity(result.len() + new_text.len());
        next.push_str(&result[..run.start]);
        next.push_str(&new_text);
        next.push_str(&result[run.end..]);
        result = next;
    }
    Ok(result)
}

// ==================== TESTS ====================
