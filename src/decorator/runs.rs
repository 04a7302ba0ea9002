//! HTML text-run extraction
//!
//! Streams the markup source through `quick-xml` and records the byte span
//! of every character-data event. Tag syntax, attribute values, comments,
//! processing instructions, and doctypes never produce runs; only parsed
//! character data does. Spans come straight from the reader's buffer
//! positions, so they index the original source string and always sit on
//! markup delimiters (valid UTF-8 slice points).
//!
//! Invalid markup follows the recovered-parse contract: the reader is
//! configured to tolerate stray and mismatched closing tags, and a hard
//! reader error abandons further extraction while keeping the runs already
//! collected. Extraction never raises.

use quick_xml::events::Event;
use quick_xml::reader::Reader;
use serde::{Deserialize, Serialize};

// ==================== TYPE DEFINITIONS ====================

/// A contiguous span of character data in the markup source,
/// byte offsets `[start, end)`
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextRun {
    pub start: usize,
    pub end: usize,
}

// ==================== MAIN IMPLEMENTATION ====================

/// Collect the text runs of an HTML fragment in document order
pub fn extract_text_runs(input: &str) -> Vec<TextRun> {
    let mut reader = Reader::from_str(input);
    let config = reader.config_mut();
    config.check_end_names = false;
    config.allow_unmatched_ends = true;

    let mut runs = Vec::new();
    loop {
        let start = reader.buffer_position() as usize;
        match reader.read_event() {
            Ok(Event::Text(_)) => {
                let end = reader.buffer_position() as usize;
                if end > start {
                    runs.push(TextRun { start, end });
                }
            }
            Ok(Event::CData(_)) => {
                let end = reader.buffer_position() as usize;
                // trim the `<![CDATA[` and `]]>` delimiters off the span
                let (start, end) = (start + 9, end.saturating_sub(3));
                if end > start {
                    runs.push(TextRun { start, end });
                }
            }
            Ok(Event::Eof) => break,
            // elements, comments, PIs, doctypes: recurse past, no run
            Ok(_) => {}
            // recovered-parse contract: keep what we have
            Err(_) => break,
        }
    }
    runs
}

// ==================== TESTS ====================
