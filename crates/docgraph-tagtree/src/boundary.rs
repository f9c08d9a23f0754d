//! Structured-region boundary detection
//!
//! Model responses wrap the markup region in free prose. The region starts
//! at the first token shaped like an opening tag and ends at the end of the
//! last line-terminal closing tag. A missing end boundary does not abort
//! recovery; the region degrades to "rest of the input" and the recovery is
//! flagged truncated.

use once_cell::sync::Lazy;
use regex::Regex;

/// Opening-tag shape: `<` + identifier + (`>`, whitespace, or `/`)
static OPEN_CANDIDATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[A-Za-z][A-Za-z0-9_-]*[>\s/]").expect("valid regex"));

/// Well-formed closing tag anchored to end-of-line, trailing blanks allowed
static LINE_TERMINAL_CLOSER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)(</[A-Za-z][A-Za-z0-9_-]*>)[ \t]*$").expect("valid regex"));

/// Transcript markers that precede the model's answer; everything up to and
/// including the marker's line is preamble.
const RESPONSE_MARKERS: &[&str] = &["=== Response ===", "Resume Data:"];

/// Transcript markers that open trailing instructions; everything from the
/// marker on is postamble.
const TRAILER_MARKERS: &[&str] = &["Please provide"];

/// The markup region located inside a larger text blob
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Region<'a> {
    /// Substring holding the markup
    pub(crate) text: &'a str,
    /// True when no end boundary was found and the region runs to the end
    /// of the input
    pub(crate) truncated: bool,
}

/// Locate the structured region within `text`
///
/// Returns `None` when no opening candidate exists anywhere — the expected
/// outcome for prose-only responses, not an error.
pub(crate) fn locate(text: &str) -> Option<Region<'_>> {
    let start = OPEN_CANDIDATE.find(text)?.start();

    let end = LINE_TERMINAL_CLOSER
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.end())
        .filter(|&end| end > start)
        .last();

    match end {
        Some(end) => Some(Region {
            text: &text[start..end],
            truncated: false,
        }),
        None => {
            tracing::debug!("no line-terminal closer after offset {start}, taking rest of input");
            Some(Region {
                text: text[start..].trim_end(),
                truncated: true,
            })
        }
    }
}

/// Cut a saved model transcript down to the answer body
///
/// Drops everything up to and including the last response-section marker
/// line, and everything from the first trailing-instruction marker on. Text
/// without markers passes through unchanged. Purely lexical; callers decide
/// whether their input is a transcript at all.
#[must_use]
pub fn strip_transcript(text: &str) -> &str {
    let mut body = text;

    if let Some(at) = RESPONSE_MARKERS
        .iter()
        .filter_map(|marker| body.rfind(marker).map(|at| at + marker.len()))
        .max()
    {
        let after_line = body[at..]
            .find('\n')
            .map_or(body.len(), |nl| at + nl + 1);
        body = &body[after_line..];
    }

    if let Some(at) = TRAILER_MARKERS
        .iter()
        .filter_map(|marker| body.find(marker))
        .min()
    {
        body = &body[..at];
    }

    body.trim()
}
