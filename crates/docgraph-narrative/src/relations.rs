//! Relation line parsing
//!
//! A line is a candidate only when it carries both the double-dash and the
//! arrow marker; candidates must then match the full shape
//! `**Source --label--> Target**`. Anything else is skipped silently — no
//! partial relation is ever emitted.

use crate::conventions::{ARROW, DOUBLE_DASH};
use crate::record::Relation;
use once_cell::sync::Lazy;
use regex::Regex;

/// `**Source --label--> Target**`, whitespace tolerant; numbered-list
/// prefixes fall outside the match
static RELATION_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\*\*\s*([A-Za-z][A-Za-z0-9_ ]*?)\s*--\s*([A-Za-z][A-Za-z0-9_ ]*?)\s*-->\s*([A-Za-z][A-Za-z0-9_ ]*?)\s*\*\*",
    )
    .expect("valid regex")
});

/// Parse every well-formed relation line in the section body, in line
/// order, duplicates preserved
pub(crate) fn parse_relations(section: &str) -> Vec<Relation> {
    section.lines().filter_map(parse_relation_line).collect()
}

fn parse_relation_line(line: &str) -> Option<Relation> {
    if !line.contains(DOUBLE_DASH) || !line.contains(ARROW) {
        return None;
    }
    let caps = RELATION_LINE.captures(line).or_else(|| {
        tracing::trace!("skipping malformed relation candidate: {line:?}");
        None
    })?;
    Some(Relation {
        from: caps[1].to_string(),
        to: caps[3].to_string(),
        kind: caps[2].to_string(),
    })
}
