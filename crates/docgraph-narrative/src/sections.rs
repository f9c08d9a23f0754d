//! Section segmentation over emphasis-delimited headings
//!
//! A section opens at an emphasis marker immediately followed by a
//! configured heading phrase and runs to the next configured heading or
//! end of input. Relation lines are themselves emphasis-wrapped, so
//! segmentation keys on the configured phrases, never on bare emphasis
//! pairs.

use crate::conventions::{EMPHASIS, SECTION_HEADINGS, SectionRole};

/// Body of the first section with the given role, or `None` when no such
/// heading occurs — an expected outcome, not an error
pub(crate) fn section(text: &str, role: SectionRole) -> Option<&str> {
    let markers = heading_markers(text);

    let start = markers
        .iter()
        .filter(|(_, r)| *r == role)
        .map(|(at, _)| *at)
        .min()?;

    // Body starts past the heading's line
    let body_start = text[start..]
        .find('\n')
        .map_or(text.len(), |nl| start + nl + 1);

    let end = markers
        .iter()
        .map(|(at, _)| *at)
        .filter(|at| *at > start)
        .min()
        .unwrap_or(text.len())
        .max(body_start);

    Some(&text[body_start..end])
}

/// Offsets of every configured heading occurrence
fn heading_markers(text: &str) -> Vec<(usize, SectionRole)> {
    let mut markers: Vec<(usize, SectionRole)> = SECTION_HEADINGS
        .iter()
        .flat_map(|(phrase, role)| {
            let needle = format!("{EMPHASIS}{phrase}");
            text.match_indices(&needle)
                .map(|(at, _)| (at, *role))
                .collect::<Vec<_>>()
        })
        .collect();
    markers.sort_unstable_by_key(|(at, _)| *at);
    markers
}
