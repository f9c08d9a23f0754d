//! Tolerant tag-tree construction
//!
//! One deterministic scanner replaces the pattern-matching approaches that
//! silently over- and under-match on messy model output. Matching is
//! balanced *per tag name*: only further opens and closes of the identical
//! name move the pending count, so nesting of unrelated names never steals
//! a closer.
//!
//! The scanner never fails outright. Stray closers are skipped, candidates
//! with invalid identifiers are plain text, and an unterminated open tag
//! swallows the rest of the region as its content and sets the truncation
//! flag.

use crate::boundary;
use crate::node::{TagName, TagNode};
use serde::{Deserialize, Serialize};

/// Outcome of a tag-tree recovery
///
/// `root` is `None` when the input holds no structured region at all — an
/// expected outcome for prose-only responses. `truncated` is set whenever
/// boundary detection or closer matching had to degrade to best effort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recovery {
    /// First top-level element of the region, if any
    pub root: Option<TagNode>,
    /// True when the recovered tree is best-effort partial data
    pub truncated: bool,
}

/// Recover a tag tree from raw model output
///
/// Locates the structured region inside surrounding prose, then builds the
/// tree bottom-up. Never panics or errors on malformed input; the worst
/// outcome is `root: None`.
#[must_use]
pub fn recover_tag_tree(raw: &str) -> Recovery {
    let (mut roots, truncated) = recover_fragments(raw);
    if roots.len() > 1 {
        tracing::debug!(
            "region held {} top-level elements, surfacing the first",
            roots.len()
        );
    }
    let root = if roots.is_empty() {
        None
    } else {
        Some(roots.swap_remove(0))
    };
    Recovery { root, truncated }
}

/// Recover every top-level element of the structured region, in document
/// order
///
/// Like [`recover_tag_tree`] but without the single-root view; useful when
/// the model emits sibling fragments instead of one wrapping element.
#[must_use]
pub fn recover_fragments(raw: &str) -> (Vec<TagNode>, bool) {
    let Some(region) = boundary::locate(raw) else {
        return (Vec::new(), false);
    };
    let mut truncated = region.truncated;
    let nodes = parse_sequence(region.text, &mut truncated);
    tracing::debug!(
        "recovered {} top-level element(s), truncated={truncated}",
        nodes.len()
    );
    (nodes, truncated)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MarkerKind {
    Open,
    Close,
    SelfClose,
}

/// One recognized tag marker, starting at a `<`
#[derive(Debug, Clone, PartialEq, Eq)]
struct Marker {
    kind: MarkerKind,
    name: TagName,
    /// Bytes consumed from the `<` through the closing `>`
    len: usize,
}

/// Length of the leading identifier in `s`, 0 when `s` does not start with
/// one
fn identifier_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    match bytes.first() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return 0,
    }
    bytes
        .iter()
        .take_while(|c| c.is_ascii_alphanumeric() || **c == b'_' || **c == b'-')
        .count()
}

/// Try to read a marker at `input`, which must start with `<`
///
/// Returns `None` when the candidate is not a tag (invalid identifier,
/// malformed closer, unterminated marker); the caller treats that `<` as
/// plain text.
fn parse_marker(input: &str) -> Option<Marker> {
    let rest = input.strip_prefix('<')?;

    if let Some(closer) = rest.strip_prefix('/') {
        let ident = identifier_len(closer);
        if ident == 0 || closer.as_bytes().get(ident) != Some(&b'>') {
            return None;
        }
        let name = closer[..ident].parse().ok()?;
        return Some(Marker {
            kind: MarkerKind::Close,
            name,
            // `<` + `/` + identifier + `>`
            len: ident + 3,
        });
    }

    let ident = identifier_len(rest);
    if ident == 0 {
        return None;
    }
    let name: TagName = rest[..ident].parse().ok()?;

    match rest.as_bytes().get(ident).copied() {
        Some(b'>') => Some(Marker {
            kind: MarkerKind::Open,
            name,
            len: ident + 2,
        }),
        Some(b'/' | b' ' | b'\t' | b'\r' | b'\n') => {
            // Attribute or self-closing tail; attributes are tolerated and
            // discarded, the recovered model is element-only.
            let tail = &rest[ident..];
            let gt = tail.find('>')?;
            if tail[..gt].contains('<') {
                return None;
            }
            let kind = if tail[..gt].trim_end().ends_with('/') {
                MarkerKind::SelfClose
            } else {
                MarkerKind::Open
            };
            Some(Marker {
                kind,
                name,
                len: ident + gt + 2,
            })
        }
        _ => None,
    }
}

/// Find the closer matching an already-consumed open of `name`
///
/// `input` starts immediately after the open marker. Balanced counting over
/// the same name only: further opens increment, closes decrement, resolve
/// at zero. Returns the closer's byte span, or `None` when the tag is never
/// terminated.
fn find_matching_close(input: &str, name: &str) -> Option<(usize, usize)> {
    let mut depth = 1usize;
    let mut i = 0;
    while let Some(off) = input[i..].find('<') {
        let pos = i + off;
        let Some(marker) = parse_marker(&input[pos..]) else {
            i = pos + 1;
            continue;
        };
        if marker.name == *name {
            match marker.kind {
                MarkerKind::Open => depth += 1,
                MarkerKind::Close => {
                    depth -= 1;
                    if depth == 0 {
                        return Some((pos, pos + marker.len));
                    }
                }
                MarkerKind::SelfClose => {}
            }
        }
        i = pos + marker.len;
    }
    None
}

/// Parse a run of sibling elements out of `input`
///
/// Stray closers at this level are skipped. An unterminated open consumes
/// the remainder as its content, sets `truncated`, and ends the run.
fn parse_sequence(input: &str, truncated: &mut bool) -> Vec<TagNode> {
    let mut nodes = Vec::new();
    let mut i = 0;
    while let Some(off) = input[i..].find('<') {
        let pos = i + off;
        let Some(marker) = parse_marker(&input[pos..]) else {
            i = pos + 1;
            continue;
        };
        match marker.kind {
            MarkerKind::Close => {
                // Stray or unbalanced closer at this level
                i = pos + marker.len;
            }
            MarkerKind::SelfClose => {
                nodes.push(TagNode::empty(marker.name));
                i = pos + marker.len;
            }
            MarkerKind::Open => {
                let content_start = pos + marker.len;
                match find_matching_close(&input[content_start..], marker.name.as_str()) {
                    Some((close_start, close_end)) => {
                        let inner = &input[content_start..content_start + close_start];
                        nodes.push(build_node(marker.name, inner, truncated));
                        i = content_start + close_end;
                    }
                    None => {
                        tracing::trace!(
                            "tag <{}> never terminated, taking trailing content",
                            marker.name
                        );
                        *truncated = true;
                        nodes.push(build_node(marker.name, &input[content_start..], truncated));
                        break;
                    }
                }
            }
        }
    }
    nodes
}

/// Build a node from captured inner text: recurse for children, fall back
/// to trimmed text when no child tags are found
fn build_node(name: TagName, inner: &str, truncated: &mut bool) -> TagNode {
    let children = parse_sequence(inner, truncated);
    if children.is_empty() {
        TagNode::text(name, inner)
    } else {
        TagNode::with_children(name, children)
    }
}
