//! Deterministic tree rendering
//!
//! Depth-first printer for recovered trees, used by verification tooling.
//! Pure function of the tree: no parsing, no side effects. Re-parsing the
//! rendered form reproduces an isomorphic tree.

use crate::node::{NodeContent, TagNode};
use std::fmt;

const INDENT: &str = "  ";

/// Render a tree to its markup form
///
/// Open and close markers each on their own line, indentation proportional
/// to depth, leaf text one level deeper than its markers. Empty elements
/// render self-closing.
#[must_use]
pub fn render(node: &TagNode) -> String {
    let mut out = String::new();
    render_into(node, 0, &mut out);
    out
}

fn render_into(node: &TagNode, depth: usize, out: &mut String) {
    let indent = INDENT.repeat(depth);
    match node.content() {
        NodeContent::Empty => {
            out.push_str(&indent);
            out.push('<');
            out.push_str(node.name().as_str());
            out.push_str("/>\n");
        }
        NodeContent::Text(text) => {
            open_marker(node, &indent, out);
            out.push_str(&indent);
            out.push_str(INDENT);
            out.push_str(text);
            out.push('\n');
            close_marker(node, &indent, out);
        }
        NodeContent::Children(children) => {
            open_marker(node, &indent, out);
            for child in children {
                render_into(child, depth + 1, out);
            }
            close_marker(node, &indent, out);
        }
    }
}

fn open_marker(node: &TagNode, indent: &str, out: &mut String) {
    out.push_str(indent);
    out.push('<');
    out.push_str(node.name().as_str());
    out.push_str(">\n");
}

fn close_marker(node: &TagNode, indent: &str, out: &mut String) {
    out.push_str(indent);
    out.push_str("</");
    out.push_str(node.name().as_str());
    out.push_str(">\n");
}

impl fmt::Display for TagNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}
