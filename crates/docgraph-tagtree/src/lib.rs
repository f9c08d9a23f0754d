//! docgraph Tag Tree Recovery Engine
//!
//! Recovers a tree of named nodes from the quasi-XML region embedded in a
//! model's free-form response, tolerating the defects real model output
//! has: missing closers, stray closers, repeated sibling tags, self-closing
//! forms, and prose around the markup.
//!
//! # Core Operations
//!
//! - **Recover**: [`recover_tag_tree`] — raw text to best-effort tree plus
//!   an explicit truncation flag
//! - **Render**: [`render`] — deterministic depth-first print for
//!   verification tooling
//!
//! # Failure semantics
//!
//! The engine never errors on malformed input. No markup at all is an
//! expected outcome (`root: None`), and every local defect degrades to the
//! best partial tree rather than aborting the extraction.
//!
//! # Example
//!
//! ```rust
//! use docgraph_tagtree::recover_tag_tree;
//!
//! let raw = "Here you go:\n<resume>\n<name>Kirk F Truax</name>\n</resume>\nHope this helps!";
//! let recovery = recover_tag_tree(raw);
//!
//! let root = recovery.root.expect("structured region present");
//! assert_eq!(root.name(), "resume");
//! assert!(!recovery.truncated);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod boundary;
mod node;
mod parser;
mod render;

pub use boundary::strip_transcript;
pub use node::{NameError, NodeContent, TagName, TagNode};
pub use parser::{recover_fragments, recover_tag_tree, Recovery};
pub use render::render;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
