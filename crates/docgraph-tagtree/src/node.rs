//! Recovered tag-tree node types
//!
//! A [`TagNode`] is one markup element recovered from unreliable model
//! output. Content is element-only: a node holds either raw inner text or
//! an ordered child sequence, never both.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Errors constructing a [`TagName`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NameError {
    /// Name was empty
    #[error("tag name is empty")]
    Empty,

    /// Name did not match the identifier grammar
    #[error("invalid tag name: '{0}'")]
    InvalidIdentifier(String),
}

/// Validated tag identifier
///
/// Grammar: an ASCII letter followed by letters, digits, `_` or `-`.
/// Candidates outside this grammar are plain text to the recovery engine,
/// never tags.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TagName(String);

impl TagName {
    /// Name as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check a candidate against the identifier grammar without allocating
    #[must_use]
    pub fn is_valid(candidate: &str) -> bool {
        let mut chars = candidate.chars();
        match chars.next() {
            Some(c) if c.is_ascii_alphabetic() => {}
            _ => return false,
        }
        chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    }
}

impl FromStr for TagName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(NameError::Empty);
        }
        if !Self::is_valid(s) {
            return Err(NameError::InvalidIdentifier(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for TagName {
    type Error = NameError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<TagName> for String {
    fn from(name: TagName) -> Self {
        name.0
    }
}

impl fmt::Display for TagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for TagName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for TagName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Node payload: raw text, child elements, or nothing
///
/// Encodes the recovery invariant directly: text and children are mutually
/// exclusive, and a self-closing element has neither.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeContent {
    /// Self-closing or fully empty element
    Empty,
    /// Raw inner text, trimmed of surrounding whitespace
    Text(String),
    /// Child elements in document order; repeated sibling names stay
    /// separate entries
    Children(Vec<TagNode>),
}

/// One markup element recovered from text
///
/// Constructed bottom-up by the recovery engine as matching closers are
/// found; immutable once returned. The root is owned by the caller; every
/// other node is owned by its parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagNode {
    name: TagName,
    content: NodeContent,
}

impl TagNode {
    /// Element with no text and no children
    #[inline]
    #[must_use]
    pub fn empty(name: TagName) -> Self {
        Self {
            name,
            content: NodeContent::Empty,
        }
    }

    /// Leaf element with raw inner text
    ///
    /// Text that trims to nothing yields an empty element instead.
    #[must_use]
    pub fn text(name: TagName, text: impl Into<String>) -> Self {
        let text = text.into();
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Self::empty(name);
        }
        Self {
            name,
            content: NodeContent::Text(trimmed.to_string()),
        }
    }

    /// Interior element with ordered children
    ///
    /// An empty child sequence yields an empty element instead.
    #[must_use]
    pub fn with_children(name: TagName, children: Vec<TagNode>) -> Self {
        if children.is_empty() {
            return Self::empty(name);
        }
        Self {
            name,
            content: NodeContent::Children(children),
        }
    }

    /// Element name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &TagName {
        &self.name
    }

    /// Node payload
    #[inline]
    #[must_use]
    pub fn content(&self) -> &NodeContent {
        &self.content
    }

    /// Inner text, if this is a text leaf
    #[must_use]
    pub fn text_content(&self) -> Option<&str> {
        match &self.content {
            NodeContent::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Child elements; empty slice for text leaves and empty elements
    #[must_use]
    pub fn children(&self) -> &[TagNode] {
        match &self.content {
            NodeContent::Children(children) => children,
            _ => &[],
        }
    }

    /// Whether this element has neither text nor children
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self.content, NodeContent::Empty)
    }

    /// First child with the given name, in document order
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&TagNode> {
        self.children().iter().find(|c| c.name == *name)
    }

    /// All children with the given name, in document order
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a TagNode> {
        self.children().iter().filter(move |c| c.name == *name)
    }
}
