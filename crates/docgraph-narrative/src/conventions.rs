//! Recognized prose conventions
//!
//! The extractor keys on a small table of textual conventions rather than
//! string literals scattered through control flow, so the convention set
//! can grow without touching the parsers.

/// Paired marker characters surrounding heading phrases and relation lines
pub(crate) const EMPHASIS: &str = "**";

/// Role a recognized section plays in extraction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SectionRole {
    /// Entity blocks with property lists
    Entities,
    /// Arrow-annotated relation lines
    Relations,
}

/// Heading phrase prefixes and the section role each one opens
///
/// Prefix match: `**Entities Found**` opens the entity section. Phrases
/// follow the schema wording the analysis prompt fixes.
pub(crate) const SECTION_HEADINGS: &[(&str, SectionRole)] = &[
    ("Entities", SectionRole::Entities),
    ("Relationships", SectionRole::Relations),
];

/// Marker separating an entity block's type name from its property list
pub(crate) const PROPERTIES_MARKER: &str = "Properties:";

/// Sub-heading introducing an entity's property lines, possibly repeated
/// within one block
pub(crate) const INSTANCE_HEADING: &str = "Entity instance";

/// Bullet marker opening a `key: value` property line
pub(crate) const PROPERTY_BULLET: char = '+';

/// Double-dash framing a relation label
pub(crate) const DOUBLE_DASH: &str = "--";

/// Arrow marker pointing at a relation's target
pub(crate) const ARROW: &str = "-->";
