//! docgraph Narrative Record Extractor
//!
//! Turns loosely formatted analytical prose — emphasis-delimited section
//! headings, numbered entity blocks with bulleted property lists,
//! arrow-annotated relation lines — into typed [`Entity`] and [`Relation`]
//! records.
//!
//! Extraction is additive and order-preserving: records come back in
//! source order, duplicates and all. Malformed blocks and lines are
//! skipped silently; a missing section heading yields an empty list for
//! that half. The extractor never errors on probabilistic upstream text.
//!
//! # Example
//!
//! ```rust
//! use docgraph_narrative::extract_entities_and_relations;
//!
//! let analysis = "\
//! **Entities Found**
//! 1. **TechnicalSkill** Properties: name
//!    Entity instance:
//!    + name: Python
//!
//! **Relationships Identified**
//! 1. **WorkExperience --requires--> TechnicalSkill**
//! ";
//!
//! let extraction = extract_entities_and_relations(analysis);
//! assert_eq!(extraction.entities[0].kind, "TechnicalSkill");
//! assert_eq!(extraction.relations[0].kind, "requires");
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod conventions;
mod entities;
mod record;
mod relations;
mod sections;

pub use record::{Entity, Extraction, Relation};

use conventions::SectionRole;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Extract entity and relation records from a model's analytical prose
///
/// Pure and synchronous: operates on the in-memory string only. Empty or
/// unrecognizable input yields an empty [`Extraction`], never an error.
#[must_use]
pub fn extract_entities_and_relations(raw: &str) -> Extraction {
    let entities = sections::section(raw, SectionRole::Entities)
        .map(entities::parse_entities)
        .unwrap_or_default();
    let relations = sections::section(raw, SectionRole::Relations)
        .map(relations::parse_relations)
        .unwrap_or_default();
    tracing::debug!(
        "extracted {} entities and {} relations",
        entities.len(),
        relations.len()
    );
    Extraction {
        entities,
        relations,
    }
}
