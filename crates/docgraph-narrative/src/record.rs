//! Extracted record types
//!
//! Entities and relations are value types: no identity beyond their
//! fields, no cross-references, no back-pointers.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One categorized item recovered from an entity block
///
/// Never surfaced with an empty property map — a block without
/// recoverable properties is not a signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Category name, e.g. `TechnicalSkill` or `WorkExperience`
    #[serde(rename = "type")]
    pub kind: String,
    /// Key-value attributes in the order they appeared in the block
    pub properties: IndexMap<String, String>,
}

/// A directed, typed link between two named entities
///
/// All three fields are non-empty by construction; malformed relation
/// lines are skipped rather than emitted as partial records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relation {
    /// Source entity name
    pub from: String,
    /// Target entity name
    pub to: String,
    /// Label framed by the arrow markers
    #[serde(rename = "type")]
    pub kind: String,
}

/// Everything one extraction pass recovered, in source order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
    /// Entity records, one per recognized block
    pub entities: Vec<Entity>,
    /// Relation records, one per well-formed relation line
    pub relations: Vec<Relation>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_serializes_with_type_field_and_ordered_properties() {
        let mut properties = IndexMap::new();
        properties.insert("name".to_string(), "Python".to_string());
        properties.insert("proficiency".to_string(), "Proficient".to_string());
        let entity = Entity {
            kind: "TechnicalSkill".to_string(),
            properties,
        };

        let json = serde_json::to_string(&entity).unwrap();
        assert_eq!(
            json,
            r#"{"type":"TechnicalSkill","properties":{"name":"Python","proficiency":"Proficient"}}"#
        );
    }

    #[test]
    fn relation_serializes_with_type_field() {
        let relation = Relation {
            from: "WorkExperience".to_string(),
            to: "TechnicalSkill".to_string(),
            kind: "requires".to_string(),
        };
        let json = serde_json::to_string(&relation).unwrap();
        assert_eq!(
            json,
            r#"{"from":"WorkExperience","to":"TechnicalSkill","type":"requires"}"#
        );
    }

    #[test]
    fn extraction_default_is_empty() {
        let extraction = Extraction::default();
        assert!(extraction.entities.is_empty());
        assert!(extraction.relations.is_empty());
    }
}
