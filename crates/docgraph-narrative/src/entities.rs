//! Entity block parsing
//!
//! Blocks are separated by the numbered/emphasis marker (`3. **`). A
//! block's type name precedes the `Properties:` marker; its property lines
//! sit under the (possibly repeated) `Entity instance` sub-heading as
//! bulleted `key: value` pairs. Malformed blocks and lines are skipped,
//! never surfaced as failures.

use crate::conventions::{INSTANCE_HEADING, PROPERTIES_MARKER, PROPERTY_BULLET};
use crate::record::Entity;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

/// Numbered/emphasis marker opening an entity block
static BLOCK_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+\.\s*\*\*").expect("valid regex"));

/// Parse every recognizable entity block in the section body, in block
/// order
pub(crate) fn parse_entities(section: &str) -> Vec<Entity> {
    let marks: Vec<_> = BLOCK_MARKER.find_iter(section).collect();
    let mut entities = Vec::new();
    for (i, mark) in marks.iter().enumerate() {
        let block_end = marks.get(i + 1).map_or(section.len(), |next| next.start());
        let block = &section[mark.end()..block_end];
        if let Some(entity) = parse_block(block) {
            entities.push(entity);
        } else {
            tracing::trace!("skipping unrecognizable entity block at offset {}", mark.start());
        }
    }
    entities
}

/// Parse one block; `None` when the block has no `Properties:` marker, no
/// instance sub-heading, or no recoverable property lines
fn parse_block(block: &str) -> Option<Entity> {
    let props_at = block.find(PROPERTIES_MARKER)?;
    let kind = block[..props_at]
        .trim_matches(|c: char| c.is_whitespace() || c == '*' || c == '-')
        .to_string();
    if kind.is_empty() {
        return None;
    }

    let instance_at = block.find(INSTANCE_HEADING)?;
    let mut properties = IndexMap::new();
    for line in block[instance_at..].lines() {
        if let Some((key, value)) = parse_property_line(line) {
            // Repeated keys keep their first position, last value wins
            properties.insert(key, value);
        }
    }

    if properties.is_empty() {
        return None;
    }
    Some(Entity { kind, properties })
}

/// Recognize a bulleted property line holding exactly one `key: value`
/// pair
fn parse_property_line(line: &str) -> Option<(String, String)> {
    let bullet_at = line.find(PROPERTY_BULLET)?;
    let rest = &line[bullet_at + PROPERTY_BULLET.len_utf8()..];
    if rest.matches(':').count() != 1 {
        return None;
    }
    let (key, value) = rest.split_once(':')?;
    let (key, value) = (key.trim(), value.trim());
    if key.is_empty() || value.is_empty() {
        return None;
    }
    Some((key.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_block_with_properties() {
        let section = "\n1. **TechnicalSkill** - Properties: name, proficiency\n   Entity instance 1:\n   + name: Python\n   + proficiency: Proficient\n";
        let entities = parse_entities(section);
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].kind, "TechnicalSkill");
        assert_eq!(entities[0].properties["name"], "Python");
        assert_eq!(entities[0].properties["proficiency"], "Proficient");
    }

    #[test]
    fn property_order_follows_source_order() {
        let section = "1. **WorkExperience** Properties: several\nEntity instance:\n+ company: Creating Coding Careers\n+ title: Apprentice\n+ duration: 2024\n";
        let entities = parse_entities(section);
        let keys: Vec<_> = entities[0].properties.keys().cloned().collect();
        assert_eq!(keys, ["company", "title", "duration"]);
    }

    #[test]
    fn block_without_properties_marker_is_skipped() {
        let section = "1. **Education** - nothing recognizable on this page\n2. **SoftSkill** Properties: name\nEntity instance:\n+ name: Leadership\n";
        let entities = parse_entities(section);
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].kind, "SoftSkill");
    }

    #[test]
    fn entity_without_recoverable_properties_is_dropped() {
        // Properties marker present but no instance lines underneath
        let section = "1. **Project** Properties: name, impact\n   (no instances found)\n";
        assert!(parse_entities(section).is_empty());

        // Instance heading present but every line malformed
        let section = "1. **Project** Properties: name\nEntity instance:\n+ name has no colon\n+ link: http://example.com: extra\n";
        assert!(parse_entities(section).is_empty());
    }

    #[test]
    fn repeated_instance_headings_feed_one_entity() {
        let section = "1. **TechnicalSkill** Properties: name, context\nEntity instance 1:\n+ name: Python\nEntity instance 2:\n+ context: data pipelines\n";
        let entities = parse_entities(section);
        assert_eq!(entities.len(), 1);
        let keys: Vec<_> = entities[0].properties.keys().cloned().collect();
        assert_eq!(keys, ["name", "context"]);
    }

    #[test]
    fn duplicate_blocks_stay_separate_records() {
        let section = "1. **TechnicalSkill** Properties: name\nEntity instance:\n+ name: Python\n2. **TechnicalSkill** Properties: name\nEntity instance:\n+ name: Java\n";
        let entities = parse_entities(section);
        assert_eq!(entities.len(), 2);
        assert_eq!(entities[0].kind, entities[1].kind);
        assert_eq!(entities[0].properties["name"], "Python");
        assert_eq!(entities[1].properties["name"], "Java");
    }

    #[test]
    fn property_line_requires_exactly_one_colon() {
        assert_eq!(
            parse_property_line("+ name: Python"),
            Some(("name".to_string(), "Python".to_string()))
        );
        assert_eq!(parse_property_line("+ name Python"), None);
        assert_eq!(parse_property_line("+ repo: https://example.com"), None);
        assert_eq!(parse_property_line("no bullet: here"), None);
        assert_eq!(parse_property_line("+ : empty key"), None);
        assert_eq!(parse_property_line("+ key:   "), None);
    }
}
