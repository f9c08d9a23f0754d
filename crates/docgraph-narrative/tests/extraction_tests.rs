//! End-to-end extraction tests over realistic analysis prose

use docgraph_narrative::{extract_entities_and_relations, Extraction, Relation};

const ANALYSIS: &str = r"Based on the knowledge graph schema, here is my analysis of the resume page:

**Entities Found**

1. **TechnicalSkill** - Properties: name, proficiency
   Entity instance 1:
   + name: Python
   + proficiency: Proficient
   Entity instance 2:
   + context: data pipelines

2. **WorkExperience** - Properties: company, title, duration
   Entity instance:
   + company: Creating Coding Careers
   + title: Software Development Apprentice
   + duration: February 2024 - August 2024

3. **Education** - no clear instances found on this page

4. **TechnicalSkill** - Properties: name
   Entity instance:
   + name: SQL

**Relationships Identified**

1. **WorkExperience --requires--> TechnicalSkill**
2. **WorkExperience --demonstrates--> SoftSkill**
3. **Education teaches TechnicalSkill** (no markers, skipped)
4. **Project --utilizes TechnicalSkill** (arrow missing)

**Additional Context**

The apprenticeship suggests a recent pivot into software engineering.
";

#[test]
fn extracts_entities_in_block_order() {
    let extraction = extract_entities_and_relations(ANALYSIS);

    let kinds: Vec<_> = extraction.entities.iter().map(|e| e.kind.as_str()).collect();
    assert_eq!(kinds, ["TechnicalSkill", "WorkExperience", "TechnicalSkill"]);

    // Repeated instance sub-headings feed one entity per block
    let first = &extraction.entities[0];
    let keys: Vec<_> = first.properties.keys().cloned().collect();
    assert_eq!(keys, ["name", "proficiency", "context"]);
    assert_eq!(first.properties["name"], "Python");

    // Block without Properties: marker is not a signal
    assert!(extraction.entities.iter().all(|e| e.kind != "Education"));

    // Duplicate kinds from separate blocks stay separate
    assert_eq!(extraction.entities[2].properties["name"], "SQL");
}

#[test]
fn extracts_relations_and_skips_malformed_lines() {
    let extraction = extract_entities_and_relations(ANALYSIS);

    assert_eq!(
        extraction.relations,
        [
            Relation {
                from: "WorkExperience".to_string(),
                to: "TechnicalSkill".to_string(),
                kind: "requires".to_string(),
            },
            Relation {
                from: "WorkExperience".to_string(),
                to: "SoftSkill".to_string(),
                kind: "demonstrates".to_string(),
            },
        ]
    );
}

#[test]
fn absent_relation_heading_leaves_entities_intact() {
    let entities_only = ANALYSIS.split("**Relationships").next().unwrap();
    let extraction = extract_entities_and_relations(entities_only);
    assert_eq!(extraction.entities.len(), 3);
    assert!(extraction.relations.is_empty());
}

#[test]
fn absent_entity_heading_leaves_relations_intact() {
    let relations_only = &ANALYSIS[ANALYSIS.find("**Relationships").unwrap()..];
    let extraction = extract_entities_and_relations(relations_only);
    assert!(extraction.entities.is_empty());
    assert_eq!(extraction.relations.len(), 2);
}

#[test]
fn empty_and_prose_only_input_yield_empty_extraction() {
    assert_eq!(extract_entities_and_relations(""), Extraction::default());
    assert_eq!(
        extract_entities_and_relations("The page is blank; nothing to categorize."),
        Extraction::default()
    );
}

#[test]
fn extraction_serializes_for_downstream_assembly() {
    let extraction = extract_entities_and_relations(ANALYSIS);
    let json = serde_json::to_value(&extraction).unwrap();
    assert_eq!(json["entities"][0]["type"], "TechnicalSkill");
    assert_eq!(json["entities"][0]["properties"]["name"], "Python");
    assert_eq!(json["relations"][0]["type"], "requires");
}
