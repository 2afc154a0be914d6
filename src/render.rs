//! PlantUML output
//!
//! Maps relationship kinds to edge glyphs and prints one line per edge.
//! Inferred associations are printed owner first so the member label sits
//! next to the member's type:
//!
//! ```text
//! Outer +-- Inner
//! Outer --> "item" Inner
//! Container <|-- "Box`1"
//! ```

use crate::relationship::{RelationKind, Relationship, RelationshipCollection};

/// PlantUML arrow for a relationship kind.
pub fn edge_glyph(kind: &RelationKind) -> &str {
    match kind {
        RelationKind::Inheritance => "<|--",
        RelationKind::Nesting => "+--",
        RelationKind::Association => "-->",
        RelationKind::Aggregation => "o->",
        RelationKind::Link => "--",
        RelationKind::Custom(symbol) => symbol.as_str(),
    }
}

/// One PlantUML edge line.
pub fn render_relationship(relationship: &Relationship) -> String {
    let glyph = edge_glyph(relationship.kind());
    let mut parts: Vec<String> = Vec::new();

    if relationship.kind().is_implicit_association() {
        parts.push(relationship.target().identifier.clone());
        parts.push(glyph.to_string());
        parts.extend(quoted(relationship.source_label()));
        parts.push(relationship.source().identifier.clone());
    } else {
        parts.push(relationship.source().identifier.clone());
        parts.extend(quoted(relationship.source_label()));
        parts.push(glyph.to_string());
        parts.extend(quoted(relationship.target_label()));
        parts.push(relationship.target().identifier.clone());
    }

    let mut line = parts.join(" ");
    if let Some(label) = relationship.label() {
        line.push_str(" : ");
        line.push_str(label);
    }
    line
}

fn quoted(label: Option<&str>) -> Option<String> {
    label.map(|label| format!("\"{label}\""))
}

/// A complete diagram: definitions first, then edges.
pub fn render_diagram(definitions: &[String], relationships: &RelationshipCollection) -> String {
    let mut out = String::from("@startuml\n");
    for definition in definitions {
        out.push_str(definition);
        out.push('\n');
    }
    for relationship in relationships {
        out.push_str(&render_relationship(relationship));
        out.push('\n');
    }
    out.push_str("@enduml\n");
    out
}
