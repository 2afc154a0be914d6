//! Dotted names from syntax alone
//!
//! Used whenever no semantic model answers: a name written as the rightmost
//! segment of `A.B.C` is prefixed with its qualifier segments, anything else
//! keeps its short name.

use crate::parsing::csharp::syntax::GenericName;
use crate::parsing::parser::node_text;
use tree_sitter::Node;

/// Qualified name for `node`, or `short_name` when it is not the right-hand
/// side of a qualified name.
pub fn qualified_type_name(node: Node, short_name: &str, source: &str) -> String {
    let Some(parent) = node.parent() else {
        return short_name.to_string();
    };
    if parent.kind() != "qualified_name" || !is_name_field_of(node, parent) {
        return short_name.to_string();
    }
    let Some(qualifier) = parent.child_by_field_name("qualifier") else {
        return short_name.to_string();
    };

    let mut segments = vec![short_name.to_string()];
    let mut part = qualifier;
    loop {
        if part.kind() != "qualified_name" {
            segments.push(node_text(part, source).to_string());
            break;
        }
        if let Some(name) = part.child_by_field_name("name") {
            segments.push(node_text(name, source).to_string());
        }
        match part.child_by_field_name("qualifier") {
            Some(left) => part = left,
            None => break,
        }
    }

    segments.reverse();
    segments.join(".")
}

/// Segments of a name node as written: `A.B.C` gives `[A, B, C]`.
///
/// Generic segments keep only their identifier.
pub fn written_segments(node: Node, source: &str) -> Vec<String> {
    match node.kind() {
        "qualified_name" => {
            let mut segments = node
                .child_by_field_name("qualifier")
                .map(|qualifier| written_segments(qualifier, source))
                .unwrap_or_default();
            if let Some(name) = node.child_by_field_name("name") {
                segments.extend(written_segments(name, source));
            }
            segments
        }
        "generic_name" => GenericName::from_node(node)
            .map(|generic| vec![generic.identifier(source).to_string()])
            .unwrap_or_default(),
        _ => vec![node_text(node, source).to_string()],
    }
}

fn is_name_field_of(node: Node, parent: Node) -> bool {
    parent
        .child_by_field_name("name")
        .is_some_and(|name| name.id() == node.id())
}
