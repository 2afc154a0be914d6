//! Whole-file walk
//!
//! Visits every type declaration of a parsed file in document order and runs
//! the per-node extraction rules over the declaration and its members.
//! Association attributes are read here and handed to the extractor as
//! plain override values.

use crate::config::{AssociationConfig, Settings};
use crate::parsing::csharp::attributes::MemberAnnotations;
use crate::parsing::csharp::resolution::SemanticModel;
use crate::parsing::csharp::syntax::{
    MemberSite, ParameterOwner, TypeDeclaration, named_children, parameters_of,
};
use crate::parsing::parser::check_recursion_depth;
use crate::relationship::RelationshipCollection;
use tree_sitter::{Node, Tree};

/// Type declarations under `root`, in document order.
pub fn type_declarations(root: Node) -> Vec<TypeDeclaration> {
    let mut declarations = Vec::new();
    collect_declarations(root, 0, &mut declarations);
    declarations
}

fn collect_declarations<'tree>(
    node: Node<'tree>,
    depth: usize,
    declarations: &mut Vec<TypeDeclaration<'tree>>,
) {
    if !check_recursion_depth(depth, node) {
        return;
    }
    if let Some(decl) = TypeDeclaration::from_node(node) {
        declarations.push(decl);
    }
    for child in named_children(node) {
        collect_declarations(child, depth + 1, declarations);
    }
}

/// Extract every relationship of one file.
pub fn extract_file(
    tree: &Tree,
    source: &str,
    model: Option<&dyn SemanticModel>,
    settings: &Settings,
) -> RelationshipCollection {
    let config = &settings.association;
    let mut relationships = RelationshipCollection::new();
    for decl in type_declarations(tree.root_node()) {
        extract_declaration(&decl, source, model, config, &mut relationships);
    }
    tracing::debug!(
        "extracted {} relationships from {} bytes",
        relationships.len(),
        source.len()
    );
    relationships
}

/// Run every rule for one declaration: its bases, its nesting, then its
/// record parameters and members in source order.
pub fn extract_declaration(
    decl: &TypeDeclaration,
    source: &str,
    model: Option<&dyn SemanticModel>,
    config: &AssociationConfig,
    relationships: &mut RelationshipCollection,
) {
    relationships.add_inheritance_from(decl, source, model);
    relationships.add_nesting_from(decl.node(), source, model);

    for parameter in decl.record_parameters() {
        let site = MemberSite::Parameter {
            node: parameter,
            owner: ParameterOwner::Record(*decl),
        };
        extract_member(&[site], source, model, config, relationships);
    }

    for member in decl.members() {
        match member.kind() {
            "field_declaration" => {
                let sites = MemberSite::fields(member);
                extract_member(&sites, source, model, config, relationships);
            }
            "property_declaration" => {
                extract_member(
                    &[MemberSite::Property(member)],
                    source,
                    model,
                    config,
                    relationships,
                );
            }
            "method_declaration" | "constructor_declaration" => {
                for parameter in parameters_of(member) {
                    let owner = if member.kind() == "method_declaration" {
                        ParameterOwner::Method(member)
                    } else {
                        ParameterOwner::Constructor(member)
                    };
                    let site = MemberSite::Parameter {
                        node: parameter,
                        owner,
                    };
                    extract_member(&[site], source, model, config, relationships);
                }
            }
            _ => {}
        }
    }
}

/// Overrides apply once per declaration; inferred associations once per
/// declarator. `sites` share one attribute host.
fn extract_member(
    sites: &[MemberSite],
    source: &str,
    model: Option<&dyn SemanticModel>,
    config: &AssociationConfig,
    relationships: &mut RelationshipCollection,
) {
    let Some(first) = sites.first() else {
        return;
    };
    let annotations = MemberAnnotations::read(first.attribute_host(), source, model, config);

    for association in &annotations.overrides {
        relationships.add_association_override(first, association, source, model);
    }
    if annotations.allows_implicit() {
        for site in sites {
            relationships.add_association_from(site, source, model);
        }
    }
}
