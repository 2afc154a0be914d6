//! Relationship extraction rules
//!
//! Each rule looks at one declaration node and appends zero or one edge per
//! matched shape. A rule whose precondition fails adds nothing; that is the
//! normal outcome for primitive-typed members, members outside a type, and
//! unresolvable override targets.
//!
//! | Shape | Edge |
//! |---|---|
//! | base list entry | base `<|--` derived |
//! | nested type | outer `+--` inner |
//! | field, property, record parameter | member type → owner, plain or aggregation |
//! | member with an override | owner → leaf, override symbol |

use crate::parsing::csharp::attributes::AssociationOverride;
use crate::parsing::csharp::resolution::SemanticModel;
use crate::parsing::csharp::syntax::{
    DeclarationKind, MemberSite, NameSyntax, TypeDeclaration, TypeSyntax,
};
use crate::relationship::{RelationKind, Relationship, RelationshipCollection, TypeNameText};
use tree_sitter::Node;

impl RelationshipCollection {
    /// One inheritance edge per base-list entry written as a simple or generic name.
    pub fn add_inheritance_from(
        &mut self,
        decl: &TypeDeclaration,
        source: &str,
        model: Option<&dyn SemanticModel>,
    ) {
        let bases = decl.base_types();
        if bases.is_empty() {
            return;
        }

        let derived = TypeNameText::from_declaration(decl, source, model);
        for base in bases {
            let TypeSyntax::Name(base_name) = TypeSyntax::classify(base) else {
                continue;
            };
            let base_text = TypeNameText::from_name(base_name, source, model);
            self.push(Relationship::new(base_text, derived.clone(), RelationKind::Inheritance));
        }
    }

    /// Nesting edge from the enclosing type to `node`, when both are type declarations.
    /// Nested delegates produce no edge.
    pub fn add_nesting_from(
        &mut self,
        node: Node,
        source: &str,
        model: Option<&dyn SemanticModel>,
    ) {
        let Some(inner) = TypeDeclaration::from_node(node) else {
            return;
        };
        if inner.kind() == DeclarationKind::Delegate {
            return;
        }
        let Some(outer) = TypeDeclaration::enclosing(node) else {
            return;
        };

        self.push(Relationship::new(
            TypeNameText::from_declaration(&outer, source, model),
            TypeNameText::from_declaration(&inner, source, model),
            RelationKind::Nesting,
        ));
    }

    /// Inferred association from a member's declared type to its owner.
    ///
    /// Aggregation when the member is initialized (or the parameter has a
    /// default), plain association otherwise. The member name, plus the leaf's
    /// type arguments, labels the leaf end.
    pub fn add_association_from(
        &mut self,
        member: &MemberSite,
        source: &str,
        model: Option<&dyn SemanticModel>,
    ) {
        let Some(leaf) = member.implicit_leaf() else {
            return;
        };
        let Some(root) = member.root() else {
            return;
        };

        let kind = if member.has_initializer() {
            RelationKind::Aggregation
        } else {
            RelationKind::Association
        };
        let leaf_name = TypeNameText::from_name(leaf, source, model);
        let root_name = TypeNameText::from_declaration(&root, source, model);
        let label = format!("{}{}", member.identifier(source), leaf_name.type_arguments);

        let relationship = Relationship::new(leaf_name, root_name, kind);
        self.push(relationship.with_labels(Some(label), None, None));
    }

    /// Author-directed edge from the owner to the override's leaf type.
    pub fn add_association_override(
        &mut self,
        member: &MemberSite,
        association: &AssociationOverride,
        source: &str,
        model: Option<&dyn SemanticModel>,
    ) {
        let Some(root) = member.root() else {
            return;
        };
        let declared = member.declared_type();
        let Some(leaf_name) =
            override_leaf_name(association.leaf_type.as_deref(), declared, source, model)
        else {
            return;
        };

        let root_name = TypeNameText::from_declaration(&root, source, model);
        let kind = RelationKind::from_override(association.association.as_deref());
        let relationship = Relationship::new(root_name, leaf_name, kind).with_labels(
            association.root_label.clone(),
            association.leaf_label.clone(),
            association.label.clone(),
        );
        self.push(relationship);
    }
}

/// Explicit name when given; otherwise the declared type if it is a bare
/// simple name. Qualified, nullable and other forms give no leaf.
fn override_leaf_name(
    explicit: Option<&str>,
    declared: Option<TypeSyntax>,
    source: &str,
    model: Option<&dyn SemanticModel>,
) -> Option<TypeNameText> {
    if let Some(name) = explicit.filter(|name| !name.trim().is_empty()) {
        return Some(TypeNameText::explicit(name));
    }
    let name: NameSyntax = declared?.simple_name()?;
    Some(TypeNameText::from_name(name, source, model))
}
