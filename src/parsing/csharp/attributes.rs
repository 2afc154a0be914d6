//! C# attribute extraction and association overrides
//!
//! Authors steer the inferred diagram with two attributes on fields,
//! properties and parameters:
//!
//! ```csharp
//! public class Order {
//!     [PlantUmlAssociation("*--", LeafType = typeof(Line), LeafLabel = "*", NodeLabel = nameof(Lines))]
//!     public IList<Line> Lines { get; }
//!
//!     [PlantUmlIgnoreAssociation]
//!     public Customer Owner { get; }
//!
//!     public Order([PlantUmlAssociation("..>", Name = "Logger")] ILogger logger) { }
//! }
//! ```
//!
//! The extractor never reads attributes; the walker turns them into plain
//! [`AssociationOverride`] values first.

use crate::config::AssociationConfig;
use crate::parsing::csharp::resolution::SemanticModel;
use crate::parsing::csharp::syntax::{
    NameSyntax, TypeSyntax, child_of_kind, children_of_kind, has_child_kind, named_children,
};
use crate::parsing::parser::node_text;
use crate::relationship::TypeNameText;
use serde::{Deserialize, Serialize};
use tree_sitter::Node;

/// Value of one attribute argument.
#[derive(Debug, Clone, Copy)]
pub enum ArgumentValue<'tree> {
    /// `typeof(X)`; holds the type node
    TypeOf(Node<'tree>),
    /// Any other expression
    Expression(Node<'tree>),
}

impl<'tree> ArgumentValue<'tree> {
    fn from_expression(expression: Node<'tree>) -> Self {
        if expression.kind() == "typeof_expression" {
            let type_node = expression
                .child_by_field_name("type")
                .or_else(|| named_children(expression).into_iter().next());
            if let Some(type_node) = type_node {
                return Self::TypeOf(type_node);
            }
        }
        Self::Expression(expression)
    }

    /// Plain text of the value: string literals unquoted, `nameof(X)` as `X`,
    /// anything else as written.
    pub fn as_text(&self, source: &str) -> String {
        match self {
            Self::TypeOf(node) => node_text(*node, source).to_string(),
            Self::Expression(node) => expression_text(*node, source),
        }
    }
}

/// Information about one C# attribute application
#[derive(Debug, Clone)]
pub struct AttributeInfo<'tree> {
    /// Attribute name as written, e.g. `PlantUmlAssociation` or `Uml.PlantUmlAssociationAttribute`
    pub name: String,

    /// Positional arguments
    pub arguments: Vec<ArgumentValue<'tree>>,

    /// Named arguments (property = value)
    pub named_arguments: Vec<(String, ArgumentValue<'tree>)>,
}

impl<'tree> AttributeInfo<'tree> {
    /// Whether this attribute is `expected`, ignoring namespace qualification
    /// and the `Attribute` suffix.
    pub fn is(&self, expected: &str) -> bool {
        let short = |name: &str| {
            let last = name.rsplit(['.', ':']).next().unwrap_or(name);
            last.strip_suffix("Attribute").unwrap_or(last).to_string()
        };
        !expected.is_empty() && short(&self.name) == short(expected)
    }

    /// Named argument by case-insensitive name.
    pub fn get_named_argument(&self, name: &str) -> Option<&ArgumentValue<'tree>> {
        self.named_arguments
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v)
    }
}

/// Every attribute applied to a declaration node, in source order.
pub fn extract_attributes<'tree>(host: Node<'tree>, source: &str) -> Vec<AttributeInfo<'tree>> {
    let mut attributes = Vec::new();
    for list in children_of_kind(host, "attribute_list") {
        for attribute in children_of_kind(list, "attribute") {
            let name = attribute
                .child_by_field_name("name")
                .or_else(|| named_children(attribute).into_iter().next())
                .map(|name| node_text(name, source).to_string())
                .unwrap_or_default();

            let mut info = AttributeInfo {
                name,
                arguments: Vec::new(),
                named_arguments: Vec::new(),
            };

            if let Some(argument_list) = child_of_kind(attribute, "attribute_argument_list") {
                for argument in children_of_kind(argument_list, "attribute_argument") {
                    match split_argument(argument, source) {
                        (Some(name), Some(value)) => info.named_arguments.push((name, value)),
                        (None, Some(value)) => info.arguments.push(value),
                        _ => {}
                    }
                }
            }
            attributes.push(info);
        }
    }
    attributes
}

/// Split `Name = value`, `name: value` or a bare value.
fn split_argument<'tree>(
    argument: Node<'tree>,
    source: &str,
) -> (Option<String>, Option<ArgumentValue<'tree>>) {
    let children = named_children(argument);
    let value = children.last().copied().map(ArgumentValue::from_expression);

    // Older grammars wrap the name in name_equals / name_colon.
    if let Some(wrapper) = children
        .iter()
        .find(|child| matches!(child.kind(), "name_equals" | "name_colon"))
    {
        let identifier = child_of_kind(*wrapper, "identifier");
        let name = identifier.map(|id| node_text(id, source).to_string());
        return (name, value);
    }

    if (has_child_kind(argument, "=") || has_child_kind(argument, ":")) && children.len() > 1 {
        let name = children
            .first()
            .filter(|first| first.kind() == "identifier")
            .map(|id| node_text(*id, source).to_string());
        return (name, value);
    }

    (None, value)
}

fn expression_text(node: Node, source: &str) -> String {
    match node.kind() {
        "string_literal" | "verbatim_string_literal" | "raw_string_literal" => {
            let text = node_text(node, source);
            text.trim_start_matches(['@', '$'])
                .trim_matches('"')
                .to_string()
        }
        "invocation_expression" => {
            let function = node
                .child_by_field_name("function")
                .map(|f| node_text(f, source));
            if function == Some("nameof") {
                let argument = node
                    .child_by_field_name("arguments")
                    .or_else(|| child_of_kind(node, "argument_list"))
                    .and_then(|args| children_of_kind(args, "argument").into_iter().next());
                if let Some(argument) = argument {
                    let text = node_text(argument, source);
                    return text.rsplit('.').next().unwrap_or(text).trim().to_string();
                }
            }
            node_text(node, source).to_string()
        }
        _ => node_text(node, source).to_string(),
    }
}

/// Author-supplied replacement for an inferred association.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssociationOverride {
    /// Explicit leaf type name; when absent the member's declared type is used
    pub leaf_type: Option<String>,
    /// Edge symbol such as `*--` or `..>`
    pub association: Option<String>,
    /// Label next to the declaring type
    pub root_label: Option<String>,
    /// Label next to the leaf type
    pub leaf_label: Option<String>,
    /// Label on the edge
    pub label: Option<String>,
}

impl AssociationOverride {
    /// Read an override from an association attribute.
    pub fn from_attribute(
        attribute: &AttributeInfo,
        source: &str,
        model: Option<&dyn SemanticModel>,
    ) -> Self {
        let text = |name: &str| {
            attribute
                .get_named_argument(name)
                .map(|value| value.as_text(source))
        };

        let leaf_type = text("Name")
            .filter(|name| !name.trim().is_empty())
            .or_else(|| {
                attribute
                    .get_named_argument("LeafType")
                    .and_then(|value| leaf_type_text(value, source, model))
            });

        let association = text("Association").or_else(|| {
            attribute
                .arguments
                .first()
                .map(|value| value.as_text(source))
        });

        Self {
            leaf_type,
            association,
            root_label: text("RootLabel"),
            leaf_label: text("LeafLabel"),
            label: text("Label").or_else(|| text("NodeLabel")),
        }
    }
}

/// Name text for `LeafType = typeof(X)`.
fn leaf_type_text(
    value: &ArgumentValue,
    source: &str,
    model: Option<&dyn SemanticModel>,
) -> Option<String> {
    let ArgumentValue::TypeOf(type_node) = value else {
        return Some(value.as_text(source));
    };

    let name = match TypeSyntax::classify(*type_node).rightmost_simple_name() {
        Some(name) => name,
        None => return Some(node_text(*type_node, source).to_string()),
    };
    let text = match name {
        NameSyntax::Generic(generic) if generic.is_open() => {
            TypeNameText::from_open_generic(generic, source, model)
        }
        name => TypeNameText::from_name(name, source, model),
    };
    Some(text.identifier)
}

/// Association attributes found on one member.
#[derive(Debug, Clone, Default)]
pub struct MemberAnnotations {
    pub overrides: Vec<AssociationOverride>,
    /// An ignore attribute suppresses the inferred association
    pub ignored: bool,
}

impl MemberAnnotations {
    /// Read the configured association attributes from a member's attribute lists.
    pub fn read(
        host: Node,
        source: &str,
        model: Option<&dyn SemanticModel>,
        config: &AssociationConfig,
    ) -> Self {
        let mut annotations = Self::default();
        for attribute in extract_attributes(host, source) {
            if attribute.is(&config.attribute) {
                annotations
                    .overrides
                    .push(AssociationOverride::from_attribute(&attribute, source, model));
            } else if attribute.is(&config.ignore_attribute) {
                annotations.ignored = true;
            }
        }
        annotations
    }

    /// Whether the inferred association should be emitted.
    #[must_use]
    pub fn allows_implicit(&self) -> bool {
        self.overrides.is_empty() && !self.ignored
    }
}
