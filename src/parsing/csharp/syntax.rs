//! Typed views over tree-sitter C# nodes
//!
//! Every syntactic shape the extractor cares about is classified once into a
//! closed enum, so dispatch sites match exhaustively instead of comparing
//! node kinds ad hoc.
//!
//! Grammar notes (tree-sitter-c-sharp 0.23):
//! - `generic_name` = `identifier` + `type_argument_list`
//! - `qualified_name` has fields `qualifier` and `name`
//! - type members sit in a `declaration_list` body under the type declaration

use crate::parsing::parser::node_text;
use tree_sitter::Node;

/// First direct child of the given kind, named or anonymous.
pub fn child_of_kind<'tree>(node: Node<'tree>, kind: &str) -> Option<Node<'tree>> {
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).find(|child| child.kind() == kind);
    found
}

/// Whether the node has a direct child of the given kind.
pub fn has_child_kind(node: Node, kind: &str) -> bool {
    child_of_kind(node, kind).is_some()
}

/// Named children, skipping comments.
pub fn named_children<'tree>(node: Node<'tree>) -> Vec<Node<'tree>> {
    let mut cursor = node.walk();
    let children = node
        .named_children(&mut cursor)
        .filter(|child| child.kind() != "comment")
        .collect();
    children
}

/// Named children of one kind.
pub fn children_of_kind<'tree>(node: Node<'tree>, kind: &str) -> Vec<Node<'tree>> {
    named_children(node)
        .into_iter()
        .filter(|child| child.kind() == kind)
        .collect()
}

/// Identifier text without the verbatim `@` prefix.
pub fn unescaped_identifier(text: &str) -> &str {
    text.strip_prefix('@').unwrap_or(text)
}

/// A generic name such as `List<Item>` or the open form `Map<,>`.
#[derive(Debug, Clone, Copy)]
pub struct GenericName<'tree> {
    node: Node<'tree>,
    identifier: Node<'tree>,
    arguments: Node<'tree>,
}

impl<'tree> GenericName<'tree> {
    pub fn from_node(node: Node<'tree>) -> Option<Self> {
        if node.kind() != "generic_name" {
            return None;
        }
        Some(Self {
            node,
            identifier: child_of_kind(node, "identifier")?,
            arguments: child_of_kind(node, "type_argument_list")?,
        })
    }

    pub fn node(&self) -> Node<'tree> {
        self.node
    }

    pub fn identifier<'s>(&self, source: &'s str) -> &'s str {
        node_text(self.identifier, source)
    }

    /// Argument nodes; empty for an open generic like `Map<,>`.
    fn argument_nodes(&self) -> Vec<Node<'tree>> {
        named_children(self.arguments)
    }

    /// Number of type arguments, counting omitted slots of open generics.
    pub fn arity(&self) -> usize {
        let named = self.argument_nodes().len();
        if named > 0 {
            return named;
        }
        let mut cursor = self.arguments.walk();
        let commas = self
            .arguments
            .children(&mut cursor)
            .filter(|child| child.kind() == ",")
            .count();
        commas + 1
    }

    /// Source text of each argument slot. Omitted slots are empty.
    pub fn argument_texts<'s>(&self, source: &'s str) -> Vec<&'s str> {
        let nodes = self.argument_nodes();
        if nodes.is_empty() {
            return vec![""; self.arity()];
        }
        nodes.into_iter().map(|n| node_text(n, source)).collect()
    }

    /// True for `Map<,>` style references with no argument types written.
    pub fn is_open(&self) -> bool {
        self.argument_nodes().is_empty()
    }
}

/// A simple name used as a type.
#[derive(Debug, Clone, Copy)]
pub enum NameSyntax<'tree> {
    Identifier(Node<'tree>),
    Generic(GenericName<'tree>),
}

impl<'tree> NameSyntax<'tree> {
    pub fn from_node(node: Node<'tree>) -> Option<Self> {
        match node.kind() {
            "identifier" => Some(Self::Identifier(node)),
            "generic_name" => GenericName::from_node(node).map(Self::Generic),
            _ => None,
        }
    }

    pub fn node(&self) -> Node<'tree> {
        match self {
            Self::Identifier(node) => *node,
            Self::Generic(generic) => generic.node(),
        }
    }

    /// Identifier text without type arguments.
    pub fn identifier<'s>(&self, source: &'s str) -> &'s str {
        match self {
            Self::Identifier(node) => node_text(*node, source),
            Self::Generic(generic) => generic.identifier(source),
        }
    }

    /// Generic arity, zero for plain identifiers.
    pub fn arity(&self) -> usize {
        match self {
            Self::Identifier(_) => 0,
            Self::Generic(generic) => generic.arity(),
        }
    }
}

/// Any type position.
#[derive(Debug, Clone, Copy)]
pub enum TypeSyntax<'tree> {
    Name(NameSyntax<'tree>),
    /// `A.B.C`; `name` is the rightmost simple segment.
    Qualified {
        node: Node<'tree>,
        name: Option<NameSyntax<'tree>>,
    },
    /// `T?`
    Nullable {
        node: Node<'tree>,
        inner: Node<'tree>,
    },
    /// Predefined, array, tuple, pointer and every other type form.
    Other(Node<'tree>),
}

impl<'tree> TypeSyntax<'tree> {
    pub fn classify(node: Node<'tree>) -> Self {
        if let Some(name) = NameSyntax::from_node(node) {
            return Self::Name(name);
        }
        match node.kind() {
            "qualified_name" => Self::Qualified {
                node,
                name: node
                    .child_by_field_name("name")
                    .and_then(NameSyntax::from_node),
            },
            "nullable_type" => {
                let inner = node
                    .child_by_field_name("type")
                    .or_else(|| named_children(node).into_iter().next());
                match inner {
                    Some(inner) => Self::Nullable { node, inner },
                    None => Self::Other(node),
                }
            }
            _ => Self::Other(node),
        }
    }

    pub fn node(&self) -> Node<'tree> {
        match self {
            Self::Name(name) => name.node(),
            Self::Qualified { node, .. } | Self::Nullable { node, .. } => *node,
            Self::Other(node) => *node,
        }
    }

    /// The name when the type is written as a bare simple name.
    pub fn simple_name(&self) -> Option<NameSyntax<'tree>> {
        match self {
            Self::Name(name) => Some(*name),
            _ => None,
        }
    }

    /// A bare simple name, or the rightmost segment of a qualified name.
    pub fn rightmost_simple_name(&self) -> Option<NameSyntax<'tree>> {
        match self {
            Self::Name(name) => Some(*name),
            Self::Qualified { name, .. } => *name,
            Self::Nullable { .. } | Self::Other(_) => None,
        }
    }

    /// Strip one nullable annotation.
    pub fn without_nullable(self) -> Self {
        match self {
            Self::Nullable { inner, .. } => Self::classify(inner),
            other => other,
        }
    }
}

/// Kind of a type declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    Class,
    Struct,
    Interface,
    Enum,
    Record,
    RecordStruct,
    Delegate,
}

impl DeclarationKind {
    pub fn from_node(node: Node) -> Option<Self> {
        match node.kind() {
            "class_declaration" => Some(Self::Class),
            "struct_declaration" => Some(Self::Struct),
            "interface_declaration" => Some(Self::Interface),
            "enum_declaration" => Some(Self::Enum),
            "delegate_declaration" => Some(Self::Delegate),
            "record_struct_declaration" => Some(Self::RecordStruct),
            "record_declaration" if has_child_kind(node, "struct") => Some(Self::RecordStruct),
            "record_declaration" => Some(Self::Record),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_record(&self) -> bool {
        matches!(self, Self::Record | Self::RecordStruct)
    }
}

/// A class, struct, interface, enum, record or delegate being declared.
#[derive(Debug, Clone, Copy)]
pub struct TypeDeclaration<'tree> {
    node: Node<'tree>,
    kind: DeclarationKind,
}

impl<'tree> TypeDeclaration<'tree> {
    pub fn from_node(node: Node<'tree>) -> Option<Self> {
        DeclarationKind::from_node(node).map(|kind| Self { node, kind })
    }

    /// The type declaration a member or nested type sits in.
    pub fn enclosing(node: Node<'tree>) -> Option<Self> {
        let mut parent = node.parent()?;
        if parent.kind() == "declaration_list" {
            parent = parent.parent()?;
        }
        Self::from_node(parent)
    }

    pub fn node(&self) -> Node<'tree> {
        self.node
    }

    pub fn kind(&self) -> DeclarationKind {
        self.kind
    }

    /// Identifier as written, including a verbatim `@`.
    pub fn name<'s>(&self, source: &'s str) -> &'s str {
        self.node
            .child_by_field_name("name")
            .or_else(|| child_of_kind(self.node, "identifier"))
            .map(|name| node_text(name, source))
            .unwrap_or_default()
    }

    pub fn type_parameter_list(&self) -> Option<Node<'tree>> {
        child_of_kind(self.node, "type_parameter_list")
    }

    /// Type parameters as written, e.g. `out T`.
    pub fn type_parameter_texts<'s>(&self, source: &'s str) -> Vec<&'s str> {
        self.type_parameter_list()
            .map(|list| {
                children_of_kind(list, "type_parameter")
                    .into_iter()
                    .map(|param| node_text(param, source))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Bare type parameter names, e.g. `T`.
    pub fn type_parameter_names(&self, source: &str) -> Vec<String> {
        self.type_parameter_list()
            .map(|list| {
                children_of_kind(list, "type_parameter")
                    .into_iter()
                    .filter_map(|param| {
                        param
                            .child_by_field_name("name")
                            .or_else(|| children_of_kind(param, "identifier").pop())
                    })
                    .map(|name| unescaped_identifier(node_text(name, source)).to_string())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn arity(&self) -> usize {
        self.type_parameter_list()
            .map(|list| children_of_kind(list, "type_parameter").len())
            .unwrap_or(0)
    }

    pub fn is_abstract(&self, source: &str) -> bool {
        children_of_kind(self.node, "modifier")
            .into_iter()
            .any(|modifier| node_text(modifier, source) == "abstract")
    }

    /// Entries of the base list, unwrapping primary-constructor base calls.
    pub fn base_types(&self) -> Vec<Node<'tree>> {
        let Some(base_list) = child_of_kind(self.node, "base_list") else {
            return Vec::new();
        };
        named_children(base_list)
            .into_iter()
            .filter(|entry| entry.kind() != "argument_list")
            .filter_map(|entry| {
                if entry.kind() == "primary_constructor_base_type" {
                    entry
                        .child_by_field_name("type")
                        .or_else(|| named_children(entry).into_iter().next())
                } else {
                    Some(entry)
                }
            })
            .collect()
    }

    /// Member declarations of the body, in document order.
    pub fn members(&self) -> Vec<Node<'tree>> {
        self.node
            .child_by_field_name("body")
            .or_else(|| child_of_kind(self.node, "declaration_list"))
            .map(named_children)
            .unwrap_or_default()
    }

    /// Primary constructor parameters of a record.
    pub fn record_parameters(&self) -> Vec<Node<'tree>> {
        if !self.kind.is_record() {
            return Vec::new();
        }
        child_of_kind(self.node, "parameter_list")
            .map(|list| children_of_kind(list, "parameter"))
            .unwrap_or_default()
    }
}

/// Parameters of a method or constructor declaration.
pub fn parameters_of<'tree>(node: Node<'tree>) -> Vec<Node<'tree>> {
    node.child_by_field_name("parameters")
        .or_else(|| child_of_kind(node, "parameter_list"))
        .map(|list| children_of_kind(list, "parameter"))
        .unwrap_or_default()
}

/// Enclosing namespace segments of a node, outermost first.
///
/// Handles both block namespaces and a file-scoped namespace, whether the
/// grammar nests the file's declarations under it or leaves them as siblings.
pub fn namespace_segments(node: Node, source: &str) -> Vec<String> {
    let mut blocks: Vec<Vec<String>> = Vec::new();
    let mut file_scoped_seen = false;
    let mut current = node;

    while let Some(parent) = current.parent() {
        if matches!(
            parent.kind(),
            "namespace_declaration" | "file_scoped_namespace_declaration"
        ) {
            file_scoped_seen |= parent.kind() == "file_scoped_namespace_declaration";
            if let Some(name) = parent.child_by_field_name("name") {
                blocks.push(dotted_segments(node_text(name, source)));
            }
        }
        current = parent;
    }

    if !file_scoped_seen && current.kind() == "compilation_unit" {
        let file_scoped = children_of_kind(current, "file_scoped_namespace_declaration")
            .into_iter()
            .find(|ns| ns.end_byte() <= node.start_byte());
        if let Some(name) = file_scoped.and_then(|ns| ns.child_by_field_name("name")) {
            blocks.push(dotted_segments(node_text(name, source)));
        }
    }

    blocks.into_iter().rev().flatten().collect()
}

/// Declarations enclosing a node, outermost first.
pub fn containing_types(node: Node) -> Vec<TypeDeclaration> {
    let mut types = Vec::new();
    let mut current = node;
    while let Some(parent) = current.parent() {
        if let Some(decl) = TypeDeclaration::from_node(parent) {
            types.push(decl);
        }
        current = parent;
    }
    types.reverse();
    types
}

/// Split `A.B.C` into unescaped segments.
pub fn dotted_segments(text: &str) -> Vec<String> {
    text.split('.')
        .map(|segment| unescaped_identifier(segment.trim()).to_string())
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// What declares a parameter.
#[derive(Debug, Clone, Copy)]
pub enum ParameterOwner<'tree> {
    Record(TypeDeclaration<'tree>),
    Method(Node<'tree>),
    Constructor(Node<'tree>),
}

/// A member whose declared type can yield an association.
#[derive(Debug, Clone, Copy)]
pub enum MemberSite<'tree> {
    /// One declarator of a field declaration
    Field {
        declaration: Node<'tree>,
        declarator: Node<'tree>,
    },
    Property(Node<'tree>),
    Parameter {
        node: Node<'tree>,
        owner: ParameterOwner<'tree>,
    },
}

impl<'tree> MemberSite<'tree> {
    /// One site per declarator of a `field_declaration`.
    pub fn fields(declaration: Node<'tree>) -> Vec<Self> {
        child_of_kind(declaration, "variable_declaration")
            .map(|variables| children_of_kind(variables, "variable_declarator"))
            .unwrap_or_default()
            .into_iter()
            .map(|declarator| Self::Field {
                declaration,
                declarator,
            })
            .collect()
    }

    /// Node carrying the member's attribute lists.
    pub fn attribute_host(&self) -> Node<'tree> {
        match self {
            Self::Field { declaration, .. } => *declaration,
            Self::Property(node) | Self::Parameter { node, .. } => *node,
        }
    }

    /// The type declaring this member.
    pub fn root(&self) -> Option<TypeDeclaration<'tree>> {
        match self {
            Self::Field { declaration, .. } => TypeDeclaration::enclosing(*declaration),
            Self::Property(node) => TypeDeclaration::enclosing(*node),
            Self::Parameter { owner, .. } => match owner {
                ParameterOwner::Record(record) => Some(*record),
                ParameterOwner::Method(node) | ParameterOwner::Constructor(node) => {
                    TypeDeclaration::enclosing(*node)
                }
            },
        }
    }

    pub fn declared_type(&self) -> Option<TypeSyntax<'tree>> {
        let type_node = match self {
            Self::Field { declaration, .. } => {
                child_of_kind(*declaration, "variable_declaration")?.child_by_field_name("type")
            }
            Self::Property(node) => node.child_by_field_name("type"),
            Self::Parameter { node, .. } => node.child_by_field_name("type"),
        }?;
        Some(TypeSyntax::classify(type_node))
    }

    /// Member name as written.
    pub fn identifier<'s>(&self, source: &'s str) -> &'s str {
        let name_owner = match self {
            Self::Field { declarator, .. } => *declarator,
            Self::Property(node) | Self::Parameter { node, .. } => *node,
        };
        name_owner
            .child_by_field_name("name")
            .or_else(|| child_of_kind(name_owner, "identifier"))
            .map(|name| node_text(name, source))
            .unwrap_or_default()
    }

    /// Initializer on a field declarator or property, default value on a parameter.
    pub fn has_initializer(&self) -> bool {
        let holder = match self {
            Self::Field { declarator, .. } => *declarator,
            Self::Property(node) | Self::Parameter { node, .. } => *node,
        };
        has_child_kind(holder, "=") || has_child_kind(holder, "equals_value_clause")
    }

    /// Type name an implicit association points from, if the shape has one.
    ///
    /// Fields accept the rightmost segment of a qualified name, properties
    /// look through a nullable annotation, record parameters need a bare
    /// simple name. Method and constructor parameters never associate
    /// implicitly.
    pub fn implicit_leaf(&self) -> Option<NameSyntax<'tree>> {
        match self {
            Self::Field { .. } => self.declared_type()?.rightmost_simple_name(),
            Self::Property(_) => self.declared_type()?.without_nullable().simple_name(),
            Self::Parameter { owner, .. } => match owner {
                ParameterOwner::Record(_) => self.declared_type()?.simple_name(),
                ParameterOwner::Method(_) | ParameterOwner::Constructor(_) => None,
            },
        }
    }
}
