//! Declaration table: a [`SemanticModel`] built from parsed C# files
//!
//! Indexes every type declaration of the given files by dotted full name and
//! answers reference lookups the way C# scopes names.
//!
//! # Resolution Order
//!
//! A reference written as `Name` (or `A.Name`) is tried, in order:
//! 1. As written, when qualified (absolute, then relative to each enclosing namespace)
//! 2. Nested types of each enclosing type, inner to outer
//! 3. Enclosing namespaces, inner to outer
//! 4. `using` directives and `using` aliases of the file
//! 5. The global namespace
//!
//! Candidates whose generic arity matches the reference are preferred.
//! Types declared outside the indexed files resolve to nothing.

use crate::parsing::csharp::qualified::written_segments;
use crate::parsing::csharp::resolution::{SemanticModel, TypeKind, TypeSymbol};
use crate::parsing::csharp::syntax::{
    GenericName, TypeDeclaration, children_of_kind, containing_types, dotted_segments,
    has_child_kind, named_children, namespace_segments, unescaped_identifier,
};
use crate::parsing::parser::{check_recursion_depth, node_text};
use std::collections::HashMap;
use tree_sitter::{Node, Tree};

/// Types declared across a set of files.
#[derive(Debug, Default, Clone)]
pub struct DeclarationTable {
    /// Dotted full name (no arity) to every declaration of that name
    types: HashMap<String, Vec<TypeSymbol>>,
}

/// A `using` directive in scope of a reference.
#[derive(Debug, Clone)]
struct UsingDirective {
    alias: Option<String>,
    target: Vec<String>,
}

impl DeclarationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table over several parsed files.
    pub fn from_files<'a>(files: impl IntoIterator<Item = (&'a Tree, &'a str)>) -> Self {
        let mut table = Self::new();
        for (tree, source) in files {
            table.add_file(tree, source);
        }
        table
    }

    /// Index every type declaration of one file.
    pub fn add_file(&mut self, tree: &Tree, source: &str) {
        self.collect(tree.root_node(), source, 0);
    }

    /// Number of declared types.
    pub fn len(&self) -> usize {
        self.types.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    fn collect(&mut self, node: Node, source: &str, depth: usize) {
        if !check_recursion_depth(depth, node) {
            return;
        }
        if let Some(decl) = TypeDeclaration::from_node(node) {
            let symbol = Self::declared_symbol(&decl, source);
            self.types
                .entry(symbol.metadata_name())
                .or_default()
                .push(symbol);
        }
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            self.collect(child, source, depth + 1);
        }
    }

    /// Symbol describing a declaration, computed from syntax.
    pub fn declared_symbol(decl: &TypeDeclaration, source: &str) -> TypeSymbol {
        TypeSymbol {
            name: unescaped_identifier(decl.name(source)).to_string(),
            namespace: namespace_segments(decl.node(), source),
            containing_types: containing_types(decl.node())
                .iter()
                .map(|outer| unescaped_identifier(outer.name(source)).to_string())
                .collect(),
            kind: TypeKind::from(decl.kind()),
            is_abstract: decl.is_abstract(source),
            is_record: decl.kind().is_record(),
            type_parameters: decl.type_parameter_names(source),
        }
    }

    /// Find a type by dotted name, preferring the given arity.
    fn lookup(&self, name: &str, arity: Option<usize>) -> Option<&TypeSymbol> {
        let candidates = self.types.get(name)?;
        match arity {
            Some(arity) => candidates
                .iter()
                .find(|symbol| symbol.type_parameters.len() == arity),
            None => candidates
                .iter()
                .find(|symbol| symbol.type_parameters.is_empty())
                .or_else(|| candidates.first()),
        }
    }

    fn lookup_segments(
        &self,
        prefix: &[String],
        written: &[String],
        arity: usize,
    ) -> Option<&TypeSymbol> {
        let name = prefix
            .iter()
            .chain(written.iter())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(".");
        self.lookup(&name, Some(arity))
    }

    fn resolve_reference(&self, node: Node, source: &str) -> Option<&TypeSymbol> {
        // The right side of `A.B` resolves together with its qualifier.
        let reference = match node.parent() {
            Some(parent)
                if parent.kind() == "qualified_name"
                    && parent
                        .child_by_field_name("name")
                        .is_some_and(|name| name.id() == node.id()) =>
            {
                parent
            }
            _ => node,
        };

        let written = written_segments(reference, source);
        if written.is_empty() {
            return None;
        }
        let written: Vec<String> = written
            .iter()
            .map(|segment| unescaped_identifier(segment).to_string())
            .collect();
        let arity = rightmost_arity(reference);

        let namespace = namespace_segments(reference, source);
        let usings = usings_in_scope(reference, source);

        // Alias replaces the first written segment.
        if let Some(using) = usings
            .iter()
            .find(|using| using.alias.as_deref() == Some(written[0].as_str()))
        {
            let mut expanded = using.target.clone();
            expanded.extend(written[1..].iter().cloned());
            if let Some(found) = self.lookup_segments(&[], &expanded, arity) {
                return Some(found);
            }
        }

        if written.len() > 1 {
            if let Some(found) = self.lookup_segments(&[], &written, arity) {
                return Some(found);
            }
        }

        // Nested types of enclosing types, inner to outer.
        for outer in containing_types(reference).iter().rev() {
            let outer_symbol = Self::declared_symbol(outer, source);
            let mut prefix = outer_symbol.namespace.clone();
            prefix.extend(outer_symbol.containing_types.iter().cloned());
            prefix.push(outer_symbol.name.clone());
            if let Some(found) = self.lookup_segments(&prefix, &written, arity) {
                return Some(found);
            }
        }

        // Enclosing namespaces, inner to outer.
        for len in (1..=namespace.len()).rev() {
            if let Some(found) = self.lookup_segments(&namespace[..len], &written, arity) {
                return Some(found);
            }
        }

        for using in usings.iter().filter(|using| using.alias.is_none()) {
            if let Some(found) = self.lookup_segments(&using.target, &written, arity) {
                return Some(found);
            }
        }

        self.lookup_segments(&[], &written, arity)
    }
}

impl SemanticModel for DeclarationTable {
    fn symbol_for(&self, node: Node<'_>, source: &str) -> Option<TypeSymbol> {
        if let Some(decl) = TypeDeclaration::from_node(node) {
            let declared = Self::declared_symbol(&decl, source);
            let name = declared.metadata_name();
            let arity = declared.type_parameters.len();
            return self.lookup(&name, Some(arity)).cloned();
        }

        match node.kind() {
            "identifier" | "generic_name" | "qualified_name" => {
                self.resolve_reference(node, source).cloned()
            }
            _ => None,
        }
    }

    fn type_by_metadata_name(&self, name: &str) -> Option<TypeSymbol> {
        let (name, arity) = match name.rsplit_once('`') {
            Some((base, count)) => match count.parse::<usize>() {
                Ok(count) => (base, Some(count)),
                Err(_) => (name, None),
            },
            None => (name, None),
        };
        self.lookup(name, arity).cloned()
    }
}

/// Generic arity of the rightmost segment of a name node.
fn rightmost_arity(node: Node) -> usize {
    let rightmost = match node.kind() {
        "qualified_name" => node.child_by_field_name("name"),
        _ => Some(node),
    };
    rightmost
        .and_then(GenericName::from_node)
        .map(|generic| generic.arity())
        .unwrap_or(0)
}

/// `using` directives visible from a node: those of every enclosing
/// namespace body and of the compilation unit.
fn usings_in_scope(node: Node, source: &str) -> Vec<UsingDirective> {
    let mut usings = Vec::new();
    let mut current = node;
    while let Some(parent) = current.parent() {
        for directive in children_of_kind(parent, "using_directive") {
            if let Some(using) = parse_using(directive, source) {
                usings.push(using);
            }
        }
        current = parent;
    }
    usings
}

fn parse_using(directive: Node, source: &str) -> Option<UsingDirective> {
    let names = named_children(directive);
    let target = names.last()?;
    let alias = if has_child_kind(directive, "=") && names.len() > 1 {
        names
            .first()
            .map(|alias| unescaped_identifier(node_text(*alias, source)).to_string())
    } else {
        None
    };
    Some(UsingDirective {
        alias,
        target: dotted_segments(node_text(*target, source)),
    })
}
