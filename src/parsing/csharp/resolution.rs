//! Symbol name resolution
//!
//! Turns the answer of an optional [`SemanticModel`] into a fully qualified,
//! nesting-safe display name. A missing model and a model with no answer are
//! the same thing to callers: both yield `None` and the syntactic fallback in
//! [`super::qualified`] applies.
//!
//! # Nesting-safe names
//!
//! Diagram text uses `.` for namespaces and for containment, so every
//! intermediate enclosing-type segment is prefixed with [`ESCAPE_MARKER`]:
//!
//! ```text
//! Shop.Orders.Order.Line   ->   Shop.Orders.@Order.Line
//! ```
//!
//! The namespace prefix and the innermost name stay unmarked.

use crate::parsing::csharp::syntax::DeclarationKind;
use std::collections::HashSet;
use std::sync::LazyLock;
use tree_sitter::Node;

/// Reserved character marking an enclosing-type segment.
pub const ESCAPE_MARKER: char = '@';

/// Kind of a resolved named type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Class,
    Struct,
    Interface,
    Enum,
    Delegate,
}

impl TypeKind {
    /// Lower-case keyword used in definition lines.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Struct => "struct",
            Self::Interface => "interface",
            Self::Enum => "enum",
            Self::Delegate => "delegate",
        }
    }
}

impl From<DeclarationKind> for TypeKind {
    fn from(kind: DeclarationKind) -> Self {
        match kind {
            DeclarationKind::Class | DeclarationKind::Record => Self::Class,
            DeclarationKind::Struct | DeclarationKind::RecordStruct => Self::Struct,
            DeclarationKind::Interface => Self::Interface,
            DeclarationKind::Enum => Self::Enum,
            DeclarationKind::Delegate => Self::Delegate,
        }
    }
}

/// A named type as seen by a semantic model.
///
/// Names are stored unescaped (no verbatim `@`); keyword escaping happens
/// when the symbol is displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSymbol {
    pub name: String,
    /// Namespace segments, outermost first. Empty for the global namespace.
    pub namespace: Vec<String>,
    /// Enclosing type names, outermost first.
    pub containing_types: Vec<String>,
    pub kind: TypeKind,
    pub is_abstract: bool,
    pub is_record: bool,
    /// Declared type parameter names in order.
    pub type_parameters: Vec<String>,
}

impl TypeSymbol {
    /// Dotted name through namespaces and containing types, unescaped.
    pub fn metadata_name(&self) -> String {
        self.namespace
            .iter()
            .chain(self.containing_types.iter())
            .chain(std::iter::once(&self.name))
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(".")
    }

    /// Render under a display format.
    pub fn to_display_string(&self, format: &SymbolDisplayFormat) -> String {
        let namespace: &[String] = match format.qualification {
            TypeQualificationStyle::NameAndContainingTypesAndNamespaces => &self.namespace,
            _ => &[],
        };
        let containers: &[String] = match format.qualification {
            TypeQualificationStyle::NameOnly => &[],
            _ => &self.containing_types,
        };

        namespace
            .iter()
            .chain(containers.iter())
            .chain(std::iter::once(&self.name))
            .map(|segment| format.escape(segment))
            .collect::<Vec<_>>()
            .join(".")
    }
}

/// How much of a symbol's qualification to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeQualificationStyle {
    NameOnly,
    NameAndContainingTypes,
    NameAndContainingTypesAndNamespaces,
}

/// Display settings for symbols. Generic arguments and the global namespace
/// are never rendered.
#[derive(Debug, Clone, Copy)]
pub struct SymbolDisplayFormat {
    pub qualification: TypeQualificationStyle,
    pub escape_keyword_identifiers: bool,
}

impl SymbolDisplayFormat {
    fn escape(&self, segment: &str) -> String {
        if self.escape_keyword_identifiers && CSHARP_KEYWORDS.contains(segment) {
            format!("@{segment}")
        } else {
            segment.to_string()
        }
    }
}

/// Name only: `Line`
pub const NAME_ONLY_FORMAT: SymbolDisplayFormat = SymbolDisplayFormat {
    qualification: TypeQualificationStyle::NameOnly,
    escape_keyword_identifiers: true,
};

/// Name and containing types: `Order.Line`
pub const NESTED_NAME_FORMAT: SymbolDisplayFormat = SymbolDisplayFormat {
    qualification: TypeQualificationStyle::NameAndContainingTypes,
    escape_keyword_identifiers: true,
};

/// Name, containing types and namespaces: `Shop.Orders.Order.Line`
pub const FULL_NAME_FORMAT: SymbolDisplayFormat = SymbolDisplayFormat {
    qualification: TypeQualificationStyle::NameAndContainingTypesAndNamespaces,
    escape_keyword_identifiers: true,
};

const CSHARP_KEYWORD_TEXT: &str = "\
    abstract as base bool break byte case catch char checked class const continue decimal \
    default delegate do double else enum event explicit extern false finally fixed float for \
    foreach goto if implicit in int interface internal is lock long namespace new null object \
    operator out override params private protected public readonly ref return sbyte sealed \
    short sizeof stackalloc static string struct switch this throw true try typeof uint ulong \
    unchecked unsafe ushort using virtual void volatile while";

static CSHARP_KEYWORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| CSHARP_KEYWORD_TEXT.split_whitespace().collect());

/// Name-resolution service over syntax nodes.
///
/// Implementations must be read-only; one instance is shared across threads.
pub trait SemanticModel: Send + Sync {
    /// Referenced type for a name node, declared type for a declaration node.
    fn symbol_for(&self, node: Node<'_>, source: &str) -> Option<TypeSymbol>;

    /// Lookup by unescaped dotted name, optionally arity-suffixed (`Box`1`).
    fn type_by_metadata_name(&self, name: &str) -> Option<TypeSymbol>;
}

/// Nesting-safe fully qualified name of a symbol.
pub fn safe_name_and_namespace(symbol: &TypeSymbol) -> String {
    let name = symbol.to_display_string(&NAME_ONLY_FORMAT);
    let nested = symbol.to_display_string(&NESTED_NAME_FORMAT);
    let full = symbol.to_display_string(&FULL_NAME_FORMAT);

    if name == nested {
        return full;
    }

    let prefix = full
        .strip_suffix(nested.as_str())
        .map(|prefix| prefix.trim_end_matches('.'))
        .unwrap_or_default();
    let segments: Vec<&str> = nested.split('.').collect();
    escape_nested_segments(prefix, &segments)
}

/// Join a namespace prefix with nested type segments, marking every segment
/// but the last with [`ESCAPE_MARKER`].
pub fn escape_nested_segments(prefix: &str, segments: &[&str]) -> String {
    let Some((last, containers)) = segments.split_last() else {
        return prefix.to_string();
    };

    let mut safe = prefix.to_string();
    for part in containers.iter().filter(|part| !part.is_empty()) {
        if !safe.is_empty() {
            safe.push('.');
        }
        safe.push(ESCAPE_MARKER);
        safe.push_str(part);
    }
    if !safe.is_empty() {
        safe.push('.');
    }
    safe.push_str(last);
    safe
}

/// Resolve a node to its nesting-safe name, if a model knows it.
pub fn resolve_safe_name(
    node: Node,
    source: &str,
    model: Option<&dyn SemanticModel>,
) -> Option<String> {
    let model = model?;
    match model.symbol_for(node, source) {
        Some(symbol) => Some(safe_name_and_namespace(&symbol)),
        None => {
            tracing::debug!(
                "no symbol for {} '{}'",
                node.kind(),
                crate::parsing::parser::node_text(node, source)
            );
            None
        }
    }
}

/// `<T1,T2>` from the declared parameters of the resolved generic type.
///
/// `None` when unresolved or when the type declares no parameters.
pub fn safe_type_parameters(
    node: Node,
    source: &str,
    model: Option<&dyn SemanticModel>,
) -> Option<String> {
    let symbol = model?.symbol_for(node, source)?;
    if symbol.type_parameters.is_empty() {
        return None;
    }
    Some(format!("<{}>", symbol.type_parameters.join(",")))
}

/// Strip escape markers and surrounding quotes: `"Shop.@Order.Line"` gives
/// `Shop.Order.Line`.
pub fn de_escape(identifier: &str) -> String {
    identifier
        .trim_matches('"')
        .chars()
        .filter(|c| *c != ESCAPE_MARKER)
        .collect()
}
