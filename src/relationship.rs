//! Relationship records produced by extraction
//!
//! A [`Relationship`] is a directional, labeled edge between two
//! [`TypeNameText`] endpoints. Records are collected in creation order in a
//! [`RelationshipCollection`]; nothing is deduplicated.

use serde::{Deserialize, Serialize};

/// Printable name of a type reference or declaration.
///
/// `identifier` is escaped and, for generics, arity-suffixed and quoted
/// (`"Box`1"`). `type_arguments` is empty or an angle-bracket list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeNameText {
    pub identifier: String,
    pub type_arguments: String,
}

impl TypeNameText {
    pub fn new(identifier: impl Into<String>, type_arguments: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            type_arguments: type_arguments.into(),
        }
    }

    /// A name supplied verbatim by the author, with no type arguments.
    pub fn explicit(identifier: impl Into<String>) -> Self {
        Self::new(identifier, String::new())
    }
}

impl std::fmt::Display for TypeNameText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.identifier, self.type_arguments)
    }
}

/// Kind of diagram edge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    /// Base type to derived type
    Inheritance,
    /// Outer type to nested type
    Nesting,
    /// Member type to an owner that does not construct it
    Association,
    /// Member type to an owner that initializes it
    Aggregation,
    /// Override without an explicit association symbol
    Link,
    /// Override with an author-supplied symbol, rendered verbatim
    Custom(String),
}

impl RelationKind {
    /// Kind for an association override. A missing or empty symbol is a plain link.
    pub fn from_override(symbol: Option<&str>) -> Self {
        match symbol.map(str::trim) {
            Some(symbol) if !symbol.is_empty() => Self::Custom(symbol.to_string()),
            _ => Self::Link,
        }
    }

    /// Whether this edge was inferred from a member declaration.
    #[must_use]
    pub fn is_implicit_association(&self) -> bool {
        matches!(self, Self::Association | Self::Aggregation)
    }
}

/// A directional edge between two types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    source: TypeNameText,
    target: TypeNameText,
    kind: RelationKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    source_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    target_label: Option<String>,
}

impl Relationship {
    pub fn new(source: TypeNameText, target: TypeNameText, kind: RelationKind) -> Self {
        Self {
            source,
            target,
            kind,
            label: None,
            source_label: None,
            target_label: None,
        }
    }

    /// Attach labels. Empty strings are treated as absent.
    pub fn with_labels(
        mut self,
        source_label: Option<String>,
        target_label: Option<String>,
        label: Option<String>,
    ) -> Self {
        self.source_label = source_label.filter(|l| !l.is_empty());
        self.target_label = target_label.filter(|l| !l.is_empty());
        self.label = label.filter(|l| !l.is_empty());
        self
    }

    pub fn source(&self) -> &TypeNameText {
        &self.source
    }

    pub fn target(&self) -> &TypeNameText {
        &self.target
    }

    pub fn kind(&self) -> &RelationKind {
        &self.kind
    }

    /// Label on the edge itself
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Label next to the source endpoint
    pub fn source_label(&self) -> Option<&str> {
        self.source_label.as_deref()
    }

    /// Label next to the target endpoint
    pub fn target_label(&self) -> Option<&str> {
        self.target_label.as_deref()
    }
}

/// Ordered, append-only sequence of relationships.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RelationshipCollection {
    items: Vec<Relationship>,
}

impl RelationshipCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, relationship: Relationship) {
        self.items.push(relationship);
    }

    /// Append every record of another collection, keeping both orders.
    pub fn append(&mut self, other: RelationshipCollection) {
        self.items.extend(other.items);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Relationship> {
        self.items.iter()
    }
}

impl IntoIterator for RelationshipCollection {
    type Item = Relationship;
    type IntoIter = std::vec::IntoIter<Relationship>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a RelationshipCollection {
    type Item = &'a Relationship;
    type IntoIter = std::slice::Iter<'a, Relationship>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl FromIterator<RelationshipCollection> for RelationshipCollection {
    fn from_iter<I: IntoIterator<Item = RelationshipCollection>>(iter: I) -> Self {
        let mut merged = RelationshipCollection::new();
        for collection in iter {
            merged.append(collection);
        }
        merged
    }
}
