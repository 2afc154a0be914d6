/// The main library module for umlgraph
pub mod config;
pub mod error;
pub mod io;
pub mod parsing;
pub mod relationship;
pub mod render;

// Explicit exports for better API clarity
pub use config::Settings;
pub use error::{GraphError, GraphResult, ParseError, ParseResult};
pub use parsing::csharp::{
    AssociationOverride, CSharpParser, DeclarationTable, SemanticModel, TypeSymbol,
    extract_file, type_definition_text,
};
pub use relationship::{RelationKind, Relationship, RelationshipCollection, TypeNameText};
