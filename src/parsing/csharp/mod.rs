//! C# support for umlgraph
//!
//! Turns C# syntax trees into type names and class-diagram relationships.
//!
//! # Supported Features
//!
//! ## Type Names
//! - Fully qualified, nesting-safe names when a semantic model answers
//! - Qualified-name fallback from syntax alone
//! - Generic arity suffixes with written arguments or placeholders
//!
//! ## Relationships
//! - Inheritance from base lists
//! - Nesting of type declarations
//! - Associations from fields, properties and record parameters
//! - Author overrides through association attributes
//!
//! # Architecture
//!
//! - [`syntax`] - Typed views over tree-sitter nodes
//! - [`qualified`] - Syntax-only qualified names
//! - [`resolution`] - Semantic model trait and nesting-safe names
//! - [`symbol_table`] - Declaration table over parsed files
//! - [`type_name`] - Type name text per syntactic shape
//! - [`type_definition`] - Definition lines
//! - [`attributes`] - Association override attributes
//! - [`extractor`] - Per-node relationship rules
//! - [`walker`] - Whole-file extraction
//!
//! # Example
//!
//! ```no_run
//! use umlgraph::Settings;
//! use umlgraph::parsing::csharp::{CSharpParser, DeclarationTable, extract_file};
//!
//! let code = "class Outer { class Inner { } private readonly Inner item; }";
//! let mut parser = CSharpParser::new().expect("Failed to create parser");
//! let tree = parser.parse(code).expect("Failed to parse");
//! let table = DeclarationTable::from_files([(&tree, code)]);
//! let relationships = extract_file(&tree, code, Some(&table), &Settings::default());
//! assert_eq!(relationships.len(), 2);
//! ```

pub mod attributes;
pub mod extractor;
pub mod generic_types;
pub mod parser;
pub mod qualified;
pub mod resolution;
pub mod symbol_table;
pub mod syntax;
pub mod type_definition;
pub mod type_name;
pub mod walker;

pub use attributes::{AssociationOverride, MemberAnnotations};
pub use parser::CSharpParser;
pub use resolution::{ESCAPE_MARKER, SemanticModel, TypeKind, TypeSymbol};
pub use symbol_table::DeclarationTable;
pub use syntax::{MemberSite, NameSyntax, ParameterOwner, TypeDeclaration, TypeSyntax};
pub use type_definition::type_definition_text;
pub use type_name::NameSite;
pub use walker::{extract_declaration, extract_file, type_declarations};
