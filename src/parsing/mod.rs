//! Parsing layer
//!
//! Syntax trees come from tree-sitter; [`csharp`] holds the name resolution
//! and relationship extraction built on them.

pub mod csharp;
pub mod parser;

pub use parser::{MAX_AST_DEPTH, ParsedFile, check_recursion_depth, node_text};
