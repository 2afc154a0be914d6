//! Shared parsing helpers
//!
//! Holds the recursion guard used by every tree walk and the [`ParsedFile`]
//! bundle handed from file loading to extraction.

use crate::error::{GraphError, GraphResult};
use crate::parsing::csharp::CSharpParser;
use std::path::{Path, PathBuf};
use tree_sitter::{Node, Tree};

/// Maximum depth for recursive AST traversal.
/// Deeper nodes are skipped to protect the stack on generated code.
pub const MAX_AST_DEPTH: usize = 500;

/// Returns false once `depth` exceeds [`MAX_AST_DEPTH`].
pub fn check_recursion_depth(depth: usize, node: Node) -> bool {
    if depth > MAX_AST_DEPTH {
        tracing::warn!(
            "Maximum AST depth {MAX_AST_DEPTH} exceeded at {}:{} ({}), skipping subtree",
            node.start_position().row + 1,
            node.start_position().column + 1,
            node.kind()
        );
        return false;
    }
    true
}

/// Text covered by a node.
pub fn node_text<'a>(node: Node, source: &'a str) -> &'a str {
    source.get(node.byte_range()).unwrap_or_default()
}

/// A source file together with its syntax tree.
pub struct ParsedFile {
    pub path: PathBuf,
    pub source: String,
    pub tree: Tree,
}

impl ParsedFile {
    /// Read and parse a C# file.
    pub fn load(path: &Path, parser: &mut CSharpParser) -> GraphResult<Self> {
        let source = std::fs::read_to_string(path).map_err(|source| GraphError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_source(path, source, parser)
    }

    /// Parse source text that is already in memory.
    pub fn from_source(
        path: &Path,
        source: impl Into<String>,
        parser: &mut CSharpParser,
    ) -> GraphResult<Self> {
        let source = source.into();
        let tree = parser
            .parse(source.as_str())
            .map_err(|e| GraphError::ParseError {
                path: path.to_path_buf(),
                language: "C#".to_string(),
                reason: e.to_string(),
            })?;

        if tree.root_node().has_error() {
            tracing::debug!(
                "{} contains syntax errors, extracting what parsed",
                path.display()
            );
        }

        Ok(Self {
            path: path.to_path_buf(),
            source,
            tree,
        })
    }
}
