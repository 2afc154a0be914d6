//! C# parser wrapper around tree-sitter
//!
//! **Tree-sitter ABI Version**: ABI-14 (tree-sitter-c-sharp 0.23.1)
//!
//! Extraction never parses text itself; hosts and tests obtain trees here.

use crate::error::{ParseError, ParseResult};
use tree_sitter::{Language, Parser, Tree};

/// C# language parser using tree-sitter
pub struct CSharpParser {
    parser: Parser,
}

impl CSharpParser {
    /// Create a new C# parser
    pub fn new() -> ParseResult<Self> {
        let mut parser = Parser::new();
        let language: Language = tree_sitter_c_sharp::LANGUAGE.into();
        parser
            .set_language(&language)
            .map_err(|e| ParseError::ParserInit {
                language: "C#".to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self { parser })
    }

    /// Parse C# source code into a syntax tree
    pub fn parse(&mut self, code: &str) -> ParseResult<Tree> {
        self.parser.parse(code, None).ok_or(ParseError::NoTree)
    }
}
