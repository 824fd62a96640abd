//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure,
//! including the error type, helper methods, and the main parse entry point.
//!
//! # Parser Architecture
//!
//! The Parser uses a recursive descent approach with the following organization:
//! - This module: Parser struct, helper methods, and coordination
//! - `statements`: statement separators, assignments, `return`
//! - `declarations`: `def` function definitions
//! - `expressions`: conditional, comparison, additive, multiplicative, primary
//!
//! Parser methods are split across multiple files using `impl Parser` blocks,
//! all sharing the token buffer and cursor defined here.

use crate::parser::ast::*;
use crate::parser::lexer::{Keyword, Layout, Operator, Punct, Token};
use std::fmt;

/// Raised when the token sequence does not match the grammar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    /// The construct the parser was looking for
    pub expected: String,
    /// Rendering of the offending token, or "end of input"
    pub found: String,
    /// Index of the offending token in the sequence
    pub position: usize,
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Syntax error at token {}: expected {}, found {}",
            self.position, self.expected, self.found
        )
    }
}

impl std::error::Error for SyntaxError {}

/// Parse a complete token sequence into a program.
pub fn parse(tokens: Vec<Token>) -> Result<Sequence, SyntaxError> {
    let program = Parser::new(tokens).parse_program()?;
    log::debug!("parsed {} top-level statements", program.len());
    Ok(program)
}

/// Parse tokens produced together with their source layout, so that
/// indentation after a multi-line `def` is checked.
pub fn parse_with_layout(tokens: Vec<Token>, layout: Layout) -> Result<Sequence, SyntaxError> {
    let program = Parser::with_layout(tokens, layout).parse_program()?;
    log::debug!("parsed {} top-level statements", program.len());
    Ok(program)
}

/// Recursive descent parser
pub struct Parser {
    pub(crate) tokens: Vec<Token>,
    pub(crate) position: usize,
    pub(crate) layout: Option<Layout>,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            position: 0,
            layout: None,
        }
    }

    pub fn with_layout(tokens: Vec<Token>, layout: Layout) -> Self {
        Self {
            tokens,
            position: 0,
            layout: Some(layout),
        }
    }

    /// Parse the entire program
    pub fn parse_program(&mut self) -> Result<Sequence, SyntaxError> {
        let statements = self.parse_statement_list()?;

        if !self.is_at_end() {
            return Err(self.error("';' or newline"));
        }

        Ok(Sequence::new(statements))
    }

    // ===== Helper methods =====

    pub(crate) fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    pub(crate) fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    pub(crate) fn peek_ahead(&self, n: usize) -> Option<&Token> {
        self.tokens.get(self.position + n)
    }

    pub(crate) fn advance(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.position)?;
        self.position += 1;
        Some(token)
    }

    pub(crate) fn check(&self, token: &Token) -> bool {
        self.peek() == Some(token)
    }

    pub(crate) fn match_token(&mut self, token: &Token) -> bool {
        if self.check(token) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn match_keyword(&mut self, keyword: Keyword) -> bool {
        self.match_token(&Token::Keyword(keyword))
    }

    pub(crate) fn match_punct(&mut self, punct: Punct) -> bool {
        self.match_token(&Token::Punct(punct))
    }

    /// Consume the operator at the cursor if `select` maps it to a node operator
    pub(crate) fn match_operator<T>(&mut self, select: impl Fn(Operator) -> Option<T>) -> Option<T> {
        let selected = match self.peek() {
            Some(Token::Operator(op)) => select(*op),
            _ => None,
        }?;
        self.advance();
        Some(selected)
    }

    /// Returns how many newlines were skipped
    pub(crate) fn skip_newlines(&mut self) -> usize {
        let mut skipped = 0;
        while self.match_token(&Token::Newline) {
            skipped += 1;
        }
        skipped
    }

    /// Indentation of the line holding token `index`, if layout is known
    pub(crate) fn indent_at(&self, index: usize) -> Option<usize> {
        let layout = self.layout.as_ref()?;
        let end = index.min(self.tokens.len());
        let line = self.tokens[..end]
            .iter()
            .filter(|token| **token == Token::Newline)
            .count();
        Some(layout.indent(line))
    }

    /// Build an error describing the token at the cursor
    pub(crate) fn error(&self, expected: &str) -> SyntaxError {
        let found = match self.peek() {
            Some(token) => token.to_string(),
            None => "end of input".to_string(),
        };
        SyntaxError {
            expected: expected.to_string(),
            found,
            position: self.position,
        }
    }

    pub(crate) fn expect_punct(&mut self, punct: Punct, expected: &str) -> Result<(), SyntaxError> {
        if self.match_punct(punct) {
            Ok(())
        } else {
            Err(self.error(expected))
        }
    }

    pub(crate) fn expect_identifier(&mut self, expected: &str) -> Result<String, SyntaxError> {
        if let Some(Token::Ident(name)) = self.peek() {
            let name = name.clone();
            self.advance();
            Ok(name)
        } else {
            Err(self.error(expected))
        }
    }
}
