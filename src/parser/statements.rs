//! Statement parsing implementation
//!
//! # Grammar
//!
//! ```text
//! program   ::= sep* statement (sep+ statement)* newline*
//! sep       ::= ';' | newline
//! statement ::= function_def | return | assignment | expression
//! ```
//!
//! A `;` always requires another statement after it; line breaks may trail.

use crate::parser::ast::*;
use crate::parser::lexer::{Keyword, Operator, Punct, Token};
use crate::parser::parse::{Parser, SyntaxError};

impl Parser {
    /// Parse separated top-level statements
    pub(crate) fn parse_statement_list(&mut self) -> Result<Vec<Stmt>, SyntaxError> {
        self.skip_newlines();
        let mut statements = vec![self.parse_statement()?];

        loop {
            let mut separated = false;
            let mut needs_statement = false;

            loop {
                if self.match_punct(Punct::Semicolon) {
                    separated = true;
                    needs_statement = true;
                } else if self.match_token(&Token::Newline) {
                    separated = true;
                } else {
                    break;
                }
            }

            if !separated || (self.is_at_end() && !needs_statement) {
                break;
            }

            statements.push(self.parse_statement()?);
        }

        Ok(statements)
    }

    /// Parse a statement
    pub(crate) fn parse_statement(&mut self) -> Result<Stmt, SyntaxError> {
        if self.match_keyword(Keyword::Def) {
            return self.parse_function_def();
        }

        if self.match_keyword(Keyword::Return) {
            let value = self.parse_expression()?;
            return Ok(Stmt::Return(value));
        }

        // `name = value`, but not `name == value`
        if matches!(self.peek(), Some(Token::Ident(_)))
            && self.peek_ahead(1) == Some(&Token::Operator(Operator::Assign))
        {
            return self.parse_assignment();
        }

        let expr = self.parse_expression()?;
        Ok(Stmt::Expression(expr))
    }

    fn parse_assignment(&mut self) -> Result<Stmt, SyntaxError> {
        let name = self.expect_identifier("assignment target")?;
        if !self.match_token(&Token::Operator(Operator::Assign)) {
            return Err(self.error("'='"));
        }
        let value = self.parse_expression()?;
        Ok(Stmt::Assignment { name, value })
    }
}
