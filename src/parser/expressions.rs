//! Expression parsing implementation
//!
//! One method per precedence level, lowest first:
//!
//! ```text
//! expression     ::= conditional
//! conditional    ::= comparison ('if' comparison 'else' comparison)?
//! comparison     ::= additive (cmp_op additive)?
//! additive       ::= multiplicative (('+' | '-') multiplicative)*
//! multiplicative ::= primary (('*' | '/') primary)*
//! primary        ::= integer | identifier | '(' expression ')'
//! ```
//!
//! Comparisons do not chain. Parenthesized expressions are wrapped in
//! [`Expr::Grouped`] so code generation can reproduce them.

use crate::parser::ast::*;
use crate::parser::lexer::{Keyword, Operator, Punct, Token};
use crate::parser::parse::{Parser, SyntaxError};

impl Parser {
    /// Parse expression (top-level entry point)
    pub(crate) fn parse_expression(&mut self) -> Result<Expr, SyntaxError> {
        self.parse_conditional()
    }

    /// Parse `value if condition else other`
    fn parse_conditional(&mut self) -> Result<Expr, SyntaxError> {
        let value = self.parse_comparison()?;

        if !self.match_keyword(Keyword::If) {
            return Ok(value);
        }

        let condition = self.parse_comparison()?;
        if !self.match_keyword(Keyword::Else) {
            return Err(self.error("'else' in conditional expression"));
        }
        let other = self.parse_comparison()?;

        Ok(Expr::Conditional {
            condition: Box::new(condition),
            true_value: Box::new(value),
            false_value: Box::new(other),
        })
    }

    fn parse_comparison(&mut self) -> Result<Expr, SyntaxError> {
        let left = self.parse_additive()?;

        let op = self.match_operator(|op| match op {
            Operator::EqEq => Some(CmpOp::Eq),
            Operator::NotEq => Some(CmpOp::Ne),
            Operator::Gt => Some(CmpOp::Gt),
            Operator::Lt => Some(CmpOp::Lt),
            Operator::Ge => Some(CmpOp::Ge),
            Operator::Le => Some(CmpOp::Le),
            _ => None,
        });

        match op {
            Some(op) => {
                let right = self.parse_additive()?;
                Ok(Expr::Comparison {
                    op,
                    left: Box::new(left),
                    right: Box::new(right),
                })
            }
            None => Ok(left),
        }
    }

    fn parse_additive(&mut self) -> Result<Expr, SyntaxError> {
        let mut left = self.parse_multiplicative()?;

        while let Some(op) = self.match_operator(|op| match op {
            Operator::Plus => Some(BinOp::Add),
            Operator::Minus => Some(BinOp::Sub),
            _ => None,
        }) {
            let right = self.parse_multiplicative()?;
            left = Expr::BinaryOp {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    fn parse_multiplicative(&mut self) -> Result<Expr, SyntaxError> {
        let mut left = self.parse_primary()?;

        while let Some(op) = self.match_operator(|op| match op {
            Operator::Star => Some(BinOp::Mul),
            Operator::Slash => Some(BinOp::Div),
            _ => None,
        }) {
            let right = self.parse_primary()?;
            left = Expr::BinaryOp {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    fn parse_primary(&mut self) -> Result<Expr, SyntaxError> {
        match self.peek() {
            Some(Token::IntLiteral(n)) => {
                let n = *n;
                self.advance();
                Ok(Expr::IntegerLiteral(n))
            }
            Some(Token::Ident(name)) => {
                let name = name.clone();
                self.advance();
                Ok(Expr::Identifier(name))
            }
            Some(Token::Punct(Punct::LParen)) => {
                self.advance();
                let inner = self.parse_expression()?;
                self.expect_punct(Punct::RParen, "')' to close '('")?;
                Ok(Expr::Grouped(Box::new(inner)))
            }
            _ => Err(self.error("expression")),
        }
    }
}
