//! Source parser
//!
//! This module transforms source text into an Abstract Syntax Tree (AST):
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parse`]: Parsing (tokens → AST)
//! - [`ast`]: AST node definitions
//!
//! # Supported Language
//!
//! A small Python-like subset:
//! - Integer literals and identifiers
//! - Arithmetic `+ - * //` and comparisons `== != > < >= <=`
//! - Conditional expressions `a if cond else b`
//! - Assignments, `return`, and single-statement `def` functions
//! - Statements separated by `;` or line breaks
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser, one method per precedence level.

pub mod ast;
mod declarations;
mod expressions;
pub mod lexer;
pub mod parse;
mod statements;
