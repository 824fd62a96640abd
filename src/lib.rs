//! # Introduction
//!
//! py2c translates a small Python-like language into C-like source text.
//! The first assignment to a name becomes an `int` declaration, later ones
//! become plain assignments.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Tokens → Parser → AST → Code generator → C-like text
//! ```
//!
//! 1. [`parser::lexer`] — splits the source into [`Token`]s; line breaks are tokens.
//! 2. [`parser::parse`] — recursive descent into a [`Sequence`] of statements.
//! 3. [`codegen`] — prints the AST, tracking declarations in a [`codegen::Scope`].
//!
//! ```
//! let c = py2c::transpile("x = 1 if y > 0 else 2; x = x + 1").unwrap();
//! assert_eq!(c, "int x = y > 0 ? 1 : 2; x = x + 1;");
//! ```
//!
//! ## Supported subset
//!
//! Integers, identifiers, `+ - * //`, comparisons, conditional expressions,
//! assignments, `return`, and `def` with a single-statement body.

pub mod codegen;
pub mod error;
pub mod parser;

pub use codegen::generate;
pub use error::CompileError;
pub use parser::ast::{BinOp, CmpOp, Expr, Sequence, SourceLocation, Stmt};
pub use parser::lexer::{
    tokenize, tokenize_with_layout, Keyword, Layout, Operator, Punct, Token,
    UnrecognizedTokenError,
};
pub use parser::parse::{parse, parse_with_layout, SyntaxError};

/// Package version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run the full pipeline on one source string.
pub fn transpile(source: &str) -> Result<String, CompileError> {
    let (tokens, layout) = tokenize_with_layout(source)?;
    let program = parse_with_layout(tokens, layout)?;
    Ok(program.evaluate())
}
