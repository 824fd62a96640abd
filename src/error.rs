//! Error type for the whole translation pipeline
//!
//! Lexing and parsing each have their own error; [`CompileError`] wraps
//! either one for callers that run the full pipeline. Code generation
//! cannot fail.

use crate::parser::lexer::UnrecognizedTokenError;
use crate::parser::parse::SyntaxError;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// The source contains a character that starts no token
    Lex(UnrecognizedTokenError),
    /// The tokens do not form a program
    Syntax(SyntaxError),
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::Lex(err) => write!(f, "{}", err),
            CompileError::Syntax(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for CompileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CompileError::Lex(err) => Some(err),
            CompileError::Syntax(err) => Some(err),
        }
    }
}

impl From<UnrecognizedTokenError> for CompileError {
    fn from(err: UnrecognizedTokenError) -> Self {
        CompileError::Lex(err)
    }
}

impl From<SyntaxError> for CompileError {
    fn from(err: SyntaxError) -> Self {
        CompileError::Syntax(err)
    }
}
