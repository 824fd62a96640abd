//! Function definition parsing
//!
//! ```text
//! function_def ::= 'def' identifier '(' params? ')' ':' newline* statement
//! params       ::= identifier (',' identifier)*
//! ```
//!
//! The body is a single statement; it may start on the line after the colon.
//! When the parser knows the source layout, such a body must be indented
//! deeper than its `def`, and the line after it must not be.

use crate::parser::ast::*;
use crate::parser::lexer::{Punct, Token};
use crate::parser::parse::{Parser, SyntaxError};

impl Parser {
    /// Parse a function definition (the `def` keyword is already consumed)
    pub(crate) fn parse_function_def(&mut self) -> Result<Stmt, SyntaxError> {
        let def_index = self.position - 1;
        let name = self.expect_identifier("function name after 'def'")?;
        self.expect_punct(Punct::LParen, "'(' after function name")?;
        let params = self.parse_params()?;
        self.expect_punct(Punct::RParen, "')' after parameters")?;
        self.expect_punct(Punct::Colon, "':' after parameter list")?;

        if self.skip_newlines() == 0 {
            let statement = self.parse_statement()?;
            return Ok(Stmt::FunctionDef {
                name,
                params,
                body: Sequence::new(vec![statement]),
            });
        }

        if let (Some(def_indent), Some(body_indent)) =
            (self.indent_at(def_index), self.indent_at(self.position))
        {
            if body_indent <= def_indent && !self.is_at_end() {
                return Err(self.error("indented function body"));
            }
        }
        let statement = self.parse_statement()?;
        self.expect_single_line_body(def_index)?;

        Ok(Stmt::FunctionDef {
            name,
            params,
            body: Sequence::new(vec![statement]),
        })
    }

    /// A body on its own line holds one statement: the next non-blank line
    /// must not be indented deeper than the `def`.
    fn expect_single_line_body(&self, def_index: usize) -> Result<(), SyntaxError> {
        let mut next = self.position;
        while self.tokens.get(next) == Some(&Token::Newline) {
            next += 1;
        }
        if next == self.position || next >= self.tokens.len() {
            return Ok(());
        }

        match (self.indent_at(def_index), self.indent_at(next)) {
            (Some(def_indent), Some(indent)) if indent > def_indent => Err(SyntaxError {
                expected: "statement at the indentation of 'def'".to_string(),
                found: format!("indented {}", self.tokens[next]),
                position: next,
            }),
            _ => Ok(()),
        }
    }

    fn parse_params(&mut self) -> Result<Vec<String>, SyntaxError> {
        let mut params = Vec::new();

        if self.check(&Token::Punct(Punct::RParen)) {
            return Ok(params);
        }

        loop {
            params.push(self.expect_identifier("parameter name")?);
            if !self.match_punct(Punct::Comma) {
                break;
            }
        }

        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::ast::*;
    use crate::parser::lexer::{tokenize, tokenize_with_layout};
    use crate::parser::parse::{parse, parse_with_layout};

    #[test]
    fn test_no_parameters() {
        let program = parse(tokenize("def zero(): return 0").unwrap()).unwrap();
        match &program.statements[0] {
            Stmt::FunctionDef { name, params, .. } => {
                assert_eq!(name, "zero");
                assert!(params.is_empty());
            }
            other => panic!("Expected function definition, got {:?}", other),
        }
    }

    #[test]
    fn test_body_on_next_line() {
        let program = parse(tokenize("def f(a):\n    return a\nf").unwrap()).unwrap();
        assert_eq!(program.len(), 2);
        assert!(matches!(program.statements[0], Stmt::FunctionDef { .. }));
        assert_eq!(
            program.statements[1],
            Stmt::Expression(Expr::Identifier("f".to_string()))
        );
    }

    #[test]
    fn test_second_indented_body_line_is_rejected() {
        let (tokens, layout) = tokenize_with_layout("def f(a):\n  x = a\n  return x").unwrap();
        let err = parse_with_layout(tokens, layout).unwrap_err();
        assert_eq!(err.expected, "statement at the indentation of 'def'");
        assert_eq!(err.found, "indented 'return'");
        assert_eq!(err.position, 11);
    }

    #[test]
    fn test_unindented_body_is_rejected() {
        let (tokens, layout) = tokenize_with_layout("def f(a):\nreturn a").unwrap();
        let err = parse_with_layout(tokens, layout).unwrap_err();
        assert_eq!(err.expected, "indented function body");
    }

    #[test]
    fn test_nested_definition_layout() {
        let source = "def f(a):\n  def g(b):\n    return b\nx = 1";
        let (tokens, layout) = tokenize_with_layout(source).unwrap();
        let program = parse_with_layout(tokens, layout).unwrap();
        assert_eq!(program.len(), 2);

        let source = "def f(a):\n  def g(b):\n    return b\n  x = 1";
        let (tokens, layout) = tokenize_with_layout(source).unwrap();
        assert!(parse_with_layout(tokens, layout).is_err());
    }

    #[test]
    fn test_missing_colon() {
        let err = parse(tokenize("def f(a) return a").unwrap()).unwrap_err();
        assert_eq!(err.expected, "':' after parameter list");
        assert_eq!(err.found, "'return'");
    }

    #[test]
    fn test_trailing_comma_in_parameters() {
        let err = parse(tokenize("def f(a,): return a").unwrap()).unwrap_err();
        assert_eq!(err.expected, "parameter name");
    }

    #[test]
    fn test_keyword_as_function_name() {
        assert!(parse(tokenize("def if(): return 1").unwrap()).is_err());
    }
}
