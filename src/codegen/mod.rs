//! C-like code generation
//!
//! Walks the AST produced by [`crate::parser`] and prints C-like source:
//! - [`scope`]: the declaration set that decides between `int x = ...;` and `x = ...;`
//! - `statements`: sequences, assignments, `return`, function definitions
//! - `expressions`: literals, operators, conditionals, explicit parentheses
//!
//! Generation is total over every AST, so nothing here returns a `Result`.
//! Every [`Sequence`] is emitted against a [`Scope`] handed down by its owner:
//! the program starts empty, and each function body starts from its parameters.

mod expressions;
pub mod scope;
mod statements;

pub use scope::Scope;

use crate::parser::ast::{Expr, Sequence, Stmt};

/// Generate C-like text for a whole program.
pub fn generate(program: &Sequence) -> String {
    let output = statements::emit_sequence(program, &mut Scope::new());
    log::debug!("generated {} bytes of output", output.len());
    output
}

impl Sequence {
    /// Translate this sequence with a fresh, empty scope.
    pub fn evaluate(&self) -> String {
        generate(self)
    }
}

impl Stmt {
    /// Translate a lone statement as if it started its own program.
    pub fn evaluate(&self) -> String {
        statements::emit_statement(self, &mut Scope::new())
    }
}

impl Expr {
    /// Translate an expression; no trailing `;`.
    pub fn evaluate(&self) -> String {
        expressions::emit_expr(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::ast::{BinOp, CmpOp, Expr, Sequence, Stmt};

    #[test]
    fn test_expression_evaluates_without_semicolon() {
        let expr = Expr::Conditional {
            condition: Box::new(Expr::Comparison {
                op: CmpOp::Ne,
                left: Box::new(Expr::Identifier("n".to_string())),
                right: Box::new(Expr::IntegerLiteral(0)),
            }),
            true_value: Box::new(Expr::Grouped(Box::new(Expr::BinaryOp {
                op: BinOp::Div,
                left: Box::new(Expr::IntegerLiteral(10)),
                right: Box::new(Expr::Identifier("n".to_string())),
            }))),
            false_value: Box::new(Expr::IntegerLiteral(0)),
        };
        assert_eq!(expr.evaluate(), "n != 0 ? (10 / n) : 0");
    }

    #[test]
    fn test_statement_evaluates_with_fresh_scope() {
        let stmt = Stmt::Assignment {
            name: "x".to_string(),
            value: Expr::IntegerLiteral(1),
        };
        assert_eq!(stmt.evaluate(), "int x = 1;");
        // a second call does not remember the first
        assert_eq!(stmt.evaluate(), "int x = 1;");
        assert_eq!(Stmt::Return(Expr::IntegerLiteral(3)).evaluate(), "return 3;");
    }

    #[test]
    fn test_sequence_evaluate_matches_generate() {
        let program = Sequence::new(vec![
            Stmt::Expression(Expr::Identifier("y".to_string())),
            Stmt::Assignment {
                name: "y".to_string(),
                value: Expr::IntegerLiteral(2),
            },
        ]);
        assert_eq!(program.evaluate(), "y; int y = 2;");
        assert_eq!(super::generate(&program), program.evaluate());
    }
}
