//! Expression emission

use crate::parser::ast::Expr;

pub(crate) fn emit_expr(expr: &Expr) -> String {
    match expr {
        Expr::IntegerLiteral(n) => n.to_string(),
        Expr::Identifier(name) => name.clone(),
        Expr::BinaryOp { op, left, right } => {
            format!("{} {} {}", emit_expr(left), op, emit_expr(right))
        }
        Expr::Comparison { op, left, right } => {
            format!("{} {} {}", emit_expr(left), op, emit_expr(right))
        }
        Expr::Conditional {
            condition,
            true_value,
            false_value,
        } => format!(
            "{} ? {} : {}",
            emit_expr(condition),
            emit_expr(true_value),
            emit_expr(false_value)
        ),
        // parentheses around an atom carry no meaning
        Expr::Grouped(inner) if inner.is_compound() => format!("({})", emit_expr(inner)),
        Expr::Grouped(inner) => emit_expr(inner),
    }
}
