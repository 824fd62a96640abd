//! Statement emission
//!
//! Each statement ends with its own `;`, including function definitions
//! (`int f(int a) { return a; };`). Sequences join statements with one space.

use crate::codegen::expressions::emit_expr;
use crate::codegen::scope::Scope;
use crate::parser::ast::{Sequence, Stmt};

pub(crate) fn emit_sequence(sequence: &Sequence, scope: &mut Scope) -> String {
    sequence
        .statements
        .iter()
        .map(|statement| emit_statement(statement, scope))
        .collect::<Vec<_>>()
        .join(" ")
}

pub(crate) fn emit_statement(statement: &Stmt, scope: &mut Scope) -> String {
    match statement {
        Stmt::Assignment { name, value } => {
            let value = emit_expr(value);
            if scope.declare(name) {
                format!("int {} = {};", name, value)
            } else {
                format!("{} = {};", name, value)
            }
        }
        Stmt::Return(value) => format!("return {};", emit_expr(value)),
        Stmt::FunctionDef { name, params, body } => {
            let signature = params
                .iter()
                .map(|param| format!("int {}", param))
                .collect::<Vec<_>>()
                .join(", ");
            let mut body_scope = Scope::for_function(params);
            let body = emit_sequence(body, &mut body_scope);
            format!("int {}({}) {{ {} }};", name, signature, body)
        }
        Stmt::Expression(expr) => format!("{};", emit_expr(expr)),
    }
}
