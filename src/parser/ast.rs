// AST (Abstract Syntax Tree) definitions for the translator

use std::fmt;

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Arithmetic operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    /// Spelling in the generated output
    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmpOp {
    Eq,
    Ne,
    Gt,
    Lt,
    Ge,
    Le,
}

impl CmpOp {
    /// Spelling in the generated output
    pub fn symbol(self) -> &'static str {
        match self {
            CmpOp::Eq => "==",
            CmpOp::Ne => "!=",
            CmpOp::Gt => ">",
            CmpOp::Lt => "<",
            CmpOp::Ge => ">=",
            CmpOp::Le => "<=",
        }
    }
}

impl fmt::Display for CmpOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Expression nodes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    IntegerLiteral(u64),
    Identifier(String),
    BinaryOp {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Comparison {
        op: CmpOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// `true_value if condition else false_value`
    Conditional {
        condition: Box<Expr>,
        true_value: Box<Expr>,
        false_value: Box<Expr>,
    },
    /// Explicit parentheses from the source
    Grouped(Box<Expr>),
}

impl Expr {
    /// Whether the node is built from an operator, as opposed to an atom.
    pub fn is_compound(&self) -> bool {
        matches!(
            self,
            Expr::BinaryOp { .. } | Expr::Comparison { .. } | Expr::Conditional { .. }
        )
    }
}

/// Statement nodes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    Assignment {
        name: String,
        value: Expr,
    },
    Return(Expr),
    FunctionDef {
        name: String,
        params: Vec<String>,
        body: Sequence,
    },
    Expression(Expr),
}

/// Ordered statements: a whole program or a function body
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sequence {
    pub statements: Vec<Stmt>,
}

impl Sequence {
    pub fn new(statements: Vec<Stmt>) -> Self {
        Sequence { statements }
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}
