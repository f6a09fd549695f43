use crate::Position;

use super::{
    expressions::{IntegerExpr, StringExpr, SymbolExpr},
    statements::{AssignmentStmt, ConcatenateStmt, ReportHeader, VarDeclStmt, WriteStmt},
};

/// The root of a parsed program.
///
/// Declarations are kept in the order the grammar requires them: every
/// parameter, then every data item, then the statements.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub header: ReportHeader,
    pub parameters: Vec<VarDeclStmt>,
    pub data: Vec<VarDeclStmt>,
    pub statements: Vec<Stmt>,
}

/// Statement
///
/// Every executable statement kind. Both the checker and the evaluator match
/// on this exhaustively.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Assignment(AssignmentStmt),
    Write(WriteStmt),
    Concatenate(ConcatenateStmt),
}

impl Stmt {
    pub fn get_position(&self) -> &Position {
        match self {
            Stmt::Assignment(stmt) => &stmt.position,
            Stmt::Write(stmt) => &stmt.position,
            Stmt::Concatenate(stmt) => &stmt.position,
        }
    }
}

/// Expression
///
/// An identifier reference or a literal. There are no operators.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Symbol(SymbolExpr),
    Integer(IntegerExpr),
    String(StringExpr),
}

impl Expr {
    pub fn get_position(&self) -> &Position {
        match self {
            Expr::Symbol(expr) => &expr.position,
            Expr::Integer(expr) => &expr.position,
            Expr::String(expr) => &expr.position,
        }
    }

    /// The expression exactly as it was written in the source.
    pub fn get_text(&self) -> &str {
        match self {
            Expr::Symbol(expr) => &expr.value,
            Expr::Integer(expr) => &expr.text,
            Expr::String(expr) => &expr.text,
        }
    }
}
