use crate::Position;

use super::{ast::Expr, types::ValueType};

/// `REPORT <name>.`
#[derive(Debug, Clone, PartialEq)]
pub struct ReportHeader {
    pub name: String,
    pub position: Position,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKind {
    /// Read from input when the program starts.
    Parameter,
    /// Starts out unset.
    Data,
}

/// `PARAMETER <identifier> TYPE <type>.` or `DATA <identifier> TYPE <type>.`
///
/// The surface type name is resolved once by the parser, so the checker and
/// the evaluator always agree on `declared_type`.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDeclStmt {
    pub kind: DeclKind,
    pub identifier: String,
    pub declared_type: ValueType,
    pub position: Position,
}

/// `<identifier> = <expr>.`
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentStmt {
    pub identifier: String,
    pub value: Expr,
    pub position: Position,
}

/// `WRITE <expr> <expr> ... .`
#[derive(Debug, Clone, PartialEq)]
pub struct WriteStmt {
    pub arguments: Vec<Expr>,
    pub position: Position,
}

/// `CONCATENATE <expr> <expr> ... INTO <identifier>.`
#[derive(Debug, Clone, PartialEq)]
pub struct ConcatenateStmt {
    pub arguments: Vec<Expr>,
    pub identifier: String,
    pub position: Position,
}
