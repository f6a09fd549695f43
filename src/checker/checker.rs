use tracing::debug;

use crate::{
    ast::{
        ast::{Expr, Program, Stmt},
        statements::{AssignmentStmt, ConcatenateStmt, VarDeclStmt, WriteStmt},
        types::{coerce, Value, ValueType},
    },
    errors::errors::{Error, ErrorImpl},
    Position,
};

use super::symbol_table::{Declaration, SymbolTable};

/// The type of a resolved expression and how it was written.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprInfo {
    pub value_type: ValueType,
    pub text: String,
}

/// Walks a program once, declaring identifiers as it meets them and
/// collecting every diagnostic instead of stopping at the first.
#[derive(Debug, Default)]
pub struct Checker {
    symbols: SymbolTable,
}

impl Checker {
    pub fn new() -> Self {
        Checker {
            symbols: SymbolTable::new(),
        }
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Diagnostics for parameters, then data, then statements, each group in
    /// source order.
    pub fn check_program(&mut self, program: &Program) -> Vec<Error> {
        let mut diagnostics = vec![];

        for declaration in program.parameters.iter().chain(program.data.iter()) {
            diagnostics.extend(self.check_declaration(declaration));
        }

        for stmt in &program.statements {
            diagnostics.extend(self.check_stmt(stmt));
        }

        debug!(
            program = %program.header.name,
            declared = self.symbols.len(),
            diagnostics = diagnostics.len(),
            "checked program"
        );

        diagnostics
    }

    pub fn check_declaration(&mut self, declaration: &VarDeclStmt) -> Option<Error> {
        debug!(
            identifier = %declaration.identifier,
            ty = %declaration.declared_type,
            line = declaration.position.line(),
            "declaring"
        );

        self.symbols
            .declare(Declaration {
                identifier: declaration.identifier.clone(),
                declared_type: declaration.declared_type,
                position: declaration.position.clone(),
            })
            .err()
    }

    pub fn check_stmt(&self, stmt: &Stmt) -> Vec<Error> {
        match stmt {
            Stmt::Assignment(assignment) => self.check_assignment(assignment),
            Stmt::Write(write) => self.check_write(write),
            Stmt::Concatenate(concatenate) => self.check_concatenate(concatenate),
        }
    }

    fn check_assignment(&self, stmt: &AssignmentStmt) -> Vec<Error> {
        let mut diagnostics = vec![];

        let target = self.symbols.require(&stmt.identifier, &stmt.position);
        if let Err(error) = &target {
            diagnostics.push(error.clone());
        }

        if let Err(error) = self.check_expr(&stmt.value) {
            diagnostics.push(error);
        }

        // A literal's value is known now, so a coercion that can never
        // succeed is reported here rather than at runtime.
        if let (Ok(target), Some(value)) = (target, literal_value(&stmt.value)) {
            if let Err(failure) = coerce(value, target.declared_type) {
                diagnostics.push(Error::new(
                    ErrorImpl::CoercionFailed {
                        value: failure.value,
                        target: failure.target,
                    },
                    stmt.position.clone(),
                ));
            }
        }

        diagnostics
    }

    fn check_write(&self, stmt: &WriteStmt) -> Vec<Error> {
        self.check_string_arguments(&stmt.arguments, &stmt.position)
    }

    fn check_concatenate(&self, stmt: &ConcatenateStmt) -> Vec<Error> {
        let mut diagnostics = self.check_string_arguments(&stmt.arguments, &stmt.position);

        if let Err(error) = self.symbols.require(&stmt.identifier, &stmt.position) {
            diagnostics.push(error);
        }

        diagnostics
    }

    /// Undefined identifiers first, then every resolved argument that is not
    /// a string.
    fn check_string_arguments(&self, arguments: &[Expr], position: &Position) -> Vec<Error> {
        let (resolved, unresolved): (Vec<_>, Vec<_>) = arguments
            .iter()
            .map(|argument| self.check_expr(argument))
            .partition(Result::is_ok);

        let mismatches = resolved
            .into_iter()
            .flatten()
            .filter(|info| info.value_type != ValueType::String)
            .map(|info| Error::new(ErrorImpl::NotAString { text: info.text }, position.clone()));

        unresolved
            .into_iter()
            .filter_map(Result::err)
            .chain(mismatches)
            .collect()
    }

    pub fn check_expr(&self, expr: &Expr) -> Result<ExprInfo, Error> {
        match expr {
            Expr::Symbol(symbol) => {
                let declaration = self.symbols.require(&symbol.value, &symbol.position)?;
                Ok(ExprInfo {
                    value_type: declaration.declared_type,
                    text: symbol.value.clone(),
                })
            }
            Expr::Integer(integer) => Ok(ExprInfo {
                value_type: ValueType::Integer,
                text: integer.text.clone(),
            }),
            Expr::String(string) => Ok(ExprInfo {
                value_type: ValueType::String,
                text: string.text.clone(),
            }),
        }
    }
}

fn literal_value(expr: &Expr) -> Option<Value> {
    match expr {
        Expr::Symbol(_) => None,
        Expr::Integer(integer) => Some(integer.to_value()),
        Expr::String(string) => Some(string.to_value()),
    }
}

/// Checks `program` with a fresh symbol table. An empty result means the
/// program is safe to run.
pub fn check(program: &Program) -> Vec<Error> {
    Checker::new().check_program(program)
}
