//! Lowering from the syntax tree to steps.
//!
//! The compiler turns a checked [`Program`] into a flat list of [`Step`]s:
//! the header announcement, one step per declaration, then one step per
//! statement. Identifiers are interned so every step naming the same
//! variable shares one key into the runtime store.

use std::{collections::HashMap, rc::Rc};

use tracing::debug;

use crate::ast::{
    ast::{Expr, Program, Stmt},
    statements::{DeclKind, VarDeclStmt},
};

use super::step::{Operand, Step};

/// A program ready to run.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledProgram {
    pub name: String,
    pub steps: Vec<Step>,
}

#[derive(Debug, Default)]
pub struct Compiler {
    /// Interned identifiers
    names: HashMap<String, Rc<str>>,
}

impl Compiler {
    pub fn new() -> Self {
        Compiler {
            names: HashMap::new(),
        }
    }

    pub fn compile_program(&mut self, program: &Program) -> CompiledProgram {
        let mut steps = vec![Step::Announce {
            program: program.header.name.clone(),
            position: program.header.position.clone(),
        }];

        steps.extend(
            program
                .parameters
                .iter()
                .chain(program.data.iter())
                .map(|declaration| self.compile_declaration(declaration)),
        );

        steps.extend(program.statements.iter().map(|stmt| self.compile_stmt(stmt)));

        debug!(program = %program.header.name, steps = steps.len(), "compiled program");

        CompiledProgram {
            name: program.header.name.clone(),
            steps,
        }
    }

    pub fn compile_declaration(&mut self, declaration: &VarDeclStmt) -> Step {
        let identifier = self.intern(&declaration.identifier);

        match declaration.kind {
            DeclKind::Parameter => Step::PromptAndRead {
                identifier,
                declared_type: declaration.declared_type,
                position: declaration.position.clone(),
            },
            DeclKind::Data => Step::Declare {
                identifier,
                declared_type: declaration.declared_type,
            },
        }
    }

    pub fn compile_stmt(&mut self, stmt: &Stmt) -> Step {
        match stmt {
            Stmt::Assignment(assignment) => Step::Assign {
                identifier: self.intern(&assignment.identifier),
                value: self.compile_expr(&assignment.value),
                position: assignment.position.clone(),
            },
            Stmt::Write(write) => Step::Print {
                arguments: self.compile_exprs(&write.arguments),
                position: write.position.clone(),
            },
            Stmt::Concatenate(concatenate) => Step::Concatenate {
                identifier: self.intern(&concatenate.identifier),
                arguments: self.compile_exprs(&concatenate.arguments),
                position: concatenate.position.clone(),
            },
        }
    }

    pub fn compile_expr(&mut self, expr: &Expr) -> Operand {
        match expr {
            Expr::Symbol(symbol) => Operand::Variable {
                identifier: self.intern(&symbol.value),
                position: symbol.position.clone(),
            },
            Expr::Integer(integer) => Operand::Literal(integer.to_value()),
            Expr::String(string) => Operand::Literal(string.to_value()),
        }
    }

    fn compile_exprs(&mut self, exprs: &[Expr]) -> Vec<Operand> {
        exprs.iter().map(|expr| self.compile_expr(expr)).collect()
    }

    fn intern(&mut self, identifier: &str) -> Rc<str> {
        if let Some(name) = self.names.get(identifier) {
            return Rc::clone(name);
        }

        let name: Rc<str> = Rc::from(identifier);
        self.names.insert(String::from(identifier), Rc::clone(&name));
        name
    }
}

/// Lowers `program`. The program is expected to have passed the checker.
pub fn compile(program: &Program) -> CompiledProgram {
    Compiler::new().compile_program(program)
}
