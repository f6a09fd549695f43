use std::collections::HashMap;

use crate::{
    ast::types::ValueType,
    errors::errors::{Error, ErrorImpl},
    Position,
};

/// What the checker knows about a declared identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub identifier: String,
    pub declared_type: ValueType,
    pub position: Position,
}

/// Every parameter and data item declared so far. There is a single scope,
/// and a declaration is never replaced once inserted.
#[derive(Debug, Default)]
pub struct SymbolTable {
    declarations: HashMap<String, Declaration>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable {
            declarations: HashMap::new(),
        }
    }

    /// Records `declaration`, or reports where the identifier was first
    /// declared if it already exists.
    pub fn declare(&mut self, declaration: Declaration) -> Result<(), Error> {
        if let Some(existing) = self.declarations.get(&declaration.identifier) {
            Err(Error::new(
                ErrorImpl::AlreadyDefined {
                    identifier: declaration.identifier,
                    line: existing.position.line(),
                },
                declaration.position,
            ))
        } else {
            self.declarations
                .insert(declaration.identifier.clone(), declaration);
            Ok(())
        }
    }

    pub fn get_variable(&self, identifier: &str) -> Option<&Declaration> {
        self.declarations.get(identifier)
    }

    /// Looks `identifier` up, reporting it as undefined at `position` when
    /// it is missing.
    pub fn require(&self, identifier: &str, position: &Position) -> Result<&Declaration, Error> {
        self.get_variable(identifier).ok_or_else(|| {
            Error::new(
                ErrorImpl::NotDefined {
                    identifier: String::from(identifier),
                },
                position.clone(),
            )
        })
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}
