use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::types::{Value, ValueType},
    errors::errors::{Error, ErrorImpl},
    Position,
};

/// The contents of a binding. `DATA` items start out `Unset`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot {
    Unset,
    Set(Value),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub declared_type: ValueType,
    pub slot: Slot,
}

/// Runtime variables, one binding per identifier.
///
/// Keys are the interned identifiers handed out by the compiler, so every
/// step naming a variable shares the same key.
#[derive(Debug, Default, Clone)]
pub struct VariableStore {
    bindings: HashMap<Rc<str>, Binding>,
}

impl VariableStore {
    pub fn new() -> Self {
        VariableStore {
            bindings: HashMap::new(),
        }
    }

    /// Creates the binding for `identifier`. Checked programs declare each
    /// identifier once; a repeated declaration replaces the binding.
    pub fn declare(&mut self, identifier: Rc<str>, declared_type: ValueType, slot: Slot) {
        self.bindings.insert(identifier, Binding { declared_type, slot });
    }

    pub fn get_binding(&self, identifier: &str) -> Option<&Binding> {
        self.bindings.get(identifier)
    }

    pub fn declared_type(&self, identifier: &str, position: &Position) -> Result<ValueType, Error> {
        Ok(self.binding(identifier, position)?.declared_type)
    }

    /// Reads `identifier`; reading an unset binding is fatal.
    pub fn read(&self, identifier: &str, position: &Position) -> Result<Value, Error> {
        match &self.binding(identifier, position)?.slot {
            Slot::Set(value) => Ok(value.clone()),
            Slot::Unset => Err(Error::new(
                ErrorImpl::UninitializedRead {
                    identifier: String::from(identifier),
                },
                position.clone(),
            )),
        }
    }

    /// Overwrites the value of `identifier` without any coercion.
    pub fn assign(&mut self, identifier: &str, value: Value, position: &Position) -> Result<(), Error> {
        match self.bindings.get_mut(identifier) {
            Some(binding) => {
                binding.slot = Slot::Set(value);
                Ok(())
            }
            None => Err(not_defined(identifier, position)),
        }
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    fn binding(&self, identifier: &str, position: &Position) -> Result<&Binding, Error> {
        self.get_binding(identifier)
            .ok_or_else(|| not_defined(identifier, position))
    }
}

// Only reachable when running a program the checker never saw.
fn not_defined(identifier: &str, position: &Position) -> Error {
    Error::new(
        ErrorImpl::NotDefined {
            identifier: String::from(identifier),
        },
        position.clone(),
    )
}
