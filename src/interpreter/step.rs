use std::rc::Rc;

use crate::{
    ast::types::{Value, ValueType},
    Position,
};

/// Something a step reads: a variable or a value known at compile time.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Variable { identifier: Rc<str>, position: Position },
    Literal(Value),
}

/// One effectful unit of a compiled program. Steps run strictly in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Prints `Program <name>`.
    Announce { program: String, position: Position },
    /// Prompts for a parameter, reads one line and binds it after coercion.
    /// The only step that waits on input.
    PromptAndRead {
        identifier: Rc<str>,
        declared_type: ValueType,
        position: Position,
    },
    /// Binds a data item with no value.
    Declare {
        identifier: Rc<str>,
        declared_type: ValueType,
    },
    /// Coerces the operand to the target's declared type and stores it.
    Assign {
        identifier: Rc<str>,
        value: Operand,
        position: Position,
    },
    /// Prints the operands joined with no separator.
    Print {
        arguments: Vec<Operand>,
        position: Position,
    },
    /// Stores the operands, joined with no separator, as a string.
    Concatenate {
        identifier: Rc<str>,
        arguments: Vec<Operand>,
        position: Position,
    },
}
