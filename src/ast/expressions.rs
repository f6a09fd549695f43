use crate::Position;

use super::types::Value;

/// Symbol Expression
/// A reference to a declared parameter or data item.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolExpr {
    pub value: String,
    pub position: Position,
}

/// Integer Expression
/// Represents an integer literal in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegerExpr {
    pub value: i64,
    pub text: String,
    pub position: Position,
}

impl IntegerExpr {
    pub fn to_value(&self) -> Value {
        Value::Integer(self.value)
    }
}

/// String Expression
/// Represents a string literal in the AST. `value` is the decoded contents,
/// `text` keeps the delimiters as written.
#[derive(Debug, Clone, PartialEq)]
pub struct StringExpr {
    pub value: String,
    pub text: String,
    pub position: Position,
}

impl StringExpr {
    pub fn to_value(&self) -> Value {
        Value::String(self.value.clone())
    }
}
