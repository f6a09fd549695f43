//! Type system definitions.
//!
//! The language has exactly two value types. This module defines:
//!
//! - The `ValueType` enumeration and the surface names that map onto it
//! - `Value`, a runtime value whose variant is its type
//! - `coerce`, the partial conversion between the two types
//!
//! Type names are resolved by the parser through `TYPE_LOOKUP`; nothing else
//! interprets surface type names.

use std::{collections::HashMap, fmt::Display};

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Surface type names, matched case-insensitively.
    pub static ref TYPE_LOOKUP: HashMap<&'static str, ValueType> = {
        let mut map = HashMap::new();
        map.insert("i", ValueType::Integer);
        map.insert("string", ValueType::String);
        map
    };

    static ref INTEGER_PATTERN: Regex = Regex::new(r"^\s*[0-9]+\s*$").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    String,
    Integer,
}

impl ValueType {
    /// Resolves a surface type name such as `i` or `STRING`.
    pub fn from_name(name: &str) -> Option<ValueType> {
        TYPE_LOOKUP.get(name.to_ascii_lowercase().as_str()).copied()
    }
}

impl Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueType::String => write!(f, "string"),
            ValueType::Integer => write!(f, "integer"),
        }
    }
}

/// A runtime value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    String(String),
    Integer(i64),
}

impl Value {
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::String(_) => ValueType::String,
            Value::Integer(_) => ValueType::Integer,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::String(value) => write!(f, "{}", value),
            Value::Integer(value) => write!(f, "{}", value),
        }
    }
}

/// A value that could not be converted. The caller knows where it happened
/// and turns this into a positioned error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoercionError {
    pub value: String,
    pub target: ValueType,
}

/// Converts `value` to `target`.
///
/// Anything becomes a string. A string becomes an integer only if it is a run
/// of ASCII digits, optionally surrounded by whitespace, that fits in an
/// `i64`.
pub fn coerce(value: Value, target: ValueType) -> Result<Value, CoercionError> {
    if value.value_type() == target {
        return Ok(value);
    }

    match (value, target) {
        (value, ValueType::String) => Ok(Value::String(value.to_string())),
        (Value::String(text), ValueType::Integer) => {
            if !INTEGER_PATTERN.is_match(&text) {
                return Err(CoercionError { value: text, target });
            }

            match text.trim().parse::<i64>() {
                Ok(number) => Ok(Value::Integer(number)),
                Err(_) => Err(CoercionError { value: text, target }),
            }
        }
        (value, target) => Err(CoercionError {
            value: value.to_string(),
            target,
        }),
    }
}
