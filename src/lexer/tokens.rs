use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Position;

lazy_static! {
    /// Keywords, keyed by their upper-case spelling. Lookups upper-case the
    /// candidate first, so keywords are case-insensitive.
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("REPORT", TokenKind::Report);
        map.insert("PARAMETER", TokenKind::Parameter);
        map.insert("PARAMETERS", TokenKind::Parameter);
        map.insert("DATA", TokenKind::Data);
        map.insert("TYPE", TokenKind::Type);
        map.insert("WRITE", TokenKind::Write);
        map.insert("CONCATENATE", TokenKind::Concatenate);
        map.insert("INTO", TokenKind::Into);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Integer,
    String,
    Identifier,

    Assignment, // =
    Dot,
    Comma,

    // Reserved
    Report,
    Parameter,
    Data,
    Type,
    Write,
    Concatenate,
    Into,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub lexeme: String,
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nvalue: {}}}", self.kind, self.value)
    }
}
