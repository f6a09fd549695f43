use std::fmt::Display;

use thiserror::Error;

use crate::{ast::types::ValueType, Position};

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::UnknownType { .. } => "UnknownType",
            ErrorImpl::AlreadyDefined { .. } => "AlreadyDefined",
            ErrorImpl::NotDefined { .. } => "NotDefined",
            ErrorImpl::NotAString { .. } => "NotAString",
            ErrorImpl::CoercionFailed { .. } => "CoercionFailed",
            ErrorImpl::UninitializedRead { .. } => "UninitializedRead",
            ErrorImpl::EndOfInput { .. } => "EndOfInput",
            ErrorImpl::InputFailed { .. } => "InputFailed",
            ErrorImpl::OutputFailed { .. } => "OutputFailed",
        }
    }

    /// Which stage of the pipeline an error belongs to.
    ///
    /// `CoercionFailed` is reported by both the checker (literal assignments)
    /// and the runtime; it is classified by who normally raises it.
    pub fn get_category(&self) -> ErrorCategory {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. }
            | ErrorImpl::UnexpectedToken { .. }
            | ErrorImpl::UnexpectedTokenDetailed { .. }
            | ErrorImpl::NumberParseError { .. }
            | ErrorImpl::UnknownType { .. } => ErrorCategory::Syntax,
            ErrorImpl::AlreadyDefined { .. }
            | ErrorImpl::NotDefined { .. }
            | ErrorImpl::NotAString { .. } => ErrorCategory::Diagnostic,
            ErrorImpl::CoercionFailed { .. }
            | ErrorImpl::UninitializedRead { .. }
            | ErrorImpl::EndOfInput { .. }
            | ErrorImpl::InputFailed { .. }
            | ErrorImpl::OutputFailed { .. } => ErrorCategory::Runtime,
        }
    }
}

/// Renders as `<source>:<line> <message>.`
impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{} {}.",
            self.position.source(),
            self.position.line(),
            self.internal_error
        )
    }
}

impl std::error::Error for Error {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Syntax,
    Diagnostic,
    Runtime,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token `{token}`")]
    UnrecognisedToken { token: String },
    #[error("unexpected token `{token}`")]
    UnexpectedToken { token: String },
    #[error("unexpected token `{token}`, {message}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("integer literal `{token}` is out of range")]
    NumberParseError { token: String },
    #[error("unknown type `{type_}`")]
    UnknownType { type_: String },
    #[error("identifier {identifier} was already defined in line {line}")]
    AlreadyDefined { identifier: String, line: u32 },
    #[error("identifier {identifier} was not previously defined")]
    NotDefined { identifier: String },
    #[error("argument `{text}` is not a string")]
    NotAString { text: String },
    #[error("Couldn't coerce `{value}` into {target}")]
    CoercionFailed { value: String, target: ValueType },
    #[error("Couldn't read variable {identifier} because it was never set")]
    UninitializedRead { identifier: String },
    #[error("input ended before a value for {identifier} was read")]
    EndOfInput { identifier: String },
    #[error("couldn't read input: {reason}")]
    InputFailed { reason: String },
    #[error("couldn't write output: {reason}")]
    OutputFailed { reason: String },
}
