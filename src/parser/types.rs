//! Type annotation parsing.
//!
//! A declaration names its type as `TYPE <name>`; the name is resolved here
//! through the fixed type vocabulary so later passes only ever see a
//! [`ValueType`].

use crate::{
    ast::types::ValueType,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

pub fn parse_type(parser: &mut Parser) -> Result<ValueType, Error> {
    let error = parser.unexpected("expected TYPE after the declared identifier");
    parser.expect_error(TokenKind::Type, Some(error))?;

    let error = parser.unexpected("expected a type name");
    let name = parser.expect_error(TokenKind::Identifier, Some(error))?;

    ValueType::from_name(&name.value).ok_or_else(|| {
        Error::new(
            ErrorImpl::UnknownType { type_: name.value.clone() },
            name.position.clone(),
        )
    })
}
