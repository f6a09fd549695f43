use crate::{
    ast::{
        ast::Expr,
        expressions::{IntegerExpr, StringExpr, SymbolExpr},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.get_nud_lookup().get(&parser.current_token_kind()).copied() {
        Some(handler) => handler(parser),
        None => Err(parser.unexpected("expected an identifier or a literal")),
    }
}

/// Parses one or more expressions up to (not including) `terminator`.
/// Commas between arguments are optional.
pub fn parse_expr_list(parser: &mut Parser, terminator: TokenKind) -> Result<Vec<Expr>, Error> {
    let mut arguments = vec![parse_expr(parser)?];

    while parser.current_token_kind() != terminator {
        if parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
        }
        arguments.push(parse_expr(parser)?);
    }

    Ok(arguments)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token().clone();

    match token.kind {
        TokenKind::Integer => {
            let value = token.value.parse::<i64>().map_err(|_| {
                Error::new(
                    ErrorImpl::NumberParseError { token: token.value.clone() },
                    token.position.clone(),
                )
            })?;
            parser.advance();

            Ok(Expr::Integer(IntegerExpr {
                value,
                text: token.lexeme,
                position: token.position,
            }))
        }
        TokenKind::Identifier => {
            parser.advance();
            Ok(Expr::Symbol(SymbolExpr {
                value: token.value,
                position: token.position,
            }))
        }
        TokenKind::String => {
            parser.advance();
            Ok(Expr::String(StringExpr {
                value: token.value,
                text: token.lexeme,
                position: token.position,
            }))
        }
        _ => Err(Error::new(
            ErrorImpl::UnexpectedToken { token: token.value },
            token.position,
        )),
    }
}
