use crate::{
    ast::{
        ast::Stmt,
        statements::{AssignmentStmt, ConcatenateStmt, DeclKind, VarDeclStmt, WriteStmt},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    parser::expr::{parse_expr, parse_expr_list},
};

use super::{parser::Parser, types::parse_type};

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    match parser.get_stmt_lookup().get(&parser.current_token_kind()).copied() {
        Some(handler) => handler(parser),
        None => Err(parser.unexpected("expected an assignment, WRITE or CONCATENATE")),
    }
}

/// `PARAMETER <identifier> TYPE <type>.` / `DATA <identifier> TYPE <type>.`
pub fn parse_var_decl_stmt(parser: &mut Parser, kind: DeclKind) -> Result<VarDeclStmt, Error> {
    let start_token = parser.advance().clone();

    let error = parser.unexpected("expected identifier during variable declaration");
    let identifier = parser.expect_error(TokenKind::Identifier, Some(error))?.value;

    let declared_type = parse_type(parser)?;

    parser.expect(TokenKind::Dot)?;

    Ok(VarDeclStmt {
        kind,
        identifier,
        declared_type,
        position: start_token.position,
    })
}

/// Declarations only parse in the program prologue; reaching one here means
/// it came too late.
pub fn parse_misplaced_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let message = match parser.current_token_kind() {
        TokenKind::Parameter => "parameters must be declared before data and statements",
        _ => "data must be declared before statements",
    };

    Err(parser.unexpected(message))
}

/// `<identifier> = <expr>.`
pub fn parse_assignment_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start_token = parser.advance().clone();

    let error = parser.unexpected("expected `=` after the assigned identifier");
    parser.expect_error(TokenKind::Assignment, Some(error))?;

    let value = parse_expr(parser)?;

    parser.expect(TokenKind::Dot)?;

    Ok(Stmt::Assignment(AssignmentStmt {
        identifier: start_token.value,
        value,
        position: start_token.position,
    }))
}

/// `WRITE <expr> <expr> ... .`
pub fn parse_write_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().position.clone();

    let arguments = parse_expr_list(parser, TokenKind::Dot)?;

    parser.expect(TokenKind::Dot)?;

    Ok(Stmt::Write(WriteStmt {
        arguments,
        position: start,
    }))
}

/// `CONCATENATE <expr> <expr> ... INTO <identifier>.`
pub fn parse_concatenate_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().position.clone();

    let arguments = parse_expr_list(parser, TokenKind::Into)?;

    parser.expect(TokenKind::Into)?;

    let error = parser.unexpected("expected the target identifier after INTO");
    let identifier = parser.expect_error(TokenKind::Identifier, Some(error))?.value;

    parser.expect(TokenKind::Dot)?;

    Ok(Stmt::Concatenate(ConcatenateStmt {
        arguments,
        identifier,
        position: start,
    }))
}
