//! Parser implementation for building the syntax tree.
//!
//! This module contains the main Parser struct and the program-level parsing
//! function. Statements and expressions are dispatched through lookup tables
//! keyed by the current token kind:
//! - Statement handlers
//! - NUD (null denotation) handlers for expressions

use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::{
        ast::Program,
        statements::{DeclKind, ReportHeader},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position, MK_TOKEN,
};

use super::{
    lookups::{create_token_lookups, NUDHandler, NUDLookup, StmtHandler, StmtLookup},
    stmt::{parse_stmt, parse_var_decl_stmt},
};

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// The list of tokens to parse, always terminated by an EOF token
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// An EOF token is appended if the stream does not already end with one.
    pub fn new(mut tokens: Vec<Token>, file: Rc<String>) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let line = tokens.last().map(|token| token.position.line()).unwrap_or(1);
            tokens.push(MK_TOKEN!(
                TokenKind::EOF,
                String::from("EOF"),
                String::new(),
                Position(line, file)
            ));
        }

        Parser {
            tokens,
            pos: 0,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Advances to the next token and returns the previous token.
    ///
    /// The cursor never moves past the trailing EOF token.
    pub fn advance(&mut self) -> &Token {
        let previous = self.pos;
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        &self.tokens[previous]
    }

    /// Expects a token of the specified kind, with optional custom error.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        error: Option<Error>,
    ) -> Result<Token, Error> {
        let token = self.current_token();
        if token.kind != expected_kind {
            match error {
                Some(error) => Err(error),
                None => Err(Error::new(
                    ErrorImpl::UnexpectedToken {
                        token: token.value.clone(),
                    },
                    token.position.clone(),
                )),
            }
        } else {
            Ok(self.advance().clone())
        }
    }

    /// Expects a token of the specified kind with default error message.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_error(expected_kind, None)
    }

    /// Builds an `UnexpectedTokenDetailed` error at the current token.
    pub fn unexpected(&self, message: &str) -> Error {
        Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: self.current_token().value.clone(),
                message: String::from(message),
            },
            self.get_position(),
        )
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Returns the position of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().position.clone()
    }
}

/// Parses a stream of tokens into a [`Program`].
///
/// The program is a `REPORT` header, then every `PARAMETER`, then every
/// `DATA` declaration, then the statements. Parsing stops at the first
/// syntax error.
pub fn parse(tokens: Vec<Token>, file: Rc<String>) -> Result<Program, Error> {
    let mut parser = Parser::new(tokens, file);
    create_token_lookups(&mut parser);

    let header = parse_report_header(&mut parser)?;

    let mut parameters = vec![];
    while parser.current_token_kind() == TokenKind::Parameter {
        parameters.push(parse_var_decl_stmt(&mut parser, DeclKind::Parameter)?);
    }

    let mut data = vec![];
    while parser.current_token_kind() == TokenKind::Data {
        data.push(parse_var_decl_stmt(&mut parser, DeclKind::Data)?);
    }

    let mut statements = vec![];
    while parser.has_tokens() {
        statements.push(parse_stmt(&mut parser)?);
    }

    Ok(Program {
        header,
        parameters,
        data,
        statements,
    })
}

/// `REPORT <name>.`
pub fn parse_report_header(parser: &mut Parser) -> Result<ReportHeader, Error> {
    let error = parser.unexpected("a program must start with `REPORT <name>.`");
    let start = parser.expect_error(TokenKind::Report, Some(error))?;

    let error = parser.unexpected("expected the program name after REPORT");
    let name = parser.expect_error(TokenKind::Identifier, Some(error))?.value;

    parser.expect(TokenKind::Dot)?;

    Ok(ReportHeader {
        name,
        position: start.position,
    })
}
