//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords (in any case) and identifiers
//! - Integer and string literals
//! - Punctuation
//! - Comments and line tracking
//! - Error cases

use super::{lexer::tokenize, tokens::TokenKind};

#[test]
fn test_tokenize_keywords() {
    let source = "REPORT PARAMETER PARAMETERS DATA TYPE WRITE CONCATENATE INTO".to_string();
    let tokens = tokenize(source, Some("test.abap".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Report);
    assert_eq!(tokens[1].kind, TokenKind::Parameter);
    assert_eq!(tokens[2].kind, TokenKind::Parameter);
    assert_eq!(tokens[3].kind, TokenKind::Data);
    assert_eq!(tokens[4].kind, TokenKind::Type);
    assert_eq!(tokens[5].kind, TokenKind::Write);
    assert_eq!(tokens[6].kind, TokenKind::Concatenate);
    assert_eq!(tokens[7].kind, TokenKind::Into);
    assert_eq!(tokens[8].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_keywords_case_insensitive() {
    let source = "write Write wRiTe".to_string();
    let tokens = tokenize(source, Some("test.abap".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Write);
    assert_eq!(tokens[1].kind, TokenKind::Write);
    assert_eq!(tokens[2].kind, TokenKind::Write);
    assert_eq!(tokens[2].value, "wRiTe");
}

#[test]
fn test_tokenize_identifiers() {
    let source = "foo bar baz_123 _underscore CamelCase".to_string();
    let tokens = tokenize(source, Some("test.abap".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].value, "bar");
    assert_eq!(tokens[2].value, "baz_123");
    assert_eq!(tokens[3].value, "_underscore");
    assert_eq!(tokens[4].kind, TokenKind::Identifier);
    assert_eq!(tokens[4].value, "CamelCase");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_integers() {
    let source = "42 0 007".to_string();
    let tokens = tokenize(source, Some("test.abap".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Integer);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].value, "0");
    assert_eq!(tokens[2].value, "007");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_integer_followed_by_dot() {
    let source = "WRITE 42.".to_string();
    let tokens = tokenize(source, Some("test.abap".to_string())).unwrap();

    assert_eq!(tokens[1].kind, TokenKind::Integer);
    assert_eq!(tokens[1].value, "42");
    assert_eq!(tokens[2].kind, TokenKind::Dot);
}

#[test]
fn test_tokenize_strings() {
    let source = "'hello' `world` 'multiple words' ''".to_string();
    let tokens = tokenize(source, Some("test.abap".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "hello");
    assert_eq!(tokens[0].lexeme, "'hello'");
    assert_eq!(tokens[1].kind, TokenKind::String);
    assert_eq!(tokens[1].value, "world");
    assert_eq!(tokens[1].lexeme, "`world`");
    assert_eq!(tokens[2].value, "multiple words");
    assert_eq!(tokens[3].value, "");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_doubled_delimiter() {
    let source = "'it''s' `a``b`".to_string();
    let tokens = tokenize(source, Some("test.abap".to_string())).unwrap();

    assert_eq!(tokens[0].value, "it's");
    assert_eq!(tokens[0].lexeme, "'it''s'");
    assert_eq!(tokens[1].value, "a`b");
}

#[test]
fn test_tokenize_punctuation() {
    let source = "a = b , .".to_string();
    let tokens = tokenize(source, Some("test.abap".to_string())).unwrap();

    assert_eq!(tokens[1].kind, TokenKind::Assignment);
    assert_eq!(tokens[3].kind, TokenKind::Comma);
    assert_eq!(tokens[4].kind, TokenKind::Dot);
}

#[test]
fn test_tokenize_comments() {
    let source = "WRITE a. \" trailing comment 'not a string'\nWRITE b.".to_string();
    let tokens = tokenize(source, Some("test.abap".to_string())).unwrap();

    assert_eq!(tokens.len(), 7);
    assert_eq!(tokens[3].kind, TokenKind::Write);
    assert_eq!(tokens[4].value, "b");
}

#[test]
fn test_tokenize_tracks_lines() {
    let source = "REPORT demo.\n\nDATA s TYPE string.\r\nWRITE s.".to_string();
    let tokens = tokenize(source, Some("test.abap".to_string())).unwrap();

    assert_eq!(tokens[0].position.line(), 1);
    assert_eq!(tokens[3].kind, TokenKind::Data);
    assert_eq!(tokens[3].position.line(), 3);
    assert_eq!(tokens[8].kind, TokenKind::Write);
    assert_eq!(tokens[8].position.line(), 4);
    assert_eq!(tokens[0].position.source(), "test.abap");
}

#[test]
fn test_tokenize_default_file_name() {
    let tokens = tokenize("WRITE a.".to_string(), None).unwrap();
    assert_eq!(tokens[0].position.source(), "stdin");
}

#[test]
fn test_tokenize_unrecognised_character() {
    let source = "WRITE a @ b.".to_string();
    let error = tokenize(source, Some("test.abap".to_string())).unwrap_err();

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.to_string(), "test.abap:1 unrecognised token `@`.");
}

#[test]
fn test_tokenize_unterminated_string() {
    let source = "WRITE 'oops.".to_string();
    let error = tokenize(source, Some("test.abap".to_string())).unwrap_err();

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
}
