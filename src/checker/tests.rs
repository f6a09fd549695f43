//! Unit tests for the checker.
//!
//! Programs are parsed from source so every test reads like the program it
//! describes.

use std::rc::Rc;

use crate::ast::{ast::Program, types::ValueType};
use crate::errors::errors::{Error, ErrorCategory, ErrorImpl};
use crate::lexer::lexer::tokenize;
use crate::parser::parser::parse;
use crate::Position;

use super::checker::{check, Checker};
use super::symbol_table::{Declaration, SymbolTable};

fn parse_source(source: &str) -> Program {
    let tokens = tokenize(source.to_string(), Some("test.abap".to_string())).unwrap();
    parse(tokens, Rc::new("test.abap".to_string())).unwrap()
}

fn check_source(source: &str) -> Vec<String> {
    check(&parse_source(source))
        .iter()
        .map(Error::to_string)
        .collect()
}

fn at(line: u32) -> Position {
    Position(line, Rc::new("test.abap".to_string()))
}

#[test]
fn test_symbol_table_declare_and_lookup() {
    let mut table = SymbolTable::new();
    assert!(table.is_empty());

    table
        .declare(Declaration {
            identifier: "n".to_string(),
            declared_type: ValueType::Integer,
            position: at(2),
        })
        .unwrap();

    assert_eq!(table.len(), 1);
    assert_eq!(table.get_variable("n").unwrap().declared_type, ValueType::Integer);
    assert!(table.get_variable("m").is_none());
}

#[test]
fn test_symbol_table_keeps_first_declaration() {
    let mut table = SymbolTable::new();
    table
        .declare(Declaration {
            identifier: "n".to_string(),
            declared_type: ValueType::Integer,
            position: at(2),
        })
        .unwrap();

    let error = table
        .declare(Declaration {
            identifier: "n".to_string(),
            declared_type: ValueType::String,
            position: at(5),
        })
        .unwrap_err();

    assert_eq!(
        error.get_impl(),
        &ErrorImpl::AlreadyDefined { identifier: "n".to_string(), line: 2 }
    );
    assert_eq!(error.get_position().line(), 5);
    assert_eq!(table.get_variable("n").unwrap().declared_type, ValueType::Integer);
}

#[test]
fn test_symbol_table_require_reports_position() {
    let table = SymbolTable::new();
    let error = table.require("ghost", &at(9)).unwrap_err();

    assert_eq!(error.to_string(), "test.abap:9 identifier ghost was not previously defined.");
}

#[test]
fn test_empty_program_has_no_diagnostics() {
    assert!(check_source("REPORT empty.").is_empty());
}

#[test]
fn test_valid_program_has_no_diagnostics() {
    let source = "REPORT demo.
PARAMETER n TYPE i.
DATA a TYPE string.
DATA b TYPE string.
a = 'foo'.
b = n.
CONCATENATE a b 'x' INTO a.
WRITE a b.";

    assert!(check_source(source).is_empty());
}

#[test]
fn test_duplicate_parameters() {
    let source = "REPORT demo.\nPARAMETER n TYPE i.\nPARAMETER n TYPE i.";
    assert_eq!(
        check_source(source),
        vec!["test.abap:3 identifier n was already defined in line 2."]
    );
}

#[test]
fn test_duplicate_data() {
    let source = "REPORT demo.\nDATA s TYPE string.\nDATA s TYPE i.";
    assert_eq!(
        check_source(source),
        vec!["test.abap:3 identifier s was already defined in line 2."]
    );
}

#[test]
fn test_duplicate_parameter_and_data() {
    let source = "REPORT demo.\nPARAMETER x TYPE string.\nDATA x TYPE string.";
    assert_eq!(
        check_source(source),
        vec!["test.abap:3 identifier x was already defined in line 2."]
    );
}

#[test]
fn test_third_declaration_cites_the_first() {
    let source = "REPORT demo.\nDATA x TYPE i.\nDATA x TYPE i.\nDATA x TYPE i.";
    assert_eq!(
        check_source(source),
        vec![
            "test.abap:3 identifier x was already defined in line 2.",
            "test.abap:4 identifier x was already defined in line 2.",
        ]
    );
}

#[test]
fn test_assignment_to_undeclared_target() {
    let source = "REPORT demo.\nx = 'a'.";
    assert_eq!(
        check_source(source),
        vec!["test.abap:2 identifier x was not previously defined."]
    );
}

#[test]
fn test_assignment_reports_target_then_value() {
    let source = "REPORT demo.\nx = y.";
    assert_eq!(
        check_source(source),
        vec![
            "test.abap:2 identifier x was not previously defined.",
            "test.abap:2 identifier y was not previously defined.",
        ]
    );
}

#[test]
fn test_one_diagnostic_per_undeclared_reference_site() {
    let source = "REPORT demo.\nDATA s TYPE string.\nWRITE ghost s ghost.\nCONCATENATE ghost INTO s.";
    let diagnostics = check(&parse_source(source));

    assert_eq!(diagnostics.len(), 3);
    assert!(diagnostics
        .iter()
        .all(|diagnostic| diagnostic.get_error_name() == "NotDefined"));
    assert_eq!(diagnostics[2].get_position().line(), 4);
}

#[test]
fn test_write_integer_literal_is_not_a_string() {
    let diagnostics = check(&parse_source("REPORT demo.\nWRITE 42."));

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].get_category(), ErrorCategory::Diagnostic);
    assert_eq!(diagnostics[0].to_string(), "test.abap:2 argument `42` is not a string.");
}

#[test]
fn test_write_integer_variable_is_not_a_string() {
    let source = "REPORT demo.\nPARAMETER n TYPE i.\nWRITE 'n is ' n.";
    assert_eq!(
        check_source(source),
        vec!["test.abap:3 argument `n` is not a string."]
    );
}

#[test]
fn test_write_reports_undefined_before_mismatches() {
    let source = "REPORT demo.\nWRITE 1 ghost 2.";
    assert_eq!(
        check_source(source),
        vec![
            "test.abap:2 identifier ghost was not previously defined.",
            "test.abap:2 argument `1` is not a string.",
            "test.abap:2 argument `2` is not a string.",
        ]
    );
}

#[test]
fn test_concatenate_reports_target_last() {
    let source = "REPORT demo.\nCONCATENATE 7 ghost INTO target.";
    assert_eq!(
        check_source(source),
        vec![
            "test.abap:2 identifier ghost was not previously defined.",
            "test.abap:2 argument `7` is not a string.",
            "test.abap:2 identifier target was not previously defined.",
        ]
    );
}

#[test]
fn test_concatenate_into_integer_target_is_accepted() {
    let source = "REPORT demo.\nDATA n TYPE i.\nCONCATENATE '4' '2' INTO n.";
    assert!(check_source(source).is_empty());
}

#[test]
fn test_concatenate_integer_argument() {
    let source = "REPORT demo.\nPARAMETER n TYPE i.\nCONCATENATE n 'x' INTO n.";
    assert_eq!(
        check_source(source),
        vec!["test.abap:3 argument `n` is not a string."]
    );
}

#[test]
fn test_assigning_non_numeric_literal_to_integer() {
    let source = "REPORT demo.\nDATA n TYPE i.\nn = 'abc'.";
    assert_eq!(
        check_source(source),
        vec!["test.abap:3 Couldn't coerce `abc` into integer."]
    );
}

#[test]
fn test_assigning_literals_that_coerce() {
    let source = "REPORT demo.\nDATA n TYPE i.\nDATA s TYPE string.\nn = ' 42 '.\ns = 42.\nn = 7.";
    assert!(check_source(source).is_empty());
}

#[test]
fn test_assigning_string_variable_to_integer_is_left_to_runtime() {
    let source = "REPORT demo.\nDATA n TYPE i.\nDATA s TYPE string.\nn = s.";
    assert!(check_source(source).is_empty());
}

#[test]
fn test_diagnostics_follow_declaration_then_statement_order() {
    let source = "REPORT demo.
PARAMETER p TYPE i.
PARAMETER p TYPE i.
DATA d TYPE string.
DATA d TYPE string.
WRITE p.
x = 'y'.";

    assert_eq!(
        check_source(source),
        vec![
            "test.abap:3 identifier p was already defined in line 2.",
            "test.abap:5 identifier d was already defined in line 4.",
            "test.abap:6 argument `p` is not a string.",
            "test.abap:7 identifier x was not previously defined.",
        ]
    );
}

#[test]
fn test_checker_exposes_symbols_after_checking() {
    let program = parse_source("REPORT demo.\nPARAMETER n TYPE i.\nDATA s TYPE string.\nWRITE s.");
    let mut checker = Checker::new();

    assert!(checker.check_program(&program).is_empty());
    assert_eq!(checker.symbols().len(), 2);
    assert_eq!(
        checker.symbols().get_variable("n").unwrap().declared_type,
        ValueType::Integer
    );
    assert_eq!(checker.symbols().get_variable("s").unwrap().position.line(), 3);
}
