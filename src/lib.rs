#![allow(clippy::module_inception)]

use std::{io::Write, rc::Rc};

use tracing::{debug, info};

use crate::{
    checker::checker::check,
    errors::errors::Error,
    interpreter::{compiler::compile, input::LineSource, runtime::Runtime},
    lexer::lexer::tokenize,
    parser::parser::parse,
};

pub mod ast;
pub mod checker;
pub mod errors;
pub mod interpreter;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A location in a source file: the 1-based line and the name of the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn line(&self) -> u32 {
        self.0
    }

    pub fn source(&self) -> &str {
        &self.1
    }
}

/// How a run of the whole pipeline ended.
#[derive(Debug)]
pub enum Outcome {
    /// The source could not be tokenized or parsed.
    SyntaxError(Error),
    /// The checker reported diagnostics, so nothing was executed.
    Rejected(Vec<Error>),
    Finished,
    /// A fatal runtime error stopped the program part way through.
    Aborted(Error),
}

impl Outcome {
    pub fn is_finished(&self) -> bool {
        matches!(self, Outcome::Finished)
    }

    /// Every error the run produced, in the order they should be reported.
    pub fn errors(&self) -> Vec<&Error> {
        match self {
            Outcome::SyntaxError(error) | Outcome::Aborted(error) => vec![error],
            Outcome::Rejected(diagnostics) => diagnostics.iter().collect(),
            Outcome::Finished => vec![],
        }
    }
}

/// Tokenizes, parses, checks and, if the checker is satisfied, runs `source`.
///
/// `file` names the source in every diagnostic. Prompts and `WRITE` output go
/// to `output`; parameter values are read from `input`.
pub fn run_source(
    source: String,
    file: &str,
    input: &mut dyn LineSource,
    output: &mut dyn Write,
) -> Outcome {
    let tokens = match tokenize(source, Some(String::from(file))) {
        Ok(tokens) => tokens,
        Err(error) => return Outcome::SyntaxError(error),
    };
    debug!(count = tokens.len(), "tokenized");

    let program = match parse(tokens, Rc::new(String::from(file))) {
        Ok(program) => program,
        Err(error) => return Outcome::SyntaxError(error),
    };

    let diagnostics = check(&program);
    if !diagnostics.is_empty() {
        info!(count = diagnostics.len(), "program rejected by checker");
        return Outcome::Rejected(diagnostics);
    }

    let compiled = compile(&program);
    let mut runtime = Runtime::new(input, output);

    let result = runtime.execute(&compiled);
    debug!(variables = runtime.store().len(), "run ended");

    match result {
        Ok(()) => Outcome::Finished,
        Err(error) => Outcome::Aborted(error),
    }
}
