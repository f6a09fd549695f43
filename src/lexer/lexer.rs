use std::rc::Rc;

use regex::Regex;

use crate::{errors::errors::{Error, ErrorImpl}, Position, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, &Regex);

#[derive(Clone)]
pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler
}

#[derive(Clone)]
pub struct Lexer {
    patterns: Vec<RegexPattern>,
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    line: u32,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("stdin"))
        };

        // Every pattern is anchored; the first one matching at the cursor wins.
        Lexer {
            pos: 0,
            line: 1,
            tokens: vec![],
            patterns: vec![
                RegexPattern { regex: Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler},
                RegexPattern { regex: Regex::new("^[0-9]+").unwrap(), handler: integer_handler},
                RegexPattern { regex: Regex::new("^\\s+").unwrap(), handler: skip_handler},
                RegexPattern { regex: Regex::new("^'(?:[^'\\n]|'')*'").unwrap(), handler: string_handler},
                RegexPattern { regex: Regex::new("^`(?:[^`\\n]|``)*`").unwrap(), handler: string_handler},
                RegexPattern { regex: Regex::new("^\"[^\\n]*").unwrap(), handler: skip_handler},
                RegexPattern { regex: Regex::new("^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=")},
                RegexPattern { regex: Regex::new("^\\.").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dot, ".")},
                RegexPattern { regex: Regex::new("^,").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ",")},
            ],
            source,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> char {
        self.remainder().chars().next().unwrap_or('\0')
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn position(&self) -> Position {
        Position(self.line, Rc::clone(&self.file))
    }
}

fn matched_text(lexer: &Lexer, regex: &Regex) -> String {
    regex
        .find(lexer.remainder())
        .map(|matched| matched.as_str().to_string())
        .unwrap_or_default()
}

fn integer_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = matched_text(lexer, regex);

    lexer.push(MK_TOKEN!(TokenKind::Integer, matched.clone(), matched.clone(), lexer.position()));
    lexer.advance_n(matched.len());
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = matched_text(lexer, regex);
    lexer.line += matched.matches('\n').count() as u32;
    lexer.advance_n(matched.len());
}

/// Handles both `'...'` and `` `...` `` literals. A doubled delimiter inside
/// the literal stands for one delimiter character.
fn string_handler(lexer: &mut Lexer, regex: &Regex) {
    let lexeme = matched_text(lexer, regex);
    let delimiter = &lexeme[..1];
    let contents = &lexeme[1..(lexeme.len() - 1)];
    let value = contents.replace(&delimiter.repeat(2), delimiter);

    lexer.push(MK_TOKEN!(TokenKind::String, value, lexeme.clone(), lexer.position()));
    lexer.advance_n(lexeme.len());
}

fn symbol_handler(lexer: &mut Lexer, regex: &Regex) {
    let value = matched_text(lexer, regex);

    let kind = RESERVED_LOOKUP
        .get(value.to_ascii_uppercase().as_str())
        .copied()
        .unwrap_or(TokenKind::Identifier);

    lexer.push(MK_TOKEN!(kind, value.clone(), value.clone(), lexer.position()));
    lexer.advance_n(value.len());
}

pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);

    while !lex.at_eof() {
        let pattern = lex
            .patterns
            .iter()
            .find(|pattern| pattern.regex.is_match(lex.remainder()))
            .cloned();

        match pattern {
            Some(pattern) => (pattern.handler)(&mut lex, &pattern.regex),
            None => {
                return Err(Error::new(ErrorImpl::UnrecognisedToken { token: lex.at().to_string() }, lex.position()));
            }
        }
    }

    let position = lex.position();
    lex.push(MK_TOKEN!(TokenKind::EOF, String::from("EOF"), String::new(), position));
    Ok(lex.tokens)
}
