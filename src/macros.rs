//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a default lexer handler for simple tokens

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's value (decoded contents for string literals)
/// * `$lexeme` - The token exactly as written
/// * `$position` - The source position
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Integer, "42".to_string(), "42".to_string(), position);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $lexeme:expr, $position:expr) => {
        Token {
            kind: $kind,
            value: $value,
            lexeme: $lexeme,
            position: $position,
        }
    };
}

/// Creates a default lexer handler for single-token punctuation.
///
/// Generates a handler function that creates a token with the given kind
/// and advances the lexer position by the token's length.
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^\\.").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Dot, "."),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &mut Lexer, _regex: &Regex| {
            let position = lexer.position();
            lexer.push(MK_TOKEN!(
                $kind,
                String::from($value),
                String::from($value),
                position
            ));
            lexer.advance_n($value.len());
        }
    };
}
