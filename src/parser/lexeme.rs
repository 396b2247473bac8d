//! Whitespace handling shared by every terminal rule.
//!
//! There is no tokenizer: each rule that matches source text is wrapped in
//! [`lexeme`] so the whitespace after it is gone before the next rule looks
//! at the input. Whitespace before the first token is not skipped here.

use chumsky::prelude::*;

/// The error type produced by every grammar rule.
pub type ParserError = Simple<char>;

pub fn is_whitespace(c: &char) -> bool {
    matches!(c, ' ' | '\n' | '\t')
}

/// Consumes any run of spaces, tabs and newlines. Never fails.
pub fn whitespace() -> impl Parser<char, (), Error = ParserError> + Clone {
    filter(is_whitespace).repeated().ignored()
}

/// Runs `parser`, then [`whitespace`], keeping only the result of `parser`.
pub fn lexeme<O, P>(parser: P) -> impl Parser<char, O, Error = ParserError> + Clone
where
    P: Parser<char, O, Error = ParserError> + Clone,
{
    parser.then_ignore(whitespace())
}
