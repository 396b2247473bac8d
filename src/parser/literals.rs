//! Literal parsing.
//!
//! Integers, floats, strings and booleans. Numbers try the float form
//! first so that `3.5` is never read as the integer `3` followed by `.5`.

use chumsky::prelude::*;

use crate::{ast::expressions::Type, MK_KEYWORD};

use super::lexeme::{lexeme, ParserError};

fn digits() -> impl Parser<char, String, Error = ParserError> + Clone {
    filter(|c: &char| c.is_ascii_digit())
        .repeated()
        .at_least(1)
        .collect::<String>()
}

/// One or more decimal digits.
pub fn integer() -> impl Parser<char, Type, Error = ParserError> + Clone {
    lexeme(digits().try_map(|text, span| {
        text.parse::<i64>()
            .map(Type::Int)
            .map_err(|_| Simple::custom(span, text))
    }))
}

/// Digits, a `.`, then optional digits: `3.` is a float, `.3` is not.
pub fn float() -> impl Parser<char, Type, Error = ParserError> + Clone {
    let fraction = filter(|c: &char| c.is_ascii_digit())
        .repeated()
        .collect::<String>();

    lexeme(
        digits()
            .then_ignore(just('.'))
            .then(fraction)
            .try_map(|(whole, fraction), span| {
                let literal = if fraction.is_empty() {
                    format!("{}.0", whole)
                } else {
                    format!("{}.{}", whole, fraction)
                };

                literal
                    .parse::<f64>()
                    .map(Type::Float)
                    .map_err(|_| Simple::custom(span, literal))
            }),
    )
}

pub fn number() -> impl Parser<char, Type, Error = ParserError> + Clone {
    float().or(integer())
}

/// Everything between two `"`. There are no escape sequences.
pub fn string() -> impl Parser<char, Type, Error = ParserError> + Clone {
    just('"')
        .ignore_then(filter(|c: &char| *c != '"').repeated().collect::<String>())
        .then_ignore(lexeme(just('"')))
        .map(Type::String)
}

pub fn boolean() -> impl Parser<char, Type, Error = ParserError> + Clone {
    choice((
        MK_KEYWORD!("true", Type::Bool(true)),
        MK_KEYWORD!("false", Type::Bool(false)),
    ))
}

pub fn literal() -> impl Parser<char, Type, Error = ParserError> + Clone {
    choice((number(), string(), boolean()))
}
