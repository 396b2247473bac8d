use chumsky::prelude::*;

use crate::ast::statements::{Declaration, Statement};

use super::{
    expr::expression,
    identifier::identifier,
    lexeme::{lexeme, ParserError},
    types::type_name,
};

/// `let <name> (: <type>)? (= <expr>)? ;`
///
/// The initializer is only taken once `=` is seen; otherwise `;` must
/// follow the name or annotation directly.
pub fn declaration() -> impl Parser<char, Declaration, Error = ParserError> + Clone {
    let annotation = lexeme(just(':')).ignore_then(type_name()).or_not();
    let initializer = lexeme(just('=')).ignore_then(expression()).or_not();

    lexeme(just("let"))
        .ignore_then(identifier())
        .then(annotation)
        .then(initializer)
        .then_ignore(lexeme(just(';')))
        .map(|((name, type_name), initializer)| Declaration::Variable {
            name,
            type_name,
            initializer,
        })
}

/// A declaration if one matches, otherwise a bare expression.
pub fn statement() -> impl Parser<char, Statement, Error = ParserError> + Clone {
    declaration()
        .map(Statement::Declaration)
        .or(expression().map(Statement::Expression))
}

/// A statement that must cover the rest of the input.
///
/// Each alternative carries its own `end()`, so a declaration that fails
/// deep in the input is compared against the expression fallback instead
/// of being dropped once `let` parses as an identifier.
pub fn whole_statement() -> impl Parser<char, Statement, Error = ParserError> + Clone {
    declaration()
        .then_ignore(end())
        .map(Statement::Declaration)
        .or(expression().then_ignore(end()).map(Statement::Expression))
}
