use chumsky::prelude::*;

use crate::ast::expressions::Expression;

use super::{
    identifier::identifier,
    lexeme::{lexeme, ParserError},
    literals::literal,
    lookups::operator,
};

/// A literal, a parenthesised expression, or a variable reference.
///
/// Literals go first so `true`, `false` and digit-leading text never
/// reach the identifier rule.
pub fn term<P>(expr: P) -> impl Parser<char, Expression, Error = ParserError> + Clone
where
    P: Parser<char, Expression, Error = ParserError> + Clone,
{
    let parentheses = lexeme(just('('))
        .ignore_then(expr)
        .then_ignore(lexeme(just(')')))
        .map(|inner| Expression::Parentheses(Box::new(inner)));

    literal()
        .map(Expression::Type)
        .or(parentheses)
        .or(identifier().map(Expression::VarIdentifier))
        .labelled("expression")
}

/// Terms joined by operators, folded strictly left to right.
///
/// There are no precedence levels: `a + b * c` is `(a + b) * c`.
/// A term missing after an operator is reported as a missing `expression`.
pub fn expression() -> impl Parser<char, Expression, Error = ParserError> + Clone {
    recursive(|expr| {
        let term = term(expr).boxed();

        term.clone()
            .then(operator().then(term.labelled("expression")).repeated())
            .foldl(|left, (combine, right)| {
                Expression::Operation(combine(Box::new(left), Box::new(right)))
            })
    })
}
