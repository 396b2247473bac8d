//! Parser entry points.
//!
//! This module runs the grammar rules against source text and turns
//! chumsky failures into the crate's [`Error`] type. Every entry point
//! is a pure function of its input.
//!
//! Whole-input entry points (`parse_statement`, `parse_expression`, ...)
//! require the rule to consume all of the source. The `*_at` variants
//! start at a character offset and report where parsing stopped.

use std::rc::Rc;

use chumsky::{error::SimpleReason, prelude::*};
use tracing::debug;

use crate::{
    ast::{
        expressions::Expression,
        statements::{Declaration, Statement},
        types::TypeName,
    },
    errors::errors::{Error, ErrorImpl},
    Position,
};

use super::{
    expr::expression,
    lexeme::{is_whitespace, ParserError},
    stmt::{declaration, statement, whole_statement},
    types::type_name,
};

/// Parses one statement that spans the whole source.
///
/// Leading whitespace is not skipped.
pub fn parse_statement(source: &str, file: Rc<String>) -> Result<Statement, Error> {
    run(whole_statement(), source, 0, &file, "statement")
}

/// Parses one expression that spans the whole source.
pub fn parse_expression(source: &str, file: Rc<String>) -> Result<Expression, Error> {
    run(expression().then_ignore(end()), source, 0, &file, "expression")
}

/// Parses one variable declaration that spans the whole source.
pub fn parse_declaration(source: &str, file: Rc<String>) -> Result<Declaration, Error> {
    run(declaration().then_ignore(end()), source, 0, &file, "declaration")
}

/// Parses a bare type annotation keyword such as `vector`.
pub fn parse_type_name(source: &str, file: Rc<String>) -> Result<TypeName, Error> {
    run(type_name().then_ignore(end()), source, 0, &file, "type name")
}

/// Parses one statement starting at character offset `start`.
///
/// # Returns
///
/// The statement and the offset just past it (trailing whitespace
/// included). Anything after that is left for the caller.
pub fn parse_statement_at(
    source: &str,
    start: usize,
    file: Rc<String>,
) -> Result<(Statement, usize), Error> {
    parse_at(statement(), source, start, &file, "statement")
}

/// Parses one expression starting at character offset `start`.
///
/// See [`parse_statement_at`] for the meaning of the returned offset.
pub fn parse_expression_at(
    source: &str,
    start: usize,
    file: Rc<String>,
) -> Result<(Expression, usize), Error> {
    parse_at(expression(), source, start, &file, "expression")
}

/// Parses every statement in a source file.
///
/// Whitespace before the first statement is skipped here, since the
/// statement rule itself only skips whitespace after tokens.
///
/// When a declaration fails and its text is read as an expression
/// instead, the declaration's failure is kept. If the program fails
/// later on, whichever failure got furthest is reported.
pub fn parse_program(source: &str, file: Rc<String>) -> Result<Vec<Statement>, Error> {
    let length = source.chars().count();
    let mut cursor = source.chars().take_while(is_whitespace).count();
    let mut statements = vec![];
    let mut abandoned: Option<Error> = None;

    while cursor < length {
        let declaration_error = match parse_at(declaration(), source, cursor, &file, "declaration") {
            Ok((declaration, end)) => {
                statements.push(Statement::Declaration(declaration));
                cursor = end;
                continue;
            }
            Err(error) => error,
        };

        match parse_at(expression(), source, cursor, &file, "expression") {
            Ok((expression, end)) => {
                abandoned = Some(furthest(abandoned, declaration_error));
                statements.push(Statement::Expression(expression));
                cursor = end;
            }
            Err(expression_error) => {
                let error = furthest(Some(declaration_error), expression_error);
                return Err(furthest(abandoned, error));
            }
        }
    }

    Ok(statements)
}

fn parse_at<O, P>(
    parser: P,
    source: &str,
    start: usize,
    file: &Rc<String>,
    construct: &str,
) -> Result<(O, usize), Error>
where
    P: Parser<char, O, Error = ParserError>,
{
    let parser = parser.map_with_span(|output, span| (output, span.end));
    let (output, end) = run(parser, source, start, file, construct)?;

    Ok((output, start + end))
}

/// Keeps `candidate` only if it got strictly further than `current`.
fn furthest(current: Option<Error>, candidate: Error) -> Error {
    match current {
        Some(current) if current.get_position().0 >= candidate.get_position().0 => current,
        _ => candidate,
    }
}

fn run<O, P>(
    parser: P,
    source: &str,
    start: usize,
    file: &Rc<String>,
    construct: &str,
) -> Result<O, Error>
where
    P: Parser<char, O, Error = ParserError>,
{
    let input: String = source.chars().skip(start).collect();

    match parser.parse(input.as_str()) {
        Ok(output) => {
            debug!(file = %file, start, construct, "parsed");
            Ok(output)
        }
        Err(errors) => {
            let error = convert_errors(errors, start, file, construct);
            debug!(file = %file, start, construct, error = %error, "parse failed");
            Err(error)
        }
    }
}

/// Picks the failure that got furthest into the input.
fn convert_errors(
    errors: Vec<ParserError>,
    start: usize,
    file: &Rc<String>,
    construct: &str,
) -> Error {
    let Some(error) = errors.into_iter().max_by_key(|error| error.span().start) else {
        return Error::new(
            ErrorImpl::UnexpectedEndOfInput {
                expected: construct.to_string(),
            },
            Position(start as u32, Rc::clone(file)),
        );
    };

    let position = Position((start + error.span().start) as u32, Rc::clone(file));
    let expected = describe_expected(&error, construct);

    let error_impl = match error.reason() {
        SimpleReason::Custom(literal) => ErrorImpl::InvalidLiteral {
            literal: literal.clone(),
        },
        SimpleReason::Unexpected | SimpleReason::Unclosed { .. } => match error.found() {
            Some(found) => ErrorImpl::UnexpectedCharacter {
                found: *found,
                expected,
            },
            None => ErrorImpl::UnexpectedEndOfInput { expected },
        },
    };

    Error::new(error_impl, position)
}

fn describe_expected(error: &ParserError, construct: &str) -> String {
    if let Some(label) = error.label() {
        return label.to_string();
    }

    let mut expected: Vec<String> = error
        .expected()
        .map(|expected| match expected {
            Some(c) => format!("{:?}", c),
            None => String::from("end of input"),
        })
        .collect();
    expected.sort();
    expected.dedup();

    if expected.is_empty() {
        construct.to_string()
    } else {
        expected.join(", ")
    }
}
