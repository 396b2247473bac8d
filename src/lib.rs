#![allow(clippy::module_inception)]

use std::{fmt::Write, rc::Rc};

use crate::errors::errors::Error;

pub mod ast;
pub mod errors;
pub mod macros;
pub mod parser;

pub use parser::parser::{
    parse_declaration, parse_expression, parse_expression_at, parse_program, parse_statement,
    parse_statement_at, parse_type_name,
};

/// A character offset into a source text, plus the name of that source.
#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

/// Finds the line holding a character offset.
///
/// # Returns
///
/// `(line number, line text, column)`, 1-based line and 0-based column.
/// An offset equal to the source length points just past the last
/// character. Offsets beyond that return `None`.
pub fn get_line_at_position(source: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    let mut start = 0;
    let mut line_number = 1;
    let mut last_line = None;

    for line in source.split_inclusive('\n') {
        let end = start + line.chars().count();

        if (start..end).contains(&pos) {
            return Some((line_number, line.to_string(), pos - start));
        }

        last_line = Some((line_number, line, start));
        start = end;
        line_number += 1;
    }

    if pos != start {
        return None;
    }

    match last_line {
        Some((number, line, line_start)) if !line.ends_with('\n') => {
            Some((number, line.to_string(), pos - line_start))
        }
        _ => Some((line_number, String::new(), 0)),
    }
}


/// Renders an error as a caret diagnostic pointing into `source`.
pub fn display_error(error: &Error, source: &str) -> String {
    /*
        error: message
        -> final.lang
           |
        20 | let a = #;
           | --------^
    */

    let position = error.get_position();
    let mut output = String::new();

    let _ = writeln!(output, "Error: {} ({})", error.get_error_name(), error.get_tip());
    let _ = writeln!(output, "-> {}", position.1);

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        return output;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let _ = writeln!(output, "{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    let _ = writeln!(output, "{} | {}", line_string, line_text_removed.trim_end());

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    let _ = writeln!(output, "{:>padding$} {:->arrows$}", "|", "^");

    output
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (string.chars().skip(start).collect(), start)
}
