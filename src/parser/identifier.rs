use chumsky::prelude::*;

use super::lexeme::{lexeme, ParserError};

/// A letter or `_`, followed by letters, digits and `_`.
///
/// Keywords are not excluded here; callers must try keyword rules first.
pub fn identifier() -> impl Parser<char, String, Error = ParserError> + Clone {
    lexeme(
        filter(|c: &char| c.is_alphabetic() || *c == '_')
            .chain(filter(|c: &char| c.is_alphanumeric() || *c == '_').repeated())
            .collect::<String>(),
    )
}
