//! Declared type names.
//!
//! These are the keywords accepted after `:` in a variable declaration.
//! `point`, `vector` and `matrix` are valid annotations even though no
//! literal syntax exists for them.

use std::fmt::Display;

/// Represents the type keywords a declaration may be annotated with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeName {
    Int,
    Float,
    Bool,
    String,
    Point,
    Vector,
    Matrix,
}

impl TypeName {
    /// Returns the source keyword for this type name.
    pub fn keyword(&self) -> &'static str {
        match self {
            TypeName::Int => "int",
            TypeName::Float => "float",
            TypeName::Bool => "bool",
            TypeName::String => "string",
            TypeName::Point => "point",
            TypeName::Vector => "vector",
            TypeName::Matrix => "matrix",
        }
    }
}

impl Display for TypeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.keyword())
    }
}
