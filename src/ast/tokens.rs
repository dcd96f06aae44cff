use crate::ast::{Combinator, Field};

/// A split token after classification.
///
/// Classification only looks at the shape of the token; values are not parsed
/// yet, so a malformed `y:` value is still a `Field` here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    /// Standalone `AND` / `OR`
    Combinator(Combinator),

    /// Parenthesized sub-expression, with the outer parens removed
    ///
    /// # Example
    /// ```text
    /// (a:beatles OR a:"the beatles")
    /// ```
    Group(String),

    /// Tag directive, quotes removed from the name
    ///
    /// # Examples
    /// ```text
    /// +pop
    /// -"hip hop"
    /// ```
    Tag { included: bool, name: String },

    /// `prefix:value`, quotes removed from the value
    ///
    /// # Examples
    /// ```text
    /// t:help
    /// y:1980-1987
    /// ```
    Field { field: Field, value: String },

    /// Anything else, quotes removed
    Default(String),
}
