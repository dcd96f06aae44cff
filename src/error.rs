use thiserror::Error;

/// Structural errors that make a query impossible to compile.
///
/// Malformed field values are not errors; they degrade to a clause that
/// filters nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// A `"` was opened and never closed
    #[error("unbalanced quotes: a '\"' is never closed")]
    UnbalancedQuotes,

    /// A `(` was never closed, or a `)` has no matching `(`
    #[error("unbalanced brackets: parentheses do not match")]
    UnbalancedBrackets,

    /// Parentheses nest deeper than the compiler accepts
    #[error("brackets nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}
