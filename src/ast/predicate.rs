use serde::Serialize;

use crate::ast::{BooleanField, Combinator, NumericField, RangeValue, StringField};

/// A compiled search query.
///
/// The tree is built once by [`crate::build`] and never mutated afterwards.
/// Composite nodes are binary; longer chains nest to the left, so
/// `t:a AND t:b AND t:c` is `And(And(a, b), c)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum Predicate {
    /// Case-insensitive substring match
    ///
    /// # Example
    /// ```text
    /// t:gonna
    /// ```
    StringMatch { field: StringField, substring: String },

    /// Exact or range comparison. A track with no value never matches.
    ///
    /// # Examples
    /// ```text
    /// y:1987
    /// d:-240
    /// ```
    NumericMatch { field: NumericField, range: RangeValue },

    /// Equality against a boolean flag
    ///
    /// # Example
    /// ```text
    /// e:no
    /// ```
    BooleanMatch { field: BooleanField, value: bool },

    /// Track must (or must not) carry a tag with exactly this name,
    /// compared case-insensitively.
    TagMembership { included: bool, tag_name: String },

    /// Both sides must hold
    And(Box<Predicate>, Box<Predicate>),

    /// Either side must hold
    Or(Box<Predicate>, Box<Predicate>),

    /// Constant result. `Always(true)` is the empty query and the result of
    /// a clause whose value could not be understood.
    Always(bool),
}

impl Predicate {
    pub fn and(left: Predicate, right: Predicate) -> Self {
        Predicate::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: Predicate, right: Predicate) -> Self {
        Predicate::Or(Box::new(left), Box::new(right))
    }

    pub fn combine(op: Combinator, left: Predicate, right: Predicate) -> Self {
        match op {
            Combinator::And => Self::and(left, right),
            Combinator::Or => Self::or(left, right),
        }
    }

    /// Left-fold operands with a single combinator. Returns `None` when there
    /// is nothing to fold.
    ///
    /// ```
    /// use track_query::ast::{Combinator, Predicate};
    ///
    /// let folded = Predicate::fold(
    ///     Combinator::And,
    ///     [Predicate::Always(true), Predicate::Always(false), Predicate::Always(true)],
    /// );
    /// assert_eq!(
    ///     folded,
    ///     Some(Predicate::and(
    ///         Predicate::and(Predicate::Always(true), Predicate::Always(false)),
    ///         Predicate::Always(true),
    ///     ))
    /// );
    /// ```
    pub fn fold<I>(op: Combinator, operands: I) -> Option<Self>
    where
        I: IntoIterator<Item = Predicate>,
    {
        operands
            .into_iter()
            .reduce(|left, right| Self::combine(op, left, right))
    }

    pub fn string_match(field: StringField, substring: impl Into<String>) -> Self {
        Predicate::StringMatch {
            field,
            substring: substring.into(),
        }
    }

    pub fn numeric_match(field: NumericField, range: RangeValue) -> Self {
        Predicate::NumericMatch { field, range }
    }

    pub fn tag(included: bool, tag_name: impl Into<String>) -> Self {
        Predicate::TagMembership {
            included,
            tag_name: tag_name.into(),
        }
    }

    /// The search applied to a bare word: title, artist or album contains it.
    pub fn default_match(substring: &str) -> Self {
        Self::or(
            Self::or(
                Self::string_match(StringField::Title, substring),
                Self::string_match(StringField::Artist, substring),
            ),
            Self::string_match(StringField::Album, substring),
        )
    }

    /// Number of leaf nodes in the tree.
    pub fn leaf_count(&self) -> usize {
        match self {
            Predicate::And(left, right) | Predicate::Or(left, right) => {
                left.leaf_count() + right.leaf_count()
            }
            _ => 1,
        }
    }
}
