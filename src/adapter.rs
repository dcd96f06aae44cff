//! Translation of a predicate tree into a storage-specific filter.
//!
//! A backend describes how to build its filter for each leaf kind and how to
//! combine two filters; [`translate`] does the walk. The tree is fully
//! resolved, so translation never backtracks and never fails.

use crate::ast::{BooleanField, NumericField, Predicate, RangeValue, StringField};

/// A query mechanism a predicate tree can be translated into.
///
/// Implemented by [`crate::evaluator::TrackMatcher`] (in-memory evaluation)
/// and [`crate::sql::SqlBackend`] (a parameterised `WHERE` clause).
pub trait FilterBackend {
    type Filter;

    fn constant(&mut self, value: bool) -> Self::Filter;

    fn string_match(&mut self, field: StringField, substring: &str) -> Self::Filter;

    /// Rows without a value must not match.
    fn numeric_match(&mut self, field: NumericField, range: RangeValue) -> Self::Filter;

    fn boolean_match(&mut self, field: BooleanField, value: bool) -> Self::Filter;

    fn tag_membership(&mut self, included: bool, tag_name: &str) -> Self::Filter;

    fn and(&mut self, left: Self::Filter, right: Self::Filter) -> Self::Filter;

    fn or(&mut self, left: Self::Filter, right: Self::Filter) -> Self::Filter;
}

/// Walk `predicate` and build the backend's equivalent filter.
pub fn translate<B: FilterBackend>(predicate: &Predicate, backend: &mut B) -> B::Filter {
    match predicate {
        Predicate::StringMatch { field, substring } => backend.string_match(*field, substring),
        Predicate::NumericMatch { field, range } => backend.numeric_match(*field, *range),
        Predicate::BooleanMatch { field, value } => backend.boolean_match(*field, *value),
        Predicate::TagMembership { included, tag_name } => {
            backend.tag_membership(*included, tag_name)
        }
        Predicate::And(left, right) => {
            let left = translate(left, backend);
            let right = translate(right, backend);
            backend.and(left, right)
        }
        Predicate::Or(left, right) => {
            let left = translate(left, backend);
            let right = translate(right, backend);
            backend.or(left, right)
        }
        Predicate::Always(value) => backend.constant(*value),
    }
}
