//! # Track Query Language - Predicate Tree
//!
//! This module defines the types a search query is compiled into. The tree is
//! independent of any storage engine: a backend walks it through
//! [`crate::adapter::FilterBackend`] and produces its own filter.
//!
//! ## Architecture Overview
//!
//! - **[tokens]** - Classified terms produced from split tokens
//! - **[fields]** - Field prefixes and the typed fields leaves filter on
//! - **[operators]** - The `AND` / `OR` combinators
//! - **[range]** - Numeric range values (`1987`, `1987-`, `-1987`, `1980-1987`)
//! - **[predicate]** - The predicate tree itself
//!
//! ## Quick Start
//!
//! ```text
//! a:"Rick Astley" AND y:1980-1987 AND +pop -rock
//! ```
//!
//! This query keeps tracks by Rick Astley released between 1980 and 1987 that
//! are tagged `pop` and not tagged `rock`.
//!
//! ## Core Concepts
//!
//! ### Field Prefixes
//!
//! ```text
//! t:  title        al: album        a: artist
//! y:  year         d:  duration     b: bitrate
//! e:  explicit     +tag / -tag      (bare word: title, artist or album)
//! ```
//!
//! ### Precedence
//!
//! `AND` binds tighter than `OR`, and two adjacent terms with no keyword
//! between them are joined with `AND`:
//!
//! ```text
//! t:a t:b OR t:c    =>    (t:a AND t:b) OR t:c
//! ```
//!
//! ### Soft Failures
//!
//! A field value that cannot be understood (`y:abcd`, `e:maybe`) compiles to
//! [`Predicate::Always`]`(true)` so the rest of the query still filters.
pub mod fields;
pub mod operators;
pub mod predicate;
pub mod range;
pub mod tokens;

pub use fields::{BooleanField, Field, FieldPrefix, NumericField, StringField};
pub use operators::Combinator;
pub use predicate::Predicate;
pub use range::RangeValue;
pub use tokens::Term;
