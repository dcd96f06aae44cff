pub mod adapter;
pub mod ast;
pub mod catalog;
pub mod classifier;
pub mod cli;
pub mod compiler;
pub mod error;
pub mod evaluator;
pub mod output;
pub mod parser;
pub mod splitter;
pub mod sql;

pub use adapter::{FilterBackend, translate};
pub use ast::{Combinator, Field, FieldPrefix, Predicate, RangeValue, Term};
pub use catalog::{AccessPolicy, Catalog, SearchError, Track};
pub use compiler::compile_term;
pub use error::SyntaxError;
pub use evaluator::TrackMatcher;
pub use output::{to_json, to_json_pretty, to_text, to_text_pretty};
pub use parser::{Parser, build, parse};
pub use splitter::split;
pub use sql::{SqlBackend, SqlFragment, SqlParam, SqlSchema, to_sql};
