//! CLI support for track-query
//!
//! Provides programmatic access to the `trackq` commands so other tools can
//! embed them without shelling out.

mod check;
mod docs;

pub use check::{
    CheckOptions, CheckResult, OutputFormat, SearchOptions, execute_check, execute_search,
    execute_sql,
};
pub use docs::{DocCategory, get_doc_category, get_docs_overview};

use std::io;

use thiserror::Error;

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Syntax error: {0}")]
    Syntax(#[from] crate::SyntaxError),

    #[error("Search error: {0}")]
    Search(#[from] crate::SearchError),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("No catalog provided. Use --input or pipe a JSON array of tracks to stdin.")]
    NoInput,

    #[error("Unknown category: '{0}'\nRun 'trackq docs' to see available categories.")]
    UnknownCategory(String),
}
