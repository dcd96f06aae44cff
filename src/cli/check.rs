//! Compile queries and run them against JSON catalogs

use super::CliError;
use crate::{
    AccessPolicy, Catalog, Track, build, output,
    sql::{SqlFragment, to_sql},
};

/// How a compiled tree is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One line, nested calls
    #[default]
    Text,
    /// One node per line
    Tree,
    /// serde JSON
    Json,
}

/// Options for the check command
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// The search query to compile
    pub query: String,
    pub format: OutputFormat,
    /// Pretty-print JSON output
    pub pretty: bool,
    /// Only validate syntax, don't print the tree
    pub syntax_only: bool,
}

/// Result of a check operation
#[derive(Debug)]
pub enum CheckResult {
    /// Syntax validation passed
    SyntaxValid,
    /// The query compiled; the rendered tree
    Compiled(String),
}

/// Compile a query and render its predicate tree
pub fn execute_check(options: &CheckOptions) -> Result<CheckResult, CliError> {
    let tree = build(&options.query)?;

    if options.syntax_only {
        return Ok(CheckResult::SyntaxValid);
    }

    let rendered = match options.format {
        OutputFormat::Text => output::to_text(&tree),
        OutputFormat::Tree => output::to_text_pretty(&tree),
        OutputFormat::Json if options.pretty => output::to_json_pretty(&tree)?,
        OutputFormat::Json => output::to_json(&tree)?,
    };

    Ok(CheckResult::Compiled(rendered))
}

/// Compile a query into a SQL `WHERE` fragment
pub fn execute_sql(query: &str) -> Result<SqlFragment, CliError> {
    Ok(to_sql(&build(query)?))
}

/// Options for the search command
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    pub query: String,
    /// JSON array of tracks
    pub input: Option<String>,
    pub policy: AccessPolicy,
    pub pretty: bool,
}

/// Run a query over a catalog and return the matching tracks as JSON
pub fn execute_search(options: &SearchOptions) -> Result<String, CliError> {
    let json = options.input.as_ref().ok_or(CliError::NoInput)?;
    let catalog = Catalog::from_json(json)?;

    let matches: Vec<&Track> = catalog.search(&options.query, &options.policy)?;

    let rendered = if options.pretty {
        serde_json::to_string_pretty(&matches)?
    } else {
        serde_json::to_string(&matches)?
    };
    Ok(rendered)
}
