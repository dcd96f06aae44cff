use clap::{Parser as ClapParser, Subcommand, ValueEnum};
use std::io::{self, Read};
use track_query::AccessPolicy;
use track_query::cli::{self, CheckOptions, CheckResult, CliError, OutputFormat, SearchOptions};
use tracing_subscriber::EnvFilter;

#[derive(ClapParser)]
#[command(name = "trackq")]
#[command(about = "trackq - compile track search queries into filters")]
#[command(version)]
struct Cli {
    /// Log compiler decisions (soft failures, ignored keywords) to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Tree,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a query and print its predicate tree
    Check {
        /// The search query to compile
        query: String,

        #[arg(short, long, value_enum, default_value = "text")]
        format: Format,

        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,

        /// Only validate syntax, don't print the tree
        #[arg(long)]
        syntax_only: bool,
    },

    /// Print the SQL WHERE fragment and parameters for a query
    Sql {
        /// The search query to compile
        query: String,
    },

    /// Run a query against a JSON catalog of tracks
    Search {
        /// The search query to run
        query: String,

        /// Catalog JSON (reads from stdin if not provided)
        #[arg(short, long)]
        input: Option<String>,

        /// Tag hidden from every search (repeatable)
        #[arg(long = "block-tag")]
        block_tags: Vec<String>,

        /// Artist hidden from every search (repeatable)
        #[arg(long = "block-artist")]
        block_artists: Vec<String>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,
    },

    /// List documentation categories
    Docs,

    /// Show documentation for a specific category
    Doc {
        /// Category name (use 'trackq docs' to list categories)
        category: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Check {
            query,
            format,
            pretty,
            syntax_only,
        } => run_check(query, format, pretty, syntax_only),
        Commands::Sql { query } => run_sql(&query),
        Commands::Search {
            query,
            input,
            block_tags,
            block_artists,
            pretty,
        } => run_search(query, input, block_tags, block_artists, pretty),
        Commands::Docs => {
            print!("{}", cli::get_docs_overview());
            Ok(())
        }
        Commands::Doc { category } => cli::get_doc_category(&category).map(|content| {
            print!("{}", content);
        }),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .init();
}

fn run_check(
    query: String,
    format: Format,
    pretty: bool,
    syntax_only: bool,
) -> Result<(), CliError> {
    let format = match format {
        Format::Text => OutputFormat::Text,
        Format::Tree => OutputFormat::Tree,
        Format::Json => OutputFormat::Json,
    };

    let options = CheckOptions {
        query,
        format,
        pretty,
        syntax_only,
    };

    match cli::execute_check(&options)? {
        CheckResult::SyntaxValid => println!("Syntax is valid"),
        CheckResult::Compiled(output) => println!("{}", output),
    }
    Ok(())
}

fn run_sql(query: &str) -> Result<(), CliError> {
    let fragment = cli::execute_sql(query)?;
    println!("{}", fragment.sql);
    println!("{}", serde_json::to_string(&fragment.params)?);
    Ok(())
}

fn run_search(
    query: String,
    input: Option<String>,
    blocked_tags: Vec<String>,
    blocked_artists: Vec<String>,
    pretty: bool,
) -> Result<(), CliError> {
    let input = match input {
        Some(s) => Some(s),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Some(buffer)
        }
        None => None,
    };

    let options = SearchOptions {
        query,
        input,
        policy: AccessPolicy {
            blocked_tags,
            blocked_artists,
        },
        pretty,
    };

    println!("{}", cli::execute_search(&options)?);
    Ok(())
}
