//! Documentation content for trackq CLI

use super::CliError;

/// Available documentation categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocCategory {
    Syntax,
    Fields,
    Ranges,
    Tags,
    Operators,
    Errors,
}

impl DocCategory {
    /// Parse category name from string
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "syntax" => Some(Self::Syntax),
            "fields" | "field" | "prefixes" => Some(Self::Fields),
            "ranges" | "range" | "numbers" => Some(Self::Ranges),
            "tags" | "tag" => Some(Self::Tags),
            "operators" | "ops" | "precedence" => Some(Self::Operators),
            "errors" | "error" => Some(Self::Errors),
            _ => None,
        }
    }
}

/// Get the docs overview (category listing)
pub fn get_docs_overview() -> &'static str {
    r#"TRACKQ DOCUMENTATION

trackq compiles a single search string into a filter over a track catalog.
Terms are separated by spaces, combined with AND / OR, and may be grouped
with parentheses.

DOCUMENTATION CATEGORIES

  syntax            Terms, quoting and grouping
  fields            Field prefixes: t: al: a: y: e: d: b:
  ranges            Numeric values and ranges for y: d: b:
  tags              Including and excluding tags with + and -
  operators         AND, OR, implicit AND and precedence
  errors            What is rejected and what is silently ignored

QUICK REFERENCE

  never gonna       Title, artist or album contains the words
  t:"give you up"   Title contains
  a:astley          Artist contains
  y:1980-1987       Year between
  +pop -rock        Tagged pop, not tagged rock
  t:a OR t:b        Either
  (t:a OR t:b) y:1987

Run 'trackq doc <category>' for detailed documentation.
"#
}

/// Get documentation for a specific category
pub fn get_doc_category(name: &str) -> Result<&'static str, CliError> {
    match DocCategory::from_name(name) {
        Some(DocCategory::Syntax) => Ok(SYNTAX_DOC),
        Some(DocCategory::Fields) => Ok(FIELDS_DOC),
        Some(DocCategory::Ranges) => Ok(RANGES_DOC),
        Some(DocCategory::Tags) => Ok(TAGS_DOC),
        Some(DocCategory::Operators) => Ok(OPERATORS_DOC),
        Some(DocCategory::Errors) => Ok(ERRORS_DOC),
        None => Err(CliError::UnknownCategory(name.to_string())),
    }
}

const SYNTAX_DOC: &str = r#"SYNTAX

TERMS
  A query is a list of terms separated by whitespace.

    rick astley       Two terms, both must match

QUOTING
  Double quotes keep spaces inside one term. Quotes do not nest.

    "rick astley"     One term
    a:"Rick Astley"   One field term

GROUPING
  Parentheses group a sub-query into one term. Groups may nest.

    (a:beatles OR a:"the beatles") t:help

BARE TERMS
  A term without a prefix matches when the title, an artist or an album
  contains it, ignoring case.
"#;

const FIELDS_DOC: &str = r#"FIELDS

TEXT (case-insensitive substring)
  t:<text>          Title
  al:<text>         Any album the track belongs to
  a:<text>          Any artist of the track

NUMBERS (see 'trackq doc ranges')
  y:<range>         Release year
  d:<range>         Duration in seconds
  b:<range>         Bitrate in kbps

FLAGS
  e:<yes|no>        Explicit. Accepts yes/true/1 and no/false/0.

Prefixes are lower-case. Quote values that contain spaces:

    al:"Whenever You Need Somebody"
"#;

const RANGES_DOC: &str = r#"RANGES

  y:1987            Exactly 1987
  y:1987-           1987 or later
  y:-1987           1987 or earlier
  y:1980-1987       From 1980 to 1987, inclusive

Bounds are whole non-negative numbers. Tracks with no value for the field
never match a numeric term.
"#;

const TAGS_DOC: &str = r#"TAGS

  +pop              Tagged pop
  -rock             Not tagged rock
  +"hip hop"        Quote tag names with spaces

Tag names must match exactly, ignoring case: +pop does not match a
track tagged "synthpop".
"#;

const OPERATORS_DOC: &str = r#"OPERATORS

  t:a AND t:b       Both
  t:a OR t:b        Either
  t:a t:b           Both (AND is implied between adjacent terms)

AND and OR must be upper-case and stand alone. Lower-case "and" or a
quoted "OR" is ordinary search text.

PRECEDENCE
  AND binds tighter than OR:

    t:a AND t:b OR t:c      =>  (t:a AND t:b) OR t:c

  Use parentheses to change grouping:

    t:a AND (t:b OR t:c)
"#;

const ERRORS_DOC: &str = r#"ERRORS

REJECTED
  An unclosed quote or unbalanced parentheses makes the whole query invalid.

    a:"Rick Astley          unclosed quote
    (t:help OR t:yesterday  unclosed bracket

IGNORED
  A field value that cannot be understood filters nothing; the rest of the
  query still applies.

    y:abcd t:help           same as t:help
    e:maybe                 matches everything
"#;

#[test]
fn test_every_category_resolves() {
    for name in ["syntax", "fields", "ranges", "tags", "operators", "errors"] {
        assert!(get_doc_category(name).is_ok(), "{name}");
    }
    assert!(get_doc_category("nope").is_err());
}
