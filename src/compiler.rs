use crate::{
    ast::{Field, Predicate, RangeValue, Term},
    classifier::classify,
    error::SyntaxError,
    parser,
};

/// Compile a single split token into a predicate.
///
/// Groups are split and parsed recursively, so the only errors are the
/// structural ones from their contents. A value that cannot be understood
/// compiles to `Always(true)`.
///
/// ```
/// use track_query::ast::{NumericField, Predicate, RangeValue};
/// use track_query::compiler::compile_term;
///
/// assert_eq!(
///     compile_term("y:1987-").unwrap(),
///     Predicate::numeric_match(NumericField::Year, RangeValue::AtLeast(1987))
/// );
/// assert_eq!(compile_term("y:abcd").unwrap(), Predicate::Always(true));
/// ```
pub fn compile_term(token: &str) -> Result<Predicate, SyntaxError> {
    compile(classify(token))
}

/// Compile an already classified term.
pub fn compile(term: Term) -> Result<Predicate, SyntaxError> {
    match term {
        Term::Group(inner) => parser::build(&inner),
        Term::Tag { included, name } => Ok(compile_tag(included, name)),
        Term::Field { field, value } => Ok(compile_field(field, &value)),
        Term::Default(text) => Ok(Predicate::default_match(&text)),
        Term::Combinator(op) => {
            tracing::debug!(keyword = op.keyword(), "keyword compiled as a term");
            Ok(Predicate::Always(true))
        }
    }
}

fn compile_tag(included: bool, name: String) -> Predicate {
    if name.is_empty() {
        tracing::debug!(included, "empty tag name ignored");
        return Predicate::Always(true);
    }
    Predicate::tag(included, name)
}

fn compile_field(field: Field, value: &str) -> Predicate {
    match field {
        Field::Text(field) => Predicate::string_match(field, value),
        Field::Numeric(numeric) => match RangeValue::parse(value) {
            Some(range) => Predicate::numeric_match(numeric, range),
            None => soft_failure(field, value),
        },
        Field::Flag(flag) => match parse_flag(value) {
            Some(value) => Predicate::BooleanMatch { field: flag, value },
            None => soft_failure(field, value),
        },
    }
}

/// `yes` / `true` / `1` and `no` / `false` / `0`, any case.
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "yes" | "true" | "1" => Some(true),
        "no" | "false" | "0" => Some(false),
        _ => None,
    }
}

fn soft_failure(field: Field, value: &str) -> Predicate {
    tracing::debug!(
        prefix = field.prefix().as_str(),
        value,
        "field value not understood, clause ignored"
    );
    Predicate::Always(true)
}

#[test]
fn test_flag_spellings() {
    assert_eq!(parse_flag("YES"), Some(true));
    assert_eq!(parse_flag("0"), Some(false));
    assert_eq!(parse_flag("maybe"), None);
}
