use std::sync::LazyLock;

use regex::Regex;

use crate::ast::{Combinator, Field, Term};

static FIELD_TERM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^(al|a|t|y|e|d|b):(.*)$").expect("field term pattern is valid")
});

/// Decide what kind of term a split token is.
///
/// Rules, first match wins:
/// 1. `AND` / `OR` on their own are combinators
/// 2. `(...)` whose first paren closes at the end is a group
/// 3. a leading `+` / `-` is a tag directive
/// 4. `prefix:value` with a known prefix is a field term
/// 5. anything else is a default term
///
/// ```
/// use track_query::ast::{Field, StringField, Term};
/// use track_query::classifier::classify;
///
/// assert_eq!(
///     classify(r#"a:"Rick Astley""#),
///     Term::Field { field: Field::Text(StringField::Artist), value: "Rick Astley".into() }
/// );
/// ```
pub fn classify(token: &str) -> Term {
    if let Some(op) = Combinator::from_keyword(token) {
        return Term::Combinator(op);
    }

    if let Some(inner) = group_contents(token) {
        return Term::Group(inner.to_string());
    }

    if let Some(rest) = token.strip_prefix('+') {
        return Term::Tag {
            included: true,
            name: strip_quotes(rest).to_string(),
        };
    }

    if let Some(rest) = token.strip_prefix('-') {
        return Term::Tag {
            included: false,
            name: strip_quotes(rest).to_string(),
        };
    }

    if let Some(caps) = FIELD_TERM.captures(token) {
        // The pattern only admits known prefixes.
        if let Some(field) = Field::from_prefix(&caps[1]) {
            return Term::Field {
                field,
                value: strip_quotes(&caps[2]).to_string(),
            };
        }
    }

    Term::Default(strip_quotes(token).to_string())
}

/// Remove one pair of surrounding double quotes.
pub fn strip_quotes(text: &str) -> &str {
    text.strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(text)
}

// `(a)(b)` starts and ends with parens but is not one group.
fn group_contents(token: &str) -> Option<&str> {
    let inner = token.strip_prefix('(')?.strip_suffix(')')?;

    let mut depth = 0usize;
    let mut in_quotes = false;
    for ch in inner.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            '(' if !in_quotes => depth += 1,
            ')' if !in_quotes => depth = depth.checked_sub(1)?,
            _ => {}
        }
    }
    (depth == 0).then_some(inner)
}

#[test]
fn test_keywords_are_case_sensitive() {
    assert_eq!(classify("AND"), Term::Combinator(Combinator::And));
    assert_eq!(classify("OR"), Term::Combinator(Combinator::Or));
    assert_eq!(classify("and"), Term::Default("and".into()));
    assert_eq!(classify("\"OR\""), Term::Default("OR".into()));
}

#[test]
fn test_adjacent_groups_are_not_one_group() {
    assert_eq!(classify("(t:a)(t:b)"), Term::Default("(t:a)(t:b)".into()));
    assert_eq!(classify("((t:a))"), Term::Group("(t:a)".into()));
}

#[test]
fn test_unknown_prefix_is_default() {
    assert_eq!(classify("x:foo"), Term::Default("x:foo".into()));
    assert_eq!(classify("T:foo"), Term::Default("T:foo".into()));
}

#[test]
fn test_strip_quotes_single_char() {
    assert_eq!(strip_quotes("\""), "\"");
    assert_eq!(strip_quotes("\"\""), "");
}
