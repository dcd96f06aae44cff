use std::fmt;

use serde::Serialize;

/// A numeric constraint parsed from the value of `y:`, `d:` or `b:`.
///
/// # Examples
/// ```text
/// 1987          Exact(1987)
/// 1987-         AtLeast(1987)
/// -1987         AtMost(1987)
/// 1980-1987     Between(1980, 1987)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RangeValue {
    Exact(u32),
    AtLeast(u32),
    AtMost(u32),
    /// Bounds are kept as written; `Between(1990, 1980)` matches nothing.
    Between(u32, u32),
}

impl RangeValue {
    /// Parse a range expression. `None` means the text is not a range, which
    /// callers treat as a soft failure rather than a syntax error.
    ///
    /// ```
    /// use track_query::ast::RangeValue;
    ///
    /// assert_eq!(RangeValue::parse("1980-1987"), Some(RangeValue::Between(1980, 1987)));
    /// assert_eq!(RangeValue::parse("abcd"), None);
    /// ```
    pub fn parse(text: &str) -> Option<Self> {
        match text.split_once('-') {
            None => parse_number(text).map(Self::Exact),
            Some((lo, "")) => parse_number(lo).map(Self::AtLeast),
            Some(("", hi)) => parse_number(hi).map(Self::AtMost),
            Some((lo, hi)) => Some(Self::Between(parse_number(lo)?, parse_number(hi)?)),
        }
    }

    pub fn contains(&self, n: u32) -> bool {
        match *self {
            Self::Exact(v) => n == v,
            Self::AtLeast(lo) => n >= lo,
            Self::AtMost(hi) => n <= hi,
            Self::Between(lo, hi) => lo <= n && n <= hi,
        }
    }
}

impl fmt::Display for RangeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(v) => write!(f, "{v}"),
            Self::AtLeast(lo) => write!(f, "{lo}-"),
            Self::AtMost(hi) => write!(f, "-{hi}"),
            Self::Between(lo, hi) => write!(f, "{lo}-{hi}"),
        }
    }
}

// `u32::from_str` accepts a leading `+`, which is not part of the grammar.
fn parse_number(text: &str) -> Option<u32> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

#[test]
fn test_range_forms() {
    assert_eq!(RangeValue::parse("1987"), Some(RangeValue::Exact(1987)));
    assert_eq!(RangeValue::parse("1987-"), Some(RangeValue::AtLeast(1987)));
    assert_eq!(RangeValue::parse("-1987"), Some(RangeValue::AtMost(1987)));
    assert_eq!(RangeValue::parse("1980-1987"), Some(RangeValue::Between(1980, 1987)));
}

#[test]
fn test_range_rejects_malformed() {
    for text in ["", "-", "+5", "1-2-3", "19 87", "1987.5", "99999999999"] {
        assert_eq!(RangeValue::parse(text), None, "{text:?} should not parse");
    }
}

#[test]
fn test_range_contains() {
    assert!(RangeValue::Between(1980, 1987).contains(1980));
    assert!(RangeValue::Between(1980, 1987).contains(1987));
    assert!(!RangeValue::Between(1987, 1980).contains(1983));
    assert!(RangeValue::AtMost(5).contains(0));
}
