use serde::Serialize;

/// Boolean combinators.
///
/// Only the exact standalone tokens `AND` and `OR` are keywords. Lower-case
/// spellings, or the words inside quotes, are ordinary search text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Combinator {
    /// Logical AND (`AND`, or two adjacent terms)
    And,
    /// Logical OR (`OR`)
    Or,
}

impl Combinator {
    pub fn from_keyword(token: &str) -> Option<Self> {
        match token {
            "AND" => Some(Self::And),
            "OR" => Some(Self::Or),
            _ => None,
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
        }
    }
}
