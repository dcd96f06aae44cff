use crate::error::SyntaxError;

/// Deepest bracket nesting a query may use. Groups are compiled recursively,
/// so this also bounds the compiler's recursion.
pub const MAX_NESTING: usize = 64;

/// Break a query into its top-level terms.
///
/// Whitespace separates terms only outside quotes and parentheses. Each term
/// keeps its quotes and brackets so it can be classified and, for groups,
/// split again.
///
/// ```
/// use track_query::split;
///
/// let tokens = split(r#"(a:beatles OR a:"the beatles") t:help"#).unwrap();
/// assert_eq!(tokens, vec![r#"(a:beatles OR a:"the beatles")"#, "t:help"]);
/// ```
pub fn split(query: &str) -> Result<Vec<String>, SyntaxError> {
    let tokens = Splitter::new(query).run()?;
    tracing::trace!(query, count = tokens.len(), "split query");
    Ok(tokens)
}

struct Splitter {
    input: Vec<char>,
    position: usize,
    in_quotes: bool,
    depth: usize,
}

impl Splitter {
    fn new(input: &str) -> Self {
        Splitter {
            input: input.chars().collect(),
            position: 0,
            in_quotes: false,
            depth: 0,
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn at_top_level(&self) -> bool {
        !self.in_quotes && self.depth == 0
    }

    fn run(mut self) -> Result<Vec<String>, SyntaxError> {
        let mut tokens = Vec::new();
        let mut current = String::new();

        while let Some(ch) = self.current_char() {
            match ch {
                c if c.is_whitespace() && self.at_top_level() => {
                    if !current.is_empty() {
                        tokens.push(std::mem::take(&mut current));
                    }
                }
                '"' => {
                    self.in_quotes = !self.in_quotes;
                    current.push(ch);
                }
                '(' if !self.in_quotes => {
                    self.depth += 1;
                    if self.depth > MAX_NESTING {
                        return Err(SyntaxError::NestingTooDeep { limit: MAX_NESTING });
                    }
                    current.push(ch);
                }
                ')' if !self.in_quotes => {
                    self.depth = self
                        .depth
                        .checked_sub(1)
                        .ok_or(SyntaxError::UnbalancedBrackets)?;
                    current.push(ch);
                }
                _ => current.push(ch),
            }
            self.advance();
        }

        if self.in_quotes {
            return Err(SyntaxError::UnbalancedQuotes);
        }
        if self.depth != 0 {
            return Err(SyntaxError::UnbalancedBrackets);
        }
        if !current.is_empty() {
            tokens.push(current);
        }
        Ok(tokens)
    }
}

#[test]
fn test_whitespace_only() {
    assert_eq!(split(" \t\n ").unwrap(), Vec::<String>::new());
}

#[test]
fn test_quotes_keep_spaces() {
    assert_eq!(
        split(r#"a:"Rick Astley" +pop"#).unwrap(),
        vec![r#"a:"Rick Astley""#, "+pop"]
    );
}

#[test]
fn test_nesting_limit() {
    let at_limit = format!("{}t:a{}", "(".repeat(MAX_NESTING), ")".repeat(MAX_NESTING));
    assert!(split(&at_limit).is_ok());

    let past_limit = format!("({at_limit})");
    assert_eq!(
        split(&past_limit),
        Err(SyntaxError::NestingTooDeep { limit: MAX_NESTING })
    );
}

#[test]
fn test_stray_close_paren() {
    assert_eq!(split("t:a) (t:b"), Err(SyntaxError::UnbalancedBrackets));
}
