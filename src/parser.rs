use std::{iter::Peekable, vec::IntoIter};

use crate::{
    ast::{Combinator, Predicate, Term},
    classifier::classify,
    compiler::compile,
    error::SyntaxError,
    splitter::split,
};

/// Compile a raw query string into a predicate tree.
///
/// This is the entry point used by catalog search. An empty or
/// whitespace-only query compiles to `Always(true)`.
///
/// ```
/// use track_query::ast::{Predicate, StringField};
///
/// let tree = track_query::build("t:test1 AND t:test2 OR t:test3").unwrap();
/// assert_eq!(
///     tree,
///     Predicate::or(
///         Predicate::and(
///             Predicate::string_match(StringField::Title, "test1"),
///             Predicate::string_match(StringField::Title, "test2"),
///         ),
///         Predicate::string_match(StringField::Title, "test3"),
///     )
/// );
/// ```
pub fn build(query: &str) -> Result<Predicate, SyntaxError> {
    parse(split(query)?)
}

/// Parse split tokens into a predicate tree.
pub fn parse(tokens: Vec<String>) -> Result<Predicate, SyntaxError> {
    Parser::new(tokens).parse()
}

/// Recursive-descent parser over classified terms.
///
/// ```text
/// expr      := and_expr (OR and_expr)*
/// and_expr  := term (AND? term)*
/// term      := '(' expr ')' | field_term | tag_term | default_term
/// ```
///
/// Groups are compiled by splitting and parsing their contents again, so the
/// parser itself only ever sees a flat list.
pub struct Parser {
    terms: Peekable<IntoIter<Term>>,
}

impl Parser {
    pub fn new(tokens: Vec<String>) -> Self {
        let terms: Vec<Term> = tokens.iter().map(|token| classify(token)).collect();
        Parser {
            terms: terms.into_iter().peekable(),
        }
    }

    fn check(&mut self, op: Combinator) -> bool {
        matches!(self.terms.peek(), Some(Term::Combinator(current)) if *current == op)
    }

    fn advance(&mut self) -> Option<Term> {
        self.terms.next()
    }

    /// Operands with nothing in them (`t:a AND`, `OR t:b`) are dropped.
    fn parse_and(&mut self) -> Result<Option<Predicate>, SyntaxError> {
        let mut operands = vec![];

        loop {
            if self.check(Combinator::Or) {
                break;
            }
            match self.advance() {
                None => break,
                Some(Term::Combinator(Combinator::And)) => {
                    let dangling = operands.is_empty()
                        || matches!(self.terms.peek(), None | Some(Term::Combinator(_)));
                    if dangling {
                        tracing::debug!("AND without an operand ignored");
                    }
                }
                Some(term) => operands.push(compile(term)?),
            }
        }

        Ok(Predicate::fold(Combinator::And, operands))
    }

    fn parse_or(&mut self) -> Result<Option<Predicate>, SyntaxError> {
        let mut operands = vec![];

        loop {
            let operand = self.parse_and()?;
            let more = self.check(Combinator::Or);
            match operand {
                Some(operand) => operands.push(operand),
                None if more || !operands.is_empty() => {
                    tracing::debug!("OR without an operand ignored")
                }
                None => {}
            }

            if !more {
                break;
            }
            self.advance();
        }

        Ok(Predicate::fold(Combinator::Or, operands))
    }

    pub fn parse(&mut self) -> Result<Predicate, SyntaxError> {
        Ok(self.parse_or()?.unwrap_or(Predicate::Always(true)))
    }
}
