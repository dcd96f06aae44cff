//! Human-readable and JSON rendering of predicate trees.
//!
//! # Features
//!
//! - **Compact output** via [`to_text()`] - one line, nested calls
//! - **Pretty output** via [`to_text_pretty()`] - one node per line, 2-space indentation
//! - **JSON output** via [`to_json()`] / [`to_json_pretty()`] - the serde form of the tree
//!
//! # Examples
//!
//! ```
//! use track_query::build;
//! use track_query::output::{to_text, to_text_pretty};
//!
//! let tree = build("t:help y:1965").unwrap();
//!
//! assert_eq!(to_text(&tree), r#"And(Title~"help", Year=1965)"#);
//! assert_eq!(to_text_pretty(&tree), "And\n  Title~\"help\"\n  Year=1965");
//! ```

use crate::ast::{Predicate, RangeValue};

pub struct TreePrinter {
    pretty: bool,
}

impl TreePrinter {
    pub fn new(pretty: bool) -> Self {
        TreePrinter { pretty }
    }

    pub fn print(&self, predicate: &Predicate) -> String {
        self.print_node(predicate, 0)
    }

    fn print_node(&self, predicate: &Predicate, indent: usize) -> String {
        match predicate {
            Predicate::And(left, right) => self.print_composite("And", left, right, indent),
            Predicate::Or(left, right) => self.print_composite("Or", left, right, indent),
            Predicate::StringMatch { field, substring } => {
                format!("{}~{:?}", field.name(), substring)
            }
            Predicate::NumericMatch { field, range } => {
                let name = field.name();
                match range {
                    RangeValue::Exact(v) => format!("{name}={v}"),
                    RangeValue::AtLeast(lo) => format!("{name}>={lo}"),
                    RangeValue::AtMost(hi) => format!("{name}<={hi}"),
                    RangeValue::Between(lo, hi) => format!("{name}={lo}..{hi}"),
                }
            }
            Predicate::BooleanMatch { field, value } => format!("{}={}", field.name(), value),
            Predicate::TagMembership { included, tag_name } => {
                format!("{}tag({:?})", if *included { '+' } else { '-' }, tag_name)
            }
            Predicate::Always(true) => "TRUE".to_string(),
            Predicate::Always(false) => "FALSE".to_string(),
        }
    }

    fn print_composite(
        &self,
        name: &str,
        left: &Predicate,
        right: &Predicate,
        indent: usize,
    ) -> String {
        if self.pretty {
            format!(
                "{name}\n{}{}\n{}{}",
                self.indent(indent + 1),
                self.print_node(left, indent + 1),
                self.indent(indent + 1),
                self.print_node(right, indent + 1),
            )
        } else {
            format!(
                "{name}({}, {})",
                self.print_node(left, indent),
                self.print_node(right, indent)
            )
        }
    }

    fn indent(&self, level: usize) -> String {
        "  ".repeat(level)
    }
}

/// Render a predicate on a single line
pub fn to_text(predicate: &Predicate) -> String {
    TreePrinter::new(false).print(predicate)
}

/// Render a predicate one node per line
pub fn to_text_pretty(predicate: &Predicate) -> String {
    TreePrinter::new(true).print(predicate)
}

pub fn to_json(predicate: &Predicate) -> Result<String, serde_json::Error> {
    serde_json::to_string(predicate)
}

pub fn to_json_pretty(predicate: &Predicate) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(predicate)
}

impl std::fmt::Display for Predicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&to_text(self))
    }
}
