//! Rendering of predicate trees as SQL `WHERE` fragments.
//!
//! Values are never interpolated; every user-supplied string or number
//! becomes a positional `?` parameter.
//!
//! ```
//! use track_query::{build, sql::{SqlParam, to_sql}};
//!
//! let fragment = to_sql(&build("y:1987-").unwrap());
//! assert_eq!(fragment.sql, "(track.year IS NOT NULL AND track.year >= ?)");
//! assert_eq!(fragment.params, vec![SqlParam::Integer(1987)]);
//! ```

use serde::Serialize;

use crate::{
    adapter::{FilterBackend, translate},
    ast::{BooleanField, NumericField, Predicate, RangeValue, StringField},
};

/// Table and column names the rendered SQL refers to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SqlSchema {
    pub track_table: String,
    pub track_id: String,
    pub title_column: String,
    pub year_column: String,
    pub duration_column: String,
    pub bitrate_column: String,
    pub explicit_column: String,
    pub album: Relation,
    pub artist: Relation,
    pub tag: Relation,
}

/// A many-to-many relation reached through a join table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Relation {
    pub table: String,
    pub id_column: String,
    pub name_column: String,
    pub join_table: String,
    pub join_track_column: String,
    pub join_related_column: String,
}

impl Relation {
    fn conventional(table: &str) -> Self {
        Relation {
            table: table.to_string(),
            id_column: "id".to_string(),
            name_column: "name".to_string(),
            join_table: format!("track_{table}"),
            join_track_column: "track_id".to_string(),
            join_related_column: format!("{table}_id"),
        }
    }
}

impl Default for SqlSchema {
    fn default() -> Self {
        SqlSchema {
            track_table: "track".to_string(),
            track_id: "id".to_string(),
            title_column: "title".to_string(),
            year_column: "year".to_string(),
            duration_column: "duration".to_string(),
            bitrate_column: "bitrate".to_string(),
            explicit_column: "explicit".to_string(),
            album: Relation::conventional("album"),
            artist: Relation::conventional("artist"),
            tag: Relation::conventional("tag"),
        }
    }
}

/// A bound parameter value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SqlParam {
    Text(String),
    Integer(i64),
    Boolean(bool),
}

/// A `WHERE` clause body and its parameters, in placeholder order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SqlFragment {
    pub sql: String,
    pub params: Vec<SqlParam>,
}

/// Render with the default schema.
pub fn to_sql(predicate: &Predicate) -> SqlFragment {
    SqlBackend::new(SqlSchema::default()).render(predicate)
}

pub struct SqlBackend {
    schema: SqlSchema,
}

impl SqlBackend {
    pub fn new(schema: SqlSchema) -> Self {
        SqlBackend { schema }
    }

    pub fn render(&mut self, predicate: &Predicate) -> SqlFragment {
        translate(predicate, self)
    }

    fn track_column(&self, column: &str) -> String {
        format!("{}.{}", self.schema.track_table, column)
    }

    fn numeric_column(&self, field: NumericField) -> String {
        let column = match field {
            NumericField::Year => &self.schema.year_column,
            NumericField::Duration => &self.schema.duration_column,
            NumericField::Bitrate => &self.schema.bitrate_column,
        };
        self.track_column(column)
    }

    /// `track.id [NOT] IN (SELECT j.track_id FROM join j JOIN rel r ON ... WHERE <condition>)`
    fn related(&self, relation: &Relation, negated: bool, condition: &str) -> String {
        format!(
            "{track_id} {not}IN (SELECT {join}.{join_track} FROM {join} \
             JOIN {rel} ON {rel}.{rel_id} = {join}.{join_rel} WHERE {condition})",
            track_id = self.track_column(&self.schema.track_id),
            not = if negated { "NOT " } else { "" },
            join = relation.join_table,
            join_track = relation.join_track_column,
            rel = relation.table,
            rel_id = relation.id_column,
            join_rel = relation.join_related_column,
        )
    }
}

fn like_pattern(substring: &str) -> String {
    let mut pattern = String::with_capacity(substring.len() + 2);
    pattern.push('%');
    for ch in substring.to_lowercase().chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

impl FilterBackend for SqlBackend {
    type Filter = SqlFragment;

    fn constant(&mut self, value: bool) -> SqlFragment {
        SqlFragment {
            sql: if value { "1 = 1" } else { "1 = 0" }.to_string(),
            params: vec![],
        }
    }

    fn string_match(&mut self, field: StringField, substring: &str) -> SqlFragment {
        let params = vec![SqlParam::Text(like_pattern(substring))];
        let sql = match field {
            StringField::Title => format!(
                "LOWER({}) LIKE ? ESCAPE '\\'",
                self.track_column(&self.schema.title_column)
            ),
            StringField::Album | StringField::Artist => {
                let relation = if field == StringField::Album {
                    &self.schema.album
                } else {
                    &self.schema.artist
                };
                let condition = format!(
                    "LOWER({}.{}) LIKE ? ESCAPE '\\'",
                    relation.table, relation.name_column
                );
                self.related(relation, false, &condition)
            }
        };
        SqlFragment { sql, params }
    }

    fn numeric_match(&mut self, field: NumericField, range: RangeValue) -> SqlFragment {
        let column = self.numeric_column(field);
        let (sql, params) = match range {
            RangeValue::Exact(v) => (format!("{column} = ?"), vec![v]),
            RangeValue::AtLeast(lo) => {
                (format!("({column} IS NOT NULL AND {column} >= ?)"), vec![lo])
            }
            RangeValue::AtMost(hi) => {
                (format!("({column} IS NOT NULL AND {column} <= ?)"), vec![hi])
            }
            RangeValue::Between(lo, hi) => (
                format!("({column} IS NOT NULL AND {column} >= ? AND {column} <= ?)"),
                vec![lo, hi],
            ),
        };
        SqlFragment {
            sql,
            params: params
                .into_iter()
                .map(|n| SqlParam::Integer(i64::from(n)))
                .collect(),
        }
    }

    fn boolean_match(&mut self, field: BooleanField, value: bool) -> SqlFragment {
        let column = match field {
            BooleanField::Explicit => self.track_column(&self.schema.explicit_column),
        };
        SqlFragment {
            sql: format!("{column} = ?"),
            params: vec![SqlParam::Boolean(value)],
        }
    }

    fn tag_membership(&mut self, included: bool, tag_name: &str) -> SqlFragment {
        let relation = &self.schema.tag;
        let condition = format!("LOWER({}.{}) = ?", relation.table, relation.name_column);
        SqlFragment {
            sql: self.related(relation, !included, &condition),
            params: vec![SqlParam::Text(tag_name.to_lowercase())],
        }
    }

    fn and(&mut self, left: SqlFragment, right: SqlFragment) -> SqlFragment {
        join(left, "AND", right)
    }

    fn or(&mut self, left: SqlFragment, right: SqlFragment) -> SqlFragment {
        join(left, "OR", right)
    }
}

fn join(left: SqlFragment, keyword: &str, right: SqlFragment) -> SqlFragment {
    let mut params = left.params;
    params.extend(right.params);
    SqlFragment {
        sql: format!("({} {keyword} {})", left.sql, right.sql),
        params,
    }
}
