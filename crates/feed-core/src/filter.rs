//! List query construction.
//!
//! Both services build their list queries the same way: a fixed base
//! `SELECT`, an optional `IN (...)` clause over an ID column whose values are
//! bound as parameters, and an optional `ORDER BY` over an allow-listed
//! column.

use serde::{Deserialize, Serialize};

/// Sort direction for list requests.
///
/// On the wire this accepts either the numeric code (`0` = ascending,
/// `1` = descending) or the name (`"ASC"` / `"DESC"`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SortOrderWire", rename_all = "UPPERCASE")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SortOrderWire {
    Code(i64),
    Name(String),
}

impl TryFrom<SortOrderWire> for SortOrder {
    type Error = String;

    fn try_from(wire: SortOrderWire) -> Result<Self, Self::Error> {
        match wire {
            SortOrderWire::Code(0) => Ok(Self::Asc),
            SortOrderWire::Code(1) => Ok(Self::Desc),
            SortOrderWire::Code(other) => Err(format!("unknown sort order code: {other}")),
            SortOrderWire::Name(name) => match name.to_ascii_uppercase().as_str() {
                "ASC" => Ok(Self::Asc),
                "DESC" => Ok(Self::Desc),
                _ => Err(format!("unknown sort order: {name}")),
            },
        }
    }
}

/// Builder for a filtered list query.
///
/// ```
/// use feed_core::{ListQuery, SortOrder};
///
/// let (sql, args) = ListQuery::new("SELECT id, name FROM races")
///     .with_ids("meeting_id", &[4, 7])
///     .with_sort("name", &["name"], SortOrder::Desc)
///     .build();
///
/// assert_eq!(
///     sql,
///     "SELECT id, name FROM races WHERE meeting_id IN (?,?) ORDER BY name DESC"
/// );
/// assert_eq!(args, vec![4, 7]);
/// ```
#[derive(Debug, Clone)]
pub struct ListQuery {
    base: String,
    clauses: Vec<String>,
    args: Vec<i64>,
    order_by: Option<String>,
}

impl ListQuery {
    /// Start from a base `SELECT` (whitespace is collapsed to single spaces).
    pub fn new(base: &str) -> Self {
        Self {
            base: normalize_sql(base),
            clauses: Vec::new(),
            args: Vec::new(),
            order_by: None,
        }
    }

    /// Restrict `column` to the given IDs. An empty slice adds nothing.
    pub fn with_ids(mut self, column: &str, ids: &[i64]) -> Self {
        if ids.is_empty() {
            return self;
        }

        let placeholders = vec!["?"; ids.len()].join(",");
        self.clauses.push(format!("{column} IN ({placeholders})"));
        self.args.extend_from_slice(ids);
        self
    }

    /// Sort by `requested` if it is one of `allowed`.
    ///
    /// Empty or unknown fields leave the query unsorted.
    pub fn with_sort(mut self, requested: &str, allowed: &[&str], order: SortOrder) -> Self {
        if requested.is_empty() {
            return self;
        }

        if !allowed.contains(&requested) {
            tracing::debug!(sort_by = requested, "Ignoring unknown sort field");
            return self;
        }

        let mut order_by = format!(" ORDER BY {requested}");
        // ascending is the SQL default
        if order == SortOrder::Desc {
            order_by.push_str(" DESC");
        }
        self.order_by = Some(order_by);
        self
    }

    /// Produce the final SQL and its positional arguments.
    pub fn build(self) -> (String, Vec<i64>) {
        let mut query = self.base;

        if !self.clauses.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&self.clauses.join(" AND "));
        }

        if let Some(order_by) = self.order_by {
            query.push_str(&order_by);
        }

        (query, self.args)
    }
}

/// Collapse runs of whitespace (including newlines) to single spaces.
pub fn normalize_sql(sql: &str) -> String {
    sql.split_whitespace().collect::<Vec<_>>().join(" ")
}
