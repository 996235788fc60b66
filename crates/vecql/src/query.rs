//! KNN query builder for vec0 tables

use crate::expr::{match_condition, ColumnRef};
use crate::fragment::{quote_identifier, SqlFragment};
use crate::schema::TableDefinition;
use serde::{Deserialize, Serialize};

/// k-nearest-neighbour query against a vec0 table
///
/// Renders
/// `SELECT rowid, distance[, extra] FROM "t" WHERE "col" MATCH ? AND k = ? ORDER BY distance`.
///
/// # Example
///
/// ```
/// use vecql::query::KnnQuery;
/// use vecql::schema::shadow_table;
///
/// let table = shadow_table("items_vec", "id", "embedding", 4);
/// let query = KnnQuery::new(&table, "embedding", &[1.0, 0.0, 0.0, 0.0], 3).build();
/// assert_eq!(query.params().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct KnnQuery {
    table: String,
    column: String,
    query: Vec<f64>,
    k: usize,
    select: Vec<String>,
    order_by_distance: bool,
}

impl KnnQuery {
    pub fn new(
        table: &TableDefinition,
        column: impl Into<String>,
        query: &[f64],
        k: usize,
    ) -> Self {
        Self {
            table: table.name().to_string(),
            column: column.into(),
            query: query.to_vec(),
            k,
            select: Vec::new(),
            order_by_distance: true,
        }
    }

    /// Also return `column` (e.g. an auxiliary primary key)
    pub fn select(mut self, column: impl Into<String>) -> Self {
        self.select.push(column.into());
        self
    }

    /// Default is true
    pub fn order_by_distance(mut self, enabled: bool) -> Self {
        self.order_by_distance = enabled;
        self
    }

    pub fn build(self) -> SqlFragment {
        let mut columns = vec!["rowid".to_string(), "distance".to_string()];
        columns.extend(self.select.iter().map(|c| quote_identifier(c)));

        let mut stmt = SqlFragment::raw(format!(
            "SELECT {} FROM {} WHERE ",
            columns.join(", "),
            quote_identifier(&self.table)
        ));
        stmt.append(match_condition(
            ColumnRef::new(self.column),
            &self.query,
            self.k,
        ));
        if self.order_by_distance {
            stmt.push_sql(" ORDER BY distance");
        }
        stmt
    }
}

/// One row of a KNN result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub rowid: i64,
    /// `None` when the extension returns NULL, e.g. cosine against a
    /// vector whose norm is undefined
    pub distance: Option<f64>,
}

impl SearchResult {
    pub fn new(rowid: i64, distance: Option<f64>) -> Self {
        Self { rowid, distance }
    }
}
