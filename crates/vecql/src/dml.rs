//! INSERT / UPDATE / DELETE statements against vec0 tables
//!
//! Only columns present in the value map are written, so omitting the
//! primary key lets vec0 assign the rowid itself.

use crate::fragment::{quote_identifier, SqlFragment, SqlParam};
use crate::schema::{ColumnDefinition, TableDefinition};
use std::collections::HashMap;
use vecql_core::{codec, Result, Vector, VecqlError};

/// A value written to a column
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
    /// Encoded with the float32 blob codec when bound
    Vector(Vec<f64>),
}

impl Value {
    fn into_param(self) -> SqlParam {
        match self {
            Value::Null => SqlParam::Null,
            Value::Integer(v) => SqlParam::Integer(v),
            Value::Real(v) => SqlParam::Real(v),
            Value::Text(v) => SqlParam::Text(v),
            Value::Blob(v) => SqlParam::Blob(v),
            Value::Vector(v) => SqlParam::Blob(codec::encode(&v)),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Real(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Blob(v)
    }
}

impl From<Vec<f64>> for Value {
    fn from(v: Vec<f64>) -> Self {
        Value::Vector(v)
    }
}

impl From<&Vector> for Value {
    fn from(v: &Vector) -> Self {
        Value::Blob(v.to_blob())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Null)
    }
}

/// Column values keyed by column name; a missing key means "not provided"
pub type Row = HashMap<String, Value>;

/// Build a [`Row`] from `(column, value)` pairs
pub fn row<K, V, I>(pairs: I) -> Row
where
    K: Into<String>,
    V: Into<Value>,
    I: IntoIterator<Item = (K, V)>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

/// Target rows of an UPDATE or DELETE
#[derive(Debug, Clone, PartialEq)]
pub enum Where {
    /// `rowid = ?`
    RowId(i64),
    /// Pre-built condition, used as-is
    Condition(SqlFragment),
}

impl Where {
    fn into_fragment(self) -> SqlFragment {
        match self {
            Where::RowId(id) => SqlFragment::new("rowid = ?", vec![SqlParam::Integer(id)]),
            Where::Condition(fragment) => fragment,
        }
    }
}

impl From<i64> for Where {
    fn from(id: i64) -> Self {
        Where::RowId(id)
    }
}

impl From<i32> for Where {
    fn from(id: i32) -> Self {
        Where::RowId(id as i64)
    }
}

impl From<SqlFragment> for Where {
    fn from(fragment: SqlFragment) -> Self {
        Where::Condition(fragment)
    }
}

/// Table columns present in `values`, in declaration order
fn present_columns<'a>(table: &'a TableDefinition, values: &Row) -> Vec<&'a ColumnDefinition> {
    table
        .columns()
        .iter()
        .filter(|c| values.contains_key(&c.name))
        .collect()
}

fn column_list(columns: &[&ColumnDefinition]) -> String {
    columns
        .iter()
        .map(|c| quote_identifier(&c.name))
        .collect::<Vec<_>>()
        .join(", ")
}

/// `(?, ?, ...)` for one row; columns missing from the row bind NULL
fn value_tuple(columns: &[&ColumnDefinition], values: &Row) -> SqlFragment {
    let mut out = SqlFragment::raw("(");
    for (i, column) in columns.iter().enumerate() {
        if i > 0 {
            out.push_sql(", ");
        }
        let value = values.get(&column.name).cloned().unwrap_or(Value::Null);
        out.push_param(value.into_param());
    }
    out.push_sql(")");
    out
}

/// `INSERT INTO "t" ("a", "b") VALUES (?, ?)`
///
/// Fails with [`VecqlError::NoValuesProvided`] when no table column is present.
pub fn insert(table: &TableDefinition, values: &Row) -> Result<SqlFragment> {
    let columns = present_columns(table, values);
    if columns.is_empty() {
        return Err(VecqlError::NoValuesProvided);
    }

    let mut stmt = SqlFragment::raw(format!(
        "INSERT INTO {} ({}) VALUES ",
        quote_identifier(table.name()),
        column_list(&columns)
    ));
    stmt.append(value_tuple(&columns, values));

    tracing::debug!(
        table = table.name(),
        columns = columns.len(),
        "rendered insert"
    );
    Ok(stmt)
}

/// Multi-row INSERT
///
/// The column set comes from the first row. Later rows are rendered against
/// that set: extra keys are ignored and missing keys bind NULL.
pub fn insert_many(table: &TableDefinition, rows: &[Row]) -> Result<SqlFragment> {
    let first = rows.first().ok_or(VecqlError::NoRowsProvided)?;
    let columns = present_columns(table, first);
    if columns.is_empty() {
        return Err(VecqlError::NoValuesProvided);
    }

    let mut stmt = SqlFragment::raw(format!(
        "INSERT INTO {} ({}) VALUES ",
        quote_identifier(table.name()),
        column_list(&columns)
    ));
    stmt.append(SqlFragment::join(
        rows.iter().map(|r| value_tuple(&columns, r)),
        ", ",
    ));

    tracing::debug!(
        table = table.name(),
        columns = columns.len(),
        rows = rows.len(),
        "rendered batch insert"
    );
    Ok(stmt)
}

/// `UPDATE "t" SET "a" = ?, ... WHERE <condition>`
pub fn update(
    table: &TableDefinition,
    values: &Row,
    condition: impl Into<Where>,
) -> Result<SqlFragment> {
    let columns = present_columns(table, values);
    if columns.is_empty() {
        return Err(VecqlError::NoValuesProvided);
    }

    let assignments = columns.iter().map(|column| {
        let mut set = SqlFragment::raw(format!("{} = ", quote_identifier(&column.name)));
        let value = values.get(&column.name).cloned().unwrap_or(Value::Null);
        set.push_param(value.into_param());
        set
    });

    let mut stmt = SqlFragment::raw(format!("UPDATE {} SET ", quote_identifier(table.name())));
    stmt.append(SqlFragment::join(assignments, ", "));
    stmt.push_sql(" WHERE ");
    stmt.append(condition.into().into_fragment());

    tracing::debug!(
        table = table.name(),
        columns = columns.len(),
        "rendered update"
    );
    Ok(stmt)
}

/// `DELETE FROM "t" WHERE <condition>`
pub fn delete_rows(table: &TableDefinition, condition: impl Into<Where>) -> SqlFragment {
    let mut stmt = SqlFragment::raw(format!(
        "DELETE FROM {} WHERE ",
        quote_identifier(table.name())
    ));
    stmt.append(condition.into().into_fragment());
    stmt
}
