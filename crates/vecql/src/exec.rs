//! Running generated statements on a rusqlite connection

use crate::fragment::{SqlFragment, SqlParam};
use crate::query::SearchResult;
use rusqlite::types::{ToSqlOutput, ValueRef};
use rusqlite::{params_from_iter, Connection, Row, ToSql};
use vecql_core::{Result, VecqlError};

impl ToSql for SqlParam {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            SqlParam::Null => ToSqlOutput::Borrowed(ValueRef::Null),
            SqlParam::Integer(v) => ToSqlOutput::Borrowed(ValueRef::Integer(*v)),
            SqlParam::Real(v) => ToSqlOutput::Borrowed(ValueRef::Real(*v)),
            SqlParam::Text(v) => ToSqlOutput::Borrowed(ValueRef::Text(v.as_bytes())),
            SqlParam::Blob(v) => ToSqlOutput::Borrowed(ValueRef::Blob(v)),
        })
    }
}

fn map_rusqlite(e: rusqlite::Error) -> VecqlError {
    VecqlError::Database(e.to_string())
}

impl SqlFragment {
    /// Execute as a statement, returning the number of changed rows
    pub fn execute(&self, conn: &Connection) -> Result<usize> {
        conn.execute(self.sql(), params_from_iter(self.params().iter()))
            .map_err(map_rusqlite)
    }

    /// Run as a query and map each row
    pub fn query_map<T, F>(&self, conn: &Connection, mut f: F) -> Result<Vec<T>>
    where
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        let mut stmt = conn.prepare(self.sql()).map_err(map_rusqlite)?;
        let rows = stmt
            .query_map(params_from_iter(self.params().iter()), |row| f(row))
            .map_err(map_rusqlite)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(map_rusqlite)?;
        Ok(rows)
    }

    /// Run a KNN query whose first two columns are `rowid, distance`
    pub fn query_knn(&self, conn: &Connection) -> Result<Vec<SearchResult>> {
        self.query_map(conn, |row| Ok(SearchResult::new(row.get(0)?, row.get(1)?)))
    }
}
