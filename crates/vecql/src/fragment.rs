//! Rendered SQL text paired with its positional parameters

use std::fmt;

/// A value bound to a `?` placeholder
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

/// SQL text plus the parameters for its placeholders, in placeholder order
///
/// Every builder in this crate returns this shape, so expressions, predicates
/// and statements compose the same way. Parameters are bound positionally.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SqlFragment {
    sql: String,
    params: Vec<SqlParam>,
}

impl SqlFragment {
    pub fn new(sql: impl Into<String>, params: Vec<SqlParam>) -> Self {
        Self {
            sql: sql.into(),
            params,
        }
    }

    /// A fragment with no parameters
    ///
    /// The text is used verbatim. Never build it from untrusted input.
    pub fn raw(sql: impl Into<String>) -> Self {
        Self::new(sql, Vec::new())
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn params(&self) -> &[SqlParam] {
        &self.params
    }

    pub fn into_parts(self) -> (String, Vec<SqlParam>) {
        (self.sql, self.params)
    }

    pub(crate) fn push_sql(&mut self, sql: &str) {
        self.sql.push_str(sql);
    }

    pub(crate) fn push_param(&mut self, param: SqlParam) {
        self.sql.push('?');
        self.params.push(param);
    }

    /// Append another fragment's text and parameters
    pub(crate) fn append(&mut self, other: SqlFragment) {
        self.sql.push_str(&other.sql);
        self.params.extend(other.params);
    }

    /// Join fragments with `separator`, keeping parameter order
    pub(crate) fn join(parts: impl IntoIterator<Item = SqlFragment>, separator: &str) -> Self {
        let mut out = SqlFragment::default();
        for (i, part) in parts.into_iter().enumerate() {
            if i > 0 {
                out.push_sql(separator);
            }
            out.append(part);
        }
        out
    }
}

impl fmt::Display for SqlFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sql)
    }
}

/// Quote an identifier for SQLite, doubling embedded quotes
pub fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
