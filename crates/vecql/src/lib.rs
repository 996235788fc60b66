//! Typed schema and query builders for sqlite-vec
//!
//! This crate renders SQL for the [sqlite-vec](https://github.com/asg017/sqlite-vec)
//! `vec0` virtual table module:
//!
//! - Schema: `CREATE VIRTUAL TABLE ... USING vec0(...)` from typed column builders
//! - Expressions: `vec_distance_L2`, `vec_normalize` and friends, plus the
//!   `MATCH ? AND k = ?` KNN predicate
//! - DML: INSERT / batch INSERT / UPDATE / DELETE with vectors encoded as blobs
//! - Exec: binding the rendered parameters on a rusqlite connection
//!
//! Every builder returns a [`SqlFragment`]: SQL text plus positional parameters.
//!
//! # Example
//!
//! ```no_run
//! use rusqlite::Connection;
//! use vecql::{dml, schema, KnnQuery, VecConnectionExt};
//! use vecql_core::ExtensionConfig;
//!
//! # fn example() -> vecql_core::Result<()> {
//! let conn = Connection::open_in_memory().map_err(|e| vecql_core::VecqlError::Database(e.to_string()))?;
//! conn.load_vec_extension(&ExtensionConfig::default())?;
//!
//! let table = schema::shadow_table("items_vec", "id", "embedding", 4);
//! conn.execute_batch(&table.render_create())
//!     .map_err(|e| vecql_core::VecqlError::Database(e.to_string()))?;
//!
//! dml::insert(&table, &dml::row([("embedding", vec![1.0, 0.0, 0.0, 0.0])]))?.execute(&conn)?;
//!
//! let results = KnnQuery::new(&table, "embedding", &[1.0, 0.0, 0.0, 0.0], 3)
//!     .build()
//!     .query_knn(&conn)?;
//! # Ok(())
//! # }
//! ```

pub mod dml;
pub mod exec;
pub mod expr;
pub mod extension;
pub mod fragment;
pub mod query;
pub mod schema;

pub use dml::{delete_rows, insert, insert_many, row, update, Row, Value, Where};
pub use expr::{match_condition, ColumnRef, VecExpr};
pub use extension::{load_vec_extension, VecConnectionExt};
pub use fragment::{quote_identifier, SqlFragment, SqlParam};
pub use query::{KnnQuery, SearchResult};
pub use schema::{
    define_table, shadow_table, ColumnDefinition, ColumnKind, DistanceMetric, TableDefinition,
};
