//! vec0 virtual table definitions and DDL rendering
//!
//! Columns are described with small builders and frozen into a
//! [`TableDefinition`] that renders `CREATE VIRTUAL TABLE ... USING vec0(...)`.
//! Dimensions are passed through untouched: a vec0 table with zero or negative
//! dimensions fails when SQLite executes the DDL, not here.

use crate::expr::ColumnRef;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Column types understood by vec0
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    FloatVector,
    Int8Vector,
    BitVector,
    Integer,
    Text,
    Blob,
}

impl ColumnKind {
    pub fn is_vector(&self) -> bool {
        matches!(
            self,
            ColumnKind::FloatVector | ColumnKind::Int8Vector | ColumnKind::BitVector
        )
    }

    /// Type name used in vec0 DDL
    pub fn type_name(&self) -> &'static str {
        match self {
            ColumnKind::FloatVector => "float",
            ColumnKind::Int8Vector => "int8",
            ColumnKind::BitVector => "bit",
            ColumnKind::Integer => "integer",
            ColumnKind::Text => "text",
            ColumnKind::Blob => "blob",
        }
    }
}

/// Distance metrics vec0 can rank a vector column by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DistanceMetric {
    /// Euclidean distance (vec0 default)
    L2,
    /// Cosine distance
    Cosine,
}

impl fmt::Display for DistanceMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistanceMetric::L2 => write!(f, "L2"),
            DistanceMetric::Cosine => write!(f, "cosine"),
        }
    }
}

/// A finished column of a vec0 table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDefinition {
    pub name: String,
    pub kind: ColumnKind,
    /// Element count for vector kinds, 0 otherwise
    #[serde(default)]
    pub dimensions: i64,
    #[serde(default)]
    pub is_primary_key: bool,
    #[serde(default)]
    pub distance_metric: Option<DistanceMetric>,
}

impl ColumnDefinition {
    pub fn is_vector(&self) -> bool {
        self.kind.is_vector()
    }

    /// Render the column as it appears inside `vec0(...)`
    pub fn render(&self) -> String {
        let mut out = format!("{} {}", self.name, self.kind.type_name());
        if self.kind.is_vector() {
            // zero means "no dimension given" and drops the bracket
            if self.dimensions != 0 {
                out.push_str(&format!("[{}]", self.dimensions));
            }
            if let Some(metric) = self.distance_metric {
                out.push_str(&format!(" distance_metric={}", metric));
            }
        } else if self.kind == ColumnKind::Integer && self.is_primary_key {
            out.push_str(" primary key");
        }
        out
    }
}

/// Builder for a vector column
#[derive(Debug, Clone)]
pub struct VectorColumnBuilder {
    name: String,
    kind: ColumnKind,
    dimensions: i64,
    distance_metric: Option<DistanceMetric>,
}

impl VectorColumnBuilder {
    fn new(name: impl Into<String>, kind: ColumnKind, dimensions: i64) -> Self {
        Self {
            name: name.into(),
            kind,
            dimensions,
            distance_metric: None,
        }
    }

    pub fn distance_metric(mut self, metric: DistanceMetric) -> Self {
        self.distance_metric = Some(metric);
        self
    }

    pub fn build(self) -> ColumnDefinition {
        ColumnDefinition {
            name: self.name,
            kind: self.kind,
            dimensions: self.dimensions,
            is_primary_key: false,
            distance_metric: self.distance_metric,
        }
    }
}

/// Builder for an auxiliary (non-vector) column
#[derive(Debug, Clone)]
pub struct AuxColumnBuilder {
    name: String,
    kind: ColumnKind,
    primary_key: bool,
}

impl AuxColumnBuilder {
    fn new(name: impl Into<String>, kind: ColumnKind) -> Self {
        Self {
            name: name.into(),
            kind,
            primary_key: false,
        }
    }

    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    pub fn build(self) -> ColumnDefinition {
        ColumnDefinition {
            name: self.name,
            kind: self.kind,
            dimensions: 0,
            is_primary_key: self.primary_key,
            distance_metric: None,
        }
    }
}

impl From<VectorColumnBuilder> for ColumnDefinition {
    fn from(builder: VectorColumnBuilder) -> Self {
        builder.build()
    }
}

impl From<AuxColumnBuilder> for ColumnDefinition {
    fn from(builder: AuxColumnBuilder) -> Self {
        builder.build()
    }
}

/// `float[dimensions]` column
pub fn float_vector(name: impl Into<String>, dimensions: i64) -> VectorColumnBuilder {
    VectorColumnBuilder::new(name, ColumnKind::FloatVector, dimensions)
}

/// `int8[dimensions]` column
pub fn int8_vector(name: impl Into<String>, dimensions: i64) -> VectorColumnBuilder {
    VectorColumnBuilder::new(name, ColumnKind::Int8Vector, dimensions)
}

/// `bit[dimensions]` column
pub fn bit_vector(name: impl Into<String>, dimensions: i64) -> VectorColumnBuilder {
    VectorColumnBuilder::new(name, ColumnKind::BitVector, dimensions)
}

pub fn integer(name: impl Into<String>) -> AuxColumnBuilder {
    AuxColumnBuilder::new(name, ColumnKind::Integer)
}

pub fn text(name: impl Into<String>) -> AuxColumnBuilder {
    AuxColumnBuilder::new(name, ColumnKind::Text)
}

pub fn blob(name: impl Into<String>) -> AuxColumnBuilder {
    AuxColumnBuilder::new(name, ColumnKind::Blob)
}

/// An immutable vec0 table definition
///
/// Column order is declaration order. No implicit rowid column is added;
/// vec0 provides `rowid` itself.
///
/// # Example
///
/// ```
/// use vecql::schema::{define_table, float_vector, integer};
///
/// let table = define_table(
///     "items_vec",
///     vec![integer("id").primary_key().build(), float_vector("embedding", 128).build()],
/// );
/// assert_eq!(
///     table.render_create(),
///     "CREATE VIRTUAL TABLE IF NOT EXISTS items_vec USING vec0(id integer primary key, embedding float[128])"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDefinition {
    name: String,
    columns: Vec<ColumnDefinition>,
}

/// Define a table from its ordered columns
///
/// Duplicate names are not rejected here; SQLite reports them when the DDL runs.
pub fn define_table(name: impl Into<String>, columns: Vec<ColumnDefinition>) -> TableDefinition {
    TableDefinition {
        name: name.into(),
        columns,
    }
}

/// Shadow table pairing a relational table with its vector index:
/// `<id_column> integer primary key, <vector_column> float[dimensions]`
pub fn shadow_table(
    name: impl Into<String>,
    id_column: impl Into<String>,
    vector_column: impl Into<String>,
    dimensions: i64,
) -> TableDefinition {
    TableDefinition::builder(name)
        .column(integer(id_column).primary_key())
        .column(float_vector(vector_column, dimensions))
        .build()
}

impl TableDefinition {
    pub fn builder(name: impl Into<String>) -> TableBuilder {
        TableBuilder {
            name: name.into(),
            columns: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn columns(&self) -> &[ColumnDefinition] {
        &self.columns
    }

    /// First column with the given name
    pub fn column(&self, name: &str) -> Option<&ColumnDefinition> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Table-qualified reference to a column, for use in expressions
    pub fn col(&self, name: impl Into<String>) -> ColumnRef {
        ColumnRef::qualified(self.name.clone(), name)
    }

    pub fn render_create(&self) -> String {
        let columns = self
            .columns
            .iter()
            .map(ColumnDefinition::render)
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "CREATE VIRTUAL TABLE IF NOT EXISTS {} USING vec0({})",
            self.name, columns
        );
        tracing::debug!(table = %self.name, columns = self.columns.len(), "rendered vec0 DDL");
        sql
    }

    pub fn render_drop(&self) -> String {
        format!("DROP TABLE IF EXISTS {}", self.name)
    }
}

/// Collects columns in order, then freezes them into a [`TableDefinition`]
#[derive(Debug, Clone)]
pub struct TableBuilder {
    name: String,
    columns: Vec<ColumnDefinition>,
}

impl TableBuilder {
    pub fn column(mut self, column: impl Into<ColumnDefinition>) -> Self {
        self.columns.push(column.into());
        self
    }

    pub fn build(self) -> TableDefinition {
        define_table(self.name, self.columns)
    }
}
