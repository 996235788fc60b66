//! sqlite-vec function and predicate builders
//!
//! Every operand is a [`VecExpr`]. Literal vectors are encoded and bound as a
//! single blob parameter, column references render as quoted identifiers with
//! no parameters, and nested fragments are spliced in with their own
//! parameters. Parameters always follow placeholder order.

use crate::fragment::{quote_identifier, SqlFragment, SqlParam};
use serde::{Deserialize, Serialize};
use vecql_core::{codec, Vector};

/// Reference to a column, optionally qualified by its table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnRef {
    pub table: Option<String>,
    pub column: String,
}

impl ColumnRef {
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            table: None,
            column: column.into(),
        }
    }

    pub fn qualified(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            table: Some(table.into()),
            column: column.into(),
        }
    }

    /// Quoted identifier text, e.g. `"items"."embedding"`
    pub fn render(&self) -> String {
        match &self.table {
            Some(table) => format!(
                "{}.{}",
                quote_identifier(table),
                quote_identifier(&self.column)
            ),
            None => quote_identifier(&self.column),
        }
    }
}

impl From<&str> for ColumnRef {
    fn from(column: &str) -> Self {
        Self::new(column)
    }
}

impl From<String> for ColumnRef {
    fn from(column: String) -> Self {
        Self::new(column)
    }
}

impl From<&ColumnRef> for ColumnRef {
    fn from(column: &ColumnRef) -> Self {
        column.clone()
    }
}

/// Operand of a vector function
#[derive(Debug, Clone, PartialEq)]
pub enum VecExpr {
    /// Vector value, bound as an encoded blob
    Literal(Vec<f64>),
    /// Column holding vectors
    Column(ColumnRef),
    /// Previously built fragment, e.g. the result of [`normalize`]
    Nested(SqlFragment),
}

impl VecExpr {
    /// Lower the operand into SQL text and parameters
    pub fn into_fragment(self) -> SqlFragment {
        match self {
            VecExpr::Literal(values) => literal_fragment(&values),
            VecExpr::Column(column) => SqlFragment::raw(column.render()),
            VecExpr::Nested(fragment) => fragment,
        }
    }
}

fn literal_fragment(values: &[f64]) -> SqlFragment {
    SqlFragment::new("?", vec![SqlParam::Blob(codec::encode(values))])
}

impl From<Vec<f64>> for VecExpr {
    fn from(values: Vec<f64>) -> Self {
        VecExpr::Literal(values)
    }
}

impl From<&[f64]> for VecExpr {
    fn from(values: &[f64]) -> Self {
        VecExpr::Literal(values.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for VecExpr {
    fn from(values: [f64; N]) -> Self {
        VecExpr::Literal(values.to_vec())
    }
}

impl From<&Vector> for VecExpr {
    fn from(vector: &Vector) -> Self {
        VecExpr::Literal(vector.to_f64())
    }
}

impl From<ColumnRef> for VecExpr {
    fn from(column: ColumnRef) -> Self {
        VecExpr::Column(column)
    }
}

impl From<&ColumnRef> for VecExpr {
    fn from(column: &ColumnRef) -> Self {
        VecExpr::Column(column.clone())
    }
}

impl From<SqlFragment> for VecExpr {
    fn from(fragment: SqlFragment) -> Self {
        VecExpr::Nested(fragment)
    }
}

/// `name(arg, arg, ...)`
fn call(name: &str, args: Vec<SqlFragment>) -> SqlFragment {
    let mut out = SqlFragment::raw(format!("{}(", name));
    out.append(SqlFragment::join(args, ", "));
    out.push_sql(")");
    out
}

fn unary(name: &str, v: impl Into<VecExpr>) -> SqlFragment {
    call(name, vec![v.into().into_fragment()])
}

fn binary(name: &str, a: impl Into<VecExpr>, b: impl Into<VecExpr>) -> SqlFragment {
    call(name, vec![a.into().into_fragment(), b.into().into_fragment()])
}

/// `vec_distance_L2(a, b)`
pub fn distance_l2(a: impl Into<VecExpr>, b: impl Into<VecExpr>) -> SqlFragment {
    binary("vec_distance_L2", a, b)
}

/// `vec_distance_cosine(a, b)`
pub fn distance_cosine(a: impl Into<VecExpr>, b: impl Into<VecExpr>) -> SqlFragment {
    binary("vec_distance_cosine", a, b)
}

/// `vec_distance_hamming(a, b)`, for bit vectors
pub fn distance_hamming(a: impl Into<VecExpr>, b: impl Into<VecExpr>) -> SqlFragment {
    binary("vec_distance_hamming", a, b)
}

/// `vec_length(v)`: number of elements
pub fn length(v: impl Into<VecExpr>) -> SqlFragment {
    unary("vec_length", v)
}

pub fn normalize(v: impl Into<VecExpr>) -> SqlFragment {
    unary("vec_normalize", v)
}

pub fn add(a: impl Into<VecExpr>, b: impl Into<VecExpr>) -> SqlFragment {
    binary("vec_add", a, b)
}

pub fn subtract(a: impl Into<VecExpr>, b: impl Into<VecExpr>) -> SqlFragment {
    binary("vec_sub", a, b)
}

/// `vec_slice(v, start, end)`; bounds are bound after the operand's parameters
pub fn slice(v: impl Into<VecExpr>, start: i64, end: i64) -> SqlFragment {
    let mut start_param = SqlFragment::default();
    start_param.push_param(SqlParam::Integer(start));
    let mut end_param = SqlFragment::default();
    end_param.push_param(SqlParam::Integer(end));
    call(
        "vec_slice",
        vec![v.into().into_fragment(), start_param, end_param],
    )
}

pub fn to_json(v: impl Into<VecExpr>) -> SqlFragment {
    unary("vec_to_json", v)
}

/// `vec_f32(v)`: coerce an operand to a float32 vector
pub fn to_f32(v: impl Into<VecExpr>) -> SqlFragment {
    unary("vec_f32", v)
}

pub fn quantize_int8(v: impl Into<VecExpr>) -> SqlFragment {
    unary("vec_quantize_i8", v)
}

pub fn quantize_binary(v: impl Into<VecExpr>) -> SqlFragment {
    unary("vec_quantize_binary", v)
}

/// `vec_f32(?)` with the JSON array text bound as a parameter
pub fn from_json(json: impl Into<String>) -> SqlFragment {
    let mut out = SqlFragment::raw("vec_f32(");
    out.push_param(SqlParam::Text(json.into()));
    out.push_sql(")");
    out
}

/// KNN predicate: `<column> MATCH ? AND k = ?`
///
/// Binds the encoded query vector, then `k`. vec0 needs `k` as a comparison
/// inside the same WHERE clause; a `LIMIT` is not a substitute.
pub fn match_condition(column: impl Into<ColumnRef>, query: &[f64], k: usize) -> SqlFragment {
    let column = column.into();
    let mut out = SqlFragment::raw(format!("{} MATCH ", column.render()));
    out.push_param(SqlParam::Blob(codec::encode(query)));
    out.push_sql(" AND k = ");
    out.push_param(SqlParam::Integer(k as i64));
    out
}
