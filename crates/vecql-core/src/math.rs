//! Pure numeric helpers for vectors held in application memory
//!
//! None of these are used when rendering SQL. Distances computed by the
//! extension inside a query follow the extension's own rules.

use crate::error::{Result, VecqlError};
use rand::Rng;

fn check_dimensions(a: &[f64], b: &[f64]) -> Result<()> {
    if a.len() != b.len() {
        return Err(VecqlError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }
    Ok(())
}

/// Dot product of two equal-length vectors
pub fn dot_product(a: &[f64], b: &[f64]) -> Result<f64> {
    check_dimensions(a, b)?;
    Ok(a.iter().zip(b).map(|(x, y)| x * y).sum())
}

/// Euclidean norm
pub fn magnitude(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Euclidean (L2) distance
pub fn l2_distance(a: &[f64], b: &[f64]) -> Result<f64> {
    check_dimensions(a, b)?;
    Ok(a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt())
}

/// Cosine similarity in `[-1, 1]`
///
/// Returns 0.0 when either vector has zero magnitude.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> Result<f64> {
    let dot = dot_product(a, b)?;
    let denom = magnitude(a) * magnitude(b);
    if denom == 0.0 {
        return Ok(0.0);
    }
    Ok(dot / denom)
}

/// Cosine distance, `1 - cosine_similarity`
pub fn cosine_distance(a: &[f64], b: &[f64]) -> Result<f64> {
    Ok(1.0 - cosine_similarity(a, b)?)
}

/// Scale a vector to unit length. A zero vector is returned unchanged.
pub fn normalize(v: &[f64]) -> Vec<f64> {
    let mag = magnitude(v);
    if mag == 0.0 {
        return v.to_vec();
    }
    v.iter().map(|x| x / mag).collect()
}

/// Bind `values` to a declared dimensionality
pub fn fixed_vector(dimensions: usize, values: Vec<f64>) -> Result<Vec<f64>> {
    if values.len() != dimensions {
        return Err(VecqlError::DimensionMismatch {
            expected: dimensions,
            actual: values.len(),
        });
    }
    Ok(values)
}

pub fn zeros(dimensions: usize) -> Vec<f64> {
    vec![0.0; dimensions]
}

/// Random vector with components drawn uniformly from `[-1, 1)`
pub fn random_vector<R: Rng + ?Sized>(dimensions: usize, rng: &mut R) -> Vec<f64> {
    (0..dimensions).map(|_| rng.gen_range(-1.0..1.0)).collect()
}

/// Reject NaN and infinite components
///
/// The codec accepts every float; call this first when the application wants
/// finite data only.
pub fn validate_finite(values: &[f64]) -> Result<()> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(VecqlError::NonFiniteValue { index }),
        None => Ok(()),
    }
}
