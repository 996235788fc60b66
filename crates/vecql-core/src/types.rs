//! Vector value type

use crate::codec;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// A vector embedding
///
/// Holds the values at the precision the extension stores them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    data: Vec<f32>,
}

impl Vector {
    pub fn new(data: Vec<f32>) -> Self {
        Self { data }
    }

    /// Build from wide values, narrowing each to `f32`
    pub fn from_f64(values: &[f64]) -> Self {
        Self::new(values.iter().map(|v| *v as f32).collect())
    }

    /// Serialize to the blob layout sqlite-vec expects
    pub fn to_blob(&self) -> Vec<u8> {
        codec::encode_f32(&self.data)
    }

    /// Deserialize from a blob
    ///
    /// Fails unless the blob length is a multiple of 4.
    pub fn from_blob(blob: &[u8]) -> Result<Self> {
        Ok(Self::from_f64(&codec::decode_exact(blob)?))
    }

    /// JSON array text, accepted by `vec_f32()`
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.data)?)
    }

    pub fn dimension(&self) -> usize {
        self.data.len()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Widened copy of the values
    pub fn to_f64(&self) -> Vec<f64> {
        self.data.iter().map(|v| *v as f64).collect()
    }
}

impl From<Vec<f32>> for Vector {
    fn from(data: Vec<f32>) -> Self {
        Self::new(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_blob_roundtrip() {
        let original = Vector::new(vec![0.1, 0.2, 0.3, 0.4]);
        let blob = original.to_blob();
        assert_eq!(blob.len(), 16);
        let decoded = Vector::from_blob(&blob).unwrap();
        assert_eq!(original, decoded);
        assert_eq!(decoded.dimension(), 4);
    }

    #[test]
    fn test_vector_json() {
        let vector = Vector::new(vec![1.0, 2.0, 3.0]);
        assert_eq!(vector.to_json().unwrap(), "[1.0,2.0,3.0]");
    }

    #[test]
    fn test_invalid_blob() {
        assert!(Vector::from_blob(&[0u8, 1, 2]).is_err());
    }

    #[test]
    fn test_from_f64_narrows() {
        let v = Vector::from_f64(&[0.5, 1e300]);
        assert_eq!(v.as_slice()[0], 0.5);
        assert_eq!(v.as_slice()[1], f32::INFINITY);
        assert_eq!(v.to_f64()[0], 0.5);
    }
}
