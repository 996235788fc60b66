//! Vector blob codec
//!
//! sqlite-vec stores float vectors as a headerless sequence of little-endian
//! IEEE-754 float32 values. The element count is `byte_len / 4`.

use crate::error::{Result, VecqlError};

/// Width of one encoded element in bytes
pub const ELEMENT_SIZE: usize = 4;

/// Encode a vector as a little-endian float32 blob
///
/// Each value is narrowed to `f32` with IEEE-754 rounding. Values beyond the
/// `f32` range become `±inf`; NaN and infinities are written as-is.
pub fn encode(values: &[f64]) -> Vec<u8> {
    values
        .iter()
        .flat_map(|v| (*v as f32).to_le_bytes())
        .collect()
}

/// Encode an `f32` vector without narrowing
pub fn encode_f32(values: &[f32]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

/// Decode a float32 blob into widened `f64` values
///
/// Trailing bytes that do not fill a whole element are ignored, so the result
/// always has `bytes.len() / 4` elements. Use [`decode_exact`] to reject them.
pub fn decode(bytes: &[u8]) -> Vec<f64> {
    bytes
        .chunks_exact(ELEMENT_SIZE)
        .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]) as f64)
        .collect()
}

/// Decode a float32 blob, failing when its length is not a multiple of 4
pub fn decode_exact(bytes: &[u8]) -> Result<Vec<f64>> {
    if bytes.len() % ELEMENT_SIZE != 0 {
        return Err(VecqlError::Serialization(format!(
            "Invalid blob length {} for f32 vector (must be multiple of {})",
            bytes.len(),
            ELEMENT_SIZE
        )));
    }
    Ok(decode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_roundtrip() {
        assert!(encode(&[]).is_empty());
        assert!(decode(&[]).is_empty());
    }

    #[test]
    fn test_byte_layout() {
        let blob = encode(&[1.0, -2.0]);
        assert_eq!(blob, vec![0x00, 0x00, 0x80, 0x3f, 0x00, 0x00, 0x00, 0xc0]);
    }

    #[test]
    fn test_unit_vector_roundtrip() {
        let blob = encode(&[1.0, 0.0, 0.0, 0.0]);
        assert_eq!(blob.len(), 16);
        assert_eq!(decode(&blob), vec![1.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_nan_survives() {
        let decoded = decode(&encode(&[1.0, f64::NAN, 3.0]));
        assert_eq!(decoded[0], 1.0);
        assert!(decoded[1].is_nan());
        assert_eq!(decoded[2], 3.0);
    }

    #[test]
    fn test_infinities_keep_sign() {
        let decoded = decode(&encode(&[f64::INFINITY, f64::NEG_INFINITY]));
        assert_eq!(decoded, vec![f64::INFINITY, f64::NEG_INFINITY]);
    }

    #[test]
    fn test_overflow_becomes_infinity() {
        let decoded = decode(&encode(&[1e300, -1e300]));
        assert_eq!(decoded, vec![f64::INFINITY, f64::NEG_INFINITY]);
    }

    #[test]
    fn test_negative_zero_keeps_sign() {
        let decoded = decode(&encode(&[-0.0]));
        assert_eq!(decoded[0], 0.0);
        assert!(decoded[0].is_sign_negative());
    }

    #[test]
    fn test_decode_truncates_partial_element() {
        let mut blob = encode(&[0.5, 0.25]);
        blob.extend_from_slice(&[0xff, 0xff, 0xff]);
        assert_eq!(decode(&blob), vec![0.5, 0.25]);
    }

    #[test]
    fn test_decode_exact_rejects_partial_element() {
        assert!(decode_exact(&[0u8, 1, 2]).is_err());
        assert_eq!(decode_exact(&encode(&[0.5])).unwrap(), vec![0.5]);
    }

    #[test]
    fn test_encode_f32_matches_encode() {
        let values = [0.1f32, -7.5, 1024.0];
        let widened: Vec<f64> = values.iter().map(|v| *v as f64).collect();
        assert_eq!(encode_f32(&values), encode(&widened));
    }

    proptest! {
        #[test]
        fn prop_finite_roundtrip_within_f32_precision(
            values in proptest::collection::vec(-1.0e30f64..1.0e30f64, 0..64)
        ) {
            let decoded = decode(&encode(&values));
            prop_assert_eq!(decoded.len(), values.len());
            for (original, back) in values.iter().zip(decoded.iter()) {
                prop_assert_eq!(*back, (*original as f32) as f64);
                let tolerance = original.abs() * f32::EPSILON as f64;
                prop_assert!((original - back).abs() <= tolerance.max(f32::MIN_POSITIVE as f64));
            }
        }

        #[test]
        fn prop_f32_values_roundtrip_exactly(
            values in proptest::collection::vec(
                proptest::num::f32::NORMAL | proptest::num::f32::ZERO,
                0..64,
            )
        ) {
            let widened: Vec<f64> = values.iter().map(|v| *v as f64).collect();
            prop_assert_eq!(decode(&encode(&widened)), widened);
        }
    }
}
