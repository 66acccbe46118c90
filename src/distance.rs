//! This is the distance math module
//! Provide Euclidean (L2) distance between two vectors

use crate::error::{Result, StoreError};

/// Euclidean Distance
/// dist = sqrt(sum((a[i] - b[i])^2)) for i = 0..a.len()
/// Can only process vectors with same dimensions.
/// NaN or infinite components propagate per IEEE-754; that is accepted
/// behavior, not checked here.
pub fn euclidean(a: &[f64], b: &[f64]) -> Result<f64> {
    if a.len() != b.len() {
        return Err(StoreError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }

    let sum_sq: f64 = a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum();

    Ok(sum_sq.sqrt())
}
