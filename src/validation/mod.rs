// src/validation/mod.rs

//! Checks applied to amplitude pairs as they move through a session.

use crate::core::{AmplitudePair, NORM_TOLERANCE, QubitError, QubitResult};

/// Absolute deviation of `|α|² + |β|²` from 1.
pub fn norm_drift(pair: &AmplitudePair) -> f64 {
    (pair.norm_sqr() - 1.0).abs()
}

/// Checks if the pair is normalized (`|α|² + |β|² ≈ 1`).
///
/// # Arguments
/// * `pair` - The `AmplitudePair` to check.
/// * `tolerance` - Allowed deviation from 1.0. Defaults to [`NORM_TOLERANCE`].
///
/// # Returns
/// * `Ok(())` if normalized within tolerance.
/// * `Err(QubitError::InvalidState)` otherwise.
pub fn check_normalization(pair: &AmplitudePair, tolerance: Option<f64>) -> QubitResult<()> {
    let effective_tolerance = tolerance.unwrap_or(NORM_TOLERANCE);
    let drift = norm_drift(pair);
    if drift > effective_tolerance {
        Err(QubitError::InvalidState {
            reason: format!(
                "normalization failed: |α|² + |β|² = {} (deviation {:.3e} > {})",
                pair.norm_sqr(),
                drift,
                effective_tolerance
            ),
        })
    } else {
        Ok(())
    }
}
