//! Numeric helpers shared by the estimator and the validating constructors.

use crate::util::{TrackGateError, TrackGateResult};

/// Converts a variance into an `n_sigma` half-width.
pub(crate) fn sigma_extent(variance: f32, n_sigma: f32) -> f32 {
    variance.sqrt() * n_sigma
}

/// Returns `value` unchanged if it is finite.
pub(crate) fn ensure_finite(field: &'static str, value: f32) -> TrackGateResult<f32> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(TrackGateError::NonFinite { field })
    }
}
