//! Trajectory predictions on a detector surface.
//!
//! A prediction is produced upstream by propagating a track state onto the
//! surface of interest. The estimator only reads it.

use crate::geometry::{LocalPoint, Point3};
use crate::util::math::ensure_finite;
use crate::util::{TrackGateError, TrackGateResult};

/// Positional variances along the two local surface axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LocalError {
    /// Variance along local x.
    pub xx: f32,
    /// Variance along local y.
    pub yy: f32,
}

impl LocalError {
    pub const fn new(xx: f32, yy: f32) -> Self {
        Self { xx, yy }
    }

    /// Builds an error from variances, rejecting NaN and negative values.
    pub fn try_new(xx: f32, yy: f32) -> TrackGateResult<Self> {
        for (field, value) in [("local_error.xx", xx), ("local_error.yy", yy)] {
            ensure_finite(field, value)?;
            if value < 0.0 {
                return Err(TrackGateError::NegativeVariance { field, value });
            }
        }
        Ok(Self { xx, yy })
    }
}

/// A predicted track position on a surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrajectoryPrediction {
    /// Predicted position in the global frame.
    pub position: Point3,
    /// Predicted position in the surface's local frame, when known.
    pub local_position: Option<LocalPoint>,
    /// Local positional uncertainty, when the propagation carried errors.
    pub local_error: Option<LocalError>,
}

impl TrajectoryPrediction {
    /// A prediction without local information or errors.
    pub const fn new(position: Point3) -> Self {
        Self {
            position,
            local_position: None,
            local_error: None,
        }
    }

    pub fn with_local_position(mut self, local: LocalPoint) -> Self {
        self.local_position = Some(local);
        self
    }

    pub fn with_local_error(mut self, error: LocalError) -> Self {
        self.local_error = Some(error);
        self
    }

    /// Whether the prediction carries a valid local error.
    #[inline]
    pub fn has_error(&self) -> bool {
        self.local_error.is_some()
    }
}
