//! Estimator windows and the detector-region switch.

use crate::util::math::ensure_finite;
use crate::util::{TrackGateError, TrackGateResult};

/// Lower edge of the longitudinal band that uses the inner radial window.
pub const INNER_BAND_Z_MIN: f32 = 70.0;
/// Upper edge of the longitudinal band that uses the inner radial window.
pub const INNER_BAND_Z_MAX: f32 = 170.0;

/// An open interval `(min, max)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Window {
    pub min: f32,
    pub max: f32,
}

impl Window {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Strict containment, `min < value < max`.
    #[inline]
    pub fn contains(&self, value: f32) -> bool {
        value < self.max && value > self.min
    }

    fn validate(&self, window: &'static str) -> TrackGateResult<()> {
        ensure_finite(window, self.min)?;
        ensure_finite(window, self.max)?;
        if self.min >= self.max {
            return Err(TrackGateError::EmptyWindow {
                window,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Compatibility windows, fixed for the lifetime of an estimator.
///
/// Radial windows bound the mismatch in distance from the beam line, the
/// angular window bounds the normalized azimuth mismatch. All bounds are
/// exclusive and signed; they need not be symmetric.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EstimatorConfig {
    /// Lower radial bound outside the inner band.
    pub r_min: f32,
    /// Upper radial bound outside the inner band.
    pub r_max: f32,
    /// Lower radial bound inside the inner band.
    pub r_min_inner: f32,
    /// Upper radial bound inside the inner band.
    pub r_max_inner: f32,
    /// Lower azimuth bound (radians).
    pub phi_min: f32,
    /// Upper azimuth bound (radians).
    pub phi_max: f32,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            r_min: -2.0,
            r_max: 2.0,
            r_min_inner: -5.0,
            r_max_inner: 5.0,
            phi_min: -0.05,
            phi_max: 0.05,
        }
    }
}

impl EstimatorConfig {
    /// Radial window used outside the inner band.
    pub fn outer_window(&self) -> Window {
        Window::new(self.r_min, self.r_max)
    }

    /// Radial window used inside the inner band.
    pub fn inner_window(&self) -> Window {
        Window::new(self.r_min_inner, self.r_max_inner)
    }

    pub fn phi_window(&self) -> Window {
        Window::new(self.phi_min, self.phi_max)
    }

    /// Radial window for a candidate at longitudinal coordinate `z`.
    ///
    /// The band is open on both sides: `|z|` equal to either edge falls back
    /// to the outer window.
    #[inline]
    pub fn radial_window(&self, z: f32) -> Window {
        if in_inner_band(z) {
            self.inner_window()
        } else {
            self.outer_window()
        }
    }

    /// Checks that every window is finite and non-empty.
    pub fn validate(&self) -> TrackGateResult<()> {
        self.outer_window().validate("outer radial")?;
        self.inner_window().validate("inner radial")?;
        self.phi_window().validate("azimuthal")?;
        Ok(())
    }
}

/// Whether `|z|` lies strictly inside the inner band.
#[inline]
pub fn in_inner_band(z: f32) -> bool {
    let abs_z = z.abs();
    abs_z > INNER_BAND_Z_MIN && abs_z < INNER_BAND_Z_MAX
}
