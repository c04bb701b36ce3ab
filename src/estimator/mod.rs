//! Track-hit compatibility estimator.
//!
//! The estimator answers three questions for a trajectory prediction that has
//! already been propagated to a detector surface:
//!
//! - can this surface hold a compatible hit at all ([`Estimator::surface_compatible`]),
//! - how far from the prediction, in local coordinates, can such a hit lie
//!   ([`Estimator::maximal_local_displacement`]),
//! - is this particular hit compatible ([`Estimator::estimate`] and friends).
//!
//! Per-hit compatibility is one policy: the radial mismatch must fall inside a
//! region-dependent open window and the normalized azimuth mismatch inside the
//! configured angular window. The score is binary, `1.0` for accepted hits and
//! `0.0` otherwise.
//!
//! All operations are pure. An [`Estimator`] is `Copy` and can be shared
//! across threads without synchronization.

mod config;
mod window;

pub use config::{in_inner_band, EstimatorConfig, Window, INNER_BAND_Z_MAX, INNER_BAND_Z_MIN};
pub use window::LocalWindow;

use crate::geometry::{normalize_phi, phi_less, ranges_intersect, ranges_intersect_by, Point3, Span};
use crate::hit::MeasuredHit;
use crate::state::TrajectoryPrediction;
use crate::surface::SurfacePatch;
use crate::util::math::sigma_extent;
use crate::util::TrackGateResult;

/// Radial probe extension below the predicted radius for the surface test.
pub const SURFACE_PROBE_R_INWARD: f32 = 0.0;
/// Radial probe extension above the predicted radius for the surface test.
pub const SURFACE_PROBE_R_OUTWARD: f32 = 40.0;
/// Number of standard deviations spanned by the local search window.
pub const LOCAL_WINDOW_N_SIGMA: f32 = 3.0;

/// Outcome of a per-hit compatibility test.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Estimate {
    pub accepted: bool,
    /// `1.0` when accepted, `0.0` otherwise.
    pub score: f64,
}

impl Estimate {
    pub const ACCEPTED: Estimate = Estimate {
        accepted: true,
        score: 1.0,
    };
    pub const REJECTED: Estimate = Estimate {
        accepted: false,
        score: 0.0,
    };
}

/// Reference frame in which prediction and hit are compared.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Frame {
    /// Global coordinates; mismatch is prediction minus hit.
    Surface,
    /// Displacements from a vertex; mismatch is hit minus prediction.
    Vertex(Point3),
}

/// Compatibility estimator with fixed windows.
#[derive(Clone, Copy, Debug)]
pub struct Estimator {
    config: EstimatorConfig,
}

impl Estimator {
    /// Creates an estimator. The configuration is trusted as given.
    pub fn new(config: EstimatorConfig) -> Self {
        Self { config }
    }

    /// Creates an estimator after validating the configuration.
    pub fn try_new(config: EstimatorConfig) -> TrackGateResult<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Tests a hit position against the prediction in global coordinates.
    ///
    /// The radial mismatch is `prediction.perp - hit.perp` and the azimuth
    /// mismatch `prediction.phi - hit.phi`. The radial window is chosen from
    /// the hit's `z`.
    pub fn estimate(&self, prediction: &TrajectoryPrediction, hit: Point3) -> Estimate {
        let predicted = prediction.position;
        let r_diff = predicted.perp() - hit.perp();
        self.gate(r_diff, hit.z(), || predicted.phi() - hit.phi())
    }

    /// Resolves a hit to global coordinates through its surface and tests it.
    pub fn estimate_hit<H>(&self, prediction: &TrajectoryPrediction, hit: &H) -> Estimate
    where
        H: MeasuredHit + ?Sized,
    {
        self.estimate(prediction, hit.global_position())
    }

    /// Tests a hit position against the prediction, both taken relative to
    /// `vertex`.
    ///
    /// Mismatches are hit minus prediction here, the opposite sign of
    /// [`estimate`](Self::estimate). The radial window is chosen from the
    /// hit's `z` relative to the vertex.
    pub fn estimate_from_vertex(
        &self,
        vertex: Point3,
        prediction: &TrajectoryPrediction,
        hit: Point3,
    ) -> Estimate {
        let predicted = prediction.position - vertex;
        let measured = hit - vertex;
        let r_diff = measured.perp() - predicted.perp();
        self.gate(r_diff, measured.z(), || measured.phi() - predicted.phi())
    }

    /// Dispatches to [`estimate`](Self::estimate) or
    /// [`estimate_from_vertex`](Self::estimate_from_vertex).
    pub fn estimate_in(
        &self,
        frame: Frame,
        prediction: &TrajectoryPrediction,
        hit: Point3,
    ) -> Estimate {
        match frame {
            Frame::Surface => self.estimate(prediction, hit),
            Frame::Vertex(vertex) => self.estimate_from_vertex(vertex, prediction, hit),
        }
    }

    /// Coarse test of whether `surface` can hold a hit compatible with the
    /// prediction.
    ///
    /// The radial probe only reaches outward from the predicted radius, so a
    /// `false` result rules the surface out only while `r_max <= 0` and
    /// `r_max_inner <= 0`. With a positive upper radial bound, hits slightly
    /// inside the predicted radius can pass [`estimate`](Self::estimate) on a
    /// surface this test excludes. `true` only licenses per-hit evaluation.
    pub fn surface_compatible(
        &self,
        prediction: &TrajectoryPrediction,
        surface: &SurfacePatch,
    ) -> bool {
        let predicted = prediction.position;
        let r = predicted.perp();
        let phi = predicted.phi();

        let r_probe =
            Span::new_unchecked(r, r).widened(SURFACE_PROBE_R_INWARD, SURFACE_PROBE_R_OUTWARD);
        let phi_probe = Span::new_unchecked(phi, phi)
            .widened(self.config.phi_min.abs(), self.config.phi_max.abs());

        ranges_intersect(r_probe, surface.r_span)
            && ranges_intersect_by(phi_probe, surface.phi_span, phi_less)
    }

    /// Local half-widths around the prediction within which compatible hits
    /// can lie: three standard deviations per axis, or
    /// [`LocalWindow::Unbounded`] when the prediction carries no error.
    pub fn maximal_local_displacement(
        &self,
        prediction: &TrajectoryPrediction,
        _surface: &SurfacePatch,
    ) -> LocalWindow {
        match prediction.local_error {
            Some(error) => LocalWindow::Bounded {
                dx: sigma_extent(error.xx, LOCAL_WINDOW_N_SIGMA),
                dy: sigma_extent(error.yy, LOCAL_WINDOW_N_SIGMA),
            },
            None => LocalWindow::Unbounded,
        }
    }

    /// Shared radial-then-azimuthal window test.
    ///
    /// The azimuth difference is only computed once the radial test passes.
    #[inline]
    fn gate<F>(&self, r_diff: f32, z: f32, phi_diff: F) -> Estimate
    where
        F: FnOnce() -> f32,
    {
        let radial = self.config.radial_window(z);
        if r_diff >= radial.max || r_diff <= radial.min {
            return Estimate::REJECTED;
        }

        let phi_diff = normalize_phi(phi_diff());
        if self.config.phi_window().contains(phi_diff) {
            Estimate::ACCEPTED
        } else {
            Estimate::REJECTED
        }
    }
}
