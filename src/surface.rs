//! Bounded detector surfaces.
//!
//! A [`SurfacePatch`] exposes the radial and azimuthal extent of one sensor or
//! wedge. Extents can be given directly or derived from a rectangular plane.

use crate::geometry::{normalize_phi, LocalPoint, Point3, Span, SurfaceFrame, Vector3};
use crate::util::math::ensure_finite;
use crate::util::{TrackGateError, TrackGateResult};

/// A bounded region of a detector layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfacePatch {
    /// Radial extent, linear ordering.
    pub r_span: Span,
    /// Azimuthal extent, compared under angular ordering.
    pub phi_span: Span,
    /// Placement of the plane, when known.
    pub frame: Option<SurfaceFrame>,
}

impl SurfacePatch {
    pub const fn new(r_span: Span, phi_span: Span) -> Self {
        Self {
            r_span,
            phi_span,
            frame: None,
        }
    }

    pub fn with_frame(mut self, frame: SurfaceFrame) -> Self {
        self.frame = Some(frame);
        self
    }

    /// Derives the extents of a rectangle `[-half_u, half_u] x [-half_v, half_v]`
    /// in the local coordinates of `frame`.
    ///
    /// Fails when the rectangle's transverse projection encloses the beam
    /// line, since the azimuthal extent is then the full circle.
    pub fn from_rectangle(frame: SurfaceFrame, half_u: f32, half_v: f32) -> TrackGateResult<Self> {
        ensure_finite("half_u", half_u)?;
        ensure_finite("half_v", half_v)?;
        if half_u <= 0.0 || half_v <= 0.0 {
            return Err(TrackGateError::DegenerateSurface {
                reason: "half-extents must be > 0",
            });
        }

        let corners = [
            frame.to_global(LocalPoint::new(-half_u, -half_v)),
            frame.to_global(LocalPoint::new(half_u, -half_v)),
            frame.to_global(LocalPoint::new(half_u, half_v)),
            frame.to_global(LocalPoint::new(-half_u, half_v)),
        ];

        if encloses_axis(&corners) {
            return Err(TrackGateError::DegenerateSurface {
                reason: "surface encloses the beam line",
            });
        }

        let mut r_lo = f32::INFINITY;
        let mut r_hi = 0.0f32;
        for (idx, corner) in corners.iter().enumerate() {
            let next = corners[(idx + 1) % corners.len()];
            r_lo = r_lo.min(transverse_distance_to_segment(*corner, next));
            r_hi = r_hi.max(corner.perp());
        }

        let center = frame.origin.phi();
        let mut d_lo = f32::INFINITY;
        let mut d_hi = f32::NEG_INFINITY;
        for corner in &corners {
            let delta = normalize_phi(corner.phi() - center);
            d_lo = d_lo.min(delta);
            d_hi = d_hi.max(delta);
        }

        Ok(Self {
            r_span: Span::new_unchecked(r_lo, r_hi),
            phi_span: Span::new_unchecked(
                normalize_phi(center + d_lo),
                normalize_phi(center + d_hi),
            ),
            frame: Some(frame),
        })
    }
}

fn cross_z(a: Vector3, b: Vector3) -> f32 {
    a.x * b.y - a.y * b.x
}

/// Whether the z axis pierces the convex transverse projection of `corners`.
fn encloses_axis(corners: &[Point3; 4]) -> bool {
    let mut positive = false;
    let mut negative = false;
    for (idx, corner) in corners.iter().enumerate() {
        let next = corners[(idx + 1) % corners.len()];
        let edge = next - *corner;
        let to_axis = Point3::new(0.0, 0.0, corner.z) - *corner;
        let side = cross_z(edge, to_axis);
        if side > 0.0 {
            positive = true;
        } else if side < 0.0 {
            negative = true;
        }
    }
    !(positive && negative)
}

/// Distance from the z axis to the segment `a..b` projected on the x-y plane.
fn transverse_distance_to_segment(a: Point3, b: Point3) -> f32 {
    let (ex, ey) = (b.x - a.x, b.y - a.y);
    let len_sq = ex * ex + ey * ey;
    if len_sq <= f32::EPSILON {
        return a.perp();
    }
    let t = (-(a.x * ex + a.y * ey) / len_sq).clamp(0.0, 1.0);
    (a.x + t * ex).hypot(a.y + t * ey)
}

#[cfg(test)]
mod tests {
    use super::SurfacePatch;
    use crate::geometry::{Point3, Span, SurfaceFrame, Vector3};
    use crate::util::TrackGateError;

    #[test]
    fn rectangle_off_axis_uses_edge_for_inner_radius() {
        let frame = SurfaceFrame::new(
            Point3::new(10.0, 0.0, 120.0),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
        );
        let patch = SurfacePatch::from_rectangle(frame, 2.0, 1.0).unwrap();
        assert!((patch.r_span.lo - 8.0).abs() < 1e-5);
        assert!((patch.r_span.hi - 12.0f32.hypot(1.0)).abs() < 1e-5);
        let expected_phi = 1.0f32.atan2(8.0);
        assert!((patch.phi_span.lo + expected_phi).abs() < 1e-5);
        assert!((patch.phi_span.hi - expected_phi).abs() < 1e-5);
        assert_eq!(patch.frame, Some(frame));
    }

    #[test]
    fn rectangle_across_phi_seam_wraps_span() {
        let frame = SurfaceFrame::new(
            Point3::new(-10.0, 0.0, 120.0),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
        );
        let patch = SurfacePatch::from_rectangle(frame, 1.0, 1.0).unwrap();
        assert!(patch.phi_span.lo > 3.0);
        assert!(patch.phi_span.hi < -3.0);
    }

    #[test]
    fn rectangle_enclosing_axis_is_rejected() {
        let err = SurfacePatch::from_rectangle(SurfaceFrame::transverse(100.0), 5.0, 5.0)
            .err()
            .unwrap();
        assert_eq!(
            err,
            TrackGateError::DegenerateSurface {
                reason: "surface encloses the beam line",
            }
        );
    }

    #[test]
    fn explicit_spans_have_no_frame() {
        let patch = SurfacePatch::new(
            Span::new_unchecked(5.0, 15.0),
            Span::new_unchecked(-0.5, 0.5),
        );
        assert!(patch.frame.is_none());
    }
}
