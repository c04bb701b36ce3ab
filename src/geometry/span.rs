//! Closed intervals and their overlap tests.
//!
//! Radial spans overlap under the usual `<` ordering. Azimuthal spans have no
//! global order, so their overlap is decided with a caller-supplied strict
//! ordering such as [`phi_less`](crate::geometry::phi_less).

use crate::util::math::ensure_finite;
use crate::util::{TrackGateError, TrackGateResult};

/// A closed interval `[lo, hi]`.
///
/// For azimuthal spans `hi` may be numerically below `lo` once wrapped; the
/// span then runs counter-clockwise from `lo` through the ±π seam to `hi`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    /// Lower bound.
    pub lo: f32,
    /// Upper bound.
    pub hi: f32,
}

impl Span {
    /// Creates a linear span, rejecting non-finite or inverted bounds.
    pub fn new(lo: f32, hi: f32) -> TrackGateResult<Self> {
        let lo = ensure_finite("span.lo", lo)?;
        let hi = ensure_finite("span.hi", hi)?;
        if hi < lo {
            return Err(TrackGateError::InvertedSpan { lo, hi });
        }
        Ok(Self { lo, hi })
    }

    /// Creates a span without any checks.
    ///
    /// Azimuthal spans crossing the ±π seam are built this way.
    pub const fn new_unchecked(lo: f32, hi: f32) -> Self {
        Self { lo, hi }
    }

    /// Returns the span widened by `below` under `lo` and `above` over `hi`.
    pub fn widened(self, below: f32, above: f32) -> Self {
        Self {
            lo: self.lo - below,
            hi: self.hi + above,
        }
    }
}

/// Linear overlap test for two closed spans.
#[inline]
pub fn ranges_intersect(a: Span, b: Span) -> bool {
    ranges_intersect_by(a, b, |x, y| x < y)
}

/// Overlap test under an arbitrary strict ordering.
///
/// Two spans are disjoint only if one ends before the other starts.
#[inline]
pub fn ranges_intersect_by<F>(a: Span, b: Span, less: F) -> bool
where
    F: Fn(f32, f32) -> bool,
{
    !(less(a.hi, b.lo) || less(b.hi, a.lo))
}
