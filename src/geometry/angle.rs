//! Azimuthal angle helpers.
//!
//! Angles are in radians. Differences between azimuths are only meaningful
//! after they have been folded back into the canonical (-π, π] range.

use std::f32::consts::{PI, TAU};

/// Folds an angle into (-π, π].
///
/// `fmod` is exact and the single correction step stays within a factor of
/// two of `TAU`, so the result is the exact representative of the input
/// modulo the `f32` value of 2π. NaN propagates.
#[inline]
pub fn normalize_phi(angle: f32) -> f32 {
    let wrapped = angle % TAU;
    if wrapped <= -PI {
        wrapped + TAU
    } else if wrapped > PI {
        wrapped - TAU
    } else {
        wrapped
    }
}

/// Strict angular ordering: `a` lies clockwise of `b` within half a turn.
#[inline]
pub fn phi_less(a: f32, b: f32) -> bool {
    normalize_phi(a - b) < 0.0
}
