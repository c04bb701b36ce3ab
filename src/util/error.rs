//! Error types for trackgate.

use thiserror::Error;

/// Result alias for trackgate operations.
pub type TrackGateResult<T> = std::result::Result<T, TrackGateError>;

/// Errors reported by construction-time checks.
///
/// The estimator itself never fails; these errors only come out of the
/// validating constructors used by configuration collaborators.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum TrackGateError {
    /// A configuration or geometry value is NaN or infinite.
    #[error("non-finite value for {field}")]
    NonFinite {
        /// Name of the offending field.
        field: &'static str,
    },
    /// An open window `(min, max)` that cannot contain any value.
    #[error("empty {window} window: min {min} must be below max {max}")]
    EmptyWindow {
        /// Which window failed the check.
        window: &'static str,
        /// Lower bound as configured.
        min: f32,
        /// Upper bound as configured.
        max: f32,
    },
    /// A span whose upper bound lies below its lower bound.
    #[error("inverted span: lo {lo} > hi {hi}")]
    InvertedSpan {
        /// Lower bound.
        lo: f32,
        /// Upper bound.
        hi: f32,
    },
    /// A surface whose extents cannot be represented as spans.
    #[error("degenerate surface: {reason}")]
    DegenerateSurface {
        /// Why the surface was rejected.
        reason: &'static str,
    },
    /// A negative positional variance.
    #[error("negative variance for {field}: {value}")]
    NegativeVariance {
        /// Name of the offending variance.
        field: &'static str,
        /// Offending value.
        value: f32,
    },
}
