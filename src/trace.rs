//! Feature-gated tracing for the hit search pipeline.
//!
//! With the `tracing` feature the macros forward to `tracing`; without it they
//! expand to nothing and pull in no dependency. The estimator itself is never
//! instrumented, only the batch search around it.

/// Opens a debug-level span around one search pass.
#[cfg(feature = "tracing")]
macro_rules! trace_span {
    ($name:expr $(, $($field:tt)*)?) => {
        tracing::debug_span!($name $(, $($field)*)?)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_span {
    ($name:expr $(, $($field:tt)*)?) => {
        $crate::trace::NoopSpan
    };
}

/// Records a debug-level event with structured fields.
///
/// Without the feature the field values are still evaluated, then dropped.
#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        tracing::debug!(name: $name, $($key = $value),+)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        let _ = ($($value,)+);
    };
}

pub(crate) use trace_event;
pub(crate) use trace_span;

/// Stand-in span guard when tracing is compiled out.
///
/// Lets call sites write `let _span = trace_span!(...).entered();` in both
/// feature modes.
#[cfg(not(feature = "tracing"))]
pub struct NoopSpan;

#[cfg(not(feature = "tracing"))]
impl NoopSpan {
    /// Returns self, like `tracing::Span::entered`.
    #[inline]
    pub fn entered(self) -> Self {
        self
    }
}
