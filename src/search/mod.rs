//! Hit search on a single surface.
//!
//! A search pass runs the estimator's operations in the order a track builder
//! needs them: the surface prefilter first, then the local window to discard
//! distant hits cheaply, then the per-hit gate on whatever is left.

#[cfg(feature = "rayon")]
mod par;

#[cfg(feature = "rayon")]
pub use par::search_surface_par;

use crate::estimator::{Estimate, Estimator, Frame, LocalWindow};
use crate::geometry::LocalPoint;
use crate::hit::MeasuredHit;
use crate::state::TrajectoryPrediction;
use crate::surface::SurfacePatch;
use crate::trace::{trace_event, trace_span};

/// An accepted hit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitMatch {
    /// Index of the hit in the searched slice.
    pub index: usize,
    pub estimate: Estimate,
}

/// Result of searching one surface that passed the prefilter.
#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceSearch {
    /// Local window used to pre-select hits.
    pub window: LocalWindow,
    /// Number of hits that reached the per-hit gate.
    pub examined: usize,
    /// Accepted hits in input order.
    pub matches: Vec<HitMatch>,
}

/// Per-hit outcome before aggregation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Verdict {
    OutsideWindow,
    Rejected,
    Accepted(Estimate),
}

/// Search settings for one trajectory prediction.
#[derive(Clone, Copy, Debug)]
pub struct HitSearch<'a> {
    estimator: &'a Estimator,
    prediction: &'a TrajectoryPrediction,
    frame: Frame,
    parallel: bool,
}

impl<'a> HitSearch<'a> {
    pub fn new(estimator: &'a Estimator, prediction: &'a TrajectoryPrediction) -> Self {
        Self {
            estimator,
            prediction,
            frame: Frame::Surface,
            parallel: false,
        }
    }

    /// Compares hits in the given frame instead of plain global coordinates.
    pub fn with_frame(mut self, frame: Frame) -> Self {
        self.frame = frame;
        self
    }

    /// Requests parallel evaluation. Ignored without the `rayon` feature.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Searches one surface, returning `None` if the prefilter excludes it.
    pub fn run<H>(&self, surface: &SurfacePatch, hits: &[H]) -> Option<SurfaceSearch>
    where
        H: MeasuredHit + Sync,
    {
        if self.parallel {
            #[cfg(feature = "rayon")]
            return search_surface_par(self.estimator, self.frame, self.prediction, surface, hits);
        }
        search_surface(self.estimator, self.frame, self.prediction, surface, hits)
    }
}

/// Sequential search of one surface.
pub fn search_surface<H>(
    estimator: &Estimator,
    frame: Frame,
    prediction: &TrajectoryPrediction,
    surface: &SurfacePatch,
    hits: &[H],
) -> Option<SurfaceSearch>
where
    H: MeasuredHit,
{
    let _span = trace_span!("search_surface", hits = hits.len(), parallel = false).entered();

    let (window, anchor) = prepare(estimator, prediction, surface)?;
    let verdicts = hits
        .iter()
        .map(|hit| classify(estimator, frame, prediction, window, anchor, hit));
    Some(collect(window, verdicts))
}

/// Runs the prefilter and sizes the local window.
pub(crate) fn prepare(
    estimator: &Estimator,
    prediction: &TrajectoryPrediction,
    surface: &SurfacePatch,
) -> Option<(LocalWindow, Option<LocalPoint>)> {
    if !estimator.surface_compatible(prediction, surface) {
        trace_event!("surface_skipped", r_lo = surface.r_span.lo, r_hi = surface.r_span.hi);
        return None;
    }
    let window = estimator.maximal_local_displacement(prediction, surface);
    let anchor = prediction
        .local_position
        .or_else(|| surface.frame.map(|frame| frame.to_local(prediction.position)));
    Some((window, anchor))
}

/// Window pre-selection followed by the per-hit gate.
///
/// Without a local anchor for the prediction the window cannot be applied and
/// every hit goes straight to the gate.
pub(crate) fn classify<H>(
    estimator: &Estimator,
    frame: Frame,
    prediction: &TrajectoryPrediction,
    window: LocalWindow,
    anchor: Option<LocalPoint>,
    hit: &H,
) -> Verdict
where
    H: MeasuredHit + ?Sized,
{
    if let Some(anchor) = anchor {
        if !window.contains(hit.local_position() - anchor) {
            return Verdict::OutsideWindow;
        }
    }
    let estimate = estimator.estimate_in(frame, prediction, hit.global_position());
    if estimate.accepted {
        Verdict::Accepted(estimate)
    } else {
        Verdict::Rejected
    }
}

pub(crate) fn collect<I>(window: LocalWindow, verdicts: I) -> SurfaceSearch
where
    I: IntoIterator<Item = Verdict>,
{
    let mut examined = 0usize;
    let mut matches = Vec::new();
    for (index, verdict) in verdicts.into_iter().enumerate() {
        match verdict {
            Verdict::OutsideWindow => {}
            Verdict::Rejected => examined += 1,
            Verdict::Accepted(estimate) => {
                examined += 1;
                matches.push(HitMatch { index, estimate });
            }
        }
    }
    trace_event!("surface_searched", examined = examined, accepted = matches.len());
    SurfaceSearch {
        window,
        examined,
        matches,
    }
}
