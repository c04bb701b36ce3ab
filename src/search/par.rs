//! Rayon-parallel surface search (feature-gated).
//!
//! Hits are classified in parallel and aggregated sequentially, so the result
//! is identical to [`search_surface`](super::search_surface).

use super::{classify, collect, prepare, SurfaceSearch, Verdict};
use crate::estimator::{Estimator, Frame};
use crate::hit::MeasuredHit;
use crate::state::TrajectoryPrediction;
use crate::surface::SurfacePatch;
use crate::trace::trace_span;
use rayon::prelude::*;

/// Parallel search of one surface.
pub fn search_surface_par<H>(
    estimator: &Estimator,
    frame: Frame,
    prediction: &TrajectoryPrediction,
    surface: &SurfacePatch,
    hits: &[H],
) -> Option<SurfaceSearch>
where
    H: MeasuredHit + Sync,
{
    let _span = trace_span!("search_surface", hits = hits.len(), parallel = true).entered();

    let (window, anchor) = prepare(estimator, prediction, surface)?;
    let verdicts: Vec<Verdict> = hits
        .par_iter()
        .map(|hit| classify(estimator, frame, prediction, window, anchor, hit))
        .collect();
    Some(collect(window, verdicts))
}
