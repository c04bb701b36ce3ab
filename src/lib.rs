//! trackgate is a geometric compatibility gate for track-hit association.
//!
//! Given a trajectory prediction already propagated to a detector surface, the
//! [`Estimator`] decides whether a candidate hit is consistent with it, whether
//! a surface can hold any such hit, and how large a local search window around
//! the prediction has to be. The [`search`] module chains these operations
//! into a per-surface hit search, optionally parallel via the `rayon` feature.

pub mod estimator;
pub mod geometry;
pub mod hit;
pub mod search;
pub mod state;
pub mod surface;
mod trace;
pub mod util;

pub use estimator::{Estimate, Estimator, EstimatorConfig, Frame, LocalWindow, Window};
pub use geometry::{normalize_phi, phi_less, LocalPoint, Point3, Span, SurfaceFrame, Vector3};
pub use hit::{MeasuredHit, PlanarHit, PointHit};
pub use search::{search_surface, HitMatch, HitSearch, SurfaceSearch};
pub use state::{LocalError, TrajectoryPrediction};
pub use surface::SurfacePatch;
pub use util::{TrackGateError, TrackGateResult};

#[cfg(feature = "rayon")]
pub use search::search_surface_par;
