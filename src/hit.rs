//! Measured detector hits.

use crate::geometry::{LocalPoint, Point3, SurfaceFrame};

/// A hit that knows its position on its own surface and in the global frame.
pub trait MeasuredHit {
    /// Position in the local frame of the hit's surface.
    fn local_position(&self) -> LocalPoint;

    /// Position in the global frame.
    fn global_position(&self) -> Point3;
}

/// A hit stored in local coordinates together with its surface placement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlanarHit {
    pub local: LocalPoint,
    pub frame: SurfaceFrame,
}

impl PlanarHit {
    pub const fn new(local: LocalPoint, frame: SurfaceFrame) -> Self {
        Self { local, frame }
    }
}

impl MeasuredHit for PlanarHit {
    fn local_position(&self) -> LocalPoint {
        self.local
    }

    fn global_position(&self) -> Point3 {
        self.frame.to_global(self.local)
    }
}

/// A hit with both coordinates already resolved upstream.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointHit {
    pub local: LocalPoint,
    pub global: Point3,
}

impl PointHit {
    pub const fn new(local: LocalPoint, global: Point3) -> Self {
        Self { local, global }
    }
}

impl MeasuredHit for PointHit {
    fn local_position(&self) -> LocalPoint {
        self.local
    }

    fn global_position(&self) -> Point3 {
        self.global
    }
}

impl<H: MeasuredHit + ?Sized> MeasuredHit for &H {
    fn local_position(&self) -> LocalPoint {
        (**self).local_position()
    }

    fn global_position(&self) -> Point3 {
        (**self).global_position()
    }
}
