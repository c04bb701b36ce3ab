//! Geometry value types in the detector frame.
//!
//! The global frame has its z axis along the beam line. Lengths are in the
//! detector's native unit (cm) and angles in radians. `perp` is the distance
//! from the z axis and `phi` the azimuth about it.

use std::ops::{Add, Mul, Sub};

mod angle;
mod span;

pub use angle::{normalize_phi, phi_less};
pub use span::{ranges_intersect, ranges_intersect_by, Span};

/// A point in the global detector frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// A displacement between two [`Point3`] values.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// A point in the 2D coordinate system of a detector surface.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LocalPoint {
    pub x: f32,
    pub y: f32,
}

impl Point3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Builds a point from cylindrical coordinates.
    pub fn from_cylindrical(perp: f32, phi: f32, z: f32) -> Self {
        let (sin, cos) = phi.sin_cos();
        Self::new(perp * cos, perp * sin, z)
    }

    /// Distance from the z axis.
    #[inline]
    pub fn perp(&self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Azimuth about the z axis, in [-π, π].
    #[inline]
    pub fn phi(&self) -> f32 {
        self.y.atan2(self.x)
    }

    #[inline]
    pub fn z(&self) -> f32 {
        self.z
    }
}

impl Vector3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Distance of the displacement from the z axis.
    #[inline]
    pub fn perp(&self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Azimuth of the displacement about the z axis, in [-π, π].
    ///
    /// A zero-length transverse component yields `atan2(±0, ±0)`.
    #[inline]
    pub fn phi(&self) -> f32 {
        self.y.atan2(self.x)
    }

    #[inline]
    pub fn z(&self) -> f32 {
        self.z
    }

    pub fn dot(&self, other: Vector3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
}

impl LocalPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Sub for Point3 {
    type Output = Vector3;

    fn sub(self, rhs: Point3) -> Vector3 {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Add<Vector3> for Point3 {
    type Output = Point3;

    fn add(self, rhs: Vector3) -> Point3 {
        Point3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Add for Vector3 {
    type Output = Vector3;

    fn add(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Mul<f32> for Vector3 {
    type Output = Vector3;

    fn mul(self, rhs: f32) -> Vector3 {
        Vector3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Sub for LocalPoint {
    type Output = LocalPoint;

    fn sub(self, rhs: LocalPoint) -> LocalPoint {
        LocalPoint::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Placement of a planar surface in the global frame.
///
/// `u` and `v` are the global directions of the local x and y axes and are
/// expected to be orthonormal; no check is made.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceFrame {
    pub origin: Point3,
    pub u: Vector3,
    pub v: Vector3,
}

impl SurfaceFrame {
    pub const fn new(origin: Point3, u: Vector3, v: Vector3) -> Self {
        Self { origin, u, v }
    }

    /// A plane perpendicular to the beam line at `z`, local axes along global
    /// x and y. Endcap disks are placed this way.
    pub const fn transverse(z: f32) -> Self {
        Self::new(
            Point3::new(0.0, 0.0, z),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
        )
    }

    /// Maps a local point onto the global frame.
    pub fn to_global(&self, local: LocalPoint) -> Point3 {
        self.origin + self.u * local.x + self.v * local.y
    }

    /// Projects a global point onto the surface axes.
    pub fn to_local(&self, global: Point3) -> LocalPoint {
        let d = global - self.origin;
        LocalPoint::new(d.dot(self.u), d.dot(self.v))
    }
}
