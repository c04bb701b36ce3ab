//! Local search windows on a surface.

use crate::geometry::LocalPoint;

/// Half-widths of the region around a prediction where compatible hits can
/// lie, in local surface coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LocalWindow {
    /// Symmetric box `|dx| <= dx, |dy| <= dy` around the prediction.
    Bounded { dx: f32, dy: f32 },
    /// No uncertainty was available; the whole surface is in range.
    Unbounded,
}

impl LocalWindow {
    /// Half-widths of a bounded window.
    pub fn half_widths(&self) -> Option<(f32, f32)> {
        match *self {
            LocalWindow::Bounded { dx, dy } => Some((dx, dy)),
            LocalWindow::Unbounded => None,
        }
    }

    pub fn is_bounded(&self) -> bool {
        matches!(self, LocalWindow::Bounded { .. })
    }

    /// Whether a local offset from the prediction falls inside the window.
    pub fn contains(&self, offset: LocalPoint) -> bool {
        match *self {
            LocalWindow::Bounded { dx, dy } => offset.x.abs() <= dx && offset.y.abs() <= dy,
            LocalWindow::Unbounded => true,
        }
    }
}
