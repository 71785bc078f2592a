use crate::debug::DebugColor;
use crate::math::{Point, Real};

/// A sink for diagnostic line segments.
///
/// Implement this for your engine's immediate-mode debug drawer, e.g., by
/// forwarding to `draw_line_3d` with macroquad.
pub trait DebugRenderer {
    /// Queues a line segment from `a` to `b`.
    ///
    /// If `depth_test` is `false` the line is expected to be drawn on top of the scene.
    fn add_line(&mut self, a: &Point<Real>, b: &Point<Real>, color: DebugColor, depth_test: bool);
}

impl<R: DebugRenderer + ?Sized> DebugRenderer for &mut R {
    #[inline]
    fn add_line(&mut self, a: &Point<Real>, b: &Point<Real>, color: DebugColor, depth_test: bool) {
        (**self).add_line(a, b, color, depth_test)
    }
}

/// A line segment recorded by [`DebugLines`].
#[cfg(feature = "std")]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DebugLine {
    /// The first endpoint.
    pub a: Point<Real>,
    /// The second endpoint.
    pub b: Point<Real>,
    /// The line color.
    pub color: DebugColor,
    /// Whether the line is occluded by the scene.
    pub depth_test: bool,
}

/// A [`DebugRenderer`] that just records every line it receives.
///
/// Handy for tests, or to batch lines before handing them over to a renderer.
#[cfg(feature = "std")]
#[derive(Clone, Debug, Default)]
pub struct DebugLines {
    /// The recorded lines, in submission order.
    pub lines: Vec<DebugLine>,
}

#[cfg(feature = "std")]
impl DebugLines {
    /// Creates an empty line recorder.
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(feature = "std")]
impl DebugRenderer for DebugLines {
    fn add_line(&mut self, a: &Point<Real>, b: &Point<Real>, color: DebugColor, depth_test: bool) {
        self.lines.push(DebugLine {
            a: *a,
            b: *b,
            color,
            depth_test,
        });
    }
}
