//! Viewport geometry and the abstract drawing surface.
//!
//! The engine never talks to a concrete rendering backend. It computes
//! geometry from a [`Viewport`] and issues drawing commands through the
//! [`Surface`] trait; the host shell implements `Surface` on top of whatever
//! 2D context it owns (an HTML canvas, a software rasterizer, a test
//! recorder).
//!
//! # Coordinate System
//!
//! All surface coordinates are pixels with the origin at the top-left:
//! X increases to the right, Y increases **downward**. The scale mapping in
//! [`crate::scale`] performs the Y inversion so that larger data values land
//! higher on the surface.
//!
//! # Examples
//!
//! ```rust
//! use kurve::{Insets, Viewport};
//!
//! let viewport = Viewport::new(
//!     400.0,
//!     300.0,
//!     Insets { top: 28.0, right: 24.0, bottom: 36.0, left: 36.0 },
//! );
//!
//! let plot = viewport.plot_rect();
//! assert_eq!(plot.x, 36.0);
//! assert_eq!(plot.width, 340.0);
//! assert_eq!(plot.height, 236.0);
//! assert_eq!(viewport.baseline(), 264.0);
//! assert!(!viewport.is_degenerate());
//! ```

/// A point in surface/pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    /// X coordinate in pixels.
    pub x: f32,
    /// Y coordinate in pixels.
    pub y: f32,
}

impl ScreenPoint {
    /// Creates a new surface point at the given pixel coordinates.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A rectangle in surface/pixel coordinates.
///
/// `x`/`y` locate the top-left corner; `width` and `height` extend right and
/// down from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    /// X coordinate of the top-left corner in pixels.
    pub x: f32,
    /// Y coordinate of the top-left corner in pixels.
    pub y: f32,
    /// Width of the rectangle in pixels.
    pub width: f32,
    /// Height of the rectangle in pixels.
    pub height: f32,
}

impl ScreenRect {
    /// Creates a new surface rectangle.
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Padding between the surface edges and the drawable plot rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Insets {
    /// Space above the plot, in pixels.
    pub top: f32,
    /// Space to the right of the plot, in pixels.
    pub right: f32,
    /// Space below the plot (axis labels live here), in pixels.
    pub bottom: f32,
    /// Space to the left of the plot (axis labels live here), in pixels.
    pub left: f32,
}

impl Default for Insets {
    fn default() -> Self {
        Self {
            top: 28.0,
            right: 24.0,
            bottom: 36.0,
            left: 44.0,
        }
    }
}

/// The host surface dimensions plus the insets that frame the plot.
///
/// A `Viewport` is cheap to copy and is recomputed by the host whenever the
/// underlying surface resizes; the mapping built from it is then rebuilt for
/// the next render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Surface width in pixels.
    pub width: f32,
    /// Surface height in pixels.
    pub height: f32,
    /// Padding framing the drawable plot rectangle.
    pub insets: Insets,
}

impl Viewport {
    /// Creates a viewport from surface dimensions and insets.
    pub const fn new(width: f32, height: f32, insets: Insets) -> Self {
        Self {
            width,
            height,
            insets,
        }
    }

    /// The drawable rectangle after subtracting the insets.
    ///
    /// For a degenerate viewport (see [`Viewport::is_degenerate`]) the
    /// returned width or height is zero or negative; callers that draw are
    /// expected to check degeneracy first and skip the frame.
    pub fn plot_rect(&self) -> ScreenRect {
        ScreenRect {
            x: self.insets.left,
            y: self.insets.top,
            width: self.width - self.insets.left - self.insets.right,
            height: self.height - self.insets.top - self.insets.bottom,
        }
    }

    /// True when either dimension does not exceed the sum of its opposing
    /// insets, i.e. the drawable area has collapsed.
    pub fn is_degenerate(&self) -> bool {
        self.width <= self.insets.left + self.insets.right
            || self.height <= self.insets.top + self.insets.bottom
    }

    /// Y coordinate of the bar baseline: the bottom edge of the plot rect.
    pub fn baseline(&self) -> f32 {
        self.height - self.insets.bottom
    }
}

/// Drawing commands the engine needs from its host.
///
/// Implementations carry their own styling (colors, fonts); the engine only
/// supplies geometry and text. All methods take `&mut self` so a recording
/// implementation can accumulate commands for inspection in tests.
pub trait Surface {
    /// Current surface dimensions in pixels, `(width, height)`.
    fn size(&self) -> (f32, f32);

    /// Clears the given rectangle to the background.
    fn clear_rect(&mut self, rect: ScreenRect);

    /// Strokes an open polyline through `points` with the given line width.
    ///
    /// Called with fewer than two points never happens; the engine skips the
    /// stroke instead.
    fn stroke_polyline(&mut self, points: &[ScreenPoint], width: f32);

    /// Fills the given rectangle.
    fn fill_rect(&mut self, rect: ScreenRect);

    /// Fills a circle of `radius` centered at `center`.
    fn fill_circle(&mut self, center: ScreenPoint, radius: f32);

    /// Draws `text` with its anchor at `at`.
    fn fill_text(&mut self, text: &str, at: ScreenPoint);
}
