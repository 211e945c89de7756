//! Progressive reveal of a plotted series across a fixed frame budget.
//!
//! A render pass begins with [`RevealAnimator::start`], which hands back a
//! [`FrameTicket`]. The host's display-refresh callback feeds the ticket to
//! [`RevealAnimator::render_frame`]; each call draws one frame (clear, grid,
//! then the visible prefix of the series) and returns either the ticket for
//! the next frame, [`FrameStatus::Complete`], or [`FrameStatus::Stale`].
//!
//! # Cancellation
//!
//! Starting a new pass while one is in flight must not leave two reveals
//! drawing over each other. Every `start` bumps an internal generation
//! counter and bakes it into the returned ticket; a refresh callback still
//! holding the previous pass's ticket gets [`FrameStatus::Stale`] — nothing
//! is drawn, nothing is rescheduled — and the superseding pass proceeds
//! alone. This is the cooperative, single-threaded analogue of cancelling a
//! scheduled animation callback.
//!
//! # Reveal Schedule
//!
//! The reveal is monotonic by index: frame `f` (1-based, up to
//! [`REVEAL_FRAMES`]) shows the first `len * f / 60` samples (integer
//! floor), so later frames draw supersets of earlier ones and frame 60 shows
//! the full series. Bars appear whole at full height as their index becomes
//! visible; heights never grow frame-by-frame.
//!
//! After completion the final frame persists on the surface; further calls
//! with the finished ticket report `Complete` without issuing drawing
//! commands.
//!
//! # Examples
//!
//! ```rust
//! use kurve::{
//!     FrameStatus, Insets, RenderMode, RevealAnimator, ScaleMapping, ScaleMode, ScreenPoint,
//!     ScreenRect, Surface, Viewport, REVEAL_FRAMES,
//! };
//!
//! struct Discard;
//!
//! impl Surface for Discard {
//!     fn size(&self) -> (f32, f32) {
//!         (400.0, 300.0)
//!     }
//!     fn clear_rect(&mut self, _: ScreenRect) {}
//!     fn stroke_polyline(&mut self, _: &[ScreenPoint], _: f32) {}
//!     fn fill_rect(&mut self, _: ScreenRect) {}
//!     fn fill_circle(&mut self, _: ScreenPoint, _: f32) {}
//!     fn fill_text(&mut self, _: &str, _: ScreenPoint) {}
//! }
//!
//! let series = vec![0.0, 1.0, 1.0, 2.0, 3.0, 5.0];
//! let viewport = Viewport::new(400.0, 300.0, Insets::default());
//! let mapping = ScaleMapping::build(&series, viewport, ScaleMode::Linear);
//!
//! let mut animator = RevealAnimator::new();
//! let mut ticket = animator.start(series, RenderMode::Line, mapping);
//! let mut surface = Discard;
//!
//! let mut frames = 0;
//! loop {
//!     frames += 1;
//!     match animator.render_frame(ticket, &mut surface) {
//!         FrameStatus::Continue(next) => ticket = next,
//!         FrameStatus::Complete => break,
//!         FrameStatus::Stale => unreachable!("no second pass was started"),
//!     }
//! }
//! assert_eq!(frames, REVEAL_FRAMES);
//! ```

use std::fmt::Display;

use num_traits::Float;

use crate::axis;
use crate::scale::ScaleMapping;
use crate::surface::{ScreenPoint, ScreenRect, Surface};

/// Total frames in a reveal pass.
pub const REVEAL_FRAMES: u32 = 60;

/// Stroke width of the series polyline.
pub const LINE_WIDTH: f32 = 2.2;
/// Radius of the sample markers in line and points modes.
pub const POINT_RADIUS: f32 = 4.0;
/// Bars never get thinner than this, however dense the series.
pub const MIN_BAR_WIDTH: f32 = 6.0;
/// Fraction of the per-index slot a bar occupies.
const BAR_WIDTH_RATIO: f32 = 0.7;

/// How the visible prefix of the series is drawn each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Polyline through the visible points plus a marker at each.
    #[default]
    Line,
    /// Markers only: [`RenderMode::Line`] without the polyline stroke.
    Points,
    /// A filled rectangle per visible index, from its value down to the
    /// baseline.
    Bar,
}

/// Capability to render the next frame of a specific pass.
///
/// Tickets are cheap copies of the pass generation. The host hands the
/// ticket to its frame scheduler and passes it back on the next refresh; a
/// ticket from a superseded pass yields [`FrameStatus::Stale`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameTicket {
    generation: u64,
}

/// Outcome of [`RevealAnimator::render_frame`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    /// Frame drawn; schedule another refresh and call again with this ticket.
    Continue(FrameTicket),
    /// The pass has drawn its final frame (or already had); do not reschedule.
    Complete,
    /// The ticket belongs to a superseded pass; nothing was drawn, do not
    /// reschedule.
    Stale,
}

struct Pass<D> {
    series: Vec<D>,
    mode: RenderMode,
    mapping: ScaleMapping<D>,
    frame: u32,
}

/// Drives the fixed-step reveal of a plotted series.
///
/// Owns the current pass exclusively; there is no global chart state. One
/// animator belongs to one drawing surface, and the generation counter
/// guarantees at most one live pass per animator.
pub struct RevealAnimator<D = f64> {
    generation: u64,
    pass: Option<Pass<D>>,
}

impl<D> Default for RevealAnimator<D> {
    fn default() -> Self {
        Self {
            generation: 0,
            pass: None,
        }
    }
}

impl<D> RevealAnimator<D>
where
    D: Float + Display,
{
    /// Creates an idle animator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins a new reveal pass, superseding any pass in flight.
    ///
    /// The series and mapping are captured for the lifetime of the pass; the
    /// mapping must have been built from this series and the current
    /// viewport. Returns the ticket for the pass's first frame.
    pub fn start(
        &mut self,
        series: Vec<D>,
        mode: RenderMode,
        mapping: ScaleMapping<D>,
    ) -> FrameTicket {
        self.generation += 1;
        self.pass = Some(Pass {
            series,
            mode,
            mapping,
            frame: 0,
        });
        FrameTicket {
            generation: self.generation,
        }
    }

    /// Renders one frame of the pass identified by `ticket`.
    ///
    /// Advances the frame cursor, clears the surface, redraws the grid, and
    /// draws the visible prefix of the series. Skips all drawing commands —
    /// but still advances — when the viewport is degenerate, so a collapsed
    /// surface never faults mid-animation.
    pub fn render_frame(&mut self, ticket: FrameTicket, surface: &mut dyn Surface) -> FrameStatus {
        if ticket.generation != self.generation {
            return FrameStatus::Stale;
        }
        let Some(pass) = self.pass.as_mut() else {
            return FrameStatus::Stale;
        };
        if pass.frame >= REVEAL_FRAMES {
            // The pass already finished; the final frame persists.
            return FrameStatus::Complete;
        }

        pass.frame += 1;
        if !pass.mapping.viewport().is_degenerate() {
            pass.draw(surface);
        }

        if pass.frame >= REVEAL_FRAMES {
            FrameStatus::Complete
        } else {
            FrameStatus::Continue(ticket)
        }
    }

    /// Frame cursor of the current pass (0 before the first
    /// [`RevealAnimator::render_frame`]), or `None` when idle.
    pub fn current_frame(&self) -> Option<u32> {
        self.pass.as_ref().map(|p| p.frame)
    }
}

/// Samples visible at a 1-based frame number: `len * frame / 60`, floored.
fn visible_count(len: usize, frame: u32) -> usize {
    len * frame as usize / REVEAL_FRAMES as usize
}

impl<D> Pass<D>
where
    D: Float + Display,
{
    fn draw(&self, surface: &mut dyn Surface) {
        let viewport = self.mapping.viewport();
        surface.clear_rect(ScreenRect::new(0.0, 0.0, viewport.width, viewport.height));
        axis::draw(surface, &self.mapping);

        let visible = visible_count(self.series.len(), self.frame);
        match self.mode {
            RenderMode::Line => self.draw_markers(surface, visible, true),
            RenderMode::Points => self.draw_markers(surface, visible, false),
            RenderMode::Bar => self.draw_bars(surface, visible),
        }
    }

    fn draw_markers(&self, surface: &mut dyn Surface, visible: usize, stroke: bool) {
        let mut points = Vec::with_capacity(visible);
        for (i, value) in self.series.iter().take(visible).enumerate() {
            let Some(y) = self.mapping.y_opt(value) else {
                return;
            };
            points.push(ScreenPoint::new(self.mapping.x(i), y));
        }

        if stroke && points.len() >= 2 {
            surface.stroke_polyline(&points, LINE_WIDTH);
        }
        for point in &points {
            surface.fill_circle(*point, POINT_RADIUS);
        }
    }

    fn draw_bars(&self, surface: &mut dyn Surface, visible: usize) {
        let viewport = self.mapping.viewport();
        let plot = viewport.plot_rect();
        let slot = plot.width / self.series.len().max(1) as f32;
        let bar_width = (slot * BAR_WIDTH_RATIO).max(MIN_BAR_WIDTH);
        let baseline = viewport.baseline();

        for (i, value) in self.series.iter().take(visible).enumerate() {
            let Some(y) = self.mapping.y_opt(value) else {
                return;
            };
            surface.fill_rect(ScreenRect::new(
                self.mapping.x(i) - bar_width / 2.0,
                y,
                bar_width,
                baseline - y,
            ));
        }
    }
}
