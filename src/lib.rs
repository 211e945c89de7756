//! Kurve (Curve) charting engine
//!
//! `kurve` is the rendering-agnostic core of an animated series chart. It
//! covers the three pieces a host UI shell cannot trivially own: mapping an
//! ordered sequence of values to drawing-surface coordinates (optionally
//! under a decimal-log transform), revealing the plotted series
//! progressively across a fixed frame budget, and answering nearest-sample
//! pointer queries for tooltips.
//!
//! The shell keeps everything else — input validation and clamping, tooltip
//! presentation, image export — and implements the [`Surface`] trait over
//! its own 2D drawing context. The engine never blocks and never schedules:
//! the shell calls [`RevealAnimator::render_frame`] from its own
//! display-refresh callback for as long as the returned [`FrameStatus`] asks
//! for another frame.
//!
//! # Core Concepts
//!
//! ## Scale Mapping
//!
//! [`ScaleMapping`] is built once per render pass from the series, the
//! current [`Viewport`], and a [`ScaleMode`]. Its `x`/`y` functions are
//! pure, so the reveal animation and hit testing always agree on where a
//! sample sits. Degenerate input (constant series, single element) is
//! handled with floor-of-1 guards rather than errors.
//!
//! ## Reveal Animation
//!
//! [`RevealAnimator`] advances an explicit frame cursor instead of owning a
//! callback loop: frame `f` of [`REVEAL_FRAMES`] shows the first
//! `len * f / 60` samples. Starting a new pass supersedes the old one
//! through a generation counter; a stale frame callback draws nothing and
//! stops rescheduling itself.
//!
//! ## Hit Testing
//!
//! [`hit::query`] returns the nearest plotted sample within
//! [`hit::HIT_THRESHOLD`] pixels as a plain [`HitResult`] value, recomputed
//! on every pointer move.
//!
//! # Examples
//!
//! ## Building a Mapping
//!
//! ```rust
//! use kurve::{Insets, ScaleMapping, ScaleMode, Viewport};
//!
//! let fib = [0.0, 1.0, 1.0, 2.0, 3.0, 5.0, 8.0, 13.0, 21.0, 34.0];
//! let viewport = Viewport::new(
//!     400.0,
//!     300.0,
//!     Insets { top: 28.0, right: 24.0, bottom: 36.0, left: 36.0 },
//! );
//!
//! let mapping = ScaleMapping::build(&fib, viewport, ScaleMode::Linear);
//! assert_eq!(mapping.x(0), 36.0);
//! assert_eq!(mapping.y(&34.0), 28.0);
//! ```
//!
//! ## Pointer Lookup
//!
//! ```rust
//! use kurve::{hit, Insets, ScaleMapping, ScaleMode, ScreenPoint, Viewport};
//!
//! let fib = [0.0, 1.0, 1.0, 2.0, 3.0, 5.0, 8.0, 13.0, 21.0, 34.0];
//! let viewport = Viewport::new(400.0, 300.0, Insets::default());
//! let mapping = ScaleMapping::build(&fib, viewport, ScaleMode::Linear);
//!
//! let pointer = ScreenPoint::new(mapping.x(3), mapping.y(&fib[3]));
//! let hit = hit::query(pointer, &mapping, &fib).unwrap();
//! assert_eq!(hit.index, 3);
//! assert_eq!(hit.value, 2.0);
//! ```

pub mod axis;
pub mod hit;
pub mod reveal;
pub mod scale;
pub mod surface;

pub use num_traits::Float;

pub use axis::{AxisLabel, GRID_DIVISIONS};
pub use hit::{HitResult, HIT_THRESHOLD};
pub use reveal::{
    FrameStatus, FrameTicket, RenderMode, RevealAnimator, LINE_WIDTH, MIN_BAR_WIDTH, POINT_RADIUS,
    REVEAL_FRAMES,
};
pub use scale::{ScaleMapping, ScaleMode};
pub use surface::{Insets, ScreenPoint, ScreenRect, Surface, Viewport};
