//! Scale mapping: series values to surface coordinates.
//!
//! A [`ScaleMapping`] is built once per render pass from the series, the
//! current [`Viewport`], and a [`ScaleMode`]. It captures the transformed
//! min/max of the series and exposes two pure functions:
//!
//! - `x(index)` — horizontal placement, strictly increasing in index
//! - `y(&value)` — vertical placement with Y-axis inversion (larger values
//!   sit higher on the surface)
//!
//! Because both functions are pure, the reveal animation and pointer hit
//! testing see identical coordinates for the same sample, which is what makes
//! tooltips land exactly on drawn points.
//!
//! The mapping is read-only after construction. Whenever the series or the
//! viewport changes, the host builds a fresh mapping for the next pass.
//!
//! # Degenerate Input
//!
//! The mapping never divides by zero:
//!
//! - a constant series (`max == min`) gets a value range floored at 1
//! - the horizontal step denominator is floored at 1, so a single-element
//!   series places its point at the left inset
//!
//! A viewport whose insets swallow the surface still builds (all outputs stay
//! finite); drawing against it is skipped by the animator instead.
//!
//! # Examples
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
//!
//! assert_eq!(mapping.domain(), (&0.0, &34.0));
//! assert_eq!(mapping.x(0), 36.0);
//! assert!((mapping.x(9) - 376.0).abs() < 1e-3);
//!
//! // Largest value maps to the top of the plot rect.
//! assert_eq!(mapping.y(&34.0), 28.0);
//! // Smallest value maps to the bottom.
//! assert_eq!(mapping.y(&0.0), 264.0);
//! ```
//!
//! ```rust
//! use kurve::ScaleMode;
//!
//! // Non-positive values transform to 0 under the decimal log, matching
//! // the placement of value 1 (log10(1) == 0).
//! assert_eq!(ScaleMode::Log10.apply(0.0), 0.0);
//! assert_eq!(ScaleMode::Log10.apply(1.0), 0.0);
//! assert_eq!(ScaleMode::Log10.apply(100.0), 2.0);
//! ```

use num_traits::Float;

use crate::surface::{ScreenRect, Viewport};

pub(crate) mod util;

/// Vertical value transform applied before scaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScaleMode {
    /// Identity: values scale linearly.
    #[default]
    Linear,
    /// Decimal logarithm, for compressing large dynamic range.
    ///
    /// Values `v > 0` map to `log10(v)`; zero and negative values map to a
    /// transformed value of 0. That is a documented placement policy, not an
    /// error: a leading 0 in a series lands at the same height as a 1.
    Log10,
}

impl ScaleMode {
    /// Applies the transform to a single value.
    pub fn apply<D: Float>(&self, value: D) -> D {
        match self {
            ScaleMode::Linear => value,
            ScaleMode::Log10 => {
                if value > D::zero() {
                    value.log10()
                } else {
                    D::zero()
                }
            }
        }
    }

    /// True for [`ScaleMode::Log10`].
    pub fn is_log(&self) -> bool {
        matches!(self, ScaleMode::Log10)
    }
}

/// Coordinate mapping for one render pass.
///
/// Produced by [`ScaleMapping::build`] from `(series, viewport, mode)`.
/// Holds the transformed-space domain and the per-index horizontal step;
/// lives for exactly one render pass and is rebuilt on any series or
/// viewport change.
///
/// # Type Parameters
///
/// - `D`: value domain type, any [`Float`] implementor (typically `f64`)
///
/// # Method Variants
///
/// `y` panics if the value cannot be cast into pixel space (it cannot for
/// the primitive float types); [`ScaleMapping::y_opt`] returns `Option` for
/// exotic domain types.
#[derive(Debug, Clone)]
pub struct ScaleMapping<D = f64> {
    mode: ScaleMode,
    plot: ScreenRect,
    viewport: Viewport,
    min: D,
    max: D,
    range: D,
    step: f32,
    len: usize,
}

impl<D: Float> ScaleMapping<D> {
    /// Builds the mapping for a render pass.
    ///
    /// `series` is the ordered value sequence (the caller clamps its length;
    /// the engine assumes 1–50 but tolerates anything, including empty).
    /// Values are transformed by `mode` before the min/max scan, so the
    /// domain reported by [`ScaleMapping::domain`] is in transformed space.
    ///
    /// Never faults: the value range is floored at 1 when `max == min` and
    /// the step denominator at 1 for single-element series.
    ///
    /// # Examples
    ///
    /// ```
    /// use kurve::{ScaleMapping, ScaleMode, Viewport, Insets};
    ///
    /// let viewport = Viewport::new(400.0, 300.0, Insets::default());
    ///
    /// // A constant series still builds; its range is floored at 1.
    /// let mapping = ScaleMapping::build(&[7.0, 7.0, 7.0], viewport, ScaleMode::Linear);
    /// assert_eq!(mapping.range(), 1.0);
    /// assert!(mapping.y(&7.0).is_finite());
    /// ```
    pub fn build(series: &[D], viewport: Viewport, mode: ScaleMode) -> Self {
        let plot = viewport.plot_rect();

        let (min, max) = util::extent(
            &series.iter().map(|v| mode.apply(*v)).collect::<Vec<_>>(),
        )
        .unwrap_or((D::zero(), D::zero()));

        let range = if max == min { D::one() } else { max - min };
        let step = plot.width / series.len().saturating_sub(1).max(1) as f32;

        Self {
            mode,
            plot,
            viewport,
            min,
            max,
            range,
            step,
            len: series.len(),
        }
    }

    /// Horizontal surface coordinate for a sample index.
    ///
    /// Strictly increasing in `index` for series of length ≥ 2; index 0 is
    /// always at the left inset.
    pub fn x(&self, index: usize) -> f32 {
        self.plot.x + index as f32 * self.step
    }

    /// Vertical surface coordinate for a value, or `None` when the
    /// normalized fraction cannot be represented in pixel space.
    ///
    /// Applies the mode's transform first, then maps into the plot rect with
    /// Y inversion: the transformed maximum lands at the top edge, the
    /// minimum at the bottom edge.
    pub fn y_opt(&self, value: &D) -> Option<f32> {
        let t = self.mode.apply(*value);
        let frac = ((t - self.min) / self.range).to_f32()?;
        Some(self.plot.y + self.plot.height * (1.0 - frac))
    }

    /// Vertical surface coordinate for a value.
    ///
    /// # Panics
    ///
    /// Panics if the pixel-space cast fails; use [`ScaleMapping::y_opt`] for
    /// domain types where that can happen.
    pub fn y(&self, value: &D) -> f32 {
        self.y_opt(value).unwrap()
    }

    /// Transformed-space domain as `(min, max)`.
    pub fn domain(&self) -> (&D, &D) {
        (&self.min, &self.max)
    }

    /// Transformed-space value range, floored at 1 for constant series.
    pub fn range(&self) -> D {
        self.range
    }

    /// Horizontal distance between adjacent sample indices, in pixels.
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Number of samples the mapping was built for.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when built from an empty series.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The transform mode the mapping was built with.
    pub fn mode(&self) -> ScaleMode {
        self.mode
    }

    /// The viewport the mapping was built against.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Insets;

    fn fib(n: usize) -> Vec<f64> {
        let mut out = Vec::with_capacity(n);
        for i in 0..n {
            match i {
                0 => out.push(0.0),
                1 => out.push(1.0),
                _ => out.push(out[i - 1] + out[i - 2]),
            }
        }
        out
    }

    fn spec_viewport() -> Viewport {
        Viewport::new(
            400.0,
            300.0,
            Insets {
                top: 28.0,
                right: 24.0,
                bottom: 36.0,
                left: 36.0,
            },
        )
    }

    #[test]
    fn worked_example_fib_10() {
        let series = fib(10);
        let mapping = ScaleMapping::build(&series, spec_viewport(), ScaleMode::Linear);

        assert_eq!(mapping.domain(), (&0.0, &34.0));
        assert_eq!(mapping.range(), 34.0);
        assert!((mapping.step() - 340.0 / 9.0).abs() < 1e-4);

        assert_eq!(mapping.x(0), 36.0);
        assert!((mapping.x(9) - 376.0).abs() < 1e-3);

        assert_eq!(mapping.y(&34.0), 28.0);
        assert_eq!(mapping.y(&0.0), 264.0);
    }

    #[test]
    fn x_strictly_increasing() {
        for n in 2..=50 {
            let series = fib(n);
            let mapping = ScaleMapping::build(&series, spec_viewport(), ScaleMode::Linear);
            for i in 1..n {
                assert!(
                    mapping.x(i) > mapping.x(i - 1),
                    "x({}) not greater than x({}) for len {}",
                    i,
                    i - 1,
                    n
                );
            }
        }
    }

    #[test]
    fn single_element_sits_at_left_inset() {
        let mapping = ScaleMapping::build(&[5.0], spec_viewport(), ScaleMode::Linear);
        assert_eq!(mapping.x(0), 36.0);
        // Constant domain: range floored, y stays finite.
        assert!(mapping.y(&5.0).is_finite());
    }

    #[test]
    fn finite_outputs_for_all_lengths() {
        for n in 1..=50 {
            let series = fib(n);
            for mode in [ScaleMode::Linear, ScaleMode::Log10] {
                let mapping = ScaleMapping::build(&series, spec_viewport(), mode);
                for (i, v) in series.iter().enumerate() {
                    assert!(mapping.x(i).is_finite());
                    assert!(mapping.y(v).is_finite());
                }
            }
        }
    }

    #[test]
    fn constant_series_range_floored() {
        let mapping = ScaleMapping::build(&[7.0, 7.0, 7.0], spec_viewport(), ScaleMode::Linear);
        assert_eq!(mapping.range(), 1.0);
        // Zero fraction puts the constant value at the plot bottom.
        assert_eq!(mapping.y(&7.0), 264.0);
    }

    #[test]
    fn y_monotonic_in_value() {
        let series = fib(10);
        let mapping = ScaleMapping::build(&series, spec_viewport(), ScaleMode::Linear);

        let mut sorted = series.clone();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
        for pair in sorted.windows(2) {
            assert!(mapping.y(&pair[0]) >= mapping.y(&pair[1]));
        }
    }

    #[test]
    fn log_mode_zero_matches_one() {
        let series = fib(10);
        let mapping = ScaleMapping::build(&series, spec_viewport(), ScaleMode::Log10);

        // fib[0] = 0 transforms to 0, the same as fib[1] = 1.
        assert_eq!(mapping.y(&series[0]), mapping.y(&series[1]));
        assert_eq!(*mapping.domain().0, 0.0);
        assert!((mapping.domain().1 - 34.0f64.log10()).abs() < 1e-12);
    }

    #[test]
    fn log_transform_policy() {
        assert_eq!(ScaleMode::Log10.apply(-3.0), 0.0);
        assert_eq!(ScaleMode::Log10.apply(0.0), 0.0);
        assert_eq!(ScaleMode::Log10.apply(1.0), 0.0);
        assert!((ScaleMode::Log10.apply(1000.0) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn mapping_is_pure() {
        let series = fib(10);
        let mapping = ScaleMapping::build(&series, spec_viewport(), ScaleMode::Log10);

        for (i, v) in series.iter().enumerate() {
            assert_eq!(mapping.x(i), mapping.x(i));
            assert_eq!(mapping.y(v), mapping.y(v));
        }
    }

    #[test]
    fn degenerate_viewport_still_builds_finite() {
        let viewport = Viewport::new(10.0, 10.0, Insets::default());
        assert!(viewport.is_degenerate());

        let mapping = ScaleMapping::build(&fib(10), viewport, ScaleMode::Linear);
        for i in 0..10 {
            assert!(mapping.x(i).is_finite());
        }
        assert!(mapping.y(&34.0).is_finite());
    }
}
