//! Nearest-sample pointer queries for tooltips.
//!
//! [`query`] measures the Euclidean distance from a pointer position to
//! every plotted sample — through the same [`ScaleMapping`] the animation
//! drew with, so a hit lands exactly on a drawn point — and reports the
//! closest one when it falls within [`HIT_THRESHOLD`] pixels. Results are
//! plain values recomputed per pointer move; nothing is cached between
//! queries.
//!
//! # Examples
//!
//! ```rust
//! use kurve::{hit, Insets, ScaleMapping, ScaleMode, ScreenPoint, Viewport};
//!
//! let series = [0.0, 1.0, 1.0, 2.0, 3.0, 5.0, 8.0, 13.0, 21.0, 34.0];
//! let viewport = Viewport::new(
//!     400.0,
//!     300.0,
//!     Insets { top: 28.0, right: 24.0, bottom: 36.0, left: 36.0 },
//! );
//! let mapping = ScaleMapping::build(&series, viewport, ScaleMode::Linear);
//!
//! // Pointer exactly on the first sample.
//! let hit = hit::query(ScreenPoint::new(36.0, 264.0), &mapping, &series).unwrap();
//! assert_eq!(hit.index, 0);
//! assert_eq!(hit.distance, 0.0);
//!
//! // Pointer far from every sample: no hit, no tooltip.
//! assert!(hit::query(ScreenPoint::new(200.0, 10.0), &mapping, &series).is_none());
//! ```

use num_traits::Float;

use crate::scale::ScaleMapping;
use crate::surface::ScreenPoint;

/// Maximum pointer distance, in pixels, for a sample to count as hit.
pub const HIT_THRESHOLD: f32 = 10.0;

/// The nearest plotted sample to a pointer position.
///
/// `x`/`y` are the sample's exact surface coordinates, suitable for
/// anchoring a tooltip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitResult<D = f64> {
    /// Index of the sample within the series.
    pub index: usize,
    /// The sample's original (untransformed) value.
    pub value: D,
    /// Horizontal surface coordinate of the sample.
    pub x: f32,
    /// Vertical surface coordinate of the sample.
    pub y: f32,
    /// Euclidean distance from the pointer to the sample, in pixels.
    pub distance: f32,
}

/// Finds the plotted sample nearest to `pointer`.
///
/// Returns `None` when the nearest sample is farther than [`HIT_THRESHOLD`]
/// pixels. Ties are broken deterministically: the comparison is strict, so
/// the first-encountered (lowest-index) minimum wins.
///
/// `series` must be the sequence `mapping` was built from; samples whose
/// vertical coordinate cannot be cast into pixel space are skipped.
pub fn query<D: Float>(
    pointer: ScreenPoint,
    mapping: &ScaleMapping<D>,
    series: &[D],
) -> Option<HitResult<D>> {
    let mut best: Option<HitResult<D>> = None;

    for (index, value) in series.iter().enumerate() {
        let x = mapping.x(index);
        let Some(y) = mapping.y_opt(value) else {
            continue;
        };
        let distance = (x - pointer.x).hypot(y - pointer.y);

        if best.as_ref().map_or(true, |b| distance < b.distance) {
            best = Some(HitResult {
                index,
                value: *value,
                x,
                y,
                distance,
            });
        }
    }

    best.filter(|hit| hit.distance <= HIT_THRESHOLD)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::ScaleMode;
    use crate::surface::{Insets, Viewport};

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

    fn fib_mapping() -> ([f64; 10], ScaleMapping<f64>) {
        let series = [0.0, 1.0, 1.0, 2.0, 3.0, 5.0, 8.0, 13.0, 21.0, 34.0];
        let mapping = ScaleMapping::build(&series, spec_viewport(), ScaleMode::Linear);
        (series, mapping)
    }

    #[test]
    fn exact_coordinates_hit_their_sample() {
        let (series, mapping) = fib_mapping();

        for (i, v) in series.iter().enumerate() {
            let pointer = ScreenPoint::new(mapping.x(i), mapping.y(v));
            let hit = query(pointer, &mapping, &series).unwrap();
            // Duplicate values at duplicate heights still resolve to the
            // lowest index only when coordinates coincide; here x differs
            // per index, so each sample matches itself.
            assert_eq!(hit.index, i);
            assert_eq!(hit.value, *v);
            assert_eq!(hit.distance, 0.0);
        }
    }

    #[test]
    fn far_pointer_reports_none() {
        let (series, mapping) = fib_mapping();
        assert!(query(ScreenPoint::new(200.0, 10.0), &mapping, &series).is_none());
        assert!(query(ScreenPoint::new(-50.0, -50.0), &mapping, &series).is_none());
    }

    #[test]
    fn near_pointer_reports_distance() {
        let (series, mapping) = fib_mapping();
        let pointer = ScreenPoint::new(mapping.x(4) + 3.0, mapping.y(&series[4]) - 4.0);

        let hit = query(pointer, &mapping, &series).unwrap();
        assert_eq!(hit.index, 4);
        assert!((hit.distance - 5.0).abs() < 1e-4);
        assert_eq!(hit.x, mapping.x(4));
        assert_eq!(hit.y, mapping.y(&series[4]));
    }

    #[test]
    fn exact_tie_prefers_lowest_index() {
        // Two equal samples at equal height, 10px apart horizontally; the
        // pointer midway is exactly 5px from both.
        let series = [5.0, 5.0];
        let viewport = Viewport::new(
            70.0,
            100.0,
            Insets {
                top: 28.0,
                right: 24.0,
                bottom: 36.0,
                left: 36.0,
            },
        );
        let mapping = ScaleMapping::build(&series, viewport, ScaleMode::Linear);
        assert_eq!(mapping.x(0), 36.0);
        assert_eq!(mapping.x(1), 46.0);

        let y = mapping.y(&5.0);
        let hit = query(ScreenPoint::new(41.0, y), &mapping, &series).unwrap();
        assert_eq!(hit.index, 0);
        assert_eq!(hit.distance, 5.0);
    }

    #[test]
    fn empty_series_reports_none() {
        let series: [f64; 0] = [];
        let mapping = ScaleMapping::build(&series, spec_viewport(), ScaleMode::Linear);
        assert!(query(ScreenPoint::new(36.0, 264.0), &mapping, &series).is_none());
    }

    #[test]
    fn hit_uses_transformed_placement_under_log() {
        let (series, _) = fib_mapping();
        let mapping = ScaleMapping::build(&series, spec_viewport(), ScaleMode::Log10);

        // Index 0 (value 0) and index 1 (value 1) share a height under the
        // log transform; pointing at index 1's coordinates still prefers the
        // nearer x, so index 1 wins.
        let pointer = ScreenPoint::new(mapping.x(1), mapping.y(&series[1]));
        let hit = query(pointer, &mapping, &series).unwrap();
        assert_eq!(hit.index, 1);
    }
}
