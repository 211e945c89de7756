//! Horizontal gridlines and value labels.
//!
//! The plot carries a fixed grid of [`GRID_DIVISIONS`] horizontal bands
//! (six lines including both edges), each labeled with the value at its
//! height. Label text follows the mapping's transform: under
//! [`ScaleMode::Log10`](crate::ScaleMode::Log10) a line shows the exponent
//! form `10^x`, otherwise the value rounded to an integer — the same
//! transform that placed the samples, so labels and geometry never disagree.

use std::fmt::Display;

use num_traits::Float;

use crate::scale::ScaleMapping;
use crate::surface::{ScreenPoint, Surface, Viewport};

/// Number of horizontal grid bands; the grid has `GRID_DIVISIONS + 1` lines.
pub const GRID_DIVISIONS: usize = 5;

/// X position of axis labels, left of the plot rect.
const LABEL_X: f32 = 6.0;
/// Vertical nudge so label text centers on its gridline.
const LABEL_OFFSET_Y: f32 = 4.0;
/// Stroke width of gridlines.
const GRID_LINE_WIDTH: f32 = 1.0;

/// A positioned axis label, ready for [`Surface::fill_text`].
#[derive(Debug, Clone, PartialEq)]
pub struct AxisLabel {
    /// Rendered label text.
    pub text: String,
    /// Text anchor position on the surface.
    pub at: ScreenPoint,
}

/// Endpoints of the horizontal gridlines, top to bottom.
pub fn grid_lines(viewport: &Viewport) -> Vec<[ScreenPoint; 2]> {
    let plot = viewport.plot_rect();
    (0..=GRID_DIVISIONS)
        .map(|i| {
            let y = plot.y + i as f32 * plot.height / GRID_DIVISIONS as f32;
            [
                ScreenPoint::new(plot.x, y),
                ScreenPoint::new(plot.x + plot.width, y),
            ]
        })
        .collect()
}

/// Value labels for the gridlines, top to bottom.
///
/// The top line carries the domain maximum (`min + range`), the bottom line
/// the minimum; intermediate lines divide the range evenly in transformed
/// space.
pub fn labels<D>(mapping: &ScaleMapping<D>) -> Vec<AxisLabel>
where
    D: Float + Display,
{
    let plot = mapping.viewport().plot_rect();
    let (min, _) = mapping.domain();
    let min = *min;
    let divisions = D::from(GRID_DIVISIONS).unwrap();

    (0..=GRID_DIVISIONS)
        .map(|i| {
            let remaining = D::from(GRID_DIVISIONS - i).unwrap();
            let value = min + mapping.range() * remaining / divisions;
            let text = if mapping.mode().is_log() {
                format!("10^{value:.1}")
            } else {
                format!("{}", value.round())
            };
            let y = plot.y + i as f32 * plot.height / GRID_DIVISIONS as f32 + LABEL_OFFSET_Y;
            AxisLabel {
                text,
                at: ScreenPoint::new(LABEL_X, y),
            }
        })
        .collect()
}

/// Strokes the grid and fills the labels on `surface`.
pub fn draw<D>(surface: &mut dyn Surface, mapping: &ScaleMapping<D>)
where
    D: Float + Display,
{
    for line in grid_lines(mapping.viewport()) {
        surface.stroke_polyline(&line, GRID_LINE_WIDTH);
    }
    for label in labels(mapping) {
        surface.fill_text(&label.text, label.at);
    }
}
