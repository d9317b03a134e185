// File: crates/minibar-core/src/grid.rs
// Summary: Grid line and value-label layout for the plot backdrop.

use crate::dataset::ValueRange;
use crate::geometry::{PlotArea, Point, Segment};
use crate::layout::TextAnchor;
use crate::text::{format_grid_label, right_aligned_x};
use crate::types::FontId;

/// Number of intervals in each direction; lines are drawn at both ends, so `GRID_STEPS + 1` of each.
pub const GRID_STEPS: usize = 10;
/// Gap between a grid label's right edge and the plot area.
pub const GRID_LABEL_PADDING: f64 = 10.0;

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct GridLayout {
    /// Bottom to top.
    pub horizontal: Vec<Segment>,
    /// Left to right.
    pub vertical: Vec<Segment>,
    /// One per horizontal line, same order.
    pub labels: Vec<TextAnchor>,
}

impl GridLayout {
    pub fn compute(area: &PlotArea, range: ValueRange) -> Self {
        let font = FontId::Small;
        let ys = linspace(area.bottom, area.top, GRID_STEPS + 1);
        let xs = linspace(area.left, area.right, GRID_STEPS + 1);

        let horizontal = ys
            .iter()
            .map(|&y| Segment::new(Point::new(area.left, y), Point::new(area.right, y)))
            .collect();
        let vertical = xs
            .iter()
            .map(|&x| Segment::new(Point::new(x, area.bottom), Point::new(x, area.top)))
            .collect();
        let labels = ys
            .iter()
            .enumerate()
            .map(|(i, &y)| {
                // Interpolated as a weighted sum; `max - min` can overflow for finite extremes.
                let t = i as f64 / GRID_STEPS as f64;
                let text = format_grid_label(range.min * (1.0 - t) + range.max * t);
                let x = right_aligned_x(font, &text, area.left, GRID_LABEL_PADDING);
                TextAnchor { origin: Point::new(x, y - font.glyph_height() / 2.0), text, font }
            })
            .collect();

        Self { horizontal, vertical, labels }
    }
}
