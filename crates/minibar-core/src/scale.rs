// File: crates/minibar-core/src/scale.rs
// Summary: Value (Y) scale and index (X) slot mappings into the plot area.

use crate::dataset::ValueRange;
use crate::geometry::{PlotArea, Rect};

/// Fraction used for every value when the dataset range collapses to a single value.
pub const DEGENERATE_FRACTION: f64 = 0.5;

/// Share of a bar slot taken by the bar itself.
pub const BAR_FILL: f64 = 0.8;
/// Share of a bar slot left empty, split evenly on both sides of the bar.
pub const BAR_GAP: f64 = 0.2;

/// Vertical linear scale mapping the dataset range onto [bottom, top] pixels.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub top_px: f64,
    pub bottom_px: f64,
    pub vmin: f64,
    pub vmax: f64,
}

impl LinearScale {
    pub fn new(area: &PlotArea, range: ValueRange) -> Self {
        if range.is_degenerate() {
            tracing::debug!(value = range.min, "constant dataset, centering values vertically");
        }
        Self { top_px: area.top, bottom_px: area.bottom, vmin: range.min, vmax: range.max }
    }

    /// Normalized position of `v` in `[vmin, vmax]`; `DEGENERATE_FRACTION` when the span is zero.
    /// Works on halved values so ranges wider than `f64::MAX` stay finite.
    #[inline]
    pub fn fraction(&self, v: f64) -> f64 {
        let half_span = self.vmax / 2.0 - self.vmin / 2.0;
        if half_span == 0.0 {
            DEGENERATE_FRACTION
        } else {
            (v / 2.0 - self.vmin / 2.0) / half_span
        }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f64 {
        self.bottom_px - self.fraction(v) * (self.bottom_px - self.top_px)
    }
}

/// Line-chart x positions: point `i` of `n` sits at `left + i/n * width`.
#[derive(Clone, Copy, Debug)]
pub struct LineSlots {
    pub left_px: f64,
    pub width_px: f64,
    pub count: usize,
}

impl LineSlots {
    pub fn new(area: &PlotArea, count: usize) -> Self {
        Self { left_px: area.left, width_px: area.width(), count }
    }

    #[inline]
    pub fn x(&self, index: usize) -> f64 {
        if self.count == 0 {
            return self.left_px;
        }
        self.left_px + (index as f64 / self.count as f64) * self.width_px
    }
}

/// Bar-chart slots: each of the `n` slots is `width/n` wide, 80% bar and 20% gap,
/// with half the gap on each side of the bar.
#[derive(Clone, Copy, Debug)]
pub struct BarSlots {
    pub left_px: f64,
    pub bar_width: f64,
    pub gap: f64,
}

impl BarSlots {
    pub fn new(area: &PlotArea, count: usize) -> Self {
        let slot = if count == 0 { 0.0 } else { area.width() / count as f64 };
        Self { left_px: area.left, bar_width: slot * BAR_FILL, gap: slot * BAR_GAP }
    }

    pub fn slot_width(&self) -> f64 {
        self.bar_width + self.gap
    }

    /// Left edge of bar `index`.
    #[inline]
    pub fn x1(&self, index: usize) -> f64 {
        self.left_px + self.gap / 2.0 + index as f64 * self.slot_width()
    }

    /// Bar rectangle from the mapped top `y` down to `baseline`.
    pub fn bar_rect(&self, index: usize, y: f64, baseline: f64) -> Rect {
        let x1 = self.x1(index);
        Rect::from_ltrb(x1, y, x1 + self.bar_width, baseline)
    }
}
