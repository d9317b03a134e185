// File: crates/minibar-core/src/layout.rs
// Summary: Pixel-space layout for line and bar series, annotations, and the title.
// Notes:
// - Everything here is pure geometry; `ChartEngine` turns it into surface calls.
// - Points are visited with an explicit running index, never a key lookup.

use crate::dataset::{Dataset, ValueRange};
use crate::error::ChartResult;
use crate::geometry::{PlotArea, Point, Rect, Segment};
use crate::scale::{BarSlots, LineSlots, LinearScale};
use crate::text::{centered_in_span_x, centered_text_x, format_value};
use crate::types::{CanvasSpec, FontId};

/// Diameter of the filled circle drawn at every line-chart point.
pub const MARKER_DIAMETER: f64 = 5.0;
/// Value labels sit this far above the point or bar top.
pub const VALUE_LABEL_OFFSET: f64 = 15.0;
/// Key labels sit this far below the plot area's bottom edge.
pub const KEY_LABEL_OFFSET: f64 = 5.0;

/// Text with its top-left origin.
#[derive(Clone, Debug, PartialEq)]
pub struct TextAnchor {
    pub origin: Point,
    pub text: String,
    pub font: FontId,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Annotations {
    pub show_values: bool,
    pub show_keys: bool,
}

impl Annotations {
    pub const ALL: Annotations = Annotations { show_values: true, show_keys: true };
    pub const NONE: Annotations = Annotations { show_values: false, show_keys: false };
}

/// Geometry of one rendered series. Line charts fill `markers`/`segments`,
/// bar charts fill `bars`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SeriesLayout {
    pub range: Option<ValueRange>,
    pub markers: Vec<Point>,
    pub segments: Vec<Segment>,
    pub bars: Vec<Rect>,
    pub value_labels: Vec<TextAnchor>,
    pub key_labels: Vec<TextAnchor>,
}

pub fn line_layout(canvas: &CanvasSpec, data: &Dataset, notes: Annotations) -> ChartResult<SeriesLayout> {
    let range = data.range()?;
    let area = canvas.plot_area();
    let scale = LinearScale::new(&area, range);
    let slots = LineSlots::new(&area, data.len());
    let font = FontId::Small;

    let mut out = SeriesLayout { range: Some(range), ..SeriesLayout::default() };
    let mut previous: Option<Point> = None;
    for (i, point) in data.iter().enumerate() {
        let p = Point::new(slots.x(i), scale.to_px(point.value));
        if let Some(prev) = previous {
            out.segments.push(Segment::new(prev, p));
        }
        previous = Some(p);
        out.markers.push(p);

        if notes.show_values {
            let text = format_value(point.value);
            let x = centered_text_x(font, &text, p.x);
            out.value_labels.push(TextAnchor { origin: Point::new(x, p.y - VALUE_LABEL_OFFSET), text, font });
        }
        if notes.show_keys {
            out.key_labels.push(key_anchor(&area, font, &point.key, |t| centered_text_x(font, t, p.x)));
        }
    }
    tracing::trace!(points = out.markers.len(), segments = out.segments.len(), "line layout");
    Ok(out)
}

pub fn bar_layout(canvas: &CanvasSpec, data: &Dataset, notes: Annotations) -> ChartResult<SeriesLayout> {
    let range = data.range()?;
    let area = canvas.plot_area();
    let scale = LinearScale::new(&area, range);
    let slots = BarSlots::new(&area, data.len());
    let font = FontId::Small;

    let mut out = SeriesLayout { range: Some(range), ..SeriesLayout::default() };
    for (i, point) in data.iter().enumerate() {
        let bar = slots.bar_rect(i, scale.to_px(point.value), area.bottom);
        out.bars.push(bar);

        if notes.show_values {
            let text = format_value(point.value);
            let x = centered_in_span_x(font, &text, bar.left, bar.width());
            out.value_labels.push(TextAnchor { origin: Point::new(x, bar.top - VALUE_LABEL_OFFSET), text, font });
        }
        if notes.show_keys {
            out.key_labels.push(key_anchor(&area, font, &point.key, |t| {
                centered_in_span_x(font, t, bar.left, bar.width())
            }));
        }
    }
    tracing::trace!(bars = out.bars.len(), "bar layout");
    Ok(out)
}

fn key_anchor(area: &PlotArea, font: FontId, key: &str, x_for: impl Fn(&str) -> f64) -> TextAnchor {
    TextAnchor {
        origin: Point::new(x_for(key), area.bottom + KEY_LABEL_OFFSET),
        text: key.to_string(),
        font,
    }
}

/// Title centered horizontally in the top margin band.
pub fn title_anchor(canvas: &CanvasSpec, text: &str) -> TextAnchor {
    let font = FontId::Large;
    TextAnchor {
        origin: Point::new(
            centered_text_x(font, text, canvas.width as f64 / 2.0),
            canvas.margin as f64 / 2.0,
        ),
        text: text.to_string(),
        font,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ChartError;
    use approx::assert_relative_eq;

    fn canvas() -> CanvasSpec {
        CanvasSpec::new(300, 200, 20).unwrap()
    }

    fn months() -> Dataset {
        Dataset::from_pairs([("Jan", 10.0), ("Feb", 20.0), ("Mar", 15.0)]).unwrap()
    }

    #[test]
    fn line_points_and_segments() {
        let l = line_layout(&canvas(), &months(), Annotations::NONE).unwrap();
        assert_eq!(l.markers.len(), 3);
        assert_eq!(l.segments.len(), 2);
        assert_eq!(l.segments[1].from, l.markers[1]);
        assert_eq!(l.segments[1].to, l.markers[2]);
        assert!(l.value_labels.is_empty() && l.key_labels.is_empty());
        assert!(l.bars.is_empty());
    }

    #[test]
    fn line_annotations_are_centered() {
        let l = line_layout(&canvas(), &months(), Annotations::ALL).unwrap();
        let feb = l.markers[1];
        let v = &l.value_labels[1];
        assert_eq!(v.text, "20");
        assert_relative_eq!(v.origin.x, feb.x - 6.0, epsilon = 1e-9);
        assert_relative_eq!(v.origin.y, feb.y - 15.0, epsilon = 1e-9);
        let k = &l.key_labels[0];
        assert_eq!(k.text, "Jan");
        assert_relative_eq!(k.origin.x, 20.0 - 9.0, epsilon = 1e-9);
        assert_relative_eq!(k.origin.y, 185.0, epsilon = 1e-9);
    }

    #[test]
    fn bar_rects_reach_plot_bottom() {
        let l = bar_layout(&canvas(), &months(), Annotations::ALL).unwrap();
        assert_eq!(l.bars.len(), 3);
        for bar in &l.bars {
            assert_relative_eq!(bar.bottom, 180.0, epsilon = 1e-9);
        }
        // Min value bar has zero height; max value bar spans the plot height.
        assert_relative_eq!(l.bars[0].height(), 0.0, epsilon = 1e-9);
        assert_relative_eq!(l.bars[1].top, 20.0, epsilon = 1e-9);
        let label = &l.value_labels[2];
        assert_relative_eq!(label.origin.x + 12.0 / 2.0, l.bars[2].center_x(), epsilon = 1e-9);
        assert_relative_eq!(label.origin.y, l.bars[2].top - 15.0, epsilon = 1e-9);
    }

    #[test]
    fn empty_dataset_rejected() {
        let empty = Dataset::new();
        assert!(matches!(line_layout(&canvas(), &empty, Annotations::ALL), Err(ChartError::EmptyDataset)));
        assert!(matches!(bar_layout(&canvas(), &empty, Annotations::ALL), Err(ChartError::EmptyDataset)));
    }

    #[test]
    fn title_centered_in_top_band() {
        let t = title_anchor(&canvas(), "Sales");
        // 5 glyphs * 9px = 45px.
        assert_relative_eq!(t.origin.x, (300.0 - 45.0) / 2.0, epsilon = 1e-9);
        assert_relative_eq!(t.origin.y, 10.0, epsilon = 1e-9);
        assert_eq!(t.font, FontId::Large);
    }
}
