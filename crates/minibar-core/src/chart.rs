// File: crates/minibar-core/src/chart.rs
// Summary: ChartEngine: owns the surface and margin, lays out grid/series/labels, and renders PNG.

use crate::color::{resolve_color_or, Rgb, SeriesKind};
use crate::dataset::{Dataset, ValueRange};
use crate::error::ChartResult;
use crate::grid::GridLayout;
use crate::layout::{bar_layout, line_layout, title_anchor, Annotations, SeriesLayout, TextAnchor, MARKER_DIAMETER};
use crate::skia_surface::SkiaSurface;
use crate::surface::Surface;
use crate::theme::Theme;
use crate::types::{CanvasSpec, HEIGHT, MARGIN, WIDTH};

/// Layout engine bound to one exclusively owned drawing surface.
///
/// Drawing is cumulative: background, then grid, then series, then labels,
/// each call painting over the previous ones.
pub struct ChartEngine<S: Surface = SkiaSurface> {
    canvas: CanvasSpec,
    surface: S,
    theme: Theme,
    background: Rgb,
}

impl ChartEngine<SkiaSurface> {
    /// Skia-backed engine with a black background.
    pub fn new(width: u32, height: u32, margin: u32) -> ChartResult<Self> {
        Self::create(width, height, margin)
    }

    /// 1000x500 canvas with a 50px margin.
    pub fn default_size() -> ChartResult<Self> {
        Self::create(WIDTH, HEIGHT, MARGIN)
    }
}

impl<S: Surface> ChartEngine<S> {
    /// Validate the canvas, allocate the surface, and paint the theme background.
    pub fn create(width: u32, height: u32, margin: u32) -> ChartResult<Self> {
        let canvas = CanvasSpec::new(width, height, margin)?;
        let surface = S::create(width, height)?;
        let theme = Theme::default();
        let mut engine = Self { canvas, surface, theme, background: theme.background };
        engine.surface.fill(engine.background);
        Ok(engine)
    }

    pub fn canvas(&self) -> &CanvasSpec { &self.canvas }
    pub fn surface(&self) -> &S { &self.surface }

    /// Recreate the surface at a new size, keeping the margin and background color.
    /// Everything drawn so far is discarded.
    pub fn set_size(&mut self, width: u32, height: u32) -> ChartResult<()> {
        let canvas = CanvasSpec::new(width, height, self.canvas.margin)?;
        self.surface = S::create(width, height)?;
        self.canvas = canvas;
        self.surface.fill(self.background);
        Ok(())
    }

    /// Fill the whole canvas, erasing anything drawn before.
    pub fn set_background_color(&mut self, r: u8, g: u8, b: u8) {
        self.background = Rgb::new(r, g, b);
        self.surface.fill(self.background);
    }

    /// Title text centered in the top margin band. Long titles may run past the canvas edges.
    pub fn set_label(&mut self, text: &str, r: u8, g: u8, b: u8) {
        let anchor = title_anchor(&self.canvas, text);
        self.draw_anchor(&anchor, Rgb::new(r, g, b));
    }

    /// Title in the theme's label color (white by default).
    pub fn set_title(&mut self, text: &str) {
        let c = self.theme.label;
        self.set_label(text, c.r, c.g, c.b);
    }

    /// Grid backdrop followed by a polyline with 5px point markers.
    /// Malformed `hex_color` falls back to the theme's line color (red).
    pub fn draw_lines(
        &mut self,
        data: &Dataset,
        hex_color: &str,
        show_values: bool,
        show_keys: bool,
    ) -> ChartResult<SeriesLayout> {
        let notes = Annotations { show_values, show_keys };
        let layout = line_layout(&self.canvas, data, notes)?;
        let color = resolve_color_or(hex_color, self.theme.fallback(SeriesKind::Line));
        self.draw_grid_for(&layout)?;

        for segment in &layout.segments {
            self.surface.draw_line(segment.from, segment.to, color);
        }
        for marker in &layout.markers {
            self.surface.draw_filled_ellipse(*marker, MARKER_DIAMETER, MARKER_DIAMETER, color);
        }
        self.draw_annotations(&layout);
        Ok(layout)
    }

    /// Grid backdrop followed by one filled bar per point.
    /// Malformed `hex_color` falls back to the theme's bar color (green).
    pub fn draw_bars(
        &mut self,
        data: &Dataset,
        hex_color: &str,
        show_values: bool,
        show_keys: bool,
    ) -> ChartResult<SeriesLayout> {
        let notes = Annotations { show_values, show_keys };
        let layout = bar_layout(&self.canvas, data, notes)?;
        let color = resolve_color_or(hex_color, self.theme.fallback(SeriesKind::Bar));
        self.draw_grid_for(&layout)?;

        for bar in &layout.bars {
            self.surface.draw_filled_rect(*bar, color);
        }
        self.draw_annotations(&layout);
        Ok(layout)
    }

    /// Dispatch to `draw_lines` or `draw_bars`.
    pub fn draw_series(
        &mut self,
        kind: SeriesKind,
        data: &Dataset,
        hex_color: &str,
        notes: Annotations,
    ) -> ChartResult<SeriesLayout> {
        match kind {
            SeriesKind::Line => self.draw_lines(data, hex_color, notes.show_values, notes.show_keys),
            SeriesKind::Bar => self.draw_bars(data, hex_color, notes.show_values, notes.show_keys),
        }
    }

    /// 11 horizontal and 11 vertical lines over the plot area, with value labels on the left.
    pub fn draw_grid(&mut self, range: ValueRange) -> GridLayout {
        let grid = GridLayout::compute(&self.canvas.plot_area(), range);
        let color = self.theme.grid;
        for (h, v) in grid.horizontal.iter().zip(&grid.vertical) {
            self.surface.draw_line(h.from, h.to, color);
            self.surface.draw_line(v.from, v.to, color);
        }
        for label in &grid.labels {
            self.draw_anchor(label, color);
        }
        grid
    }

    /// PNG bytes of the current canvas (content type `image/png`).
    pub fn render(&mut self) -> ChartResult<Vec<u8>> {
        self.surface.encode_png()
    }

    /// Render and write the PNG to `output_png_path`, creating parent directories.
    pub fn render_to_png(&mut self, output_png_path: impl AsRef<std::path::Path>) -> ChartResult<()> {
        let bytes = self.render()?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        tracing::debug!(path = %path.display(), "wrote chart PNG");
        Ok(())
    }

    // ---- helpers ----------------------------------------------------------------

    fn draw_grid_for(&mut self, layout: &SeriesLayout) -> ChartResult<()> {
        let range = layout.range.ok_or(crate::error::ChartError::EmptyDataset)?;
        self.draw_grid(range);
        Ok(())
    }

    fn draw_annotations(&mut self, layout: &SeriesLayout) {
        let color = self.theme.annotation;
        for anchor in layout.value_labels.iter().chain(&layout.key_labels) {
            self.draw_anchor(anchor, color);
        }
    }

    fn draw_anchor(&mut self, anchor: &TextAnchor, color: Rgb) {
        self.surface.draw_text(anchor.font, anchor.origin, &anchor.text, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ChartError;
    use crate::surface::{DrawCall, RecordingSurface};

    type Recorder = ChartEngine<RecordingSurface>;

    #[test]
    fn create_fills_black() {
        let engine = Recorder::create(300, 200, 20).unwrap();
        assert_eq!(engine.surface().calls, vec![DrawCall::Fill(Rgb::BLACK)]);
    }

    #[test]
    fn create_rejects_degenerate_canvas() {
        assert!(matches!(Recorder::create(40, 200, 20), Err(ChartError::DegenerateCanvas { .. })));
        assert!(matches!(Recorder::create(0, 200, 20), Err(ChartError::InvalidCanvas { .. })));
    }

    #[test]
    fn set_size_keeps_background_and_margin() {
        let mut engine = Recorder::create(300, 200, 20).unwrap();
        engine.set_background_color(1, 2, 3);
        engine.set_size(400, 300).unwrap();
        assert_eq!(engine.canvas().width, 400);
        assert_eq!(engine.canvas().margin, 20);
        assert_eq!(engine.surface().calls, vec![DrawCall::Fill(Rgb::new(1, 2, 3))]);
        assert!(engine.set_size(30, 300).is_err());
        assert_eq!(engine.canvas().width, 400, "failed resize leaves the canvas alone");
    }

    #[test]
    fn label_uses_large_font() {
        let mut engine = Recorder::create(300, 200, 20).unwrap();
        engine.set_title("Hi");
        match engine.surface().calls.last() {
            Some(DrawCall::Text { font, text, color, .. }) => {
                assert_eq!(*font, crate::types::FontId::Large);
                assert_eq!(text, "Hi");
                assert_eq!(*color, Rgb::WHITE);
            }
            other => panic!("expected text call, got {other:?}"),
        }
    }

    #[test]
    fn draw_series_dispatches_by_kind() {
        let data = Dataset::from_pairs([("a", 1.0), ("b", 2.0)]).unwrap();
        let mut engine = Recorder::create(300, 200, 20).unwrap();
        let bars = engine.draw_series(SeriesKind::Bar, &data, "#0000ff", Annotations::NONE).unwrap();
        assert_eq!(bars.bars.len(), 2);
        let lines = engine.draw_series(SeriesKind::Line, &data, "#0000ff", Annotations::NONE).unwrap();
        assert_eq!(lines.markers.len(), 2);
    }
}
