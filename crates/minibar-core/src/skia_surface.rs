// File: crates/minibar-core/src/skia_surface.rs
// Summary: Skia CPU raster implementation of `Surface`, with monospace text and PNG encoding.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

use crate::color::Rgb;
use crate::error::{ChartError, ChartResult};
use crate::geometry::{Point, Rect};
use crate::surface::Surface;
use crate::types::FontId;

/// Fallback font size relative to the glyph cell height, used when no face could be measured.
const FONT_SCALE: f32 = 0.85;
/// Font size at which the face's advance is measured once at startup.
const MEASURE_SIZE: f32 = 100.0;
const MEASURE_TEXT: &str = "0000000000";

fn sk_color(c: Rgb) -> skia::Color {
    skia::Color::from_rgb(c.r, c.g, c.b)
}

fn sk_point(p: Point) -> skia::Point {
    skia::Point::new(p.x as f32, p.y as f32)
}

/// Lays out single-line monospace paragraphs sized so each glyph advances one `FontId` cell.
struct TextShaper {
    fonts: FontCollection,
    /// Glyph advance per unit of font size; `None` when no monospace face resolved.
    advance_per_size: Option<f32>,
}

impl TextShaper {
    fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        let mut shaper = Self { fonts: fc, advance_per_size: None };
        let width = shaper.layout_sized(MEASURE_TEXT, MEASURE_SIZE, skia::Color::BLACK).longest_line();
        if width.is_finite() && width > 0.0 {
            shaper.advance_per_size = Some(width / (MEASURE_TEXT.len() as f32 * MEASURE_SIZE));
        } else {
            tracing::debug!("no monospace face measured, sizing text from cell height");
        }
        shaper
    }

    /// Size whose advance equals the cell width, never taller than the cell.
    fn font_size(&self, font: FontId) -> f32 {
        let cell_h = font.glyph_height() as f32;
        match self.advance_per_size {
            Some(advance) => (font.glyph_width() as f32 / advance).min(cell_h),
            None => cell_h * FONT_SCALE,
        }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size);
        ts.set_color(color);
        ts.set_font_families(&["DejaVu Sans Mono", "Menlo", "Consolas", "Roboto Mono", "monospace"]);
        ts
    }

    fn layout_sized(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        pstyle.set_max_lines(1);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(size, color));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    fn layout(&self, text: &str, font: FontId, color: skia::Color) -> Paragraph {
        self.layout_sized(text, self.font_size(font), color)
    }

    fn draw_top_left(&self, canvas: &skia::Canvas, text: &str, origin: Point, font: FontId, color: skia::Color) {
        let p = self.layout(text, font, color);
        // Paragraph paints from the top-left of its line box, matching the glyph-cell origin.
        p.paint(canvas, sk_point(origin));
    }
}

/// CPU raster surface (N32 premultiplied) that owns its pixel buffer.
pub struct SkiaSurface {
    surface: skia::Surface,
    shaper: TextShaper,
    width: u32,
    height: u32,
}

impl SkiaSurface {
    fn fill_paint(color: Rgb) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_color(sk_color(color));
        paint.set_anti_alias(false);
        paint.set_style(skia::paint::Style::Fill);
        paint
    }
}

impl Surface for SkiaSurface {
    fn create(width: u32, height: u32) -> ChartResult<Self> {
        if width == 0 || height == 0 {
            return Err(ChartError::InvalidCanvas { width, height });
        }
        let w = i32::try_from(width).map_err(|_| ChartError::InvalidCanvas { width, height })?;
        let h = i32::try_from(height).map_err(|_| ChartError::InvalidCanvas { width, height })?;
        let surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| ChartError::Surface(format!("failed to create {width}x{height} raster surface")))?;
        tracing::debug!(width, height, "created skia raster surface");
        Ok(Self { surface, shaper: TextShaper::new(), width, height })
    }

    fn width(&self) -> u32 { self.width }
    fn height(&self) -> u32 { self.height }

    fn fill(&mut self, color: Rgb) {
        self.surface.canvas().clear(sk_color(color));
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Rgb) {
        let mut paint = skia::Paint::default();
        paint.set_color(sk_color(color));
        paint.set_anti_alias(false);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(1.0);
        self.surface.canvas().draw_line(sk_point(from), sk_point(to), &paint);
    }

    fn draw_filled_rect(&mut self, rect: Rect, color: Rgb) {
        let r = skia::Rect::from_ltrb(rect.left as f32, rect.top as f32, rect.right as f32, rect.bottom as f32);
        self.surface.canvas().draw_rect(r, &Self::fill_paint(color));
    }

    fn draw_filled_ellipse(&mut self, center: Point, width: f64, height: f64, color: Rgb) {
        let oval = skia::Rect::from_xywh(
            (center.x - width / 2.0) as f32,
            (center.y - height / 2.0) as f32,
            width as f32,
            height as f32,
        );
        self.surface.canvas().draw_oval(oval, &Self::fill_paint(color));
    }

    fn draw_text(&mut self, font: FontId, origin: Point, text: &str, color: Rgb) {
        if text.is_empty() {
            return;
        }
        let canvas = self.surface.canvas();
        self.shaper.draw_top_left(canvas, text, origin, font, sk_color(color));
    }

    fn encode_png(&mut self) -> ChartResult<Vec<u8>> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| ChartError::Encode("skia PNG encoder returned no data".into()))?;
        Ok(data.as_bytes().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyph_advance_matches_cell_width() {
        let shaper = TextShaper::new();
        if shaper.advance_per_size.is_none() {
            eprintln!("[text] no monospace face available; skipping");
            return;
        }
        for font in [FontId::Small, FontId::Large] {
            let size = shaper.font_size(font);
            assert!(size > 0.0 && size <= font.glyph_height() as f32);
            if size < font.glyph_height() as f32 {
                let drawn = shaper.layout("0123456789", font, skia::Color::WHITE).longest_line();
                let cells = font.text_width("0123456789") as f32;
                assert!((drawn - cells).abs() <= cells * 0.1, "{font:?}: drawn {drawn}px vs {cells}px of cells");
            }
        }
    }
}
