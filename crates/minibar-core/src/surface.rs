// File: crates/minibar-core/src/surface.rs
// Summary: Drawing-surface contract used by the chart engine, plus a recording implementation.

use crate::color::Rgb;
use crate::error::{ChartError, ChartResult};
use crate::geometry::{Point, Rect};
use crate::types::FontId;

/// Primitive raster surface. Every call paints over what is already there.
pub trait Surface: Sized {
    fn create(width: u32, height: u32) -> ChartResult<Self>;
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Paint the whole surface with `color`.
    fn fill(&mut self, color: Rgb);
    fn draw_line(&mut self, from: Point, to: Point, color: Rgb);
    fn draw_filled_rect(&mut self, rect: Rect, color: Rgb);
    fn draw_filled_ellipse(&mut self, center: Point, width: f64, height: f64, color: Rgb);
    /// `origin` is the top-left corner of the first glyph cell.
    fn draw_text(&mut self, font: FontId, origin: Point, text: &str, color: Rgb);
    fn encode_png(&mut self) -> ChartResult<Vec<u8>>;
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Fill(Rgb),
    Line { from: Point, to: Point, color: Rgb },
    FilledRect { rect: Rect, color: Rgb },
    FilledEllipse { center: Point, width: f64, height: f64, color: Rgb },
    Text { font: FontId, origin: Point, text: String, color: Rgb },
}

/// Headless surface that records every call in order instead of rasterizing.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn lines(&self) -> impl Iterator<Item = (&Point, &Point, &Rgb)> {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::Line { from, to, color } => Some((from, to, color)),
            _ => None,
        })
    }

    pub fn rects(&self) -> impl Iterator<Item = (&Rect, &Rgb)> {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::FilledRect { rect, color } => Some((rect, color)),
            _ => None,
        })
    }

    pub fn ellipses(&self) -> impl Iterator<Item = (&Point, &Rgb)> {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::FilledEllipse { center, color, .. } => Some((center, color)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = (&Point, &str, &Rgb)> {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::Text { origin, text, color, .. } => Some((origin, text.as_str(), color)),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn create(width: u32, height: u32) -> ChartResult<Self> {
        if width == 0 || height == 0 {
            return Err(ChartError::InvalidCanvas { width, height });
        }
        Ok(Self { width, height, calls: Vec::new() })
    }

    fn width(&self) -> u32 { self.width }
    fn height(&self) -> u32 { self.height }

    fn fill(&mut self, color: Rgb) {
        self.calls.push(DrawCall::Fill(color));
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Rgb) {
        self.calls.push(DrawCall::Line { from, to, color });
    }

    fn draw_filled_rect(&mut self, rect: Rect, color: Rgb) {
        self.calls.push(DrawCall::FilledRect { rect, color });
    }

    fn draw_filled_ellipse(&mut self, center: Point, width: f64, height: f64, color: Rgb) {
        self.calls.push(DrawCall::FilledEllipse { center, width, height, color });
    }

    fn draw_text(&mut self, font: FontId, origin: Point, text: &str, color: Rgb) {
        self.calls.push(DrawCall::Text { font, origin, text: text.to_string(), color });
    }

    fn encode_png(&mut self) -> ChartResult<Vec<u8>> {
        Err(ChartError::Encode("recording surface holds no pixels".into()))
    }
}
