// File: crates/minibar-core/src/types.rs
// Summary: Shared types and constants (canvas sizes, margin, font metrics).

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::geometry::PlotArea;

/// Default surface width in pixels.
pub const WIDTH: u32 = 1000;
/// Default surface height in pixels.
pub const HEIGHT: u32 = 500;
/// Default margin around the plot area, in pixels.
pub const MARGIN: u32 = 50;

/// Content type of the bytes returned by `ChartEngine::render`.
pub const PNG_CONTENT_TYPE: &str = "image/png";

/// Canvas dimensions plus the uniform margin around the plot area.
/// Contract: width/height > 0 and 2*margin < min(width, height) once validated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSpec {
    pub width: u32,
    pub height: u32,
    pub margin: u32,
}

impl CanvasSpec {
    /// Validated constructor.
    pub fn new(width: u32, height: u32, margin: u32) -> ChartResult<Self> {
        let spec = Self { width, height, margin };
        spec.validate()?;
        Ok(spec)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ChartError::InvalidCanvas { width: self.width, height: self.height });
        }
        // u64 so huge margins cannot overflow the doubling.
        let twice = 2 * self.margin as u64;
        if twice >= self.width as u64 || twice >= self.height as u64 {
            return Err(ChartError::DegenerateCanvas {
                width: self.width,
                height: self.height,
                margin: self.margin,
            });
        }
        Ok(())
    }

    /// Width of the plot area (`width - 2*margin`).
    pub fn graph_width(&self) -> f64 {
        self.width as f64 - 2.0 * self.margin as f64
    }

    /// Height of the plot area (`height - 2*margin`).
    pub fn graph_height(&self) -> f64 {
        self.height as f64 - 2.0 * self.margin as f64
    }

    pub fn plot_area(&self) -> PlotArea {
        let m = self.margin as f64;
        PlotArea::from_ltrb(m, m, self.width as f64 - m, self.height as f64 - m)
    }
}

impl Default for CanvasSpec {
    fn default() -> Self {
        Self { width: WIDTH, height: HEIGHT, margin: MARGIN }
    }
}

/// Fixed-size bitmap fonts; every glyph occupies the same cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontId {
    /// 6x13 cell, used for grid labels and annotations.
    Small,
    /// 9x15 cell, used for the chart title.
    Large,
}

impl FontId {
    pub const fn glyph_width(self) -> f64 {
        match self {
            FontId::Small => 6.0,
            FontId::Large => 9.0,
        }
    }

    pub const fn glyph_height(self) -> f64 {
        match self {
            FontId::Small => 13.0,
            FontId::Large => 15.0,
        }
    }

    /// Advance width of `text`: glyph width times character count.
    pub fn text_width(self, text: &str) -> f64 {
        self.glyph_width() * text.chars().count() as f64
    }
}
