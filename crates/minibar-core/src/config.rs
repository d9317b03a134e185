// File: crates/minibar-core/src/config.rs
// Summary: JSON-loadable chart configuration used by the demo and embedding apps.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::chart::ChartEngine;
use crate::color::{resolve_color_or, Rgb, SeriesKind};
use crate::error::ChartResult;
use crate::layout::Annotations;
use crate::surface::Surface;
use crate::types::CanvasSpec;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    #[serde(flatten)]
    pub canvas: CanvasSpec,
    /// Hex background; malformed values fall back to black.
    pub background: String,
    pub title: Option<String>,
    pub title_color: String,
    pub kind: SeriesKind,
    /// Series color; `None` uses the kind's fallback (red for lines, green for bars).
    pub color: Option<String>,
    pub show_values: bool,
    pub show_keys: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            canvas: CanvasSpec::default(),
            background: "#000000".into(),
            title: None,
            title_color: "#ffffff".into(),
            kind: SeriesKind::Line,
            color: None,
            show_values: true,
            show_keys: true,
        }
    }
}

impl ChartConfig {
    pub fn from_json_str(s: &str) -> ChartResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.canvas.validate()?;
        Ok(cfg)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> ChartResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn annotations(&self) -> Annotations {
        Annotations { show_values: self.show_values, show_keys: self.show_keys }
    }

    /// Series color as passed to the engine; empty string triggers the kind fallback.
    pub fn series_hex(&self) -> &str {
        self.color.as_deref().unwrap_or("")
    }

    /// Engine with the configured canvas, background, and title already drawn.
    pub fn build_engine<S: Surface>(&self) -> ChartResult<ChartEngine<S>> {
        let c = self.canvas;
        let mut engine = ChartEngine::<S>::create(c.width, c.height, c.margin)?;
        let bg = resolve_color_or(&self.background, Rgb::BLACK);
        engine.set_background_color(bg.r, bg.g, bg.b);
        if let Some(title) = &self.title {
            let tc = resolve_color_or(&self.title_color, Rgb::WHITE);
            engine.set_label(title, tc.r, tc.g, tc.b);
        }
        Ok(engine)
    }
}
