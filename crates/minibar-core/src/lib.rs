// File: crates/minibar-core/src/lib.rs
// Summary: Core library entry point; exports the chart layout engine, surfaces, and layout helpers.

pub mod chart;
pub mod color;
pub mod config;
pub mod dataset;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod layout;
pub mod scale;
pub mod skia_surface;
pub mod surface;
pub mod text;
pub mod theme;
pub mod types;

pub use chart::ChartEngine;
pub use color::{resolve_series_color, Rgb, SeriesKind};
pub use config::ChartConfig;
pub use dataset::{DataPoint, Dataset, ValueRange};
pub use error::{ChartError, ChartResult};
pub use grid::{GridLayout, GRID_STEPS};
pub use layout::{bar_layout, line_layout, Annotations, SeriesLayout, TextAnchor};
pub use scale::{BarSlots, LineSlots, LinearScale, DEGENERATE_FRACTION};
pub use skia_surface::SkiaSurface;
pub use surface::{DrawCall, RecordingSurface, Surface};
pub use theme::Theme;
pub use types::{CanvasSpec, FontId, PNG_CONTENT_TYPE};
