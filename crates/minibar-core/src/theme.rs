// File: crates/minibar-core/src/theme.rs
// Summary: Fixed chart colors (background, grid, annotations, series fallbacks).

use crate::color::{Rgb, SeriesKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub background: Rgb,
    pub grid: Rgb,
    pub annotation: Rgb,
    pub label: Rgb,
    pub line_fallback: Rgb,
    pub bar_fallback: Rgb,
}

impl Theme {
    /// Black canvas, gray grid, light-gray annotations.
    pub const fn classic() -> Self {
        Self {
            background: Rgb::BLACK,
            grid: Rgb::new(100, 100, 100),
            annotation: Rgb::new(200, 200, 200),
            label: Rgb::WHITE,
            line_fallback: SeriesKind::Line.fallback_color(),
            bar_fallback: SeriesKind::Bar.fallback_color(),
        }
    }

    pub fn fallback(&self, kind: SeriesKind) -> Rgb {
        match kind {
            SeriesKind::Line => self.line_fallback,
            SeriesKind::Bar => self.bar_fallback,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}
