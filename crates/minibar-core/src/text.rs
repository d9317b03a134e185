// File: crates/minibar-core/src/text.rs
// Summary: Label formatting and fixed-width text placement helpers.

use crate::types::FontId;

/// Render a number the way labels show it: no trailing `.0`, no `-0`.
pub fn format_value(v: f64) -> String {
    let v = if v == 0.0 { 0.0 } else { v };
    format!("{v}")
}

/// Grid label text: the value rounded half away from zero to one decimal place.
pub fn format_grid_label(v: f64) -> String {
    format_value(round1(v))
}

/// Values at or above 2^52 are already whole, and scaling them by 10 could overflow.
#[inline]
pub fn round1(v: f64) -> f64 {
    if v.abs() >= 4_503_599_627_370_496.0 {
        return v;
    }
    (v * 10.0).round() / 10.0
}

/// Left x that horizontally centers `text` on `center_x`.
pub fn centered_text_x(font: FontId, text: &str, center_x: f64) -> f64 {
    center_x - font.text_width(text) / 2.0
}

/// Left x that centers `text` inside the span `[left, left + span]`.
pub fn centered_in_span_x(font: FontId, text: &str, left: f64, span: f64) -> f64 {
    left + (span - font.text_width(text)) / 2.0
}

/// Left x that ends `text` `padding` pixels before `right_edge`.
pub fn right_aligned_x(font: FontId, text: &str, right_edge: f64, padding: f64) -> f64 {
    right_edge - font.text_width(text) - padding
}
