//! Perceptual brightness classification
//!
//! Brightness uses the HSP model: `sqrt(0.299 R² + 0.587 G² + 0.114 B²)` over
//! 0..=255 channels. Anything below [`DARK_THRESHOLD`] gets light foreground
//! text.

use crate::color::{hex_value, Color};

/// HSP brightness below which a background counts as dark.
pub const DARK_THRESHOLD: f32 = 170.0;

/// Classify a `#RRGGBB` string as dark.
///
/// No validation is performed. Each channel is read from a fixed byte range
/// (1..3, 3..5, 5..7) and parsed from its leading hex digits; a range with no
/// leading digit parses as NaN, which makes the result `false`. Malformed
/// input therefore yields a meaningless verdict rather than an error.
pub fn is_dark(hex: &str) -> bool {
    let bytes = hex.as_bytes();
    let r = parse_channel(bytes, 1..3);
    let g = parse_channel(bytes, 3..5);
    let b = parse_channel(bytes, 5..7);
    hsp(r, g, b) < DARK_THRESHOLD
}

/// Foreground color that stays readable on top of `background`.
pub fn content_color_for(background: Color) -> Color {
    if background.is_dark() {
        Color::WHITE
    } else {
        Color::BLACK
    }
}

impl Color {
    /// Same rule as [`is_dark`], applied to the quantized RGB channels.
    pub fn is_dark(&self) -> bool {
        let [r, g, b] = self.rgb_u8();
        hsp(r as f32, g as f32, b as f32) < DARK_THRESHOLD
    }
}

fn hsp(r: f32, g: f32, b: f32) -> f32 {
    (0.299 * r * r + 0.587 * g * g + 0.114 * b * b).sqrt()
}

fn parse_channel(bytes: &[u8], range: std::ops::Range<usize>) -> f32 {
    let end = range.end.min(bytes.len());
    let start = range.start.min(end);
    let mut value: Option<u32> = None;
    for &byte in &bytes[start..end] {
        match hex_value(byte) {
            Some(digit) => value = Some(value.unwrap_or(0) * 16 + u32::from(digit)),
            None => break,
        }
    }
    value.map_or(f32::NAN, |v| v as f32)
}

#[cfg(test)]
#[path = "tests/contrast_tests.rs"]
mod tests;
