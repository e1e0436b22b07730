//! Color representation and `#RRGGBB` conversion

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color(pub f32, pub f32, pub f32, pub f32);

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self(r, g, b, 1.0)
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self(r, g, b, a)
    }

    pub const fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    pub const fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba_u8(r, g, b, 255)
    }

    /// Parse a strict `#RRGGBB` string.
    ///
    /// Unlike [`crate::is_dark`], which accepts anything, this rejects
    /// malformed input so palette entries and user choices are validated once
    /// at the boundary.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let digits = hex.strip_prefix('#').ok_or(ColorParseError::MissingHash)?;
        if digits.len() != 6 {
            return Err(ColorParseError::BadLength { len: hex.len() });
        }
        let bytes = digits.as_bytes();
        let channel = |index: usize| -> Result<u8, ColorParseError> {
            let hi = hex_value(bytes[index * 2]);
            let lo = hex_value(bytes[index * 2 + 1]);
            match (hi, lo) {
                (Some(hi), Some(lo)) => Ok(hi * 16 + lo),
                _ => Err(ColorParseError::BadDigit {
                    position: 1 + index * 2 + usize::from(hi.is_some()),
                }),
            }
        };
        Ok(Self::from_rgb_u8(channel(0)?, channel(1)?, channel(2)?))
    }

    /// Format the opaque RGB part as an upper-case `#RRGGBB` string.
    pub fn to_hex(&self) -> String {
        let [r, g, b] = self.rgb_u8();
        format!("#{r:02X}{g:02X}{b:02X}")
    }

    /// The RGB channels quantized to bytes.
    pub fn rgb_u8(&self) -> [u8; 3] {
        [
            channel_to_u8(self.0),
            channel_to_u8(self.1),
            channel_to_u8(self.2),
        ]
    }

    pub fn r(&self) -> f32 {
        self.0
    }

    pub fn g(&self) -> f32 {
        self.1
    }

    pub fn b(&self) -> f32 {
        self.2
    }

    pub fn a(&self) -> f32 {
        self.3
    }

    pub fn with_alpha(&self, alpha: f32) -> Self {
        Self(self.0, self.1, self.2, alpha)
    }

    // Common color constants
    pub const BLACK: Color = Color(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color(1.0, 1.0, 1.0, 1.0);
    pub const TRANSPARENT: Color = Color(0.0, 0.0, 0.0, 0.0);
}

fn channel_to_u8(channel: f32) -> u8 {
    (channel * 255.0).round().clamp(0.0, 255.0) as u8
}

pub(crate) fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorParseError {
    MissingHash,
    BadLength { len: usize },
    BadDigit { position: usize },
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorParseError::MissingHash => write!(f, "color must start with '#'"),
            ColorParseError::BadLength { len } => {
                write!(f, "color must be 7 characters long (#RRGGBB), got {len}")
            }
            ColorParseError::BadDigit { position } => {
                write!(f, "invalid hex digit at position {position}")
            }
        }
    }
}

impl std::error::Error for ColorParseError {}

#[cfg(test)]
#[path = "tests/color_tests.rs"]
mod tests;
