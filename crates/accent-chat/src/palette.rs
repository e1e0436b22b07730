use accent_graphics::{Color, ColorParseError};

use crate::theme::ACCENT_COLOR;

/// Stock palette offered in the sheet, as `#RRGGBB`.
pub const DEFAULT_PALETTE: &[&str] = &[
    "#782AEB", "#E53935", "#D81B60", "#1E88E5", "#00ACC1", "#43A047", "#FFD600", "#FB8C00",
    "#6D4C41", "#212121", "#F5F5F5",
];

/// The colors a user can tap in the picker.
#[derive(Debug, Clone, PartialEq)]
pub struct AccentPalette {
    colors: Vec<Color>,
}

impl Default for AccentPalette {
    fn default() -> Self {
        Self::from_hex_list(DEFAULT_PALETTE).unwrap_or_else(|_| Self {
            colors: vec![ACCENT_COLOR],
        })
    }
}

impl AccentPalette {
    pub fn new(colors: Vec<Color>) -> Self {
        Self { colors }
    }

    pub fn from_hex_list<S: AsRef<str>>(entries: &[S]) -> Result<Self, ColorParseError> {
        let colors = entries
            .iter()
            .map(|entry| Color::from_hex(entry.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { colors })
    }

    pub fn get(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        self.colors.iter().copied()
    }

    pub fn position(&self, color: Color) -> Option<usize> {
        self.colors.iter().position(|c| *c == color)
    }
}

#[cfg(test)]
#[path = "tests/palette_tests.rs"]
mod tests;
