//! Fixed screen colors.

use accent_graphics::Color;

/// Default accent, also the stock purple of "my" bubbles.
pub const ACCENT_COLOR: Color = Color::from_rgb_u8(0x78, 0x2A, 0xEB);

/// Dimmed overlay shown behind the open sheet.
pub const BACKDROP_COLOR: Color = Color::rgba(0.0, 0.0, 0.0, 0.3);

pub const THEIR_BUBBLE_COLOR: Color = Color::WHITE;

pub const THEIR_TEXT_COLOR: Color = Color::BLACK;
