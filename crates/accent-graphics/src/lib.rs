//! Pure math/data for colors and pointer geometry in Accent Chat
//!
//! This crate holds the `Color` value type, `#RRGGBB` parsing, and the
//! perceptual-brightness classifier used to pick readable text on top of
//! an accent color.

mod color;
mod contrast;
mod geometry;

pub use color::*;
pub use contrast::*;
pub use geometry::*;
