//! Chat screen with an accent picker sheet.
//!
//! [`ChatScreen`] owns everything the screen shows: the static message list,
//! the current accent color, the staggered recolor of "my" bubbles, and the
//! drag-to-dismiss sheet holding the palette.

mod bubble;
mod messages;
mod options;
mod palette;
mod screen;
pub mod theme;

pub use bubble::*;
pub use messages::*;
pub use options::*;
pub use palette::*;
pub use screen::*;
