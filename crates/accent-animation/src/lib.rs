//! Animation system for Accent Chat
//!
//! Provides time-based tweens with easing curves and spring physics. Nothing
//! here owns a clock: every animation is advanced by the host calling
//! [`Animatable::tick`] with a monotonically increasing frame timestamp, which
//! keeps the math deterministic and independent of any rendering runtime.

mod animation;
mod easing;

pub use animation::*;
pub use easing::*;
