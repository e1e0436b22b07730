//! Pointer input types and gesture recognisers for Accent Chat

pub mod gestures;
mod pointer;

pub use gestures::{DragGesture, DragSample, DragUpdate};
pub use pointer::*;
