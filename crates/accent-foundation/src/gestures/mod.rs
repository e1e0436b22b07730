pub mod drag;

pub use drag::{DragGesture, DragSample, DragUpdate};
