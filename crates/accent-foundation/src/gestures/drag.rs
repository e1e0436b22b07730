//! Vertical drag gesture recogniser.
//!
//! Turns a stream of pointer events into incremental vertical samples plus a
//! single release notification per gesture. Only the pointer that started the
//! gesture is followed; other pointers are ignored until it lifts.

use crate::pointer::{PointerEvent, PointerId, PointerPhase};

/// Incremental vertical pointer movement since the previous sample.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct DragSample {
    pub change_y: f32,
}

impl DragSample {
    pub const fn new(change_y: f32) -> Self {
        Self { change_y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragUpdate {
    Started,
    Change(DragSample),
    /// The gesture ended, whether by release or cancellation.
    Finalize,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Tracking {
    pointer: PointerId,
    last_y: f32,
}

#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct DragGesture {
    tracking: Option<Tracking>,
}

impl DragGesture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.tracking.is_some()
    }

    /// Drop the tracked pointer without reporting a release.
    pub fn reset(&mut self) {
        self.tracking = None;
    }

    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> Option<DragUpdate> {
        match event.phase {
            PointerPhase::Start => match self.tracking {
                Some(tracking) if tracking.pointer != event.id => {
                    log::trace!("ignoring pointer {} while {} drags", event.id, tracking.pointer);
                    None
                }
                _ => {
                    self.tracking = Some(Tracking {
                        pointer: event.id,
                        last_y: event.position.y,
                    });
                    Some(DragUpdate::Started)
                }
            },
            PointerPhase::Move => {
                let tracking = self.tracking.as_mut().filter(|t| t.pointer == event.id)?;
                let change_y = event.position.y - tracking.last_y;
                tracking.last_y = event.position.y;
                if change_y == 0.0 {
                    None
                } else {
                    Some(DragUpdate::Change(DragSample::new(change_y)))
                }
            }
            PointerPhase::End | PointerPhase::Cancel => {
                self.tracking.filter(|t| t.pointer == event.id)?;
                self.tracking = None;
                Some(DragUpdate::Finalize)
            }
        }
    }
}

#[cfg(test)]
#[path = "../tests/drag_tests.rs"]
mod tests;
