use accent_graphics::Point;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    Start,
    Move,
    End,
    Cancel,
}

/// A single pointer sample delivered by the host gesture layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub id: PointerId,
    pub phase: PointerPhase,
    pub position: Point,
}

impl PointerEvent {
    pub fn new(phase: PointerPhase, position: Point) -> Self {
        Self {
            id: 0,
            phase,
            position,
        }
    }

    pub fn down(x: f32, y: f32) -> Self {
        Self::new(PointerPhase::Start, Point::new(x, y))
    }

    pub fn moved(x: f32, y: f32) -> Self {
        Self::new(PointerPhase::Move, Point::new(x, y))
    }

    pub fn up(x: f32, y: f32) -> Self {
        Self::new(PointerPhase::End, Point::new(x, y))
    }

    pub fn cancel(x: f32, y: f32) -> Self {
        Self::new(PointerPhase::Cancel, Point::new(x, y))
    }

    pub fn with_id(mut self, id: PointerId) -> Self {
        self.id = id;
        self
    }
}
