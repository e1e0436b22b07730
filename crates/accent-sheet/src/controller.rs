use accent_animation::{Animatable, AnimationStatus, AnimationType};
use accent_foundation::{DragSample, DragUpdate};

use crate::config::SheetConfig;

/// What the renderer needs to place the sheet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetState {
    pub is_open: bool,
    /// Displacement from the open position; positive is toward closed.
    pub vertical_offset: f32,
}

impl SheetState {
    pub const CLOSED: SheetState = SheetState {
        is_open: false,
        vertical_offset: 0.0,
    };
}

/// Presentation changes the host must apply (mount or unmount the sheet).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetEvent {
    Opened,
    Closed,
}

/// What the open sheet is doing right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetMotion {
    Resting,
    Dragging,
    /// Springing back to the open position after release.
    Settling,
    /// Sliding to the closed position after release.
    Dismissing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Closed,
    Open(SheetMotion),
}

/// Open/closed state machine for the accent sheet.
///
/// All mutation happens on the host's frame loop: drag callbacks as they
/// arrive, then [`on_frame`](Self::on_frame) once per frame.
#[derive(Debug, Clone)]
pub struct SheetController {
    config: SheetConfig,
    phase: Phase,
    offset: Animatable<f32>,
}

impl Default for SheetController {
    fn default() -> Self {
        Self::new(SheetConfig::default())
    }
}

impl SheetController {
    pub fn new(config: SheetConfig) -> Self {
        Self {
            config,
            phase: Phase::Closed,
            offset: Animatable::new(0.0),
        }
    }

    pub fn config(&self) -> &SheetConfig {
        &self.config
    }

    pub fn state(&self) -> SheetState {
        SheetState {
            is_open: self.is_open(),
            vertical_offset: self.vertical_offset(),
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.phase, Phase::Open(_))
    }

    pub fn vertical_offset(&self) -> f32 {
        match self.phase {
            Phase::Closed => 0.0,
            Phase::Open(_) => self.offset.value(),
        }
    }

    pub fn motion(&self) -> Option<SheetMotion> {
        match self.phase {
            Phase::Closed => None,
            Phase::Open(motion) => Some(motion),
        }
    }

    pub fn is_animating(&self) -> bool {
        self.is_open() && self.offset.is_running()
    }

    /// Open a closed sheet or close an open one. The offset always resets.
    pub fn toggle(&mut self) -> SheetEvent {
        self.offset.snap_to(0.0);
        let event = match self.phase {
            Phase::Closed => {
                self.phase = Phase::Open(SheetMotion::Resting);
                SheetEvent::Opened
            }
            Phase::Open(_) => {
                self.phase = Phase::Closed;
                SheetEvent::Closed
            }
        };
        log::debug!("sheet toggled: {event:?}");
        event
    }

    /// Route a recognised drag update to the matching callback.
    pub fn on_drag(&mut self, update: DragUpdate) {
        match update {
            DragUpdate::Started => {}
            DragUpdate::Change(sample) => self.on_drag_change(sample),
            DragUpdate::Finalize => self.on_drag_end(),
        }
    }

    /// Apply one incremental drag sample.
    ///
    /// Toward closed the offset follows the pointer exactly. Past the open
    /// position it springs toward the pointer, never beyond `-overdrag`.
    /// Either way any release animation in flight is superseded.
    pub fn on_drag_change(&mut self, sample: DragSample) {
        if !self.is_open() {
            log::debug!("drag change ignored while closed");
            return;
        }
        if !sample.change_y.is_finite() {
            log::warn!("ignoring non-finite drag sample {}", sample.change_y);
            return;
        }

        let overdrag = self.config.overdrag;
        if self.offset.value() < -overdrag {
            // A settle spring may have bounced past the bound.
            self.offset.snap_to(-overdrag);
        }

        let proposed = self.offset.value() + sample.change_y;
        if proposed > 0.0 {
            self.offset.snap_to(proposed);
        } else {
            let clamped = proposed.max(-overdrag);
            let current = self.offset.value();
            if self.offset.velocity() * (clamped - current) < 0.0 {
                // Momentum heading away from the new target would carry the
                // offset past -overdrag before the spring turns around.
                self.offset.snap_to(current);
            }
            self.offset
                .animate_to(clamped, AnimationType::Spring(self.config.overdrag_spring));
        }
        self.phase = Phase::Open(SheetMotion::Dragging);
        log::trace!("drag {:+.1} -> offset target {:.1}", sample.change_y, self.offset.target());
    }

    /// Decide, from position alone, whether a released sheet closes.
    pub fn on_drag_end(&mut self) {
        if !self.is_open() {
            log::debug!("drag end ignored while closed");
            return;
        }

        let offset = self.offset.value();
        if offset < self.config.dismiss_threshold() {
            self.offset
                .animate_to(0.0, AnimationType::Spring(self.config.settle_spring));
            self.phase = Phase::Open(SheetMotion::Settling);
        } else {
            self.offset.animate_to(
                self.config.height,
                AnimationType::Tween(self.config.dismiss_tween),
            );
            self.phase = Phase::Open(SheetMotion::Dismissing);
        }
        log::debug!("drag released at {offset:.1}: {:?}", self.phase);
    }

    /// Advance the offset animation to `frame_time_nanos`.
    ///
    /// Returns [`SheetEvent::Closed`] on the frame a dismissal reaches the
    /// full sheet height.
    pub fn on_frame(&mut self, frame_time_nanos: u64) -> Option<SheetEvent> {
        let Phase::Open(motion) = self.phase else {
            return None;
        };

        let status = self.offset.tick(frame_time_nanos);
        match motion {
            SheetMotion::Dismissing if self.dismiss_complete(status) => {
                self.phase = Phase::Closed;
                self.offset.snap_to(0.0);
                log::debug!("sheet dismissed");
                Some(SheetEvent::Closed)
            }
            SheetMotion::Settling if status == AnimationStatus::Finished => {
                self.phase = Phase::Open(SheetMotion::Resting);
                None
            }
            _ => None,
        }
    }

    fn dismiss_complete(&self, status: AnimationStatus) -> bool {
        status == AnimationStatus::Finished && self.offset.value() == self.config.height
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
