//! Robot-style driver for the chat screen.
//!
//! The robot owns a [`ChatScreen`] and a simulated frame clock, so tests can
//! tap, drag, and wait without a window or renderer:
//!
//! ```
//! use accent_testing::ChatRobot;
//!
//! let mut robot = ChatRobot::new();
//! robot.click_settings();
//! robot.drag_by(250.0);
//! robot.wait_for_idle();
//! assert!(!robot.sheet_state().is_open);
//! ```

use accent_chat::{ChatOptions, ChatScreen, ScreenEvent};
use accent_foundation::{PointerEvent, PointerId};
use accent_graphics::Color;
use accent_sheet::{SheetEvent, SheetState};

/// ~60 FPS frame interval.
pub const FRAME_NANOS: u64 = 16_666_667;

/// Frames pumped by [`ChatRobot::wait_for_idle`] before giving up.
pub const MAX_IDLE_FRAMES: usize = 2_000;

/// Horizontal position used for simulated pointers; the sheet spans the width.
const POINTER_X: f32 = 200.0;

/// Sheet top in screen space when at rest; drags start here.
const SHEET_TOP_Y: f32 = 400.0;

pub struct ChatRobot {
    screen: ChatScreen,
    frame_time_nanos: u64,
    pointer: PointerId,
    pointer_y: Option<f32>,
    events: Vec<ScreenEvent>,
    offsets: Vec<f32>,
}

impl Default for ChatRobot {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatRobot {
    pub fn new() -> Self {
        Self::with_options(ChatOptions::default())
    }

    pub fn with_options(options: ChatOptions) -> Self {
        Self::from_screen(ChatScreen::new(options))
    }

    pub fn from_screen(screen: ChatScreen) -> Self {
        Self {
            screen,
            frame_time_nanos: 0,
            pointer: 0,
            pointer_y: None,
            events: Vec::new(),
            offsets: Vec::new(),
        }
    }

    pub fn screen(&self) -> &ChatScreen {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut ChatScreen {
        &mut self.screen
    }

    pub fn sheet_state(&self) -> SheetState {
        self.screen.sheet_state()
    }

    pub fn accent(&self) -> Color {
        self.screen.accent()
    }

    pub fn frame_time_nanos(&self) -> u64 {
        self.frame_time_nanos
    }

    /// Every event reported since the last call.
    pub fn take_events(&mut self) -> Vec<ScreenEvent> {
        std::mem::take(&mut self.events)
    }

    /// Sheet offsets sampled after every frame since the last call.
    pub fn take_offsets(&mut self) -> Vec<f32> {
        std::mem::take(&mut self.offsets)
    }

    /// Advance the clock by one frame and pump the screen.
    pub fn advance_frame(&mut self) {
        self.frame_time_nanos += FRAME_NANOS;
        let events = self.screen.on_frame(self.frame_time_nanos);
        for event in &events {
            log::debug!("robot saw {event:?} at {}ns", self.frame_time_nanos);
        }
        self.events.extend(events);
        self.offsets.push(self.screen.sheet_state().vertical_offset);
    }

    /// Advance frame time by at least `nanos`, one frame at a time.
    pub fn advance_time(&mut self, nanos: u64) {
        let until = self.frame_time_nanos + nanos;
        while self.frame_time_nanos < until {
            self.advance_frame();
        }
    }

    /// Pump frames until nothing on screen is animating.
    ///
    /// Returns false if the screen was still busy after [`MAX_IDLE_FRAMES`].
    pub fn wait_for_idle(&mut self) -> bool {
        for _ in 0..MAX_IDLE_FRAMES {
            if self.screen.is_idle() {
                return true;
            }
            self.advance_frame();
        }
        self.screen.is_idle()
    }

    pub fn click_settings(&mut self) -> Option<SheetEvent> {
        let event = self.screen.tap_settings();
        self.advance_frame();
        event
    }

    pub fn click_backdrop(&mut self) -> Option<SheetEvent> {
        let event = self.screen.tap_backdrop();
        self.advance_frame();
        event
    }

    /// Tap palette entry `index`.
    pub fn pick(&mut self, index: usize) -> Option<Color> {
        let color = self.screen.pick_accent(index);
        self.advance_frame();
        color
    }

    /// Press on the sheet at `y`.
    pub fn press(&mut self, y: f32) {
        self.pointer += 1;
        self.pointer_y = Some(y);
        self.send(PointerEvent::down(POINTER_X, y));
    }

    /// Move the pressed pointer to `y`, then render one frame.
    pub fn move_to(&mut self, y: f32) {
        self.pointer_y = Some(y);
        self.send(PointerEvent::moved(POINTER_X, y));
        self.advance_frame();
    }

    pub fn release(&mut self) {
        let y = self.pointer_y.take().unwrap_or(SHEET_TOP_Y);
        self.send(PointerEvent::up(POINTER_X, y));
    }

    pub fn cancel(&mut self) {
        let y = self.pointer_y.take().unwrap_or(SHEET_TOP_Y);
        self.send(PointerEvent::cancel(POINTER_X, y));
    }

    /// Press, move from `from_y` to `to_y` in `steps` frames, release.
    pub fn drag(&mut self, from_y: f32, to_y: f32, steps: usize) {
        self.press(from_y);
        let steps = steps.max(1);
        for i in 1..=steps {
            let t = i as f32 / steps as f32;
            self.move_to(from_y + (to_y - from_y) * t);
        }
        self.release();
    }

    /// Drag the sheet by `dy` from its top edge in ten steps.
    pub fn drag_by(&mut self, dy: f32) {
        self.drag(SHEET_TOP_Y, SHEET_TOP_Y + dy, 10);
    }

    fn send(&mut self, event: PointerEvent) {
        self.screen.pointer(&event.with_id(self.pointer));
    }
}
