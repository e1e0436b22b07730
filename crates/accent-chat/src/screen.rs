use accent_animation::AnimationStatus;
use accent_foundation::{DragGesture, PointerEvent};
use accent_graphics::Color;
use accent_sheet::{SheetController, SheetEvent, SheetState};
use smallvec::SmallVec;

use crate::bubble::BubbleTint;
use crate::messages::{Message, MESSAGES};
use crate::options::ChatOptions;
use crate::palette::AccentPalette;
use crate::theme::{BACKDROP_COLOR, THEIR_BUBBLE_COLOR, THEIR_TEXT_COLOR};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScreenEvent {
    Sheet(SheetEvent),
    /// Every bubble has finished blending to the current accent.
    RecolorFinished(Color),
}

pub type ScreenEvents = SmallVec<[ScreenEvent; 2]>;

/// One message as the list should draw it this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BubbleView {
    pub message: Message,
    pub background: Color,
    pub text_color: Color,
}

struct Row {
    message: Message,
    /// Only the current user's bubbles follow the accent.
    tint: Option<BubbleTint>,
}

pub struct ChatScreen {
    options: ChatOptions,
    sheet: SheetController,
    drag: DragGesture,
    accent: Color,
    rows: Vec<Row>,
}

impl Default for ChatScreen {
    fn default() -> Self {
        Self::new(ChatOptions::default())
    }
}

impl ChatScreen {
    pub fn new(options: ChatOptions) -> Self {
        Self::with_messages(options, MESSAGES)
    }

    pub fn with_messages(options: ChatOptions, messages: &[Message]) -> Self {
        let accent = options.initial_accent;
        let rows = messages
            .iter()
            .map(|message| Row {
                message: *message,
                tint: message.is_mine().then(|| BubbleTint::new(accent)),
            })
            .collect();
        Self {
            sheet: SheetController::new(options.sheet),
            drag: DragGesture::new(),
            accent,
            rows,
            options,
        }
    }

    pub fn accent(&self) -> Color {
        self.accent
    }

    pub fn palette(&self) -> &AccentPalette {
        &self.options.palette
    }

    pub fn sheet(&self) -> &SheetController {
        &self.sheet
    }

    pub fn sheet_state(&self) -> SheetState {
        self.sheet.state()
    }

    /// The dimmed backdrop is mounted exactly while the sheet is.
    pub fn backdrop_visible(&self) -> bool {
        self.sheet.is_open()
    }

    /// Fill for the dimmed backdrop, if it is mounted.
    pub fn backdrop_color(&self) -> Option<Color> {
        self.backdrop_visible().then_some(BACKDROP_COLOR)
    }

    /// No sheet or bubble animation is in flight.
    pub fn is_idle(&self) -> bool {
        !self.sheet.is_animating() && !self.recoloring()
    }

    /// Settings button in the header. Covered by the backdrop while the
    /// sheet is up, so it only ever opens.
    pub fn tap_settings(&mut self) -> Option<SheetEvent> {
        if self.sheet.is_open() {
            log::debug!("settings tap ignored: sheet already open");
            return None;
        }
        Some(self.toggle_sheet())
    }

    pub fn tap_backdrop(&mut self) -> Option<SheetEvent> {
        if !self.sheet.is_open() {
            return None;
        }
        Some(self.toggle_sheet())
    }

    /// Tap on palette entry `index`: apply it and close the sheet.
    pub fn pick_accent(&mut self, index: usize) -> Option<Color> {
        if !self.sheet.is_open() {
            log::warn!("accent pick ignored: sheet is closed");
            return None;
        }
        let Some(color) = self.options.palette.get(index) else {
            log::warn!("no palette entry at {index}");
            return None;
        };
        self.set_accent(color);
        self.toggle_sheet();
        Some(color)
    }

    /// Recolor "my" bubbles toward `accent`, later messages starting later.
    pub fn set_accent(&mut self, accent: Color) {
        log::info!("accent changed {} -> {}", self.accent.to_hex(), accent.to_hex());
        self.accent = accent;
        for row in &mut self.rows {
            if let Some(tint) = row.tint.as_mut() {
                tint.recolor(accent, self.options.recolor_spec_for(row.message.id));
            }
        }
    }

    /// Pointer input over the sheet. Ignored while the sheet is closed.
    pub fn pointer(&mut self, event: &PointerEvent) {
        if !self.sheet.is_open() {
            self.drag.reset();
            return;
        }
        if let Some(update) = self.drag.on_pointer_event(event) {
            self.sheet.on_drag(update);
        }
    }

    /// Advance every animation on screen to `frame_time_nanos`.
    pub fn on_frame(&mut self, frame_time_nanos: u64) -> ScreenEvents {
        let mut events = ScreenEvents::new();

        if let Some(event) = self.sheet.on_frame(frame_time_nanos) {
            self.drag.reset();
            events.push(ScreenEvent::Sheet(event));
        }

        let mut finished_any = false;
        for tint in self.rows.iter_mut().filter_map(|row| row.tint.as_mut()) {
            if tint.tick(frame_time_nanos) == AnimationStatus::Finished {
                finished_any = true;
            }
        }
        if finished_any && !self.recoloring() {
            log::debug!("bubbles settled on {}", self.accent.to_hex());
            events.push(ScreenEvent::RecolorFinished(self.accent));
        }

        events
    }

    pub fn bubbles(&self) -> impl Iterator<Item = BubbleView> + '_ {
        self.rows.iter().map(|row| match &row.tint {
            Some(tint) => BubbleView {
                message: row.message,
                background: tint.background(),
                text_color: tint.text_color(),
            },
            None => BubbleView {
                message: row.message,
                background: THEIR_BUBBLE_COLOR,
                text_color: THEIR_TEXT_COLOR,
            },
        })
    }

    fn recoloring(&self) -> bool {
        self.rows
            .iter()
            .filter_map(|row| row.tint.as_ref())
            .any(BubbleTint::is_animating)
    }

    fn toggle_sheet(&mut self) -> SheetEvent {
        let event = self.sheet.toggle();
        if event == SheetEvent::Closed {
            self.drag.reset();
        }
        event
    }
}

#[cfg(test)]
#[path = "tests/screen_tests.rs"]
mod tests;
