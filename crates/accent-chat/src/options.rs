use accent_animation::{AnimationSpec, Easing};
use accent_graphics::Color;
use accent_sheet::SheetConfig;

use crate::palette::AccentPalette;
use crate::theme::ACCENT_COLOR;

/// Delay added per message id before its bubble starts recoloring.
pub const RECOLOR_STAGGER_MILLIS: u64 = 100;

/// Screen-level options, built the same way as [`SheetConfig`].
#[derive(Debug, Clone, PartialEq)]
pub struct ChatOptions {
    pub sheet: SheetConfig,
    pub initial_accent: Color,
    pub palette: AccentPalette,
    pub recolor_tween: AnimationSpec,
    pub recolor_stagger_millis: u64,
}

impl Default for ChatOptions {
    fn default() -> Self {
        Self {
            sheet: SheetConfig::default(),
            initial_accent: ACCENT_COLOR,
            palette: AccentPalette::default(),
            recolor_tween: AnimationSpec::tween(300, Easing::QuadInOut),
            recolor_stagger_millis: RECOLOR_STAGGER_MILLIS,
        }
    }
}

impl ChatOptions {
    pub fn with_sheet(mut self, sheet: SheetConfig) -> Self {
        self.sheet = sheet;
        self
    }

    pub fn with_initial_accent(mut self, accent: Color) -> Self {
        self.initial_accent = accent;
        self
    }

    pub fn with_palette(mut self, palette: AccentPalette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_recolor_tween(mut self, tween: AnimationSpec) -> Self {
        self.recolor_tween = tween;
        self
    }

    pub fn with_recolor_stagger(mut self, millis: u64) -> Self {
        self.recolor_stagger_millis = millis;
        self
    }

    /// Tween for the bubble of message `id`.
    pub fn recolor_spec_for(&self, id: u32) -> AnimationSpec {
        let spec = self.recolor_tween;
        let stagger = self.recolor_stagger_millis.saturating_mul(u64::from(id));
        spec.with_delay(spec.delay_millis.saturating_add(stagger))
    }
}
