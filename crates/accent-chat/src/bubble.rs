//! Staggered recoloring of message bubbles.

use accent_animation::{Animatable, AnimationSpec, AnimationStatus, AnimationType, Lerp};
use accent_graphics::{content_color_for, Color};

/// Background and text color of one bubble, blending toward a new accent.
#[derive(Debug, Clone)]
pub struct BubbleTint {
    background_from: Color,
    background_to: Color,
    text_from: Color,
    text_to: Color,
    progress: Animatable<f32>,
}

impl BubbleTint {
    /// A bubble resting on `background` with contrasting text.
    pub fn new(background: Color) -> Self {
        let text = content_color_for(background);
        Self {
            background_from: background,
            background_to: background,
            text_from: text,
            text_to: text,
            progress: Animatable::new(1.0),
        }
    }

    /// Start blending from whatever is on screen now toward `background`.
    pub fn recolor(&mut self, background: Color, spec: AnimationSpec) {
        self.background_from = self.background();
        self.text_from = self.text_color();
        self.background_to = background;
        self.text_to = content_color_for(background);
        self.progress.snap_to(0.0);
        self.progress.animate_to(1.0, AnimationType::Tween(spec));
    }

    pub fn background(&self) -> Color {
        blend(self.background_from, self.background_to, self.progress.value())
    }

    pub fn text_color(&self) -> Color {
        blend(self.text_from, self.text_to, self.progress.value())
    }

    /// The accent this bubble is heading to.
    pub fn target(&self) -> Color {
        self.background_to
    }

    pub fn is_animating(&self) -> bool {
        self.progress.is_running()
    }

    pub fn tick(&mut self, frame_time_nanos: u64) -> AnimationStatus {
        self.progress.tick(frame_time_nanos)
    }
}

/// Endpoints are returned as-is so a settled bubble shows the exact accent.
fn blend(from: Color, to: Color, progress: f32) -> Color {
    if progress <= 0.0 {
        from
    } else if progress >= 1.0 {
        to
    } else {
        from.lerp(&to, progress)
    }
}

#[cfg(test)]
#[path = "tests/bubble_tests.rs"]
mod tests;
