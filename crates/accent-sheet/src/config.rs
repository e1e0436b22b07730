use accent_animation::{AnimationSpec, Easing, SpringSpec};

/// Full sheet height in logical pixels.
pub const DEFAULT_SHEET_HEIGHT: f32 = 400.0;

/// How far the sheet may be pulled above its resting position.
pub const DEFAULT_OVERDRAG: f32 = 20.0;

/// Sheet geometry and motion options.
///
/// ```
/// use accent_sheet::SheetConfig;
///
/// let config = SheetConfig::default().with_height(600.0).with_overdrag(30.0);
/// assert_eq!(config.dismiss_threshold(), 200.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetConfig {
    pub height: f32,
    pub overdrag: f32,
    /// Spring used to snap back open after a short drag.
    pub settle_spring: SpringSpec,
    /// Spring used while the sheet is pulled past its open position.
    pub overdrag_spring: SpringSpec,
    /// Tween used to slide the sheet closed after a long drag.
    pub dismiss_tween: AnimationSpec,
}

impl Default for SheetConfig {
    fn default() -> Self {
        // damping 10 / stiffness 100 / mass 1 is a damping ratio of 0.5.
        let spring = SpringSpec::new(0.5, 100.0);
        Self {
            height: DEFAULT_SHEET_HEIGHT,
            overdrag: DEFAULT_OVERDRAG,
            settle_spring: spring,
            overdrag_spring: spring.with_overshoot_clamping(true),
            dismiss_tween: AnimationSpec::tween(300, Easing::QuadInOut),
        }
    }
}

impl SheetConfig {
    pub fn with_height(mut self, height: f32) -> Self {
        self.height = sanitize_extent(height);
        self
    }

    pub fn with_overdrag(mut self, overdrag: f32) -> Self {
        self.overdrag = sanitize_extent(overdrag);
        self
    }

    pub fn with_settle_spring(mut self, spring: SpringSpec) -> Self {
        self.settle_spring = spring;
        self
    }

    /// Overshoot clamping is forced on so the offset never passes the
    /// over-drag bound.
    pub fn with_overdrag_spring(mut self, spring: SpringSpec) -> Self {
        self.overdrag_spring = spring.with_overshoot_clamping(true);
        self
    }

    pub fn with_dismiss_tween(mut self, tween: AnimationSpec) -> Self {
        self.dismiss_tween = tween;
        self
    }

    /// Release offset at or beyond which the sheet closes.
    pub fn dismiss_threshold(&self) -> f32 {
        self.height / 3.0
    }
}

fn sanitize_extent(value: f32) -> f32 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}
