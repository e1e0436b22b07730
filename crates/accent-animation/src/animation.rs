//! Tween and spring specs plus the [`Animatable`] stepper that drives them.

use accent_graphics::Color;

use crate::easing::Easing;

/// Longest slice of time integrated in one spring step (~60fps).
const SPRING_TIMESTEP_SECS: f32 = 0.016;

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

impl Lerp for f64 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction as f64
    }
}

impl Lerp for Color {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        Color(
            self.0.lerp(&target.0, fraction),
            self.1.lerp(&target.1, fraction),
            self.2.lerp(&target.2, fraction),
            self.3.lerp(&target.3, fraction),
        )
    }
}

/// Scalar values that can be driven by spring physics.
pub trait SpringScalar: Lerp + Clone {
    fn to_f32(&self) -> f32;

    fn from_f32(value: f32) -> Self;

    /// Whether `current` is close enough to `target` to end a spring.
    fn is_near_target(current: &Self, target: &Self, threshold: f32) -> bool {
        (current.to_f32() - target.to_f32()).abs() < threshold
    }
}

impl SpringScalar for f32 {
    fn to_f32(&self) -> f32 {
        *self
    }

    fn from_f32(value: f32) -> Self {
        value
    }
}

impl SpringScalar for f64 {
    fn to_f32(&self) -> f32 {
        *self as f32
    }

    fn from_f32(value: f32) -> Self {
        value as f64
    }
}

/// Animation specification combining duration and easing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    /// Duration in milliseconds.
    pub duration_millis: u64,
    /// Easing function to apply.
    pub easing: Easing,
    /// Delay before starting animation in milliseconds.
    pub delay_millis: u64,
}

impl AnimationSpec {
    /// Create a tween animation with duration and easing.
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
            delay_millis: 0,
        }
    }

    /// Create a linear tween animation.
    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::LinearEasing)
    }

    /// Add a delay before the animation starts.
    pub fn with_delay(mut self, delay_millis: u64) -> Self {
        self.delay_millis = delay_millis;
        self
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::tween(300, Easing::FastOutSlowInEasing)
    }
}

/// Spring animation configuration.
///
/// Thresholds are in value units: pixels for a sheet offset, pixels per
/// second for velocity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
    /// Damping ratio. 1.0 = critically damped, < 1.0 = under-damped (bouncy), > 1.0 = over-damped.
    pub damping_ratio: f32,
    /// Stiffness constant. Higher values = faster animation.
    pub stiffness: f32,
    /// Velocity threshold to stop animation.
    pub velocity_threshold: f32,
    /// Position threshold to stop animation.
    pub position_threshold: f32,
    /// Stop at the target instead of oscillating past it.
    pub overshoot_clamping: bool,
}

impl SpringSpec {
    pub fn new(damping_ratio: f32, stiffness: f32) -> Self {
        Self {
            damping_ratio,
            stiffness,
            velocity_threshold: 2.0,
            position_threshold: 0.01,
            overshoot_clamping: false,
        }
    }

    /// Create a spring with default material design values.
    pub fn default_spring() -> Self {
        Self::new(1.0, 1500.0)
    }

    /// Create a bouncy spring.
    pub fn bouncy() -> Self {
        Self::new(0.5, 1500.0)
    }

    /// Create a stiff spring (fast, no bounce).
    pub fn stiff() -> Self {
        Self::new(1.0, 3000.0)
    }

    pub fn with_overshoot_clamping(mut self, clamp: bool) -> Self {
        self.overshoot_clamping = clamp;
        self
    }
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self::default_spring()
    }
}

/// Animation type specification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationType {
    /// Time-based tween animation.
    Tween(AnimationSpec),
    /// Physics-based spring animation.
    Spring(SpringSpec),
}

impl Default for AnimationType {
    fn default() -> Self {
        AnimationType::Tween(AnimationSpec::default())
    }
}

/// Outcome of advancing an [`Animatable`] by one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationStatus {
    /// No animation is in flight.
    Idle,
    /// Still interpolating; tick again next frame.
    Running,
    /// Reached the target on this frame. Reported exactly once per animation.
    Finished,
}

/// A value that moves toward a target over explicitly supplied frame time.
#[derive(Debug, Clone)]
pub struct Animatable<T: SpringScalar> {
    current: T,
    start: T,
    target: T,
    /// Value units per second. Only springs read it; retargeting keeps it.
    velocity: f32,
    animation_type: AnimationType,
    start_time_nanos: Option<u64>,
    last_frame_nanos: Option<u64>,
    running: bool,
}

impl<T: SpringScalar> Animatable<T> {
    /// Create a new animatable resting at `initial`.
    pub fn new(initial: T) -> Self {
        Self {
            current: initial.clone(),
            start: initial.clone(),
            target: initial,
            velocity: 0.0,
            animation_type: AnimationType::default(),
            start_time_nanos: None,
            last_frame_nanos: None,
            running: false,
        }
    }

    /// Animate from the current value to `target`.
    ///
    /// Any animation in flight is superseded. The next [`tick`](Self::tick)
    /// anchors the start time.
    pub fn animate_to(&mut self, target: T, animation: AnimationType) {
        self.start = self.current.clone();
        self.target = target;
        self.animation_type = animation;
        self.start_time_nanos = None;
        self.last_frame_nanos = None;
        self.running = true;
    }

    /// Jump to `value` and cancel any animation in flight.
    pub fn snap_to(&mut self, value: T) {
        self.current = value.clone();
        self.start = value.clone();
        self.target = value;
        self.velocity = 0.0;
        self.start_time_nanos = None;
        self.last_frame_nanos = None;
        self.running = false;
    }

    /// Cancel any animation in flight, keeping the current value.
    pub fn stop(&mut self) {
        self.snap_to(self.current.clone());
    }

    pub fn value(&self) -> T {
        self.current.clone()
    }

    /// Return the current animation target.
    pub fn target(&self) -> T {
        self.target.clone()
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advance the animation to `frame_time_nanos`.
    ///
    /// Timestamps must not go backwards; a stale timestamp is treated as zero
    /// elapsed time.
    pub fn tick(&mut self, frame_time_nanos: u64) -> AnimationStatus {
        if !self.running {
            return AnimationStatus::Idle;
        }
        let done = match self.animation_type {
            AnimationType::Tween(spec) => self.step_tween(spec, frame_time_nanos),
            AnimationType::Spring(spec) => self.step_spring(spec, frame_time_nanos),
        };
        if done {
            self.finish();
            AnimationStatus::Finished
        } else {
            AnimationStatus::Running
        }
    }

    fn finish(&mut self) {
        log::trace!("animation settled");
        self.snap_to(self.target.clone());
    }

    fn step_tween(&mut self, spec: AnimationSpec, frame_time_nanos: u64) -> bool {
        let start_time = *self.start_time_nanos.get_or_insert(frame_time_nanos);
        let elapsed_nanos = frame_time_nanos.saturating_sub(start_time);
        let delay_nanos = spec.delay_millis.saturating_mul(1_000_000);
        self.velocity = 0.0;

        if elapsed_nanos < delay_nanos {
            return false;
        }
        let duration_nanos = spec.duration_millis.saturating_mul(1_000_000).max(1);
        let linear_progress =
            ((elapsed_nanos - delay_nanos) as f32 / duration_nanos as f32).clamp(0.0, 1.0);
        let progress = spec.easing.transform(linear_progress);
        self.current = self.start.lerp(&self.target, progress);
        linear_progress >= 1.0
    }

    fn step_spring(&mut self, spec: SpringSpec, frame_time_nanos: u64) -> bool {
        let previous = self.last_frame_nanos.replace(frame_time_nanos);
        let dt = match previous {
            Some(previous) => frame_time_nanos.saturating_sub(previous) as f32 / 1_000_000_000.0,
            None => 0.0,
        };
        if dt == 0.0 {
            return false;
        }

        // Damped harmonic oscillator, semi-implicit Euler in fixed substeps.
        let stiffness = spec.stiffness;
        let damping = 2.0 * spec.damping_ratio * stiffness.sqrt();
        let target = self.target.to_f32();
        let mut position = self.current.to_f32();
        let mut velocity = self.velocity;
        let mut elapsed = 0.0f32;

        while elapsed < dt {
            let step = SPRING_TIMESTEP_SECS.min(dt - elapsed);
            let before = position;
            let force = -stiffness * (position - target) - damping * velocity;
            velocity += force * step;
            position += velocity * step;
            elapsed += step;

            if spec.overshoot_clamping && crossed(before, position, target) {
                position = target;
                velocity = 0.0;
                break;
            }
        }

        self.current = T::from_f32(position);
        self.velocity = velocity;

        let at_rest = velocity.abs() < spec.velocity_threshold;
        let near_target =
            <T as SpringScalar>::is_near_target(&self.current, &self.target, spec.position_threshold);
        at_rest && near_target
    }
}

/// Whether a step from `before` to `after` reached or passed `target`.
fn crossed(before: f32, after: f32, target: f32) -> bool {
    let before_side = before - target;
    if before_side == 0.0 {
        return false;
    }
    let after_side = after - target;
    after_side == 0.0 || before_side.signum() != after_side.signum()
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
