//! Easing curves for tweens.

/// Easing functions for tweens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// Linear interpolation (no easing).
    LinearEasing,
    /// Ease in using cubic curve.
    EaseIn,
    /// Ease out using cubic curve.
    EaseOut,
    /// Ease in and out using cubic curve.
    EaseInOut,
    /// Quadratic ease in/out, the mobile runtime's default timing curve.
    QuadInOut,
    /// Fast out, slow in (material design standard).
    FastOutSlowInEasing,
    /// Linear out, slow in (material design).
    LinearOutSlowInEasing,
    /// Fast out, linear in (material design).
    FastOutLinearEasing,
}

impl Easing {
    /// Apply the easing function to a linear fraction [0, 1].
    pub fn transform(&self, fraction: f32) -> f32 {
        match self {
            Easing::LinearEasing => fraction.clamp(0.0, 1.0),
            Easing::QuadInOut => quad_in_out(fraction.clamp(0.0, 1.0)),
            Easing::EaseIn => CubicBezier::new(0.42, 0.0, 1.0, 1.0).solve(fraction),
            Easing::EaseOut => CubicBezier::new(0.0, 0.0, 0.58, 1.0).solve(fraction),
            Easing::EaseInOut => CubicBezier::new(0.42, 0.0, 0.58, 1.0).solve(fraction),
            Easing::FastOutSlowInEasing => CubicBezier::new(0.4, 0.0, 0.2, 1.0).solve(fraction),
            Easing::LinearOutSlowInEasing => CubicBezier::new(0.0, 0.0, 0.2, 1.0).solve(fraction),
            Easing::FastOutLinearEasing => CubicBezier::new(0.4, 0.0, 1.0, 1.0).solve(fraction),
        }
    }
}

fn quad_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Polynomial coefficients of a unit cubic bezier through (0,0) and (1,1).
#[derive(Debug, Clone, Copy)]
struct CubicBezier {
    ax: f32,
    bx: f32,
    cx: f32,
    ay: f32,
    by: f32,
    cy: f32,
}

impl CubicBezier {
    fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        let cx = 3.0 * x1;
        let bx = 3.0 * (x2 - x1) - cx;
        let cy = 3.0 * y1;
        let by = 3.0 * (y2 - y1) - cy;
        Self {
            ax: 1.0 - cx - bx,
            bx,
            cx,
            ay: 1.0 - cy - by,
            by,
            cy,
        }
    }

    fn x_at(&self, t: f32) -> f32 {
        ((self.ax * t + self.bx) * t + self.cx) * t
    }

    fn y_at(&self, t: f32) -> f32 {
        ((self.ay * t + self.by) * t + self.cy) * t
    }

    fn dx_at(&self, t: f32) -> f32 {
        (3.0 * self.ax * t + 2.0 * self.bx) * t + self.cx
    }

    /// Map an x fraction to the curve's y value.
    fn solve(&self, fraction: f32) -> f32 {
        if fraction <= 0.0 {
            return 0.0;
        }
        if fraction >= 1.0 {
            return 1.0;
        }
        let t = self
            .newton(fraction)
            .unwrap_or_else(|| self.bisect(fraction));
        self.y_at(t)
    }

    fn newton(&self, fraction: f32) -> Option<f32> {
        let mut t = fraction;
        for _ in 0..8 {
            let x = self.x_at(t) - fraction;
            if x.abs() < 1e-6 {
                return Some(t);
            }
            let dx = self.dx_at(t);
            if dx.abs() < 1e-6 {
                return None;
            }
            t = (t - x / dx).clamp(0.0, 1.0);
        }
        None
    }

    fn bisect(&self, fraction: f32) -> f32 {
        let (mut lo, mut hi) = (0.0f32, 1.0f32);
        let mut t = fraction;
        for _ in 0..16 {
            let delta = self.x_at(t) - fraction;
            if delta.abs() < 1e-6 {
                break;
            }
            if delta > 0.0 {
                hi = t;
            } else {
                lo = t;
            }
            t = 0.5 * (lo + hi);
        }
        t
    }
}

#[cfg(test)]
#[path = "tests/easing_tests.rs"]
mod tests;
