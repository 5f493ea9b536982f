//! Easing curves for expansion animations.

use serde::{Deserialize, Serialize};

const DEFAULT_TENSION: f32 = 2.0;

/// Easing function applied to animation progress.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    /// Linear interpolation (constant speed)
    Linear,
    /// Ease in (slow start, fast end)
    EaseIn,
    /// Ease out (fast start, slow end)
    EaseOut,
    /// Ease in-out (slow start and end)
    EaseInOut,
    /// Material standard curve, cubic bezier (0.4, 0.0, 0.2, 1.0)
    #[default]
    FastOutSlowIn,
    /// Runs past the target and settles back onto it
    Overshoot {
        #[serde(default = "default_tension")]
        tension: f32,
    },
}

fn default_tension() -> f32 {
    DEFAULT_TENSION
}

impl Easing {
    /// Overshoot with the default tension.
    pub fn overshoot() -> Self {
        Easing::Overshoot {
            tension: DEFAULT_TENSION,
        }
    }

    /// Apply easing to progress (0.0 to 1.0).
    ///
    /// Progress outside the unit range is clamped first. The result is in
    /// `0.0..=1.0` for every curve except `Overshoot`, which exceeds `1.0`
    /// briefly before landing on it.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::FastOutSlowIn => CubicBezier::FAST_OUT_SLOW_IN.solve(t),
            Easing::Overshoot { tension } => {
                let t = t - 1.0;
                t * t * ((tension + 1.0) * t + tension) + 1.0
            }
        }
    }
}

/// Cubic bezier through (0,0) and (1,1) with two control points.
#[derive(Debug, Clone, Copy)]
struct CubicBezier {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

impl CubicBezier {
    const FAST_OUT_SLOW_IN: CubicBezier = CubicBezier {
        x1: 0.4,
        y1: 0.0,
        x2: 0.2,
        y2: 1.0,
    };

    const EPSILON: f32 = 1e-6;

    fn component(p1: f32, p2: f32, s: f32) -> f32 {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
    }

    fn derivative(p1: f32, p2: f32, s: f32) -> f32 {
        let inv = 1.0 - s;
        3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
    }

    /// Find the curve parameter whose x equals `x`, then return its y.
    fn solve(self, x: f32) -> f32 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }

        // Newton first, bisection if the slope flattens out.
        let mut s = x;
        for _ in 0..8 {
            let err = Self::component(self.x1, self.x2, s) - x;
            if err.abs() < Self::EPSILON {
                return Self::component(self.y1, self.y2, s);
            }
            let slope = Self::derivative(self.x1, self.x2, s);
            if slope.abs() < Self::EPSILON {
                break;
            }
            s = (s - err / slope).clamp(0.0, 1.0);
        }

        let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
        s = x;
        for _ in 0..32 {
            let value = Self::component(self.x1, self.x2, s);
            if (value - x).abs() < Self::EPSILON {
                break;
            }
            if value < x {
                lo = s;
            } else {
                hi = s;
            }
            s = (lo + hi) / 2.0;
        }
        Self::component(self.y1, self.y2, s)
    }
}
