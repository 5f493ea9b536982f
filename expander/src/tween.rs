//! Tween capability driving expansion animations.
//!
//! The state machine never talks to a concrete animation engine. It asks a
//! [`TweenFactory`] for a [`Tween`] and samples it once per frame:
//! - [`TimedTweens`] interpolate over wall-clock time through an easing curve
//! - [`InstantTweens`] finish on their first sample (reduced motion)

use std::fmt;
use std::time::{Duration, Instant};

use crate::easing::Easing;

/// Parameters for a single interpolation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenSpec {
    pub from: f32,
    pub to: f32,
    pub duration: Duration,
    pub easing: Easing,
}

impl TweenSpec {
    pub fn new(from: f32, to: f32, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            easing,
        }
    }

    /// Value at eased progress `t`.
    pub fn lerp(&self, t: f32) -> f32 {
        self.from + (self.to - self.from) * t
    }
}

/// One frame's worth of output from a tween.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sample {
    /// Interpolation still in progress.
    Running(f32),
    /// The tween has run its course (or was cancelled).
    Finished(f32),
}

impl Sample {
    pub fn value(self) -> f32 {
        match self {
            Sample::Running(value) | Sample::Finished(value) => value,
        }
    }

    pub fn is_finished(self) -> bool {
        matches!(self, Sample::Finished(_))
    }
}

/// A cancellable interpolation sampled at frame cadence.
pub trait Tween: fmt::Debug {
    /// Sample the tween at `now`.
    ///
    /// The first call fixes the start time, so the first frame yields `from`.
    fn sample(&mut self, now: Instant) -> Sample;

    /// Stop the tween. Later samples report `Finished` at the last value.
    fn cancel(&mut self);

    fn is_cancelled(&self) -> bool;

    fn spec(&self) -> &TweenSpec;
}

/// Creates a fresh tween for every animation started by a row.
pub trait TweenFactory: fmt::Debug {
    fn create(&self, spec: TweenSpec) -> Box<dyn Tween>;
}

/// Interpolates over elapsed time.
#[derive(Debug, Clone)]
pub struct TimedTween {
    spec: TweenSpec,
    start_time: Option<Instant>,
    last_value: f32,
    cancelled: bool,
}

impl TimedTween {
    pub fn new(spec: TweenSpec) -> Self {
        Self {
            last_value: spec.from,
            spec,
            start_time: None,
            cancelled: false,
        }
    }

    /// Raw progress (0.0 to 1.0) at `now`, before easing.
    fn progress(&self, start: Instant, now: Instant) -> f32 {
        if self.spec.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(start);
        (elapsed.as_secs_f32() / self.spec.duration.as_secs_f32()).min(1.0)
    }
}

impl Tween for TimedTween {
    fn sample(&mut self, now: Instant) -> Sample {
        if self.cancelled {
            return Sample::Finished(self.last_value);
        }

        let start = *self.start_time.get_or_insert(now);
        let progress = self.progress(start, now);
        self.last_value = self.spec.lerp(self.spec.easing.apply(progress));

        if progress >= 1.0 {
            Sample::Finished(self.last_value)
        } else {
            Sample::Running(self.last_value)
        }
    }

    fn cancel(&mut self) {
        self.cancelled = true;
    }

    fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    fn spec(&self) -> &TweenSpec {
        &self.spec
    }
}

/// Default factory: time-based tweens.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimedTweens;

impl TweenFactory for TimedTweens {
    fn create(&self, spec: TweenSpec) -> Box<dyn Tween> {
        Box::new(TimedTween::new(spec))
    }
}

/// Tween that lands on its target on the first sample.
#[derive(Debug, Clone)]
pub struct InstantTween {
    spec: TweenSpec,
    cancelled: bool,
}

impl Tween for InstantTween {
    fn sample(&mut self, _now: Instant) -> Sample {
        if self.cancelled {
            Sample::Finished(self.spec.from)
        } else {
            Sample::Finished(self.spec.to)
        }
    }

    fn cancel(&mut self) {
        self.cancelled = true;
    }

    fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    fn spec(&self) -> &TweenSpec {
        &self.spec
    }
}

/// Reduced motion: every animation completes on its first frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantTweens;

impl TweenFactory for InstantTweens {
    fn create(&self, spec: TweenSpec) -> Box<dyn Tween> {
        Box::new(InstantTween {
            spec,
            cancelled: false,
        })
    }
}
