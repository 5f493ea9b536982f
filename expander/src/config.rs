//! Row configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::easing::Easing;
use crate::state::Orientation;

pub const DEFAULT_DURATION_MS: u64 = 300;
pub const DEFAULT_PARALLAX: f32 = 1.0;

/// How a single row expands. Every field has a default, so an empty table is valid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpandableConfig {
    /// Animation duration in milliseconds.
    pub duration_ms: u64,
    /// Start fully expanded.
    pub expanded: bool,
    pub orientation: Orientation,
    /// Share of the size delta applied as counter-translation, clamped into `0.0..=1.0`.
    pub parallax: f32,
    pub easing: Easing,
}

impl Default for ExpandableConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_DURATION_MS,
            expanded: false,
            orientation: Orientation::default(),
            parallax: DEFAULT_PARALLAX,
            easing: Easing::default(),
        }
    }
}

impl ExpandableConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn with_expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_parallax(mut self, parallax: f32) -> Self {
        self.parallax = clamp_parallax(parallax);
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

/// Clamp a parallax factor into `0.0..=1.0`. NaN maps to `0.0`.
pub fn clamp_parallax(parallax: f32) -> f32 {
    if parallax.is_nan() {
        0.0
    } else {
        parallax.clamp(0.0, 1.0)
    }
}
