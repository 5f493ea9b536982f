//! Expansion state machine for a single row.
//!
//! A row owns one fraction in `0.0..=1.0`. The discrete [`ExpansionState`] is
//! derived from the fraction and the direction it last moved in:
//! - `0.0` is `Collapsed`, `1.0` is `Expanded`
//! - anything in between is `Expanding` or `Collapsing`
//!
//! Animations are sampled by the host calling [`Expandable::tick`] once per
//! frame. Every fraction change notifies the registered listeners.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::config::{ExpandableConfig, clamp_parallax};
use crate::easing::Easing;
use crate::error::Result;
use crate::listener::{ExpansionUpdate, ListenerId, Listeners};
use crate::state::{ExpansionState, Orientation};
use crate::tween::{Sample, TimedTweens, Tween, TweenFactory, TweenSpec};

/// What survives a lifecycle reset: only whether the row was expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Snapshot {
    pub expanded: bool,
}

/// The in-flight animation and the end it is heading for.
#[derive(Debug)]
struct ActiveTween {
    tween: Box<dyn Tween>,
    expand: bool,
}

impl ActiveTween {
    fn target(&self) -> f32 {
        target_fraction(self.expand)
    }
}

fn target_fraction(expand: bool) -> f32 {
    if expand { 1.0 } else { 0.0 }
}

/// A row that expands and collapses with an animated size transition.
#[derive(Debug)]
pub struct Expandable {
    fraction: f32,
    state: ExpansionState,
    orientation: Orientation,
    parallax: f32,
    duration: Duration,
    easing: Easing,
    tween: Option<ActiveTween>,
    tweens: Box<dyn TweenFactory>,
    listeners: Listeners,
    layout_requested: bool,
}

impl Default for Expandable {
    fn default() -> Self {
        Self::from_config(&ExpandableConfig::default())
    }
}

impl Expandable {
    /// Collapsed row with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &ExpandableConfig) -> Self {
        let fraction = target_fraction(config.expanded);
        Self {
            fraction,
            state: ExpansionState::terminal_for(config.expanded),
            orientation: config.orientation,
            parallax: clamp_parallax(config.parallax),
            duration: config.duration(),
            easing: config.easing,
            tween: None,
            tweens: Box::new(TimedTweens),
            listeners: Listeners::new(),
            layout_requested: false,
        }
    }

    /// Replace the tween factory used for future animations.
    pub fn with_tweens(mut self, tweens: impl TweenFactory + 'static) -> Self {
        self.tweens = Box::new(tweens);
        self
    }

    pub fn set_tweens(&mut self, tweens: Box<dyn TweenFactory>) {
        self.tweens = tweens;
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    pub fn expansion(&self) -> f32 {
        self.fraction
    }

    pub fn state(&self) -> ExpansionState {
        self.state
    }

    /// True while expanding or expanded.
    pub fn is_expanded(&self) -> bool {
        self.state.is_expanded()
    }

    /// Hidden exactly when collapsed.
    pub fn is_visible(&self) -> bool {
        self.state != ExpansionState::Collapsed
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn parallax(&self) -> f32 {
        self.parallax
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    // -------------------------------------------------------------------------
    // Expansion control
    // -------------------------------------------------------------------------

    pub fn toggle(&mut self, animate: bool) {
        if self.is_expanded() {
            self.collapse(animate);
        } else {
            self.expand(animate);
        }
    }

    pub fn expand(&mut self, animate: bool) {
        self.set_expanded(true, animate);
    }

    pub fn collapse(&mut self, animate: bool) {
        self.set_expanded(false, animate);
    }

    /// Head for the expanded or collapsed end. No-op if already heading there.
    pub fn set_expanded(&mut self, expand: bool, animate: bool) {
        if expand == self.is_expanded() {
            return;
        }

        if animate {
            self.animate_to(expand);
        } else {
            self.cancel_animation();
            self.set_expansion(target_fraction(expand));
            self.settle(expand);
        }
    }

    /// Set the fraction directly, clamped into `0.0..=1.0`.
    ///
    /// Exact equality with the current fraction is a silent no-op. Otherwise the
    /// state is re-derived, layout is requested and every listener is notified.
    pub fn set_expansion(&mut self, fraction: f32) {
        if fraction.is_nan() {
            log::warn!("ignoring NaN expansion fraction");
            return;
        }
        let fraction = fraction.clamp(0.0, 1.0);
        if self.fraction == fraction {
            return;
        }

        self.state = ExpansionState::derive(self.fraction, fraction);
        self.fraction = fraction;
        self.layout_requested = true;

        self.listeners.notify(&ExpansionUpdate {
            fraction,
            state: self.state,
        });
    }

    /// Land a row stranded in a transitional state by a cancelled animation.
    ///
    /// Jumps to the end it was heading for. No-op while animating or when
    /// already terminal.
    pub fn resolve(&mut self) {
        if self.tween.is_some() || self.state.is_terminal() {
            return;
        }
        let expand = self.is_expanded();
        self.set_expansion(target_fraction(expand));
        self.settle(expand);
    }

    /// Snap a transitional state onto its terminal value once the fraction is there.
    fn settle(&mut self, expand: bool) {
        if self.fraction == target_fraction(expand) && !self.state.is_terminal() {
            self.state = ExpansionState::terminal_for(expand);
            self.layout_requested = true;
        }
    }

    // -------------------------------------------------------------------------
    // Animation
    // -------------------------------------------------------------------------

    fn animate_to(&mut self, expand: bool) {
        self.cancel_animation();

        let spec = TweenSpec::new(
            self.fraction,
            target_fraction(expand),
            self.duration,
            self.easing,
        );
        log::trace!(
            "starting {} from {:.3} over {:?}",
            if expand { "expand" } else { "collapse" },
            spec.from,
            spec.duration
        );

        self.state = ExpansionState::transitional_for(expand);
        self.layout_requested = true;
        self.tween = Some(ActiveTween {
            tween: self.tweens.create(spec),
            expand,
        });
    }

    /// Stop the in-flight animation, leaving the fraction where it is.
    ///
    /// No terminal correction is applied. Used when a new animation supersedes
    /// the current one or the row is detached.
    pub fn cancel_animation(&mut self) {
        if let Some(mut active) = self.tween.take() {
            active.tween.cancel();
            log::trace!("cancelled animation at {:.3}", self.fraction);
        }
    }

    /// Advance the animation to `now`. Returns true while still animating.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(active) = self.tween.as_mut() else {
            return false;
        };
        let sample = active.tween.sample(now);
        let expand = active.expand;
        let target = active.target();

        match sample {
            Sample::Running(value) => {
                self.set_expansion(value);
                true
            }
            Sample::Finished(value) => {
                self.tween = None;
                self.set_expansion(value);
                self.state = ExpansionState::terminal_for(expand);
                self.set_expansion(target);
                log::trace!("animation finished at {}", self.state);
                false
            }
        }
    }

    // -------------------------------------------------------------------------
    // Layout
    // -------------------------------------------------------------------------

    /// Size along the layout axis for a fully expanded size of `base`.
    pub fn measured_size(&self, base: u16) -> u16 {
        let hidden = (f32::from(base) * (1.0 - self.fraction)).round();
        base.saturating_sub(hidden.max(0.0) as u16)
    }

    /// Apply the expansion to the axis selected by the orientation.
    pub fn measure(&self, width: u16, height: u16) -> (u16, u16) {
        match self.orientation {
            Orientation::Horizontal => (self.measured_size(width), height),
            Orientation::Vertical => (width, self.measured_size(height)),
        }
    }

    /// Content translation along the layout axis.
    ///
    /// Vertical rows translate content back (negative), horizontal rows forward.
    pub fn parallax_offset(&self, base: u16) -> f32 {
        let delta = f32::from(base - self.measured_size(base));
        let offset = self.parallax * delta;
        match self.orientation {
            Orientation::Horizontal => offset,
            Orientation::Vertical => -offset,
        }
    }

    pub fn needs_layout(&self) -> bool {
        self.layout_requested
    }

    /// Check and clear the layout request.
    pub fn take_layout_request(&mut self) -> bool {
        std::mem::take(&mut self.layout_requested)
    }

    // -------------------------------------------------------------------------
    // Configuration
    // -------------------------------------------------------------------------

    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    /// Stored clamped into `0.0..=1.0`.
    pub fn set_parallax(&mut self, parallax: f32) {
        self.parallax = clamp_parallax(parallax);
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        if self.orientation != orientation {
            self.orientation = orientation;
            self.layout_requested = true;
        }
    }

    /// Set the orientation from its numeric value (0 horizontal, 1 vertical).
    ///
    /// Any other value fails and leaves the orientation unchanged.
    pub fn set_orientation_value(&mut self, value: i64) -> Result<()> {
        let orientation = Orientation::try_from(value)?;
        self.set_orientation(orientation);
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Listeners
    // -------------------------------------------------------------------------

    /// Register a listener called synchronously on every fraction change.
    pub fn add_listener(
        &mut self,
        listener: impl FnMut(&ExpansionUpdate) + 'static,
    ) -> ListenerId {
        self.listeners.add(listener)
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    pub fn clear_listeners(&mut self) {
        self.listeners.clear();
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    // -------------------------------------------------------------------------
    // Snapshot
    // -------------------------------------------------------------------------

    pub fn save_state(&self) -> Snapshot {
        Snapshot {
            expanded: self.is_expanded(),
        }
    }

    /// Restore to a terminal state. Listeners are not notified.
    pub fn restore_state(&mut self, snapshot: Snapshot) {
        self.cancel_animation();
        self.fraction = target_fraction(snapshot.expanded);
        self.state = ExpansionState::terminal_for(snapshot.expanded);
        self.layout_requested = true;
    }
}
