//! List adapter binding static items into expandable rows.

use std::ops::Range;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Instant;

use crate::config::ExpandableConfig;
use crate::expandable::Expandable;
use crate::selection::{Coordinator, Row, RowHost, SelectionState, TapOutcome};
use crate::state::ExpansionState;
use crate::tween::{TimedTweens, TweenFactory};

/// Emitted by rows as their expansion progresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionEvent {
    /// The row at `position` started expanding.
    Activated { position: usize },
}

/// Rows plus the window of positions currently rendered.
#[derive(Debug)]
struct Rows {
    rows: Vec<Row>,
    rendered: Range<usize>,
}

impl Rows {
    fn is_rendered(&self, position: usize) -> bool {
        self.rendered.contains(&position)
    }
}

impl RowHost for Rows {
    fn item_count(&self) -> usize {
        self.rows.len()
    }

    fn rendered_row(&mut self, position: usize) -> Option<&mut Row> {
        if self.is_rendered(position) {
            self.rows.get_mut(position)
        } else {
            None
        }
    }
}

/// Hosts a fixed list of items, one expandable row per position.
///
/// Taps go through a [`Coordinator`] so at most one row is expanded. After
/// every tap the whole rendered window is re-bound so row styling always
/// matches the selection.
#[derive(Debug)]
pub struct ListAdapter<T> {
    items: Vec<T>,
    rows: Rows,
    coordinator: Coordinator,
    events: Receiver<SelectionEvent>,
}

impl<T> ListAdapter<T> {
    pub fn new(items: impl IntoIterator<Item = T>, config: ExpandableConfig) -> Self {
        Self::with_tweens(items, config, TimedTweens)
    }

    /// Build with a custom tween factory, cloned into every row.
    pub fn with_tweens<F>(
        items: impl IntoIterator<Item = T>,
        config: ExpandableConfig,
        tweens: F,
    ) -> Self
    where
        F: TweenFactory + Clone + 'static,
    {
        let items: Vec<T> = items.into_iter().collect();
        let (events_tx, events_rx) = mpsc::channel();

        // Rows always start collapsed; selection is the single source of truth.
        let row_config = config.with_expanded(false);
        let rows = (0..items.len())
            .map(|position| {
                let mut expandable =
                    Expandable::from_config(&row_config).with_tweens(tweens.clone());
                attach_activation_listener(&mut expandable, position, events_tx.clone());
                Row::new(expandable)
            })
            .collect();

        let len = items.len();
        let mut adapter = Self {
            items,
            rows: Rows {
                rows,
                rendered: 0..len,
            },
            coordinator: Coordinator::new(),
            events: events_rx,
        };
        adapter.notify_data_set_changed();
        adapter
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item(&self, position: usize) -> Option<&T> {
        self.items.get(position)
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn row(&self, position: usize) -> Option<&Row> {
        self.rows.rows.get(position)
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows.rows
    }

    pub fn selection(&self) -> &SelectionState {
        self.coordinator.selection()
    }

    pub fn rendered(&self) -> Range<usize> {
        self.rows.rendered.clone()
    }

    pub fn is_rendered(&self, position: usize) -> bool {
        self.rows.is_rendered(position)
    }

    /// True if any rendered row is animating.
    pub fn is_animating(&self) -> bool {
        self.rows
            .rendered
            .clone()
            .any(|position| self.rows.rows[position].expandable().is_animating())
    }

    /// True if any row changed size since its request was last taken.
    pub fn needs_layout(&self) -> bool {
        self.rows.rows.iter().any(|row| row.expandable().needs_layout())
    }

    /// Check and clear every row's layout request.
    pub fn take_layout_requests(&mut self) -> bool {
        self.rows.rows.iter_mut().fold(false, |requested, row| {
            row.expandable_mut().take_layout_request() | requested
        })
    }

    // -------------------------------------------------------------------------
    // Binding
    // -------------------------------------------------------------------------

    /// Bring the row at `position` in line with the selection.
    pub fn bind(&mut self, position: usize) {
        let selected = self.coordinator.selection().is_selected(position);
        let Some(row) = self.rows.rows.get_mut(position) else {
            return;
        };
        row.set_selected(selected);
        let expandable = row.expandable_mut();
        expandable.set_expanded(selected, false);
        expandable.resolve();
    }

    /// Re-bind every rendered row.
    pub fn notify_data_set_changed(&mut self) {
        for position in self.rows.rendered.clone() {
            self.bind(position);
        }
    }

    /// Change the rendered window.
    ///
    /// Rows leaving it are detached (their animation is cancelled); rows
    /// entering it are bound.
    pub fn set_rendered(&mut self, rendered: Range<usize>) {
        let len = self.rows.rows.len();
        let rendered = rendered.start.min(len)..rendered.end.min(len);
        let previous = std::mem::replace(&mut self.rows.rendered, rendered.clone());

        for position in previous.clone() {
            if !rendered.contains(&position) {
                self.rows.rows[position].expandable_mut().cancel_animation();
            }
        }
        for position in rendered {
            if !previous.contains(&position) {
                self.bind(position);
            }
        }
    }

    // -------------------------------------------------------------------------
    // Interaction
    // -------------------------------------------------------------------------

    /// Tap the title of the row at `position`.
    pub fn tap(&mut self, position: usize) -> Option<TapOutcome> {
        let outcome = self.coordinator.tap(position, &mut self.rows)?;
        self.notify_data_set_changed();
        Some(outcome)
    }

    /// Advance every rendered row's animation. Returns true while any still animates.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut animating = false;
        for position in self.rows.rendered.clone() {
            animating |= self.rows.rows[position].expandable_mut().tick(now);
        }
        animating
    }

    /// Drain pending selection events.
    pub fn poll_events(&mut self) -> Vec<SelectionEvent> {
        self.events.try_iter().collect()
    }
}

/// Emit `Activated` on the transition into `Expanding`.
///
/// Reaching `Expanded` never fires, so a jump straight there (reduced motion,
/// re-binding a selected row) stays silent.
fn attach_activation_listener(
    expandable: &mut Expandable,
    position: usize,
    tx: Sender<SelectionEvent>,
) {
    let mut last = expandable.state();
    expandable.add_listener(move |update| {
        if update.state == ExpansionState::Expanding && last != ExpansionState::Expanding {
            let _ = tx.send(SelectionEvent::Activated { position });
        }
        last = update.state;
    });
}
