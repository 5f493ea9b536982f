//! Single-selection coordination across rows.

use crate::expandable::Expandable;

/// Which row, if any, is currently selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionState {
    selected: Option<usize>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_selected(&self, position: usize) -> bool {
        self.selected == Some(position)
    }

    pub fn select(&mut self, position: usize) {
        self.selected = Some(position);
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }
}

/// A list row: the title's selected styling plus its expandable content.
#[derive(Debug, Default)]
pub struct Row {
    selected: bool,
    expandable: Expandable,
}

impl Row {
    pub fn new(expandable: Expandable) -> Self {
        Self {
            selected: false,
            expandable,
        }
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    pub fn expandable(&self) -> &Expandable {
        &self.expandable
    }

    pub fn expandable_mut(&mut self) -> &mut Expandable {
        &mut self.expandable
    }
}

/// The rows a coordinator can reach.
pub trait RowHost {
    fn item_count(&self) -> usize;

    /// The row at `position`, or None if it is not currently rendered.
    fn rendered_row(&mut self, position: usize) -> Option<&mut Row>;
}

/// Result of a tap: the selection before and after.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TapOutcome {
    pub previous: Option<usize>,
    pub selected: Option<usize>,
}

impl TapOutcome {
    pub fn changed(&self) -> bool {
        self.previous != self.selected
    }
}

/// Keeps at most one row expanded.
#[derive(Debug, Clone, Default)]
pub struct Coordinator {
    selection: SelectionState,
}

impl Coordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Handle a tap on the row at `position`.
    ///
    /// Collapses the previously selected row if it is rendered, then either
    /// clears the selection (tap on the selected row) or expands and selects
    /// the tapped row. Out-of-range taps are ignored and return None. The
    /// caller re-binds the list afterwards.
    pub fn tap(&mut self, position: usize, host: &mut impl RowHost) -> Option<TapOutcome> {
        if position >= host.item_count() {
            log::warn!(
                "ignoring tap on row {} of {}",
                position,
                host.item_count()
            );
            return None;
        }

        let previous = self.selection.selected();
        if let Some(current) = previous
            && let Some(row) = host.rendered_row(current)
        {
            row.set_selected(false);
            row.expandable_mut().collapse(true);
        }

        if previous == Some(position) {
            self.selection.clear();
        } else {
            if let Some(row) = host.rendered_row(position) {
                row.set_selected(true);
                row.expandable_mut().expand(true);
            }
            self.selection.select(position);
        }

        let outcome = TapOutcome {
            previous,
            selected: self.selection.selected(),
        };
        log::debug!(
            "selection changed from {:?} to {:?}",
            outcome.previous,
            outcome.selected
        );
        Some(outcome)
    }
}
