//! Expansion update listeners.

use std::fmt;

use crate::state::ExpansionState;

/// Payload delivered to listeners on every fraction change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpansionUpdate {
    pub fraction: f32,
    pub state: ExpansionState,
}

/// Handle returned by registration, used to detach the listener again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Callback = Box<dyn FnMut(&ExpansionUpdate)>;

/// Ordered set of listeners owned by one row.
#[derive(Default)]
pub struct Listeners {
    next_id: u64,
    entries: Vec<(ListenerId, Callback)>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, callback: impl FnMut(&ExpansionUpdate) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(callback)));
        id
    }

    /// Returns true if the listener was registered.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        before != self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Invoke every listener in registration order.
    pub fn notify(&mut self, update: &ExpansionUpdate) {
        for (_, callback) in &mut self.entries {
            callback(update);
        }
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.len())
            .finish()
    }
}
