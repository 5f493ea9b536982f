pub mod adapter;
pub mod config;
pub mod easing;
pub mod error;
pub mod expandable;
pub mod listener;
pub mod selection;
pub mod state;
pub mod tween;

pub use adapter::{ListAdapter, SelectionEvent};
pub use config::ExpandableConfig;
pub use easing::Easing;
pub use error::{Error, Result};
pub use expandable::{Expandable, Snapshot};
pub use listener::{ExpansionUpdate, ListenerId};
pub use selection::{Coordinator, Row, RowHost, SelectionState, TapOutcome};
pub use state::{ExpansionState, Orientation};
pub use tween::{InstantTweens, Sample, TimedTween, TimedTweens, Tween, TweenFactory, TweenSpec};
