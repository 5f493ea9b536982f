//! Error types

/// Errors raised while configuring an expandable row.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Orientation value outside `0` (horizontal) and `1` (vertical).
    #[error("orientation must be either 0 (horizontal) or 1 (vertical), got {0}")]
    InvalidOrientation(i64),
}

pub type Result<T> = std::result::Result<T, Error>;
