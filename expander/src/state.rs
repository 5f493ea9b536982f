//! Expansion state and layout orientation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Discrete state of an expandable row, derived from its fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpansionState {
    #[default]
    Collapsed,
    Collapsing,
    Expanding,
    Expanded,
}

impl ExpansionState {
    /// Derive the state reached when the fraction moves from `previous` to `next`.
    ///
    /// Exactly `0.0` is always `Collapsed` and exactly `1.0` is always `Expanded`,
    /// regardless of direction. Anything in between follows the sign of the delta.
    pub fn derive(previous: f32, next: f32) -> Self {
        if next == 0.0 {
            ExpansionState::Collapsed
        } else if next == 1.0 {
            ExpansionState::Expanded
        } else if next - previous < 0.0 {
            ExpansionState::Collapsing
        } else {
            ExpansionState::Expanding
        }
    }

    /// The state a row settles in at the expanded or collapsed end.
    pub fn terminal_for(expand: bool) -> Self {
        if expand {
            ExpansionState::Expanded
        } else {
            ExpansionState::Collapsed
        }
    }

    /// The state a row reports while animating towards that end.
    pub fn transitional_for(expand: bool) -> Self {
        if expand {
            ExpansionState::Expanding
        } else {
            ExpansionState::Collapsing
        }
    }

    /// `Collapsed` and `Expanded` are terminal; the others are transient.
    pub fn is_terminal(self) -> bool {
        matches!(self, ExpansionState::Collapsed | ExpansionState::Expanded)
    }

    /// True while heading towards or resting at the expanded end.
    pub fn is_expanded(self) -> bool {
        matches!(self, ExpansionState::Expanding | ExpansionState::Expanded)
    }
}

impl fmt::Display for ExpansionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExpansionState::Collapsed => "collapsed",
            ExpansionState::Collapsing => "collapsing",
            ExpansionState::Expanding => "expanding",
            ExpansionState::Expanded => "expanded",
        };
        f.write_str(name)
    }
}

/// Axis along which a row grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "OrientationRepr", into = "OrientationRepr")]
pub enum Orientation {
    Horizontal,
    #[default]
    Vertical,
}

impl Orientation {
    pub const HORIZONTAL: i64 = 0;
    pub const VERTICAL: i64 = 1;

    pub fn value(self) -> i64 {
        match self {
            Orientation::Horizontal => Self::HORIZONTAL,
            Orientation::Vertical => Self::VERTICAL,
        }
    }
}

impl TryFrom<i64> for Orientation {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            Self::HORIZONTAL => Ok(Orientation::Horizontal),
            Self::VERTICAL => Ok(Orientation::Vertical),
            other => Err(Error::InvalidOrientation(other)),
        }
    }
}

/// Accepts either the name or the numeric value in configuration files.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum OrientationRepr {
    Value(i64),
    Name(OrientationName),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum OrientationName {
    Horizontal,
    Vertical,
}

impl TryFrom<OrientationRepr> for Orientation {
    type Error = Error;

    fn try_from(repr: OrientationRepr) -> Result<Self, Self::Error> {
        match repr {
            OrientationRepr::Value(value) => Orientation::try_from(value),
            OrientationRepr::Name(OrientationName::Horizontal) => Ok(Orientation::Horizontal),
            OrientationRepr::Name(OrientationName::Vertical) => Ok(Orientation::Vertical),
        }
    }
}

impl From<Orientation> for OrientationRepr {
    fn from(orientation: Orientation) -> Self {
        match orientation {
            Orientation::Horizontal => OrientationRepr::Name(OrientationName::Horizontal),
            Orientation::Vertical => OrientationRepr::Name(OrientationName::Vertical),
        }
    }
}
