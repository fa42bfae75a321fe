//! Sides, axes, and alignment

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two layout axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// The perpendicular axis
    pub fn cross(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

/// Edge of the reference element the floating element is placed against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    /// Auto-placement tie-break order, highest priority first
    pub const PRIORITY: [Side; 4] = [Side::Bottom, Side::Top, Side::Right, Side::Left];

    pub fn opposite(self) -> Self {
        match self {
            Side::Top => Side::Bottom,
            Side::Bottom => Side::Top,
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// The axis the placement moves along when leaving the reference.
    ///
    /// Top and Bottom share the vertical axis; Left and Right the horizontal.
    pub fn axis(self) -> Axis {
        match self {
            Side::Top | Side::Bottom => Axis::Vertical,
            Side::Left | Side::Right => Axis::Horizontal,
        }
    }

    /// Whether the floating box sits before the reference on its axis
    pub fn is_leading(self) -> bool {
        matches!(self, Side::Top | Side::Left)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Bottom => "bottom",
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Requested side, where `Auto` lets the engine choose
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreferredSide {
    Top,
    #[default]
    Bottom,
    Left,
    Right,
    Auto,
}

impl PreferredSide {
    /// The concrete side, or `None` for `Auto`
    pub fn side(self) -> Option<Side> {
        match self {
            PreferredSide::Top => Some(Side::Top),
            PreferredSide::Bottom => Some(Side::Bottom),
            PreferredSide::Left => Some(Side::Left),
            PreferredSide::Right => Some(Side::Right),
            PreferredSide::Auto => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self.side() {
            Some(side) => side.as_str(),
            None => "auto",
        }
    }
}

impl From<Side> for PreferredSide {
    fn from(side: Side) -> Self {
        match side {
            Side::Top => PreferredSide::Top,
            Side::Bottom => PreferredSide::Bottom,
            Side::Left => PreferredSide::Left,
            Side::Right => PreferredSide::Right,
        }
    }
}

/// Position along the axis perpendicular to the chosen side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Flush with the reference's leading edge
    Start,
    /// Centered on the reference's midpoint
    #[default]
    Center,
    /// Flush with the reference's trailing edge
    End,
}

impl Alignment {
    pub fn opposite(self) -> Self {
        match self {
            Alignment::Start => Alignment::End,
            Alignment::Center => Alignment::Center,
            Alignment::End => Alignment::Start,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Alignment::Start => "start",
            Alignment::Center => "center",
            Alignment::End => "end",
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
