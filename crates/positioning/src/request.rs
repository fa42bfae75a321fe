//! Placement requests and results

use geometry::{Alignment, PreferredSide, Rect, Side};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::PositioningError;

/// Caller preferences for a single positioning pass
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlacementRequest {
    /// Side to place on, or `Auto` to pick the roomiest one
    pub preferred_side: PreferredSide,
    /// Position along the cross axis
    pub alignment: Alignment,
    /// Gap between reference and floating element in pixels (may be negative)
    pub offset: f64,
    /// Minimum clearance kept from every viewport edge in pixels
    pub boundary_padding: f64,
    /// Swap Start/End when the requested alignment would overflow
    pub flip_alignment: bool,
}

impl Default for PlacementRequest {
    fn default() -> Self {
        Self {
            preferred_side: PreferredSide::Bottom,
            alignment: Alignment::Center,
            offset: 0.0,
            boundary_padding: 0.0,
            flip_alignment: false,
        }
    }
}

impl PlacementRequest {
    pub fn new(preferred_side: PreferredSide, alignment: Alignment) -> Self {
        Self {
            preferred_side,
            alignment,
            ..Self::default()
        }
    }

    /// Builder method to set the gap to the reference
    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// Builder method to set the viewport edge clearance
    pub fn with_padding(mut self, boundary_padding: f64) -> Self {
        self.boundary_padding = boundary_padding;
        self
    }

    /// Builder method to enable alignment flipping
    pub fn with_alignment_flip(mut self) -> Self {
        self.flip_alignment = true;
        self
    }
}

/// Parses placement strings such as `"bottom-start"`, `"top"` or `"auto-end"`.
///
/// A missing alignment suffix means `Center`. Offset and padding keep
/// their defaults.
impl FromStr for PlacementRequest {
    type Err = PositioningError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().to_ascii_lowercase();
        let (side_part, align_part) = match trimmed.split_once('-') {
            Some((side, align)) => (side, Some(align)),
            None => (trimmed.as_str(), None),
        };

        let preferred_side = match side_part {
            "top" => PreferredSide::Top,
            "bottom" => PreferredSide::Bottom,
            "left" => PreferredSide::Left,
            "right" => PreferredSide::Right,
            "auto" => PreferredSide::Auto,
            _ => return Err(PositioningError::InvalidPlacement(s.to_string())),
        };

        let alignment = match align_part {
            None | Some("center") => Alignment::Center,
            Some("start") => Alignment::Start,
            Some("end") => Alignment::End,
            Some(_) => return Err(PositioningError::InvalidPlacement(s.to_string())),
        };

        Ok(Self::new(preferred_side, alignment))
    }
}

impl fmt::Display for PlacementRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.alignment {
            Alignment::Center => f.write_str(self.preferred_side.as_str()),
            align => write!(f, "{}-{}", self.preferred_side.as_str(), align),
        }
    }
}

/// Outcome of [`crate::compute_position`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementResult {
    /// Left coordinate for the floating element
    pub x: f64,
    /// Top coordinate for the floating element
    pub y: f64,
    /// Side actually used, after auto resolution and flipping
    pub resolved_side: Side,
    /// Alignment actually used
    pub resolved_alignment: Alignment,
    /// Whether the single opposite-side flip fired
    pub flipped: bool,
}

impl PlacementResult {
    /// The floating box moved to the computed coordinates
    pub fn floating_rect(&self, floating: &Rect) -> Rect {
        floating.translate_to(self.x, self.y)
    }
}

/// Location of the decorative pointer, relative to the floating box's top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrowOffset {
    /// Arrow centre x
    pub x: f64,
    /// Arrow centre y
    pub y: f64,
    /// Clockwise rotation of an up-pointing arrow
    pub rotation_degrees: f64,
}
