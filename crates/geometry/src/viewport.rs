//! Visible area tracking

use serde::{Deserialize, Serialize};

use crate::{Axis, Rect};

/// The visible area floating elements must stay inside
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Width of the visible area
    pub width: f64,
    /// Height of the visible area
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Update the viewport dimensions after a resize
    pub fn set_dimensions(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Size along the given axis
    pub fn extent(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// The usable area after keeping `padding` clear on every edge.
    ///
    /// Width and height saturate at zero when the padding exceeds the
    /// viewport.
    pub fn inset(&self, padding: f64) -> Rect {
        Rect::new(
            padding,
            padding,
            (self.width - 2.0 * padding).max(0.0),
            (self.height - 2.0 * padding).max(0.0),
        )
    }
}
