//! Axis-aligned bounding boxes

use serde::{Deserialize, Serialize};

use crate::Axis;

/// A measured bounding box in viewport coordinates
///
/// Rects are snapshots: a fresh one must be measured every time a
/// placement is recomputed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    /// A box that has a size but has not been placed yet
    pub fn sized(width: f64, height: f64) -> Self {
        Self {
            top: 0.0,
            left: 0.0,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn center_x(&self) -> f64 {
        self.left + self.width / 2.0
    }

    pub fn center_y(&self) -> f64 {
        self.top + self.height / 2.0
    }

    /// Leading edge along the given axis (left or top)
    pub fn start(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.left,
            Axis::Vertical => self.top,
        }
    }

    /// Trailing edge along the given axis (right or bottom)
    pub fn end(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.right(),
            Axis::Vertical => self.bottom(),
        }
    }

    /// Extent along the given axis (width or height)
    pub fn extent(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// Midpoint along the given axis
    pub fn center(&self, axis: Axis) -> f64 {
        self.start(axis) + self.extent(axis) / 2.0
    }

    /// Same size, moved so the top-left corner sits at `(x, y)`
    pub fn translate_to(&self, x: f64, y: f64) -> Self {
        Self {
            top: y,
            left: x,
            ..*self
        }
    }

    /// Whether `other` lies entirely inside this rect (edges inclusive)
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.left >= self.left
            && other.top >= self.top
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}
