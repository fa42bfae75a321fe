//! Arrow pointer placement

use geometry::{Axis, Rect, Side};

use crate::ArrowOffset;

/// Rotation for an up-pointing arrow so that it points at the reference
pub fn arrow_rotation(side: Side) -> f64 {
    match side {
        Side::Bottom => 0.0,
        Side::Left => 90.0,
        Side::Top => 180.0,
        Side::Right => 270.0,
    }
}

/// Locate the arrow for a floating box already placed on `resolved_side`.
///
/// `floating` must be the placed rect (see [`crate::PlacementResult::floating_rect`]).
/// The arrow follows the reference midpoint on the cross axis but never
/// leaves the floating box; it sits on the edge facing the reference.
pub fn compute_arrow_offset(
    reference: &Rect,
    floating: &Rect,
    resolved_side: Side,
    arrow_size: f64,
) -> ArrowOffset {
    let cross_axis = resolved_side.axis().cross();
    let half = arrow_size / 2.0;
    let extent = floating.extent(cross_axis);

    let along = if extent < arrow_size {
        extent / 2.0
    } else {
        let target = reference.center(cross_axis) - floating.start(cross_axis);
        target.min(extent - half).max(half)
    };

    let edge = match resolved_side {
        Side::Bottom | Side::Right => 0.0,
        Side::Top => floating.height,
        Side::Left => floating.width,
    };

    let (x, y) = match cross_axis {
        Axis::Horizontal => (along, edge),
        Axis::Vertical => (edge, along),
    };

    ArrowOffset {
        x,
        y,
        rotation_degrees: arrow_rotation(resolved_side),
    }
}
