//! Floating element placement
//!
//! Converts a reference rect, a floating rect, the viewport, and a
//! [`PlacementRequest`] into concrete coordinates. The pass runs in four steps:
//!
//! 1. resolve `Auto` into a concrete side using the clear space per side
//! 2. place the floating box against that side, aligned on the cross axis
//! 3. flip to the opposite side once if the box overflows and the opposite fits
//! 4. clamp both axes into the padded viewport
//!
//! The calculation is pure: identical inputs give bit-identical output.

use geometry::{Alignment, Axis, Rect, Side, Viewport};

use crate::{PlacementRequest, PlacementResult};

/// Clear space between each reference edge and the padded viewport edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClearSpace {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl ClearSpace {
    pub fn measure(reference: &Rect, viewport: &Viewport, padding: f64) -> Self {
        Self {
            top: reference.top - padding,
            bottom: viewport.height - reference.bottom() - padding,
            left: reference.left - padding,
            right: viewport.width - reference.right() - padding,
        }
    }

    pub fn get(&self, side: Side) -> f64 {
        match side {
            Side::Top => self.top,
            Side::Bottom => self.bottom,
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Whether the floating box plus the offset fits on `side`
    pub fn fits(&self, side: Side, floating: &Rect, offset: f64) -> bool {
        self.get(side) - offset >= floating.extent(side.axis())
    }
}

/// Compute where the floating element goes.
///
/// Never fails: when no side can hold the floating box the coordinates
/// are clamped to the padded viewport edge on the best-effort side.
/// Only the size of `floating` is used; its position is ignored.
pub fn compute_position(
    reference: &Rect,
    floating: &Rect,
    viewport: &Viewport,
    request: &PlacementRequest,
) -> PlacementResult {
    let padding = request.boundary_padding;
    let offset = request.offset;
    let space = ClearSpace::measure(reference, viewport, padding);

    let preferred = request
        .preferred_side
        .side()
        .unwrap_or_else(|| resolve_auto_side(&space, floating, offset));

    // Exactly one flip attempt; never iterate further.
    let opposite = preferred.opposite();
    let flipped =
        !space.fits(preferred, floating, offset) && space.fits(opposite, floating, offset);
    let side = if flipped { opposite } else { preferred };

    let main_axis = side.axis();
    let cross_axis = main_axis.cross();
    let main = main_axis_start(reference, floating, side, offset);

    let (cross_min, cross_max) = bounds(viewport, floating, cross_axis, padding);
    let mut alignment = request.alignment;
    let mut cross = aligned_start(reference, floating, cross_axis, alignment);
    if request.flip_alignment && alignment != Alignment::Center {
        let overflows = match alignment {
            Alignment::Start => cross > cross_max,
            _ => cross < cross_min,
        };
        let alternative = aligned_start(reference, floating, cross_axis, alignment.opposite());
        if overflows && alternative >= cross_min && alternative <= cross_max {
            alignment = alignment.opposite();
            cross = alternative;
        }
    }

    let (main_min, main_max) = bounds(viewport, floating, main_axis, padding);
    let main = clamp_axis(main, main_min, main_max);
    let cross = clamp_axis(cross, cross_min, cross_max);

    let (x, y) = match main_axis {
        Axis::Vertical => (cross, main),
        Axis::Horizontal => (main, cross),
    };

    tracing::trace!(
        target: "glaze::position",
        side = %side,
        alignment = %alignment,
        flipped,
        x,
        y,
        "placement computed"
    );

    PlacementResult {
        x,
        y,
        resolved_side: side,
        resolved_alignment: alignment,
        flipped,
    }
}

/// Pick a concrete side for `Auto`.
///
/// The vertical axis wins whenever its roomier side can hold the floating
/// box; the horizontal axis is tried next. If neither fits, the side with
/// the most space wins, ties broken bottom > top > right > left.
pub fn resolve_auto_side(space: &ClearSpace, floating: &Rect, offset: f64) -> Side {
    let vertical = if space.bottom >= space.top {
        Side::Bottom
    } else {
        Side::Top
    };
    if space.fits(vertical, floating, offset) {
        return vertical;
    }

    let horizontal = if space.right >= space.left {
        Side::Right
    } else {
        Side::Left
    };
    if space.fits(horizontal, floating, offset) {
        return horizontal;
    }

    Side::PRIORITY
        .into_iter()
        .fold(Side::PRIORITY[0], |best, side| {
            if space.get(side) > space.get(best) {
                side
            } else {
                best
            }
        })
}

/// Leading coordinate on the main axis, adjacent to the reference
fn main_axis_start(reference: &Rect, floating: &Rect, side: Side, offset: f64) -> f64 {
    let axis = side.axis();
    if side.is_leading() {
        reference.start(axis) - offset - floating.extent(axis)
    } else {
        reference.end(axis) + offset
    }
}

/// Leading coordinate on the cross axis for the given alignment
fn aligned_start(reference: &Rect, floating: &Rect, axis: Axis, alignment: Alignment) -> f64 {
    match alignment {
        Alignment::Start => reference.start(axis),
        Alignment::Center => reference.center(axis) - floating.extent(axis) / 2.0,
        Alignment::End => reference.end(axis) - floating.extent(axis),
    }
}

/// Allowed range for the floating box's leading coordinate on `axis`
fn bounds(viewport: &Viewport, floating: &Rect, axis: Axis, padding: f64) -> (f64, f64) {
    (
        padding,
        viewport.extent(axis) - padding - floating.extent(axis),
    )
}

/// Clamp that pins to `min` when the range is empty and never panics on NaN
fn clamp_axis(value: f64, min: f64, max: f64) -> f64 {
    value.min(max).max(min)
}
