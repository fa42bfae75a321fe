//! Measurement and viewport providers
//!
//! The engine never measures anything itself. Callers plug in whatever
//! backs their layout (a browser bridge, a test double) through these
//! traits and get a fresh measurement on every pass.

use geometry::{Rect, Viewport};

use crate::{compute_position, PlacementRequest, PlacementResult};

/// Supplies the current bounding box of an element handle
pub trait MeasureRect<H: ?Sized> {
    fn measure(&self, handle: &H) -> Rect;
}

/// Supplies the current viewport dimensions
pub trait ViewportSource {
    fn viewport(&self) -> Viewport;
}

impl<H: ?Sized, F> MeasureRect<H> for F
where
    F: Fn(&H) -> Rect,
{
    fn measure(&self, handle: &H) -> Rect {
        self(handle)
    }
}

impl ViewportSource for Viewport {
    fn viewport(&self) -> Viewport {
        *self
    }
}

/// Measure both elements and the viewport, then compute a placement
pub fn position_with<H, M, V>(
    measurer: &M,
    viewport: &V,
    reference: &H,
    floating: &H,
    request: &PlacementRequest,
) -> PlacementResult
where
    H: ?Sized,
    M: MeasureRect<H> + ?Sized,
    V: ViewportSource + ?Sized,
{
    let reference_rect = measurer.measure(reference);
    let floating_rect = measurer.measure(floating);
    compute_position(&reference_rect, &floating_rect, &viewport.viewport(), request)
}
