//! Geometry - Rect math for floating-element placement
//!
//! Leaf crate of the positioning engine. All coordinates are viewport
//! pixels with the origin at the top-left corner.

mod rect;
mod side;
mod viewport;

pub use rect::*;
pub use side::*;
pub use viewport::*;
