//! Positioning - Viewport-aware placement for floating elements
//!
//! Tooltips, dropdown panels and select menus ask this crate where to put
//! themselves relative to their trigger element. The core is
//! [`compute_position`], a pure function that resolves `Auto` into a
//! concrete side, flips once when the preferred side overflows, and
//! clamps the result into the padded viewport. [`compute_arrow_offset`]
//! then locates the decorative pointer on the placed box.
//!
//! # Example
//!
//! ```rust
//! use positioning::{compute_position, PlacementRequest};
//! use geometry::{Rect, Side, Viewport};
//!
//! let request: PlacementRequest = "bottom-start".parse().unwrap();
//! let result = compute_position(
//!     &Rect::new(700.0, 100.0, 80.0, 30.0),
//!     &Rect::sized(120.0, 200.0),
//!     &Viewport::new(1024.0, 768.0),
//!     &request.with_offset(8.0).with_padding(16.0),
//! );
//! assert_eq!(result.resolved_side, Side::Top);
//! ```

mod arrow;
mod calculator;
mod config;
mod error;
mod presets;
mod provider;
mod request;

pub use arrow::*;
pub use calculator::*;
pub use config::*;
pub use error::*;
pub use presets::*;
pub use provider::*;
pub use request::*;
