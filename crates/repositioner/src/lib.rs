//! Repositioner - Keeps floating placements valid while open
//!
//! Scrolling, resizing and DOM mutation can all invalidate a placement
//! computed by the `positioning` crate. This crate observes those
//! conditions through a [`LayoutHost`] and re-runs the caller's recompute
//! callback at most once per animation frame, no matter how many signals
//! arrive in between.
//!
//! Two drivers are provided:
//!
//! - [`Repositioner`]: host-driven state machine; the host delivers
//!   signals and fired frames.
//! - [`FrameDriver`]: tokio task ticking at a fixed frame interval, for
//!   hosts without a native frame clock.

mod driver;
mod error;
mod host;
mod repositioner;
mod stats;

pub use driver::*;
pub use error::*;
pub use host::*;
pub use repositioner::*;
pub use stats::{
    RepositionStats, RepositionerConfig, DEFAULT_FRAME_INTERVAL, MIN_FRAME_INTERVAL,
};
