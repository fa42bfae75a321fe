//! Host abstraction over listener registration and frame scheduling
//!
//! A host wraps whatever actually owns the element handles: scroll and
//! resize listeners, size and mutation observers, and the animation
//! frame queue. The repositioner only ever talks to it through
//! [`LayoutHost`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Condition that can invalidate a computed placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Trigger {
    /// Scroll bubbling from any ancestor of the target
    AncestorScroll,
    /// Window resize
    WindowResize,
    /// Size change of the target element
    ElementResize,
    /// Structural DOM change that may shift layout
    DomMutation,
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Trigger::AncestorScroll => "ancestor-scroll",
            Trigger::WindowResize => "window-resize",
            Trigger::ElementResize => "element-resize",
            Trigger::DomMutation => "dom-mutation",
        })
    }
}

/// Registration handle returned by [`LayoutHost::listen`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

/// Scheduled animation-frame callback returned by [`LayoutHost::request_frame`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

impl FrameHandle {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

/// The environment a repositioner observes
pub trait LayoutHost {
    /// Opaque element reference
    type Handle: PartialEq + fmt::Debug;
    /// Registration failure, typically a detached handle
    type Error;

    /// Start delivering `trigger` for `target`, or window-wide when `None`
    fn listen(
        &mut self,
        trigger: Trigger,
        target: Option<&Self::Handle>,
    ) -> Result<ListenerId, Self::Error>;

    /// Stop delivering a registration; unknown ids are ignored
    fn unlisten(&mut self, id: ListenerId);

    /// Schedule a callback for the next animation frame
    fn request_frame(&mut self) -> FrameHandle;

    /// Drop a scheduled frame that has not run yet
    fn cancel_frame(&mut self, frame: FrameHandle);
}
