//! Frame budget and per-session counters

use positioning::{PositioningConfig, DEFAULT_FRAME_BUDGET_MS};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Interval between frames when no real animation-frame clock exists
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Shortest tick the frame driver will run at
pub const MIN_FRAME_INTERVAL: Duration = Duration::from_millis(1);

/// Repositioning settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RepositionerConfig {
    /// Recomputations slower than this are counted and logged
    pub frame_budget_ms: f64,
    /// Tick interval of the tokio frame driver
    pub frame_interval: Duration,
}

impl Default for RepositionerConfig {
    fn default() -> Self {
        Self {
            frame_budget_ms: DEFAULT_FRAME_BUDGET_MS,
            frame_interval: DEFAULT_FRAME_INTERVAL,
        }
    }
}

impl From<&PositioningConfig> for RepositionerConfig {
    fn from(config: &PositioningConfig) -> Self {
        Self {
            frame_budget_ms: config.frame_budget_ms,
            ..Self::default()
        }
    }
}

impl RepositionerConfig {
    /// Builder method to set the frame budget
    pub fn with_frame_budget(mut self, ms: f64) -> Self {
        self.frame_budget_ms = ms;
        self
    }

    /// Builder method to set the driver tick interval, floored at [`MIN_FRAME_INTERVAL`]
    pub fn with_frame_interval(mut self, interval: Duration) -> Self {
        self.frame_interval = interval.max(MIN_FRAME_INTERVAL);
        self
    }

    /// Interval the driver actually ticks at.
    ///
    /// A deserialized config may carry a zero interval, which tokio rejects.
    pub fn tick_interval(&self) -> Duration {
        self.frame_interval.max(MIN_FRAME_INTERVAL)
    }
}

/// Counters for one active session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositionStats {
    /// Trigger signals received while active
    pub signals: u64,
    /// Frames requested from the host
    pub frames_scheduled: u64,
    /// Signals folded into an already pending frame
    pub coalesced: u64,
    /// Recompute callbacks invoked
    pub recomputes: u64,
    /// Recomputes that ran past the frame budget
    pub over_budget: u64,
}

impl RepositionStats {
    /// Count a signal; `pending` says whether a frame was already queued
    pub(crate) fn record_signal(&mut self, pending: bool) {
        self.signals += 1;
        if pending {
            self.coalesced += 1;
        } else {
            self.frames_scheduled += 1;
        }
    }
}

/// Run one recompute, timing it against the frame budget
pub(crate) fn run_recompute<E>(
    on_recompute: &mut dyn FnMut() -> Result<(), E>,
    budget_ms: f64,
    stats: &mut RepositionStats,
) -> Result<(), E> {
    let start = Instant::now();
    let outcome = on_recompute();
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    stats.recomputes += 1;
    if elapsed_ms > budget_ms {
        stats.over_budget += 1;
        tracing::warn!(
            target: "glaze::reposition",
            elapsed_ms,
            budget_ms,
            "recompute exceeded frame budget"
        );
    } else {
        tracing::trace!(target: "glaze::reposition", elapsed_ms, "recompute finished");
    }

    outcome
}
