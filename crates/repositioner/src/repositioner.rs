//! Reactive repositioning for open floating elements
//!
//! A [`Repositioner`] moves between two states:
//!
//! - `Idle`: nothing registered.
//! - `Active`: listeners registered for the reference/floating pair; every
//!   trigger signal schedules at most one pending animation frame, and the
//!   recompute callback runs when that frame fires.
//!
//! The host is passed into every call instead of being owned, so the
//! element handles and frame queue stay with whoever drives the event loop.

use std::fmt;

use crate::stats::run_recompute;
use crate::{FrameHandle, LayoutHost, ListenerId, RepositionStats, RepositionerConfig, Trigger};

/// Callback invoked once per coalesced frame; it must re-measure
pub type RecomputeFn<E> = Box<dyn FnMut() -> Result<(), E>>;

/// Lifecycle state of a repositioner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositionerState {
    Idle,
    Active,
}

struct Session<Handle, E> {
    reference: Handle,
    floating: Handle,
    listeners: Vec<ListenerId>,
    pending: Option<FrameHandle>,
    on_recompute: RecomputeFn<E>,
}

/// Keeps a placement valid while its floating element is open
pub struct Repositioner<H: LayoutHost, E> {
    config: RepositionerConfig,
    session: Option<Session<H::Handle, E>>,
    stats: RepositionStats,
}

impl<H: LayoutHost, E> Default for Repositioner<H, E> {
    fn default() -> Self {
        Self::new(RepositionerConfig::default())
    }
}

impl<H: LayoutHost, E> Repositioner<H, E> {
    pub fn new(config: RepositionerConfig) -> Self {
        Self {
            config,
            session: None,
            stats: RepositionStats::default(),
        }
    }

    pub fn state(&self) -> RepositionerState {
        if self.session.is_some() {
            RepositionerState::Active
        } else {
            RepositionerState::Idle
        }
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Whether a frame is scheduled but has not fired yet
    pub fn has_pending_frame(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|session| session.pending.is_some())
    }

    /// Counters for the current (or most recent) session
    pub fn stats(&self) -> &RepositionStats {
        &self.stats
    }

    pub fn config(&self) -> &RepositionerConfig {
        &self.config
    }

    /// Begin observing `reference` and `floating`.
    ///
    /// Calling this again for the same pair while active does nothing. A
    /// different pair replaces the current session. When the host refuses
    /// a registration, the ones already made are released and the host's
    /// error is returned as is.
    pub fn start<F>(
        &mut self,
        host: &mut H,
        reference: H::Handle,
        floating: H::Handle,
        on_recompute: F,
    ) -> Result<(), H::Error>
    where
        F: FnMut() -> Result<(), E> + 'static,
    {
        if let Some(session) = &self.session {
            if session.reference == reference && session.floating == floating {
                tracing::trace!(target: "glaze::reposition", "start ignored, already active");
                return Ok(());
            }
            self.stop(host);
        }

        let watches = [
            (Trigger::AncestorScroll, Some(&reference)),
            (Trigger::WindowResize, None),
            (Trigger::ElementResize, Some(&reference)),
            (Trigger::ElementResize, Some(&floating)),
            (Trigger::DomMutation, None),
        ];

        let mut listeners = Vec::with_capacity(watches.len());
        for (trigger, target) in watches {
            match host.listen(trigger, target) {
                Ok(id) => listeners.push(id),
                Err(e) => {
                    tracing::debug!(
                        target: "glaze::reposition",
                        %trigger,
                        "listener registration failed, releasing {} listeners",
                        listeners.len()
                    );
                    for id in listeners {
                        host.unlisten(id);
                    }
                    return Err(e);
                }
            }
        }

        tracing::debug!(
            target: "glaze::reposition",
            ?reference,
            ?floating,
            listeners = listeners.len(),
            "repositioner active"
        );

        self.stats = RepositionStats::default();
        self.session = Some(Session {
            reference,
            floating,
            listeners,
            pending: None,
            on_recompute: Box::new(on_recompute),
        });
        Ok(())
    }

    /// Deliver a trigger signal.
    ///
    /// Returns `true` when this signal scheduled a new frame, `false` when
    /// it was folded into an already pending one or the repositioner is idle.
    pub fn notify(&mut self, host: &mut H, trigger: Trigger) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };

        let pending = session.pending.is_some();
        self.stats.record_signal(pending);
        if pending {
            tracing::trace!(target: "glaze::reposition", %trigger, "signal coalesced");
            return false;
        }

        session.pending = Some(host.request_frame());
        tracing::trace!(target: "glaze::reposition", %trigger, "frame scheduled");
        true
    }

    /// Handle a fired animation frame.
    ///
    /// Runs the recompute callback when `frame` is the pending frame of the
    /// active session and returns `Ok(true)`. Stale or cancelled frames are
    /// ignored. Errors from the callback are returned unchanged.
    pub fn on_frame(&mut self, frame: FrameHandle) -> Result<bool, E> {
        let Some(session) = self.session.as_mut() else {
            return Ok(false);
        };
        if session.pending != Some(frame) {
            return Ok(false);
        }

        session.pending = None;
        run_recompute(
            &mut *session.on_recompute,
            self.config.frame_budget_ms,
            &mut self.stats,
        )?;
        Ok(true)
    }

    /// Release every listener and cancel the pending frame.
    ///
    /// Safe to call repeatedly or without a prior `start`.
    pub fn stop(&mut self, host: &mut H) {
        let Some(session) = self.session.take() else {
            return;
        };

        if let Some(frame) = session.pending {
            host.cancel_frame(frame);
        }
        for id in session.listeners {
            host.unlisten(id);
        }

        tracing::debug!(
            target: "glaze::reposition",
            recomputes = self.stats.recomputes,
            coalesced = self.stats.coalesced,
            "repositioner idle"
        );
    }
}

impl<H: LayoutHost, E> fmt::Debug for Repositioner<H, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Repositioner")
            .field("state", &self.state())
            .field("pending", &self.has_pending_frame())
            .field("stats", &self.stats)
            .finish()
    }
}

impl<H: LayoutHost, E> Drop for Repositioner<H, E> {
    fn drop(&mut self) {
        if let Some(session) = &self.session {
            tracing::warn!(
                target: "glaze::reposition",
                listeners = session.listeners.len(),
                "repositioner dropped while active; listeners were not released"
            );
        }
    }
}
