//! Tokio-driven frame loop
//!
//! For hosts without a native animation-frame queue. Trigger signals are
//! sent over a channel; the driver ticks at the configured frame interval
//! and runs the recompute callback at most once per tick, only when a
//! signal arrived since the previous one.

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::stats::run_recompute;
use crate::{RepositionError, RepositionStats, RepositionerConfig, Result, Trigger};

/// Cloneable handle for event sources feeding a [`FrameDriver`]
pub type SignalSender = mpsc::UnboundedSender<Trigger>;

/// Background task coalescing trigger signals into per-frame recomputes
pub struct FrameDriver<E> {
    signals: SignalSender,
    shutdown: Option<oneshot::Sender<()>>,
    task: JoinHandle<std::result::Result<RepositionStats, E>>,
}

impl<E> FrameDriver<E>
where
    E: std::error::Error + Send + 'static,
{
    /// Spawn the frame loop on the current tokio runtime.
    ///
    /// The loop ends when [`FrameDriver::shutdown`] is called, when the
    /// callback fails, or once the driver and every [`SignalSender`] are
    /// dropped. Dropping only the driver detaches the loop: outstanding
    /// senders keep feeding it and a pending recompute still runs on the
    /// final tick. A failing callback ends the task with its error.
    pub fn spawn<F>(config: RepositionerConfig, mut on_recompute: F) -> Self
    where
        F: FnMut() -> std::result::Result<(), E> + Send + 'static,
    {
        let (signals, mut receiver) = mpsc::unbounded_channel::<Trigger>();
        let (shutdown, mut shutdown_rx) = oneshot::channel::<()>();

        let task = tokio::spawn(async move {
            let mut stats = RepositionStats::default();
            let mut ticker = tokio::time::interval(config.tick_interval());
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            let mut dirty = false;
            let mut open = true;
            let mut detached = false;

            loop {
                tokio::select! {
                    // A due tick wins over queued signals so a flood cannot starve it
                    biased;

                    stop = &mut shutdown_rx, if !detached => match stop {
                        Ok(()) => break,
                        Err(_) => {
                            tracing::debug!(target: "glaze::reposition", "frame driver detached");
                            detached = true;
                        }
                    },

                    _ = ticker.tick() => {
                        if dirty {
                            dirty = false;
                            if let Err(e) =
                                run_recompute(&mut on_recompute, config.frame_budget_ms, &mut stats)
                            {
                                return Err(e);
                            }
                        }
                        if !open {
                            break;
                        }
                    }

                    signal = receiver.recv(), if open => match signal {
                        Some(trigger) => {
                            stats.record_signal(dirty);
                            dirty = true;
                            tracing::trace!(target: "glaze::reposition", %trigger, "signal queued");
                        }
                        None => open = false,
                    },
                }
            }

            tracing::debug!(
                target: "glaze::reposition",
                recomputes = stats.recomputes,
                coalesced = stats.coalesced,
                "frame driver stopped"
            );
            Ok::<_, E>(stats)
        });

        Self {
            signals,
            shutdown: Some(shutdown),
            task,
        }
    }

    /// Queue a trigger signal for the next frame
    pub fn signal(&self, trigger: Trigger) -> Result<(), E> {
        self.signals
            .send(trigger)
            .map_err(|_| RepositionError::DriverStopped)
    }

    /// A sender that event sources can own
    pub fn sender(&self) -> SignalSender {
        self.signals.clone()
    }

    /// Whether the loop has exited
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Stop the loop, dropping any recompute that has not run yet
    pub async fn shutdown(mut self) -> Result<RepositionStats, E> {
        if let Some(shutdown) = self.shutdown.take() {
            // The task may already be gone; its outcome is reported below
            let _ = shutdown.send(());
        }
        self.join().await
    }

    /// Wait for the loop to exit on its own
    pub async fn join(self) -> Result<RepositionStats, E> {
        let Self {
            signals,
            shutdown,
            task,
        } = self;
        drop(signals);
        let outcome = task.await?;
        drop(shutdown);
        outcome.map_err(RepositionError::Recompute)
    }
}
