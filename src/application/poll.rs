//! Generic fixed-interval polling loop.
//!
//! The streak and live monitors share no per-player state but have the
//! same scheduling shape, so both are instantiations of one
//! [`PollLoop`] parameterized by watchlist, probe, and interval.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::application::watchlist::Watchlist;
use crate::domain::RiotId;
use crate::error::Result;
use crate::port::NotifierRegistry;

/// Per-player work done on each tick of a polling loop.
///
/// A probe performs the whole resolve / fetch / evaluate / alert chain
/// for one player. Errors are player-local: the loop logs them and moves
/// on to the next snapshot member.
#[async_trait]
pub trait Probe: Send + Sync + 'static {
    /// Loop name used in logs.
    fn name(&self) -> &'static str;

    /// Check one player and raise alerts as needed.
    async fn check(&self, id: &RiotId) -> Result<()>;
}

/// Fixed-interval loop over a watchlist snapshot.
///
/// Ticks are strictly sequential: a tick that overruns the interval
/// delays later ticks instead of overlapping them. The loop idles until
/// the readiness signal turns true, then runs until process shutdown.
pub struct PollLoop<P> {
    watchlist: Arc<Watchlist>,
    notifiers: Arc<NotifierRegistry>,
    probe: P,
    interval: Duration,
    ready: watch::Receiver<bool>,
}

impl<P: Probe> PollLoop<P> {
    /// Create a loop; nothing runs until [`run`](PollLoop::run) is awaited.
    #[must_use]
    pub fn new(
        watchlist: Arc<Watchlist>,
        notifiers: Arc<NotifierRegistry>,
        probe: P,
        interval: Duration,
        ready: watch::Receiver<bool>,
    ) -> Self {
        Self {
            watchlist,
            notifiers,
            probe,
            interval,
            ready,
        }
    }

    /// Run the loop forever.
    ///
    /// Returns only if the readiness channel is dropped before ever
    /// signaling ready, which happens when the application is shutting
    /// down during startup.
    pub async fn run(mut self) {
        // No requests before the alert sink is up.
        while !*self.ready.borrow() {
            if self.ready.changed().await.is_err() {
                warn!(poll = self.probe.name(), "Readiness channel closed before start");
                return;
            }
        }

        info!(
            poll = self.probe.name(),
            interval_secs = self.interval.as_secs(),
            "Polling loop started"
        );

        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            self.tick().await;
        }
    }

    /// Execute one tick over the current watchlist snapshot.
    ///
    /// Exposed for tests; production code drives it through
    /// [`run`](PollLoop::run).
    pub async fn tick(&self) {
        if self.watchlist.is_empty() || self.notifiers.is_empty() {
            debug!(poll = self.probe.name(), "Nothing to poll, skipping tick");
            return;
        }

        for id in self.watchlist.snapshot() {
            if let Err(error) = self.probe.check(&id).await {
                warn!(
                    poll = self.probe.name(),
                    riot_id = %id,
                    error = %error,
                    "Check failed, skipping player until next tick"
                );
            }
        }
    }
}
