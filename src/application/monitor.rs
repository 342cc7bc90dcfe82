//! Monitoring service: watch management plus the per-player probes.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::application::live::LiveTracker;
use crate::application::poll::{PollLoop, Probe};
use crate::application::streak::StreakTracker;
use crate::application::watchlist::Watchlist;
use crate::config::MonitorConfig;
use crate::domain::{loss_streak, RiotId};
use crate::error::{Result, WatchError};
use crate::port::{
    AccountResolver, AlertEvent, LiveStatusProvider, MatchHistoryProvider, NotifierRegistry,
};

/// The two independent monitors a player can be watched by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchKind {
    /// Loss-streak monitoring (15-minute cadence by default).
    Streak,
    /// Live-game monitoring (60-second cadence by default).
    Live,
}

impl WatchKind {
    /// Short label used in logs and command replies.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Streak => "streak",
            Self::Live => "live",
        }
    }
}

/// The monitoring engine.
///
/// Owns the two watchlists and the two alert-dedup trackers, talks to
/// the Riot API only through ports, and fans alerts out through the
/// notifier registry. The command layer mutates watchlists through
/// [`watch`](Monitor::watch) / [`unwatch`](Monitor::unwatch) while the
/// polling loops read snapshots concurrently.
pub struct Monitor {
    resolver: Arc<dyn AccountResolver>,
    history: Arc<dyn MatchHistoryProvider>,
    live_status: Arc<dyn LiveStatusProvider>,
    notifiers: Arc<NotifierRegistry>,
    streak_watchlist: Arc<Watchlist>,
    live_watchlist: Arc<Watchlist>,
    streak_tracker: StreakTracker,
    live_tracker: LiveTracker,
    config: MonitorConfig,
}

impl Monitor {
    /// Wire up a monitor from its collaborators.
    #[must_use]
    pub fn new(
        resolver: Arc<dyn AccountResolver>,
        history: Arc<dyn MatchHistoryProvider>,
        live_status: Arc<dyn LiveStatusProvider>,
        notifiers: Arc<NotifierRegistry>,
        config: MonitorConfig,
    ) -> Self {
        Self {
            resolver,
            history,
            live_status,
            notifiers,
            streak_watchlist: Arc::new(Watchlist::new()),
            live_watchlist: Arc::new(Watchlist::new()),
            streak_tracker: StreakTracker::new(config.streak_threshold),
            live_tracker: LiveTracker::new(),
            config,
        }
    }

    fn watchlist(&self, kind: WatchKind) -> &Arc<Watchlist> {
        match kind {
            WatchKind::Streak => &self.streak_watchlist,
            WatchKind::Live => &self.live_watchlist,
        }
    }

    /// Start watching a player.
    ///
    /// The identity is resolved before insertion; a failed resolution
    /// leaves the watchlist untouched and surfaces
    /// [`WatchError::Unresolvable`] to the caller.
    pub async fn watch(&self, kind: WatchKind, id: RiotId) -> std::result::Result<(), WatchError> {
        let watchlist = self.watchlist(kind);
        if watchlist.contains(&id) {
            return Err(WatchError::AlreadyWatched(id));
        }

        if let Err(error) = self.resolver.resolve(&id).await {
            return Err(WatchError::Unresolvable {
                id,
                reason: error.to_string(),
            });
        }

        if !watchlist.insert(id.clone()) {
            // Lost a race with a concurrent add of the same identity.
            return Err(WatchError::AlreadyWatched(id));
        }

        info!(riot_id = %id, kind = kind.label(), "Watching player");
        Ok(())
    }

    /// Stop watching a player.
    ///
    /// The player's dedup entry is deliberately left in place:
    /// re-adding the player later resumes from the old watermark instead
    /// of re-alerting a condition that was already announced.
    pub fn unwatch(&self, kind: WatchKind, id: &RiotId) -> std::result::Result<(), WatchError> {
        if !self.watchlist(kind).remove(id) {
            return Err(WatchError::NotWatched(id.clone()));
        }
        info!(riot_id = %id, kind = kind.label(), "Unwatched player");
        Ok(())
    }

    /// Current members of a watchlist, in no particular order.
    #[must_use]
    pub fn watching(&self, kind: WatchKind) -> Vec<RiotId> {
        self.watchlist(kind).snapshot()
    }

    /// One streak check for one player: resolve, fetch the bounded match
    /// window, evaluate, and alert on a new qualifying streak length.
    pub async fn probe_streak(&self, id: &RiotId) -> Result<()> {
        let puuid = self.resolver.resolve(id).await?;
        let outcomes = self
            .history
            .recent_outcomes(&puuid, self.config.history_depth)
            .await?;

        let streak = loss_streak(&outcomes);
        debug!(riot_id = %id, streak, window = outcomes.len(), "Evaluated loss streak");

        if self.streak_tracker.observe(id, streak) {
            info!(riot_id = %id, streak, "Loss streak alert fired");
            self.notifiers.notify_all(AlertEvent::LossStreak {
                id: id.clone(),
                streak,
            });
        }

        Ok(())
    }

    /// One live check for one player: resolve, query the spectator
    /// status, and alert on the idle-to-in-game edge.
    pub async fn probe_live(&self, id: &RiotId) -> Result<()> {
        let puuid = self.resolver.resolve(id).await?;
        let in_game = self.live_status.in_active_game(&puuid).await?;
        debug!(riot_id = %id, in_game, "Observed live status");

        if self.live_tracker.observe(id, in_game) {
            info!(riot_id = %id, "Game started alert fired");
            self.notifiers
                .notify_all(AlertEvent::GameStarted { id: id.clone() });
        }

        Ok(())
    }

    /// Spawn the two polling loops.
    ///
    /// Both idle until `ready` turns true, then run until the process
    /// terminates; there is no clean-stop API.
    pub fn spawn_loops(
        self: &Arc<Self>,
        ready: watch::Receiver<bool>,
    ) -> (JoinHandle<()>, JoinHandle<()>) {
        let streak_loop = PollLoop::new(
            Arc::clone(&self.streak_watchlist),
            Arc::clone(&self.notifiers),
            StreakProbe(Arc::clone(self)),
            self.config.streak_interval(),
            ready.clone(),
        );
        let live_loop = PollLoop::new(
            Arc::clone(&self.live_watchlist),
            Arc::clone(&self.notifiers),
            LiveProbe(Arc::clone(self)),
            self.config.live_interval(),
            ready,
        );

        (
            tokio::spawn(streak_loop.run()),
            tokio::spawn(live_loop.run()),
        )
    }
}

/// Streak-loop probe delegating to [`Monitor::probe_streak`].
pub struct StreakProbe(Arc<Monitor>);

impl StreakProbe {
    #[must_use]
    pub fn new(monitor: Arc<Monitor>) -> Self {
        Self(monitor)
    }
}

#[async_trait]
impl Probe for StreakProbe {
    fn name(&self) -> &'static str {
        "streak"
    }

    async fn check(&self, id: &RiotId) -> Result<()> {
        self.0.probe_streak(id).await
    }
}

/// Live-loop probe delegating to [`Monitor::probe_live`].
pub struct LiveProbe(Arc<Monitor>);

impl LiveProbe {
    #[must_use]
    pub fn new(monitor: Arc<Monitor>) -> Self {
        Self(monitor)
    }
}

#[async_trait]
impl Probe for LiveProbe {
    fn name(&self) -> &'static str {
        "live"
    }

    async fn check(&self, id: &RiotId) -> Result<()> {
        self.0.probe_live(id).await
    }
}
