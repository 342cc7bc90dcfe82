//! A whole poll tick driven through the real streak probe: one player's
//! upstream failure must not starve the rest of the snapshot.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

use tiltwatch::application::{Monitor, PollLoop, StreakProbe, Watchlist};
use tiltwatch::config::MonitorConfig;
use tiltwatch::domain::{Puuid, RiotId};
use tiltwatch::port::{AlertEvent, NotifierRegistry};
use tiltwatch::testkit::{
    outcomes, RecordingNotifier, ScriptedHistory, ScriptedLiveStatus, StaticResolver,
};

#[tokio::test]
async fn failing_player_does_not_block_streak_alerts_for_others() {
    let resolver = Arc::new(StaticResolver::new());
    let history = Arc::new(ScriptedHistory::new());

    let healthy = RiotId::new("Healthy", "KR1");
    let healthy_puuid = Puuid::new("puuid-healthy");
    resolver.insert(healthy.clone(), healthy_puuid.clone());
    history.set_outcomes(healthy_puuid, outcomes("LLLLW"));

    let broken = RiotId::new("Broken", "KR1");
    let broken_puuid = Puuid::new("puuid-broken");
    resolver.insert(broken.clone(), broken_puuid.clone());
    history.fail_for(broken_puuid.clone());

    let alerts = RecordingNotifier::new();
    let mut registry = NotifierRegistry::new();
    registry.register(Box::new(alerts.clone()));
    let registry = Arc::new(registry);

    let monitor = Arc::new(Monitor::new(
        resolver,
        history.clone(),
        Arc::new(ScriptedLiveStatus::new()),
        registry.clone(),
        MonitorConfig::default(),
    ));

    let watchlist = Arc::new(Watchlist::new());
    watchlist.insert(broken.clone());
    watchlist.insert(healthy.clone());

    let (_ready_tx, ready_rx) = watch::channel(true);
    let poll = PollLoop::new(
        watchlist,
        registry,
        StreakProbe::new(monitor.clone()),
        Duration::from_secs(900),
        ready_rx,
    );

    poll.tick().await;

    assert_eq!(
        alerts.events(),
        vec![AlertEvent::LossStreak {
            id: healthy.clone(),
            streak: 4,
        }]
    );

    // The broken player recovers on a later tick without operator action,
    // while the healthy player's watermark keeps the tick silent for them.
    history.recover(&broken_puuid);
    history.set_outcomes(broken_puuid, outcomes("LLLW"));

    poll.tick().await;

    assert_eq!(
        alerts.events(),
        vec![
            AlertEvent::LossStreak {
                id: healthy,
                streak: 4,
            },
            AlertEvent::LossStreak {
                id: broken,
                streak: 3,
            },
        ]
    );
}
