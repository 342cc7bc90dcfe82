//! End-to-end streak monitoring scenarios driven through scripted
//! providers: evaluation, watermark dedup, and alert idempotence.

use std::sync::Arc;

use tiltwatch::application::Monitor;
use tiltwatch::config::MonitorConfig;
use tiltwatch::domain::{Puuid, RiotId};
use tiltwatch::port::{AlertEvent, NotifierRegistry};
use tiltwatch::testkit::{
    outcomes, RecordingNotifier, ScriptedHistory, ScriptedLiveStatus, StaticResolver,
};

struct Fixture {
    monitor: Monitor,
    resolver: Arc<StaticResolver>,
    history: Arc<ScriptedHistory>,
    alerts: RecordingNotifier,
}

fn fixture() -> Fixture {
    let resolver = Arc::new(StaticResolver::new());
    let history = Arc::new(ScriptedHistory::new());
    let live = Arc::new(ScriptedLiveStatus::new());

    let alerts = RecordingNotifier::new();
    let mut registry = NotifierRegistry::new();
    registry.register(Box::new(alerts.clone()));

    let monitor = Monitor::new(
        resolver.clone(),
        history.clone(),
        live,
        Arc::new(registry),
        MonitorConfig::default(),
    );

    Fixture {
        monitor,
        resolver,
        history,
        alerts,
    }
}

fn player(fixture: &Fixture, name: &str) -> (RiotId, Puuid) {
    let id = RiotId::new(name, "KR1");
    let puuid = Puuid::new(format!("puuid-{name}"));
    fixture.resolver.insert(id.clone(), puuid.clone());
    (id, puuid)
}

#[tokio::test]
async fn three_losses_then_win_fires_streak_alert() {
    let f = fixture();
    let (id, puuid) = player(&f, "Faker");
    f.history.set_outcomes(puuid, outcomes("LLLWL"));

    f.monitor.probe_streak(&id).await.unwrap();

    assert_eq!(
        f.alerts.events(),
        vec![AlertEvent::LossStreak { id, streak: 3 }]
    );
}

#[tokio::test]
async fn repolling_identical_history_is_silent() {
    let f = fixture();
    let (id, puuid) = player(&f, "Faker");
    f.history.set_outcomes(puuid, outcomes("LLLWL"));

    f.monitor.probe_streak(&id).await.unwrap();
    f.monitor.probe_streak(&id).await.unwrap();

    assert_eq!(f.alerts.len(), 1);
}

#[tokio::test]
async fn growing_streak_realerts_at_new_length() {
    let f = fixture();
    let (id, puuid) = player(&f, "Faker");

    f.history.set_outcomes(puuid.clone(), outcomes("LLLWL"));
    f.monitor.probe_streak(&id).await.unwrap();

    // One more loss pushes the streak from 3 to 4.
    f.history.set_outcomes(puuid, outcomes("LLLLW"));
    f.monitor.probe_streak(&id).await.unwrap();

    assert_eq!(
        f.alerts.events(),
        vec![
            AlertEvent::LossStreak {
                id: id.clone(),
                streak: 3
            },
            AlertEvent::LossStreak { id, streak: 4 },
        ]
    );
}

#[tokio::test]
async fn sub_threshold_streak_never_alerts() {
    let f = fixture();
    let (id, puuid) = player(&f, "Faker");
    f.history.set_outcomes(puuid, outcomes("LLWLL"));

    f.monitor.probe_streak(&id).await.unwrap();

    assert!(f.alerts.is_empty());
}

#[tokio::test]
async fn window_of_losses_alerts_at_window_length() {
    // Ten straight losses in a ten-match window: the true streak may be
    // longer, but the bounded lookback reports exactly the window.
    let f = fixture();
    let (id, puuid) = player(&f, "Faker");
    f.history.set_outcomes(puuid, outcomes("LLLLLLLLLL"));

    f.monitor.probe_streak(&id).await.unwrap();

    assert_eq!(
        f.alerts.events(),
        vec![AlertEvent::LossStreak { id, streak: 10 }]
    );
}

#[tokio::test]
async fn history_respects_configured_lookback_depth() {
    let f = fixture();
    let (id, puuid) = player(&f, "Faker");
    // Provider holds more history than the lookback depth of 10; only
    // the newest ten outcomes count.
    f.history.set_outcomes(puuid, outcomes("LLLLLLLLLLLLLL"));

    f.monitor.probe_streak(&id).await.unwrap();

    assert_eq!(
        f.alerts.events(),
        vec![AlertEvent::LossStreak { id, streak: 10 }]
    );
}

#[tokio::test]
async fn fetch_failure_skips_player_and_recovers_next_poll() {
    let f = fixture();
    let (id, puuid) = player(&f, "Faker");
    f.history.set_outcomes(puuid.clone(), outcomes("LLLW"));
    f.history.fail_for(puuid.clone());

    assert!(f.monitor.probe_streak(&id).await.is_err());
    assert!(f.alerts.is_empty());

    // Next tick retries naturally.
    f.history.recover(&puuid);
    f.monitor.probe_streak(&id).await.unwrap();
    assert_eq!(f.alerts.len(), 1);
}

#[tokio::test]
async fn streak_after_reset_realerts_at_new_length() {
    let f = fixture();
    let (id, puuid) = player(&f, "Faker");

    f.history.set_outcomes(puuid.clone(), outcomes("LLLLW"));
    f.monitor.probe_streak(&id).await.unwrap();

    // A win resets the run; no alert while below threshold.
    f.history.set_outcomes(puuid.clone(), outcomes("WLLLL"));
    f.monitor.probe_streak(&id).await.unwrap();

    // Three fresh losses differ from the watermark of 4, so it fires.
    f.history.set_outcomes(puuid, outcomes("LLLWL"));
    f.monitor.probe_streak(&id).await.unwrap();

    assert_eq!(
        f.alerts.events(),
        vec![
            AlertEvent::LossStreak {
                id: id.clone(),
                streak: 4
            },
            AlertEvent::LossStreak { id, streak: 3 },
        ]
    );
}
