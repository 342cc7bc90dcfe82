//! Notifier port for monitoring alerts.
//!
//! This module defines the trait for delivering alerts raised by the
//! polling loops, plus a composite registry that fans one alert out to
//! every registered sink.

use crate::domain::RiotId;

/// Alerts raised by the monitoring engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlertEvent {
    /// A watched player reached a new consecutive-loss streak length.
    LossStreak {
        /// The player the alert is about.
        id: RiotId,
        /// Current streak length (always >= the configured threshold).
        streak: usize,
    },
    /// A watched player just entered an active game.
    GameStarted {
        /// The player the alert is about.
        id: RiotId,
    },
}

/// Trait for alert sinks.
///
/// Alerts are fire-and-forget from the engine's perspective: delivery
/// failures are the sink's concern and are never retried by the caller.
///
/// # Implementation Notes
///
/// - Implementations must be thread-safe (`Send + Sync`)
/// - `notify` should not block or perform slow I/O synchronously;
///   spawn an async task for slow operations
pub trait Notifier: Send + Sync {
    /// Handle an alert.
    fn notify(&self, event: AlertEvent);
}

/// Registry of notifiers (composite pattern).
///
/// Broadcasts alerts to all registered notifiers. The polling loops
/// treat an empty registry as "no alert sink configured" and idle.
pub struct NotifierRegistry {
    notifiers: Vec<Box<dyn Notifier>>,
}

impl NotifierRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self { notifiers: vec![] }
    }

    /// Register a notifier.
    pub fn register(&mut self, notifier: Box<dyn Notifier>) {
        self.notifiers.push(notifier);
    }

    /// Broadcast an alert to all registered notifiers.
    pub fn notify_all(&self, event: AlertEvent) {
        for notifier in &self.notifiers {
            notifier.notify(event.clone());
        }
    }

    /// Number of registered notifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.notifiers.len()
    }

    /// Check if registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notifiers.is_empty()
    }
}

impl Default for NotifierRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// A no-op notifier for testing or when alerts are disabled.
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _event: AlertEvent) {}
}

/// A notifier that logs alerts via tracing.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, event: AlertEvent) {
        use tracing::info;
        match event {
            AlertEvent::LossStreak { id, streak } => {
                info!(riot_id = %id, streak, "Loss streak alert");
            }
            AlertEvent::GameStarted { id } => {
                info!(riot_id = %id, "Game started alert");
            }
        }
    }
}
