//! Ports: trait boundaries between the monitoring engine and the
//! outside world (Riot data providers, alert sinks).

pub mod notifier;
pub mod provider;

pub use notifier::{AlertEvent, LogNotifier, Notifier, NotifierRegistry, NullNotifier};
pub use provider::{AccountResolver, LiveStatusProvider, MatchHistoryProvider};
