//! The monitoring engine: watchlists, alert deduplication, and the two
//! polling loops.
//!
//! # Modules
//!
//! - [`watchlist`] - Concurrent set of watched players
//! - [`streak`] - Loss-streak watermark deduplication
//! - [`live`] - Edge-triggered live-game deduplication
//! - [`poll`] - Generic fixed-interval polling loop
//! - [`monitor`] - Service tying the above to the provider and notifier ports

pub mod live;
pub mod monitor;
pub mod poll;
pub mod streak;
pub mod watchlist;

pub use live::LiveTracker;
pub use monitor::{LiveProbe, Monitor, StreakProbe, WatchKind};
pub use poll::{PollLoop, Probe};
pub use streak::StreakTracker;
pub use watchlist::Watchlist;
