//! Tiltwatch - League of Legends loss-streak and live-game monitoring.
//!
//! This crate watches a set of players through the Riot REST API and
//! raises an alert exactly once per state transition: a player reaching
//! a new consecutive-loss streak length, or entering an active game.
//! The Riot API offers no push mechanism, so two fixed-interval polling
//! loops derive transitions from successive snapshots and deduplicate
//! alerts across polls.
//!
//! # Architecture
//!
//! The monitoring engine only speaks to trait ports; transport lives in
//! adapters:
//!
//! - **`application`** - Watchlists, alert deduplication, and the
//!   generic polling loop driving both monitors
//! - **`port`** - Provider traits (resolve, match history, live status)
//!   and the notifier sink
//! - **`adapter::riot`** - reqwest client for the Riot endpoints
//! - **`adapter::telegram`** - Alert delivery and the command surface
//!   (requires the `telegram` feature)
//!
//! # Modules
//!
//! - [`config`] - Configuration loading from TOML files
//! - [`domain`] - Provider-agnostic types: identities, outcomes, states
//! - [`error`] - Error types for the crate
//! - [`application`] - The monitoring engine
//! - [`port`] - Trait boundaries to external collaborators
//! - [`adapter`] - Riot and Telegram implementations of the ports
//! - [`app`] - Application wiring and lifecycle
//!
//! # Features
//!
//! - `telegram` - Telegram alert delivery and bot commands (default)
//! - `testkit` - Scripted providers and a recording notifier for tests

pub mod adapter;
pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
