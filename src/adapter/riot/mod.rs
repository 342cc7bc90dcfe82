//! Riot API adapter.

pub mod client;
pub mod dto;

pub use client::RiotApiClient;
