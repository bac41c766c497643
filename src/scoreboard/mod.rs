//! Scoreboard feed provider
//!
//! The external results/schedule boundary: an async HTTP client for a
//! JSON scoreboard feed, wire models converted into domain [`Game`]s, and
//! a bounded response cache with an injected clock. The pure engine
//! modules never touch this layer; they consume the `Game` snapshots it
//! produces.
//!
//! [`Game`]: crate::models::Game

pub mod cache;
pub mod client;
pub mod models;

pub use cache::{Clock, ResponseCache, SystemClock};
pub use client::ScoreboardClient;
pub use models::{ScoreboardEvent, ScoreboardResponse, ScoreboardSide};
