//! NFL Survivor Pool Engine
//!
//! Core logic for running a survivor pick'em contest: users pick one team
//! per week (two from week 12), may never reuse a team, and are
//! eliminated the first time a picked team loses. The engine modules are
//! pure functions over data snapshots; persistence and the scoreboard
//! feed sit at the edges.
//!
//! # Examples
//!
//! ```rust
//! use survivor_pool::elimination::EliminationEngine;
//! use survivor_pool::models::{Entry, Game, GameStatus, WeekPick};
//! use survivor_pool::standings::StandingsProjector;
//! use chrono::{TimeZone, Utc};
//!
//! let game = Game {
//!     id: "g1".to_string(),
//!     week: 4,
//!     home_team: "DAL".to_string(),
//!     away_team: "NYG".to_string(),
//!     scheduled: Utc.with_ymd_and_hms(2025, 9, 28, 17, 0, 0).unwrap(),
//!     status: GameStatus::Final,
//!     home_score: Some(17),
//!     away_score: Some(24),
//!     winner: Some("NYG".to_string()),
//! };
//! let entry = Entry::new("e1", "u1", "c1", Utc::now());
//! let pick = WeekPick {
//!     entry_id: "e1".to_string(),
//!     week: 4,
//!     team: "DAL".to_string(),
//!     submitted_at: Utc::now(),
//!     locked: true,
//! };
//!
//! let engine = EliminationEngine::default();
//! let outcomes = engine.apply_week_results(4, &[game], &[(entry.clone(), vec![pick.clone()])]);
//! assert!(outcomes[0].is_elimination());
//!
//! let standing = StandingsProjector::new().project(&entry, &[pick], &outcomes);
//! assert!(!standing.alive);
//! ```

pub mod calendar;
pub mod commands;
pub mod config;
pub mod constants;
pub mod contest;
pub mod elimination;
pub mod error;
pub mod league;
pub mod models;
pub mod scoreboard;
pub mod standings;
pub mod testing_utils;
pub mod validator;

// Re-export commonly used types for convenience
pub use calendar::{CalendarError, SeasonCalendar, required_picks};
pub use config::Config;
pub use contest::ContestSnapshot;
pub use elimination::{EliminationEngine, TiePolicy};
pub use error::AppError;
pub use models::{
    EliminationOutcome, EliminationReason, Entry, EntryStanding, Game, GameStatus,
    OutcomeStatus, WeekPick,
};
pub use scoreboard::ScoreboardClient;
pub use standings::{SeasonState, StandingsProjector};
pub use validator::{AcceptedPicks, PickError, PickValidator};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
