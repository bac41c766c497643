//! Core domain types for the survivor pool
//!
//! These are the shapes shared between the pure engine modules
//! ([`crate::validator`], [`crate::elimination`], [`crate::standings`]),
//! the contest snapshot store and the scoreboard provider. Everything is
//! plain data: the engines never hold references into mutable state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One user's participation in one contest.
///
/// `alive` flips to `false` exactly once, driven by an
/// [`EliminationOutcome`] applied through the contest snapshot, and never
/// reverts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "contestId")]
    pub contest_id: String,
    pub alive: bool,
    #[serde(rename = "eliminatedWeek", default, skip_serializing_if = "Option::is_none")]
    pub eliminated_week: Option<u8>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Entry {
    pub fn new(
        id: impl Into<String>,
        user_id: impl Into<String>,
        contest_id: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Entry {
            id: id.into(),
            user_id: user_id.into(),
            contest_id: contest_id.into(),
            alive: true,
            eliminated_week: None,
            created_at,
        }
    }
}

/// A single team selection for a given entry and week.
///
/// Immutable once the week's lock time passes; `locked` records that the
/// snapshot store has sealed it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekPick {
    #[serde(rename = "entryId")]
    pub entry_id: String,
    pub week: u8,
    pub team: String,
    #[serde(rename = "submittedAt")]
    pub submitted_at: DateTime<Utc>,
    #[serde(default)]
    pub locked: bool,
}

/// Lifecycle of a scheduled game as reported by the scoreboard feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameStatus {
    Scheduled,
    InProgress,
    Final,
}

/// One scheduled matchup. Produced by the scoreboard feed (or seeded into
/// a snapshot by hand) and only ever consumed by the engines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: String,
    pub week: u8,
    #[serde(rename = "homeTeam")]
    pub home_team: String,
    #[serde(rename = "awayTeam")]
    pub away_team: String,
    pub scheduled: DateTime<Utc>,
    pub status: GameStatus,
    #[serde(rename = "homeScore", default, skip_serializing_if = "Option::is_none")]
    pub home_score: Option<u32>,
    #[serde(rename = "awayScore", default, skip_serializing_if = "Option::is_none")]
    pub away_score: Option<u32>,
    /// Winning team id once final. `None` on a final game means a tie.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<String>,
}

impl Game {
    pub fn is_final(&self) -> bool {
        self.status == GameStatus::Final
    }

    /// Final with no winner recorded is a tie.
    pub fn is_tie(&self) -> bool {
        self.is_final() && self.winner.is_none()
    }

    pub fn involves(&self, team: &str) -> bool {
        self.home_team == team || self.away_team == team
    }

    /// The opponent of `team` in this game, if `team` plays in it.
    pub fn opponent_of(&self, team: &str) -> Option<&str> {
        if self.home_team == team {
            Some(&self.away_team)
        } else if self.away_team == team {
            Some(&self.home_team)
        } else {
            None
        }
    }
}

/// Why an entry was eliminated in a given week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum EliminationReason {
    /// A picked team lost its game.
    IncorrectPick { team: String },
    /// The entry never submitted the required picks for the week.
    NoPickSubmitted,
    /// A picked team tied and the contest plays ties as losses.
    TiedGame { team: String },
}

/// Result of scoring one entry for one week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum OutcomeStatus {
    /// Every picked team won (or tied, under the survive-on-tie policy).
    Survived,
    /// At least one picked team's game is not final yet; re-score later.
    Pending,
    Eliminated { reason: EliminationReason },
}

/// One entry's scored result for one week, as returned by
/// [`crate::elimination::EliminationEngine::apply_week_results`].
///
/// The engine never mutates [`Entry`] state itself; the caller applies the
/// transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EliminationOutcome {
    #[serde(rename = "entryId")]
    pub entry_id: String,
    pub week: u8,
    #[serde(flatten)]
    pub status: OutcomeStatus,
}

impl EliminationOutcome {
    pub fn is_elimination(&self) -> bool {
        matches!(self.status, OutcomeStatus::Eliminated { .. })
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.status, OutcomeStatus::Pending)
    }
}

/// Materialized view of one entry's current position in the contest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryStanding {
    pub alive: bool,
    #[serde(rename = "eliminatedAtWeek", default, skip_serializing_if = "Option::is_none")]
    pub eliminated_at_week: Option<u8>,
    #[serde(rename = "eliminationReason", default, skip_serializing_if = "Option::is_none")]
    pub elimination_reason: Option<EliminationReason>,
    #[serde(rename = "weeksSurvived")]
    pub weeks_survived: u8,
    /// Every team this entry has ever picked, in team-id order.
    #[serde(rename = "usedTeams")]
    pub used_teams: BTreeSet<String>,
    /// League teams still available to this entry.
    #[serde(rename = "availableTeams")]
    pub available_teams: BTreeSet<String>,
}
