//! Contest snapshot persistence
//!
//! One JSON file per contest holding entries, picks, outcomes and games.
//! This is the "caller" the pure engines are written for: it serializes
//! pick submissions, applies elimination outcomes to entries exactly
//! once, and hands out data snapshots.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tracing::{debug, info};

use crate::calendar::SeasonCalendar;
use crate::elimination::TiePolicy;
use crate::error::AppError;
use crate::models::{EliminationOutcome, Entry, Game, OutcomeStatus, WeekPick};
use crate::validator::AcceptedPicks;

/// Serialized state of one contest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContestSnapshot {
    #[serde(rename = "contestId")]
    pub contest_id: String,
    pub season: u16,
    #[serde(rename = "tiePolicy", default)]
    pub tie_policy: TiePolicy,
    pub entries: Vec<Entry>,
    #[serde(default)]
    pub picks: Vec<WeekPick>,
    #[serde(default)]
    pub outcomes: Vec<EliminationOutcome>,
    #[serde(default)]
    pub games: Vec<Game>,
}

impl ContestSnapshot {
    pub fn new(contest_id: impl Into<String>, season: u16) -> Self {
        ContestSnapshot {
            contest_id: contest_id.into(),
            season,
            tie_policy: TiePolicy::default(),
            entries: Vec::new(),
            picks: Vec::new(),
            outcomes: Vec::new(),
            games: Vec::new(),
        }
    }

    pub async fn load(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let content = fs::read_to_string(path.as_ref()).await?;
        let snapshot: ContestSnapshot = serde_json::from_str(&content)?;
        debug!(
            "Loaded contest {} with {} entries, {} picks",
            snapshot.contest_id,
            snapshot.entries.len(),
            snapshot.picks.len()
        );
        Ok(snapshot)
    }

    pub async fn save(&self, path: impl AsRef<Path>) -> Result<(), AppError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), content).await?;
        Ok(())
    }

    /// The season calendar implied by the snapshot's games.
    pub fn calendar(&self) -> SeasonCalendar {
        SeasonCalendar::new(self.season, self.games.clone())
    }

    pub fn entry(&self, entry_id: &str) -> Result<&Entry, AppError> {
        self.entries
            .iter()
            .find(|entry| entry.id == entry_id)
            .ok_or_else(|| AppError::EntryNotFound {
                entry_id: entry_id.to_string(),
            })
    }

    /// One entry's picks for a given week.
    pub fn picks_for_week(&self, entry_id: &str, week: u8) -> Vec<WeekPick> {
        self.picks
            .iter()
            .filter(|pick| pick.entry_id == entry_id && pick.week == week)
            .cloned()
            .collect()
    }

    /// Every entry paired with its picks, the shape
    /// [`crate::elimination::EliminationEngine`] consumes.
    pub fn entries_with_picks(&self) -> Vec<(Entry, Vec<WeekPick>)> {
        self.entries
            .iter()
            .map(|entry| {
                let picks = self
                    .picks
                    .iter()
                    .filter(|pick| pick.entry_id == entry.id)
                    .cloned()
                    .collect();
                (entry.clone(), picks)
            })
            .collect()
    }

    /// Persists a validated submission as one [`WeekPick`] per team.
    pub fn record_picks(&mut self, accepted: &AcceptedPicks, submitted_at: DateTime<Utc>) {
        for team in &accepted.teams {
            self.picks.push(WeekPick {
                entry_id: accepted.entry_id.clone(),
                week: accepted.week,
                team: team.clone(),
                submitted_at,
                locked: false,
            });
        }
        info!(
            "Recorded {} pick(s) for entry {} week {}",
            accepted.teams.len(),
            accepted.entry_id,
            accepted.week
        );
    }

    /// Upserts fetched games by id, replacing stale copies of the same
    /// game (scores arrive over several fetches).
    pub fn merge_games(&mut self, incoming: Vec<Game>) {
        for game in incoming {
            match self.games.iter_mut().find(|existing| existing.id == game.id) {
                Some(existing) => *existing = game,
                None => self.games.push(game),
            }
        }
    }

    /// Marks picks for a week as locked once its deadline has passed.
    pub fn lock_week(&mut self, week: u8) {
        for pick in self.picks.iter_mut().filter(|pick| pick.week == week) {
            pick.locked = true;
        }
    }

    /// Applies a week's outcomes: replaces previously stored outcomes for
    /// that week (pending ones get superseded by final scoring) and flips
    /// `Entry.alive` for fresh eliminations. Re-applying the same week
    /// after a crash mid-persist cannot double-eliminate; when a pending
    /// week finalizes after a later week already eliminated the entry,
    /// `eliminated_week` moves back to the earliest eliminating week.
    pub fn apply_outcomes(&mut self, week: u8, outcomes: Vec<EliminationOutcome>) {
        self.outcomes.retain(|outcome| outcome.week != week);

        for outcome in &outcomes {
            if let OutcomeStatus::Eliminated { .. } = outcome.status {
                if let Some(entry) = self
                    .entries
                    .iter_mut()
                    .find(|entry| entry.id == outcome.entry_id)
                {
                    if entry.alive {
                        entry.alive = false;
                        entry.eliminated_week = Some(week);
                        info!("Entry {} eliminated in week {}", entry.id, week);
                    } else if entry.eliminated_week.is_none_or(|w| week < w) {
                        entry.eliminated_week = Some(week);
                        info!(
                            "Entry {} elimination moved back to week {}",
                            entry.id, week
                        );
                    }
                }
            }
        }

        self.outcomes.extend(outcomes);
        self.outcomes.sort_by(|a, b| {
            a.week.cmp(&b.week).then_with(|| a.entry_id.cmp(&b.entry_id))
        });
    }
}
