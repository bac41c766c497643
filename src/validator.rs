//! Pick validation
//!
//! Gates a candidate submission before the caller persists it. Validation
//! is a pure function of its inputs: the entry, its full pick history, the
//! candidate teams and an explicit `now`. It never performs I/O and has no
//! side effects; persistence stays with the caller.

use chrono::{DateTime, Utc};
use std::collections::BTreeSet;
use thiserror::Error;

use crate::calendar::{CalendarError, SeasonCalendar, required_picks};
use crate::models::{Entry, WeekPick};

/// Rejection reasons, returned as values rather than raised. The caller
/// translates these into user-facing messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PickError {
    #[error("Entry {entry_id} has already been eliminated")]
    EntryNotAlive { entry_id: String },

    #[error("Picks for week {week} locked at {lock_time}")]
    DeadlinePassed {
        week: u8,
        lock_time: DateTime<Utc>,
    },

    #[error("Entry {entry_id} already submitted picks for week {week}")]
    AlreadySubmitted { entry_id: String, week: u8 },

    #[error("Week {week} requires {expected} pick(s), got {got}")]
    WrongPickCount { week: u8, expected: usize, got: usize },

    #[error("Team {team} appears more than once in the submission")]
    DuplicateInSubmission { team: String },

    #[error("Team {team} was already used by this entry")]
    AlreadyUsedTeam { team: String },

    #[error(transparent)]
    Calendar(#[from] CalendarError),
}

/// A validated submission, ready for the caller to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedPicks {
    pub entry_id: String,
    pub week: u8,
    pub teams: BTreeSet<String>,
}

/// Validates candidate picks against the season calendar and an entry's
/// pick history.
#[derive(Debug)]
pub struct PickValidator<'a> {
    calendar: &'a SeasonCalendar,
}

impl<'a> PickValidator<'a> {
    pub fn new(calendar: &'a SeasonCalendar) -> Self {
        PickValidator { calendar }
    }

    /// Accepts or rejects a candidate set of team picks for an entry and
    /// week. Checks run in a fixed order so a submission with several
    /// problems is reported deterministically: entry liveness, week
    /// validity, deadline, prior submission for the week, pick count,
    /// in-submission duplicates, team reuse.
    pub fn validate(
        &self,
        entry: &Entry,
        prior_picks: &[WeekPick],
        week: u8,
        candidate_teams: &[String],
        now: DateTime<Utc>,
    ) -> Result<AcceptedPicks, PickError> {
        if !entry.alive {
            return Err(PickError::EntryNotAlive {
                entry_id: entry.id.clone(),
            });
        }

        let lock_time = self.calendar.lock_time_for_week(week)?;
        if now >= lock_time {
            return Err(PickError::DeadlinePassed { week, lock_time });
        }

        // One submission per (entry, week): a stored pick for this week
        // means the count invariant is already satisfied, and appending
        // more would break it
        if prior_picks
            .iter()
            .any(|pick| pick.entry_id == entry.id && pick.week == week)
        {
            return Err(PickError::AlreadySubmitted {
                entry_id: entry.id.clone(),
                week,
            });
        }

        let expected = required_picks(week);
        if candidate_teams.len() != expected {
            return Err(PickError::WrongPickCount {
                week,
                expected,
                got: candidate_teams.len(),
            });
        }

        let mut teams = BTreeSet::new();
        for team in candidate_teams {
            if !teams.insert(team.clone()) {
                return Err(PickError::DuplicateInSubmission { team: team.clone() });
            }
        }

        // Team reuse is scoped to the entry's whole lifetime, not the week
        let used: BTreeSet<&str> = prior_picks
            .iter()
            .filter(|pick| pick.entry_id == entry.id)
            .map(|pick| pick.team.as_str())
            .collect();
        for team in &teams {
            if used.contains(team.as_str()) {
                return Err(PickError::AlreadyUsedTeam { team: team.clone() });
            }
        }

        Ok(AcceptedPicks {
            entry_id: entry.id.clone(),
            week,
            teams,
        })
    }
}
