//! Season calendar: week -> games and lock deadlines
//!
//! The calendar is built once from a season's games and then only queried.
//! The lock time for a week is the earliest scheduled kickoff among that
//! week's games; picks submitted at or after it are refused by the
//! validator.

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use thiserror::Error;

use crate::constants::{TWO_PICK_START_WEEK, WEEKS_IN_SEASON};
use crate::models::Game;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    /// The week is outside the configured season, or no games are
    /// configured for it. A lock time over an empty week is undefined, so
    /// both cases are reported the same way.
    #[error("Unknown week: {week} (season runs weeks 1-{WEEKS_IN_SEASON})")]
    UnknownWeek { week: u8 },
}

/// Maps week numbers (1-18) to game sets and lock times.
#[derive(Debug, Clone)]
pub struct SeasonCalendar {
    season: u16,
    weeks: BTreeMap<u8, Vec<Game>>,
}

impl SeasonCalendar {
    /// Builds a calendar from a season's games. Games land in the week
    /// they carry; each week is ordered by kickoff time, then id, so
    /// queries are deterministic regardless of input order.
    pub fn new(season: u16, games: Vec<Game>) -> Self {
        let mut weeks: BTreeMap<u8, Vec<Game>> = BTreeMap::new();
        for game in games {
            weeks.entry(game.week).or_default().push(game);
        }
        for games in weeks.values_mut() {
            games.sort_by(|a, b| a.scheduled.cmp(&b.scheduled).then_with(|| a.id.cmp(&b.id)));
        }
        SeasonCalendar { season, weeks }
    }

    pub fn season(&self) -> u16 {
        self.season
    }

    /// Weeks that actually have games configured, ascending.
    pub fn configured_weeks(&self) -> impl Iterator<Item = u8> + '_ {
        self.weeks.keys().copied()
    }

    /// The games scheduled for a week, ordered by kickoff time.
    pub fn games_for_week(&self, week: u8) -> Result<&[Game], CalendarError> {
        if week == 0 || week > WEEKS_IN_SEASON {
            return Err(CalendarError::UnknownWeek { week });
        }
        self.weeks
            .get(&week)
            .map(Vec::as_slice)
            .ok_or(CalendarError::UnknownWeek { week })
    }

    /// The pick deadline for a week: the earliest scheduled kickoff.
    pub fn lock_time_for_week(&self, week: u8) -> Result<DateTime<Utc>, CalendarError> {
        let games = self.games_for_week(week)?;
        games
            .iter()
            .map(|game| game.scheduled)
            .min()
            .ok_or(CalendarError::UnknownWeek { week })
    }

    /// The game a team plays in a given week, if any.
    pub fn game_for_team(&self, week: u8, team: &str) -> Result<Option<&Game>, CalendarError> {
        Ok(self.games_for_week(week)?.iter().find(|g| g.involves(team)))
    }
}

/// How many picks an entry must submit for a week: one through week 11,
/// two from week 12 on.
pub fn required_picks(week: u8) -> usize {
    if week >= TWO_PICK_START_WEEK { 2 } else { 1 }
}
