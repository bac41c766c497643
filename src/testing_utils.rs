//! Shared fixture builders for unit and integration tests.
//!
//! Kept in the library (like the rest of the crate, compiled for tests in
//! `tests/` too) so fixtures stay consistent across suites.

#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::calendar::SeasonCalendar;
use crate::constants::WEEKS_IN_SEASON;
use crate::league::LEAGUE_TEAMS;
use crate::models::{Entry, Game, GameStatus, WeekPick};

/// Shorthand UTC timestamp constructor for fixtures.
pub fn utc_time(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .unwrap()
}

/// An alive entry created at a fixed preseason timestamp.
pub fn sample_entry(id: &str) -> Entry {
    Entry::new(id, format!("user-{id}"), "contest-1", utc_time(2025, 8, 1, 12, 0))
}

/// An unlocked pick submitted at a fixed preseason timestamp.
pub fn sample_pick(entry_id: &str, week: u8, team: &str) -> WeekPick {
    WeekPick {
        entry_id: entry_id.to_string(),
        week,
        team: team.to_string(),
        submitted_at: utc_time(2025, 8, 15, 12, 0),
        locked: false,
    }
}

/// A game that has not started.
pub fn scheduled_game(
    id: &str,
    week: u8,
    home: &str,
    away: &str,
    scheduled: DateTime<Utc>,
) -> Game {
    Game {
        id: id.to_string(),
        week,
        home_team: home.to_string(),
        away_team: away.to_string(),
        scheduled,
        status: GameStatus::Scheduled,
        home_score: None,
        away_score: None,
        winner: None,
    }
}

/// A final game. `winner: None` produces a tie with level scores.
pub fn final_game(id: &str, week: u8, home: &str, away: &str, winner: Option<&str>) -> Game {
    let (home_score, away_score) = match winner {
        Some(w) if w == home => (Some(24), Some(17)),
        Some(_) => (Some(17), Some(24)),
        None => (Some(20), Some(20)),
    };
    Game {
        id: id.to_string(),
        week,
        home_team: home.to_string(),
        away_team: away.to_string(),
        scheduled: utc_time(2025, 9, 7, 17, 0) + Duration::weeks(i64::from(week) - 1),
        status: GameStatus::Final,
        home_score,
        away_score,
        winner: winner.map(str::to_string),
    }
}

/// A full 18-week calendar with one game per week. Week 1 kicks off
/// 2025-09-04; each later week follows seven days on. Matchups rotate
/// through the league table and are irrelevant to calendar tests.
pub fn season_calendar(season: u16) -> SeasonCalendar {
    let mut games = Vec::new();
    for week in 1..=WEEKS_IN_SEASON {
        let home = LEAGUE_TEAMS[(week as usize * 2) % LEAGUE_TEAMS.len()].id;
        let away = LEAGUE_TEAMS[(week as usize * 2 + 1) % LEAGUE_TEAMS.len()].id;
        let kickoff = utc_time(2025, 9, 4, 0, 20) + Duration::weeks(i64::from(week) - 1);
        games.push(scheduled_game(
            &format!("g{week}"),
            week,
            home,
            away,
            kickoff,
        ));
    }
    SeasonCalendar::new(season, games)
}
