//! Command handlers for the binary
//!
//! Each handler loads the contest snapshot, runs the pure engine modules
//! over it, persists the result and prints a plain-text report. All
//! domain decisions stay in the engine modules; this file is glue.

use chrono::Utc;
use tracing::info;

use crate::config::Config;
use crate::contest::ContestSnapshot;
use crate::elimination::EliminationEngine;
use crate::error::AppError;
use crate::league;
use crate::models::{EliminationReason, OutcomeStatus};
use crate::scoreboard::ScoreboardClient;
use crate::standings::StandingsProjector;
use crate::validator::PickValidator;

/// Prints standings for every entry in the contest.
pub async fn show_standings(file: &str) -> Result<(), AppError> {
    let snapshot = ContestSnapshot::load(file).await?;
    let projector = StandingsProjector::new();
    let state = projector.season_state(&snapshot.entries, &snapshot.picks, &snapshot.outcomes);

    println!("\nContest {} — season {}", snapshot.contest_id, snapshot.season);
    println!("────────────────────────────────────────────────");
    for (entry_id, standing) in &state.standings {
        let status = if standing.alive {
            format!("alive, survived {} week(s)", standing.weeks_survived)
        } else {
            let week = standing
                .eliminated_at_week
                .map(|w| w.to_string())
                .unwrap_or_else(|| "?".to_string());
            let reason = match &standing.elimination_reason {
                Some(EliminationReason::IncorrectPick { team }) => format!("{team} lost"),
                Some(EliminationReason::TiedGame { team }) => format!("{team} tied"),
                Some(EliminationReason::NoPickSubmitted) => "no pick submitted".to_string(),
                None => "eliminated".to_string(),
            };
            format!("OUT week {week} ({reason})")
        };
        let used: Vec<&str> = standing.used_teams.iter().map(String::as_str).collect();
        println!("{entry_id:<12} {status}");
        println!("{:<12} used: {}", "", if used.is_empty() { "-".to_string() } else { used.join(", ") });
    }
    println!("────────────────────────────────────────────────");
    println!("{} of {} entries alive", state.alive_entries().len(), state.standings.len());

    Ok(())
}

/// Validates and records a pick submission for an entry.
pub async fn submit_picks(
    file: &str,
    entry_id: &str,
    week: u8,
    teams_csv: &str,
) -> Result<(), AppError> {
    let mut snapshot = ContestSnapshot::load(file).await?;

    // Resolve input to canonical team ids up front so "kc" and "KC" match
    let mut teams = Vec::new();
    for raw in teams_csv.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let team = league::find_team(raw).ok_or_else(|| AppError::UnknownTeam {
            team: raw.to_string(),
        })?;
        teams.push(team.id.to_string());
    }

    let calendar = snapshot.calendar();
    let validator = PickValidator::new(&calendar);
    let entry = snapshot.entry(entry_id)?;
    let now = Utc::now();

    let accepted = validator.validate(entry, &snapshot.picks, week, &teams, now)?;

    snapshot.record_picks(&accepted, now);
    snapshot.save(file).await?;

    let teams: Vec<&str> = accepted.teams.iter().map(String::as_str).collect();
    println!(
        "Picks accepted for {} week {}: {}",
        entry_id,
        week,
        teams.join(", ")
    );
    Ok(())
}

/// Fetches one week's games from the scoreboard feed into the snapshot.
pub async fn fetch_week(file: &str, week: u8, config: &Config) -> Result<(), AppError> {
    let mut snapshot = ContestSnapshot::load(file).await?;
    let client = ScoreboardClient::new(config)?;

    let games = client.fetch_week(snapshot.season, week).await?;
    let fetched = games.len();
    let finals = games.iter().filter(|g| g.is_final()).count();

    snapshot.merge_games(games);
    snapshot.save(file).await?;

    println!("Fetched {fetched} game(s) for week {week} ({finals} final)");
    Ok(())
}

/// Scores a week and applies eliminations to the snapshot.
pub async fn apply_results(file: &str, week: u8) -> Result<(), AppError> {
    let mut snapshot = ContestSnapshot::load(file).await?;

    let week_games: Vec<_> = snapshot
        .games
        .iter()
        .filter(|game| game.week == week)
        .cloned()
        .collect();
    if week_games.is_empty() {
        return Err(AppError::Calendar(
            crate::calendar::CalendarError::UnknownWeek { week },
        ));
    }

    let engine = EliminationEngine::new(snapshot.tie_policy);
    let entries_with_picks = snapshot.entries_with_picks();
    let outcomes = engine.apply_week_results(week, &week_games, &entries_with_picks);

    let eliminated = outcomes.iter().filter(|o| o.is_elimination()).count();
    let pending = outcomes.iter().filter(|o| o.is_pending()).count();
    let survived = outcomes.len() - eliminated - pending;

    for outcome in &outcomes {
        if let OutcomeStatus::Eliminated { reason } = &outcome.status {
            let detail = match reason {
                EliminationReason::IncorrectPick { team } => format!("{team} lost"),
                EliminationReason::TiedGame { team } => format!("{team} tied"),
                EliminationReason::NoPickSubmitted => "no pick submitted".to_string(),
            };
            println!("Entry {} eliminated: {detail}", outcome.entry_id);
        }
    }

    snapshot.lock_week(week);
    snapshot.apply_outcomes(week, outcomes);
    snapshot.save(file).await?;

    info!("Week {week} scored: {survived} survived, {eliminated} eliminated, {pending} pending");
    println!(
        "Week {week}: {survived} survived, {eliminated} eliminated, {pending} pending"
    );
    if pending > 0 {
        println!("Some games are not final yet; re-run --apply-results later.");
    }
    Ok(())
}
