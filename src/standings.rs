//! Standings projection
//!
//! Folds an entry's accumulated picks and weekly outcomes into a current
//! [`EntryStanding`]. Pure over the supplied history; the caller owns
//! fetching and storing it.

use std::collections::{BTreeMap, BTreeSet};

use crate::league;
use crate::models::{
    EliminationOutcome, EliminationReason, Entry, EntryStanding, OutcomeStatus, WeekPick,
};

/// Derived, never persisted: the whole contest's standings keyed by entry
/// id, recomputed whenever results change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonState {
    pub standings: BTreeMap<String, EntryStanding>,
}

impl SeasonState {
    /// Entry ids still alive, in id order.
    pub fn alive_entries(&self) -> Vec<&str> {
        self.standings
            .iter()
            .filter(|(_, standing)| standing.alive)
            .map(|(id, _)| id.as_str())
            .collect()
    }
}

/// Materializes alive/eliminated status and available-team sets from pick
/// and outcome history.
#[derive(Debug, Clone)]
pub struct StandingsProjector {
    league_teams: BTreeSet<String>,
}

impl Default for StandingsProjector {
    fn default() -> Self {
        StandingsProjector::new()
    }
}

impl StandingsProjector {
    /// Projector over the standard 32-team league.
    pub fn new() -> Self {
        StandingsProjector {
            league_teams: league::team_ids(),
        }
    }

    /// Projector over a custom team set (smaller test leagues).
    pub fn with_league(league_teams: BTreeSet<String>) -> Self {
        StandingsProjector { league_teams }
    }

    /// Folds one entry's history, ordered by week ascending. The first
    /// elimination wins: once `alive` turns false no later outcome can
    /// revert it. Pending weeks neither eliminate nor count as survived.
    pub fn project(
        &self,
        entry: &Entry,
        all_picks: &[WeekPick],
        all_outcomes: &[EliminationOutcome],
    ) -> EntryStanding {
        let used_teams: BTreeSet<String> = all_picks
            .iter()
            .filter(|pick| pick.entry_id == entry.id)
            .map(|pick| pick.team.clone())
            .collect();

        let mut outcomes: Vec<&EliminationOutcome> = all_outcomes
            .iter()
            .filter(|outcome| outcome.entry_id == entry.id)
            .collect();
        outcomes.sort_by_key(|outcome| outcome.week);

        let mut alive = true;
        let mut eliminated_at_week = None;
        let mut elimination_reason: Option<EliminationReason> = None;
        let mut weeks_survived: u8 = 0;

        for outcome in outcomes {
            if !alive {
                break;
            }
            match &outcome.status {
                OutcomeStatus::Survived => weeks_survived += 1,
                OutcomeStatus::Pending => {}
                OutcomeStatus::Eliminated { reason } => {
                    alive = false;
                    eliminated_at_week = Some(outcome.week);
                    elimination_reason = Some(reason.clone());
                }
            }
        }

        // An entry flagged dead by the store stays dead even when the
        // outcome history is missing (e.g. trimmed snapshot).
        if !entry.alive && alive {
            alive = false;
            eliminated_at_week = entry.eliminated_week;
        }

        let available_teams: BTreeSet<String> =
            self.league_teams.difference(&used_teams).cloned().collect();

        EntryStanding {
            alive,
            eliminated_at_week,
            elimination_reason,
            weeks_survived,
            used_teams,
            available_teams,
        }
    }

    /// Projects every entry into a [`SeasonState`].
    pub fn season_state(
        &self,
        entries: &[Entry],
        all_picks: &[WeekPick],
        all_outcomes: &[EliminationOutcome],
    ) -> SeasonState {
        let standings = entries
            .iter()
            .map(|entry| (entry.id.clone(), self.project(entry, all_picks, all_outcomes)))
            .collect();
        SeasonState { standings }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::{sample_entry, sample_pick};

    fn outcome(entry_id: &str, week: u8, status: OutcomeStatus) -> EliminationOutcome {
        EliminationOutcome {
            entry_id: entry_id.to_string(),
            week,
            status,
        }
    }

    fn survived(entry_id: &str, week: u8) -> EliminationOutcome {
        outcome(entry_id, week, OutcomeStatus::Survived)
    }

    fn eliminated(entry_id: &str, week: u8, team: &str) -> EliminationOutcome {
        outcome(
            entry_id,
            week,
            OutcomeStatus::Eliminated {
                reason: EliminationReason::IncorrectPick {
                    team: team.to_string(),
                },
            },
        )
    }

    #[test]
    fn test_projects_season_through_elimination() {
        // KC wk1 wins, BUF wk2 wins, DAL wk4 loses
        let projector = StandingsProjector::new();
        let entry = sample_entry("e1");
        let picks = vec![
            sample_pick("e1", 1, "KC"),
            sample_pick("e1", 2, "BUF"),
            sample_pick("e1", 4, "DAL"),
        ];
        let outcomes = vec![
            survived("e1", 1),
            survived("e1", 2),
            eliminated("e1", 4, "DAL"),
        ];

        let standing = projector.project(&entry, &picks, &outcomes);
        assert!(!standing.alive);
        assert_eq!(standing.eliminated_at_week, Some(4));
        assert_eq!(
            standing.elimination_reason,
            Some(EliminationReason::IncorrectPick {
                team: "DAL".to_string()
            })
        );
        assert_eq!(standing.weeks_survived, 2);
        let used: Vec<&str> = standing.used_teams.iter().map(String::as_str).collect();
        assert_eq!(used, vec!["BUF", "DAL", "KC"]);
        assert_eq!(standing.available_teams.len(), 32 - 3);
        assert!(!standing.available_teams.contains("KC"));
    }

    #[test]
    fn test_elimination_is_monotonic() {
        let projector = StandingsProjector::new();
        let entry = sample_entry("e1");
        // A stray later "survived" record must not resurrect the entry
        let outcomes = vec![
            eliminated("e1", 3, "NE"),
            survived("e1", 4),
            survived("e1", 5),
        ];

        let standing = projector.project(&entry, &[], &outcomes);
        assert!(!standing.alive);
        assert_eq!(standing.eliminated_at_week, Some(3));
        assert_eq!(standing.weeks_survived, 0);
    }

    #[test]
    fn test_used_teams_grow_monotonically() {
        let projector = StandingsProjector::new();
        let entry = sample_entry("e1");
        let mut picks = vec![sample_pick("e1", 1, "KC")];

        let before = projector.project(&entry, &picks, &[]);
        picks.push(sample_pick("e1", 2, "BUF"));
        let after = projector.project(&entry, &picks, &[]);

        assert!(before.used_teams.is_subset(&after.used_teams));
        assert!(after.available_teams.is_subset(&before.available_teams));
    }

    #[test]
    fn test_pending_weeks_do_not_advance_survival() {
        let projector = StandingsProjector::new();
        let entry = sample_entry("e1");
        let outcomes = vec![
            survived("e1", 1),
            outcome("e1", 2, OutcomeStatus::Pending),
        ];

        let standing = projector.project(&entry, &[], &outcomes);
        assert!(standing.alive);
        assert_eq!(standing.weeks_survived, 1);
    }

    #[test]
    fn test_dead_entry_flag_wins_without_outcomes() {
        let projector = StandingsProjector::new();
        let mut entry = sample_entry("e1");
        entry.alive = false;
        entry.eliminated_week = Some(7);

        let standing = projector.project(&entry, &[], &[]);
        assert!(!standing.alive);
        assert_eq!(standing.eliminated_at_week, Some(7));
    }

    #[test]
    fn test_out_of_order_outcomes_are_sorted_by_week() {
        let projector = StandingsProjector::new();
        let entry = sample_entry("e1");
        let outcomes = vec![
            eliminated("e1", 4, "DAL"),
            survived("e1", 1),
            survived("e1", 2),
        ];

        let standing = projector.project(&entry, &[], &outcomes);
        assert_eq!(standing.weeks_survived, 2);
        assert_eq!(standing.eliminated_at_week, Some(4));
    }

    #[test]
    fn test_season_state_alive_entries() {
        let projector = StandingsProjector::new();
        let entries = vec![sample_entry("e1"), sample_entry("e2")];
        let outcomes = vec![survived("e1", 1), eliminated("e2", 1, "NE")];

        let state = projector.season_state(&entries, &[], &outcomes);
        assert_eq!(state.alive_entries(), vec!["e1"]);
        assert_eq!(state.standings.len(), 2);
    }

    #[test]
    fn test_custom_league_bounds_available_teams() {
        let league: BTreeSet<String> =
            ["A".to_string(), "B".to_string(), "C".to_string()].into();
        let projector = StandingsProjector::with_league(league);
        let entry = sample_entry("e1");
        let picks = vec![sample_pick("e1", 1, "A")];

        let standing = projector.project(&entry, &picks, &[]);
        let available: Vec<&str> = standing.available_teams.iter().map(String::as_str).collect();
        assert_eq!(available, vec!["B", "C"]);
    }
}
