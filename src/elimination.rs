//! Weekly elimination scoring
//!
//! Consumes a week's games and each alive entry's picks for that week and
//! produces one [`EliminationOutcome`] per entry. The engine is a pure
//! function of its inputs: it never mutates entries, never blocks on I/O,
//! and re-running it over the same finalized inputs yields the same
//! outcome list.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::calendar::required_picks;
use crate::models::{
    EliminationOutcome, EliminationReason, Entry, Game, OutcomeStatus, WeekPick,
};

/// What a tied game does to an entry that picked one of its teams.
///
/// No rule text settles this in most pools, so it is an explicit contest
/// setting. The default counts a tie as survival.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TiePolicy {
    #[default]
    Survive,
    Eliminate,
}

/// Scores a finished (or partially finished) week for a set of entries.
#[derive(Debug, Clone, Copy, Default)]
pub struct EliminationEngine {
    tie_policy: TiePolicy,
}

impl EliminationEngine {
    pub fn new(tie_policy: TiePolicy) -> Self {
        EliminationEngine { tie_policy }
    }

    pub fn tie_policy(&self) -> TiePolicy {
        self.tie_policy
    }

    /// Scores one week. `games` is the week's game set (final and
    /// not-yet-final alike); `entries_with_picks` pairs each entry with
    /// its picks for this week.
    ///
    /// Per entry:
    /// - entries whose recorded elimination is at or before this week are
    ///   skipped entirely, so a re-run after persistence cannot
    ///   double-eliminate; an entry eliminated in a later week still gets
    ///   scored here, covering a pending week that finalizes late;
    /// - fewer picks than the week requires eliminates with
    ///   [`EliminationReason::NoPickSubmitted`];
    /// - a picked team that lost its final game eliminates with
    ///   [`EliminationReason::IncorrectPick`] (the first losing team in
    ///   pick order is named);
    /// - a tie follows the contest's [`TiePolicy`];
    /// - any pick whose game is missing or not yet final leaves the entry
    ///   [`OutcomeStatus::Pending`] -- invoke again once results land;
    /// - an entry survives only if every picked team won.
    pub fn apply_week_results(
        &self,
        week: u8,
        games: &[Game],
        entries_with_picks: &[(Entry, Vec<WeekPick>)],
    ) -> Vec<EliminationOutcome> {
        let mut outcomes = Vec::new();

        for (entry, picks) in entries_with_picks {
            if !entry.alive && entry.eliminated_week.is_none_or(|w| w <= week) {
                continue;
            }

            let week_picks: Vec<&WeekPick> = picks
                .iter()
                .filter(|pick| pick.entry_id == entry.id && pick.week == week)
                .collect();

            let status = if week_picks.len() < required_picks(week) {
                OutcomeStatus::Eliminated {
                    reason: EliminationReason::NoPickSubmitted,
                }
            } else {
                self.score_picks(week, games, entry, &week_picks)
            };

            outcomes.push(EliminationOutcome {
                entry_id: entry.id.clone(),
                week,
                status,
            });
        }

        outcomes
    }

    fn score_picks(
        &self,
        week: u8,
        games: &[Game],
        entry: &Entry,
        week_picks: &[&WeekPick],
    ) -> OutcomeStatus {
        let mut pending = false;

        for pick in week_picks {
            let game = games.iter().find(|g| g.week == week && g.involves(&pick.team));
            let Some(game) = game else {
                // A pick the week's game set cannot score. We cannot prove
                // a loss from absent data, so the entry stays pending.
                warn!(
                    "No week {} game found for pick {} by entry {}",
                    week, pick.team, entry.id
                );
                pending = true;
                continue;
            };

            if !game.is_final() {
                pending = true;
                continue;
            }

            if game.is_tie() {
                match self.tie_policy {
                    TiePolicy::Survive => continue,
                    TiePolicy::Eliminate => {
                        return OutcomeStatus::Eliminated {
                            reason: EliminationReason::TiedGame {
                                team: pick.team.clone(),
                            },
                        };
                    }
                }
            }

            match game.winner.as_deref() {
                Some(winner) if winner == pick.team => {}
                _ => {
                    return OutcomeStatus::Eliminated {
                        reason: EliminationReason::IncorrectPick {
                            team: pick.team.clone(),
                        },
                    };
                }
            }
        }

        if pending {
            OutcomeStatus::Pending
        } else {
            OutcomeStatus::Survived
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GameStatus;
    use crate::testing_utils::{final_game, sample_entry, sample_pick, scheduled_game, utc_time};

    fn entry_with_picks(id: &str, week: u8, teams: &[&str]) -> (Entry, Vec<WeekPick>) {
        let entry = sample_entry(id);
        let picks = teams.iter().map(|t| sample_pick(id, week, t)).collect();
        (entry, picks)
    }

    #[test]
    fn test_losing_pick_eliminates() {
        let engine = EliminationEngine::default();
        let games = vec![final_game("g1", 4, "DAL", "NYG", Some("NYG"))];
        let entries = vec![entry_with_picks("e1", 4, &["DAL"])];

        let outcomes = engine.apply_week_results(4, &games, &entries);
        assert_eq!(outcomes.len(), 1);
        assert_eq!(
            outcomes[0].status,
            OutcomeStatus::Eliminated {
                reason: EliminationReason::IncorrectPick {
                    team: "DAL".to_string()
                }
            }
        );
    }

    #[test]
    fn test_winning_pick_survives() {
        let engine = EliminationEngine::default();
        let games = vec![final_game("g1", 4, "DAL", "NYG", Some("NYG"))];
        let entries = vec![entry_with_picks("e1", 4, &["NYG"])];

        let outcomes = engine.apply_week_results(4, &games, &entries);
        assert_eq!(outcomes[0].status, OutcomeStatus::Survived);
    }

    #[test]
    fn test_missing_picks_eliminate_with_no_pick_submitted() {
        let engine = EliminationEngine::default();
        let games = vec![final_game("g1", 4, "DAL", "NYG", Some("NYG"))];
        let entries = vec![entry_with_picks("e1", 4, &[])];

        let outcomes = engine.apply_week_results(4, &games, &entries);
        assert_eq!(
            outcomes[0].status,
            OutcomeStatus::Eliminated {
                reason: EliminationReason::NoPickSubmitted
            }
        );
    }

    #[test]
    fn test_one_pick_missing_in_two_pick_week_eliminates() {
        let engine = EliminationEngine::default();
        let games = vec![final_game("g1", 12, "KC", "LV", Some("KC"))];
        // Week 12 requires two picks; only one was submitted
        let entries = vec![entry_with_picks("e1", 12, &["KC"])];

        let outcomes = engine.apply_week_results(12, &games, &entries);
        assert_eq!(
            outcomes[0].status,
            OutcomeStatus::Eliminated {
                reason: EliminationReason::NoPickSubmitted
            }
        );
    }

    #[test]
    fn test_two_pick_week_needs_both_wins() {
        let engine = EliminationEngine::default();
        let games = vec![
            final_game("g1", 12, "KC", "LV", Some("KC")),
            final_game("g2", 12, "DET", "CHI", Some("CHI")),
        ];
        let entries = vec![entry_with_picks("e1", 12, &["KC", "DET"])];

        let outcomes = engine.apply_week_results(12, &games, &entries);
        assert_eq!(
            outcomes[0].status,
            OutcomeStatus::Eliminated {
                reason: EliminationReason::IncorrectPick {
                    team: "DET".to_string()
                }
            }
        );
    }

    #[test]
    fn test_non_final_game_leaves_entry_pending() {
        let engine = EliminationEngine::default();
        let mut game = scheduled_game("g1", 4, "DAL", "NYG", utc_time(2025, 9, 28, 17, 0));
        game.status = GameStatus::InProgress;
        let entries = vec![entry_with_picks("e1", 4, &["DAL"])];

        let outcomes = engine.apply_week_results(4, &[game], &entries);
        assert_eq!(outcomes[0].status, OutcomeStatus::Pending);
    }

    #[test]
    fn test_loss_outranks_pending_in_two_pick_week() {
        let engine = EliminationEngine::default();
        let games = vec![
            final_game("g1", 12, "KC", "LV", Some("LV")),
            scheduled_game("g2", 12, "DET", "CHI", utc_time(2025, 11, 30, 18, 0)),
        ];
        // One pick already lost; the other game not final. The loss decides.
        let entries = vec![entry_with_picks("e1", 12, &["KC", "DET"])];

        let outcomes = engine.apply_week_results(12, &games, &entries);
        assert_eq!(
            outcomes[0].status,
            OutcomeStatus::Eliminated {
                reason: EliminationReason::IncorrectPick {
                    team: "KC".to_string()
                }
            }
        );
    }

    #[test]
    fn test_tie_survives_by_default() {
        let engine = EliminationEngine::default();
        let games = vec![final_game("g1", 4, "DAL", "NYG", None)];
        let entries = vec![entry_with_picks("e1", 4, &["DAL"])];

        let outcomes = engine.apply_week_results(4, &games, &entries);
        assert_eq!(outcomes[0].status, OutcomeStatus::Survived);
    }

    #[test]
    fn test_tie_eliminates_under_eliminate_policy() {
        let engine = EliminationEngine::new(TiePolicy::Eliminate);
        let games = vec![final_game("g1", 4, "DAL", "NYG", None)];
        let entries = vec![entry_with_picks("e1", 4, &["DAL"])];

        let outcomes = engine.apply_week_results(4, &games, &entries);
        assert_eq!(
            outcomes[0].status,
            OutcomeStatus::Eliminated {
                reason: EliminationReason::TiedGame {
                    team: "DAL".to_string()
                }
            }
        );
    }

    #[test]
    fn test_already_eliminated_entries_are_skipped() {
        let engine = EliminationEngine::default();
        let games = vec![final_game("g1", 4, "DAL", "NYG", Some("NYG"))];
        let (mut entry, picks) = entry_with_picks("e1", 4, &["DAL"]);
        entry.alive = false;
        entry.eliminated_week = Some(2);

        let outcomes = engine.apply_week_results(4, &games, &[(entry, picks)]);
        assert!(outcomes.is_empty());
    }

    #[test]
    fn test_later_eliminated_entry_is_scored_for_an_earlier_week() {
        let engine = EliminationEngine::default();
        let games = vec![final_game("g1", 4, "DAL", "NYG", Some("NYG"))];
        // Eliminated in week 5 while week 4 was still pending; the
        // late-finalizing week 4 must still be scored
        let (mut entry, picks) = entry_with_picks("e1", 4, &["DAL"]);
        entry.alive = false;
        entry.eliminated_week = Some(5);

        let outcomes = engine.apply_week_results(4, &games, &[(entry, picks)]);
        assert_eq!(outcomes.len(), 1);
        assert_eq!(
            outcomes[0].status,
            OutcomeStatus::Eliminated {
                reason: EliminationReason::IncorrectPick {
                    team: "DAL".to_string()
                }
            }
        );
    }

    #[test]
    fn test_rerun_is_idempotent() {
        let engine = EliminationEngine::default();
        let games = vec![
            final_game("g1", 4, "DAL", "NYG", Some("NYG")),
            final_game("g2", 4, "KC", "LV", Some("KC")),
        ];
        let entries = vec![
            entry_with_picks("e1", 4, &["DAL"]),
            entry_with_picks("e2", 4, &["KC"]),
        ];

        let first = engine.apply_week_results(4, &games, &entries);
        let second = engine.apply_week_results(4, &games, &entries);
        assert_eq!(first, second);
    }

    #[test]
    fn test_pick_without_a_game_stays_pending() {
        let engine = EliminationEngine::default();
        let games = vec![final_game("g1", 4, "DAL", "NYG", Some("NYG"))];
        // MIA has no game in the supplied set; engine cannot score it
        let entries = vec![entry_with_picks("e1", 4, &["MIA"])];

        let outcomes = engine.apply_week_results(4, &games, &entries);
        assert_eq!(outcomes[0].status, OutcomeStatus::Pending);
    }
}
