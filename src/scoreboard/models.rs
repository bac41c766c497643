//! Wire models for the scoreboard feed
//!
//! The feed reports one scoreboard per (season, week). Field names follow
//! the upstream camelCase JSON; conversion into domain [`Game`]s happens
//! here so nothing upstream of this module sees wire shapes.

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::{Game, GameStatus};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreboardSide {
    #[serde(rename = "teamId")]
    pub team_id: String,
    #[serde(rename = "teamName", default)]
    pub team_name: Option<String>,
    #[serde(default)]
    pub score: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreboardEvent {
    pub id: String,
    /// RFC 3339 kickoff time.
    #[serde(rename = "startDate")]
    pub start_date: String,
    /// "scheduled", "in-progress" or "final".
    pub status: String,
    #[serde(rename = "homeTeam")]
    pub home_team: ScoreboardSide,
    #[serde(rename = "awayTeam")]
    pub away_team: ScoreboardSide,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreboardResponse {
    pub season: u16,
    pub week: u8,
    pub events: Vec<ScoreboardEvent>,
}

impl ScoreboardEvent {
    /// Converts one wire event into a domain [`Game`] for the given week.
    /// The winner is derived from final scores; level final scores mean a
    /// tie and leave `winner` empty.
    pub fn into_game(self, week: u8) -> Result<Game, AppError> {
        let scheduled = chrono::DateTime::parse_from_rfc3339(&self.start_date)
            .map_err(|e| {
                AppError::datetime_parse_error(format!(
                    "Invalid kickoff time '{}' for event {}: {e}",
                    self.start_date, self.id
                ))
            })?
            .with_timezone(&chrono::Utc);

        let status = match self.status.as_str() {
            "scheduled" | "pre" => GameStatus::Scheduled,
            "in-progress" | "in" => GameStatus::InProgress,
            "final" | "post" => GameStatus::Final,
            other => {
                return Err(AppError::api_unexpected_structure(
                    format!("Unknown game status '{other}' for event {}", self.id),
                    "scoreboard event",
                ));
            }
        };

        let winner = if status == GameStatus::Final {
            match (self.home_team.score, self.away_team.score) {
                (Some(home), Some(away)) if home > away => Some(self.home_team.team_id.clone()),
                (Some(home), Some(away)) if away > home => Some(self.away_team.team_id.clone()),
                (Some(_), Some(_)) => None, // tie
                _ => {
                    return Err(AppError::api_no_data(
                        format!("Final event {} is missing scores", self.id),
                        "scoreboard event",
                    ));
                }
            }
        } else {
            None
        };

        Ok(Game {
            id: self.id,
            week,
            home_team: self.home_team.team_id,
            away_team: self.away_team.team_id,
            scheduled,
            status,
            home_score: self.home_team.score,
            away_score: self.away_team.score,
            winner,
        })
    }
}

impl ScoreboardResponse {
    /// Converts the whole scoreboard into domain games, keyed to the
    /// response's own week number.
    pub fn into_games(self) -> Result<Vec<Game>, AppError> {
        let week = self.week;
        self.events
            .into_iter()
            .map(|event| event.into_game(week))
            .collect()
    }

    /// True when any event has started but not finished. Live scoreboards
    /// get a much shorter cache TTL.
    pub fn has_live_games(&self) -> bool {
        self.events
            .iter()
            .any(|event| matches!(event.status.as_str(), "in-progress" | "in"))
    }

    /// True when every event is final.
    pub fn all_final(&self) -> bool {
        !self.events.is_empty()
            && self
                .events
                .iter()
                .all(|event| matches!(event.status.as_str(), "final" | "post"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn event(status: &str, home_score: Option<u32>, away_score: Option<u32>) -> ScoreboardEvent {
        ScoreboardEvent {
            id: "401547401".to_string(),
            start_date: "2025-09-07T17:00:00Z".to_string(),
            status: status.to_string(),
            home_team: ScoreboardSide {
                team_id: "DAL".to_string(),
                team_name: Some("Dallas Cowboys".to_string()),
                score: home_score,
            },
            away_team: ScoreboardSide {
                team_id: "NYG".to_string(),
                team_name: Some("New York Giants".to_string()),
                score: away_score,
            },
        }
    }

    #[test]
    fn test_final_event_derives_winner() {
        let game = event("final", Some(17), Some(24)).into_game(4).unwrap();
        assert_eq!(game.status, GameStatus::Final);
        assert_eq!(game.winner.as_deref(), Some("NYG"));
        assert_eq!(game.week, 4);
        assert_eq!(
            game.scheduled,
            Utc.with_ymd_and_hms(2025, 9, 7, 17, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_level_final_scores_mean_tie() {
        let game = event("final", Some(20), Some(20)).into_game(4).unwrap();
        assert!(game.is_tie());
    }

    #[test]
    fn test_scheduled_event_has_no_winner() {
        let game = event("scheduled", None, None).into_game(1).unwrap();
        assert_eq!(game.status, GameStatus::Scheduled);
        assert!(game.winner.is_none());
    }

    #[test]
    fn test_final_without_scores_is_an_error() {
        let error = event("final", Some(17), None).into_game(4).unwrap_err();
        assert!(matches!(error, AppError::ApiNoData { .. }));
    }

    #[test]
    fn test_unknown_status_is_an_error() {
        let error = event("halftime-show", None, None).into_game(4).unwrap_err();
        assert!(matches!(error, AppError::ApiUnexpectedStructure { .. }));
    }

    #[test]
    fn test_bad_kickoff_time_is_an_error() {
        let mut bad = event("scheduled", None, None);
        bad.start_date = "next sunday".to_string();
        assert!(matches!(
            bad.into_game(1).unwrap_err(),
            AppError::DateTimeParse(_)
        ));
    }

    #[test]
    fn test_live_detection() {
        let response = ScoreboardResponse {
            season: 2025,
            week: 4,
            events: vec![event("final", Some(17), Some(24)), event("in-progress", Some(7), Some(3))],
        };
        assert!(response.has_live_games());
        assert!(!response.all_final());

        let settled = ScoreboardResponse {
            season: 2025,
            week: 4,
            events: vec![event("final", Some(17), Some(24))],
        };
        assert!(!settled.has_live_games());
        assert!(settled.all_final());
    }

    #[test]
    fn test_wire_deserialization_uses_camel_case() {
        let json = r#"{
            "season": 2025,
            "week": 1,
            "events": [{
                "id": "e1",
                "startDate": "2025-09-04T00:20:00Z",
                "status": "scheduled",
                "homeTeam": { "teamId": "KC", "teamName": "Kansas City Chiefs" },
                "awayTeam": { "teamId": "BAL" }
            }]
        }"#;
        let response: ScoreboardResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.events[0].home_team.team_id, "KC");
        assert_eq!(response.events[0].away_team.score, None);
    }
}
