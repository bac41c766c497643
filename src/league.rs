//! Static league reference data
//!
//! The 32 NFL teams, immutable after season setup. Team ids are the
//! standard aliases ("KC", "DAL", ...) used by picks, games and the
//! scoreboard feed alike.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::constants::LEAGUE_TEAM_COUNT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Conference {
    Afc,
    Nfc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Division {
    East,
    North,
    South,
    West,
}

/// Static reference data for one team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Team {
    pub id: &'static str,
    pub name: &'static str,
    pub conference: Conference,
    pub division: Division,
}

use Conference::{Afc, Nfc};
use Division::{East, North, South, West};

/// All 32 teams, grouped by conference and division.
pub const LEAGUE_TEAMS: [Team; LEAGUE_TEAM_COUNT] = [
    Team { id: "BUF", name: "Buffalo Bills", conference: Afc, division: East },
    Team { id: "MIA", name: "Miami Dolphins", conference: Afc, division: East },
    Team { id: "NE", name: "New England Patriots", conference: Afc, division: East },
    Team { id: "NYJ", name: "New York Jets", conference: Afc, division: East },
    Team { id: "BAL", name: "Baltimore Ravens", conference: Afc, division: North },
    Team { id: "CIN", name: "Cincinnati Bengals", conference: Afc, division: North },
    Team { id: "CLE", name: "Cleveland Browns", conference: Afc, division: North },
    Team { id: "PIT", name: "Pittsburgh Steelers", conference: Afc, division: North },
    Team { id: "HOU", name: "Houston Texans", conference: Afc, division: South },
    Team { id: "IND", name: "Indianapolis Colts", conference: Afc, division: South },
    Team { id: "JAX", name: "Jacksonville Jaguars", conference: Afc, division: South },
    Team { id: "TEN", name: "Tennessee Titans", conference: Afc, division: South },
    Team { id: "DEN", name: "Denver Broncos", conference: Afc, division: West },
    Team { id: "KC", name: "Kansas City Chiefs", conference: Afc, division: West },
    Team { id: "LV", name: "Las Vegas Raiders", conference: Afc, division: West },
    Team { id: "LAC", name: "Los Angeles Chargers", conference: Afc, division: West },
    Team { id: "DAL", name: "Dallas Cowboys", conference: Nfc, division: East },
    Team { id: "NYG", name: "New York Giants", conference: Nfc, division: East },
    Team { id: "PHI", name: "Philadelphia Eagles", conference: Nfc, division: East },
    Team { id: "WAS", name: "Washington Commanders", conference: Nfc, division: East },
    Team { id: "CHI", name: "Chicago Bears", conference: Nfc, division: North },
    Team { id: "DET", name: "Detroit Lions", conference: Nfc, division: North },
    Team { id: "GB", name: "Green Bay Packers", conference: Nfc, division: North },
    Team { id: "MIN", name: "Minnesota Vikings", conference: Nfc, division: North },
    Team { id: "ATL", name: "Atlanta Falcons", conference: Nfc, division: South },
    Team { id: "CAR", name: "Carolina Panthers", conference: Nfc, division: South },
    Team { id: "NO", name: "New Orleans Saints", conference: Nfc, division: South },
    Team { id: "TB", name: "Tampa Bay Buccaneers", conference: Nfc, division: South },
    Team { id: "ARI", name: "Arizona Cardinals", conference: Nfc, division: West },
    Team { id: "LAR", name: "Los Angeles Rams", conference: Nfc, division: West },
    Team { id: "SEA", name: "Seattle Seahawks", conference: Nfc, division: West },
    Team { id: "SF", name: "San Francisco 49ers", conference: Nfc, division: West },
];

/// Looks up a team by its id. Case-insensitive so CLI input like "kc"
/// resolves.
pub fn find_team(id: &str) -> Option<&'static Team> {
    LEAGUE_TEAMS
        .iter()
        .find(|team| team.id.eq_ignore_ascii_case(id))
}

/// The full set of team ids, in id order.
pub fn team_ids() -> BTreeSet<String> {
    LEAGUE_TEAMS
        .iter()
        .map(|team| team.id.to_string())
        .collect()
}
