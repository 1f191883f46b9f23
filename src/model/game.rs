use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One team's side of a game, lifted from a LineScore row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TeamSummary {
    pub team_id: Value,
    pub team_abbreviation: Value,
    pub team_name: Value,
    pub pts: Value,
}

/// A single game as returned to callers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSummary {
    pub game_id: Value,
    pub game_status: Value,
    pub home_team: Option<TeamSummary>,
    pub away_team: Option<TeamSummary>,
    pub game_time: Value,
}

/// 200 body.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuccessEnvelope {
    pub success: bool,
    pub date: String,
    pub games: Vec<GameSummary>,
}

/// 500 body.
#[derive(Debug, Serialize, Deserialize)]
pub struct FailureEnvelope {
    pub success: bool,
    pub error: String,
}
