use serde_json::Value;
use tracing::{debug, instrument};

use crate::error::ScoreboardError;
use crate::model::game::{GameSummary, TeamSummary};
use crate::model::scoreboard::Row;

/// Column positions within a GameHeader row.
pub mod header_col {
    pub const GAME_ID: usize = 2;
    pub const GAME_STATUS: usize = 4;
    pub const GAME_TIME: usize = 6;
}

/// Column positions within a LineScore row.
pub mod line_col {
    pub const GAME_ID: usize = 0;
    pub const TEAM_ID: usize = 1;
    pub const TEAM_ABBREVIATION: usize = 2;
    pub const TEAM_NAME: usize = 4;
    pub const PTS: usize = 22;
}

/// Shown in place of a tip-off time once a game has concluded.
pub const FINAL: &str = "Final";

/// Pair every game header with its line-score rows.
///
/// Line scores are scanned in order for each header: the first row sharing the game id
/// becomes the away team and the second the home team. Extra matches are ignored and
/// missing ones leave the role empty. Output follows header order.
#[instrument(level = "debug", skip_all, fields(headers = headers.len(), line_scores = line_scores.len()))]
pub fn reconcile(headers: &[Row], line_scores: &[Row]) -> Result<Vec<GameSummary>, ScoreboardError> {
    let mut games: Vec<GameSummary> = Vec::with_capacity(headers.len());

    for header in headers {
        let game_id = cell(header, "GameHeader", header_col::GAME_ID)?;
        let game_status = cell(header, "GameHeader", header_col::GAME_STATUS)?;

        let mut away_team: Option<TeamSummary> = None;
        let mut home_team: Option<TeamSummary> = None;

        for score in line_scores {
            if cell(score, "LineScore", line_col::GAME_ID)? != game_id {
                continue;
            }
            if away_team.is_none() {
                away_team = Some(team_summary(score)?);
            } else if home_team.is_none() {
                home_team = Some(team_summary(score)?);
            } else {
                debug!(game_id = %game_id, "Ignoring extra line score row");
            }
        }

        games.push(GameSummary {
            game_id: game_id.clone(),
            game_status: game_status.clone(),
            home_team,
            away_team,
            game_time: game_time(header),
        });
    }

    Ok(games)
}

fn team_summary(score: &Row) -> Result<TeamSummary, ScoreboardError> {
    Ok(TeamSummary {
        team_id: cell(score, "LineScore", line_col::TEAM_ID)?.clone(),
        team_abbreviation: cell(score, "LineScore", line_col::TEAM_ABBREVIATION)?.clone(),
        team_name: cell(score, "LineScore", line_col::TEAM_NAME)?.clone(),
        pts: cell(score, "LineScore", line_col::PTS)?.clone(),
    })
}

fn cell<'a>(row: &'a Row, table: &'static str, index: usize) -> Result<&'a Value, ScoreboardError> {
    row.get(index).ok_or(ScoreboardError::MissingColumn { table, index })
}

/// Tip-off text, or "Final" when the cell is blank.
fn game_time(header: &Row) -> Value {
    match header.get(header_col::GAME_TIME) {
        Some(value) if !is_blank(value) => value.clone(),
        _ => Value::String(FINAL.to_string()),
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::String(s) => s.is_empty(),
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}
