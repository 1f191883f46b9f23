use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ScoreboardError;

/// Position of the GameHeader table within `resultSets`.
pub const GAME_HEADER_INDEX: usize = 0;
/// Position of the LineScore table within `resultSets`.
pub const LINE_SCORE_INDEX: usize = 1;

/// One untyped row of a result set. Cells are addressed by column position.
pub type Row = Vec<Value>;

/// Response envelope of the stats provider's `scoreboardv2` endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct Scoreboard {
    #[serde(rename = "resultSets")]
    pub result_sets: Vec<ResultSet>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ResultSet {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub headers: Vec<String>,
    #[serde(rename = "rowSet", default)]
    pub row_set: Vec<Row>,
}

impl Scoreboard {
    /// Parse a raw `scoreboardv2` response body (no network).
    pub fn from_json(body: &str) -> Result<Self, ScoreboardError> {
        Ok(serde_json::from_str(body)?)
    }

    pub fn game_header(&self) -> Result<&[Row], ScoreboardError> {
        self.rows_at(GAME_HEADER_INDEX)
    }

    pub fn line_score(&self) -> Result<&[Row], ScoreboardError> {
        self.rows_at(LINE_SCORE_INDEX)
    }

    fn rows_at(&self, index: usize) -> Result<&[Row], ScoreboardError> {
        self.result_sets
            .get(index)
            .map(|set| set.row_set.as_slice())
            .ok_or(ScoreboardError::MissingResultSet { index })
    }
}
