use tracing::{error, info, info_span, instrument};

use crate::config::Config;
use crate::error::ScoreboardError;
use crate::model::scoreboard::Scoreboard;

const LEAGUE_ID: &str = "00";
const DAY_OFFSET: &str = "0";

// stats.nba.com drops requests that don't look like they come from its own web app.
const STATS_HEADERS: &[(&str, &str)] = &[
    (
        "User-Agent",
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:72.0) Gecko/20100101 Firefox/72.0",
    ),
    ("Accept", "application/json, text/plain, */*"),
    ("Accept-Language", "en-US,en;q=0.5"),
    ("Referer", "https://stats.nba.com/"),
    ("Origin", "https://www.nba.com"),
    ("Pragma", "no-cache"),
    ("Cache-Control", "no-cache"),
    ("x-nba-stats-origin", "stats"),
    ("x-nba-stats-token", "true"),
];

/// Blocking client for the NBA stats `scoreboardv2` endpoint.
#[derive(Debug, Clone)]
pub struct StatsClient {
    agent: ureq::Agent,
    base_url: String,
}

impl StatsClient {
    pub fn new(config: &Config) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(config.stats_timeout)
            .build()
            .into();
        Self {
            agent,
            base_url: config.stats_base_url.clone(),
        }
    }

    /// Fetch the scoreboard for `game_date` (already in `MM/DD/YYYY`).
    #[instrument(level = "info", skip(self))]
    pub fn fetch_scoreboard(&self, game_date: &str) -> Result<Scoreboard, ScoreboardError> {
        let url = format!("{}/scoreboardv2", self.base_url);

        let mut request = self
            .agent
            .get(&url)
            .query("GameDate", game_date)
            .query("LeagueID", LEAGUE_ID)
            .query("DayOffset", DAY_OFFSET);
        for (name, value) in STATS_HEADERS {
            request = request.header(*name, *value);
        }

        let response_result = {
            let _span = info_span!("stats_fetch", url = %url).entered();
            request.call()
        };

        let response = match response_result {
            Ok(response) => response,
            Err(ureq::Error::StatusCode(status)) => {
                error!(status, url = %url, "Stats provider returned error status");
                return Err(ScoreboardError::Status { status, url });
            }
            Err(e) => {
                error!(error = %e, url = %url, "Request to stats provider failed");
                return Err(e.into());
            }
        };

        let mut body_reader = response.into_body();
        let body = body_reader.read_to_string().map_err(|e| {
            error!(error = %e, "Failed to read stats provider response body");
            ScoreboardError::Body(e.to_string())
        })?;

        let scoreboard = Scoreboard::from_json(&body).inspect_err(|e| {
            error!(error = %e, bytes = body.len(), "Failed to deserialize scoreboard");
        })?;
        info!(result_sets = scoreboard.result_sets.len(), "Fetched scoreboard");
        Ok(scoreboard)
    }
}
