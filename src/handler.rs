use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use chrono_tz::Tz;
use tower_http::cors::CorsLayer;
use tracing::{error, info, instrument};

use crate::config::Config;
use crate::date;
use crate::error::ScoreboardError;
use crate::model::game::SuccessEnvelope;
use crate::reconcile::reconcile;
use crate::stats::StatsClient;

/// Shared, read-only state handed to every request.
#[derive(Debug, Clone)]
pub struct AppState {
    pub stats: StatsClient,
    pub timezone: Option<Tz>,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        Self {
            stats: StatsClient::new(config),
            timezone: config.timezone,
        }
    }
}

/// Build the HTTP router with permissive CORS.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/scoreboard/today", get(today_scoreboard))
        .route("/api/scoreboard/{date}", get(scoreboard_for_date))
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(state))
}

async fn scoreboard_for_date(
    State(state): State<Arc<AppState>>,
    Path(date): Path<String>,
) -> Result<Json<SuccessEnvelope>, ScoreboardError> {
    respond(&state, date).await
}

async fn today_scoreboard(State(state): State<Arc<AppState>>) -> Result<Json<SuccessEnvelope>, ScoreboardError> {
    let today = date::today_iso(state.timezone);
    respond(&state, today).await
}

async fn respond(state: &AppState, date: String) -> Result<Json<SuccessEnvelope>, ScoreboardError> {
    match get_scoreboard(state, &date).await {
        Ok(envelope) => {
            info!(date = %envelope.date, games = envelope.games.len(), "Served scoreboard");
            Ok(Json(envelope))
        }
        Err(e) => {
            error!(date = %date, error = %e, "Scoreboard request failed");
            Err(e)
        }
    }
}

/// Normalize the date, fetch it from the stats provider and reconcile the two tables.
/// Any failure along the way aborts the whole request.
#[instrument(skip(state))]
pub async fn get_scoreboard(state: &AppState, date: &str) -> Result<SuccessEnvelope, ScoreboardError> {
    let game_date = date::to_upstream_date(date)?;

    // ureq blocks, so keep it off the async workers. The task must own its inputs.
    let stats = state.stats.clone();
    let games = tokio::task::spawn_blocking(move || {
        let scoreboard = stats.fetch_scoreboard(&game_date)?;
        reconcile(scoreboard.game_header()?, scoreboard.line_score()?)
    })
    .await??;

    Ok(SuccessEnvelope {
        success: true,
        date: date.to_string(),
        games,
    })
}
