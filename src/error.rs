use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::model::game::FailureEnvelope;

/// Every way a scoreboard request can fail. All of them surface as a 500 with the
/// `Display` text as the error message.
#[derive(Debug, Error)]
pub enum ScoreboardError {
    #[error("Invalid date '{input}', expected YYYY-MM-DD")]
    InvalidDate {
        input: String,
        // Empty when the input is rejected on shape alone.
        #[source]
        source: Option<chrono::ParseError>,
    },

    #[error("Request to stats provider failed: {0}")]
    Request(#[from] ureq::Error),

    #[error("Stats provider returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Failed to read stats provider response body: {0}")]
    Body(String),

    #[error("Failed to parse stats provider response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Result set {index} missing from stats provider response")]
    MissingResultSet { index: usize },

    #[error("{table} row has no column {index}")]
    MissingColumn { table: &'static str, index: usize },

    #[error("Scoreboard task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl IntoResponse for ScoreboardError {
    fn into_response(self) -> Response {
        let body = FailureEnvelope {
            success: false,
            error: self.to_string(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
