use std::env;

use lambda_runtime::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

use nba_scoreboard_relay::config::Config;
use nba_scoreboard_relay::handler::{AppState, router};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Initialize structured logging with tracing
    let _ = tracing_subscriber::fmt()
        .json()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_current_span(false)
        .with_target(false)
        .with_ansi(false)
        .try_init();

    let config = Config::from_env()?;
    let app = router(AppState::from_config(&config));

    // Under Lambda the runtime API drives requests; elsewhere serve plain HTTP.
    if env::var_os("AWS_LAMBDA_RUNTIME_API").is_some() {
        info!(stats_base_url = %config.stats_base_url, "Starting under Lambda runtime");
        return lambda_http::run(app).await;
    }

    let listener = tokio::net::TcpListener::bind(&config.bind).await?;
    info!(bind = %config.bind, stats_base_url = %config.stats_base_url, "Scoreboard relay listening");
    axum::serve(listener, app).await?;
    Ok(())
}
