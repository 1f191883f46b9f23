use std::env;
use std::time::Duration;

use chrono_tz::Tz;

pub const DEFAULT_BIND: &str = "0.0.0.0:5000";
pub const DEFAULT_STATS_BASE_URL: &str = "https://stats.nba.com/stats";

/// Runtime settings, read once from the environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds when not running under Lambda.
    pub bind: String,
    /// Base URL of the stats provider, without a trailing slash.
    pub stats_base_url: String,
    /// Upstream request timeout. `None` waits indefinitely.
    pub stats_timeout: Option<Duration>,
    /// Zone used to resolve "today". `None` uses the host's local zone.
    pub timezone: Option<Tz>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            stats_base_url: DEFAULT_STATS_BASE_URL.to_string(),
            stats_timeout: None,
            timezone: None,
        }
    }
}

impl Config {
    /// Build the config from `SCOREBOARD_BIND`, `NBA_STATS_BASE_URL`,
    /// `NBA_STATS_TIMEOUT_SECS` and `SCOREBOARD_TZ`. Unset or blank variables fall back
    /// to defaults; unparseable ones are an error.
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Config::from_env`] but reading from an arbitrary lookup (for tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut config = Config::default();

        if let Some(bind) = get("SCOREBOARD_BIND") {
            config.bind = bind;
        }
        if let Some(url) = get("NBA_STATS_BASE_URL") {
            config.stats_base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(secs) = get("NBA_STATS_TIMEOUT_SECS") {
            let secs: u64 = secs
                .parse()
                .map_err(|e| format!("NBA_STATS_TIMEOUT_SECS must be a whole number of seconds: {}", e))?;
            config.stats_timeout = Some(Duration::from_secs(secs));
        }
        if let Some(tz) = get("SCOREBOARD_TZ") {
            let tz: Tz = tz
                .parse()
                .map_err(|e| format!("SCOREBOARD_TZ is not a known IANA timezone: {}", e))?;
            config.timezone = Some(tz);
        }

        Ok(config)
    }
}
