use chrono::{Local, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::error::ScoreboardError;

/// Date format accepted on the HTTP surface.
pub const ISO_FORMAT: &str = "%Y-%m-%d";
/// Date format the stats provider expects for `GameDate`.
pub const UPSTREAM_FORMAT: &str = "%m/%d/%Y";

/// Parse a bare `YYYY-MM-DD` calendar date. No timezone is involved.
///
/// The year, month and day must be exactly four, two and two digits; chrono alone
/// would also take signed years, unpadded fields and leading spaces.
pub fn parse_iso(input: &str) -> Result<NaiveDate, ScoreboardError> {
    if !has_iso_shape(input) {
        return Err(ScoreboardError::InvalidDate {
            input: input.to_string(),
            source: None,
        });
    }
    NaiveDate::parse_from_str(input, ISO_FORMAT).map_err(|source| ScoreboardError::InvalidDate {
        input: input.to_string(),
        source: Some(source),
    })
}

fn has_iso_shape(input: &str) -> bool {
    let bytes = input.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Reformat an ISO date as `MM/DD/YYYY` for the stats provider.
pub fn to_upstream_date(input: &str) -> Result<String, ScoreboardError> {
    let date = parse_iso(input)?;
    Ok(date.format(UPSTREAM_FORMAT).to_string())
}

/// Today's calendar date as `YYYY-MM-DD`, read from the clock on every call.
/// Uses `tz` when configured, otherwise the host's local zone.
pub fn today_iso(tz: Option<Tz>) -> String {
    let today = match tz {
        Some(tz) => Utc::now().with_timezone(&tz).date_naive(),
        None => Local::now().date_naive(),
    };
    today.format(ISO_FORMAT).to_string()
}
