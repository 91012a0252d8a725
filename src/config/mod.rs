/// Service configuration
use std::env;
use std::str::FromStr;
use std::time::Duration;

use chrono::FixedOffset;

use crate::window::DayBoundary;

/// Upstream endpoint the per-date lookups hit unless overridden.
pub const DEFAULT_API_URL: &str = "https://api.nasa.gov/planetary/apod";

const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
const DEFAULT_WINDOW_DAYS: u32 = 5;

/// Everything a feed service needs injected at construction.
///
/// The credential lives here and nowhere else; an empty `api_key` means the
/// `api_key` query parameter is omitted entirely.
#[derive(Clone, Debug)]
pub struct FeedConfig {
    pub api_key: String,
    pub api_url: String,
    /// Per-lookup request timeout.
    pub timeout: Duration,
    /// Clock that decides which date "today" is.
    pub day_boundary: DayBoundary,
    /// Additional days before today in a default window.
    pub window_days: u32,
}

impl FeedConfig {
    /// Configuration with coded defaults and the given credential.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
            day_boundary: DayBoundary::default(),
            window_days: DEFAULT_WINDOW_DAYS,
        }
    }

    /// Load configuration from environment variables (and `.env` if present).
    ///
    /// `NASA_API_KEY` defaults to empty; `APOD_API_URL`,
    /// `APOD_TIMEOUT_SECONDS` and `APOD_WINDOW_DAYS` fall back to the coded
    /// defaults. `APOD_DAY_BOUNDARY` accepts `local`, `utc` or a `±HH:MM`
    /// offset; anything else is an error rather than a silent fallback,
    /// since a misread boundary selects the wrong date near midnight.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let api_key = env::var("NASA_API_KEY").unwrap_or_default();
        let api_url = env::var("APOD_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let timeout =
            Duration::from_secs(env_parsed("APOD_TIMEOUT_SECONDS", DEFAULT_TIMEOUT_SECONDS));
        let day_boundary = match env::var("APOD_DAY_BOUNDARY") {
            Ok(raw) => parse_day_boundary(&raw)?,
            Err(_) => DayBoundary::default(),
        };
        let window_days = env_parsed("APOD_WINDOW_DAYS", DEFAULT_WINDOW_DAYS);

        Ok(Self {
            api_key,
            api_url,
            timeout,
            day_boundary,
            window_days,
        })
    }
}

fn env_parsed<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn parse_day_boundary(raw: &str) -> anyhow::Result<DayBoundary> {
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case("local") {
        return Ok(DayBoundary::Local);
    }
    if trimmed.eq_ignore_ascii_case("utc") {
        return Ok(DayBoundary::Utc);
    }
    parse_offset(trimmed).map(DayBoundary::Offset).ok_or_else(|| {
        anyhow::anyhow!(
            "APOD_DAY_BOUNDARY must be \"local\", \"utc\" or a ±HH:MM offset, got {:?}",
            raw
        )
    })
}

/// `±HH:MM` (e.g. `-05:00`, `+09:30`) to a fixed offset east of UTC.
fn parse_offset(s: &str) -> Option<FixedOffset> {
    let (sign, rest) = match s.as_bytes().first()? {
        b'+' => (1i32, &s[1..]),
        b'-' => (-1i32, &s[1..]),
        _ => return None,
    };
    let (hours, minutes) = rest.split_once(':')?;
    let hours = i32::from(hours.parse::<u8>().ok()?);
    let minutes = i32::from(minutes.parse::<u8>().ok()?);
    if hours > 23 || minutes > 59 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_applies_coded_defaults() {
        let config = FeedConfig::new("demo-key");
        assert_eq!(config.api_key, "demo-key");
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.day_boundary, DayBoundary::Local);
        assert_eq!(config.window_days, 5);
    }

    #[test]
    fn test_day_boundary_keywords_are_case_insensitive() {
        assert_eq!(parse_day_boundary("local").unwrap(), DayBoundary::Local);
        assert_eq!(parse_day_boundary("LOCAL").unwrap(), DayBoundary::Local);
        assert_eq!(parse_day_boundary(" Utc ").unwrap(), DayBoundary::Utc);
    }

    #[test]
    fn test_day_boundary_accepts_fixed_offsets() {
        assert_eq!(
            parse_day_boundary("+05:30").unwrap(),
            DayBoundary::Offset(FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap())
        );
        assert_eq!(
            parse_day_boundary("-08:00").unwrap(),
            DayBoundary::Offset(FixedOffset::east_opt(-8 * 3600).unwrap())
        );
    }

    #[test]
    fn test_day_boundary_rejects_garbage() {
        assert!(parse_day_boundary("tomorrow").is_err());
        assert!(parse_day_boundary("+24:00").is_err());
        assert!(parse_day_boundary("+05:60").is_err());
        assert!(parse_day_boundary("05:30").is_err());
        assert!(parse_day_boundary("").is_err());
    }
}
