/// Error taxonomy for per-date lookups and batch diagnostics
use reqwest::StatusCode;
use thiserror::Error;

use crate::domain::MediaType;

/// Failure of a single date's remote lookup.
///
/// Transport covers connect failures and request timeouts; a reachable
/// upstream answering outside 2xx is reported separately, as is a body that
/// does not decode. None of these abort a fetch cycle.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("upstream responded with status {0}")]
    UpstreamStatus(StatusCode),
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Why a window date contributed nothing to the result.
///
/// `Lookup` wraps a failed remote call; the other variants are display-policy
/// exclusions of structurally valid entries.
#[derive(Debug, Error)]
pub enum SkipReason {
    #[error("lookup failed: {0}")]
    Lookup(#[from] FetchError),
    #[error("media type {0} is not renderable")]
    NotAnImage(MediaType),
    #[error("invalid media url {url:?}: {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },
}

impl SkipReason {
    /// True for lookup failures, false for policy exclusions.
    pub fn is_lookup_failure(&self) -> bool {
        matches!(self, SkipReason::Lookup(_))
    }
}

/// Type alias for lookup results
pub type FetchResult<T> = Result<T, FetchError>;
