/// Upstream endpoint client
use chrono::NaiveDate;
use reqwest::Client;

use crate::config::FeedConfig;
use crate::domain::ApodEntry;
use crate::errors::{FetchError, FetchResult};

/// Client for the picture-of-the-day endpoint.
///
/// One instance owns one `reqwest::Client`, reused for every lookup it
/// performs; requests inherit the configured timeout and user agent. The
/// client is cheap to clone and safe to share.
#[derive(Clone)]
pub struct ApodClient {
    client: Client,
    api_url: String,
    api_key: String,
}

impl ApodClient {
    pub fn new(config: &FeedConfig) -> FetchResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent("apod-feed/0.1")
            .build()?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// One lookup for one calendar day: GET, status check, decode.
    pub async fn fetch_picture(&self, date: NaiveDate) -> FetchResult<ApodEntry> {
        self.request(Some(date)).await
    }

    /// The date-omitted request form: upstream's own notion of "today".
    pub async fn fetch_latest(&self) -> FetchResult<ApodEntry> {
        self.request(None).await
    }

    async fn request(&self, date: Option<NaiveDate>) -> FetchResult<ApodEntry> {
        let mut req = self.client.get(&self.api_url);

        if !self.api_key.is_empty() {
            req = req.query(&[("api_key", self.api_key.as_str())]);
        }
        if let Some(date) = date {
            req = req.query(&[("date", date.to_string())]);
        }

        let resp = req.send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::UpstreamStatus(status));
        }

        // Read the body fully before decoding; `FetchError::Decode` is
        // reserved for bytes that arrived but do not match the wire shape.
        let body = resp.bytes().await?;
        let entry = serde_json::from_slice(&body)?;
        Ok(entry)
    }
}
