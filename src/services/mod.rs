/// Batch-fetch orchestration
use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::clients::ApodClient;
use crate::config::FeedConfig;
use crate::domain::{FeedBatch, Picture, SkippedDate};
use crate::errors::{FetchResult, SkipReason};
use crate::window::{self, DayBoundary};

/// Turns a date window into a validated, ordered picture list.
///
/// A cycle never aborts over a single bad date: every failed or filtered
/// date lands in the returned batch's skip list instead. Each in-flight
/// cycle owns its accumulator, so concurrent cycles on one service do not
/// interfere (serializing them is the caller's concern), and dropping the
/// returned future cancels the cycle.
pub struct FeedService {
    client: ApodClient,
    day_boundary: DayBoundary,
}

impl FeedService {
    /// Build a service and its shared HTTP client from configuration.
    pub fn new(config: &FeedConfig) -> FetchResult<Self> {
        Ok(Self {
            client: ApodClient::new(config)?,
            day_boundary: config.day_boundary,
        })
    }

    /// Fetch today's picture plus the `window_size` days before it,
    /// newest first.
    pub async fn fetch_recent(&self, window_size: u32) -> FeedBatch {
        let dates = window::recent_window(window_size, self.day_boundary);
        self.fetch_dates(&dates).await
    }

    /// Fetch an explicit date sequence, one lookup per date, preserving the
    /// sequence order in the result.
    ///
    /// Lookups run sequentially and are awaited one at a time; each date is
    /// fetched exactly once, with no retry.
    pub async fn fetch_dates(&self, dates: &[NaiveDate]) -> FeedBatch {
        info!("Fetching pictures for {} day(s)", dates.len());

        let mut pictures = Vec::with_capacity(dates.len());
        let mut skipped = Vec::new();

        for &date in dates {
            match self.fetch_one(date).await {
                Ok(picture) => pictures.push(picture),
                Err(reason) => {
                    if reason.is_lookup_failure() {
                        warn!("Skipping {}: {}", date, reason);
                    } else {
                        info!("Skipping {}: {}", date, reason);
                    }
                    skipped.push(SkippedDate { date, reason });
                }
            }
        }

        info!(
            "Collected {} of {} day(s) ({} skipped)",
            pictures.len(),
            dates.len(),
            skipped.len()
        );

        FeedBatch { pictures, skipped }
    }

    /// Upstream's own "today" via the date-omitted lookup, pushed through
    /// the same display policy as a windowed fetch.
    pub async fn latest(&self) -> Result<Picture, SkipReason> {
        let entry = self.client.fetch_latest().await?;
        Picture::from_entry(entry)
    }

    async fn fetch_one(&self, date: NaiveDate) -> Result<Picture, SkipReason> {
        let entry = self.client.fetch_picture(date).await?;
        if entry.date != date {
            // Upstream keys the feed by date; a mismatch is logged, not policed.
            debug!("Entry requested for {} reports date {}", date, entry.date);
        }
        Picture::from_entry(entry)
    }
}
