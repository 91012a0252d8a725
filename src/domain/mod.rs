/// Domain models for feed entries and fetch-cycle results
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;
use url::Url;

use crate::errors::SkipReason;

/// One day's entry exactly as the upstream endpoint serializes it.
///
/// `hdurl` and `media_type` are missing on older variants of the feed and
/// `copyright` only appears on non-NASA material, so all three decode as
/// optional. Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ApodEntry {
    pub date: NaiveDate,
    pub title: String,
    pub explanation: String,
    pub url: String,
    #[serde(default)]
    pub hdurl: Option<String>,
    #[serde(default)]
    pub media_type: Option<String>,
    #[serde(default)]
    pub copyright: Option<String>,
}

/// Media tag attached to an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaType {
    Image,
    Video,
    Other(String),
}

impl MediaType {
    /// Maps the wire tag; an absent tag predates the field and means a still
    /// image.
    fn from_wire(tag: Option<&str>) -> Self {
        match tag {
            None | Some("image") => MediaType::Image,
            Some("video") => MediaType::Video,
            Some(other) => MediaType::Other(other.to_string()),
        }
    }

    pub fn is_image(&self) -> bool {
        matches!(self, MediaType::Image)
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaType::Image => f.write_str("image"),
            MediaType::Video => f.write_str("video"),
            MediaType::Other(tag) => f.write_str(tag),
        }
    }
}

impl Serialize for MediaType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            MediaType::Image => serializer.serialize_str("image"),
            MediaType::Video => serializer.serialize_str("video"),
            MediaType::Other(tag) => serializer.serialize_str(tag),
        }
    }
}

/// A validated, renderable picture record.
///
/// Immutable once constructed, and only constructed through `from_entry`, so
/// every `Picture` a caller can observe is a still image with a parsed
/// primary locator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Picture {
    pub date: NaiveDate,
    pub title: String,
    pub explanation: String,
    pub media_type: MediaType,
    pub url: Url,
    pub hd_url: Option<Url>,
    pub copyright: Option<String>,
}

impl Picture {
    /// Applies the display policy to a decoded entry.
    ///
    /// Entries that are not still images are rejected, as are entries whose
    /// primary locator does not parse; nothing is substituted for a dropped
    /// record. A malformed `hdurl` only costs the hi-res variant.
    pub fn from_entry(entry: ApodEntry) -> Result<Self, SkipReason> {
        let media_type = MediaType::from_wire(entry.media_type.as_deref());
        if !media_type.is_image() {
            return Err(SkipReason::NotAnImage(media_type));
        }

        let url = match Url::parse(&entry.url) {
            Ok(url) => url,
            Err(source) => {
                return Err(SkipReason::InvalidUrl {
                    url: entry.url,
                    source,
                })
            }
        };

        let hd_url = entry.hdurl.as_deref().and_then(|raw| match Url::parse(raw) {
            Ok(hd) => Some(hd),
            Err(e) => {
                debug!("Dropping malformed hdurl {:?} for {}: {}", raw, entry.date, e);
                None
            }
        });

        Ok(Self {
            date: entry.date,
            title: entry.title,
            explanation: entry.explanation,
            media_type,
            url,
            hd_url,
            copyright: entry.copyright,
        })
    }
}

/// Everything one fetch cycle produced: surviving records in window order
/// plus a diagnostic for every date that contributed nothing.
#[derive(Debug, Default)]
pub struct FeedBatch {
    pub pictures: Vec<Picture>,
    pub skipped: Vec<SkippedDate>,
}

impl FeedBatch {
    pub fn len(&self) -> usize {
        self.pictures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pictures.is_empty()
    }

    /// Discards the diagnostics and keeps the renderable records.
    pub fn into_pictures(self) -> Vec<Picture> {
        self.pictures
    }
}

/// A window date that produced no record, and why.
#[derive(Debug)]
pub struct SkippedDate {
    pub date: NaiveDate,
    pub reason: SkipReason,
}
