//! Date-windowed batch fetching for NASA's Astronomy Picture of the Day.
//!
//! The crate turns "today" into a validated list of picture records: it
//! generates a descending window of calendar days, performs one lookup per
//! day against the APOD endpoint, keeps the entries that are still images
//! with parseable locators, and reports everything else per date in the
//! returned batch's skip list.

pub mod clients;
pub mod config;
pub mod domain;
pub mod errors;
pub mod services;
pub mod window;

pub use clients::ApodClient;
pub use config::FeedConfig;
pub use domain::{ApodEntry, FeedBatch, MediaType, Picture, SkippedDate};
pub use errors::{FetchError, FetchResult, SkipReason};
pub use services::FeedService;
pub use window::DayBoundary;
