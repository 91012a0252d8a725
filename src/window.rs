/// Date-window generation for batch fetches
use chrono::{Days, FixedOffset, Local, NaiveDate, Utc};

/// Clock that decides which calendar day "today" is when a window opens.
///
/// The upstream feed publishes one entry per calendar day, but it does not
/// say whose calendar. `Local` follows the device clock and is the default;
/// `Utc` and `Offset` pin the boundary explicitly for deployments where the
/// device clock is the wrong reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DayBoundary {
    #[default]
    Local,
    Utc,
    Offset(FixedOffset),
}

impl DayBoundary {
    /// Today's date under this boundary.
    pub fn today(self) -> NaiveDate {
        match self {
            DayBoundary::Local => Local::now().date_naive(),
            DayBoundary::Utc => Utc::now().date_naive(),
            DayBoundary::Offset(offset) => Utc::now().with_timezone(&offset).date_naive(),
        }
    }
}

/// Today plus the `window_size` days before it, newest first.
pub fn recent_window(window_size: u32, boundary: DayBoundary) -> Vec<NaiveDate> {
    window_ending(boundary.today(), window_size)
}

/// `end` plus the `window_size` days before it, descending from `end`.
///
/// The range is inclusive on both sides, so the result holds
/// `window_size + 1` dates. Month, year and leap-day boundaries come from
/// calendar arithmetic; an offset the calendar cannot represent is skipped
/// rather than aborting the sequence.
pub fn window_ending(end: NaiveDate, window_size: u32) -> Vec<NaiveDate> {
    (0..=window_size)
        .filter_map(|offset| end.checked_sub_days(Days::new(u64::from(offset))))
        .collect()
}
