use crate::calendar::Month;
use serde::{Deserialize, Serialize};

/// One dataset entry describing a single special day. Immutable after load;
/// `date`, `title`, `description` and `category` are display strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecialDayRecord {
    pub month: Month,
    pub day: u32,
    pub date: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub hashtags: Vec<String>,
}

/// Raw `?month=<Name>&day=<N>` query parameters. Kept as strings so a
/// malformed value falls back to today's date instead of rejecting the
/// request outright.
#[derive(Debug, Deserialize)]
pub struct DayQuery {
    pub month: Option<String>,
    pub day: Option<String>,
}
