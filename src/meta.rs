use crate::calendar::Month;
use crate::models::SpecialDayRecord;
use chrono::{Datelike, Duration, Local, NaiveDate};
use serde::Serialize;

pub const SITE_NAME: &str = "What's Special Today?";

/// ISO-8601 date for a month/day in the given year, used only for structured
/// metadata, never for lookups. Counting days from the first of the month
/// lets the fixed 29-day February spill over to March 1 in non-leap years.
pub fn iso_date_for(month: Month, day: u32, year: i32) -> String {
    let first = NaiveDate::from_ymd_opt(year, month.number(), 1).unwrap_or_default();
    let date = first + Duration::days(i64::from(day) - 1);
    date.format("%Y-%m-%d").to_string()
}

pub fn current_year() -> i32 {
    Local::now().year()
}

/// Schema.org `Event` object embedded as JSON-LD.
#[derive(Serialize)]
struct EventSchema<'a> {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'a str,
    description: &'a str,
    #[serde(rename = "startDate")]
    start_date: String,
    #[serde(rename = "eventAttendanceMode")]
    event_attendance_mode: &'static str,
    #[serde(rename = "eventStatus")]
    event_status: &'static str,
    organizer: Organizer,
}

#[derive(Serialize)]
struct Organizer {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
}

/// Everything the page head needs for a resolved record: title, description
/// meta, Open Graph tags and the JSON-LD block.
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub og_title: String,
    pub og_description: String,
    pub url: String,
    pub structured_data: String,
}

impl PageMeta {
    pub fn for_record(record: &SpecialDayRecord, url: &str) -> Self {
        let schema = EventSchema {
            context: "https://schema.org",
            kind: "Event",
            name: &record.title,
            description: &record.description,
            start_date: iso_date_for(record.month, record.day, current_year()),
            event_attendance_mode: "https://schema.org/OnlineEventAttendanceMode",
            event_status: "https://schema.org/EventScheduled",
            organizer: Organizer {
                kind: "Organization",
                name: SITE_NAME,
            },
        };

        Self {
            title: format!("{} - {} | {}", record.title, record.date, SITE_NAME),
            description: format!(
                "{}: {} - {}",
                record.date, record.title, record.description
            ),
            og_title: format!("{} - {}", record.title, record.date),
            og_description: record.description.clone(),
            url: url.to_string(),
            structured_data: serde_json::to_string(&schema).unwrap_or_default(),
        }
    }

    /// Head content for a date with no record. No JSON-LD block.
    pub fn not_found(month: Month, day: u32, url: &str) -> Self {
        Self {
            title: format!("No Special Day Found | {SITE_NAME}"),
            description: format!("We couldn't find a special day for {month} {day}."),
            og_title: format!("No Special Day Found - {month} {day}"),
            og_description: format!("We couldn't find a special day for {month} {day}."),
            url: url.to_string(),
            structured_data: String::new(),
        }
    }
}
