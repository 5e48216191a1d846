use crate::calendar::Month;
use crate::dataset::Dataset;
use crate::models::SpecialDayRecord;
use chrono::{Datelike, Local};

/// The currently viewed (month, day) pair. Construction clamps the day, so a
/// cursor is always valid against the fixed month table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    month: Month,
    day: u32,
}

impl Cursor {
    /// Selects a date, clamping the day into `1..=days_in_month`. Restoring
    /// day 31 after switching to a shorter month lands on the month's last
    /// day rather than failing.
    pub fn new(month: Month, day: u32) -> Self {
        Self {
            month,
            day: day.clamp(1, month.days()),
        }
    }

    /// Today's real month and day from the system clock. The year plays no
    /// part in lookups.
    pub fn today() -> Self {
        let now = Local::now().date_naive();
        Self::new(Month::ALL[now.month0() as usize], now.day())
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// One day back; the first of a month steps to the last day of the
    /// previous month, and January 1 wraps to December 31.
    pub fn previous(self) -> Self {
        if self.day > 1 {
            Self {
                month: self.month,
                day: self.day - 1,
            }
        } else {
            let month = self.month.previous();
            Self {
                month,
                day: month.days(),
            }
        }
    }

    /// One day forward; the last day of a month steps to the first of the
    /// next month, and December 31 wraps to January 1.
    pub fn next(self) -> Self {
        if self.day < self.month.days() {
            Self {
                month: self.month,
                day: self.day + 1,
            }
        } else {
            Self {
                month: self.month.next(),
                day: 1,
            }
        }
    }

    /// Looks the cursor up in the dataset. An absent date is a not-found
    /// outcome for the caller to render, not an error.
    pub fn resolve<'a>(&self, dataset: &'a Dataset) -> Option<&'a SpecialDayRecord> {
        dataset.find_by_date(self.month, self.day)
    }

    /// The cursor as URL query parameters, e.g. `month=July&day=4`.
    pub fn query_string(&self) -> String {
        format!("month={}&day={}", self.month.name(), self.day)
    }
}
