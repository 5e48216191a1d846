use serde::{Deserialize, Serialize};
use std::fmt;

/// Days per month as the site counts them. February is fixed at 29 days for
/// every year so the dataset's February 29 entry is always reachable; lookups
/// never consider the year.
pub const DAYS_IN_MONTH: [u32; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Canonical month names, the fixed vocabulary used as lookup keys. Serde
/// matches the variant names exactly, so dataset and query values must use
/// the capitalized English spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Case-sensitive match against the canonical names.
    pub fn from_name(name: &str) -> Option<Month> {
        Month::ALL.into_iter().find(|month| month.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }

    /// Zero-based position in the year.
    pub fn index(self) -> usize {
        self as usize
    }

    /// One-based calendar number (January is 1).
    pub fn number(self) -> u32 {
        self as u32 + 1
    }

    pub fn days(self) -> u32 {
        DAYS_IN_MONTH[self.index()]
    }

    /// The month before, wrapping January back to December.
    pub fn previous(self) -> Month {
        Month::ALL[(self.index() + 11) % 12]
    }

    /// The month after, wrapping December forward to January.
    pub fn next(self) -> Month {
        Month::ALL[(self.index() + 1) % 12]
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
