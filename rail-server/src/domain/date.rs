//! Travel dates and the day-of-week lookup used against running days.

use std::fmt;

use chrono::{Datelike, NaiveDate};

/// Error returned for a date that is malformed or not on the calendar.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid date: {reason}")]
pub struct InvalidDate {
    reason: String,
}

impl InvalidDate {
    fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Weekday index of a Gregorian calendar date: 0 = Monday … 6 = Sunday.
///
/// This is the bit order of [`RunningDays`](super::RunningDays), so
/// `days.runs_on(weekday_index(d, m, y)?)` answers "does it run that day".
/// Dates that don't exist (31 April, 29 February in a common year) are
/// rejected.
///
/// # Examples
///
/// ```
/// use rail_server::domain::weekday_index;
///
/// // 29 February 2024 was a Thursday
/// assert_eq!(weekday_index(29, 2, 2024), Ok(3));
/// // 2023 was not a leap year
/// assert!(weekday_index(29, 2, 2023).is_err());
/// ```
pub fn weekday_index(day: u32, month: u32, year: i32) -> Result<usize, InvalidDate> {
    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| InvalidDate::new(format!("{day:02}-{month:02}-{year} is not a calendar date")))?;
    Ok(date.weekday().num_days_from_monday() as usize)
}

/// A validated travel date, given by clients as `DD-MM-YYYY`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TravelDate(NaiveDate);

impl TravelDate {
    /// Parse a `DD-MM-YYYY` string. Single-digit day and month are accepted.
    pub fn parse(s: &str) -> Result<Self, InvalidDate> {
        let mut parts = s.trim().split('-');
        let (Some(dd), Some(mm), Some(yyyy), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(InvalidDate::new("expected DD-MM-YYYY"));
        };

        let day = parse_component(dd, 2, "day")?;
        let month = parse_component(mm, 2, "month")?;
        let year = parse_component(yyyy, 4, "year")?;

        NaiveDate::from_ymd_opt(year as i32, month, day)
            .map(Self)
            .ok_or_else(|| InvalidDate::new(format!("{s} is not a calendar date")))
    }

    /// Returns the underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Weekday index of this date (0 = Monday).
    pub fn weekday_index(&self) -> usize {
        self.0.weekday().num_days_from_monday() as usize
    }
}

fn parse_component(s: &str, max_len: usize, name: &str) -> Result<u32, InvalidDate> {
    if s.is_empty() || s.len() > max_len || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InvalidDate::new(format!("bad {name}: {s:?}")));
    }
    s.parse()
        .map_err(|_| InvalidDate::new(format!("bad {name}: {s:?}")))
}

impl fmt::Display for TravelDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%d-%m-%Y"))
    }
}

impl fmt::Debug for TravelDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TravelDate({self})")
    }
}
