//! Date input parsing and range expansion.

use std::fmt;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use thiserror::Error;

/// Format of a single date in user input and in `DateRange` entries.
const COMPACT_DATE_FORMAT: &str = "%Y%m%d";

static COMPACT_DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{8}$").expect("Failed to compile compact date regex - this is a bug")
});

/// Why a date input was rejected.
///
/// Every variant is recovered the same way: the user is asked again and the
/// conversation does not advance.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateInputError {
    /// The input is not `YYYYMMDD` or `YYYYMMDD-YYYYMMDD`, or names a date that does not exist.
    #[error("'{0}' is not a valid YYYYMMDD date or YYYYMMDD-YYYYMMDD range")]
    Format(String),

    /// The range starts after it ends.
    #[error("range start {start} is after range end {end}")]
    ReversedRange { start: String, end: String },

    /// The range covers more days than allowed.
    #[error("range covers {days} days, the maximum is {max}")]
    RangeTooLong { days: usize, max: usize },
}

/// An inclusive, contiguous, non-empty sequence of calendar days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    days: Vec<NaiveDate>,
}

impl DateRange {
    /// Builds the inclusive day-by-day range between `start` and `end`.
    ///
    /// Returns `None` when `start` is after `end`.
    pub fn between(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        if start > end {
            return None;
        }
        let days = start
            .iter_days()
            .take_while(|day| *day <= end)
            .collect::<Vec<_>>();
        Some(DateRange { days })
    }

    /// A single-day range.
    pub fn single(day: NaiveDate) -> Self {
        DateRange { days: vec![day] }
    }

    /// The days of the range in ascending order.
    pub fn days(&self) -> &[NaiveDate] {
        &self.days
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// The days rendered as `YYYYMMDD`.
    pub fn compact_strings(&self) -> Vec<String> {
        self.days
            .iter()
            .map(|d| d.format(COMPACT_DATE_FORMAT).to_string())
            .collect()
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.days.first(), self.days.last()) {
            (Some(first), Some(last)) if first == last => {
                write!(f, "{}", first.format(COMPACT_DATE_FORMAT))
            }
            (Some(first), Some(last)) => write!(
                f,
                "{}-{}",
                first.format(COMPACT_DATE_FORMAT),
                last.format(COMPACT_DATE_FORMAT)
            ),
            _ => Ok(()),
        }
    }
}

/// Parses one strict `YYYYMMDD` date.
fn parse_compact_date(raw: &str) -> Result<NaiveDate, DateInputError> {
    let raw = raw.trim();
    if !COMPACT_DATE_RE.is_match(raw) {
        return Err(DateInputError::Format(raw.to_string()));
    }
    NaiveDate::parse_from_str(raw, COMPACT_DATE_FORMAT)
        .map_err(|_| DateInputError::Format(raw.to_string()))
}

/// Parses a single date or an inclusive range into a `DateRange`.
///
/// Accepted shapes are `YYYYMMDD` and `YYYYMMDD-YYYYMMDD`. Ranges longer than
/// `max_days` days are rejected.
///
/// # Errors
///
/// Returns a `DateInputError` describing why the input was rejected.
pub fn parse_date_input(input: &str, max_days: usize) -> Result<DateRange, DateInputError> {
    let input = input.trim();
    let parts: Vec<&str> = input.split('-').collect();

    let range = match parts.as_slice() {
        [single] => DateRange::single(parse_compact_date(single)?),
        [start, end] => {
            let start_date = parse_compact_date(start)?;
            let end_date = parse_compact_date(end)?;
            DateRange::between(start_date, end_date).ok_or_else(|| {
                DateInputError::ReversedRange {
                    start: start.trim().to_string(),
                    end: end.trim().to_string(),
                }
            })?
        }
        _ => return Err(DateInputError::Format(input.to_string())),
    };

    if range.len() > max_days {
        return Err(DateInputError::RangeTooLong {
            days: range.len(),
            max: max_days,
        });
    }

    Ok(range)
}
