//! Inclusive date-range filtering over year-partitioned records
//!
//! Records are matched by their integer (year, day-of-year) pair, so each
//! yearly partition can be filtered on its own and the results concatenated
//! in year order.

use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

use crate::error::{OmniError, Result};
use crate::models::OmniRecord;

/// Inclusive calendar-date interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(OmniError::InvalidDateRange {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self { start, end })
    }

    /// Parse two `YYYY-MM-DD` dates
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Self::new(parse_date(start)?, parse_date(end)?)
    }

    /// Range covering `hours` hours from midnight of `start`, by calendar date
    pub fn from_start_and_hours(start: NaiveDate, hours: u32) -> Result<Self> {
        let end_time: NaiveDateTime = start
            .and_hms_opt(0, 0, 0)
            .zip(TimeDelta::try_hours(i64::from(hours)))
            .and_then(|(start_time, span)| start_time.checked_add_signed(span))
            .ok_or_else(|| OmniError::InvalidDateRange {
                start: start.to_string(),
                end: format!("{} + {}h", start, hours),
            })?;
        Self::new(start, end_time.date())
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Calendar years the range touches, ascending
    pub fn years(&self) -> RangeInclusive<i32> {
        self.start.year()..=self.end.year()
    }

    /// Whether a (year, day-of-year) pair falls inside the range
    pub fn contains(&self, year: i32, day_of_year: u32) -> bool {
        let (start_year, start_doy) = (self.start.year(), self.start.ordinal());
        let (end_year, end_doy) = (self.end.year(), self.end.ordinal());

        if year < start_year || year > end_year {
            return false;
        }
        if year == start_year && day_of_year < start_doy {
            return false;
        }
        if year == end_year && day_of_year > end_doy {
            return false;
        }
        true
    }

    /// Whether a record falls inside the range; records without year or
    /// day-of-year never do
    pub fn contains_record(&self, record: &OmniRecord) -> bool {
        record
            .year_and_day()
            .is_some_and(|(year, doy)| self.contains(year, doy))
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| OmniError::InvalidDate {
        value: value.to_string(),
    })
}
