//! Individual OMNI2 line parsing
//!
//! This module handles tokenizing a single hourly line, decoding the
//! schema's fields, resolving sentinels and deriving the record timestamp.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

use super::schema::OmniSchema;
use super::sentinel::resolve_sentinel;
use crate::error::{OmniError, Result};
use crate::models::OmniRecord;

/// Parser for OMNI2 hourly lines
#[derive(Debug, Clone)]
pub struct RecordParser {
    schema: OmniSchema,
}

impl RecordParser {
    /// Create a parser for the standard OMNI2 layout
    pub fn new() -> Result<Self> {
        Ok(Self::with_schema(OmniSchema::standard()?))
    }

    pub fn with_schema(schema: OmniSchema) -> Self {
        Self { schema }
    }

    /// Parse a single line into a record.
    ///
    /// Fails with [`OmniError::MalformedRecord`] when the line is too short or
    /// any schema field is not numeric. A record whose calendar fields are
    /// missing is still returned, without a timestamp.
    pub fn parse_line(&self, line: &str) -> Result<OmniRecord> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < self.schema.min_tokens() {
            return Err(OmniError::malformed(format!(
                "expected at least {} tokens, found {}",
                self.schema.min_tokens(),
                tokens.len()
            )));
        }

        let mut record = OmniRecord::default();
        for spec in self.schema.fields() {
            let token = tokens[spec.column];
            let value = token.parse::<f64>().map_err(|_| {
                OmniError::malformed(format!(
                    "non-numeric value '{}' for {} (column {})",
                    token, spec.field, spec.column
                ))
            })?;
            record.set(spec.field, resolve_sentinel(spec, value));
        }

        record.timestamp = match (record.year, record.day_of_year, record.hour) {
            (Some(year), Some(doy), Some(hour)) => timestamp_from_parts(year, doy, hour),
            _ => None,
        };

        Ok(record)
    }
}

/// January 1 of `year`, plus `doy - 1` days and `hour` hours.
///
/// Components are truncated to integers. Returns `None` when the result is
/// not a representable date.
pub fn timestamp_from_parts(year: f64, doy: f64, hour: f64) -> Option<NaiveDateTime> {
    if !(year.is_finite() && doy.is_finite() && hour.is_finite()) {
        return None;
    }

    let year = i32::try_from(year as i64).ok()?;
    let days = TimeDelta::try_days(doy as i64 - 1)?;
    let hours = TimeDelta::try_hours(hour as i64)?;

    NaiveDate::from_ymd_opt(year, 1, 1)?
        .and_hms_opt(0, 0, 0)?
        .checked_add_signed(days)?
        .checked_add_signed(hours)
}
