//! Error handling for OMNI event processing.
//!
//! Provides error types with context for record parsing, source fetching,
//! catalog lookups and artifact output failures.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OmniError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("Malformed OMNI record: {reason}")]
    MalformedRecord { reason: String },

    #[error("Record has no complete year/day-of-year/hour timestamp")]
    IncompleteTimestamp,

    #[error("Failed to fetch OMNI data for {year}: {reason}")]
    SourceFetch { year: i32, reason: String },

    #[error("Unknown event: {id}")]
    UnknownEvent { id: String },

    #[error("Invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate { value: String },

    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange { start: String, end: String },

    #[error("Invalid OMNI column schema: {reason}")]
    InvalidSchema { reason: String },

    #[error("Invalid event catalog {source_name}: {reason}")]
    InvalidCatalog { source_name: String, reason: String },

    #[error("Failed to write output file: {path} - {reason}")]
    OutputFailed { path: PathBuf, reason: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl OmniError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            reason: reason.into(),
        }
    }

    pub fn source_fetch(year: i32, reason: impl Into<String>) -> Self {
        Self::SourceFetch {
            year,
            reason: reason.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, OmniError>;
