//! OMNI Events Library
//!
//! A Rust library for turning NASA OMNI2 hourly solar-wind and geomagnetic
//! records into visualization-ready datasets for historical space-weather
//! events.
//!
//! This library provides tools for:
//! - Parsing whitespace-delimited OMNI2 lines with explicit missing values
//! - Filtering yearly partitions to an inclusive calendar-date range
//! - Deriving dynamic pressure, NOAA G-scale storm level and magnetopause
//!   standoff distance per hour
//! - Aggregating event-level summary statistics
//! - Writing JSON (and optionally Parquet) artifacts per event

pub mod catalog;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod parser;
pub mod physics;
pub mod processor;

#[cfg(test)]
mod test_utils;

// Re-export commonly used types
pub use catalog::EventCatalog;
pub use config::PipelineConfig;
pub use error::{OmniError, Result};
pub use models::{EventDataset, EventDescriptor, OmniRecord, ProcessedRecord, StormLevel};
pub use parser::RecordParser;
pub use processor::{DateRange, DirectorySource, EventPipeline, EventRun, MemorySource, YearSource};
