//! Tests for the event processing pipeline
//!
//! Unit and integration tests for partition processing, year-failure
//! recovery, summary aggregation and artifact output.


use crate::config::PipelineConfig;
use crate::models::{
    Geomagnetic, Imf, Magnetosphere, ProcessedRecord, SolarWind, StormLevel,
};
use chrono::{NaiveDate, NaiveDateTime};

/// Midnight-based timestamp helper
pub fn at(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

/// Config suitable for tests: short timeout, two concurrent years
pub fn test_config() -> PipelineConfig {
    PipelineConfig::default()
        .with_max_concurrent_years(2)
        .with_fetch_timeout_secs(2)
}

/// Processed record with the given measurements
pub fn processed(
    timestamp: NaiveDateTime,
    speed: Option<f64>,
    density: Option<f64>,
    dst: Option<f64>,
    bz: Option<f64>,
    storm_level: u8,
) -> ProcessedRecord {
    ProcessedRecord {
        timestamp,
        solar_wind: SolarWind {
            speed,
            density,
            temperature: Some(100_000.0),
            pressure: None,
        },
        imf: Imf {
            magnitude: Some(5.0),
            bx: Some(1.0),
            by: Some(-1.0),
            bz,
        },
        geomagnetic: Geomagnetic {
            dst,
            kp: Some(2.0),
            storm_level: StormLevel::new(storm_level),
        },
        magnetosphere: Magnetosphere { standoff_re: 10.0 },
    }
}
