//! Core data structures and types for OMNI event processing.
//!
//! Defines the decoded OMNI record, the derived per-hour record handed to
//! visualization, event descriptors from the catalog, and the summary and
//! artifact structures produced by a pipeline run.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Named columns read from an OMNI2 hourly line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OmniField {
    Year,
    DayOfYear,
    Hour,
    ImfMagnitude,
    ImfBx,
    ImfBy,
    ImfBz,
    PlasmaTemperature,
    ProtonDensity,
    PlasmaSpeed,
    KpTimes10,
    Dst,
}

impl OmniField {
    /// Snake-case name used in logs and diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            OmniField::Year => "year",
            OmniField::DayOfYear => "doy",
            OmniField::Hour => "hour",
            OmniField::ImfMagnitude => "imf_magnitude",
            OmniField::ImfBx => "imf_bx_gse",
            OmniField::ImfBy => "imf_by_gse",
            OmniField::ImfBz => "imf_bz_gse",
            OmniField::PlasmaTemperature => "plasma_temp",
            OmniField::ProtonDensity => "proton_density",
            OmniField::PlasmaSpeed => "plasma_speed",
            OmniField::KpTimes10 => "kp",
            OmniField::Dst => "dst",
        }
    }
}

impl fmt::Display for OmniField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One decoded OMNI2 line. Every measurement is optional; sentinels have
/// already been resolved to `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OmniRecord {
    /// Present only when year, day-of-year and hour are all present
    pub timestamp: Option<NaiveDateTime>,
    pub year: Option<f64>,
    pub day_of_year: Option<f64>,
    pub hour: Option<f64>,
    pub imf_magnitude: Option<f64>,
    pub imf_bx: Option<f64>,
    pub imf_by: Option<f64>,
    pub imf_bz: Option<f64>,
    pub temperature: Option<f64>,
    pub density: Option<f64>,
    pub speed: Option<f64>,
    /// Kp index as stored by OMNI (Kp * 10)
    pub kp_raw: Option<f64>,
    pub dst: Option<f64>,
}

impl OmniRecord {
    pub fn set(&mut self, field: OmniField, value: Option<f64>) {
        let slot = match field {
            OmniField::Year => &mut self.year,
            OmniField::DayOfYear => &mut self.day_of_year,
            OmniField::Hour => &mut self.hour,
            OmniField::ImfMagnitude => &mut self.imf_magnitude,
            OmniField::ImfBx => &mut self.imf_bx,
            OmniField::ImfBy => &mut self.imf_by,
            OmniField::ImfBz => &mut self.imf_bz,
            OmniField::PlasmaTemperature => &mut self.temperature,
            OmniField::ProtonDensity => &mut self.density,
            OmniField::PlasmaSpeed => &mut self.speed,
            OmniField::KpTimes10 => &mut self.kp_raw,
            OmniField::Dst => &mut self.dst,
        };
        *slot = value;
    }

    /// Integer (year, day-of-year) used for date-range partitioning
    pub fn year_and_day(&self) -> Option<(i32, u32)> {
        match (self.year, self.day_of_year) {
            (Some(year), Some(doy)) => Some((year as i32, doy as u32)),
            _ => None,
        }
    }
}

/// A named historical event from the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDescriptor {
    pub id: String,
    pub name: String,
    pub description: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Peak flare class label, e.g. "X28 (estimated X45)"
    pub peak_flare: String,
    /// Minimum Dst reported for the event (nT)
    pub min_dst: i32,
}

/// NOAA G-scale storm level, 0 (quiet) to 5 (extreme)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StormLevel(u8);

impl StormLevel {
    pub const QUIET: StormLevel = StormLevel(0);

    /// Build a level, saturating at G5
    pub fn new(level: u8) -> Self {
        Self(level.min(crate::constants::MAX_STORM_LEVEL))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for StormLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "G{}", self.0)
    }
}

/// Solar wind plasma parameters of a processed hour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolarWind {
    /// km/s
    pub speed: Option<f64>,
    /// n/cc
    pub density: Option<f64>,
    /// K
    pub temperature: Option<f64>,
    /// nPa
    pub pressure: Option<f64>,
}

/// Interplanetary magnetic field (GSE, nT)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Imf {
    pub magnitude: Option<f64>,
    pub bx: Option<f64>,
    pub by: Option<f64>,
    pub bz: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geomagnetic {
    /// nT
    pub dst: Option<f64>,
    /// Kp in true units (OMNI value / 10)
    pub kp: Option<f64>,
    pub storm_level: StormLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Magnetosphere {
    /// Magnetopause standoff distance in Earth radii, always within [4, 15]
    pub standoff_re: f64,
}

/// One hour of visualization-ready data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedRecord {
    pub timestamp: NaiveDateTime,
    pub solar_wind: SolarWind,
    pub imf: Imf,
    pub geomagnetic: Geomagnetic,
    pub magnetosphere: Magnetosphere,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub hour_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolarWindSummary {
    pub max_speed: Option<f64>,
    pub min_speed: Option<f64>,
    pub avg_speed: Option<f64>,
    pub max_density: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeomagneticSummary {
    pub min_dst: Option<f64>,
    pub max_storm_level: StormLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImfSummary {
    pub min_bz: Option<f64>,
    pub max_bz: Option<f64>,
}

/// Event-level statistics. All sections are absent for an empty run, which
/// serializes as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_range: Option<TimeRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solar_wind: Option<SolarWindSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geomagnetic: Option<GeomagneticSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imf: Option<ImfSummary>,
}

impl EventSummary {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.time_range.is_none()
            && self.solar_wind.is_none()
            && self.geomagnetic.is_none()
            && self.imf.is_none()
    }
}

/// Output artifact of one event or ad-hoc range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDataset {
    /// `None` for ad-hoc date ranges
    pub event_info: Option<EventDescriptor>,
    pub data: Vec<ProcessedRecord>,
    pub summary: EventSummary,
    pub generated_at: DateTime<Utc>,
}

impl EventDataset {
    pub fn record_count(&self) -> usize {
        self.data.len()
    }

    pub fn has_data(&self) -> bool {
        !self.data.is_empty()
    }
}
