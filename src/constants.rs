//! Application constants for the OMNI event processor
//!
//! This module contains the OMNI2 column layout, missing-data sentinels,
//! physical model coefficients and storm classification thresholds used
//! throughout the pipeline.

// =============================================================================
// OMNI2 Source Format
// =============================================================================

/// File name prefix of the yearly OMNI2 hourly files (`omni2_2003.dat`)
pub const OMNI_FILE_PREFIX: &str = "omni2_";

/// File extension of the yearly OMNI2 hourly files
pub const OMNI_FILE_EXTENSION: &str = "dat";

/// Minimum number of whitespace-separated tokens in a valid OMNI2 line
pub const MIN_TOKENS_PER_LINE: usize = 45;

/// Absolute tolerance used when comparing a decoded value with its sentinel
pub const SENTINEL_TOLERANCE: f64 = 0.1;

/// Column positions (0-indexed) of the fields read from each OMNI2 line
pub mod columns {
    pub const YEAR: usize = 0;
    pub const DAY_OF_YEAR: usize = 1;
    pub const HOUR: usize = 2;
    pub const IMF_MAGNITUDE: usize = 9;
    pub const IMF_BX_GSE: usize = 14;
    pub const IMF_BY_GSE: usize = 15;
    pub const IMF_BZ_GSE: usize = 16;
    pub const PLASMA_TEMPERATURE: usize = 22;
    pub const PROTON_DENSITY: usize = 23;
    pub const PLASMA_SPEED: usize = 24;
    pub const KP_TIMES_10: usize = 38;
    pub const DST: usize = 40;
}

/// Fill values marking missing data in the OMNI2 format
pub mod sentinels {
    /// IMF magnitude and components, proton density
    pub const FIELD_OR_DENSITY: f64 = 999.9;

    /// Plasma temperature (K)
    pub const TEMPERATURE: f64 = 9_999_999.0;

    /// Plasma flow speed (km/s)
    pub const SPEED: f64 = 9999.0;

    /// Kp index stored as Kp*10
    pub const KP: f64 = 99.0;

    /// Dst index (nT)
    pub const DST: f64 = 99999.0;
}

// =============================================================================
// Magnetopause Model
// =============================================================================

/// Pressure coefficient: P(nPa) ~ 2e-6 * n(cm^-3) * v(km/s)^2
pub const DYNAMIC_PRESSURE_COEFFICIENT: f64 = 2e-6;

/// Standoff scale in Earth radii at 1 nPa
pub const STANDOFF_SCALE_RE: f64 = 11.4;

/// Pressure exponent denominator: r0 ~ P^(-1/6.6)
pub const STANDOFF_PRESSURE_EXPONENT: f64 = 6.6;

/// Extra compression per nT of southward Bz
pub const SOUTHWARD_BZ_COMPRESSION_PER_NT: f64 = 0.02;

/// Quiet-time standoff used when plasma data is missing
pub const DEFAULT_STANDOFF_RE: f64 = 10.0;

/// Physically plausible standoff range (Earth radii)
pub const MIN_STANDOFF_RE: f64 = 4.0;
pub const MAX_STANDOFF_RE: f64 = 15.0;

// =============================================================================
// Storm Classification (NOAA G-scale)
// =============================================================================

/// Highest storm level (G5)
pub const MAX_STORM_LEVEL: u8 = 5;

/// Dst thresholds (nT) for levels G1..G5; a level applies at or below its value
pub const DST_LEVEL_THRESHOLDS: [f64; 5] = [-50.0, -100.0, -200.0, -300.0, -400.0];

/// Kp thresholds for levels G1..G5; a level applies at or above its value
pub const KP_LEVEL_THRESHOLDS: [f64; 5] = [5.0, 6.0, 7.0, 8.0, 9.0];

/// OMNI stores Kp multiplied by this factor
pub const KP_SCALE: f64 = 10.0;

// =============================================================================
// Pipeline Defaults
// =============================================================================

/// Default window length for ad-hoc `range` requests
pub const DEFAULT_RANGE_HOURS: u32 = 48;

/// Default per-year fetch timeout
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 60;

/// Upper bound on concurrently fetched years
pub const MAX_CONCURRENT_YEARS: usize = 8;

/// Default output directory for generated event files
pub const DEFAULT_OUTPUT_DIR: &str = "historical_events";

/// Application directory name under the user data directory
pub const APP_DATA_DIR_NAME: &str = "omni-events";
