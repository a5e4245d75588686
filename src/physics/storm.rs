//! Geomagnetic storm intensity on the NOAA G-scale
//!
//! Dst and Kp are classified independently against their threshold tables
//! and the more severe level wins.

use crate::constants::{DST_LEVEL_THRESHOLDS, KP_LEVEL_THRESHOLDS, KP_SCALE};
use crate::models::StormLevel;

/// Storm level from Dst (nT) and the OMNI Kp*10 value; missing indices count as quiet
pub fn classify_storm(dst: Option<f64>, kp_raw: Option<f64>) -> StormLevel {
    let dst = dst.unwrap_or(0.0);
    let kp = kp_raw.map_or(0.0, |raw| raw / KP_SCALE);

    dst_level(dst).max(kp_level(kp))
}

/// Level from Dst: each threshold at or above the value adds a level
pub fn dst_level(dst: f64) -> StormLevel {
    let mut level = 0;
    for (index, threshold) in DST_LEVEL_THRESHOLDS.iter().enumerate() {
        if dst <= *threshold {
            level = index as u8 + 1;
        }
    }
    StormLevel::new(level)
}

/// Level from Kp in true units
pub fn kp_level(kp: f64) -> StormLevel {
    let mut level = 0;
    for (index, threshold) in KP_LEVEL_THRESHOLDS.iter().enumerate() {
        if kp >= *threshold {
            level = index as u8 + 1;
        }
    }
    StormLevel::new(level)
}
