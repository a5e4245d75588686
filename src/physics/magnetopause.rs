//! Magnetopause standoff approximation
//!
//! Shue et al. (1998) style power law `r0 = 11.4 * P^(-1/6.6)`, with an
//! additional linear compression for southward IMF Bz.

use crate::constants::{
    DEFAULT_STANDOFF_RE, DYNAMIC_PRESSURE_COEFFICIENT, MAX_STANDOFF_RE, MIN_STANDOFF_RE,
    SOUTHWARD_BZ_COMPRESSION_PER_NT, STANDOFF_PRESSURE_EXPONENT, STANDOFF_SCALE_RE,
};

/// Solar wind dynamic pressure in nPa, `None` if density or speed is missing
pub fn dynamic_pressure(density: Option<f64>, speed: Option<f64>) -> Option<f64> {
    Some(ram_pressure(density?, speed?))
}

/// Compression applied to the standoff distance by the IMF
pub fn compression_factor(bz: Option<f64>) -> f64 {
    match bz {
        Some(bz) if bz < 0.0 => 1.0 + SOUTHWARD_BZ_COMPRESSION_PER_NT * bz.abs(),
        _ => 1.0,
    }
}

/// Magnetopause standoff distance in Earth radii, clamped to [4, 15].
///
/// Missing density or speed gives the quiet-time default of 10 R_E.
pub fn magnetopause_standoff(density: Option<f64>, speed: Option<f64>, bz: Option<f64>) -> f64 {
    let (Some(density), Some(speed)) = (density, speed) else {
        return DEFAULT_STANDOFF_RE;
    };

    let pressure = ram_pressure(density, speed);
    let r0 = if pressure > 0.0 {
        STANDOFF_SCALE_RE * pressure.powf(-1.0 / STANDOFF_PRESSURE_EXPONENT)
            / compression_factor(bz)
    } else {
        DEFAULT_STANDOFF_RE
    };

    if r0.is_nan() {
        return DEFAULT_STANDOFF_RE;
    }
    r0.clamp(MIN_STANDOFF_RE, MAX_STANDOFF_RE)
}

fn ram_pressure(density: f64, speed: f64) -> f64 {
    DYNAMIC_PRESSURE_COEFFICIENT * density * speed * speed
}
