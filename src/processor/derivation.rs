//! Per-record derivation of visualization fields

use crate::constants::KP_SCALE;
use crate::error::{OmniError, Result};
use crate::models::{Geomagnetic, Imf, Magnetosphere, OmniRecord, ProcessedRecord, SolarWind};
use crate::physics::{classify_storm, dynamic_pressure, magnetopause_standoff};

/// Derive the processed record of one hour. Fails only when the record has
/// no timestamp.
pub fn derive_record(record: &OmniRecord) -> Result<ProcessedRecord> {
    let timestamp = record.timestamp.ok_or(OmniError::IncompleteTimestamp)?;

    Ok(ProcessedRecord {
        timestamp,
        solar_wind: SolarWind {
            speed: record.speed,
            density: record.density,
            temperature: record.temperature,
            pressure: dynamic_pressure(record.density, record.speed),
        },
        imf: Imf {
            magnitude: record.imf_magnitude,
            bx: record.imf_bx,
            by: record.imf_by,
            bz: record.imf_bz,
        },
        geomagnetic: Geomagnetic {
            dst: record.dst,
            kp: record.kp_raw.map(|raw| raw / KP_SCALE),
            storm_level: classify_storm(record.dst, record.kp_raw),
        },
        magnetosphere: Magnetosphere {
            standoff_re: magnetopause_standoff(record.density, record.speed, record.imf_bz),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StormLevel;
    use chrono::NaiveDate;

    fn storm_record() -> OmniRecord {
        OmniRecord {
            timestamp: NaiveDate::from_ymd_opt(2024, 5, 10)
                .unwrap()
                .and_hms_opt(18, 0, 0),
            year: Some(2024.0),
            day_of_year: Some(131.0),
            hour: Some(18.0),
            density: Some(10.0),
            speed: Some(800.0),
            imf_bz: Some(-20.0),
            kp_raw: Some(90.0),
            dst: Some(-450.0),
            ..Default::default()
        }
    }

    #[test]
    fn test_storm_hour() {
        let processed = derive_record(&storm_record()).unwrap();

        assert!((processed.solar_wind.pressure.unwrap() - 12.8).abs() < 1e-9);
        assert_eq!(processed.geomagnetic.kp, Some(9.0));
        assert_eq!(processed.geomagnetic.storm_level, StormLevel::new(5));
        assert_eq!(processed.imf.bz, Some(-20.0));

        let expected = 11.4 * 12.8_f64.powf(-1.0 / 6.6) / 1.4;
        assert!((processed.magnetosphere.standoff_re - expected).abs() < 1e-9);
    }

    #[test]
    fn test_missing_plasma_defaults() {
        let record = OmniRecord {
            density: None,
            kp_raw: None,
            dst: None,
            ..storm_record()
        };

        let processed = derive_record(&record).unwrap();
        assert_eq!(processed.solar_wind.pressure, None);
        assert_eq!(processed.magnetosphere.standoff_re, 10.0);
        assert_eq!(processed.geomagnetic.kp, None);
        assert_eq!(processed.geomagnetic.storm_level, StormLevel::QUIET);
    }

    #[test]
    fn test_zero_kp_is_present() {
        let record = OmniRecord {
            kp_raw: Some(0.0),
            ..storm_record()
        };
        assert_eq!(derive_record(&record).unwrap().geomagnetic.kp, Some(0.0));
    }

    #[test]
    fn test_no_timestamp_is_skipped() {
        let record = OmniRecord {
            timestamp: None,
            ..storm_record()
        };
        assert!(matches!(
            derive_record(&record),
            Err(OmniError::IncompleteTimestamp)
        ));
    }
}
