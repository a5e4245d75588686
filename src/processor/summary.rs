//! Event-level summary statistics

use crate::models::{
    EventSummary, GeomagneticSummary, ImfSummary, ProcessedRecord, SolarWindSummary, StormLevel,
    TimeRange,
};

/// Reduce a processed sequence to its summary. Absent values are left out of
/// every extremum and average; an empty sequence gives the empty summary.
pub fn summarize(records: &[ProcessedRecord]) -> EventSummary {
    let (Some(first), Some(last)) = (records.first(), records.last()) else {
        return EventSummary::empty();
    };

    let speeds: Vec<f64> = records.iter().filter_map(|r| r.solar_wind.speed).collect();
    let densities = records.iter().filter_map(|r| r.solar_wind.density);
    let dsts = records.iter().filter_map(|r| r.geomagnetic.dst);
    let bzs: Vec<f64> = records.iter().filter_map(|r| r.imf.bz).collect();

    let max_storm_level = records
        .iter()
        .map(|r| r.geomagnetic.storm_level)
        .max()
        .unwrap_or(StormLevel::QUIET);

    EventSummary {
        time_range: Some(TimeRange {
            start: first.timestamp,
            end: last.timestamp,
            hour_count: records.len(),
        }),
        solar_wind: Some(SolarWindSummary {
            max_speed: max_of(speeds.iter().copied()),
            min_speed: min_of(speeds.iter().copied()),
            avg_speed: mean_of(&speeds),
            max_density: max_of(densities),
        }),
        geomagnetic: Some(GeomagneticSummary {
            min_dst: min_of(dsts),
            max_storm_level,
        }),
        imf: Some(ImfSummary {
            min_bz: min_of(bzs.iter().copied()),
            max_bz: max_of(bzs.iter().copied()),
        }),
    }
}

fn max_of(values: impl Iterator<Item = f64>) -> Option<f64> {
    values.reduce(f64::max)
}

fn min_of(values: impl Iterator<Item = f64>) -> Option<f64> {
    values.reduce(f64::min)
}

fn mean_of(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}
