//! Integration tests for the OMNI event pipeline over on-disk year files
//!
//! These tests write synthetic `omni2_YYYY.dat` files into a temporary
//! directory and drive the full fetch, parse, filter, derive, summarize and
//! write path through the public API.

use omni_events::processor::ArtifactWriter;
use omni_events::{DirectorySource, EventCatalog, EventPipeline, OmniError, PipelineConfig};
use serde_json::Value;
use std::path::Path;
use tempfile::TempDir;

/// One synthetic 55-column OMNI2 line with quiet-time values
fn omni_line(year: i32, doy: u32, hour: u32, speed: &str, dst: &str, kp: &str) -> String {
    let mut tokens = vec!["0".to_string(); 55];
    tokens[0] = year.to_string();
    tokens[1] = doy.to_string();
    tokens[2] = hour.to_string();
    tokens[9] = "5.2".to_string();
    tokens[14] = "1.1".to_string();
    tokens[15] = "-2.3".to_string();
    tokens[16] = "1.5".to_string();
    tokens[22] = "95000.".to_string();
    tokens[23] = "5.0".to_string();
    tokens[24] = speed.to_string();
    tokens[38] = kp.to_string();
    tokens[40] = dst.to_string();
    tokens.join(" ")
}

fn write_year(dir: &Path, year: i32, lines: &[String]) {
    std::fs::write(dir.join(format!("omni2_{}.dat", year)), lines.join("\n")).unwrap();
}

fn config(source: &TempDir, output: &TempDir) -> PipelineConfig {
    PipelineConfig::default()
        .with_source_dir(source.path().to_path_buf())
        .with_output_dir(output.path().to_path_buf())
        .with_max_concurrent_years(2)
        .with_fetch_timeout_secs(5)
}

/// Halloween 2003 from a year file with a storm hour and sentinel-filled hours
///
/// Purpose: Validate day bounds, sentinel handling and storm classification end to end
/// Benefit: Catches column or sentinel drift that unit tests with builders could miss
#[tokio::test]
async fn test_halloween_from_directory() {
    let source_dir = TempDir::new().unwrap();
    let output_dir = TempDir::new().unwrap();

    let mut lines = Vec::new();
    for doy in 300..=307 {
        for hour in 0..24 {
            lines.push(omni_line(2003, doy, hour, "450.", "-20", "20"));
        }
    }
    // 2003-10-29 06:00 (doy 302): extreme storm hour
    lines[2 * 24 + 6] = omni_line(2003, 302, 6, "1850.", "-383", "90");
    // 2003-10-29 07:00: speed and Dst missing
    lines[2 * 24 + 7] = omni_line(2003, 302, 7, "9999.", "99999", "99");
    write_year(source_dir.path(), 2003, &lines);

    let config = config(&source_dir, &output_dir);
    let writer = ArtifactWriter::new(&config);
    let pipeline = EventPipeline::new(DirectorySource::new(source_dir.path()), config).unwrap();
    let catalog = EventCatalog::builtin().unwrap();

    let run = pipeline.run_event(&catalog, "halloween2003").await.unwrap();

    assert_eq!(run.dataset.record_count(), 6 * 24);
    assert_eq!(run.stats.years_fetched, 1);
    assert!(run.stats.years_failed.is_empty());

    let summary = &run.dataset.summary;
    let solar_wind = summary.solar_wind.as_ref().unwrap();
    let geomagnetic = summary.geomagnetic.as_ref().unwrap();
    assert_eq!(solar_wind.max_speed, Some(1850.0));
    assert_eq!(solar_wind.min_speed, Some(450.0));
    assert_eq!(geomagnetic.min_dst, Some(-383.0));
    assert_eq!(geomagnetic.max_storm_level.value(), 5);

    let missing = run
        .dataset
        .data
        .iter()
        .find(|r| r.timestamp.to_string() == "2003-10-29 07:00:00")
        .unwrap();
    assert_eq!(missing.solar_wind.speed, None);
    assert_eq!(missing.solar_wind.pressure, None);
    assert_eq!(missing.geomagnetic.dst, None);
    assert_eq!(missing.geomagnetic.kp, None);
    assert_eq!(missing.geomagnetic.storm_level.value(), 0);
    assert_eq!(missing.magnetosphere.standoff_re, 10.0);

    let artifact = writer.write(&run.id, &run.dataset).unwrap();
    let doc: Value =
        serde_json::from_str(&std::fs::read_to_string(&artifact.json_path).unwrap()).unwrap();
    assert_eq!(doc["event_info"]["name"], "Halloween Solar Storms 2003");
    assert_eq!(doc["data"].as_array().unwrap().len(), 144);
    assert_eq!(doc["summary"]["time_range"]["start"], "2003-10-28T00:00:00");
    assert_eq!(doc["summary"]["time_range"]["end"], "2003-11-02T23:00:00");
}

/// Range crossing a year boundary with the second year file absent
///
/// Purpose: Validate per-year failure recovery against the filesystem
/// Benefit: A missing year file must not lose the data of the years that exist
#[tokio::test]
async fn test_missing_year_file_is_skipped() {
    let source_dir = TempDir::new().unwrap();
    let output_dir = TempDir::new().unwrap();

    let lines: Vec<String> = (0..24)
        .map(|hour| omni_line(2024, 366, hour, "400.", "-10", "10"))
        .collect();
    write_year(source_dir.path(), 2024, &lines);

    let pipeline = EventPipeline::new(
        DirectorySource::new(source_dir.path()),
        config(&source_dir, &output_dir),
    )
    .unwrap();
    let start = chrono::NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();

    let run = pipeline.run_custom(start, 30).await.unwrap();

    assert_eq!(run.id, "custom_20241231");
    assert_eq!(run.dataset.record_count(), 24);
    assert_eq!(run.stats.years_failed, vec![2025]);
}

/// Event whose year file is absent entirely
///
/// Purpose: Validate the "no data" outcome and its artifact
/// Benefit: Empty runs still produce a well-formed artifact with `"summary": {}`
#[tokio::test]
async fn test_no_data_writes_empty_summary() {
    let source_dir = TempDir::new().unwrap();
    let output_dir = TempDir::new().unwrap();

    let config = config(&source_dir, &output_dir);
    let writer = ArtifactWriter::new(&config);
    let pipeline = EventPipeline::new(DirectorySource::new(source_dir.path()), config).unwrap();
    let catalog = EventCatalog::builtin().unwrap();

    let run = pipeline.run_event(&catalog, "march1989").await.unwrap();
    assert!(!run.dataset.has_data());
    assert!(run.stats.all_years_failed());

    let artifact = writer.write(&run.id, &run.dataset).unwrap();
    let text = std::fs::read_to_string(&artifact.json_path).unwrap();
    let doc: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(doc["summary"], Value::Object(Default::default()));
    assert_eq!(doc["event_info"]["id"], "march1989");
}

#[tokio::test]
async fn test_unknown_event() {
    let source_dir = TempDir::new().unwrap();
    let output_dir = TempDir::new().unwrap();
    let pipeline = EventPipeline::new(
        DirectorySource::new(source_dir.path()),
        config(&source_dir, &output_dir),
    )
    .unwrap();

    let err = pipeline
        .run_event(&EventCatalog::builtin().unwrap(), "carrington1859")
        .await
        .unwrap_err();
    assert!(matches!(err, OmniError::UnknownEvent { ref id } if id == "carrington1859"));
}
