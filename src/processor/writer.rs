//! Artifact output for processed events
//!
//! Writes the `{event_info, data, summary, generated_at}` JSON document and,
//! optionally, a flattened Parquet table of the hourly records.

use crate::config::PipelineConfig;
use crate::error::{OmniError, Result};
use crate::models::{EventDataset, ProcessedRecord};

use polars::prelude::{
    Column, DataFrame, NamedFrom, ParquetCompression, ParquetWriter as PolarsParquetWriter, Series,
};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Files produced for one event
#[derive(Debug, Clone, PartialEq)]
pub struct WrittenArtifact {
    pub json_path: PathBuf,
    pub parquet_path: Option<PathBuf>,
}

/// Writes event artifacts into the configured output directory
#[derive(Debug, Clone)]
pub struct ArtifactWriter {
    output_dir: PathBuf,
    write_parquet: bool,
}

impl ArtifactWriter {
    pub fn new(config: &PipelineConfig) -> Self {
        Self {
            output_dir: config.output_dir.clone(),
            write_parquet: config.write_parquet,
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Write `<id>.json` (and `<id>.parquet` when enabled)
    pub fn write(&self, id: &str, dataset: &EventDataset) -> Result<WrittenArtifact> {
        fs::create_dir_all(&self.output_dir)?;

        let json_path = self.output_dir.join(format!("{}.json", id));
        self.write_json(&json_path, dataset)?;
        info!("Saved: {}", json_path.display());

        let parquet_path = if self.write_parquet {
            let path = self.output_dir.join(format!("{}.parquet", id));
            write_parquet(&path, &dataset.data)?;
            info!("Saved: {}", path.display());
            Some(path)
        } else {
            None
        };

        Ok(WrittenArtifact {
            json_path,
            parquet_path,
        })
    }

    /// Pretty-printed with two-space indentation
    fn write_json(&self, path: &Path, dataset: &EventDataset) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, dataset)?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        debug!(
            "Wrote {} records to {}",
            dataset.record_count(),
            path.display()
        );
        Ok(())
    }
}

/// Flatten processed records into one row per hour
pub fn records_to_dataframe(records: &[ProcessedRecord]) -> Result<DataFrame> {
    fn column(name: &str, values: Vec<Option<f64>>) -> Column {
        Series::new(name.into(), values).into()
    }

    let timestamps: Vec<_> = records.iter().map(|r| r.timestamp).collect();
    let storm_levels: Vec<i32> = records
        .iter()
        .map(|r| i32::from(r.geomagnetic.storm_level.value()))
        .collect();
    let standoff: Vec<f64> = records
        .iter()
        .map(|r| r.magnetosphere.standoff_re)
        .collect();

    let df = DataFrame::new(vec![
        Series::new("timestamp".into(), timestamps).into(),
        column("speed", records.iter().map(|r| r.solar_wind.speed).collect()),
        column("density", records.iter().map(|r| r.solar_wind.density).collect()),
        column(
            "temperature",
            records.iter().map(|r| r.solar_wind.temperature).collect(),
        ),
        column("pressure", records.iter().map(|r| r.solar_wind.pressure).collect()),
        column("imf_magnitude", records.iter().map(|r| r.imf.magnitude).collect()),
        column("bx", records.iter().map(|r| r.imf.bx).collect()),
        column("by", records.iter().map(|r| r.imf.by).collect()),
        column("bz", records.iter().map(|r| r.imf.bz).collect()),
        column("dst", records.iter().map(|r| r.geomagnetic.dst).collect()),
        column("kp", records.iter().map(|r| r.geomagnetic.kp).collect()),
        Series::new("storm_level".into(), storm_levels).into(),
        Series::new("standoff_re".into(), standoff).into(),
    ])?;

    Ok(df)
}

/// Write the flattened table with Snappy compression
pub fn write_parquet(path: &Path, records: &[ProcessedRecord]) -> Result<()> {
    let mut df = records_to_dataframe(records)?;
    let file = File::create(path)?;

    PolarsParquetWriter::new(file)
        .with_compression(ParquetCompression::Snappy)
        .finish(&mut df)
        .map_err(|e| OmniError::OutputFailed {
            path: path.to_path_buf(),
            reason: format!("Failed to write parquet: {}", e),
        })?;

    debug!("Wrote {} rows to {}", df.height(), path.display());
    Ok(())
}
