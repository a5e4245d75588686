//! Configuration management and validation.
//!
//! Provides the pipeline configuration: where yearly OMNI files are read
//! from, where artifacts are written, and how year fetches are scheduled.

use crate::constants::{
    APP_DATA_DIR_NAME, DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_OUTPUT_DIR, MAX_CONCURRENT_YEARS,
};
use crate::error::{OmniError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

/// Global configuration for OMNI event processing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Directory holding `omni2_YYYY.dat` files
    pub source_dir: PathBuf,

    /// Directory for generated event artifacts
    pub output_dir: PathBuf,

    /// Maximum number of years fetched concurrently
    pub max_concurrent_years: usize,

    /// Timeout for a single year fetch, in seconds
    pub fetch_timeout_secs: u64,

    /// Also write a flattened Parquet table next to each JSON artifact
    pub write_parquet: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            source_dir: default_source_dir(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            max_concurrent_years: num_cpus::get().clamp(1, MAX_CONCURRENT_YEARS),
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
            write_parquet: false,
        }
    }
}

impl PipelineConfig {
    /// Set the OMNI source directory
    pub fn with_source_dir(mut self, source_dir: PathBuf) -> Self {
        self.source_dir = source_dir;
        self
    }

    /// Set the artifact output directory
    pub fn with_output_dir(mut self, output_dir: PathBuf) -> Self {
        self.output_dir = output_dir;
        self
    }

    /// Set the number of concurrently fetched years
    pub fn with_max_concurrent_years(mut self, years: usize) -> Self {
        self.max_concurrent_years = years;
        self
    }

    /// Set the per-year fetch timeout
    pub fn with_fetch_timeout_secs(mut self, secs: u64) -> Self {
        self.fetch_timeout_secs = secs;
        self
    }

    /// Enable Parquet output
    pub fn with_parquet(mut self) -> Self {
        self.write_parquet = true;
        self
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.max_concurrent_years == 0 {
            return Err(OmniError::configuration(
                "max_concurrent_years must be at least 1",
            ));
        }
        if self.fetch_timeout_secs == 0 {
            return Err(OmniError::configuration(
                "fetch_timeout_secs must be at least 1",
            ));
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(OmniError::configuration("output_dir must not be empty"));
        }

        debug!(
            "Configuration: source={}, output={}, concurrency={}, timeout={}s",
            self.source_dir.display(),
            self.output_dir.display(),
            self.max_concurrent_years,
            self.fetch_timeout_secs
        );
        Ok(())
    }
}

/// `<user data dir>/omni-events/omni2`, or `./omni2` when no data dir exists
pub fn default_source_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DATA_DIR_NAME).join("omni2"))
        .unwrap_or_else(|| PathBuf::from("omni2"))
}
