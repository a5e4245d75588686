//! Command-line argument definitions for omni-events
//!
//! Global options configure where OMNI2 year files are read from and where
//! event artifacts go; subcommands pick which events to process.

use crate::config::PipelineConfig;
use crate::constants::DEFAULT_RANGE_HOURS;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Process historical space-weather events from NASA OMNI2 hourly data
#[derive(Debug, Clone, Parser)]
#[command(
    name = "omni-events",
    version,
    about = "Extract historical space-weather events from OMNI2 hourly data",
    long_about = "Reads yearly OMNI2 hourly files, keeps the hours of a catalogued event or an \
                  ad-hoc date range, derives dynamic pressure, storm level and magnetopause \
                  standoff distance, and writes one visualization-ready JSON artifact per event."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding omni2_YYYY.dat files
    ///
    /// Defaults to <user data dir>/omni-events/omni2
    #[arg(long = "source-dir", value_name = "PATH", global = true)]
    pub source_dir: Option<PathBuf>,

    /// Directory for generated event artifacts
    #[arg(short = 'o', long = "output-dir", value_name = "PATH", global = true)]
    pub output_dir: Option<PathBuf>,

    /// JSON event catalog replacing the built-in one
    #[arg(long = "catalog", value_name = "FILE", global = true)]
    pub catalog: Option<PathBuf>,

    /// Also write a flattened Parquet table per event
    #[arg(long = "parquet", global = true)]
    pub parquet: bool,

    /// Maximum number of years fetched concurrently
    #[arg(long = "max-concurrent-years", value_name = "N", global = true)]
    pub max_concurrent_years: Option<usize>,

    /// Per-year fetch timeout in seconds
    #[arg(long = "fetch-timeout-secs", value_name = "SECS", global = true)]
    pub fetch_timeout_secs: Option<u64>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Only show errors
    #[arg(short = 'q', long = "quiet", global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// List catalogued events and locally available years
    List,
    /// Process one catalogued event
    Event {
        /// Event id, e.g. halloween2003
        id: String,
    },
    /// Process every catalogued event
    All,
    /// Process an ad-hoc range starting at midnight of a date
    Range(RangeArgs),
}

#[derive(Debug, Clone, Parser)]
pub struct RangeArgs {
    /// Start date (YYYY-MM-DD)
    #[arg(long = "date", value_name = "YYYY-MM-DD")]
    pub date: String,

    /// Number of hours to cover
    #[arg(long = "hours", default_value_t = DEFAULT_RANGE_HOURS)]
    pub hours: u32,
}

impl Args {
    /// Map verbosity flags to a tracing level
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Build the pipeline configuration from defaults plus CLI overrides
    pub fn to_config(&self) -> PipelineConfig {
        let mut config = PipelineConfig::default();

        if let Some(source_dir) = &self.source_dir {
            config = config.with_source_dir(source_dir.clone());
        }
        if let Some(output_dir) = &self.output_dir {
            config = config.with_output_dir(output_dir.clone());
        }
        if let Some(years) = self.max_concurrent_years {
            config = config.with_max_concurrent_years(years);
        }
        if let Some(secs) = self.fetch_timeout_secs {
            config = config.with_fetch_timeout_secs(secs);
        }
        if self.parquet {
            config = config.with_parquet();
        }
        config
    }
}
