//! Event processing pipeline.
//!
//! Orchestrates the OMNI event workflow using specialized modules for
//! yearly source access, date filtering, per-record derivation, summary
//! aggregation, and artifact writing.

pub mod date_filter;
pub mod derivation;
pub mod source;
pub mod stats;
pub mod summary;
pub mod writer;

#[cfg(test)]
pub mod tests;

pub use self::{
    date_filter::DateRange,
    derivation::derive_record,
    source::{DirectorySource, MemorySource, YearSource},
    stats::PipelineStats,
    summary::summarize,
    writer::{ArtifactWriter, WrittenArtifact},
};

use crate::catalog::EventCatalog;
use crate::config::PipelineConfig;
use crate::error::{OmniError, Result};
use crate::models::{EventDataset, EventDescriptor, ProcessedRecord};
use crate::parser::RecordParser;

use chrono::{NaiveDate, Utc};
use futures::stream::{self, StreamExt};
use tracing::{debug, info, warn};

/// Result of processing one event or date range
#[derive(Debug, Clone)]
pub struct EventRun {
    /// Artifact id: the catalog id, or `custom_YYYYMMDD`
    pub id: String,
    pub dataset: EventDataset,
    pub stats: PipelineStats,
}

/// Main pipeline: source -> parser -> date filter -> derivation -> summary
#[derive(Debug)]
pub struct EventPipeline<S: YearSource> {
    source: S,
    parser: RecordParser,
    config: PipelineConfig,
}

impl<S: YearSource> EventPipeline<S> {
    /// Create a pipeline over `source` with the standard OMNI2 schema
    pub fn new(source: S, config: PipelineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            source,
            parser: RecordParser::new()?,
            config,
        })
    }

    /// Fetch every year of `range` and produce its processed records in
    /// chronological order. Failed years contribute nothing.
    pub async fn collect_records(
        &self,
        range: &DateRange,
    ) -> (Vec<ProcessedRecord>, PipelineStats) {
        let mut stats = PipelineStats::new();
        let years: Vec<i32> = range.years().collect();
        stats.years_requested = years.len();

        debug!(
            "Fetching {} year(s) from {} for {}",
            years.len(),
            self.source.describe(),
            range
        );

        let timeout = self.config.fetch_timeout();
        // buffered() yields in input order, so partitions stay year-ascending
        let partitions: Vec<(i32, Result<Vec<String>>)> = stream::iter(years)
            .map(|year| async move {
                let fetched = match tokio::time::timeout(timeout, self.source.fetch_year(year)).await
                {
                    Ok(result) => result,
                    Err(_) => Err(OmniError::source_fetch(
                        year,
                        format!("timed out after {}s", timeout.as_secs()),
                    )),
                };
                (year, fetched)
            })
            .buffered(self.config.max_concurrent_years)
            .collect()
            .await;

        let mut records = Vec::new();
        for (year, fetched) in partitions {
            match fetched {
                Ok(lines) => {
                    stats.years_fetched += 1;
                    let before = records.len();
                    records.extend(process_partition(&self.parser, &lines, range, &mut stats));
                    debug!(
                        "Year {}: {} lines -> {} records",
                        year,
                        lines.len(),
                        records.len() - before
                    );
                }
                Err(e) => {
                    warn!("Skipping year {}: {}", year, e);
                    stats.add_failed_year(year);
                }
            }
        }

        stats.records_produced = records.len();
        if stats.all_years_failed() {
            warn!("No data: every requested year failed for {}", range);
        }
        (records, stats)
    }

    /// Process an inclusive date range, optionally tagged with an event
    pub async fn run_range(
        &self,
        id: impl Into<String>,
        range: DateRange,
        event_info: Option<EventDescriptor>,
    ) -> EventRun {
        let id = id.into();
        let (data, stats) = self.collect_records(&range).await;
        let summary = summarize(&data);

        info!("{}: {}", id, stats.summary());

        EventRun {
            id,
            dataset: EventDataset {
                event_info,
                data,
                summary,
                generated_at: Utc::now(),
            },
            stats,
        }
    }

    /// Process one catalog event
    pub async fn run_event(&self, catalog: &EventCatalog, id: &str) -> Result<EventRun> {
        let event = catalog.get(id)?.clone();
        let range = DateRange::new(event.start, event.end)?;

        info!("Processing {} ({})", event.name, range);
        Ok(self.run_range(event.id.clone(), range, Some(event)).await)
    }

    /// Process `hours` hours starting at midnight of `start`
    pub async fn run_custom(&self, start: NaiveDate, hours: u32) -> Result<EventRun> {
        let range = DateRange::from_start_and_hours(start, hours)?;
        let id = custom_event_id(start);

        info!("Processing {} + {} hours ({})", start, hours, range);
        Ok(self.run_range(id, range, None).await)
    }

    /// Process every catalog event in catalog order
    pub async fn run_all(&self, catalog: &EventCatalog) -> Vec<EventRun> {
        let mut runs = Vec::with_capacity(catalog.len());
        for event in catalog.iter() {
            match self.run_event(catalog, &event.id).await {
                Ok(run) => runs.push(run),
                Err(e) => warn!("Skipping event {}: {}", event.id, e),
            }
        }
        runs
    }
}

/// Parse, filter and derive one yearly partition. Malformed lines and
/// records without a timestamp are counted and dropped.
pub fn process_partition(
    parser: &RecordParser,
    lines: &[String],
    range: &DateRange,
    stats: &mut PipelineStats,
) -> Vec<ProcessedRecord> {
    let mut processed = Vec::new();

    for line in lines {
        stats.lines_read += 1;
        if line.trim().is_empty() {
            stats.blank_lines += 1;
            continue;
        }

        let record = match parser.parse_line(line) {
            Ok(record) => record,
            Err(e) => {
                debug!("Dropping line: {}", e);
                stats.malformed_lines += 1;
                continue;
            }
        };

        if !range.contains_record(&record) {
            stats.out_of_range += 1;
            continue;
        }

        match derive_record(&record) {
            Ok(derived) => processed.push(derived),
            Err(e) => {
                debug!("Dropping record: {}", e);
                stats.incomplete_timestamps += 1;
            }
        }
    }

    processed
}

/// Artifact id of an ad-hoc range, e.g. `custom_20241003`
pub fn custom_event_id(start: NaiveDate) -> String {
    format!("custom_{}", start.format("%Y%m%d"))
}
