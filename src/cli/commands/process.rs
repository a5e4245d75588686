//! Event processing commands: `event`, `all` and `range`

use crate::catalog::EventCatalog;
use crate::cli::args::Args;
use crate::cli::commands::shared::{load_catalog, report_run};
use crate::config::PipelineConfig;
use crate::error::OmniError;
use crate::processor::date_filter::parse_date;
use crate::processor::{ArtifactWriter, DirectorySource, EventPipeline, EventRun, PipelineStats};
use anyhow::{Context, Result};
use colored::*;
use tracing::{info, warn};

/// Process one catalogued event
pub async fn run_event(args: &Args, id: &str) -> Result<()> {
    let catalog = load_catalog(args)?;
    let (pipeline, writer) = build_pipeline(args.to_config())?;

    let run = match pipeline.run_event(&catalog, id).await {
        Ok(run) => run,
        Err(err @ OmniError::UnknownEvent { .. }) => {
            eprintln!("{}", available_events_hint(&catalog).yellow());
            return Err(err).context("Unknown event id");
        }
        Err(err) => return Err(err).with_context(|| format!("Failed to process {}", id)),
    };

    save_and_report(&writer, &run)
}

/// Process every catalogued event. An artifact that fails to save does not
/// stop the remaining events from being saved.
pub async fn run_all(args: &Args) -> Result<()> {
    let catalog = load_catalog(args)?;
    let (pipeline, writer) = build_pipeline(args.to_config())?;

    info!("Processing {} catalogued events", catalog.len());
    let runs = pipeline.run_all(&catalog).await;

    let mut failed = 0;
    for run in &runs {
        if let Err(e) = save_and_report(&writer, run) {
            warn!("{:#}", e);
            failed += 1;
        }
        println!();
    }

    report_totals(&catalog, &runs);
    if failed > 0 {
        anyhow::bail!("Failed to save {} of {} event artifacts", failed, runs.len());
    }
    Ok(())
}

/// Process `hours` hours from midnight of `date`
pub async fn run_range(args: &Args, date: &str, hours: u32) -> Result<()> {
    let start = parse_date(date).context("Invalid --date")?;
    let (pipeline, writer) = build_pipeline(args.to_config())?;

    let run = pipeline
        .run_custom(start, hours)
        .await
        .with_context(|| format!("Failed to process {} + {} hours", start, hours))?;

    save_and_report(&writer, &run)
}

fn build_pipeline(config: PipelineConfig) -> Result<(EventPipeline<DirectorySource>, ArtifactWriter)> {
    let source = DirectorySource::new(&config.source_dir);
    if !source.root().exists() {
        warn!(
            "Source directory {} does not exist; every year will be unavailable",
            source.root().display()
        );
    }

    let writer = ArtifactWriter::new(&config);
    let pipeline = EventPipeline::new(source, config).context("Invalid configuration")?;
    Ok((pipeline, writer))
}

fn save_and_report(writer: &ArtifactWriter, run: &EventRun) -> Result<()> {
    let artifact = writer
        .write(&run.id, &run.dataset)
        .with_context(|| format!("Failed to save {} to {}", run.id, writer.output_dir().display()))?;

    report_run(run, &artifact);
    Ok(())
}

fn available_events_hint(catalog: &EventCatalog) -> String {
    format!(
        "Available events: {} (run `omni-events list` for details)",
        catalog.ids().join(", ")
    )
}

fn report_totals(catalog: &EventCatalog, runs: &[EventRun]) {
    let with_data = runs.iter().filter(|run| run.dataset.has_data()).count();
    let records: usize = runs.iter().map(|run| run.dataset.record_count()).sum();

    let mut totals = PipelineStats::new();
    for run in runs {
        totals.merge(&run.stats);
    }
    info!("All events: {}", totals.summary());

    println!(
        "{} {}/{} events with data, {} hourly records",
        "Done:".bright_green().bold(),
        with_data,
        catalog.len(),
        records
    );
}
