//! Shared components for CLI commands

use crate::catalog::EventCatalog;
use crate::cli::args::Args;
use crate::processor::{EventRun, WrittenArtifact};
use anyhow::{Context, Result};
use colored::*;
use tracing::debug;

/// Set up structured logging on stderr; `RUST_LOG` overrides `level`
pub fn setup_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("omni_events={}", level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    debug!("Logging initialized at level: {}", level);
}

/// The `--catalog` file when given, otherwise the built-in catalog
pub fn load_catalog(args: &Args) -> Result<EventCatalog> {
    match &args.catalog {
        Some(path) => EventCatalog::from_json_file(path)
            .with_context(|| format!("Failed to load event catalog {}", path.display())),
        None => EventCatalog::builtin().context("Failed to load built-in event catalog"),
    }
}

/// Print the outcome of one run
pub fn report_run(run: &EventRun, artifact: &WrittenArtifact) {
    let title = run
        .dataset
        .event_info
        .as_ref()
        .map(|event| event.name.clone())
        .unwrap_or_else(|| run.id.clone());

    println!("{}", title.bright_green().bold());

    if !run.dataset.has_data() {
        println!("  {}", "No data for this range".yellow());
        if !run.stats.years_failed.is_empty() {
            println!(
                "  {} {}",
                "Unavailable years:".yellow(),
                format_years(&run.stats.years_failed)
            );
        }
    } else {
        println!(
            "  {} {}",
            "Records:".bright_white(),
            run.dataset.record_count().to_string().bright_cyan()
        );

        let summary = &run.dataset.summary;
        let max_speed = summary.solar_wind.as_ref().and_then(|sw| sw.max_speed);
        let min_dst = summary.geomagnetic.as_ref().and_then(|geo| geo.min_dst);
        println!(
            "  {} {}",
            "Max solar wind speed:".bright_white(),
            format_measurement(max_speed, "km/s")
        );
        println!(
            "  {} {}",
            "Min Dst:".bright_white(),
            format_measurement(min_dst, "nT")
        );
        if let Some(geo) = &summary.geomagnetic {
            println!(
                "  {} {}",
                "Peak storm level:".bright_white(),
                geo.max_storm_level.to_string().bright_red()
            );
        }
    }

    println!(
        "  {} {}",
        "Saved:".bright_white(),
        artifact.json_path.display().to_string().bright_black()
    );
    if let Some(parquet_path) = &artifact.parquet_path {
        println!(
            "  {} {}",
            "Saved:".bright_white(),
            parquet_path.display().to_string().bright_black()
        );
    }
}

/// `123.4 unit`, or `n/a`
pub fn format_measurement(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(value) => format!("{:.1} {}", value, unit),
        None => "n/a".to_string(),
    }
}

fn format_years(years: &[i32]) -> String {
    years
        .iter()
        .map(|year| year.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
