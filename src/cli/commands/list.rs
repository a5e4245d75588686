//! `list`: show the event catalog and which OMNI2 years are available locally

use crate::cli::args::Args;
use crate::cli::commands::shared::load_catalog;
use crate::processor::DirectorySource;
use anyhow::{Context, Result};
use colored::*;

pub fn run_list(args: &Args) -> Result<()> {
    let catalog = load_catalog(args)?;
    let config = args.to_config();

    println!("{}", "Available events:".bright_green().bold());
    println!();
    for event in catalog.iter() {
        println!(
            "  {} {}",
            event.id.bright_yellow().bold(),
            format!("({} to {})", event.start, event.end).bright_black()
        );
        println!("    {}", event.name.bright_cyan());
        println!("    {}", event.description);
        println!(
            "    Peak flare: {} | Min Dst: {} nT",
            event.peak_flare, event.min_dst
        );
    }

    let source = DirectorySource::new(&config.source_dir);
    let years = source
        .available_years()
        .with_context(|| format!("Failed to scan {}", config.source_dir.display()))?;

    println!();
    if years.is_empty() {
        println!(
            "{} {}",
            "No OMNI2 year files found in".yellow(),
            config.source_dir.display()
        );
    } else {
        let listed: Vec<String> = years.iter().map(|year| year.to_string()).collect();
        println!(
            "{} {} ({})",
            "Local OMNI2 years:".bright_white(),
            listed.join(", "),
            config.source_dir.display().to_string().bright_black()
        );
    }

    Ok(())
}
