//! Command implementations for the omni-events CLI
//!
//! Each subcommand lives in its own module:
//! - `list`: catalog and local data overview
//! - `process`: event, catalog-wide and ad-hoc range processing

pub mod list;
pub mod process;
pub mod shared;

use crate::cli::args::{Args, Commands};
use anyhow::Result;

/// Dispatch to the selected subcommand
pub async fn run(args: Args) -> Result<()> {
    match &args.command {
        Commands::List => list::run_list(&args),
        Commands::Event { id } => process::run_event(&args, id).await,
        Commands::All => process::run_all(&args).await,
        Commands::Range(range) => process::run_range(&args, &range.date, range.hours).await,
    }
}
