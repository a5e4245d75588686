use clap::Parser;
use omni_events::cli::{args::Args, commands, commands::shared::setup_logging};
use std::process;

fn main() {
    let args = Args::parse();
    setup_logging(args.get_log_level());

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        tokio::select! {
            result = commands::run(args) => result,
            signal = tokio::signal::ctrl_c() => match signal {
                Ok(()) => {
                    eprintln!("\nReceived CTRL+C, shutting down...");
                    Err(anyhow::anyhow!("Processing interrupted by user"))
                }
                Err(e) => Err(anyhow::anyhow!("Failed to install CTRL+C handler: {}", e)),
            },
        }
    });

    if let Err(error) = result {
        eprintln!("Error: {:#}", error);
        process::exit(1);
    }
}
