//! SplitX CLI Video Splitter
//!
//! A command-line tool that splits a video into sequential fixed-length
//! clips using the external ffmpeg executable.
//!
//! # Usage
//!
//! ```bash
//! splitter split --input "video.mp4" --duration 60
//! splitter inspect --input "video.mp4"
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::info;

use splitx_cli::cli::{commands, Cli, Commands};
use splitx_cli::output::OverwritePolicy;

/// Main entry point for the SplitX CLI application
fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging (environment filter wins over --log-level)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level)),
        )
        .init();

    info!("Starting SplitX CLI Video Splitter");

    let overwrite = OverwritePolicy::parse(&cli.overwrite)?;

    // Execute the requested command
    match cli.command {
        Commands::Split(args) => {
            info!("Executing split command");
            commands::split(args, overwrite)?;
        }
        Commands::Inspect(args) => {
            info!("Executing inspect command");
            commands::inspect(args)?;
        }
    }

    info!("SplitX CLI completed successfully");
    Ok(())
}
