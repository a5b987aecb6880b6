//! CLI module for SplitX
//!
//! This module handles command-line argument parsing and command execution.

use clap::{Parser, Subcommand};

pub mod args;
pub mod commands;

/// SplitX CLI Video Splitter
///
/// A command-line tool that splits a video into sequential fixed-length
/// clips by driving the external ffmpeg executable.
#[derive(Parser)]
#[command(name = "splitter")]
#[command(about = "SplitX CLI Video Splitter - Fixed-length video splitting made simple")]
#[command(version)]
#[command(long_about = None)]
pub struct Cli {
    /// Logging level
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,

    /// Overwrite behavior (always, never, prompt)
    #[arg(long, default_value = "prompt", global = true)]
    pub overwrite: String,

    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Split a video into sequential fixed-length clips
    Split(args::SplitArgs),
    /// Inspect video file information
    Inspect(args::InspectArgs),
}
