//! Error handling module for SplitX

use thiserror::Error;

/// Main error type for SplitX operations
#[derive(Error, Debug)]
pub enum SplitXError {
    /// Invalid arguments provided
    #[error("Bad arguments: {message}")]
    BadArgs { message: String },

    /// Input file not found or inaccessible
    #[error("Input file not found: {path}")]
    InputFileNotFound { path: String },

    /// External tool could not be launched
    #[error("Failed to launch {tool}: {message}")]
    ToolLaunchError { tool: String, message: String },

    /// Duration could not be read from the tool's output
    #[error("Could not determine video duration: {message}")]
    DurationUnavailable { message: String },

    /// Invalid timestamp format
    #[error("Invalid timestamp: {stamp}. Expected HH:MM:SS.cc")]
    InvalidTimestamp { stamp: String },

    /// Segment plan validation error
    #[error("Invalid segment plan: {message}")]
    InvalidPlan { message: String },

    /// A segment transcode failed
    #[error("Segment {index} failed: {message}")]
    SegmentFailed { index: usize, message: String },

    /// Output file or directory error
    #[error("Failed to write output: {message}")]
    OutputError { message: String },

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for SplitX operations
pub type SplitXResult<T> = std::result::Result<T, SplitXError>;
