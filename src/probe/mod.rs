//! Media probing module
//!
//! Reads duration metadata by scraping the diagnostic output of the
//! external ffmpeg executable.

use serde::{Deserialize, Serialize};

pub mod inspector;

pub use inspector::DurationProbe;

/// Basic information about a media file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaInfo {
    /// Path to the media file
    pub path: String,
    /// Total duration in seconds
    pub duration_seconds: f64,
    /// File size in bytes
    pub file_size: u64,
}
