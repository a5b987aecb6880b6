//! Core splitting engine module

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

pub mod progress;
pub mod splitter;

pub use progress::{
    ConsoleProgressCallback, JsonProgressCallback, NoOpProgressCallback, ProgressCallback,
    ProgressTracker, SplitPhase,
};
pub use splitter::VideoSplitter;

use crate::output::OverwritePolicy;

/// Splitting engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Input file path
    pub input_path: String,
    /// Output directory
    pub output_dir: String,
    /// Output filename prefix
    pub prefix: String,
    /// Video codec
    pub video_codec: String,
    /// Audio codec
    pub audio_codec: String,
    /// CRF quality setting
    pub crf: u8,
    /// Encoding preset
    pub preset: String,
    /// Encoder thread count
    pub thread_count: usize,
    /// ffmpeg executable to invoke
    pub ffmpeg_path: String,
    /// Behavior for existing output files
    pub overwrite: OverwritePolicy,
}

impl EngineConfig {
    /// Create a configuration with the default encoding settings
    pub fn new(input_path: impl Into<String>, output_dir: impl Into<String>) -> Self {
        Self {
            input_path: input_path.into(),
            output_dir: output_dir.into(),
            prefix: "short".to_string(),
            video_codec: "libx264".to_string(),
            audio_codec: "aac".to_string(),
            crf: 23,
            preset: "medium".to_string(),
            thread_count: num_cpus::get(),
            ffmpeg_path: "ffmpeg".to_string(),
            overwrite: OverwritePolicy::Prompt,
        }
    }
}

/// Result of a completed split run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitReport {
    /// Output files in playback order
    pub clips: Vec<PathBuf>,
    /// Total duration of the source in seconds
    pub total_duration: f64,
    /// Clip duration used for the windows
    pub clip_duration: f64,
    /// Wall-clock time spent splitting
    pub processing_time: Duration,
}

impl SplitReport {
    /// Number of clips written
    pub fn clip_count(&self) -> usize {
        self.clips.len()
    }
}
