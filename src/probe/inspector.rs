//! Duration probe implementation

use std::path::Path;
use std::process::Command;
use tracing::{debug, info};

use crate::error::{SplitXError, SplitXResult};
use crate::probe::MediaInfo;
use crate::utils::TimeParser;

/// Probes a media file for its total duration
///
/// Runs `ffmpeg -i <file>` with no output file and scrapes the
/// `Duration:` line from the metadata banner on stderr.
pub struct DurationProbe {
    ffmpeg_path: String,
}

impl DurationProbe {
    /// Create a probe that resolves `ffmpeg` on the execution path
    pub fn new() -> Self {
        Self {
            ffmpeg_path: "ffmpeg".to_string(),
        }
    }

    /// Use a specific ffmpeg executable
    pub fn with_ffmpeg_path(ffmpeg_path: impl Into<String>) -> Self {
        Self {
            ffmpeg_path: ffmpeg_path.into(),
        }
    }

    /// Probe a media file
    pub fn probe(&self, path: &str) -> SplitXResult<MediaInfo> {
        info!("Probing media file: {}", path);

        if !Path::new(path).exists() {
            return Err(SplitXError::InputFileNotFound {
                path: path.to_string(),
            });
        }

        let file_size = std::fs::metadata(path)?.len();

        // ffmpeg exits nonzero when no output file is given; the banner
        // on stderr still carries the metadata we need, so the exit
        // status is ignored here.
        let output = Command::new(&self.ffmpeg_path)
            .args(["-hide_banner", "-i", path])
            .output()
            .map_err(|e| SplitXError::ToolLaunchError {
                tool: self.ffmpeg_path.clone(),
                message: e.to_string(),
            })?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        debug!("ffmpeg banner: {} bytes of stderr", stderr.len());

        let duration_seconds = Self::scrape_duration(&stderr)?;
        info!("Probed duration: {:.2}s", duration_seconds);

        Ok(MediaInfo {
            path: path.to_string(),
            duration_seconds,
            file_size,
        })
    }

    /// Extract the duration from ffmpeg's metadata banner
    ///
    /// The banner contains a line of the form
    /// `  Duration: 00:01:30.05, start: 0.000000, bitrate: 1205 kb/s`.
    pub fn scrape_duration(banner: &str) -> SplitXResult<f64> {
        let parser = TimeParser::new();

        for line in banner.lines() {
            if let Some(rest) = line.trim_start().strip_prefix("Duration:") {
                let stamp = rest.split(',').next().unwrap_or(rest).trim();

                if stamp == "N/A" {
                    return Err(SplitXError::DurationUnavailable {
                        message: "ffmpeg reported Duration: N/A".to_string(),
                    });
                }

                return parser.parse_timestamp(stamp);
            }
        }

        Err(SplitXError::DurationUnavailable {
            message: "no Duration line in ffmpeg output".to_string(),
        })
    }
}

impl Default for DurationProbe {
    fn default() -> Self {
        Self::new()
    }
}
