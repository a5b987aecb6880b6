//! Fixed-window video splitter implementation

use std::path::Path;
use std::process::Command;
use std::time::Instant;
use tracing::{error, info, warn};

use crate::engine::{EngineConfig, ProgressTracker, SplitPhase, SplitReport};
use crate::error::{SplitXError, SplitXResult};
use crate::output::SegmentWriter;
use crate::planner::{Segment, SegmentPlan};

/// Splits a source video into sequential fixed-length clips
///
/// Issues one blocking ffmpeg invocation per planned segment and
/// reports progress between invocations.
pub struct VideoSplitter;

impl VideoSplitter {
    /// Create a new video splitter
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self
    }

    /// Execute the split plan
    pub fn split(
        &self,
        config: &EngineConfig,
        plan: &SegmentPlan,
        tracker: &ProgressTracker,
    ) -> SplitXResult<SplitReport> {
        let start_time = Instant::now();
        let total = plan.segment_count();

        info!("Starting split operation");
        info!("Input: {}", config.input_path);
        info!("Output directory: {}", config.output_dir);
        info!(
            "Clip duration: {:.0}s, total duration: {:.2}s, segments: {}",
            plan.clip_duration, plan.total_duration, total
        );

        let writer = SegmentWriter::new(&config.output_dir, config.prefix.as_str())
            .with_overwrite(config.overwrite);
        writer.ensure_dir()?;

        let existing = writer.existing_segments();
        if !existing.is_empty() {
            warn!(
                "Output directory already contains {} '{}_*' files",
                existing.len(),
                config.prefix
            );
        }

        tracker.start("Splitting video", Some(total as u64));
        tracker.set_phase(SplitPhase::Encoding, None);

        let mut clips = Vec::with_capacity(total);
        for segment in &plan.segments {
            let output_path = writer.segment_path(segment.index);
            writer.check_overwrite(&output_path)?;

            if let Err(e) = self.run_segment(config, segment, &output_path) {
                error!("Error splitting clip {}: {}", segment.index + 1, e);
                tracker.error(&e.to_string());
                return Err(e);
            }

            clips.push(output_path);
            tracker.update(
                (segment.index + 1) as u64,
                Some(format!("clip {} of {}", segment.index + 1, total)),
            );
        }

        let processing_time = start_time.elapsed();
        info!(
            "Split completed: {} clips in {:.2}s",
            clips.len(),
            processing_time.as_secs_f64()
        );
        tracker.complete(Some(format!("Successfully created {} clips!", clips.len())));

        Ok(SplitReport {
            clips,
            total_duration: plan.total_duration,
            clip_duration: plan.clip_duration,
            processing_time,
        })
    }

    /// Run the transcode invocation for one segment
    fn run_segment(
        &self,
        config: &EngineConfig,
        segment: &Segment,
        output_path: &Path,
    ) -> SplitXResult<()> {
        let args = Self::segment_args(config, segment, output_path);
        info!(
            "Encoding clip {}: start {:.3}s, duration {:.3}s",
            segment.index + 1,
            segment.start_seconds,
            segment.duration_seconds
        );

        let output = Command::new(&config.ffmpeg_path)
            .args(&args)
            .output()
            .map_err(|e| SplitXError::ToolLaunchError {
                tool: config.ffmpeg_path.clone(),
                message: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SplitXError::SegmentFailed {
                index: segment.index + 1,
                message: stderr.trim().to_string(),
            });
        }

        Ok(())
    }

    /// Argument vector for one segment's ffmpeg invocation
    ///
    /// `-i` precedes `-ss` so the seek decodes from the start of the
    /// file and cuts are frame accurate.
    pub fn segment_args(config: &EngineConfig, segment: &Segment, output_path: &Path) -> Vec<String> {
        vec![
            "-hide_banner".to_string(),
            "-loglevel".to_string(),
            "error".to_string(),
            "-i".to_string(),
            config.input_path.clone(),
            "-ss".to_string(),
            format!("{:.3}", segment.start_seconds),
            "-t".to_string(),
            format!("{:.3}", segment.duration_seconds),
            "-c:v".to_string(),
            config.video_codec.clone(),
            "-crf".to_string(),
            config.crf.to_string(),
            "-preset".to_string(),
            config.preset.clone(),
            "-c:a".to_string(),
            config.audio_codec.clone(),
            "-threads".to_string(),
            config.thread_count.to_string(),
            "-y".to_string(),
            output_path.to_string_lossy().to_string(),
        ]
    }
}
