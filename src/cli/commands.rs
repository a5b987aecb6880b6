//! Command implementations

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use crate::cli::args::{InspectArgs, SplitArgs};
use crate::engine::{
    ConsoleProgressCallback, EngineConfig, JsonProgressCallback, ProgressCallback,
    ProgressTracker, SplitPhase, VideoSplitter,
};
use crate::output::OverwritePolicy;
use crate::planner::SegmentPlan;
use crate::probe::DurationProbe;
use crate::utils::TimeParser;

/// Execute the split command
pub fn split(args: SplitArgs, overwrite: OverwritePolicy) -> Result<()> {
    info!("Starting split operation");
    info!("Input: {}", args.input);
    info!("Output directory: {}", args.out_dir);
    info!("Clip duration: {}s", args.duration);

    // Validate input file exists
    if !Path::new(&args.input).exists() {
        return Err(anyhow::anyhow!("Input file does not exist: {}", args.input));
    }

    let tracker = ProgressTracker::new("Splitting video");
    let callback: Arc<dyn ProgressCallback> = if args.json {
        Arc::new(JsonProgressCallback::new())
    } else {
        Arc::new(ConsoleProgressCallback::new(false))
    };
    tracker.add_callback(callback);

    // Probe the input for its total duration
    tracker.set_phase(SplitPhase::Probing, None);
    let probe = DurationProbe::with_ffmpeg_path(args.ffmpeg_path.clone());
    let media_info = probe
        .probe(&args.input)
        .context("Failed to read input duration")?;

    let parser = TimeParser::new();
    info!(
        "Media info: duration {}, size {} bytes",
        parser.format_time(media_info.duration_seconds),
        media_info.file_size
    );

    // Plan the segment windows
    tracker.set_phase(SplitPhase::Planning, None);
    let plan = SegmentPlan::build(media_info.duration_seconds, args.duration as f64)
        .context("Failed to plan segments")?;

    info!("Planned {} segments", plan.segment_count());

    // Create engine configuration
    let config = EngineConfig {
        input_path: args.input.clone(),
        output_dir: args.out_dir.clone(),
        prefix: args.prefix.clone(),
        video_codec: args.codec.clone(),
        audio_codec: args.audio_codec.clone(),
        crf: args.crf,
        preset: args.preset.clone(),
        thread_count: num_cpus::get(),
        ffmpeg_path: args.ffmpeg_path.clone(),
        overwrite,
    };

    // Execute the split
    let splitter = VideoSplitter::new();
    let report = splitter
        .split(&config, &plan, &tracker)
        .context("Error during splitting process")?;

    info!(
        "Split operation completed: {} clips in {}",
        report.clip_count(),
        args.out_dir
    );
    Ok(())
}

/// Execute the inspect command
pub fn inspect(args: InspectArgs) -> Result<()> {
    info!("Starting inspect operation");
    info!("Input: {}", args.input);

    // Validate input file exists
    if !Path::new(&args.input).exists() {
        return Err(anyhow::anyhow!("Input file does not exist: {}", args.input));
    }

    let probe = DurationProbe::with_ffmpeg_path(args.ffmpeg_path.clone());
    let media_info = probe
        .probe(&args.input)
        .context("Failed to inspect input file")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&media_info)?);
    } else {
        let parser = TimeParser::new();
        println!("File:     {}", media_info.path);
        println!(
            "Duration: {} ({:.2}s)",
            parser.format_time(media_info.duration_seconds),
            media_info.duration_seconds
        );
        println!("Size:     {} bytes", media_info.file_size);
    }

    info!("Inspect operation completed");
    Ok(())
}
