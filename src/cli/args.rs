//! Command-line argument definitions

use clap::Args;

/// Valid clip duration range in seconds
fn clip_duration(s: &str) -> Result<u32, String> {
    clap_num::number_range(s, 10, 300)
}

/// Arguments for the split command
#[derive(Args, Debug)]
pub struct SplitArgs {
    /// Input video file path
    #[arg(short, long)]
    pub input: String,

    /// Output directory for the clips
    #[arg(short, long, default_value = "yt_shorts_output")]
    pub out_dir: String,

    /// Clip duration in seconds (10-300)
    #[arg(short, long, default_value_t = 60, value_parser = clip_duration)]
    pub duration: u32,

    /// Output filename prefix (clips are named PREFIX_1.mp4, PREFIX_2.mp4, ...)
    #[arg(long, default_value = "short")]
    pub prefix: String,

    /// Video codec
    #[arg(long, default_value = "libx264")]
    pub codec: String,

    /// Audio codec
    #[arg(long, default_value = "aac")]
    pub audio_codec: String,

    /// Constant Rate Factor (0-51)
    #[arg(long, default_value_t = 23)]
    pub crf: u8,

    /// Encoding preset
    #[arg(long, default_value = "medium")]
    pub preset: String,

    /// Emit progress as JSON events instead of a progress bar
    #[arg(long)]
    pub json: bool,

    /// ffmpeg executable to invoke
    #[arg(long, default_value = "ffmpeg", env = "SPLITX_FFMPEG")]
    pub ffmpeg_path: String,
}

/// Arguments for the inspect command
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Input video file path
    #[arg(short, long)]
    pub input: String,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// ffmpeg executable to invoke
    #[arg(long, default_value = "ffmpeg", env = "SPLITX_FFMPEG")]
    pub ffmpeg_path: String,
}
