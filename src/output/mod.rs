//! Output handling module

use serde::{Deserialize, Serialize};

use crate::error::{SplitXError, SplitXResult};

pub mod writer;

pub use writer::SegmentWriter;

/// Behavior when an output file already exists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverwritePolicy {
    /// Always overwrite existing files
    Always,
    /// Never overwrite; fail instead
    Never,
    /// Warn and overwrite (non-interactive default)
    Prompt,
}

impl OverwritePolicy {
    /// Parse a policy from its CLI spelling
    pub fn parse(value: &str) -> SplitXResult<Self> {
        match value.to_lowercase().as_str() {
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            "prompt" => Ok(Self::Prompt),
            other => Err(SplitXError::BadArgs {
                message: format!(
                    "unknown overwrite policy '{}', expected always, never, or prompt",
                    other
                ),
            }),
        }
    }
}
