//! Output directory and segment naming

use std::path::{Path, PathBuf};
use tracing::{info, warn};
use walkdir::WalkDir;

use crate::error::{SplitXError, SplitXResult};
use crate::output::OverwritePolicy;

/// Names and places the sequential output clips
pub struct SegmentWriter {
    output_dir: PathBuf,
    prefix: String,
    extension: String,
    overwrite: OverwritePolicy,
}

impl SegmentWriter {
    /// Create a writer for the given output directory
    pub fn new(output_dir: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
            prefix: prefix.into(),
            extension: "mp4".to_string(),
            overwrite: OverwritePolicy::Prompt,
        }
    }

    /// Set the overwrite policy
    pub fn with_overwrite(mut self, overwrite: OverwritePolicy) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Output directory path
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Create the output directory if it does not exist
    pub fn ensure_dir(&self) -> SplitXResult<()> {
        if !self.output_dir.exists() {
            info!("Creating output directory: {}", self.output_dir.display());
            std::fs::create_dir_all(&self.output_dir).map_err(|e| SplitXError::OutputError {
                message: format!(
                    "failed to create output directory {}: {}",
                    self.output_dir.display(),
                    e
                ),
            })?;
        }
        Ok(())
    }

    /// Path for the segment at the given zero-based index
    ///
    /// Clips are numbered from 1: `short_1.mp4`, `short_2.mp4`, ...
    pub fn segment_path(&self, index: usize) -> PathBuf {
        self.output_dir
            .join(format!("{}_{}.{}", self.prefix, index + 1, self.extension))
    }

    /// Check the overwrite policy for one output path
    pub fn check_overwrite(&self, path: &Path) -> SplitXResult<()> {
        if path.exists() {
            match self.overwrite {
                OverwritePolicy::Never => {
                    return Err(SplitXError::OutputError {
                        message: format!(
                            "output file {} exists and overwrite is disabled",
                            path.display()
                        ),
                    });
                }
                OverwritePolicy::Prompt => {
                    warn!(
                        "File exists, proceeding with overwrite (non-interactive mode): {}",
                        path.display()
                    );
                }
                OverwritePolicy::Always => {
                    info!("File exists, will overwrite: {}", path.display());
                }
            }
        }
        Ok(())
    }

    /// Files already in the output directory that match the clip prefix
    pub fn existing_segments(&self) -> Vec<PathBuf> {
        if !self.output_dir.exists() {
            return Vec::new();
        }

        let needle = format!("{}_", self.prefix);
        let mut found: Vec<PathBuf> = WalkDir::new(&self.output_dir)
            .max_depth(1)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter(|entry| {
                entry
                    .file_name()
                    .to_string_lossy()
                    .starts_with(needle.as_str())
            })
            .map(|entry| entry.into_path())
            .collect();

        found.sort();
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn segment_paths_are_sequential_and_one_based() {
        let writer = SegmentWriter::new("out", "short");
        assert_eq!(writer.segment_path(0), PathBuf::from("out/short_1.mp4"));
        assert_eq!(writer.segment_path(1), PathBuf::from("out/short_2.mp4"));
        assert_eq!(writer.segment_path(9), PathBuf::from("out/short_10.mp4"));
    }

    #[test]
    fn ensure_dir_creates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let out = temp_dir.path().join("clips");

        let writer = SegmentWriter::new(&out, "short");
        writer.ensure_dir().unwrap();
        assert!(out.is_dir());

        // idempotent
        writer.ensure_dir().unwrap();
    }

    #[test]
    fn never_policy_refuses_existing_output() {
        let temp_dir = TempDir::new().unwrap();
        let writer =
            SegmentWriter::new(temp_dir.path(), "short").with_overwrite(OverwritePolicy::Never);

        let path = writer.segment_path(0);
        std::fs::write(&path, b"existing").unwrap();

        assert!(writer.check_overwrite(&path).is_err());

        let writer =
            SegmentWriter::new(temp_dir.path(), "short").with_overwrite(OverwritePolicy::Always);
        assert!(writer.check_overwrite(&path).is_ok());
    }

    #[test]
    fn existing_segments_finds_only_prefixed_files() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("short_1.mp4"), b"a").unwrap();
        std::fs::write(temp_dir.path().join("short_2.mp4"), b"b").unwrap();
        std::fs::write(temp_dir.path().join("notes.txt"), b"c").unwrap();

        let writer = SegmentWriter::new(temp_dir.path(), "short");
        let existing = writer.existing_segments();
        assert_eq!(existing.len(), 2);
    }
}
