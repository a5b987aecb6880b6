//! Segment planning module
//!
//! Turns a total duration and a clip duration into a list of
//! fixed-size time windows, one per output clip.

use serde::{Deserialize, Serialize};

use crate::error::{SplitXError, SplitXResult};

/// One planned output clip covering a time window of the source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Segment {
    /// Zero-based segment index
    pub index: usize,
    /// Start offset in seconds
    pub start_seconds: f64,
    /// Window length in seconds
    pub duration_seconds: f64,
}

/// A complete split plan for one source file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentPlan {
    /// Total duration of the source in seconds
    pub total_duration: f64,
    /// Requested clip duration in seconds
    pub clip_duration: f64,
    /// Planned segments in playback order
    pub segments: Vec<Segment>,
}

impl SegmentPlan {
    /// Build a plan from a total duration and a clip duration
    ///
    /// The segment count is `ceil(total / clip)`. Windows start at
    /// `i * clip`; the last window is clamped to the end of the source.
    pub fn build(total_duration: f64, clip_duration: f64) -> SplitXResult<Self> {
        if !total_duration.is_finite() || total_duration <= 0.0 {
            return Err(SplitXError::InvalidPlan {
                message: format!("total duration must be positive, got {}", total_duration),
            });
        }
        if !clip_duration.is_finite() || clip_duration <= 0.0 {
            return Err(SplitXError::InvalidPlan {
                message: format!("clip duration must be positive, got {}", clip_duration),
            });
        }

        let count = (total_duration / clip_duration).ceil() as usize;
        let count = count.max(1);

        let mut segments = Vec::with_capacity(count);
        for index in 0..count {
            let start_seconds = index as f64 * clip_duration;
            let duration_seconds = clip_duration.min(total_duration - start_seconds);
            segments.push(Segment {
                index,
                start_seconds,
                duration_seconds,
            });
        }

        Ok(Self {
            total_duration,
            clip_duration,
            segments,
        })
    }

    /// Number of planned segments
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_is_ceiling_of_total_over_clip() {
        assert_eq!(SegmentPlan::build(120.0, 60.0).unwrap().segment_count(), 2);
        assert_eq!(SegmentPlan::build(121.0, 60.0).unwrap().segment_count(), 3);
        assert_eq!(SegmentPlan::build(59.9, 60.0).unwrap().segment_count(), 1);
        assert_eq!(SegmentPlan::build(60.5, 60.0).unwrap().segment_count(), 2);
    }

    #[test]
    fn clip_longer_than_source_yields_one_segment() {
        let plan = SegmentPlan::build(45.0, 300.0).unwrap();
        assert_eq!(plan.segment_count(), 1);
        assert_eq!(plan.segments[0].start_seconds, 0.0);
        assert_eq!(plan.segments[0].duration_seconds, 45.0);
    }

    #[test]
    fn windows_tile_the_source_without_gaps() {
        let plan = SegmentPlan::build(125.0, 30.0).unwrap();
        assert_eq!(plan.segment_count(), 5);

        let mut expected_start = 0.0;
        for segment in &plan.segments {
            assert_eq!(segment.start_seconds, expected_start);
            expected_start += segment.duration_seconds;
        }
        assert!((expected_start - 125.0).abs() < 1e-9);

        // all but the last window are full clip lengths
        for segment in &plan.segments[..plan.segment_count() - 1] {
            assert_eq!(segment.duration_seconds, 30.0);
        }
        assert_eq!(plan.segments[4].duration_seconds, 5.0);
    }

    #[test]
    fn rejects_non_positive_inputs() {
        assert!(SegmentPlan::build(0.0, 60.0).is_err());
        assert!(SegmentPlan::build(-10.0, 60.0).is_err());
        assert!(SegmentPlan::build(100.0, 0.0).is_err());
        assert!(SegmentPlan::build(f64::NAN, 60.0).is_err());
    }
}
