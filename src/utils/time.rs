//! Time parsing and formatting utilities

use crate::error::{SplitXError, SplitXResult};

/// Parser for the timestamp format ffmpeg prints in its metadata banner
pub struct TimeParser;

impl TimeParser {
    /// Create a new time parser
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self
    }
}

impl Default for TimeParser {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeParser {
    /// Parse an `HH:MM:SS.cc` timestamp to seconds
    pub fn parse_timestamp(&self, stamp: &str) -> SplitXResult<f64> {
        let stamp = stamp.trim();

        let parts: Vec<&str> = stamp.split(':').collect();
        if parts.len() != 3 {
            return Err(SplitXError::InvalidTimestamp {
                stamp: stamp.to_string(),
            });
        }

        let hours: f64 = parts[0]
            .parse()
            .map_err(|_| SplitXError::InvalidTimestamp {
                stamp: stamp.to_string(),
            })?;

        let minutes: f64 = parts[1]
            .parse()
            .map_err(|_| SplitXError::InvalidTimestamp {
                stamp: stamp.to_string(),
            })?;

        let seconds: f64 = parts[2]
            .parse()
            .map_err(|_| SplitXError::InvalidTimestamp {
                stamp: stamp.to_string(),
            })?;

        if hours < 0.0 || minutes < 0.0 || seconds < 0.0 {
            return Err(SplitXError::InvalidTimestamp {
                stamp: stamp.to_string(),
            });
        }

        Ok(hours * 3600.0 + minutes * 60.0 + seconds)
    }

    /// Format seconds to an HH:MM:SS.ms string
    pub fn format_time(&self, seconds: f64) -> String {
        let hours = (seconds / 3600.0) as u32;
        let minutes = ((seconds % 3600.0) / 60.0) as u32;
        let secs = (seconds % 60.0) as u32;
        let milliseconds = ((seconds % 1.0) * 1000.0) as u32;

        if hours > 0 {
            format!(
                "{:02}:{:02}:{:02}.{:03}",
                hours, minutes, secs, milliseconds
            )
        } else {
            format!("{:02}:{:02}.{:03}", minutes, secs, milliseconds)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_banner_timestamps() {
        let parser = TimeParser::new();
        assert_eq!(parser.parse_timestamp("00:01:30.50").unwrap(), 90.5);
        assert_eq!(parser.parse_timestamp("01:00:00.00").unwrap(), 3600.0);
        assert_eq!(parser.parse_timestamp(" 00:00:05.00 ").unwrap(), 5.0);
    }

    #[test]
    fn rejects_malformed_timestamps() {
        let parser = TimeParser::new();
        assert!(parser.parse_timestamp("N/A").is_err());
        assert!(parser.parse_timestamp("90.5").is_err());
        assert!(parser.parse_timestamp("01:30").is_err());
        assert!(parser.parse_timestamp("aa:bb:cc").is_err());
        assert!(parser.parse_timestamp("-1:00:00").is_err());
    }

    #[test]
    fn formats_times() {
        let parser = TimeParser::new();
        assert_eq!(parser.format_time(90.5), "01:30.500");
        assert_eq!(parser.format_time(3661.25), "01:01:01.250");
    }
}
