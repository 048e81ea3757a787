//! Timestamp parsing and formatting (MM:SS / HH:MM:SS)

use crate::error::{Result, TranscriptError};

/// Parse a timestamp string into seconds
///
/// Accepts `MM:SS` or `HH:MM:SS` with strictly numeric components; minutes
/// and seconds must each be in [0, 59].
pub fn parse_timestamp(s: &str) -> Result<u64> {
    let invalid = || TranscriptError::InvalidTimestamp(s.to_string());

    let parts: Vec<&str> = s.split(':').collect();
    if parts.len() != 2 && parts.len() != 3 {
        return Err(invalid());
    }

    let mut components = Vec::with_capacity(parts.len());
    for part in &parts {
        if part.is_empty() || !part.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        components.push(part.parse::<u64>().map_err(|_| invalid())?);
    }

    match components[..] {
        [minutes, seconds] if minutes <= 59 && seconds <= 59 => Ok(minutes * 60 + seconds),
        [hours, minutes, seconds] if minutes <= 59 && seconds <= 59 => {
            Ok(hours * 3600 + minutes * 60 + seconds)
        }
        _ => Err(invalid()),
    }
}

/// Format seconds as a zero-padded timestamp string
///
/// `MM:SS` below one hour, `HH:MM:SS` from one hour on. Rounds down to
/// whole seconds.
pub fn format_timestamp(seconds: f64) -> String {
    let total = seconds.max(0.0).floor() as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;

    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{:02}:{:02}", minutes, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mm_ss() {
        assert_eq!(parse_timestamp("1:05").unwrap(), 65);
        assert_eq!(parse_timestamp("00:00").unwrap(), 0);
        assert_eq!(parse_timestamp("59:59").unwrap(), 3599);
    }

    #[test]
    fn test_parse_hh_mm_ss() {
        assert_eq!(parse_timestamp("1:01:01").unwrap(), 3661);
        assert_eq!(parse_timestamp("10:00:30").unwrap(), 36030);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(parse_timestamp("90").is_err());
        assert!(parse_timestamp("1:60").is_err());
        assert!(parse_timestamp("60:00").is_err());
        assert!(parse_timestamp("1:2:3:4").is_err());
        assert!(parse_timestamp("ab:cd").is_err());
        assert!(parse_timestamp("-1:05").is_err());
        assert!(parse_timestamp(":05").is_err());
        assert!(parse_timestamp("1:1.5").is_err());
    }

    #[test]
    fn test_format() {
        assert_eq!(format_timestamp(65.0), "01:05");
        assert_eq!(format_timestamp(3661.0), "01:01:01");
        assert_eq!(format_timestamp(0.0), "00:00");
        assert_eq!(format_timestamp(3599.9), "59:59");
        assert_eq!(format_timestamp(3600.0), "01:00:00");
    }

    #[test]
    fn test_round_trip() {
        for &t in &[0u64, 65, 3599, 3661, 7322] {
            assert_eq!(parse_timestamp(&format_timestamp(t as f64)).unwrap(), t);
        }
    }
}
