//! # Time Normalization
//!
//! Turns a purchase time into 24-hour `HH:MM` and answers "is this time
//! inside a window?" for the afternoon bonus.
//!
//! ## Accepted Shapes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Input          Canonical     Notes                                     │
//! │  ─────────────  ─────────     ───────────────────────────────────────   │
//! │  14:33          14:33         24-hour                                   │
//! │  14:33:59       14:33         seconds validated, then dropped           │
//! │  2:33 PM        14:33         12-hour, suffix case-insensitive          │
//! │  02:33:10pm     14:33         space before suffix optional              │
//! │  12:05 AM       00:05         midnight hour                             │
//! │  12:05 PM       12:05         noon hour                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveTime;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ParseError;

static TIME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{1,2}):(\d{2})(?::(\d{2}))?(?:\s*(AM|PM))?$")
        .expect("invalid time pattern")
});

/// Normalizes a purchase time to canonical `HH:MM`.
///
/// ## Errors
/// - empty input
/// - no accepted shape matches
/// - hour outside 0-23 (or 1-12 with an AM/PM suffix), minute or second
///   outside 0-59
pub fn normalize_time(input: &str) -> Result<String, ParseError> {
    let cleaned = input.trim().to_uppercase();
    if cleaned.is_empty() {
        return Err(ParseError::new(input, "time cannot be empty"));
    }

    let caps = TIME_PATTERN
        .captures(&cleaned)
        .ok_or_else(|| ParseError::new(input, "does not match any accepted time format"))?;

    // Digits only, guaranteed by the pattern
    let hour: u32 = caps[1].parse().map_err(|_| ParseError::new(input, "invalid hour"))?;
    let minute: u32 = caps[2].parse().map_err(|_| ParseError::new(input, "invalid minute"))?;

    if let Some(seconds) = caps.get(3) {
        let seconds: u32 = seconds
            .as_str()
            .parse()
            .map_err(|_| ParseError::new(input, "invalid seconds"))?;
        if seconds > 59 {
            return Err(ParseError::new(
                input,
                format!("seconds {} must be between 0 and 59", seconds),
            ));
        }
    }

    let hour = match caps.get(4).map(|m| m.as_str()) {
        Some(meridiem) => {
            if !(1..=12).contains(&hour) {
                return Err(ParseError::new(
                    input,
                    format!("hour {} must be between 1 and 12 with {}", hour, meridiem),
                ));
            }
            match (meridiem, hour) {
                ("AM", 12) => 0,
                ("AM", h) => h,
                (_, 12) => 12,
                (_, h) => h + 12,
            }
        }
        None => hour,
    };

    if hour > 23 {
        return Err(ParseError::new(
            input,
            format!("hour {} must be between 0 and 23", hour),
        ));
    }
    if minute > 59 {
        return Err(ParseError::new(
            input,
            format!("minute {} must be between 0 and 59", minute),
        ));
    }

    Ok(format!("{:02}:{:02}", hour, minute))
}

/// Parses a canonical `HH:MM` time.
pub fn parse_canonical_time(text: &str) -> Result<NaiveTime, ParseError> {
    NaiveTime::parse_from_str(text, "%H:%M").map_err(|e| ParseError::new(text, e.to_string()))
}

/// Checks whether `time` falls inside the window `start..end`.
///
/// ## Two Kinds of Window
/// ```text
/// start < end  (e.g. 14:00 → 16:00)       start > end  (e.g. 22:00 → 02:00)
/// ─────────────────────────────────       ─────────────────────────────────
/// start < time < end                      time >= start  OR  time <= end
/// boundaries EXCLUDED                     boundaries INCLUDED
/// ```
///
/// The asymmetry is deliberate and must be kept: the afternoon bonus
/// excludes 14:00 and 16:00 exactly.
///
/// All three arguments must be canonical `HH:MM`.
pub fn is_time_in_range(time: &str, start: &str, end: &str) -> Result<bool, ParseError> {
    let time = parse_canonical_time(time)?;
    let start = parse_canonical_time(start)?;
    let end = parse_canonical_time(end)?;

    if end < start {
        return Ok(time >= start || time <= end);
    }

    Ok(time > start && time < end)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepted_shapes() {
        let cases = [
            ("13:01", "13:01"),
            ("00:00", "00:00"),
            ("23:59", "23:59"),
            ("9:05", "09:05"),
            ("14:33:59", "14:33"),
            ("2:33 PM", "14:33"),
            ("2:33pm", "14:33"),
            ("02:33 pm", "14:33"),
            ("11:59 AM", "11:59"),
            ("12:05 AM", "00:05"),
            ("12:05 PM", "12:05"),
            ("1:02:03 PM", "13:02"),
            ("  08:15  ", "08:15"),
        ];
        for (input, expected) in cases {
            assert_eq!(normalize_time(input).unwrap(), expected, "input: {:?}", input);
        }
    }

    #[test]
    fn test_canonical_input_is_unchanged() {
        for time in ["00:00", "09:30", "14:00", "23:59"] {
            assert_eq!(normalize_time(time).unwrap(), time);
        }
    }

    #[test]
    fn test_rejects_invalid_times() {
        let cases = [
            "",
            "   ",
            "25:00",
            "24:00",
            "12:60",
            "12:30:60",
            "13:00 PM",
            "0:30 AM",
            "invalid-time",
            "1230",
            "12:3",
            "12:30 XM",
        ];
        for input in cases {
            assert!(normalize_time(input).is_err(), "should reject {:?}", input);
        }
    }

    #[test]
    fn test_in_range_excludes_boundaries() {
        assert!(is_time_in_range("15:00", "14:00", "16:00").unwrap());
        assert!(is_time_in_range("14:01", "14:00", "16:00").unwrap());
        assert!(is_time_in_range("15:59", "14:00", "16:00").unwrap());

        assert!(!is_time_in_range("13:00", "14:00", "16:00").unwrap());
        assert!(!is_time_in_range("14:00", "14:00", "16:00").unwrap());
        assert!(!is_time_in_range("16:00", "14:00", "16:00").unwrap());
    }

    #[test]
    fn test_in_range_wrapping_midnight_includes_boundaries() {
        assert!(is_time_in_range("23:00", "22:00", "02:00").unwrap());
        assert!(is_time_in_range("01:00", "22:00", "02:00").unwrap());
        assert!(is_time_in_range("22:00", "22:00", "02:00").unwrap());
        assert!(is_time_in_range("02:00", "22:00", "02:00").unwrap());

        assert!(!is_time_in_range("12:00", "22:00", "02:00").unwrap());
    }

    #[test]
    fn test_in_range_rejects_non_canonical() {
        assert!(is_time_in_range("3:00 PM", "14:00", "16:00").is_err());
        assert!(is_time_in_range("15:00", "nope", "16:00").is_err());
    }
}
