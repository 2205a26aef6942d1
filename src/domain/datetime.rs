use std::fmt;

use chrono::NaiveDateTime;

/// Accepted input formats: ISO-8601 local date-time with or without seconds.
const INPUT_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Parse a local date-time string like `2024-06-01T10:00`.
/// There is no timezone component; all times are naive local times.
pub fn parse_datetime(input: &str) -> Result<NaiveDateTime, ParseDateTimeError> {
    let input = input.trim();
    INPUT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .ok_or_else(|| ParseDateTimeError::InvalidFormat(input.to_string()))
}

/// Format a date-time for display, e.g. `2024-06-01 10:00`.
pub fn format_datetime(dt: NaiveDateTime) -> String {
    dt.format("%Y-%m-%d %H:%M").to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseDateTimeError {
    InvalidFormat(String),
}

impl fmt::Display for ParseDateTimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseDateTimeError::InvalidFormat(input) => {
                write!(
                    f,
                    "invalid date-time '{}' (expected YYYY-MM-DDTHH:MM)",
                    input
                )
            }
        }
    }
}

impl std::error::Error for ParseDateTimeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_datetime_without_seconds() {
        let dt = parse_datetime("2024-06-01T10:00").unwrap();
        assert_eq!(format_datetime(dt), "2024-06-01 10:00");
    }

    #[test]
    fn test_parse_datetime_with_seconds() {
        let dt = parse_datetime("2024-06-01T10:00:30").unwrap();
        assert_eq!(dt.format("%S").to_string(), "30");
    }

    #[test]
    fn test_parse_datetime_trims_whitespace() {
        assert!(parse_datetime(" 2024-06-01T10:00 ").is_ok());
    }

    #[test]
    fn test_parse_datetime_invalid() {
        assert!(parse_datetime("not-a-date").is_err());
        assert!(parse_datetime("2024-06-01").is_err());
        assert!(parse_datetime("2024-13-01T10:00").is_err());
        assert!(parse_datetime("").is_err());
    }
}
