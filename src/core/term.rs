use crate::utils::error::{Result, SprintError};
use chrono::NaiveDate;
use regex::Regex;

pub const DATE_FORMAT: &str = "%Y/%m/%d";

/// An inclusive calendar-date interval at whole-day granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DateTerm {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateTerm {
    /// Parses a `start_on`/`due_on` pair of `YYYY/MM/DD` strings. `field` names
    /// the manifest location for error messages.
    pub fn parse(field: &str, start_on: &str, due_on: &str) -> Result<Self> {
        let start = parse_date(field, start_on)?;
        let end = parse_date(field, due_on)?;
        if start > end {
            return Err(SprintError::ConfigError {
                field: field.to_string(),
                message: format!("start_on {} is after due_on {}", start_on, due_on),
            });
        }
        Ok(Self { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| SprintError::DateParseError {
        field: field.to_string(),
        value: value.to_string(),
    })
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parses a duration span like `"168h"`, `"7d"`, `"1w"` or `"1w3d"` into a
/// whole number of days. Milestone arithmetic is day-granular, so the total
/// must be positive and a whole multiple of 24 hours.
pub fn parse_duration_days(value: &str) -> Result<i64> {
    let err = |reason: String| SprintError::DurationParseError {
        value: value.to_string(),
        reason,
    };

    let span = value.trim();
    let shape = Regex::new(r"^(\d+[hdw])+$").unwrap();
    if !shape.is_match(span) {
        return Err(err(
            "expected one or more <number><h|d|w> segments".to_string(),
        ));
    }

    let segment = Regex::new(r"(\d+)([hdw])").unwrap();
    let mut hours: i64 = 0;
    for caps in segment.captures_iter(span) {
        let count: i64 = caps[1]
            .parse()
            .map_err(|_| err(format!("segment count {} is out of range", &caps[1])))?;
        hours += match &caps[2] {
            "h" => count,
            "d" => count * 24,
            _ => count * 24 * 7,
        };
    }

    if hours == 0 {
        return Err(err("duration must be positive".to_string()));
    }
    if hours % 24 != 0 {
        return Err(err("duration must be a whole number of days".to_string()));
    }
    Ok(hours / 24)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_term() {
        let term = DateTerm::parse("sprint.terms", "2021/01/01", "2021/01/21").unwrap();
        assert_eq!(term.start, NaiveDate::from_ymd_opt(2021, 1, 1).unwrap());
        assert_eq!(term.end, NaiveDate::from_ymd_opt(2021, 1, 21).unwrap());
        assert!(term.contains(NaiveDate::from_ymd_opt(2021, 1, 1).unwrap()));
        assert!(term.contains(NaiveDate::from_ymd_opt(2021, 1, 21).unwrap()));
        assert!(!term.contains(NaiveDate::from_ymd_opt(2021, 1, 22).unwrap()));
    }

    #[test]
    fn test_parse_term_rejects_malformed_date() {
        let err = DateTerm::parse("sprint.terms", "2021-01-01", "2021/01/21").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("sprint.terms"));
        assert!(message.contains("2021-01-01"));
    }

    #[test]
    fn test_parse_term_rejects_reversed_dates() {
        assert!(DateTerm::parse("sprint.terms", "2021/01/21", "2021/01/01").is_err());
    }

    #[test]
    fn test_parse_duration_days() {
        assert_eq!(parse_duration_days("168h").unwrap(), 7);
        assert_eq!(parse_duration_days("24h").unwrap(), 1);
        assert_eq!(parse_duration_days("7d").unwrap(), 7);
        assert_eq!(parse_duration_days("1w").unwrap(), 7);
        assert_eq!(parse_duration_days("1w3d").unwrap(), 10);
        assert_eq!(parse_duration_days("1d24h").unwrap(), 2);
    }

    #[test]
    fn test_parse_duration_rejects_partial_days() {
        assert!(parse_duration_days("36h").is_err());
        assert!(parse_duration_days("1h").is_err());
    }

    #[test]
    fn test_parse_duration_rejects_zero_and_garbage() {
        assert!(parse_duration_days("0h").is_err());
        assert!(parse_duration_days("").is_err());
        assert!(parse_duration_days("seven days").is_err());
        assert!(parse_duration_days("7").is_err());
    }
}
