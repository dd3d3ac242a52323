//! Timestamp construction for transcript lines.
//!
//! Dates are day-first (`D/M/YYYY`), never auto-detected: `03/04/2023` is
//! the 3rd of April. Times are 24-hour unless an `am`/`pm` marker follows.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use thiserror::Error;

/// Why a date/time pair could not become a timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimestampError {
    /// The date field did not have three numeric components.
    #[error("malformed date '{0}'")]
    MalformedDate(String),

    /// The time field did not have numeric hour and minute.
    #[error("malformed time '{0}'")]
    MalformedTime(String),

    /// Components were numeric but do not form a calendar date.
    #[error("no such date: day {day}, month {month}, year {year}")]
    DateOutOfRange { day: u32, month: u32, year: i32 },

    /// Hour or minute out of range for the clock in use.
    #[error("no such time: {hour}:{minute:02}")]
    TimeOutOfRange { hour: u32, minute: u32 },
}

/// Builds a UTC timestamp from the date and time captures of a line.
///
/// # Examples
///
/// ```
/// use love_theorem::parsing::build_timestamp;
/// use chrono::{TimeZone, Utc};
///
/// let ts = build_timestamp("5/3/2023", "2:15 pm").unwrap();
/// assert_eq!(ts, Utc.with_ymd_and_hms(2023, 3, 5, 14, 15, 0).unwrap());
///
/// assert!(build_timestamp("5/13/2023", "2:15 pm").is_err());
/// ```
pub fn build_timestamp(date: &str, time: &str) -> Result<DateTime<Utc>, TimestampError> {
    let date = build_date(date)?;
    let time = build_time(time)?;
    Ok(date.and_time(time).and_utc())
}

fn build_date(raw: &str) -> Result<NaiveDate, TimestampError> {
    let malformed = || TimestampError::MalformedDate(raw.to_string());

    let mut fields = raw.trim().split('/');
    let day: u32 = fields.next().and_then(|s| s.parse().ok()).ok_or_else(malformed)?;
    let month: u32 = fields.next().and_then(|s| s.parse().ok()).ok_or_else(malformed)?;
    let year: i32 = fields.next().and_then(|s| s.parse().ok()).ok_or_else(malformed)?;
    if fields.next().is_some() {
        return Err(malformed());
    }

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(TimestampError::DateOutOfRange { day, month, year })
}

fn build_time(raw: &str) -> Result<NaiveTime, TimestampError> {
    let malformed = || TimestampError::MalformedTime(raw.to_string());

    let trimmed = raw.trim();
    let lower = trimmed.to_ascii_lowercase();
    let (clock, meridiem) = if let Some(rest) = lower.strip_suffix("am") {
        (rest.trim_end(), Some(false))
    } else if let Some(rest) = lower.strip_suffix("pm") {
        (rest.trim_end(), Some(true))
    } else {
        (lower.as_str(), None)
    };

    let (hour, minute) = clock.split_once(':').ok_or_else(malformed)?;
    let hour: u32 = hour.parse().map_err(|_| malformed())?;
    let minute: u32 = minute.parse().map_err(|_| malformed())?;

    let out_of_range = TimestampError::TimeOutOfRange { hour, minute };
    let hour24 = match meridiem {
        None => hour,
        Some(_) if !(1..=12).contains(&hour) => return Err(out_of_range),
        Some(false) => hour % 12,
        Some(true) => hour % 12 + 12,
    };

    NaiveTime::from_hms_opt(hour24, minute, 0).ok_or(out_of_range)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    #[test]
    fn test_day_first() {
        assert_eq!(build_timestamp("5/3/2023", "14:15"), Ok(at(2023, 3, 5, 14, 15)));
        assert_eq!(build_timestamp("03/04/2023", "09:00"), Ok(at(2023, 4, 3, 9, 0)));
    }

    #[test]
    fn test_meridiem_conversion() {
        assert_eq!(build_timestamp("1/1/2024", "12:05 am"), Ok(at(2024, 1, 1, 0, 5)));
        assert_eq!(build_timestamp("1/1/2024", "12:05 pm"), Ok(at(2024, 1, 1, 12, 5)));
        assert_eq!(build_timestamp("1/1/2024", "1:05 PM"), Ok(at(2024, 1, 1, 13, 5)));
        assert_eq!(build_timestamp("1/1/2024", "11:59pm"), Ok(at(2024, 1, 1, 23, 59)));
        assert_eq!(build_timestamp("1/1/2024", "7:30 AM"), Ok(at(2024, 1, 1, 7, 30)));
    }

    #[test]
    fn test_invalid_dates() {
        assert!(matches!(
            build_timestamp("5/13/2023", "10:00"),
            Err(TimestampError::DateOutOfRange { month: 13, .. })
        ));
        assert!(build_timestamp("0/1/2023", "10:00").is_err());
        assert!(build_timestamp("1/0/2023", "10:00").is_err());
        assert!(build_timestamp("30/2/2023", "10:00").is_err());
        assert!(build_timestamp("29/2/2024", "10:00").is_ok());
        assert!(matches!(
            build_timestamp("1/2", "10:00"),
            Err(TimestampError::MalformedDate(_))
        ));
    }

    #[test]
    fn test_invalid_times() {
        assert!(build_timestamp("1/1/2024", "24:00").is_err());
        assert!(build_timestamp("1/1/2024", "10:60").is_err());
        assert!(build_timestamp("1/1/2024", "13:00 pm").is_err());
        assert!(build_timestamp("1/1/2024", "0:30 am").is_err());
        assert!(matches!(
            build_timestamp("1/1/2024", "noon"),
            Err(TimestampError::MalformedTime(_))
        ));
    }
}
