//! UTC date utilities without timezone dependencies.
//!
//! Provides a lightweight `DateTimeUtc` struct for date handling, used for
//! the `date` format refinement in content schemas and as the article sort
//! key.
//!
//! # Examples
//!
//! ```ignore
//! let dt = DateTimeUtc::parse("2024-06-15").unwrap();
//! let dt = DateTimeUtc::parse("2024-06-15T14:30:45Z").unwrap();
//! ```

use anyhow::{Result, bail};

/// UTC datetime without timezone complexity.
///
/// Field order gives chronological `Ord`, so parsed dates can be compared
/// and sorted directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DateTimeUtc {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl DateTimeUtc {
    pub const fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    pub const fn from_ymd(year: u16, month: u8, day: u8) -> Self {
        Self::new(year, month, day, 0, 0, 0)
    }

    /// Parse from "YYYY-MM-DD" or "YYYY-MM-DDTHH:MM:SSZ" format.
    ///
    /// Returns `None` for anything that is not a real calendar date.
    pub fn parse(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();

        // Minimum: "YYYY-MM-DD" (10 chars)
        if bytes.len() < 10 {
            return None;
        }

        // Parse date part
        let year = parse_u16(&bytes[0..4])?;
        if bytes[4] != b'-' {
            return None;
        }
        let month = parse_u8(&bytes[5..7])?;
        if bytes[7] != b'-' {
            return None;
        }
        let day = parse_u8(&bytes[8..10])?;

        // Check for time part (RFC3339)
        let (hour, minute, second) = if bytes.len() >= 20 && bytes[10] == b'T' && bytes[19] == b'Z'
        {
            if bytes[13] != b':' || bytes[16] != b':' {
                return None;
            }
            (
                parse_u8(&bytes[11..13])?,
                parse_u8(&bytes[14..16])?,
                parse_u8(&bytes[17..19])?,
            )
        } else if bytes.len() == 10 {
            (0, 0, 0)
        } else {
            return None;
        };

        let dt = Self::new(year, month, day, hour, minute, second);
        dt.validate().ok()?;
        Some(dt)
    }

    #[allow(clippy::trivially_copy_pass_by_ref)] // Method style is more idiomatic
    pub fn validate(&self) -> Result<()> {
        let Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        } = *self;

        if !(1..=12).contains(&month) {
            bail!("month is invalid: {month}");
        }

        let max_days = Self::days_in_month(year, month);
        if day == 0 || day > max_days {
            bail!("day is invalid: {day}");
        }
        if hour > 23 {
            bail!("hour is invalid: {hour}");
        }
        if minute > 59 {
            bail!("minute is invalid: {minute}");
        }
        if second > 59 {
            bail!("second is invalid: {second}");
        }

        Ok(())
    }

    #[inline]
    #[allow(clippy::manual_is_multiple_of)] // Manual impl for const fn
    const fn is_leap_year(year: u16) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    #[inline]
    const fn days_in_month(year: u16, month: u8) -> u8 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if Self::is_leap_year(year) => 29,
            2 => 28,
            _ => 0,
        }
    }
}

/// Parse 2-digit ASCII number
#[inline]
fn parse_u8(bytes: &[u8]) -> Option<u8> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = bytes[0].wrapping_sub(b'0');
    let d2 = bytes[1].wrapping_sub(b'0');
    if d1 > 9 || d2 > 9 {
        return None;
    }
    Some(d1 * 10 + d2)
}

/// Parse 4-digit ASCII number
#[inline]
fn parse_u16(bytes: &[u8]) -> Option<u16> {
    if bytes.len() != 4 {
        return None;
    }
    let mut result = 0u16;
    for &b in bytes {
        let d = b.wrapping_sub(b'0');
        if d > 9 {
            return None;
        }
        result = result * 10 + u16::from(d);
    }
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_only() {
        let dt = DateTimeUtc::parse("2024-06-15").unwrap();
        assert_eq!(dt, DateTimeUtc::from_ymd(2024, 6, 15));
    }

    #[test]
    fn test_parse_with_time() {
        let dt = DateTimeUtc::parse("2024-06-15T14:30:45Z").unwrap();
        assert_eq!(dt, DateTimeUtc::new(2024, 6, 15, 14, 30, 45));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(DateTimeUtc::parse("").is_none());
        assert!(DateTimeUtc::parse("2024").is_none());
        assert!(DateTimeUtc::parse("2024/06/15").is_none());
        assert!(DateTimeUtc::parse("yyyy-mm-dd").is_none());
        assert!(DateTimeUtc::parse("2024-06-15T14:30Z").is_none());
    }

    #[test]
    fn test_parse_rejects_invalid_calendar_dates() {
        // Month 13, day 45
        assert!(DateTimeUtc::parse("2020-13-45").is_none());
        // Day 31 in a 30-day month
        assert!(DateTimeUtc::parse("2024-04-31").is_none());
        // Feb 29 outside leap years
        assert!(DateTimeUtc::parse("2023-02-29").is_none());
        assert!(DateTimeUtc::parse("1900-02-29").is_none());
    }

    #[test]
    fn test_parse_leap_year() {
        assert!(DateTimeUtc::parse("2024-02-29").is_some());
        assert!(DateTimeUtc::parse("2000-02-29").is_some()); // divisible by 400
    }

    #[test]
    fn test_validate_invalid_time() {
        assert!(DateTimeUtc::new(2024, 6, 15, 24, 0, 0).validate().is_err());
        assert!(DateTimeUtc::new(2024, 6, 15, 12, 60, 0).validate().is_err());
        assert!(
            DateTimeUtc::new(2024, 6, 15, 12, 30, 60)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn test_chronological_ordering() {
        let mut dates = [
            DateTimeUtc::parse("2023-01-01").unwrap(),
            DateTimeUtc::parse("2024-06-01").unwrap(),
            DateTimeUtc::parse("2022-12-31").unwrap(),
        ];
        dates.sort();
        assert_eq!(dates[0], DateTimeUtc::from_ymd(2022, 12, 31));
        assert_eq!(dates[2], DateTimeUtc::from_ymd(2024, 6, 1));
    }
}
