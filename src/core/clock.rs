//! Conversions between absolute minutes since midnight and the 12-hour
//! hour / minute / AM-PM fields used for display and editing.

use crate::errors::{AppError, AppResult};
use crate::models::Period;
use chrono::{NaiveTime, Timelike};
use std::fmt;

/// Largest magnitude accepted for any typed minute, hour or duration value.
/// Sums along a chain of such values stay well inside `i64`.
pub const MAX_MAGNITUDE: i64 = 1_000_000;

/// 12-hour rendering of a start time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayTime {
    /// "1".."12", not padded.
    pub hour: String,
    /// "00".."59".
    pub minute: String,
    pub period: Period,
}

impl fmt::Display for DisplayTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} {}", self.hour, self.minute, self.period)
    }
}

/// Which of the three time inputs an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimePart {
    Hour,
    Minute,
    Period,
}

/// Minutes since midnight → 12-hour fields.
///
/// Values past 23:59 (or negative) wrap around the day; there is no
/// next-day marker.
pub fn to_display(minutes: i64) -> DisplayTime {
    let hour = minutes.div_euclid(60).rem_euclid(24);
    let minute = minutes.rem_euclid(60);
    let period = if hour < 12 { Period::Am } else { Period::Pm };
    let hour12 = match hour % 12 {
        0 => 12,
        h => h,
    };

    DisplayTime {
        hour: hour12.to_string(),
        minute: format!("{:02}", minute),
        period,
    }
}

/// 12-hour fields → minutes since midnight. Hour "12" counts as 0; the
/// remainder keeps the sign, so hour "-1" is one hour before the period start.
pub fn from_display(hour: &str, minute: &str, period: Period) -> AppResult<i64> {
    let h = parse_int(hour)? % 12;
    let m = parse_int(minute)?;
    Ok(h * 60 + m + period.offset_minutes())
}

/// Replace one of the display fields of `current` and convert back.
pub fn apply_part(current: i64, part: TimePart, value: &str) -> AppResult<i64> {
    let shown = to_display(current);
    match part {
        TimePart::Hour => from_display(value, &shown.minute, shown.period),
        TimePart::Minute => from_display(&shown.hour, value, shown.period),
        TimePart::Period => {
            let period: Period = value.parse()?;
            from_display(&shown.hour, &shown.minute, period)
        }
    }
}

/// Lenient integer parse: optional surrounding whitespace and sign, then the
/// leading run of digits. Trailing garbage is ignored ("12abc" → 12).
/// Values beyond [`MAX_MAGNITUDE`] are rejected.
pub fn parse_int(input: &str) -> AppResult<i64> {
    let s = input.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits: &str = {
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        &rest[..end]
    };

    if digits.is_empty() {
        return Err(AppError::InvalidNumber(input.to_string()));
    }

    let value: i64 = digits
        .parse()
        .ok()
        .filter(|v| *v <= MAX_MAGNITUDE)
        .ok_or_else(|| AppError::InvalidNumber(input.to_string()))?;

    Ok(if negative { -value } else { value })
}

/// Parse a 24-hour `HH:MM` string into minutes since midnight.
pub fn parse_hhmm(t: &str) -> AppResult<i64> {
    let time = NaiveTime::parse_from_str(t.trim(), "%H:%M")
        .map_err(|_| AppError::InvalidTime(t.to_string()))?;
    Ok(time.hour() as i64 * 60 + time.minute() as i64)
}
