//! Parsing and display helpers for the naive local dates and times used by
//! bookings. No timezone is ever attached.

use std::ops::RangeInclusive;

use chrono::{NaiveDate, NaiveTime, Timelike};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

const YEAR_DIGITS: RangeInclusive<usize> = 4..=4;
const FIELD_DIGITS: RangeInclusive<usize> = 1..=2;

/// True when `value` is `sep`-separated runs of ASCII digits with the given
/// lengths. chrono alone would also take signs and padding spaces.
fn has_shape(value: &str, sep: char, widths: &[RangeInclusive<usize>]) -> bool {
    let mut fields = value.split(sep);
    let shaped = widths.iter().all(|width| {
        fields.next().is_some_and(|field| {
            width.contains(&field.len()) && field.bytes().all(|b| b.is_ascii_digit())
        })
    });
    shaped && fields.next().is_none()
}

/// Parses an ISO calendar date. Calendar-aware: `2025-02-30` is rejected.
///
/// The year must have four digits; month and day may have one or two.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    if !has_shape(value, '-', &[YEAR_DIGITS, FIELD_DIGITS, FIELD_DIGITS]) {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// Parses a 24-hour `HH:MM` time of day. Hour and minute may have one or two
/// digits.
pub fn parse_time(value: &str) -> Option<NaiveTime> {
    if !has_shape(value, ':', &[FIELD_DIGITS, FIELD_DIGITS]) {
        return None;
    }
    NaiveTime::parse_from_str(value, TIME_FORMAT).ok()
}

/// Formats a time as `hh:mm AM/PM`, e.g. `01:30 PM`.
pub fn format_12h(time: NaiveTime) -> String {
    time.format("%I:%M %p").to_string()
}

/// Minutes elapsed since midnight, ignoring seconds.
pub fn minute_of_day(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

/// Builds the time of day for a minute offset from midnight.
pub fn time_at_minute(minute: u32) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(minute / 60, minute % 60, 0)
}
