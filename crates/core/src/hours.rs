//! Opening hours. All bounds are minutes since midnight; ranges are half-open.

use std::ops::Range;

use chrono::NaiveTime;

use crate::datetime::minute_of_day;

pub const SLOT_MINUTES: u32 = 30;

/// 10:00 to 17:00.
pub const BUSINESS_HOURS: Range<u32> = 10 * 60..17 * 60;

/// 13:00 to 14:00.
pub const BREAK_WINDOW: Range<u32> = 13 * 60..14 * 60;

/// True when `time` is open for booking: inside business hours and outside the break.
pub fn is_bookable(time: NaiveTime) -> bool {
    let minute = minute_of_day(time);
    BUSINESS_HOURS.contains(&minute) && !BREAK_WINDOW.contains(&minute)
}
