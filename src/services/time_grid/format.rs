//! Labels for the grid: slot times, the hour ruler, the day header and the
//! tracked-time total.

use chrono::{Datelike, NaiveDate};

use crate::models::entry::CalendarEntry;
use crate::models::time_slot::TimeSlot;

/// 12-hour clock label, e.g. `9:15 AM` or `12:00 PM`.
pub fn format_time(slot: TimeSlot) -> String {
    format_clock(slot.hour(), slot.minute())
}

/// Whole-hour label for the ruler, e.g. `1:00 PM`.
pub fn format_hour_label(hour: u8) -> String {
    format_clock(hour, 0)
}

fn format_clock(hour: u8, minute: u8) -> String {
    debug_assert!(hour < 24 && minute < 60, "clock value {hour}:{minute} out of range");
    let period = if hour >= 12 { "PM" } else { "AM" };
    let display_hour = match hour {
        0 => 12,
        h if h > 12 => h - 12,
        h => h,
    };
    format!("{}:{:02} {}", display_hour, minute, period)
}

/// `start - end` label shown inside entry blocks.
pub fn format_range(start: TimeSlot, end: TimeSlot) -> String {
    format!("{} - {}", format_time(start), format_time(end))
}

/// Day-of-month followed by the upper-case weekday, e.g. `14 TUE`.
pub fn format_day_header(date: NaiveDate) -> String {
    let weekday = date.format("%a").to_string().to_uppercase();
    format!("{} {}", date.day(), weekday)
}

/// Total tracked minutes across the entries.
pub fn total_minutes(entries: &[CalendarEntry]) -> u32 {
    entries.iter().map(CalendarEntry::duration_minutes).sum()
}

/// Total tracked time as `H:MM:00`.
pub fn format_day_total(entries: &[CalendarEntry]) -> String {
    let minutes = total_minutes(entries);
    format!("{}:{:02}:00", minutes / 60, minutes % 60)
}
