// Time slot module
// Quarter-hour boundary within the planner day

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::error::GridError;

/// First hour shown on the grid (07:00).
pub const DAY_START_HOUR: u8 = 7;
/// Closing boundary hour of the grid (18:00).
pub const DAY_END_HOUR: u8 = 18;
/// Width of one slot in minutes.
pub const SLOT_MINUTES: u8 = 15;

/// A quarter-hour boundary such as 09:15.
///
/// Ordering compares the hour first, then the minute, which the derived
/// `Ord` gives us from the field order. Deserialization runs through
/// [`TimeSlot::new`], so a stored `09:10` is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTimeSlot")]
pub struct TimeSlot {
    hour: u8,
    minute: u8,
}

#[derive(Deserialize)]
struct RawTimeSlot {
    hour: u8,
    minute: u8,
}

impl TryFrom<RawTimeSlot> for TimeSlot {
    type Error = GridError;

    fn try_from(raw: RawTimeSlot) -> Result<Self, Self::Error> {
        Self::new(raw.hour, raw.minute)
    }
}

impl TimeSlot {
    /// Create a slot, validating that it sits on a quarter hour inside the
    /// planner day.
    ///
    /// # Examples
    /// ```
    /// use day_planner::models::time_slot::TimeSlot;
    ///
    /// let slot = TimeSlot::new(9, 15).unwrap();
    /// assert_eq!(slot.hour(), 9);
    /// assert!(TimeSlot::new(9, 10).is_err());
    /// ```
    pub fn new(hour: u8, minute: u8) -> Result<Self, GridError> {
        let hour_ok = (DAY_START_HOUR..=DAY_END_HOUR).contains(&hour);
        let minute_ok = minute < 60 && minute % SLOT_MINUTES == 0;
        if hour_ok && minute_ok {
            Ok(Self { hour, minute })
        } else {
            Err(GridError::SlotOutOfRange { hour, minute })
        }
    }

    /// The first slot of the day (07:00).
    pub const fn day_start() -> Self {
        Self {
            hour: DAY_START_HOUR,
            minute: 0,
        }
    }

    /// The closing boundary of the day (18:00).
    pub const fn day_end() -> Self {
        Self {
            hour: DAY_END_HOUR,
            minute: 0,
        }
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn is_on_hour(&self) -> bool {
        self.minute == 0
    }

    pub fn minutes_since_midnight(&self) -> u32 {
        u32::from(self.hour) * 60 + u32::from(self.minute)
    }

    /// The slot fifteen minutes later, carrying into the next hour.
    ///
    /// Returns `None` past the last representable slot (18:45).
    pub fn next_quarter(&self) -> Option<Self> {
        let minute = self.minute + SLOT_MINUTES;
        if minute >= 60 {
            Self::new(self.hour + 1, minute - 60).ok()
        } else {
            Self::new(self.hour, minute).ok()
        }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(7, 0; "day start")]
    #[test_case(12, 45; "midday quarter")]
    #[test_case(18, 0; "closing boundary")]
    #[test_case(18, 45; "last representable")]
    fn test_new_accepts_quarter_hours(hour: u8, minute: u8) {
        let slot = TimeSlot::new(hour, minute).unwrap();
        assert_eq!((slot.hour(), slot.minute()), (hour, minute));
    }

    #[test_case(6, 45; "before day start")]
    #[test_case(19, 0; "after day end")]
    #[test_case(9, 10; "not a quarter")]
    #[test_case(9, 60; "minute overflow")]
    fn test_new_rejects_invalid(hour: u8, minute: u8) {
        assert_eq!(
            TimeSlot::new(hour, minute),
            Err(GridError::SlotOutOfRange { hour, minute })
        );
    }

    #[test]
    fn test_ordering_compares_hour_then_minute() {
        let a = TimeSlot::new(9, 45).unwrap();
        let b = TimeSlot::new(10, 0).unwrap();
        let c = TimeSlot::new(10, 15).unwrap();
        assert!(a < b);
        assert!(b < c);
        assert_eq!(a.max(c), c);
    }

    #[test]
    fn test_next_quarter_carries_into_next_hour() {
        let slot = TimeSlot::new(9, 45).unwrap();
        assert_eq!(slot.next_quarter(), Some(TimeSlot::new(10, 0).unwrap()));
    }

    #[test]
    fn test_next_quarter_from_closing_boundary() {
        let next = TimeSlot::day_end().next_quarter().unwrap();
        assert_eq!(next.to_string(), "18:15");
    }

    #[test]
    fn test_next_quarter_past_representable_range() {
        assert_eq!(TimeSlot::new(18, 45).unwrap().next_quarter(), None);
    }

    #[test]
    fn test_toml_round_trip() {
        let slot = TimeSlot::new(9, 15).unwrap();
        let text = toml::to_string(&slot).unwrap();
        assert_eq!(toml::from_str::<TimeSlot>(&text).unwrap(), slot);
    }

    #[test_case("hour = 9\nminute = 10\n"; "not a quarter")]
    #[test_case("hour = 19\nminute = 0\n"; "after day end")]
    fn test_deserialize_validates(text: &str) {
        let err = toml::from_str::<TimeSlot>(text).unwrap_err();
        assert!(err.to_string().contains("outside the planner day"));
    }

    #[test]
    fn test_minutes_since_midnight() {
        assert_eq!(TimeSlot::new(9, 15).unwrap().minutes_since_midnight(), 555);
    }
}
