//! Week calendar model: days, shift types, and shift durations.
//!
//! A roster week is a fixed grid of 7 days × 3 shifts. Both axes are
//! ordered; assembly walks them in declaration order.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{RosterError, RosterResult};

/// Day of the roster week (Monday first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Day {
    /// All days in week order.
    pub const ALL: [Day; 7] = [
        Day::Mon,
        Day::Tue,
        Day::Wed,
        Day::Thu,
        Day::Fri,
        Day::Sat,
        Day::Sun,
    ];

    /// Zero-based position in the week.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Three-letter name ("Mon" .. "Sun").
    pub fn short_name(self) -> &'static str {
        match self {
            Day::Mon => "Mon",
            Day::Tue => "Tue",
            Day::Wed => "Wed",
            Day::Thu => "Thu",
            Day::Fri => "Fri",
            Day::Sat => "Sat",
            Day::Sun => "Sun",
        }
    }

    /// Whether this is Saturday or Sunday.
    #[inline]
    pub fn is_weekend(self) -> bool {
        matches!(self, Day::Sat | Day::Sun)
    }

    /// Parses a day from the first three letters of a token, ignoring case.
    ///
    /// `"monday"`, `"Mon"` and `"MON."` all map to [`Day::Mon`].
    pub fn from_prefix(token: &str) -> Option<Day> {
        let key: String = token
            .trim()
            .chars()
            .take(3)
            .flat_map(char::to_lowercase)
            .collect();
        Day::ALL
            .into_iter()
            .find(|d| d.short_name().eq_ignore_ascii_case(&key))
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

/// Shift type within a day, in fill order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ShiftType {
    Morning,
    Day,
    Night,
}

impl ShiftType {
    /// All shift types in fill order.
    pub const ALL: [ShiftType; 3] = [ShiftType::Morning, ShiftType::Day, ShiftType::Night];

    /// Number of shifts per day.
    pub const COUNT: usize = 3;

    /// Zero-based position within the day.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            ShiftType::Morning => "Morning",
            ShiftType::Day => "Day",
            ShiftType::Night => "Night",
        }
    }
}

impl fmt::Display for ShiftType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Duration of each shift type in whole hours.
///
/// Consumed only by the derived work statistics; the assignment
/// algorithm itself is duration-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShiftHours {
    pub morning: u32,
    pub day: u32,
    pub night: u32,
}

impl Default for ShiftHours {
    fn default() -> Self {
        Self {
            morning: 8,
            day: 8,
            night: 8,
        }
    }
}

impl ShiftHours {
    /// Creates validated shift hours. Every duration must be at least one hour.
    pub fn new(morning: u32, day: u32, night: u32) -> RosterResult<Self> {
        let hours = Self {
            morning,
            day,
            night,
        };
        hours.validate()?;
        Ok(hours)
    }

    /// Hours for one shift type.
    #[inline]
    pub fn hours(&self, shift: ShiftType) -> u32 {
        match shift {
            ShiftType::Morning => self.morning,
            ShiftType::Day => self.day,
            ShiftType::Night => self.night,
        }
    }

    /// Checks that all durations are positive.
    pub fn validate(&self) -> RosterResult<()> {
        match ShiftType::ALL.into_iter().find(|&s| self.hours(s) == 0) {
            Some(shift) => Err(RosterError::InvalidShiftHours { shift }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_order_and_weekend() {
        assert_eq!(Day::ALL.len(), 7);
        assert!(Day::Mon < Day::Sun);
        assert_eq!(Day::Thu.index(), 3);
        assert!(Day::Sat.is_weekend());
        assert!(Day::Sun.is_weekend());
        assert!(!Day::Fri.is_weekend());
    }

    #[test]
    fn test_day_from_prefix() {
        assert_eq!(Day::from_prefix("monday"), Some(Day::Mon));
        assert_eq!(Day::from_prefix(" WED "), Some(Day::Wed));
        assert_eq!(Day::from_prefix("Sa"), None);
        assert_eq!(Day::from_prefix("holiday"), None);
    }

    #[test]
    fn test_shift_hours() {
        let h = ShiftHours::new(6, 8, 10).unwrap();
        assert_eq!(h.hours(ShiftType::Morning), 6);
        assert_eq!(h.hours(ShiftType::Night), 10);

        let err = ShiftHours::new(8, 0, 8).unwrap_err();
        assert_eq!(
            err,
            RosterError::InvalidShiftHours {
                shift: ShiftType::Day
            }
        );
    }

    #[test]
    fn test_shift_display() {
        assert_eq!(ShiftType::Night.to_string(), "Night");
        assert_eq!(Day::Tue.to_string(), "Tue");
    }
}
