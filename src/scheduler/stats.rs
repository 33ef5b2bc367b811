//! Derived roster statistics.
//!
//! Pure functions over a finished [`WeeklySchedule`]; neither touches the
//! fairness state, and both give identical results when called twice.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Days worked | Slots the person appears in (at most one per day) |
//! | Hours worked | Σ configured hours of those slots' shift types |
//! | Days off | max(0, 7 − days worked) |
//! | Off by day | Roster members in none of a day's three shifts |

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::models::{Day, ShiftHours, WeeklySchedule};
use crate::validation::DAYS_PER_WEEK;

/// Work totals for one staff member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffWorkStats {
    pub staff: String,
    pub days_worked: u32,
    pub hours_worked: u32,
    pub days_off: u32,
}

/// Work totals for the whole roster, in roster order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkStats {
    entries: Vec<StaffWorkStats>,
}

impl WorkStats {
    /// Totals for one staff member.
    pub fn get(&self, staff: &str) -> Option<&StaffWorkStats> {
        self.entries.iter().find(|e| e.staff == staff)
    }

    /// All entries in roster order.
    pub fn iter(&self) -> impl Iterator<Item = &StaffWorkStats> {
        self.entries.iter()
    }

    /// Number of staff covered.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no staff are covered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Σ days worked across all staff.
    pub fn total_days_worked(&self) -> u32 {
        self.entries
            .iter()
            .fold(0, |acc: u32, e| acc.saturating_add(e.days_worked))
    }
}

/// Computes per-staff work totals.
///
/// Every roster member appears, including those with no assignments.
/// Anyone in the schedule but not on the roster is appended after the
/// roster in first-seen order.
pub fn compute_work_stats<S: AsRef<str>>(
    schedule: &WeeklySchedule,
    all_staff: &[S],
    hours: &ShiftHours,
) -> WorkStats {
    fn push_unique(entries: &mut Vec<StaffWorkStats>, name: &str) {
        if !entries.iter().any(|e| e.staff == name) {
            entries.push(StaffWorkStats {
                staff: name.to_string(),
                days_worked: 0,
                hours_worked: 0,
                days_off: 0,
            });
        }
    }

    let mut entries: Vec<StaffWorkStats> = Vec::with_capacity(all_staff.len());
    for s in all_staff {
        push_unique(&mut entries, s.as_ref());
    }
    for (_, _, assigned) in schedule.slots() {
        for name in assigned {
            push_unique(&mut entries, name);
        }
    }

    for (_, shift, assigned) in schedule.slots() {
        for name in assigned {
            if let Some(entry) = entries.iter_mut().find(|e| &e.staff == name) {
                entry.days_worked = entry.days_worked.saturating_add(1);
                entry.hours_worked = entry.hours_worked.saturating_add(hours.hours(shift));
            }
        }
    }

    for entry in &mut entries {
        entry.days_off = (DAYS_PER_WEEK as u32).saturating_sub(entry.days_worked);
    }

    WorkStats { entries }
}

/// Staff off on each day, sorted by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffByDay {
    days: [Vec<String>; 7],
}

impl OffByDay {
    /// Staff off on `day`, sorted.
    #[inline]
    pub fn off_on(&self, day: Day) -> &[String] {
        &self.days[day.index()]
    }

    /// `(day, off staff)` in week order.
    pub fn iter(&self) -> impl Iterator<Item = (Day, &[String])> {
        Day::ALL
            .into_iter()
            .map(move |day| (day, self.off_on(day)))
    }
}

/// Computes, for each day, the roster members not on any of its shifts.
pub fn compute_off_by_day<S: AsRef<str>>(schedule: &WeeklySchedule, all_staff: &[S]) -> OffByDay {
    let everyone: BTreeSet<&str> = all_staff.iter().map(|s| s.as_ref()).collect();
    let mut off = OffByDay::default();

    for day in Day::ALL {
        off.days[day.index()] = everyone
            .iter()
            .filter(|name| schedule.shift_of(name, day).is_none())
            .map(|name| name.to_string())
            .collect();
    }

    off
}
