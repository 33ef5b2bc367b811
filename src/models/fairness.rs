//! Fairness memory: per-staff load counters and the cross-week seed.
//!
//! [`FairnessTracker`] is the single mutable accumulator of a generation
//! run. Only the assembler writes to it, through
//! [`FairnessTracker::record_assignment`]; there is no undo. At the end of a
//! run it is frozen into a [`FairnessSeed`] for the caller to persist and
//! feed into next week's run.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use super::ShiftType;

/// Assignment counts per shift type.
///
/// Serialized with shift-type keys (`{"Morning": n, "Day": n, "Night": n}`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ShiftCounts {
    pub morning: u32,
    pub day: u32,
    pub night: u32,
}

impl ShiftCounts {
    /// Count for one shift type.
    #[inline]
    pub fn get(&self, shift: ShiftType) -> u32 {
        match shift {
            ShiftType::Morning => self.morning,
            ShiftType::Day => self.day,
            ShiftType::Night => self.night,
        }
    }

    /// Increments the count for one shift type, saturating at `u32::MAX`.
    pub fn increment(&mut self, shift: ShiftType) {
        let count = match shift {
            ShiftType::Morning => &mut self.morning,
            ShiftType::Day => &mut self.day,
            ShiftType::Night => &mut self.night,
        };
        *count = count.saturating_add(1);
    }

    /// Sum over all shift types, saturating at `u32::MAX`.
    pub fn total(&self) -> u32 {
        self.morning.saturating_add(self.day).saturating_add(self.night)
    }
}

/// Fairness counters for one staff member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffFairness {
    /// Assignments made so far in this run (starts at zero every week).
    pub total_assigned_this_week: u32,
    /// Shift-type history, seeded from the prior week and grown this run.
    pub shift_type_counts: ShiftCounts,
    /// Shift type of the most recent assignment, if any.
    pub last_assigned_shift: Option<ShiftType>,
}

impl StaffFairness {
    /// Whether the most recent assignment was of type `shift`.
    #[inline]
    pub fn last_was(&self, shift: ShiftType) -> bool {
        self.last_assigned_shift == Some(shift)
    }
}

/// Persisted fairness statistics of one run, reused to seed the next.
///
/// Only `shift_type_counts` is read back when seeding; `weekly_counts` is
/// informational.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FairnessSeed {
    pub weekly_counts: BTreeMap<String, u32>,
    pub shift_type_counts: BTreeMap<String, ShiftCounts>,
}

/// Mutable fairness state for one generation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FairnessTracker {
    entries: HashMap<String, StaffFairness>,
}

impl FairnessTracker {
    /// Starts every staff member at zero with no last shift.
    pub fn new<S: AsRef<str>>(staff: &[S]) -> Self {
        let entries = staff
            .iter()
            .map(|s| (s.as_ref().to_string(), StaffFairness::default()))
            .collect();
        Self { entries }
    }

    /// Starts fresh, then copies in prior-week shift-type counts.
    ///
    /// Weekly totals always start at zero; only the shift-type distribution
    /// carries over. Seed entries for staff not on the roster are ignored.
    pub fn seeded<S: AsRef<str>>(staff: &[S], prior: Option<&FairnessSeed>) -> Self {
        let mut tracker = Self::new(staff);
        if let Some(seed) = prior {
            for (name, entry) in tracker.entries.iter_mut() {
                if let Some(counts) = seed.shift_type_counts.get(name) {
                    entry.shift_type_counts = *counts;
                }
            }
        }
        tracker
    }

    /// Counters for `staff`, if on the roster.
    #[inline]
    pub fn get(&self, staff: &str) -> Option<&StaffFairness> {
        self.entries.get(staff)
    }

    /// Weekly total for `staff` (0 if unknown).
    pub fn weekly_total(&self, staff: &str) -> u32 {
        self.get(staff).map_or(0, |f| f.total_assigned_this_week)
    }

    /// Commits one assignment.
    pub fn record_assignment(&mut self, staff: &str, shift: ShiftType) {
        let entry = self.entries.entry(staff.to_string()).or_default();
        entry.total_assigned_this_week = entry.total_assigned_this_week.saturating_add(1);
        entry.shift_type_counts.increment(shift);
        entry.last_assigned_shift = Some(shift);
    }

    /// Freezes the current counters into a persistable seed.
    pub fn to_seed(&self) -> FairnessSeed {
        let mut seed = FairnessSeed::default();
        for (name, entry) in &self.entries {
            seed.weekly_counts
                .insert(name.clone(), entry.total_assigned_this_week);
            seed.shift_type_counts
                .insert(name.clone(), entry.shift_type_counts);
        }
        seed
    }
}
