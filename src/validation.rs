//! Input validation and feasibility checks for roster generation.
//!
//! Runs before any assignment is made. Detects:
//! - Blank or duplicate staff ids
//! - Zero headcount per shift
//! - Too few staff to cover a single day without double shifts
//! - Weekly demand above what the two-off-days policy allows
//!
//! The feasibility check is capacity arithmetic only; passing it does not
//! guarantee that generation succeeds once unavailability is applied.

use std::collections::HashSet;

use crate::error::{RosterError, RosterResult};
use crate::models::ShiftType;

/// Maximum days (assignments) any staff member may work per week.
pub const MAX_WORKDAYS_PER_WEEK: usize = 5;

/// Days in a roster week.
pub const DAYS_PER_WEEK: usize = 7;

/// Capacity figures derived from roster size and headcount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feasibility {
    /// Staff needed to cover one day without double shifts.
    pub required_per_day: usize,
    /// Total assignment slots in the week.
    pub weekly_slots: usize,
    /// Assignments the roster can absorb under the five-day cap.
    pub max_capacity: usize,
}

impl Feasibility {
    /// Computes capacity figures without judging them.
    ///
    /// Products saturate at `usize::MAX`; a saturated demand can never be
    /// met by any roster, so the checks below still reject it.
    pub fn compute(staff_count: usize, staff_per_shift: usize) -> Self {
        let required_per_day = staff_per_shift.saturating_mul(ShiftType::COUNT);
        Self {
            required_per_day,
            weekly_slots: required_per_day.saturating_mul(DAYS_PER_WEEK),
            max_capacity: staff_count.saturating_mul(MAX_WORKDAYS_PER_WEEK),
        }
    }

    /// Smallest roster that satisfies the five-day cap.
    pub fn min_staff_needed(&self) -> usize {
        self.weekly_slots.div_ceil(MAX_WORKDAYS_PER_WEEK)
    }
}

/// Checks that `staff_count` people can cover every shift under the
/// two-off-days policy.
///
/// # Errors
/// - [`RosterError::InvalidHeadcount`] if `staff_per_shift` is zero.
/// - [`RosterError::InsufficientStaff`] if one day cannot be covered.
/// - [`RosterError::InfeasiblePolicy`] if the week cannot be covered with
///   at most five workdays per person.
pub fn check_feasibility(staff_count: usize, staff_per_shift: usize) -> RosterResult<Feasibility> {
    if staff_per_shift == 0 {
        return Err(RosterError::InvalidHeadcount);
    }

    let f = Feasibility::compute(staff_count, staff_per_shift);

    if staff_count < f.required_per_day {
        return Err(RosterError::InsufficientStaff {
            required_per_day: f.required_per_day,
            staff_count,
            shift_count: ShiftType::COUNT,
            staff_per_shift,
        });
    }

    if f.max_capacity < f.weekly_slots {
        return Err(RosterError::InfeasiblePolicy {
            min_staff_needed: f.min_staff_needed(),
            staff_per_shift,
            weekly_slots: f.weekly_slots,
            max_capacity: f.max_capacity,
        });
    }

    Ok(f)
}

/// Checks roster integrity: no blank ids, no duplicates.
pub fn validate_staff<S: AsRef<str>>(staff: &[S]) -> RosterResult<()> {
    let mut seen = HashSet::new();
    for s in staff {
        let id = s.as_ref();
        if id.trim().is_empty() {
            return Err(RosterError::BlankStaffId);
        }
        if !seen.insert(id) {
            return Err(RosterError::DuplicateStaff(id.to_string()));
        }
    }
    Ok(())
}
