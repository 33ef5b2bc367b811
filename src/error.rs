//! Error types for roster generation.

use thiserror::Error;

use crate::models::{Day, ShiftType};

/// Errors surfaced by roster validation and generation.
///
/// Generation is all-or-nothing: any of these aborts the run and no
/// partial schedule is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    /// Fewer staff than one day's shifts require.
    #[error(
        "Not enough staff. Need at least {required_per_day} for {shift_count} shifts x {staff_per_shift} per shift per day (have {staff_count})."
    )]
    InsufficientStaff {
        required_per_day: usize,
        staff_count: usize,
        shift_count: usize,
        staff_per_shift: usize,
    },

    /// Weekly demand exceeds what the five-day cap allows.
    #[error(
        "Schedule not feasible with 2 off-days policy. Need at least {min_staff_needed} staff for {staff_per_shift} per shift ({weekly_slots} weekly slots, capacity {max_capacity})."
    )]
    InfeasiblePolicy {
        min_staff_needed: usize,
        staff_per_shift: usize,
        weekly_slots: usize,
        max_capacity: usize,
    },

    /// A slot could not be filled even after full relaxation.
    #[error(
        "Insufficient candidates for {shift} on {day} ({available} of {required}). Increase staff list or reduce staff per shift."
    )]
    InsufficientCandidates {
        day: Day,
        shift: ShiftType,
        available: usize,
        required: usize,
    },

    /// Staff per shift must be at least one.
    #[error("Staff per shift must be a positive integer.")]
    InvalidHeadcount,

    /// Shift durations must be at least one hour.
    #[error("Shift hours must be positive integers ({shift} is 0).")]
    InvalidShiftHours { shift: ShiftType },

    /// The same staff id appears twice in the roster.
    #[error("Duplicate staff id: {0}")]
    DuplicateStaff(String),

    /// A staff id is empty or whitespace only.
    #[error("Staff ids must not be blank.")]
    BlankStaffId,
}

/// Convenience alias for roster results.
pub type RosterResult<T> = Result<T, RosterError>;
