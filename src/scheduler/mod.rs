//! Weekly roster assembly and derived statistics.
//!
//! # Algorithm
//!
//! `WeeklyScheduler` is a randomized, fairness-ranked greedy assembler. It
//! fills the 21 (day, shift) slots in order, relaxing soft constraints per
//! slot when needed. It is not optimal and never backtracks.
//!
//! # Statistics
//!
//! `compute_work_stats` and `compute_off_by_day` derive per-staff totals and
//! per-day off lists from a finished schedule.

mod assembler;
mod stats;

pub use assembler::{generate_weekly_schedule, GeneratedRoster, RosterRequest, WeeklyScheduler};
pub use stats::{compute_off_by_day, compute_work_stats, OffByDay, StaffWorkStats, WorkStats};
