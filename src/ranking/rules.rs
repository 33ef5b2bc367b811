//! Built-in ranking rules.
//!
//! # Score Convention
//! All rules return lower scores for staff who should be picked first.

use super::{RankingRule, RuleScore};
use crate::models::{ShiftType, StaffFairness};

/// Assignments already made this week.
///
/// Balances total workload across the roster.
#[derive(Debug, Clone, Copy)]
pub struct WeeklyLoad;

impl RankingRule for WeeklyLoad {
    fn name(&self) -> &'static str {
        "LOAD"
    }

    fn evaluate(&self, fairness: &StaffFairness, _shift: ShiftType) -> RuleScore {
        fairness.total_assigned_this_week as f64
    }

    fn description(&self) -> &'static str {
        "Weekly assignment count"
    }
}

/// Historical count of the shift type being filled.
///
/// Includes prior-week counts when seeded, so people who worked many
/// nights last week drift toward other shift types this week.
#[derive(Debug, Clone, Copy)]
pub struct ShiftHistory;

impl RankingRule for ShiftHistory {
    fn name(&self) -> &'static str {
        "HIST"
    }

    fn evaluate(&self, fairness: &StaffFairness, shift: ShiftType) -> RuleScore {
        fairness.shift_type_counts.get(shift) as f64
    }

    fn description(&self) -> &'static str {
        "Shift-type history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ShiftCounts;

    fn fairness(total: u32, night: u32) -> StaffFairness {
        StaffFairness {
            total_assigned_this_week: total,
            shift_type_counts: ShiftCounts {
                morning: 0,
                day: 0,
                night,
            },
            last_assigned_shift: None,
        }
    }

    #[test]
    fn test_weekly_load() {
        let f = fairness(3, 1);
        assert!((WeeklyLoad.evaluate(&f, ShiftType::Morning) - 3.0).abs() < 1e-10);
        assert!((WeeklyLoad.evaluate(&f, ShiftType::Night) - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_shift_history() {
        let f = fairness(3, 4);
        assert!((ShiftHistory.evaluate(&f, ShiftType::Night) - 4.0).abs() < 1e-10);
        assert!((ShiftHistory.evaluate(&f, ShiftType::Day) - 0.0).abs() < 1e-10);
    }
}
