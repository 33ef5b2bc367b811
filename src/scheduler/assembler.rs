//! Greedy weekly roster assembler.
//!
//! # Algorithm
//!
//! 1. Validate the roster and check capacity (two off days per person).
//! 2. Seed fairness counters from the prior week's shift-type counts.
//! 3. For each day Mon→Sun, shuffle the roster once.
//! 4. For each shift Morning→Day→Night, walk the relaxation ladder and
//!    take the first `staff_per_shift` ranked candidates.
//! 5. Commit each pick to the fairness tracker and the day's used set.
//!
//! There is no backtracking: an early choice is never revisited, and any
//! slot that cannot be filled aborts the whole run.
//!
//! # Complexity
//! O(d · s · n log n) where d=7 days, s=3 shifts, n=staff.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::RosterResult;
use crate::models::{
    Day, FairnessSeed, FairnessTracker, ShiftType, UnavailabilitySet, WeeklySchedule,
};
use crate::ranking::{fill_slot, shuffle, CandidateRanker, RandomSource, RngSource, SlotRequest};
use crate::validation::{check_feasibility, validate_staff};

/// Input container for one generation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RosterRequest {
    /// Staff ids in roster order. Must be unique and non-blank.
    pub staff: Vec<String>,
    /// People required on every shift.
    pub staff_per_shift: usize,
    /// Statistics returned by last week's run, if any.
    pub prior_week: Option<FairnessSeed>,
    /// Merged base unavailability and ad hoc leave.
    pub unavailability: UnavailabilitySet,
}

impl RosterRequest {
    /// Creates a request with no history and no unavailability.
    pub fn new(staff: impl IntoIterator<Item = impl Into<String>>, staff_per_shift: usize) -> Self {
        Self {
            staff: staff.into_iter().map(Into::into).collect(),
            staff_per_shift,
            prior_week: None,
            unavailability: UnavailabilitySet::new(),
        }
    }

    /// Seeds shift-type rotation from last week's statistics.
    pub fn with_prior_week(mut self, seed: FairnessSeed) -> Self {
        self.prior_week = Some(seed);
        self
    }

    /// Sets the week's unavailability.
    pub fn with_unavailability(mut self, unavailability: UnavailabilitySet) -> Self {
        self.unavailability = unavailability;
        self
    }
}

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedRoster {
    /// The filled 7 × 3 roster.
    pub schedule: WeeklySchedule,
    /// Final fairness counters, to persist as next week's `prior_week`.
    pub stats: FairnessSeed,
}

/// Fairness-ranked greedy roster generator.
///
/// # Example
///
/// ```
/// use u_roster::ranking::SequenceSource;
/// use u_roster::scheduler::{RosterRequest, WeeklyScheduler};
///
/// let staff: Vec<String> = (1..=7).map(|i| format!("S{i}")).collect();
/// let request = RosterRequest::new(staff, 1);
///
/// let mut rng = SequenceSource::new(vec![0.3, 0.7, 0.1]);
/// let roster = WeeklyScheduler::new().generate(&request, &mut rng).unwrap();
/// assert_eq!(roster.schedule.assignment_count(), 21);
/// ```
#[derive(Debug, Clone, Default)]
pub struct WeeklyScheduler {
    ranker: CandidateRanker,
}

impl WeeklyScheduler {
    /// Creates a scheduler with the default fairness ranker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the candidate ranker.
    pub fn with_ranker(mut self, ranker: CandidateRanker) -> Self {
        self.ranker = ranker;
        self
    }

    /// Generates one week's roster.
    ///
    /// # Errors
    /// Any [`RosterError`](crate::error::RosterError) from validation,
    /// the feasibility check, or an unfillable slot. No partial schedule is
    /// returned.
    pub fn generate(
        &self,
        request: &RosterRequest,
        rng: &mut dyn RandomSource,
    ) -> RosterResult<GeneratedRoster> {
        validate_staff(&request.staff)?;
        check_feasibility(request.staff.len(), request.staff_per_shift)?;

        let mut tracker = FairnessTracker::seeded(&request.staff, request.prior_week.as_ref());
        let mut schedule = WeeklySchedule::new();

        for day in Day::ALL {
            let mut base_order = request.staff.clone();
            shuffle(&mut base_order, rng);
            let mut assigned_today: HashSet<String> = HashSet::new();

            for shift in ShiftType::ALL {
                let selected: Vec<String> = {
                    let slot = SlotRequest {
                        day,
                        shift,
                        staff_per_shift: request.staff_per_shift,
                        base_order: &base_order,
                        assigned_today: &assigned_today,
                        unavailability: &request.unavailability,
                        schedule: &schedule,
                    };
                    let fill = fill_slot(&slot, &tracker, &self.ranker, rng)?;
                    debug!(
                        day = %day,
                        shift = %shift,
                        tier = %fill.tier,
                        pool = fill.pool_size,
                        "slot filled"
                    );
                    fill.selected.into_iter().map(str::to_string).collect()
                };

                for staff in &selected {
                    tracker.record_assignment(staff, shift);
                    assigned_today.insert(staff.clone());
                }
                schedule.set_assigned(day, shift, selected);
            }
        }

        info!(
            staff = request.staff.len(),
            staff_per_shift = request.staff_per_shift,
            seeded = request.prior_week.is_some(),
            "weekly roster generated"
        );

        Ok(GeneratedRoster {
            stats: tracker.to_seed(),
            schedule,
        })
    }
}

/// Generates a roster with the default ranker and an unseeded thread RNG.
pub fn generate_weekly_schedule(
    staff: &[String],
    staff_per_shift: usize,
    prior_week: Option<FairnessSeed>,
    unavailability: UnavailabilitySet,
) -> RosterResult<GeneratedRoster> {
    let request = RosterRequest {
        staff: staff.to_vec(),
        staff_per_shift,
        prior_week,
        unavailability,
    };
    WeeklyScheduler::new().generate(&request, &mut RngSource::thread())
}
