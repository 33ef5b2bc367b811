//! Constraint relaxation ladder for filling one slot.
//!
//! # Eligibility
//!
//! The *base pool* for a slot is everyone in the day's shuffled order who
//! is not yet working that day, has fewer than five assignments this week,
//! and is not unavailable that day. These hard filters are never relaxed.
//!
//! On Saturday and Sunday, staff who worked the Night shift on both
//! Thursday and Friday are held out of the base pool for weekend rest.
//!
//! # Tiers
//!
//! | Tier | Soft constraint kept |
//! |------|----------------------|
//! | Preferred | last shift differs from this one, no Night→Night |
//! | NoConsecutiveNight | no Night→Night |
//! | Unconstrained | none |
//! | WeekendOverride | none; weekend-rest staff added back |
//!
//! The ladder stops at the first tier whose ranked pool covers the
//! headcount. `WeekendOverride` is only tried when ad hoc leave exists for
//! that day.

use std::collections::HashSet;
use std::fmt;

use tracing::{debug, warn};

use super::{CandidateRanker, RandomSource};
use crate::error::{RosterError, RosterResult};
use crate::models::{Day, FairnessTracker, ShiftType, UnavailabilitySet, WeeklySchedule};
use crate::validation::MAX_WORKDAYS_PER_WEEK;

/// One step of the eligibility ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RelaxationTier {
    /// Rotate shift type day-to-day and avoid consecutive nights.
    Preferred,
    /// Allow repeating the same shift type, still no consecutive nights.
    NoConsecutiveNight,
    /// Only hard constraints apply.
    Unconstrained,
    /// Unconstrained, with weekend-rest staff added back.
    WeekendOverride,
}

impl RelaxationTier {
    /// Tiers tried on every slot, strictest first.
    pub const LADDER: [RelaxationTier; 3] = [
        RelaxationTier::Preferred,
        RelaxationTier::NoConsecutiveNight,
        RelaxationTier::Unconstrained,
    ];

    /// Whether someone whose last shift was `last` may take `shift` at this tier.
    pub fn admits(self, last: Option<ShiftType>, shift: ShiftType) -> bool {
        let night_after_night = last == Some(ShiftType::Night) && shift == ShiftType::Night;
        match self {
            RelaxationTier::Preferred => last != Some(shift) && !night_after_night,
            RelaxationTier::NoConsecutiveNight => !night_after_night,
            RelaxationTier::Unconstrained | RelaxationTier::WeekendOverride => true,
        }
    }

    /// Short name for logs.
    pub fn name(self) -> &'static str {
        match self {
            RelaxationTier::Preferred => "preferred",
            RelaxationTier::NoConsecutiveNight => "no-consecutive-night",
            RelaxationTier::Unconstrained => "unconstrained",
            RelaxationTier::WeekendOverride => "weekend-override",
        }
    }
}

impl fmt::Display for RelaxationTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether `staff` is held out of `day` for weekend rest.
///
/// True on Saturday or Sunday for anyone on the Thursday and Friday Night
/// shifts of `schedule`.
pub fn needs_weekend_rest(staff: &str, day: Day, schedule: &WeeklySchedule) -> bool {
    day.is_weekend()
        && schedule.works(staff, Day::Thu, ShiftType::Night)
        && schedule.works(staff, Day::Fri, ShiftType::Night)
}

/// Everything the ladder needs to know about one slot.
#[derive(Debug, Clone, Copy)]
pub struct SlotRequest<'a> {
    pub day: Day,
    pub shift: ShiftType,
    pub staff_per_shift: usize,
    /// The day's shuffled roster.
    pub base_order: &'a [String],
    /// Staff already placed on an earlier shift of the same day.
    pub assigned_today: &'a HashSet<String>,
    pub unavailability: &'a UnavailabilitySet,
    /// Schedule built so far (for weekend-rest lookups).
    pub schedule: &'a WeeklySchedule,
}

impl SlotRequest<'_> {
    fn passes_hard_constraints(&self, staff: &str, tracker: &FairnessTracker) -> bool {
        !self.assigned_today.contains(staff)
            && (tracker.weekly_total(staff) as usize) < MAX_WORKDAYS_PER_WEEK
            && !self.unavailability.is_unavailable(staff, self.day)
    }
}

/// Outcome of a successful slot fill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotFill<'a> {
    /// The first `staff_per_shift` ranked candidates.
    pub selected: Vec<&'a str>,
    /// Tier that produced enough candidates.
    pub tier: RelaxationTier,
    /// Size of the ranked pool selected from.
    pub pool_size: usize,
}

impl<'a> SlotFill<'a> {
    fn take(mut ranked: Vec<&'a str>, tier: RelaxationTier, headcount: usize) -> Self {
        let pool_size = ranked.len();
        ranked.truncate(headcount);
        Self {
            selected: ranked,
            tier,
            pool_size,
        }
    }
}

/// Walks the relaxation ladder for one slot and picks its staff.
///
/// Does not commit anything; the caller records the selection in the
/// fairness tracker.
///
/// # Errors
/// [`RosterError::InsufficientCandidates`] if the slot cannot be filled
/// after full relaxation.
pub fn fill_slot<'a>(
    slot: &SlotRequest<'a>,
    tracker: &FairnessTracker,
    ranker: &CandidateRanker,
    rng: &mut dyn RandomSource,
) -> RosterResult<SlotFill<'a>> {
    let headcount = slot.staff_per_shift;

    let eligible: Vec<&'a str> = slot
        .base_order
        .iter()
        .map(String::as_str)
        .filter(|s| slot.passes_hard_constraints(s, tracker))
        .collect();
    let pool: Vec<&'a str> = eligible
        .iter()
        .copied()
        .filter(|s| !needs_weekend_rest(s, slot.day, slot.schedule))
        .collect();

    let mut available = 0;
    for tier in RelaxationTier::LADDER {
        let candidates: Vec<&'a str> = pool
            .iter()
            .copied()
            .filter(|s| {
                let last = tracker.get(s).and_then(|f| f.last_assigned_shift);
                tier.admits(last, slot.shift)
            })
            .collect();
        let ranked = ranker.rank(&candidates, slot.shift, tracker, rng);
        if ranked.len() >= headcount {
            return Ok(SlotFill::take(ranked, tier, headcount));
        }
        debug!(
            day = %slot.day,
            shift = %slot.shift,
            tier = %tier,
            candidates = ranked.len(),
            required = headcount,
            "tier short of headcount, relaxing"
        );
        available = ranked.len();
    }

    let rested = eligible.len() - pool.len();
    if rested > 0 && slot.unavailability.has_leave_on(slot.day) {
        let ranked = ranker.rank(&eligible, slot.shift, tracker, rng);
        if ranked.len() >= headcount {
            warn!(
                day = %slot.day,
                shift = %slot.shift,
                rested,
                "ad hoc leave on weekend: overriding double-night rest"
            );
            return Ok(SlotFill::take(
                ranked,
                RelaxationTier::WeekendOverride,
                headcount,
            ));
        }
        available = ranked.len();
    }

    Err(RosterError::InsufficientCandidates {
        day: slot.day,
        shift: slot.shift,
        available,
        required: headcount,
    })
}
