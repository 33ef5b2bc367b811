//! Staff unavailability for one roster week.
//!
//! Two sources feed it: recurring base unavailability (days a person never
//! works) and ad hoc leave (one-off absences for this week). They are merged
//! once, up front, by [`UnavailabilityBuilder`] into an immutable
//! [`UnavailabilitySet`]. Both kinds exclude a person from that day in every
//! relaxation tier; ad hoc leave is additionally tracked per day because it
//! licenses the weekend double-night override.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use super::Day;

/// Immutable per-run unavailability.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnavailabilitySet {
    /// staff id → days the person cannot be scheduled (base ∪ leave).
    by_staff: BTreeMap<String, BTreeSet<Day>>,
    /// Days on which at least one ad hoc leave was recorded.
    leave_days: BTreeSet<Day>,
}

impl UnavailabilitySet {
    /// An empty set: everyone is available every day.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a builder.
    pub fn builder() -> UnavailabilityBuilder {
        UnavailabilityBuilder::default()
    }

    /// Whether `staff` cannot work on `day`.
    pub fn is_unavailable(&self, staff: &str, day: Day) -> bool {
        self.by_staff
            .get(staff)
            .is_some_and(|days| days.contains(&day))
    }

    /// Whether any ad hoc leave was recorded for `day`.
    pub fn has_leave_on(&self, day: Day) -> bool {
        self.leave_days.contains(&day)
    }

    /// Days `staff` is unavailable, in week order.
    pub fn days_for(&self, staff: &str) -> impl Iterator<Item = Day> + '_ {
        self.by_staff.get(staff).into_iter().flatten().copied()
    }

    /// Whether nobody is unavailable on any day.
    pub fn is_empty(&self) -> bool {
        self.by_staff.values().all(BTreeSet::is_empty)
    }
}

/// Merges base unavailability and ad hoc leave into one [`UnavailabilitySet`].
#[derive(Debug, Clone, Default)]
pub struct UnavailabilityBuilder {
    base: BTreeMap<String, BTreeSet<Day>>,
    leave: BTreeMap<String, BTreeSet<Day>>,
}

impl UnavailabilityBuilder {
    /// Adds recurring unavailable days for a staff member.
    pub fn with_base(
        mut self,
        staff: impl Into<String>,
        days: impl IntoIterator<Item = Day>,
    ) -> Self {
        self.base.entry(staff.into()).or_default().extend(days);
        self
    }

    /// Adds one ad hoc leave day for a staff member.
    pub fn with_leave(mut self, staff: impl Into<String>, day: Day) -> Self {
        self.leave.entry(staff.into()).or_default().insert(day);
        self
    }

    /// Produces the merged set.
    pub fn build(self) -> UnavailabilitySet {
        let mut by_staff = self.base;
        let mut leave_days = BTreeSet::new();
        for (staff, days) in self.leave {
            leave_days.extend(days.iter().copied());
            by_staff.entry(staff).or_default().extend(days);
        }
        UnavailabilitySet {
            by_staff,
            leave_days,
        }
    }
}
