//! Weekly schedule (solution) model.
//!
//! A schedule is a 7 × 3 grid of cells, one per (day, shift) slot, each
//! holding the staff assigned to it in assignment order.

use serde::{Deserialize, Serialize};

use super::{Day, ShiftType};

/// A complete or in-progress weekly roster.
///
/// Built day-major then shift-major by the assembler; read-only once the
/// run completes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySchedule {
    /// `cells[day][shift]` → assigned staff ids.
    cells: [[Vec<String>; ShiftType::COUNT]; 7],
}

impl WeeklySchedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Staff assigned to a slot, in assignment order.
    #[inline]
    pub fn assigned(&self, day: Day, shift: ShiftType) -> &[String] {
        &self.cells[day.index()][shift.index()]
    }

    /// Replaces the assignment list of a slot.
    pub fn set_assigned(&mut self, day: Day, shift: ShiftType, staff: Vec<String>) {
        self.cells[day.index()][shift.index()] = staff;
    }

    /// Whether `staff` works `shift` on `day`.
    pub fn works(&self, staff: &str, day: Day, shift: ShiftType) -> bool {
        self.assigned(day, shift).iter().any(|s| s == staff)
    }

    /// The shift `staff` works on `day`, if any.
    pub fn shift_of(&self, staff: &str, day: Day) -> Option<ShiftType> {
        ShiftType::ALL
            .into_iter()
            .find(|&shift| self.works(staff, day, shift))
    }

    /// Iterates `(day, shift, staff)` for every slot in week order.
    pub fn slots(&self) -> impl Iterator<Item = (Day, ShiftType, &[String])> + '_ {
        Day::ALL.into_iter().flat_map(move |day| {
            ShiftType::ALL
                .into_iter()
                .map(move |shift| (day, shift, self.assigned(day, shift)))
        })
    }

    /// All `(day, shift)` pairs worked by `staff`, in week order.
    pub fn assignments_for<'a>(
        &'a self,
        staff: &'a str,
    ) -> impl Iterator<Item = (Day, ShiftType)> + 'a {
        self.slots()
            .filter(move |(_, _, assigned)| assigned.iter().any(|s| s == staff))
            .map(|(day, shift, _)| (day, shift))
    }

    /// Total number of assignments across all slots.
    pub fn assignment_count(&self) -> usize {
        self.slots().map(|(_, _, assigned)| assigned.len()).sum()
    }
}
