//! Rostering domain models.
//!
//! Provides the core data types for a weekly shift roster: the week grid
//! (days × shift types), per-run unavailability, the schedule itself, and
//! the fairness memory carried from one week to the next.
//!
//! # Domain Mappings
//!
//! | u-roster | Hospital | Security Ops | Retail |
//! |----------|----------|--------------|--------|
//! | Staff | Nurse | Analyst | Clerk |
//! | ShiftType | Early/Late/Night | Day/Swing/Grave | Open/Mid/Close |
//! | Leave | Sick call | Emergency PTO | Swap request |

mod fairness;
mod schedule;
mod unavailability;
mod week;

pub use fairness::{FairnessSeed, FairnessTracker, ShiftCounts, StaffFairness};
pub use schedule::WeeklySchedule;
pub use unavailability::{UnavailabilityBuilder, UnavailabilitySet};
pub use week::{Day, ShiftHours, ShiftType};
