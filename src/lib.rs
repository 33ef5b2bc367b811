//! Weekly staff rostering for the U-Engine ecosystem.
//!
//! Generates a 7-day × 3-shift roster (Morning, Day, Night) with a fixed
//! headcount per shift, honoring unavailability and a two-off-days-per-week
//! policy, and rotates people across shift types from one week to the next.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Day`, `ShiftType`, `ShiftHours`,
//!   `UnavailabilitySet`, `WeeklySchedule`, `FairnessTracker`, `FairnessSeed`
//! - **`validation`**: Roster integrity and capacity feasibility checks
//! - **`ranking`**: Fairness ranker, relaxation ladder, injectable randomness
//! - **`scheduler`**: Greedy weekly assembler and derived work statistics
//! - **`config`**: Headcount and shift-hour configuration
//! - **`input`** / **`export`**: Roster text parsing, CSV and notifications
//!
//! # Example
//!
//! ```
//! use u_roster::models::{Day, ShiftHours, UnavailabilitySet};
//! use u_roster::scheduler::{compute_work_stats, RosterRequest, WeeklyScheduler};
//! use u_roster::ranking::RngSource;
//!
//! let staff: Vec<String> = (1..=14).map(|i| format!("Staff {i}")).collect();
//! let unavailability = UnavailabilitySet::builder()
//!     .with_base("Staff 1", [Day::Sat, Day::Sun])
//!     .with_leave("Staff 2", Day::Wed)
//!     .build();
//! let request = RosterRequest::new(staff.clone(), 1).with_unavailability(unavailability);
//!
//! let week1 = WeeklyScheduler::new()
//!     .generate(&request, &mut RngSource::thread())
//!     .unwrap();
//! let stats = compute_work_stats(&week1.schedule, &staff, &ShiftHours::default());
//! assert_eq!(stats.total_days_worked(), 21);
//!
//! // Next week rotates shift types using this week's counts.
//! let week2 = WeeklyScheduler::new()
//!     .generate(&request.with_prior_week(week1.stats), &mut RngSource::thread())
//!     .unwrap();
//! assert_eq!(week2.schedule.assignment_count(), 21);
//! ```
//!
//! # References
//!
//! - Ernst et al. (2004), "Staff scheduling and rostering: A review of
//!   applications, methods and models"
//! - Burke et al. (2004), "The State of the Art of Nurse Rostering"

pub mod config;
pub mod error;
pub mod export;
pub mod input;
pub mod models;
pub mod ranking;
pub mod scheduler;
pub mod validation;

pub use error::{RosterError, RosterResult};
