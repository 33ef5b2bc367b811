//! Candidate ranking and the constraint relaxation ladder.
//!
//! Filling one (day, shift) slot is a two-step affair: the relaxation
//! ladder decides *who* is eligible, the ranker decides *in which order*.
//! The ladder walks progressively looser tiers and re-ranks at each one
//! until enough candidates remain.
//!
//! # Usage
//!
//! ```
//! use u_roster::ranking::{rules, CandidateRanker};
//!
//! let ranker = CandidateRanker::new()
//!     .with_weighted_rule(rules::WeeklyLoad, 1.0)
//!     .with_weighted_rule(rules::ShiftHistory, 0.6)
//!     .with_jitter(0.2);
//! ```

mod engine;
mod random;
mod relaxation;
pub mod rules;

pub use engine::CandidateRanker;
pub use random::{shuffle, RandomSource, RngSource, SequenceSource};
pub use relaxation::{fill_slot, needs_weekend_rest, RelaxationTier, SlotFill, SlotRequest};

use crate::models::{ShiftType, StaffFairness};
use std::fmt::Debug;

/// Score returned by a ranking rule.
///
/// Lower scores = picked first.
pub type RuleScore = f64;

/// A rule contributing one term to a candidate's fairness score.
///
/// # Score Convention
/// **Lower score = higher priority.**
pub trait RankingRule: Send + Sync + Debug {
    /// Rule name (e.g., "LOAD").
    fn name(&self) -> &'static str;

    /// Scores a staff member for a slot of type `shift`.
    fn evaluate(&self, fairness: &StaffFairness, shift: ShiftType) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
