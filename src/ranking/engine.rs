//! Fairness ranker for slot candidates.
//!
//! Combines weighted ranking rules into a single score per candidate, adds
//! a small random jitter, and orders candidates by ascending score.

use std::sync::Arc;

use super::{rules, RandomSource, RankingRule};
use crate::models::{FairnessTracker, ShiftType, StaffFairness};

#[derive(Clone)]
struct WeightedRule {
    rule: Arc<dyn RankingRule>,
    weight: f64,
}

/// Orders eligible staff for one (day, shift) slot.
///
/// `score = Σ weight·rule + uniform[0, jitter)`, lowest first. The ranker
/// holds no state between calls; repeat calls over the same input differ
/// only through the random source.
///
/// # Example
/// ```
/// use u_roster::models::{FairnessTracker, ShiftType};
/// use u_roster::ranking::{CandidateRanker, SequenceSource};
///
/// let mut tracker = FairnessTracker::new(&["Alice", "Bob"]);
/// tracker.record_assignment("Alice", ShiftType::Morning);
///
/// let ranker = CandidateRanker::default();
/// let mut rng = SequenceSource::zeros();
/// let ranked = ranker.rank(&["Alice", "Bob"], ShiftType::Day, &tracker, &mut rng);
/// assert_eq!(ranked, vec!["Bob", "Alice"]);
/// ```
#[derive(Clone)]
pub struct CandidateRanker {
    rules: Vec<WeightedRule>,
    jitter: f64,
}

impl CandidateRanker {
    /// Default weight of the weekly-load rule.
    pub const LOAD_WEIGHT: f64 = 1.0;
    /// Default weight of the shift-type history rule.
    pub const HISTORY_WEIGHT: f64 = 0.6;
    /// Default upper bound of the tie-break jitter.
    pub const JITTER: f64 = 0.2;

    /// Creates a ranker with no rules and no jitter.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            jitter: 0.0,
        }
    }

    /// Weekly load first, then shift-type diversity, then random tie-break.
    pub fn fairness() -> Self {
        Self::new()
            .with_weighted_rule(rules::WeeklyLoad, Self::LOAD_WEIGHT)
            .with_weighted_rule(rules::ShiftHistory, Self::HISTORY_WEIGHT)
            .with_jitter(Self::JITTER)
    }

    /// Adds a weighted rule.
    pub fn with_weighted_rule<R: RankingRule + 'static>(mut self, rule: R, weight: f64) -> Self {
        self.rules.push(WeightedRule {
            rule: Arc::new(rule),
            weight,
        });
        self
    }

    /// Sets the jitter bound. Negative values are treated as zero.
    pub fn with_jitter(mut self, jitter: f64) -> Self {
        self.jitter = jitter.max(0.0);
        self
    }

    /// Deterministic part of the score.
    pub fn base_score(&self, fairness: &StaffFairness, shift: ShiftType) -> f64 {
        self.rules
            .iter()
            .map(|wr| wr.rule.evaluate(fairness, shift) * wr.weight)
            .sum()
    }

    /// Ranks `candidates` for `shift`, lowest score first.
    ///
    /// Jitter is drawn once per candidate in input order. The sort is
    /// stable, so exact ties keep input order. Staff unknown to the tracker
    /// score as if they had no history.
    pub fn rank<'a>(
        &self,
        candidates: &[&'a str],
        shift: ShiftType,
        tracker: &FairnessTracker,
        rng: &mut dyn RandomSource,
    ) -> Vec<&'a str> {
        let fresh = StaffFairness::default();
        let mut scored: Vec<(&'a str, f64)> = candidates
            .iter()
            .map(|&s| {
                let fairness = tracker.get(s).unwrap_or(&fresh);
                let score = self.base_score(fairness, shift) + rng.next() * self.jitter;
                (s, score)
            })
            .collect();

        scored.sort_by(|a, b| a.1.total_cmp(&b.1));
        scored.into_iter().map(|(s, _)| s).collect()
    }
}

impl Default for CandidateRanker {
    fn default() -> Self {
        Self::fairness()
    }
}

impl std::fmt::Debug for CandidateRanker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CandidateRanker")
            .field(
                "rules",
                &self
                    .rules
                    .iter()
                    .map(|r| format!("{}(w={})", r.rule.name(), r.weight))
                    .collect::<Vec<_>>(),
            )
            .field("jitter", &self.jitter)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FairnessSeed, ShiftCounts};
    use crate::ranking::SequenceSource;

    fn tracker_with(loads: &[(&str, u32)]) -> FairnessTracker {
        let names: Vec<&str> = loads.iter().map(|(n, _)| *n).collect();
        let mut t = FairnessTracker::new(&names);
        for &(name, load) in loads {
            for _ in 0..load {
                t.record_assignment(name, ShiftType::Morning);
            }
        }
        t
    }

    #[test]
    fn test_load_ordering() {
        let t = tracker_with(&[("A", 3), ("B", 1), ("C", 2)]);
        let ranker = CandidateRanker::default();
        let mut rng = SequenceSource::zeros();

        let ranked = ranker.rank(&["A", "B", "C"], ShiftType::Night, &t, &mut rng);
        assert_eq!(ranked, vec!["B", "C", "A"]);
    }

    #[test]
    fn test_history_breaks_equal_load() {
        let mut seed = FairnessSeed::default();
        seed.shift_type_counts.insert(
            "A".into(),
            ShiftCounts {
                morning: 0,
                day: 0,
                night: 3,
            },
        );
        let t = FairnessTracker::seeded(&["A", "B"], Some(&seed));
        let ranker = CandidateRanker::default();
        let mut rng = SequenceSource::zeros();

        // A: 0 + 0.6*3 = 1.8, B: 0
        assert_eq!(
            ranker.rank(&["A", "B"], ShiftType::Night, &t, &mut rng),
            vec!["B", "A"]
        );
        // History for other shift types is irrelevant.
        assert_eq!(
            ranker.rank(&["A", "B"], ShiftType::Morning, &t, &mut rng),
            vec!["A", "B"]
        );
    }

    #[test]
    fn test_load_outweighs_history() {
        // A: no load, one prior night → 0.6
        // B: one assignment this week, no nights → 1.0
        let mut seed = FairnessSeed::default();
        seed.shift_type_counts.insert(
            "A".into(),
            ShiftCounts {
                morning: 0,
                day: 0,
                night: 1,
            },
        );
        let mut t = FairnessTracker::seeded(&["A", "B"], Some(&seed));
        t.record_assignment("B", ShiftType::Morning);
        let ranker = CandidateRanker::default().with_jitter(0.0);
        let mut rng = SequenceSource::zeros();

        assert_eq!(
            ranker.rank(&["B", "A"], ShiftType::Night, &t, &mut rng),
            vec!["A", "B"]
        );
    }

    #[test]
    fn test_jitter_breaks_ties() {
        let t = tracker_with(&[("A", 0), ("B", 0), ("C", 0)]);
        let ranker = CandidateRanker::default();
        // Jitter drawn in input order: A=0.9, B=0.1, C=0.5
        let mut rng = SequenceSource::new(vec![0.9, 0.1, 0.5]);
        assert_eq!(
            ranker.rank(&["A", "B", "C"], ShiftType::Day, &t, &mut rng),
            vec!["B", "C", "A"]
        );
    }

    #[test]
    fn test_jitter_cannot_override_a_full_assignment() {
        let t = tracker_with(&[("A", 1), ("B", 0)]);
        let ranker = CandidateRanker::default();
        // B gets the maximum jitter, A none.
        let mut rng = SequenceSource::new(vec![0.0, 0.999]);
        assert_eq!(
            ranker.rank(&["A", "B"], ShiftType::Day, &t, &mut rng),
            vec!["B", "A"]
        );
    }

    #[test]
    fn test_stable_for_exact_ties() {
        let t = tracker_with(&[("A", 0), ("B", 0), ("C", 0)]);
        let ranker = CandidateRanker::default();
        let mut rng = SequenceSource::zeros();
        assert_eq!(
            ranker.rank(&["C", "A", "B"], ShiftType::Day, &t, &mut rng),
            vec!["C", "A", "B"]
        );
    }

    #[test]
    fn test_empty_candidates() {
        let t = FairnessTracker::default();
        let ranker = CandidateRanker::default();
        let mut rng = SequenceSource::zeros();
        assert!(ranker.rank(&[], ShiftType::Day, &t, &mut rng).is_empty());
    }

    #[test]
    fn test_debug_lists_rules() {
        let s = format!("{:?}", CandidateRanker::default());
        assert!(s.contains("LOAD(w=1)"));
        assert!(s.contains("HIST(w=0.6)"));
    }
}
