//! Injectable randomness for shuffling and tie-break jitter.
//!
//! Generation consults a [`RandomSource`] for exactly two things: the
//! per-day shuffle of the roster and the per-candidate jitter added to
//! fairness scores. Production runs use [`RngSource`] over a `rand`
//! generator; tests substitute [`SequenceSource`] to pin tie-breaks.

use rand::rngs::ThreadRng;
use rand::Rng;

/// A source of uniform floats in `[0, 1)`.
pub trait RandomSource {
    /// Next value in `[0, 1)`.
    fn next(&mut self) -> f64;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next(&mut self) -> f64 {
        (**self).next()
    }
}

/// Adapts any [`rand::Rng`] into a [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R>(R);

impl<R: Rng> RngSource<R> {
    /// Wraps a generator.
    pub fn new(rng: R) -> Self {
        Self(rng)
    }
}

impl RngSource<ThreadRng> {
    /// Thread-local, unseeded generator.
    pub fn thread() -> Self {
        Self(rand::rng())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next(&mut self) -> f64 {
        self.0.random::<f64>()
    }
}

/// Replays a fixed sequence of values, cycling when exhausted.
///
/// An empty sequence yields `0.0` forever. Values are clamped into `[0, 1)`.
#[derive(Debug, Clone, Default)]
pub struct SequenceSource {
    values: Vec<f64>,
    pos: usize,
}

impl SequenceSource {
    /// Creates a source replaying `values`.
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            pos: 0,
        }
    }

    /// A source that always returns `0.0` (identity shuffle, no jitter).
    pub fn zeros() -> Self {
        Self::default()
    }
}

impl RandomSource for SequenceSource {
    fn next(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let v = self.values[self.pos % self.values.len()];
        self.pos += 1;
        v.clamp(0.0, 1.0 - f64::EPSILON)
    }
}

/// Fisher–Yates shuffle driven by a [`RandomSource`].
///
/// `j` is drawn as `floor(next() * (i + 1))`, so a fixed source gives a
/// fixed permutation.
pub fn shuffle<T>(items: &mut [T], rng: &mut dyn RandomSource) {
    for i in (1..items.len()).rev() {
        let j = ((rng.next() * (i + 1) as f64) as usize).min(i);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sequence_cycles() {
        let mut src = SequenceSource::new(vec![0.1, 0.5]);
        assert_eq!(src.next(), 0.1);
        assert_eq!(src.next(), 0.5);
        assert_eq!(src.next(), 0.1);
    }

    #[test]
    fn test_sequence_clamps() {
        let mut src = SequenceSource::new(vec![1.5, -0.3]);
        assert!(src.next() < 1.0);
        assert_eq!(src.next(), 0.0);
        assert_eq!(SequenceSource::zeros().next(), 0.0);
    }

    #[test]
    fn test_rng_source_range() {
        let mut src = RngSource::new(StdRng::seed_from_u64(42));
        for _ in 0..1000 {
            let v = src.next();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut src = RngSource::new(StdRng::seed_from_u64(7));
        let mut items: Vec<u32> = (0..20).collect();
        shuffle(&mut items, &mut src);
        let mut sorted = items.clone();
        sorted.sort();
        assert_eq!(sorted, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn test_shuffle_deterministic_with_sequence() {
        // Values just below 1.0 pick j = i every step → identity.
        let mut src = SequenceSource::new(vec![0.999]);
        let mut items = vec!["a", "b", "c", "d"];
        shuffle(&mut items, &mut src);
        assert_eq!(items, vec!["a", "b", "c", "d"]);

        // Zeros always swap with the head.
        let mut src = SequenceSource::zeros();
        let mut items = vec!["a", "b", "c"];
        shuffle(&mut items, &mut src);
        // i=2: swap(2,0) → c b a; i=1: swap(1,0) → b c a
        assert_eq!(items, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_shuffle_trivial_inputs() {
        let mut src = SequenceSource::zeros();
        let mut empty: Vec<u8> = Vec::new();
        shuffle(&mut empty, &mut src);
        let mut one = vec![1];
        shuffle(&mut one, &mut src);
        assert_eq!(one, vec![1]);
    }
}
