use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Source of uniform draws in `[0, 1)`.
///
/// Every integer the engine samples is derived as `floor(unit * n)`, so a
/// scripted source fully determines an analysis.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;

    /// Uniform index in `0..n`; returns 0 when `n` is 0
    fn pick(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        let index = (self.next_unit() * n as f64).floor() as usize;
        index.min(n - 1)
    }

    /// Fisher-Yates shuffle consuming `len - 1` draws, from the back
    fn shuffle<T>(&mut self, items: &mut [T])
    where
        Self: Sized,
    {
        for i in (1..items.len()).rev() {
            let j = self.pick(i + 1);
            items.swap(i, j);
        }
    }
}

/// Adapter over any `rand` generator
#[derive(Debug, Clone)]
pub struct RngSource<R: Rng>(R);

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self(rng)
    }
}

impl RngSource<ThreadRng> {
    /// OS-seeded; results differ between calls
    pub fn thread() -> Self {
        Self(rand::thread_rng())
    }
}

impl RngSource<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}

/// Replays a fixed list of unit draws, wrapping around when exhausted
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    draws: Vec<f64>,
    cursor: usize,
}

impl ScriptedSource {
    /// Values are clamped into `[0, 1)`. An empty script always yields 0.
    pub fn new(draws: Vec<f64>) -> Self {
        let draws = draws
            .into_iter()
            .map(|d| d.clamp(0.0, 1.0 - f64::EPSILON))
            .collect();
        Self { draws, cursor: 0 }
    }

    /// Number of draws handed out so far
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedSource {
    fn next_unit(&mut self) -> f64 {
        if self.draws.is_empty() {
            self.cursor += 1;
            return 0.0;
        }
        let value = self.draws[self.cursor % self.draws.len()];
        self.cursor += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_maps_unit_interval_onto_indices() {
        let mut source = ScriptedSource::new(vec![0.0, 0.34, 0.67, 0.999]);
        assert_eq!(source.pick(3), 0);
        assert_eq!(source.pick(3), 1);
        assert_eq!(source.pick(3), 2);
        assert_eq!(source.pick(3), 2);
        assert_eq!(source.consumed(), 4);
    }

    #[test]
    fn test_pick_zero_is_zero() {
        let mut source = ScriptedSource::new(vec![0.5]);
        assert_eq!(source.pick(0), 0);
    }

    #[test]
    fn test_scripted_values_are_clamped() {
        let mut source = ScriptedSource::new(vec![1.5, -2.0]);
        assert_eq!(source.pick(10), 9);
        assert_eq!(source.pick(10), 0);
    }

    #[test]
    fn test_script_wraps_around() {
        let mut source = ScriptedSource::new(vec![0.1, 0.9]);
        let draws: Vec<f64> = (0..4).map(|_| source.next_unit()).collect();
        assert_eq!(draws, vec![0.1, 0.9, 0.1, 0.9]);
    }

    #[test]
    fn test_shuffle_with_zero_draws_rotates_front_element_back() {
        // j = 0 for every i: swaps (3,0), (2,0), (1,0)
        let mut items = vec!['a', 'b', 'c', 'd'];
        let mut source = ScriptedSource::new(vec![0.0]);
        source.shuffle(&mut items);
        assert_eq!(items, vec!['b', 'c', 'd', 'a']);
        assert_eq!(source.consumed(), 3);
    }

    #[test]
    fn test_shuffle_with_high_draws_keeps_order() {
        // j = i for every i: each swap is a no-op
        let mut items = vec![1, 2, 3, 4, 5];
        let mut source = ScriptedSource::new(vec![0.999]);
        source.shuffle(&mut items);
        assert_eq!(items, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_seeded_sources_agree() {
        let mut a = RngSource::seeded(99);
        let mut b = RngSource::seeded(99);
        for _ in 0..16 {
            let x = a.next_unit();
            assert!((0.0..1.0).contains(&x));
            assert_eq!(x, b.next_unit());
        }
    }

    #[test]
    fn test_thread_source_stays_in_range() {
        let mut source = RngSource::thread();
        for _ in 0..1000 {
            assert!(source.pick(25) < 25);
        }
    }
}
