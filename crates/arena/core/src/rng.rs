//! RNG oracle for the round's random draws.
//!
//! Every random decision in a round (page pick, pool sample, opponent picks,
//! luck draw) goes through [`RngOracle`], so a seeded [`PcgRng`] replays a
//! round exactly and tests can script each draw.

/// Source of random numbers for round setup and battle resolution.
pub trait RngOracle: Send {
    /// Generate the next random u32 value.
    fn next_u32(&mut self) -> u32;

    /// Integer in `[0, max_exclusive)` by modulo reduction, so the skew
    /// towards low values is at most `max_exclusive / 2^32`. Returns 0 when
    /// the range is empty.
    fn random_int(&mut self, max_exclusive: u32) -> u32 {
        if max_exclusive == 0 {
            return 0;
        }
        self.next_u32() % max_exclusive
    }

    /// Uniform float in `[0, 1)`.
    fn random_uniform(&mut self) -> f64 {
        f64::from(self.next_u32()) / (f64::from(u32::MAX) + 1.0)
    }

    /// Generate a random value in range [min, max] inclusive.
    fn range(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let span = max - min;
        if span == u32::MAX {
            return self.next_u32();
        }
        min + self.random_int(span + 1)
    }
}

impl<R: RngOracle + ?Sized> RngOracle for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }
}

impl<R: RngOracle + ?Sized> RngOracle for Box<R> {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }
}

/// Fisher-Yates shuffle driven by the oracle.
pub fn shuffle<T>(rng: &mut dyn RngOracle, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.random_int(i as u32 + 1) as usize;
        items.swap(i, j);
    }
}

/// Pick `count` distinct indices from `0..len` uniformly, in draw order.
///
/// Draws without replacement; returns fewer than `count` only when
/// `len < count`.
pub fn sample_indices(rng: &mut dyn RngOracle, len: usize, count: usize) -> Vec<usize> {
    let mut remaining: Vec<usize> = (0..len).collect();
    let mut picked = Vec::with_capacity(count.min(len));
    while picked.len() < count && !remaining.is_empty() {
        let slot = rng.random_int(remaining.len() as u32) as usize;
        picked.push(remaining.swap_remove(slot));
    }
    picked
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR: 32-bit output from 64-bit state. Same seed, same sequence.
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug)]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    pub fn new(seed: u64) -> Self {
        Self {
            state: Self::pcg_step(seed),
        }
    }

    /// Advance the PCG state by one step.
    ///
    /// `state' = (state × multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// PCG output function using XSH-RR (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl Default for PcgRng {
    fn default() -> Self {
        Self::new(0)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&mut self) -> u32 {
        let output = Self::pcg_output(self.state);
        self.state = Self::pcg_step(self.state);
        output
    }
}

/// Oracle that replays a fixed list of values, cycling when exhausted.
///
/// Values are returned verbatim from `next_u32`, so `random_int(n)` yields
/// `value % n`. Intended for tests and replays.
#[derive(Clone, Debug)]
pub struct ScriptedRng {
    values: Vec<u32>,
    cursor: usize,
}

impl ScriptedRng {
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Number of values consumed so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RngOracle for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pcg_is_deterministic_per_seed() {
        let mut a = PcgRng::new(42);
        let mut b = PcgRng::new(42);
        let mut c = PcgRng::new(43);

        let seq_a: Vec<u32> = (0..8).map(|_| a.next_u32()).collect();
        let seq_b: Vec<u32> = (0..8).map(|_| b.next_u32()).collect();
        let seq_c: Vec<u32> = (0..8).map(|_| c.next_u32()).collect();

        assert_eq!(seq_a, seq_b);
        assert_ne!(seq_a, seq_c);
    }

    #[test]
    fn random_int_respects_bound() {
        let mut rng = PcgRng::new(7);
        for bound in [1, 2, 5, 42, 50] {
            for _ in 0..200 {
                assert!(rng.random_int(bound) < bound);
            }
        }
        assert_eq!(rng.random_int(0), 0);
    }

    #[test]
    fn random_uniform_is_half_open() {
        let mut top = ScriptedRng::new([u32::MAX]);
        let value = top.random_uniform();
        assert!(value < 1.0);

        let mut bottom = ScriptedRng::new([0]);
        assert_eq!(bottom.random_uniform(), 0.0);
    }

    #[test]
    fn range_is_inclusive() {
        let mut rng = ScriptedRng::new([0, 41]);
        assert_eq!(rng.range(1, 42), 1);
        assert_eq!(rng.range(1, 42), 42);
        assert_eq!(rng.range(5, 5), 5);
    }

    #[test]
    fn sample_indices_draws_without_replacement() {
        let mut rng = PcgRng::new(99);
        for _ in 0..50 {
            let mut picked = sample_indices(&mut rng, 20, 5);
            assert_eq!(picked.len(), 5);
            picked.sort_unstable();
            picked.dedup();
            assert_eq!(picked.len(), 5);
            assert!(picked.iter().all(|&i| i < 20));
        }

        assert_eq!(sample_indices(&mut rng, 3, 5).len(), 3);
    }

    #[test]
    fn shuffle_keeps_elements() {
        let mut rng = PcgRng::new(3);
        let mut items = vec![1, 2, 3, 4, 5, 6];
        shuffle(&mut rng, &mut items);
        items.sort_unstable();
        assert_eq!(items, vec![1, 2, 3, 4, 5, 6]);
    }
}
