//! The random-number capability used by rollouts.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A seedable source of uniform integers.
///
/// Implementations must be deterministic given the seed, so that a search can
/// be replayed. Tests substitute scripted sources.
pub trait RandomSource {
    /// Restart the sequence from `seed`.
    fn reseed(&mut self, seed: u32);

    /// Draw an integer uniformly from `[min, max]`, both inclusive.
    /// `min` must not exceed `max`.
    fn next_int(&mut self, min: i32, max: i32) -> i32;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn reseed(&mut self, seed: u32) {
        (**self).reseed(seed)
    }

    fn next_int(&mut self, min: i32, max: i32) -> i32 {
        (**self).next_int(min, max)
    }
}

/// [`RandomSource`] backed by `rand`'s standard generator.
#[derive(Clone, Debug)]
pub struct StdRandom {
    rng: StdRng,
}

impl StdRandom {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed as u64),
        }
    }

    /// A generator seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl RandomSource for StdRandom {
    fn reseed(&mut self, seed: u32) {
        self.rng = StdRng::seed_from_u64(seed as u64);
    }

    /// # Panics
    ///
    /// Panics if `min > max`.
    fn next_int(&mut self, min: i32, max: i32) -> i32 {
        self.rng.gen_range(min..=max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_in_range() {
        let mut rng = StdRandom::new(5);
        for _ in 0..1000 {
            let value = rng.next_int(-3, 4);
            assert!((-3..=4).contains(&value));
        }
        assert_eq!(rng.next_int(9, 9), 9);
    }

    #[test]
    #[should_panic]
    fn empty_range_panics() {
        StdRandom::new(5).next_int(4, 3);
    }

    #[test]
    fn reseed_replays() {
        let mut rng = StdRandom::new(1);
        let first: Vec<i32> = (0..16).map(|_| rng.next_int(0, 100)).collect();

        rng.reseed(1);
        let second: Vec<i32> = (0..16).map(|_| rng.next_int(0, 100)).collect();
        assert_eq!(first, second);

        let mut other = StdRandom::new(1);
        assert_eq!(other.next_int(0, 100), first[0]);
    }
}
