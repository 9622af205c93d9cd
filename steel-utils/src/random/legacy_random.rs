//! The 48-bit linear congruential generator from `java.util.Random`.

use super::Random;

const MULTIPLIER: i64 = 0x5_DEEC_E66D;
const INCREMENT: i64 = 0xB;
const MASK: i64 = (1 << 48) - 1;

/// Java-compatible LCG random source.
#[derive(Clone, Debug)]
pub struct LegacyRandom {
    seed: i64,
}

impl LegacyRandom {
    /// Creates a generator the same way `new Random(seed)` does.
    #[must_use]
    pub const fn from_seed(seed: i64) -> Self {
        Self {
            seed: (seed ^ MULTIPLIER) & MASK,
        }
    }
}

impl Random for LegacyRandom {
    fn next(&mut self, bits: u32) -> i32 {
        self.seed = self
            .seed
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT)
            & MASK;
        (self.seed >> (48 - bits)) as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_java_random() {
        // new java.util.Random(42).nextInt()
        let mut rng = LegacyRandom::from_seed(42);
        assert_eq!(rng.next_i32(), -1_170_105_035);
    }

    #[test]
    fn test_deterministic_for_equal_seeds() {
        let mut a = LegacyRandom::from_seed(1234);
        let mut b = LegacyRandom::from_seed(1234);
        for _ in 0..32 {
            assert_eq!(a.next_i32_bounded(7), b.next_i32_bounded(7));
        }
    }

    #[test]
    fn test_bounded_ranges() {
        let mut rng = LegacyRandom::from_seed(7);
        for _ in 0..1000 {
            let v = rng.next_i32_bounded(3);
            assert!((0..3).contains(&v));
            let f = rng.next_f64();
            assert!((0.0..1.0).contains(&f));
            let g = rng.next_f64_between(0.5, 3.0);
            assert!((0.5..3.0).contains(&g));
        }
    }

    #[test]
    fn test_power_of_two_bound() {
        let mut rng = LegacyRandom::from_seed(99);
        for _ in 0..100 {
            assert!((0..16).contains(&rng.next_i32_bounded(16)));
        }
    }
}
