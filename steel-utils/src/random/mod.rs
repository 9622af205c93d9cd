//! Random number sources.
//!
//! Gameplay rolls (sound pitch, drop jitter, orb scatter, split counts) draw
//! from a [`Random`] so that tests can seed them deterministically.

pub mod legacy_random;

/// A source of pseudo random numbers with Java `Random` semantics.
pub trait Random {
    /// Returns the next `bits` random bits (at most 32) as an `i32`.
    fn next(&mut self, bits: u32) -> i32;

    /// Uniform `i32` over the whole range.
    fn next_i32(&mut self) -> i32 {
        self.next(32)
    }

    /// Uniform `i32` in `[0, bound)`. `bound` must be positive.
    fn next_i32_bounded(&mut self, bound: i32) -> i32 {
        debug_assert!(bound > 0, "bound must be positive");
        if bound & -bound == bound {
            return ((i64::from(bound) * i64::from(self.next(31))) >> 31) as i32;
        }
        loop {
            let bits = self.next(31);
            let value = bits % bound;
            if bits.wrapping_sub(value).wrapping_add(bound - 1) >= 0 {
                return value;
            }
        }
    }

    /// Uniform `i32` in `[min, max]`.
    fn next_i32_between_inclusive(&mut self, min: i32, max: i32) -> i32 {
        min + self.next_i32_bounded(max - min + 1)
    }

    /// Uniform `f32` in `[0, 1)`.
    fn next_f32(&mut self) -> f32 {
        self.next(24) as f32 * (1.0 / (1 << 24) as f32)
    }

    /// Uniform `f64` in `[0, 1)`.
    fn next_f64(&mut self) -> f64 {
        let high = i64::from(self.next(26)) << 27;
        let low = i64::from(self.next(27));
        (high + low) as f64 * (1.0 / (1_i64 << 53) as f64)
    }

    /// Uniform `f64` in `[min, max)`.
    fn next_f64_between(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }
}
