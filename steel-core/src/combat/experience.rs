//! Splitting an experience reward into orbs.

use smallvec::SmallVec;

/// Orb chunks of one reward.
pub type ExperienceChunks = SmallVec<[i32; 8]>;

/// Splits an experience total into orb values.
pub trait ExperienceSplitter: Send + Sync {
    /// Positive chunks summing to `total`. Empty when `total <= 0`.
    fn split(&self, total: i32) -> ExperienceChunks;
}

/// Orb sizes vanilla spawns, largest first.
const ORB_SIZES: [i32; 11] = [2477, 1237, 617, 307, 149, 73, 37, 17, 7, 3, 1];

/// Vanilla `ExperienceOrb.getExperienceValue`: repeatedly takes the largest
/// orb size that still fits.
#[derive(Clone, Copy, Debug, Default)]
pub struct VanillaExperienceSplitter;

impl VanillaExperienceSplitter {
    /// The largest orb size not above `value`.
    #[must_use]
    pub fn orb_value(value: i32) -> i32 {
        ORB_SIZES
            .iter()
            .copied()
            .find(|&size| value >= size)
            .unwrap_or(1)
    }
}

impl ExperienceSplitter for VanillaExperienceSplitter {
    fn split(&self, total: i32) -> ExperienceChunks {
        let mut chunks = ExperienceChunks::new();
        let mut remaining = total;
        while remaining > 0 {
            let chunk = Self::orb_value(remaining);
            chunks.push(chunk);
            remaining -= chunk;
        }
        chunks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_uses_largest_sizes() {
        let splitter = VanillaExperienceSplitter;
        assert_eq!(splitter.split(5).as_slice(), [3, 1, 1]);
        assert_eq!(splitter.split(20).as_slice(), [17, 3]);
        assert!(splitter.split(0).is_empty());
        assert!(splitter.split(-4).is_empty());
    }

    #[test]
    fn test_split_sums_to_total() {
        let splitter = VanillaExperienceSplitter;
        for total in [1, 2, 9, 100, 2476, 2477, 5000] {
            let chunks = splitter.split(total);
            assert_eq!(chunks.iter().sum::<i32>(), total);
            assert!(chunks.iter().all(|&chunk| chunk > 0));
        }
    }
}
