//! RNG module - small seeded generator for shape picks and spawn jitter
//!
//! The binary seeds it from the clock at startup; tests pass a fixed seed to
//! get reproducible games.

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Seed from a high-resolution clock reading
    pub fn from_clock() -> Self {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default();
        // Fold the 128-bit reading so both fast and slow bits contribute.
        Self::new((nanos ^ (nanos >> 32) ^ (nanos >> 64)) as u32)
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // High bits of an LCG are far better distributed than the low ones.
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Generate random value in range [min, max], both inclusive
    pub fn range_inclusive(&mut self, min: i32, max: i32) -> i32 {
        if max <= min {
            return min;
        }
        let span = (max as i64 - min as i64 + 1) as u32;
        min + self.next_range(span) as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_zero_seed() {
        let mut rng = SimpleRng::new(0);
        let val = rng.next_u32();
        assert_ne!(val, 0);
    }

    #[test]
    fn test_next_range_bounds() {
        let mut rng = SimpleRng::new(42);
        for _ in 0..1000 {
            assert!(rng.next_range(7) < 7);
        }
    }

    #[test]
    fn test_range_inclusive_hits_both_ends() {
        let mut rng = SimpleRng::new(7);
        let mut seen = [false; 7];
        for _ in 0..1000 {
            let v = rng.range_inclusive(-3, 3);
            assert!((-3..=3).contains(&v));
            seen[(v + 3) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_range_inclusive_degenerate() {
        let mut rng = SimpleRng::new(7);
        assert_eq!(rng.range_inclusive(0, 0), 0);
        assert_eq!(rng.range_inclusive(5, 2), 5);
    }
}
