// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! 16-bit linear congruential generator shared by the simulation kernels.

const SEED: u32 = 74755;

/// Deterministic pseudo-random source. Every kernel run starts its own.
#[derive(Debug, Clone)]
pub struct Random {
    seed: u32,
}

impl Random {
    pub fn new() -> Self {
        Self { seed: SEED }
    }

    /// Next value in `0..=0xffff`.
    pub fn next_value(&mut self) -> u32 {
        self.seed = (self.seed.wrapping_mul(1309).wrapping_add(13849)) & 0xffff;
        self.seed
    }
}

impl Default for Random {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_is_fixed() {
        let mut a = Random::new();
        let mut b = Random::new();
        let first: Vec<u32> = (0..5).map(|_| a.next_value()).collect();
        let second: Vec<u32> = (0..5).map(|_| b.next_value()).collect();
        assert_eq!(first, second);
        assert_eq!(first[0], (74755 * 1309 + 13849) & 0xffff);
        assert!(first.iter().all(|&v| v <= 0xffff));
    }
}
