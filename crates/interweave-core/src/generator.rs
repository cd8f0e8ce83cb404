//! Pseudo-random binary sequence generation.
//!
//! A linear congruential generator with the classic glibc parameters
//! produces the raw stream; each emitted symbol thresholds the following
//! raw value against half the modulus.

use std::sync::atomic::{AtomicU64, Ordering};

const LCG_MULTIPLIER: u64 = 1_103_515_245;
const LCG_INCREMENT: u64 = 12_345;
const LCG_MODULUS: u64 = 1 << 15;

/// Seed used for reproducing published runs.
pub const DEFAULT_SEED: u64 = 777;

/// Generates pseudo-random binary sequences from a seeded LCG.
pub struct SequenceGenerator {
    state: u64,
}

impl Default for SequenceGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl SequenceGenerator {
    /// Create a generator seeded from the system entropy source.
    pub fn new() -> Self {
        let mut seed_bytes = [0u8; 8];
        getrandom::getrandom(&mut seed_bytes).unwrap_or_else(|_| {
            // Fallback: use a static counter if getrandom fails
            static COUNTER: AtomicU64 = AtomicU64::new(1);
            let counter = COUNTER.fetch_add(1, Ordering::Relaxed);
            seed_bytes = counter.to_le_bytes();
        });
        Self::with_seed(u64::from_le_bytes(seed_bytes))
    }

    /// Create a generator with a specific seed for reproducibility.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            state: seed % LCG_MODULUS,
        }
    }

    /// Advance the LCG one step and return the new state.
    fn next_state(&mut self) -> u64 {
        self.state = (LCG_MULTIPLIER * self.state + LCG_INCREMENT) % LCG_MODULUS;
        self.state
    }

    /// One pseudo-random binary symbol.
    ///
    /// The state advances once; the emitted symbol is 1 iff the raw value
    /// one step ahead lands in the upper half of the modulus range.
    pub fn next_bit(&mut self) -> u8 {
        let state = self.next_state();
        let raw = (LCG_MULTIPLIER * state + LCG_INCREMENT) % LCG_MODULUS;
        u8::from(raw >= LCG_MODULUS / 2)
    }

    /// Generate `n` binary symbols.
    pub fn generate(&mut self, n: usize) -> Vec<u8> {
        (0..n).map(|_| self.next_bit()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_seed_sequence() {
        let mut generator = SequenceGenerator::with_seed(DEFAULT_SEED);
        assert_eq!(
            generator.generate(16),
            vec![0, 1, 1, 1, 0, 1, 0, 1, 1, 0, 0, 1, 0, 0, 1, 0]
        );
    }

    #[test]
    fn test_other_seed_sequence() {
        let mut generator = SequenceGenerator::with_seed(42);
        assert_eq!(generator.generate(8), vec![1, 0, 1, 1, 0, 0, 1, 0]);
    }

    #[test]
    fn test_same_seed_same_stream() {
        let a = SequenceGenerator::with_seed(12345).generate(64);
        let b = SequenceGenerator::with_seed(12345).generate(64);
        assert_eq!(a, b);
    }

    #[test]
    fn test_large_seed_reduces_like_small() {
        // Seeds are equivalent modulo the LCG modulus.
        let big = SequenceGenerator::with_seed(777 + (1 << 15)).generate(16);
        let small = SequenceGenerator::with_seed(777).generate(16);
        assert_eq!(big, small);
    }

    #[test]
    fn test_symbols_are_binary() {
        let mut generator = SequenceGenerator::with_seed(7);
        assert!(generator.generate(256).iter().all(|&b| b <= 1));
    }

    #[test]
    fn test_unseeded_generators_produce_binary_symbols() {
        let mut generator = SequenceGenerator::new();
        let seq = generator.generate(32);
        assert_eq!(seq.len(), 32);
        assert!(seq.iter().all(|&b| b <= 1));
    }
}
