//! Seedable Xorshift64 generator used for parameter suggestions.
//!
//! The only consumer is [`crate::palette::suggest_angle`]. A seed makes a
//! suggestion reproducible, which keeps CLI runs and tests deterministic.

use serde::{Deserialize, Serialize};

/// Xorshift64 PRNG with shifts (13, 7, 17). Same seed, same sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    /// Replaces seed 0, which is a fixed point of xorshift.
    const FALLBACK_SEED: u64 = 0x5EED_DEAD_BEEF_CAFE;

    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { Self::FALLBACK_SEED } else { seed },
        }
    }

    /// Advances the state and returns the next 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Uniform integer in `[min, max]`, both ends inclusive.
    ///
    /// Modulo reduction; the bias is negligible for the small spans used here.
    /// Returns `min` when `max < min`.
    pub fn next_in_range(&mut self, min: u32, max: u32) -> u32 {
        if max <= min {
            return min;
        }
        let span = (max - min) as u64 + 1;
        min + (self.next_u64() % span) as u32
    }
}
