use rand::Rng;
use std::sync::atomic::{AtomicU32, Ordering};

/// Seeds are drawn from `[0, SEED_SPACE)`.
pub const SEED_SPACE: u32 = 1_000_000;

// Odd and not a multiple of 5, so coprime to SEED_SPACE: the sequence visits
// every seed once before repeating.
const SEED_STRIDE: u64 = 618_031;

/// Source of image seeds that never repeats within `SEED_SPACE` draws.
///
/// Starts at a random offset and advances by a fixed stride modulo
/// `SEED_SPACE`, so consecutive calls with the same prompt always get
/// different seeds.
pub struct SeedSequence {
    offset: u32,
    counter: AtomicU32,
}

impl SeedSequence {
    pub fn new() -> Self {
        Self::with_offset(rand::thread_rng().gen_range(0..SEED_SPACE))
    }

    pub fn with_offset(offset: u32) -> Self {
        Self { offset: offset % SEED_SPACE, counter: AtomicU32::new(0) }
    }

    pub fn next_seed(&self) -> u32 {
        let n = u64::from(self.counter.fetch_add(1, Ordering::Relaxed));
        ((u64::from(self.offset) + n * SEED_STRIDE) % u64::from(SEED_SPACE)) as u32
    }
}

impl Default for SeedSequence {
    fn default() -> Self {
        Self::new()
    }
}
