//! Seeded target spawner producing the order the player must reproduce.
use rand::SeedableRng;
use rand::seq::index;
use rand_chacha::ChaCha20Rng;

use crate::TargetSpawner;
use crate::constants::DEFAULT_HOLE_COUNT;
use crate::sequence::{TargetId, TargetSequence};

/// Picks `max_targets` distinct holes in random order from a deterministic stream.
#[derive(Debug, Clone)]
pub struct SeededSpawner {
    rng: ChaCha20Rng,
    holes: u8,
}

impl SeededSpawner {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_holes(seed, DEFAULT_HOLE_COUNT)
    }

    #[must_use]
    pub fn with_holes(seed: u64, holes: u8) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
            holes,
        }
    }

    #[must_use]
    pub const fn holes(&self) -> u8 {
        self.holes
    }

    /// Restart the stream from a new seed.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = ChaCha20Rng::seed_from_u64(seed);
    }
}

impl TargetSpawner for SeededSpawner {
    fn generate_sequence(&mut self, max_targets: u8) -> TargetSequence {
        let amount = usize::from(max_targets.min(self.holes));
        index::sample(&mut self.rng, usize::from(self.holes), amount)
            .iter()
            .filter_map(|hole| u8::try_from(hole).ok())
            .map(TargetId)
            .collect()
    }
}
