use std::fmt;

use clap::ValueEnum;
use mole_disposal_game::TargetId;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Bot interface standing in for the avatar controller.
pub trait PlayerBot {
    /// Name used for logging/report output.
    fn name(&self) -> &'static str;

    /// Seconds between two hits.
    fn reaction_secs(&self) -> f32;

    /// Pick the next target given the revealed order and the hits so far.
    fn next_hit(&mut self, targets: &[TargetId], hits: &[TargetId]) -> Option<TargetId>;
}

/// Built-in bot players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
pub enum PlayerKind {
    /// Always correct, quick hands
    Perfect,
    /// Usually correct, occasionally whacks the wrong hole
    Sloppy,
    /// Always correct but too slow for long sequences
    Slow,
}

impl PlayerKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            PlayerKind::Perfect => "Perfect",
            PlayerKind::Sloppy => "Sloppy",
            PlayerKind::Slow => "Slow",
        }
    }

    #[must_use]
    pub fn create_bot(self, seed: u64) -> Box<dyn PlayerBot> {
        match self {
            PlayerKind::Perfect => Box::new(PerfectBot),
            PlayerKind::Sloppy => Box::new(SloppyBot::new(seed)),
            PlayerKind::Slow => Box::new(SlowBot),
        }
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn expected(targets: &[TargetId], hits: &[TargetId]) -> Option<TargetId> {
    targets.get(hits.len()).copied()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PerfectBot;

impl PlayerBot for PerfectBot {
    fn name(&self) -> &'static str {
        "perfect"
    }

    fn reaction_secs(&self) -> f32 {
        0.5
    }

    fn next_hit(&mut self, targets: &[TargetId], hits: &[TargetId]) -> Option<TargetId> {
        expected(targets, hits)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SlowBot;

impl PlayerBot for SlowBot {
    fn name(&self) -> &'static str {
        "slow"
    }

    fn reaction_secs(&self) -> f32 {
        6.0
    }

    fn next_hit(&mut self, targets: &[TargetId], hits: &[TargetId]) -> Option<TargetId> {
        expected(targets, hits)
    }
}

#[derive(Debug, Clone)]
pub struct SloppyBot {
    rng: ChaCha20Rng,
    miss_chance: f64,
}

impl SloppyBot {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
            miss_chance: 0.1,
        }
    }
}

impl PlayerBot for SloppyBot {
    fn name(&self) -> &'static str {
        "sloppy"
    }

    fn reaction_secs(&self) -> f32 {
        0.8
    }

    fn next_hit(&mut self, targets: &[TargetId], hits: &[TargetId]) -> Option<TargetId> {
        let target = expected(targets, hits)?;
        if self.rng.gen_bool(self.miss_chance) {
            // Any hole other than the right one.
            Some(TargetId(target.0.wrapping_add(self.rng.gen_range(1..=u8::MAX))))
        } else {
            Some(target)
        }
    }
}
