//! Level score calculation.
use serde::{Deserialize, Serialize};

use crate::constants::{SCORE_PER_SECOND, SCORE_PER_TARGET, SCORE_TIME_WINDOW};
use crate::numbers::floor_f32_to_u32;

/// Breakdown of the points awarded for clearing a level.
///
/// Later levels are always worth more at equal remaining time, since the
/// difficulty and progress components never shrink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LevelScore {
    /// Whole seconds left on the clock, folded into one minute, times ten.
    /// An overrun clock counts as zero.
    pub time_bonus: u32,
    /// Target count times one hundred.
    pub difficulty_bonus: u32,
    /// The 1-based level index.
    pub progress_bonus: u32,
    pub total: u32,
}

/// Score a cleared level from the clock, the difficulty and the level index.
#[must_use]
pub fn level_score(remaining_time: f32, max_targets: u8, level: u32) -> LevelScore {
    let seconds = floor_f32_to_u32(remaining_time.max(0.0) % SCORE_TIME_WINDOW);
    let time_bonus = SCORE_PER_SECOND.saturating_mul(seconds);
    let difficulty_bonus = SCORE_PER_TARGET.saturating_mul(u32::from(max_targets));
    let progress_bonus = level;
    LevelScore {
        time_bonus,
        difficulty_bonus,
        progress_bonus,
        total: time_bonus
            .saturating_add(difficulty_bonus)
            .saturating_add(progress_bonus),
    }
}
