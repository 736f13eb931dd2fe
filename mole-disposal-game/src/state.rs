//! Session phases and the observable session snapshot.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::sequence::{HitMark, TargetId};

/// Phase of the session state machine.
///
/// `Death` and `BeatLevel` are transient: they are entered and left inside a
/// single transition and never observed between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    #[default]
    Idle,
    Playing,
    Death,
    GameOver,
    BeatLevel,
}

impl GamePhase {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Playing => "playing",
            Self::Death => "death",
            Self::GameOver => "game_over",
            Self::BeatLevel => "beat_level",
        }
    }

    /// Whether a level attempt is in progress.
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Playing)
    }
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which end-screen message applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EndMessage {
    /// No session has ended yet.
    #[default]
    Default,
    Lose,
    Win,
}

impl EndMessage {
    #[must_use]
    pub const fn for_outcome(won: bool) -> Self {
        if won { Self::Win } else { Self::Lose }
    }
}

/// Serializable view of every observable session field, for HUDs and reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub phase: GamePhase,
    pub lives: u32,
    pub score: u32,
    pub high_score: u32,
    pub level: u32,
    pub level_count: u32,
    pub remaining_time: f32,
    pub max_targets: u8,
    pub targets: Vec<TargetId>,
    pub hits: Vec<TargetId>,
    pub hit_marks: Vec<HitMark>,
    pub sequencing_locked: bool,
    pub player_won: bool,
    pub end_message: String,
}
