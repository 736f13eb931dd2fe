//! Target identifiers and the hit-sequence matching rule.
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

use crate::constants::MAX_TARGETS;

/// Identifier of a single target (a mole hole) within a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TargetId(pub u8);

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hole-{}", self.0)
    }
}

/// Ordered target ids; sized so a full-difficulty level never spills to the heap.
pub type TargetSequence = SmallVec<[TargetId; MAX_TARGETS as usize]>;

/// Per-hit verdict shown on the hit target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HitMark {
    Correct,
    Incorrect,
}

/// Result of comparing the player's hits against the target order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchVerdict {
    /// Every hit so far is correct but the sequence is incomplete.
    Pending,
    /// The full sequence was reproduced.
    Complete,
    /// The hit at `index` did not match.
    Mismatch { index: usize },
}

/// Compare `hits` to `targets` position by position, stopping at the first mismatch.
///
/// `marks` is rewritten with one entry per evaluated hit; positions after a
/// mismatch are left unmarked.
pub fn evaluate(targets: &[TargetId], hits: &[TargetId], marks: &mut Vec<HitMark>) -> MatchVerdict {
    marks.clear();
    for (index, hit) in hits.iter().enumerate() {
        if targets.get(index) == Some(hit) {
            marks.push(HitMark::Correct);
        } else {
            marks.push(HitMark::Incorrect);
            return MatchVerdict::Mismatch { index };
        }
    }
    if hits.len() == targets.len() {
        MatchVerdict::Complete
    } else {
        MatchVerdict::Pending
    }
}
