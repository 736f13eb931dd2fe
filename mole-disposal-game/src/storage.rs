//! High-score persistence on top of a [`ScoreStore`].
use std::collections::HashMap;
use std::convert::Infallible;

use crate::ScoreStore;
use crate::constants::HIGH_SCORE_KEY;
use crate::numbers::{score_to_stored, stored_to_score};

/// In-memory score store for tests and headless runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryScoreStore {
    values: HashMap<String, i32>,
    flushes: u32,
}

impl MemoryScoreStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a high score, as if a previous session saved it.
    #[must_use]
    pub fn with_high_score(high_score: i32) -> Self {
        let mut store = Self::default();
        store.values.insert(HIGH_SCORE_KEY.to_string(), high_score);
        store
    }

    /// How many times `flush` has been called.
    #[must_use]
    pub const fn flush_count(&self) -> u32 {
        self.flushes
    }
}

impl ScoreStore for MemoryScoreStore {
    type Error = Infallible;

    fn get_int(&self, key: &str) -> Result<Option<i32>, Self::Error> {
        Ok(self.values.get(key).copied())
    }

    fn set_int(&mut self, key: &str, value: i32) -> Result<(), Self::Error> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.flushes += 1;
        Ok(())
    }
}

/// Read the persisted high score. Absent, negative or unreadable values yield `None`.
pub fn read_high_score<S: ScoreStore>(store: &S) -> Option<u32> {
    match store.get_int(HIGH_SCORE_KEY) {
        Ok(value) => value.and_then(stored_to_score),
        Err(err) => {
            log::warn!("reading high score failed: {err}");
            None
        }
    }
}

/// Write and flush the high score. Failures are logged, never propagated.
pub fn write_high_score<S: ScoreStore>(store: &mut S, high_score: u32) {
    if let Err(err) = store.set_int(HIGH_SCORE_KEY, score_to_stored(high_score)) {
        log::warn!("storing high score {high_score} failed: {err}");
        return;
    }
    if let Err(err) = store.flush() {
        log::warn!("flushing high score {high_score} failed: {err}");
    }
}
