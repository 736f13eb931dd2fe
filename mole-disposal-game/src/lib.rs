//! Mole Disposal Game Engine
//!
//! Platform-agnostic session logic for the Mole Disposal arcade game: lives,
//! countdown, scoring, level progression and the hit-sequence matching rule.
//! Scene loading, target spawning and persistence are injected through the
//! traits below so the core never touches a renderer or a disk.

pub mod config;
pub mod constants;
pub mod numbers;
pub mod scenes;
pub mod scoring;
pub mod sequence;
pub mod session;
pub mod spawner;
pub mod state;
pub mod storage;

// Re-export commonly used types
pub use config::{SessionConfig, SessionConfigError};
pub use scenes::SceneLog;
pub use scoring::{LevelScore, level_score};
pub use sequence::{HitMark, MatchVerdict, TargetId, TargetSequence, evaluate};
pub use session::{HitOutcome, SessionController, TickOutcome, Transition};
pub use spawner::SeededSpawner;
pub use state::{EndMessage, GamePhase, SessionSnapshot};
pub use storage::{MemoryScoreStore, read_high_score, write_high_score};

/// Trait for abstracting scene changes.
/// Requests are fire-and-forget; state mutations after the call are valid immediately.
pub trait SceneLoader {
    fn load_scene(&mut self, name: &str);
}

/// Trait for abstracting target spawning.
/// Called at the start of every level attempt, retries included.
pub trait TargetSpawner {
    /// Produce the ordered targets the player must reproduce, sized by `max_targets`.
    fn generate_sequence(&mut self, max_targets: u8) -> TargetSequence;
}

/// Trait for abstracting durable integer storage.
/// Platform-specific implementations should provide this
pub trait ScoreStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Read an integer; `Ok(None)` when the key is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get_int(&self, key: &str) -> Result<Option<i32>, Self::Error>;

    /// Stage an integer for the next flush.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be staged.
    fn set_int(&mut self, key: &str, value: i32) -> Result<(), Self::Error>;

    /// Make staged values durable.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn flush(&mut self) -> Result<(), Self::Error>;
}

impl<T: SceneLoader + ?Sized> SceneLoader for &mut T {
    fn load_scene(&mut self, name: &str) {
        (**self).load_scene(name);
    }
}

impl<T: TargetSpawner + ?Sized> TargetSpawner for &mut T {
    fn generate_sequence(&mut self, max_targets: u8) -> TargetSequence {
        (**self).generate_sequence(max_targets)
    }
}

impl<T: TargetSpawner + ?Sized> TargetSpawner for Box<T> {
    fn generate_sequence(&mut self, max_targets: u8) -> TargetSequence {
        (**self).generate_sequence(max_targets)
    }
}
