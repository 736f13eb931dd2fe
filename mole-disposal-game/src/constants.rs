//! Centralized balance and tuning constants for Mole Disposal session logic.
//!
//! These values define the countdown, difficulty curve and scoring math.
//! Keeping them together means gameplay can only be retuned through a
//! reviewed code change rather than through external JSON assets.

// Persistence --------------------------------------------------------------
/// Key holding the persisted high score.
pub const HIGH_SCORE_KEY: &str = "HighScore";

// Countdown ----------------------------------------------------------------
/// Seconds on the clock when a level is entered (session start or advance).
pub const LEVEL_START_SECONDS: f32 = 35.0;
/// Seconds on the clock when a level is retried after losing a life.
pub const RETRY_SECONDS: f32 = 30.0;
/// Seconds shown on the clock once the session is over.
pub const GAME_OVER_SECONDS: f32 = 30.0;

// Difficulty ---------------------------------------------------------------
pub const MIN_TARGETS: u8 = 4;
pub const MAX_TARGETS: u8 = 8;
pub const TARGETS_PER_LEVEL: u8 = 2;

// Scoring ------------------------------------------------------------------
pub const SCORE_PER_SECOND: u32 = 10;
pub const SCORE_PER_TARGET: u32 = 100;
/// Remaining time is folded into a minute before scoring.
pub const SCORE_TIME_WINDOW: f32 = 60.0;

// Session defaults ---------------------------------------------------------
pub const DEFAULT_STARTING_LIVES: u32 = 3;
/// Hole count used by the seeded spawner; must cover `MAX_TARGETS`.
pub const DEFAULT_HOLE_COUNT: u8 = 9;
