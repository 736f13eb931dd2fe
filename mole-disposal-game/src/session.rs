//! The session controller: lives, countdown, scoring and level progression.
use crate::config::{SessionConfig, SessionConfigError};
use crate::constants::{
    GAME_OVER_SECONDS, LEVEL_START_SECONDS, MAX_TARGETS, MIN_TARGETS, RETRY_SECONDS,
    TARGETS_PER_LEVEL,
};
use crate::scoring::{LevelScore, level_score};
use crate::sequence::{HitMark, MatchVerdict, TargetId, TargetSequence, evaluate};
use crate::state::{EndMessage, GamePhase, SessionSnapshot};
use crate::storage::{read_high_score, write_high_score};
use crate::{SceneLoader, ScoreStore, TargetSpawner};

/// What a loss, an advance or an explicit end of game resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The call was not valid in the current phase and changed nothing.
    Ignored,
    /// A life was spent and the same level restarts.
    Retry { lives_left: u32 },
    /// The next level started.
    NextLevel { level: u32 },
    /// The session ended.
    GameOver { won: bool },
}

/// Result of feeding one hit to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitOutcome {
    /// Input arrived while locked, outside play, or past the sequence length.
    Ignored,
    /// Correct so far; the attempt continues.
    Pending,
    /// The hit at `index` was wrong and the level was lost.
    ///
    /// The retry starts inside the same call, so `index` is the only record
    /// of the incorrect mark; `hit_marks()` already belongs to the new attempt.
    LevelLost { index: usize, transition: Transition },
    /// The sequence was completed and scored.
    LevelWon {
        score: LevelScore,
        transition: Transition,
    },
}

/// Result of one frame tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// The clock is not running (not playing, or the sequence is being revealed).
    Paused,
    /// The clock ran down by the frame delta.
    Counting { remaining: f32 },
    /// The clock had already run out; the level was lost.
    Expired(Transition),
}

/// Owns one play session and drives it through its collaborators.
///
/// Construct it once, call [`initialize`](Self::initialize) to pull the
/// stored high score, then [`start_session`](Self::start_session). The frame
/// driver calls [`tick`](Self::tick); the avatar controller calls
/// [`record_hit`](Self::record_hit) and reads
/// [`is_sequencing_locked`](Self::is_sequencing_locked).
#[derive(Debug)]
pub struct SessionController<L, P, S>
where
    L: SceneLoader,
    P: TargetSpawner,
    S: ScoreStore,
{
    config: SessionConfig,
    scenes: L,
    spawner: P,
    store: S,
    phase: GamePhase,
    lives: u32,
    score: u32,
    high_score: u32,
    level: u32,
    remaining_time: f32,
    max_targets: u8,
    targets: TargetSequence,
    hits: TargetSequence,
    hit_marks: Vec<HitMark>,
    sequencing_locked: bool,
    player_won: bool,
    end_message: EndMessage,
    last_level_score: Option<LevelScore>,
}

impl<L, P, S> SessionController<L, P, S>
where
    L: SceneLoader,
    P: TargetSpawner,
    S: ScoreStore,
{
    /// Build an idle controller.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation.
    pub fn new(
        config: SessionConfig,
        scenes: L,
        spawner: P,
        store: S,
    ) -> Result<Self, SessionConfigError> {
        config.validate()?;
        Ok(Self {
            lives: config.starting_lives,
            config,
            scenes,
            spawner,
            store,
            phase: GamePhase::Idle,
            score: 0,
            high_score: 0,
            level: 1,
            remaining_time: LEVEL_START_SECONDS,
            max_targets: MIN_TARGETS,
            targets: TargetSequence::new(),
            hits: TargetSequence::new(),
            hit_marks: Vec::new(),
            sequencing_locked: false,
            player_won: false,
            end_message: EndMessage::Default,
            last_level_score: None,
        })
    }

    /// Load the persisted high score once at process start and write it back.
    ///
    /// An absent or unreadable value keeps the in-memory high score.
    pub fn initialize(&mut self) {
        if let Some(stored) = read_high_score(&self.store) {
            log::info!("existing high score: {stored}");
            self.high_score = self.high_score.max(stored);
        }
        write_high_score(&mut self.store, self.high_score);
        log::debug!("{} - {}", self.config.title, self.config.credit);
    }

    /// Begin a new session from level 1, whether first play or a restart.
    pub fn start_session(&mut self) {
        self.score = 0;
        self.max_targets = MIN_TARGETS;
        self.remaining_time = LEVEL_START_SECONDS;
        self.level = 1;
        self.lives = self.config.starting_lives;
        self.player_won = false;
        self.end_message = EndMessage::Default;
        self.last_level_score = None;
        self.load_level_scene();
        self.phase = GamePhase::Playing;
        log::info!("session started with {} lives", self.lives);
        self.begin_sequencing();
    }

    /// Start a fresh attempt: drop the current hits, lock input and ask the
    /// spawner for a new target order. Ignored outside `Playing`.
    ///
    /// The lock stays until [`finish_sequencing`](Self::finish_sequencing).
    pub fn begin_sequencing(&mut self) {
        if !self.phase.is_active() {
            log::debug!("sequencing request ignored while {}", self.phase);
            return;
        }
        self.clear_attempt();
        self.sequencing_locked = true;
        self.targets = self.spawner.generate_sequence(self.max_targets);
        log::debug!(
            "sequencing level {} with {} targets",
            self.level,
            self.targets.len()
        );
    }

    /// The reveal has finished; hits are evaluated and the clock runs again.
    pub fn finish_sequencing(&mut self) {
        if !self.phase.is_active() {
            log::debug!("sequencing completion ignored while {}", self.phase);
            return;
        }
        self.sequencing_locked = false;
        log::debug!("sequencing complete");
    }

    /// Append a hit and evaluate it against the target order.
    pub fn record_hit(&mut self, target: TargetId) -> HitOutcome {
        if !self.phase.is_active()
            || self.sequencing_locked
            || self.hits.len() >= self.targets.len()
        {
            log::debug!("hit on {target} ignored");
            return HitOutcome::Ignored;
        }
        self.hits.push(target);
        log::debug!("hit {} on {target}", self.hits.len());

        match evaluate(&self.targets, &self.hits, &mut self.hit_marks) {
            MatchVerdict::Pending => HitOutcome::Pending,
            MatchVerdict::Mismatch { index } => {
                log::debug!("wrong hit at position {index}");
                HitOutcome::LevelLost {
                    index,
                    transition: self.lose_level(),
                }
            }
            MatchVerdict::Complete => {
                let transition = self.advance_level();
                let score = self.last_level_score.unwrap_or_default();
                HitOutcome::LevelWon { score, transition }
            }
        }
    }

    /// Spend a life and retry the current level, or end the session at zero lives.
    pub fn lose_level(&mut self) -> Transition {
        if !self.phase.is_active() {
            return Transition::Ignored;
        }
        if self.lives == 0 {
            return self.end_game(false);
        }
        self.lives -= 1;
        self.phase = GamePhase::Death;
        log::info!("level {} lost, {} lives left", self.level, self.lives);
        self.load_level_scene();
        self.phase = GamePhase::Playing;
        self.remaining_time = RETRY_SECONDS;
        self.begin_sequencing();
        Transition::Retry {
            lives_left: self.lives,
        }
    }

    /// Score the cleared level and move on, or end the session after the last level.
    pub fn advance_level(&mut self) -> Transition {
        if !self.phase.is_active() {
            return Transition::Ignored;
        }
        self.phase = GamePhase::BeatLevel;
        let earned = level_score(self.remaining_time, self.max_targets, self.level);
        self.last_level_score = Some(earned);
        self.score = self.score.saturating_add(earned.total);
        self.check_high_score();
        log::info!(
            "level {} cleared for {} points (score {}, high score {})",
            self.level,
            earned.total,
            self.score,
            self.high_score
        );

        if self.level_index() < self.config.level_count() {
            self.player_won = false;
            self.level += 1;
            self.max_targets = self
                .max_targets
                .saturating_add(TARGETS_PER_LEVEL)
                .min(MAX_TARGETS);
            self.load_level_scene();
            self.phase = GamePhase::Playing;
            self.remaining_time = LEVEL_START_SECONDS;
            self.begin_sequencing();
            Transition::NextLevel { level: self.level }
        } else {
            self.player_won = true;
            self.phase = GamePhase::Playing;
            self.end_game(true)
        }
    }

    /// Run the level countdown for one frame.
    ///
    /// A negative or non-finite delta counts as a zero-length frame.
    pub fn tick(&mut self, delta_seconds: f32) -> TickOutcome {
        if !self.phase.is_active() || self.sequencing_locked {
            return TickOutcome::Paused;
        }
        if self.remaining_time <= 0.0 {
            log::debug!("time expired on level {}", self.level);
            self.player_won = false;
            return TickOutcome::Expired(self.lose_level());
        }
        if delta_seconds.is_finite() && delta_seconds > 0.0 {
            self.remaining_time -= delta_seconds;
        }
        TickOutcome::Counting {
            remaining: self.remaining_time,
        }
    }

    /// Close the session and show the end screen.
    pub fn end_game(&mut self, won: bool) -> Transition {
        self.phase = GamePhase::GameOver;
        self.remaining_time = GAME_OVER_SECONDS;
        self.player_won = won;
        self.end_message = EndMessage::for_outcome(won);
        self.sequencing_locked = false;
        self.clear_attempt();
        self.scenes.load_scene(&self.config.game_over_scene);
        log::info!(
            "game over ({}), score {}, high score {}",
            if won { "won" } else { "lost" },
            self.score,
            self.high_score
        );
        Transition::GameOver { won }
    }

    /// Open the help screen.
    pub fn go_help(&mut self) {
        self.scenes.load_scene(&self.config.help_scene);
    }

    /// Return to the start menu.
    pub fn go_back(&mut self) {
        self.scenes.load_scene(&self.config.start_scene);
    }

    fn check_high_score(&mut self) {
        if self.score > self.high_score {
            self.high_score = self.score;
            write_high_score(&mut self.store, self.high_score);
        }
    }

    fn clear_attempt(&mut self) {
        self.targets.clear();
        self.hits.clear();
        self.hit_marks.clear();
    }

    fn load_level_scene(&mut self) {
        if let Some(scene) = self.config.level_scene(self.level) {
            self.scenes.load_scene(scene);
        }
    }

    fn level_index(&self) -> usize {
        usize::try_from(self.level).unwrap_or(usize::MAX)
    }

    #[must_use]
    pub const fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub const fn lives(&self) -> u32 {
        self.lives
    }

    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub const fn high_score(&self) -> u32 {
        self.high_score
    }

    /// 1-based index of the current level.
    #[must_use]
    pub const fn level(&self) -> u32 {
        self.level
    }

    #[must_use]
    pub fn level_count(&self) -> usize {
        self.config.level_count()
    }

    #[must_use]
    pub const fn remaining_time(&self) -> f32 {
        self.remaining_time
    }

    #[must_use]
    pub const fn max_targets(&self) -> u8 {
        self.max_targets
    }

    #[must_use]
    pub fn target_sequence(&self) -> &[TargetId] {
        &self.targets
    }

    #[must_use]
    pub fn hit_sequence(&self) -> &[TargetId] {
        &self.hits
    }

    /// Verdicts for the hits of the current attempt.
    ///
    /// Empty right after a loss; see [`HitOutcome::LevelLost`] for the wrong hit.
    #[must_use]
    pub fn hit_marks(&self) -> &[HitMark] {
        &self.hit_marks
    }

    #[must_use]
    pub const fn is_sequencing_locked(&self) -> bool {
        self.sequencing_locked
    }

    #[must_use]
    pub const fn player_won(&self) -> bool {
        self.player_won
    }

    #[must_use]
    pub const fn last_level_score(&self) -> Option<LevelScore> {
        self.last_level_score
    }

    /// Text for the end screen.
    #[must_use]
    pub fn end_message(&self) -> &str {
        match self.end_message {
            EndMessage::Default => &self.config.default_end_message,
            EndMessage::Lose => &self.config.lose_message,
            EndMessage::Win => &self.config.win_message,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub const fn scenes(&self) -> &L {
        &self.scenes
    }

    #[must_use]
    pub const fn spawner(&self) -> &P {
        &self.spawner
    }

    pub const fn spawner_mut(&mut self) -> &mut P {
        &mut self.spawner
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    pub const fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            phase: self.phase,
            lives: self.lives,
            score: self.score,
            high_score: self.high_score,
            level: self.level,
            level_count: u32::try_from(self.level_count()).unwrap_or(u32::MAX),
            remaining_time: self.remaining_time,
            max_targets: self.max_targets,
            targets: self.targets.to_vec(),
            hits: self.hits.to_vec(),
            hit_marks: self.hit_marks.clone(),
            sequencing_locked: self.sequencing_locked,
            player_won: self.player_won,
            end_message: self.end_message().to_string(),
        }
    }

    /// Consume the controller, returning its collaborators.
    #[must_use]
    pub fn into_parts(self) -> (L, P, S) {
        (self.scenes, self.spawner, self.store)
    }
}
