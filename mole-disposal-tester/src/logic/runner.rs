use mole_disposal_game::{
    GamePhase, HitOutcome, SceneLog, ScoreStore, SeededSpawner, SessionController, TickOutcome,
    Transition,
};
use serde::Serialize;

use super::player::{PlayerBot, PlayerKind};

/// Seconds the reveal takes per target before input unlocks.
const REVEAL_SECS_PER_TARGET: f32 = 0.6;
/// Frames after which a session is abandoned as stalled.
const MAX_FRAMES: u64 = 500_000;

/// Configuration for a batch of headless sessions.
#[derive(Debug, Clone, Copy)]
pub struct RunConfig {
    pub player: PlayerKind,
    pub iterations: usize,
    pub frame_secs: f32,
}

/// Outcome of one full session.
#[derive(Debug, Clone, Serialize)]
pub struct RunRecord {
    pub seed: u64,
    pub iteration: usize,
    pub player: String,
    pub won: bool,
    pub stalled: bool,
    pub score: u32,
    pub high_score: u32,
    pub levels_cleared: u32,
    pub lives_left: u32,
    pub lives_lost: u32,
    pub hits: u32,
    pub frames: u64,
    pub end_message: String,
}

/// Drives one controller through repeated sessions, the way a frame loop would.
pub struct SessionRunner<S: ScoreStore> {
    controller: SessionController<SceneLog, SeededSpawner, S>,
    config: RunConfig,
}

impl<S: ScoreStore> SessionRunner<S> {
    pub fn new(
        controller: SessionController<SceneLog, SeededSpawner, S>,
        config: RunConfig,
    ) -> Self {
        Self { controller, config }
    }

    /// Play `iterations` sessions per seed on the same controller, so the
    /// high score carries across runs.
    pub fn run_seeds(&mut self, seeds: &[u64]) -> Vec<RunRecord> {
        let mut records = Vec::with_capacity(seeds.len() * self.config.iterations);
        for &seed in seeds {
            for iteration in 0..self.config.iterations {
                let run_seed = seed.wrapping_add(iteration as u64);
                records.push(self.run_session(seed, iteration, run_seed));
            }
        }
        records
    }

    fn run_session(&mut self, seed: u64, iteration: usize, run_seed: u64) -> RunRecord {
        let mut bot = self.config.player.create_bot(run_seed);
        let frame = self.config.frame_secs;
        let controller = &mut self.controller;
        controller.spawner_mut().reseed(run_seed);
        controller.start_session();

        let mut record = RunRecord {
            seed,
            iteration,
            player: bot.name().to_string(),
            won: false,
            stalled: false,
            score: 0,
            high_score: 0,
            levels_cleared: 0,
            lives_left: 0,
            lives_lost: 0,
            hits: 0,
            frames: 0,
            end_message: String::new(),
        };
        let mut reveal_left = reveal_secs(controller.target_sequence().len());
        let mut cooldown = bot.reaction_secs();

        while controller.phase() == GamePhase::Playing {
            if record.frames >= MAX_FRAMES {
                log::warn!("seed {seed} iteration {iteration} stalled");
                record.stalled = true;
                break;
            }
            record.frames += 1;

            if controller.is_sequencing_locked() {
                reveal_left -= frame;
                if reveal_left <= 0.0 {
                    controller.finish_sequencing();
                    cooldown = bot.reaction_secs();
                }
                continue;
            }

            if let TickOutcome::Expired(transition) = controller.tick(frame) {
                log::debug!("clock expired: {transition:?}");
                record.lives_lost += 1;
                reveal_left = reveal_secs(controller.target_sequence().len());
                continue;
            }

            cooldown -= frame;
            if cooldown > 0.0 {
                continue;
            }
            cooldown = bot.reaction_secs();
            let Some(target) =
                bot.next_hit(controller.target_sequence(), controller.hit_sequence())
            else {
                continue;
            };
            record.hits += 1;
            match controller.record_hit(target) {
                HitOutcome::LevelWon { transition, .. } => {
                    record.levels_cleared += 1;
                    if matches!(transition, Transition::NextLevel { .. }) {
                        reveal_left = reveal_secs(controller.target_sequence().len());
                    }
                }
                HitOutcome::LevelLost { transition, .. } => {
                    record.lives_lost += 1;
                    if matches!(transition, Transition::Retry { .. }) {
                        reveal_left = reveal_secs(controller.target_sequence().len());
                    }
                }
                HitOutcome::Pending | HitOutcome::Ignored => {}
            }
        }

        record.won = controller.player_won();
        record.score = controller.score();
        record.high_score = controller.high_score();
        record.lives_left = controller.lives();
        record.end_message = controller.end_message().to_string();
        log::info!(
            "seed {seed} #{iteration}: score {} ({} levels, won: {})",
            record.score,
            record.levels_cleared,
            record.won
        );
        record
    }

    pub fn controller(&self) -> &SessionController<SceneLog, SeededSpawner, S> {
        &self.controller
    }
}

#[allow(clippy::cast_precision_loss)]
fn reveal_secs(targets: usize) -> f32 {
    REVEAL_SECS_PER_TARGET * targets as f32
}
