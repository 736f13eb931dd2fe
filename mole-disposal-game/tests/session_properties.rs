use mole_disposal_game::{
    GamePhase, HitOutcome, MemoryScoreStore, SceneLog, ScoreStore, SessionConfig,
    SessionController, TargetId, TargetSequence, TargetSpawner, TickOutcome, Transition,
    constants::{HIGH_SCORE_KEY, LEVEL_START_SECONDS, RETRY_SECONDS},
};

const A: TargetId = TargetId(0);
const B: TargetId = TargetId(1);
const C: TargetId = TargetId(2);
const D: TargetId = TargetId(3);
const X: TargetId = TargetId(8);

/// Yields `A, B, C, D, ...` truncated to the requested size.
#[derive(Debug, Default)]
struct Alphabet {
    calls: usize,
}

impl TargetSpawner for Alphabet {
    fn generate_sequence(&mut self, max_targets: u8) -> TargetSequence {
        self.calls += 1;
        (0..max_targets).map(TargetId).collect()
    }
}

type Controller = SessionController<SceneLog, Alphabet, MemoryScoreStore>;

fn started(config: SessionConfig, store: MemoryScoreStore) -> Controller {
    let mut controller =
        SessionController::new(config, SceneLog::new(), Alphabet::default(), store).unwrap();
    controller.initialize();
    controller.start_session();
    controller.finish_sequencing();
    controller
}

fn default_started() -> Controller {
    started(SessionConfig::default(), MemoryScoreStore::new())
}

fn win_level(controller: &mut Controller) -> HitOutcome {
    controller.finish_sequencing();
    let targets = controller.target_sequence().to_vec();
    targets
        .into_iter()
        .map(|target| controller.record_hit(target))
        .last()
        .unwrap_or(HitOutcome::Ignored)
}

fn drain_clock(controller: &mut Controller) -> TickOutcome {
    controller.finish_sequencing();
    loop {
        match controller.tick(1.0) {
            TickOutcome::Counting { .. } => {}
            other => return other,
        }
    }
}

#[test]
fn high_score_is_monotonic_across_sessions() {
    let mut controller = default_started();
    let mut previous_high = controller.high_score();
    for _ in 0..3 {
        let outcome = win_level(&mut controller);
        assert!(matches!(outcome, HitOutcome::LevelWon { .. }));
        assert!(controller.high_score() >= previous_high);
        if controller.score() > previous_high {
            assert_eq!(controller.high_score(), controller.score());
        }
        previous_high = controller.high_score();
    }

    // A weaker second session never lowers the record.
    controller.start_session();
    win_level(&mut controller);
    assert!(controller.score() < controller.high_score());
    assert_eq!(controller.high_score(), previous_high);
    assert_eq!(
        controller.store().get_int(HIGH_SCORE_KEY).unwrap(),
        Some(i32::try_from(previous_high).unwrap())
    );
}

#[test]
fn lives_never_go_negative_and_zero_lives_loss_ends_game() {
    let mut controller = started(
        SessionConfig::default().with_starting_lives(2),
        MemoryScoreStore::new(),
    );
    let mut game_overs = 0;
    for expected_lives in [1, 0] {
        controller.finish_sequencing();
        let outcome = controller.record_hit(X);
        assert_eq!(
            outcome,
            HitOutcome::LevelLost {
                index: 0,
                transition: Transition::Retry {
                    lives_left: expected_lives
                }
            }
        );
        assert_eq!(controller.lives(), expected_lives);
        assert_eq!(controller.phase(), GamePhase::Playing);
    }

    controller.finish_sequencing();
    if let HitOutcome::LevelLost { transition, .. } = controller.record_hit(X) {
        assert_eq!(transition, Transition::GameOver { won: false });
        game_overs += 1;
    }
    assert_eq!(game_overs, 1);
    assert_eq!(controller.lives(), 0);
    assert_eq!(controller.phase(), GamePhase::GameOver);
    assert!(!controller.player_won());
    assert_eq!(controller.end_message(), "Oh no...");
}

#[test]
fn correct_prefix_produces_no_verdict() {
    let mut controller = default_started();
    assert_eq!(controller.target_sequence(), [A, B, C, D]);
    assert_eq!(controller.record_hit(A), HitOutcome::Pending);
    assert_eq!(controller.record_hit(B), HitOutcome::Pending);
    assert_eq!(controller.hit_sequence(), [A, B]);
    assert_eq!(controller.level(), 1);
    assert_eq!(controller.lives(), 3);
    assert_eq!(controller.phase(), GamePhase::Playing);
}

#[test]
fn exact_match_advances_once_with_expected_delta() {
    let mut controller = default_started();
    for _ in 0..5 {
        controller.tick(1.0);
    }
    assert_eq!(controller.remaining_time(), 30.0);
    for target in [A, B, C] {
        assert_eq!(controller.record_hit(target), HitOutcome::Pending);
    }
    let HitOutcome::LevelWon { score, transition } = controller.record_hit(D) else {
        panic!("expected the level to be won");
    };
    assert_eq!(transition, Transition::NextLevel { level: 2 });
    assert_eq!(score.total, 10 * 30 + 100 * 4 + 1);
    assert_eq!(controller.score(), 701);
    assert_eq!(controller.level(), 2);
    assert_eq!(controller.remaining_time(), LEVEL_START_SECONDS);
    assert!(controller.hit_sequence().is_empty());
    assert!(controller.is_sequencing_locked());

    // Input during the next reveal is noise, not a second advance.
    assert_eq!(controller.record_hit(A), HitOutcome::Ignored);
    assert_eq!(controller.level(), 2);
}

#[test]
fn mismatch_loses_at_the_offending_hit() {
    let mut controller = default_started();
    assert_eq!(controller.record_hit(A), HitOutcome::Pending);
    let outcome = controller.record_hit(X);
    assert_eq!(
        outcome,
        HitOutcome::LevelLost {
            index: 1,
            transition: Transition::Retry { lives_left: 2 }
        }
    );
    assert!(controller.hit_sequence().is_empty());
    assert_eq!(controller.spawner().calls, 2);
}

#[test]
fn difficulty_caps_at_eight_targets() {
    let mut controller = started(
        SessionConfig::default().with_level_count(6),
        MemoryScoreStore::new(),
    );
    let mut seen = vec![controller.max_targets()];
    for _ in 0..5 {
        win_level(&mut controller);
        seen.push(controller.max_targets());
    }
    assert_eq!(seen, vec![4, 6, 8, 8, 8, 8]);
    assert_eq!(controller.target_sequence().len(), 8);
}

#[test]
fn retry_resets_attempt_but_not_progress() {
    let mut controller = default_started();
    win_level(&mut controller);
    let level = controller.level();
    let score = controller.score();

    controller.finish_sequencing();
    controller.tick(2.5);
    controller.record_hit(A);
    controller.record_hit(X);

    assert_eq!(controller.level(), level);
    assert_eq!(controller.score(), score);
    assert_eq!(controller.max_targets(), 6);
    assert!(controller.hit_sequence().is_empty());
    assert_eq!(controller.remaining_time(), RETRY_SECONDS);
    assert_eq!(controller.scenes().current(), Some("Level2"));
}

#[test]
fn timer_expiry_matches_wrong_hit() {
    let mut by_timer = default_started();
    let mut by_hit = default_started();

    let TickOutcome::Expired(timer_transition) = drain_clock(&mut by_timer) else {
        panic!("clock should expire");
    };
    let HitOutcome::LevelLost {
        transition: hit_transition,
        ..
    } = by_hit.record_hit(X)
    else {
        panic!("hit should lose");
    };
    assert_eq!(timer_transition, hit_transition);
    assert_eq!(by_timer.snapshot(), by_hit.snapshot());

    // Same again with no lives left.
    let mut by_timer = started(
        SessionConfig::default().with_starting_lives(0),
        MemoryScoreStore::new(),
    );
    let mut by_hit = started(
        SessionConfig::default().with_starting_lives(0),
        MemoryScoreStore::new(),
    );
    assert_eq!(
        drain_clock(&mut by_timer),
        TickOutcome::Expired(Transition::GameOver { won: false })
    );
    assert!(matches!(
        by_hit.record_hit(X),
        HitOutcome::LevelLost {
            transition: Transition::GameOver { won: false },
            ..
        }
    ));
    assert_eq!(by_timer.snapshot(), by_hit.snapshot());
}

#[test]
fn clock_keeps_running_until_it_crosses_zero() {
    let mut controller = default_started();
    let mut ticks = 0;
    while let TickOutcome::Counting { .. } = controller.tick(1.0) {
        ticks += 1;
    }
    // 35 full seconds count down to zero; the following frame expires.
    assert_eq!(ticks, 35);
    assert_eq!(controller.lives(), 2);
}

#[test]
fn hits_after_game_over_are_ignored() {
    let mut controller = started(
        SessionConfig::default().with_level_count(1),
        MemoryScoreStore::new(),
    );
    win_level(&mut controller);
    assert_eq!(controller.phase(), GamePhase::GameOver);
    assert_eq!(controller.record_hit(A), HitOutcome::Ignored);
}

/// Spawns nothing, so every attempt has an empty target order.
#[derive(Debug, Default)]
struct Empty;

impl TargetSpawner for Empty {
    fn generate_sequence(&mut self, _max_targets: u8) -> TargetSequence {
        TargetSequence::new()
    }
}

#[test]
fn hits_past_sequence_length_are_ignored() {
    let mut controller = SessionController::new(
        SessionConfig::default(),
        SceneLog::new(),
        Empty,
        MemoryScoreStore::new(),
    )
    .unwrap();
    controller.initialize();
    controller.start_session();
    controller.finish_sequencing();

    assert_eq!(controller.record_hit(A), HitOutcome::Ignored);
    assert_eq!(controller.record_hit(B), HitOutcome::Ignored);
    assert!(controller.hit_sequence().is_empty());
    assert!(controller.hit_marks().is_empty());
    assert_eq!(controller.phase(), GamePhase::Playing);
    assert_eq!(controller.lives(), 3);
}
