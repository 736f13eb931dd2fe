use mole_disposal_game::{
    GamePhase, HitOutcome, MemoryScoreStore, SceneLog, SeededSpawner, SessionConfig,
    SessionController, TickOutcome, read_high_score,
};

const FRAME: f32 = 1.0 / 60.0;

fn play_perfect_session<S>(controller: &mut SessionController<SceneLog, SeededSpawner, S>) -> u32
where
    S: mole_disposal_game::ScoreStore,
{
    controller.start_session();
    let mut cleared = 0;
    while controller.phase() == GamePhase::Playing {
        controller.finish_sequencing();
        for _ in 0..30 {
            assert!(matches!(
                controller.tick(FRAME),
                TickOutcome::Counting { .. }
            ));
        }
        let targets = controller.target_sequence().to_vec();
        for target in targets {
            if let HitOutcome::LevelWon { .. } = controller.record_hit(target) {
                cleared += 1;
            }
        }
    }
    cleared
}

#[test]
fn seeded_campaign_wins_and_persists_across_controllers() {
    let mut controller = SessionController::new(
        SessionConfig::default(),
        SceneLog::new(),
        SeededSpawner::new(0x00C0_FFEE),
        MemoryScoreStore::new(),
    )
    .unwrap();
    controller.initialize();

    let cleared = play_perfect_session(&mut controller);
    assert_eq!(cleared, 3);
    assert!(controller.player_won());
    assert_eq!(controller.end_message(), "Right on!");
    let record = controller.high_score();
    assert_eq!(record, controller.score());
    assert!(record > 0);

    let (scenes, _, store) = controller.into_parts();
    assert_eq!(
        scenes.requests(),
        ["Level1", "Level2", "Level3", "GameOver"]
    );
    assert_eq!(read_high_score(&store), Some(record));

    // A fresh process sees the stored record before playing.
    let mut next =
        SessionController::new(SessionConfig::default(), scenes, SeededSpawner::new(1), store)
            .unwrap();
    next.initialize();
    assert_eq!(next.high_score(), record);
    assert_eq!(next.phase(), GamePhase::Idle);
}

#[test]
fn losing_every_attempt_runs_out_of_lives() {
    let mut controller = SessionController::new(
        SessionConfig::default().with_starting_lives(1),
        SceneLog::new(),
        SeededSpawner::new(5),
        MemoryScoreStore::new(),
    )
    .unwrap();
    controller.initialize();
    controller.start_session();

    let mut attempts = 0;
    while controller.phase() == GamePhase::Playing {
        attempts += 1;
        controller.finish_sequencing();
        while let TickOutcome::Counting { .. } = controller.tick(0.5) {}
    }
    assert_eq!(attempts, 2);
    assert_eq!(controller.level(), 1);
    assert_eq!(controller.score(), 0);
    assert!(!controller.player_won());
    assert_eq!(controller.scenes().requests(), ["Level1", "Level1", "GameOver"]);
    assert_eq!(controller.store().flush_count(), 1);
}

#[test]
fn snapshot_serializes_for_hud() {
    let mut controller = SessionController::new(
        SessionConfig::default(),
        SceneLog::new(),
        SeededSpawner::new(11),
        MemoryScoreStore::with_high_score(1_500),
    )
    .unwrap();
    controller.initialize();
    controller.start_session();

    let json = serde_json::to_value(controller.snapshot()).unwrap();
    assert_eq!(json["phase"], "playing");
    assert_eq!(json["high_score"], 1_500);
    assert_eq!(json["level_count"], 3);
    assert_eq!(json["sequencing_locked"], true);
    assert_eq!(json["targets"].as_array().map(Vec::len), Some(4));
}
