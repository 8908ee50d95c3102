//! Integration test: simulation and summary pipeline
//!
//! Covers the whole pipeline: batch simulation, session accounting
//! invariants, and the summary statistics derived from a finished session.

use pigdice::simulator::{
    run_simulation, simulate, summarize, Game, Session, SimConfig, SimulationError,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Builds a session by replaying fixed die faces. Each game's faces must end
/// with the terminating 1.
fn session_from_rolls(games: &[&[u8]]) -> Session {
    let mut session = Session::new();
    for faces in games {
        let mut game = Game::default();
        for &face in *faces {
            session.record_roll(&mut game, face);
        }
    }
    session
}

// =============================================================================
// Simulation invariants
// =============================================================================

#[test]
fn test_simulate_plays_exact_game_count() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    for n in [1u32, 2, 17, 500] {
        let session = simulate(n, &mut rng).unwrap();
        assert_eq!(session.games.len(), n as usize);
    }
}

#[test]
fn test_roll_counters_agree() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let session = simulate(500, &mut rng).unwrap();

    let rolls_from_games: u32 = session.games.iter().map(|g| g.rolls).sum();
    let rolls_from_faces: u32 = (1..=6).map(|face| session.face_count(face)).sum();

    assert_eq!(session.total_rolls, rolls_from_games);
    assert_eq!(session.total_rolls, rolls_from_faces);
}

#[test]
fn test_every_game_ends_on_a_one() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let session = simulate(500, &mut rng).unwrap();

    // Exactly one terminating 1 per completed game.
    assert_eq!(session.face_count(1), 500);
}

#[test]
fn test_game_scores_are_sums_of_scoring_faces() {
    let mut rng = ChaCha8Rng::seed_from_u64(123);
    let session = simulate(200, &mut rng).unwrap();

    for game in &session.games {
        assert!(game.rolls >= 1);
        // Every roll before the terminating 1 contributed a face in 2..=6.
        let scoring_rolls = game.rolls - 1;
        assert!(game.score >= 2 * scoring_rolls);
        assert!(game.score <= 6 * scoring_rolls);
    }
}

#[test]
fn test_high_score_is_max_over_games() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let session = simulate(300, &mut rng).unwrap();

    let max_score = session.games.iter().map(|g| g.score).max().unwrap();
    assert_eq!(session.high_score, max_score);
}

#[test]
fn test_zero_games_is_rejected() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    assert_eq!(simulate(0, &mut rng), Err(SimulationError::InvalidGameCount));
}

// =============================================================================
// Reproducibility
// =============================================================================

#[test]
fn test_seeded_runs_are_reproducible() {
    let config = SimConfig {
        num_games: 250,
        seed: Some(4242),
    };

    let first = run_simulation(&config).unwrap();
    let second = run_simulation(&config).unwrap();

    assert_eq!(first, second);
    assert_eq!(summarize(&first).unwrap(), summarize(&second).unwrap());
}

#[test]
fn test_summarize_is_idempotent() {
    let config = SimConfig {
        num_games: 50,
        seed: Some(8),
    };
    let session = run_simulation(&config).unwrap();

    assert_eq!(summarize(&session).unwrap(), summarize(&session).unwrap());
}

// =============================================================================
// Scripted scenarios and boundaries
// =============================================================================

#[test]
fn test_three_five_one_game() {
    let session = session_from_rolls(&[&[3, 5, 1]]);

    assert_eq!(session.games, vec![Game { score: 8, rolls: 3 }]);

    let summary = summarize(&session).unwrap();
    assert_eq!(summary.high_score, 8);
    assert_eq!(summary.total_rolls, 3);
    assert_eq!(summary.most_rolls_in_game, 3);
    assert_eq!(summary.average_rolls, 3);
    assert_eq!(summary.average_score, 8);
    // 3 and 5 are tied at one roll each; the lower face wins.
    assert_eq!(summary.most_common_face, 3);
    // 2, 4 and 6 are tied at zero rolls; again the lowest face wins.
    assert_eq!(summary.least_common_face, 2);
}

#[test]
fn test_summary_faces_stay_in_scoring_range() {
    let config = SimConfig {
        num_games: 400,
        seed: Some(31337),
    };
    let session = run_simulation(&config).unwrap();
    let summary = summarize(&session).unwrap();

    assert!((2..=6).contains(&summary.most_common_face));
    assert!((2..=6).contains(&summary.least_common_face));
    assert!(summary.average_rolls >= 1);
}

#[test]
fn test_empty_session_cannot_be_summarized() {
    assert!(summarize(&Session::new()).is_err());
}
