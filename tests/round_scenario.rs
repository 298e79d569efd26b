//! Full rounds driven through the public API

use quantum_catcher::sim::{
    Difficulty, GameInput, GamePhase, GameState, ParticleKind, Viewport, advance, apply_input,
    capture, start_round,
};
use quantum_catcher::{GameLoop, Settings};

fn medium_round(seed: u64) -> GameState {
    let mut state = GameState::new(seed, Viewport::new(1024.0, 768.0), Settings::default());
    assert!(start_round(&mut state));
    state
}

/// Capture the most valuable particle that does not overshoot `target`
fn capture_towards(state: &mut GameState, target: u32) {
    let gap = target - state.score;
    let pick = state
        .particles
        .iter()
        .filter(|p| p.points() <= gap)
        .max_by_key(|p| p.points())
        .map(|p| p.id);

    let id = match pick {
        Some(id) => id,
        None => {
            // Nothing small enough in this batch; make the first one a bubble
            state.particles[0].kind = ParticleKind::Bubble;
            state.particles[0].id
        }
    };
    capture(state, id);
}

#[test]
fn scenario_medium_round_to_game_over() {
    let mut state = medium_round(2024);
    assert_eq!(state.difficulty, Difficulty::Medium);
    assert_eq!(state.particles.len(), 20);
    assert_eq!((state.score, state.level, state.time_left), (0, 1, 30));

    // One bubble
    state.particles[0].kind = ParticleKind::Bubble;
    let id = state.particles[0].id;
    capture(&mut state, id);
    assert_eq!((state.score, state.level), (1, 1));

    // Up to exactly 50
    while state.score < 50 {
        capture_towards(&mut state, 50);
        if state.score < 50 {
            assert_eq!(state.level, 1);
        }
        assert!(!state.particles.is_empty());
    }
    assert_eq!(state.score, 50);
    assert_eq!(state.level, 2);

    // Thirty seconds with no captures
    let mut game = GameLoop::new(state);
    game.frame(0.0);
    for s in 1..=29 {
        game.frame(s as f64 * 1000.0);
        assert!(game.wants_frame());
        assert_eq!(game.state().time_left, 30 - s);
    }
    let report = game.frame(30_000.0);
    assert_eq!(report.round_over, Some(50));
    assert_eq!(game.state().phase, GamePhase::GameOver);
    assert_eq!(game.state().score, 50);
    assert!(!game.wants_frame());

    let frame = game.render_frame();
    assert!(frame.hud.game_over);
    assert!(frame.particles.is_empty());

    // Back to the select screen
    assert!(game.handle(GameInput::PlayAgain));
    assert_eq!(game.state().phase, GamePhase::Select);
}

#[test]
fn capture_after_timeout_changes_nothing() {
    let mut game = GameLoop::new(GameState::new(
        77,
        Viewport::default(),
        Settings::default(),
    ));
    game.handle(GameInput::StartRound);
    game.frame(0.0);
    for s in 1..=30 {
        game.frame(s as f64 * 1000.0);
    }
    assert_eq!(game.state().phase, GamePhase::GameOver);

    let before_particles = game.state().particles.len();
    let id = game.state().particles[0].id;
    assert!(!game.handle(GameInput::Capture { id }));
    assert_eq!(game.state().score, 0);
    assert_eq!(game.state().level, 1);
    assert_eq!(game.state().particles.len(), before_particles);
}

#[test]
fn exhausting_a_batch_regenerates_it() {
    let mut state = medium_round(31);
    let first_batch = state.batches_generated;

    for _ in 0..20 {
        let id = state.particles[0].id;
        capture(&mut state, id);
        assert!(!state.particles.is_empty());
    }
    assert_eq!(state.batches_generated, first_batch + 1);
    assert_eq!(state.particles.len(), 20);
}

#[test]
fn particle_past_right_edge_reappears_at_zero() {
    let mut state = medium_round(8);
    state.particles.truncate(1);
    let p = &mut state.particles[0];
    p.pos.x = 1023.5;
    p.pos.y = 400.0;
    p.vel.x = 1.0;
    p.vel.y = 0.0;

    advance(&mut state);
    assert_eq!(state.particles[0].pos.x, 0.0);

    advance(&mut state);
    assert!((state.particles[0].pos.x - 1.0).abs() < 1e-6);
}

#[test]
fn difficulty_scales_batch_for_each_round() {
    for (difficulty, expected) in [
        (Difficulty::Easy, 14),
        (Difficulty::Medium, 20),
        (Difficulty::Hard, 26),
    ] {
        let mut state = GameState::new(3, Viewport::default(), Settings::default());
        apply_input(&mut state, &GameInput::SelectDifficulty(difficulty));
        apply_input(&mut state, &GameInput::StartRound);
        assert_eq!(state.particles.len(), expected);
        assert!(
            state
                .particles
                .iter()
                .all(|p| ParticleKind::ALL.contains(&p.kind))
        );
    }
}
