//! Round lifecycle and input dispatch
//!
//! `Select --start--> Active --timeout--> GameOver --play again--> Select`.
//! There is no edge from `Active` straight back to `Select`.

use super::capture::{CaptureOutcome, capture};
use super::spawn::generate_batch;
use super::state::{GamePhase, GameState, Viewport};
use crate::settings::Difficulty;

/// Every mutation the surrounding UI may request
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameInput {
    /// Difficulty button on the select screen
    SelectDifficulty(Difficulty),
    /// Start button on the select screen
    StartRound,
    /// Click on a particle
    Capture { id: u32 },
    /// Play-again button on the game-over screen
    PlayAgain,
    /// Window resized
    Resize { width: f32, height: f32 },
}

/// Change the difficulty. Only honored on the select screen; the batch is
/// rebuilt so it matches the new multiplier.
pub fn select_difficulty(state: &mut GameState, difficulty: Difficulty) -> bool {
    if state.phase != GamePhase::Select {
        log::debug!("Difficulty change ignored outside select screen");
        return false;
    }
    if state.difficulty == difficulty {
        return false;
    }

    state.difficulty = difficulty;
    generate_batch(state);
    log::info!("Difficulty set to {}", difficulty.as_str());
    true
}

/// Start a round from the select screen: reset score, level and clock and
/// spawn a fresh batch.
pub fn start_round(state: &mut GameState) -> bool {
    if state.phase != GamePhase::Select {
        log::debug!("Start ignored in {:?}", state.phase);
        return false;
    }

    state.score = 0;
    state.level = 1;
    state.time_left = state.settings.round_seconds;
    state.phase = GamePhase::Active;
    generate_batch(state);

    log::info!(
        "Round started on {} ({} particles, {}s)",
        state.difficulty.as_str(),
        state.particles.len(),
        state.time_left
    );
    true
}

/// Leave the game-over screen for the select screen. Score stays visible
/// until the next round starts.
pub fn play_again(state: &mut GameState) -> bool {
    if state.phase != GamePhase::GameOver {
        log::debug!("Play again ignored in {:?}", state.phase);
        return false;
    }

    state.phase = GamePhase::Select;
    true
}

/// Record a new viewport and respawn the batch inside it, keeping level and
/// difficulty. Allowed in every phase.
pub fn resize(state: &mut GameState, width: f32, height: f32) {
    state.viewport = Viewport::new(width, height);
    generate_batch(state);
    log::debug!("Viewport resized to {}x{}", width, height);
}

/// Route one input to its transition. Returns true if the state changed.
pub fn apply_input(state: &mut GameState, input: &GameInput) -> bool {
    match *input {
        GameInput::SelectDifficulty(difficulty) => select_difficulty(state, difficulty),
        GameInput::StartRound => start_round(state),
        GameInput::Capture { id } => {
            matches!(capture(state, id), CaptureOutcome::Caught { .. })
        }
        GameInput::PlayAgain => play_again(state),
        GameInput::Resize { width, height } => {
            resize(state, width, height);
            true
        }
    }
}
