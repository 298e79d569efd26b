//! Capture handling: score, level and batch exhaustion

use super::spawn::generate_batch;
use super::state::GameState;

/// Why a capture request was dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// No round running
    Inactive,
    /// Id not in the live batch (already caught, or from a stale batch)
    UnknownId,
}

/// Result of a capture request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureOutcome {
    Caught {
        points: u32,
        score: u32,
        /// New level if this capture landed on a level-up multiple
        leveled_up: Option<u32>,
        /// Size of the fresh batch if this was the last particle
        regenerated: Option<usize>,
    },
    Ignored(IgnoreReason),
}

/// Catch particle `id`.
///
/// Level-up is a modulo check on the new total, so a capture that jumps over
/// a multiple (48 + 5 = 53) does not level up. Regeneration runs after the
/// level update and sees the new level.
pub fn capture(state: &mut GameState, id: u32) -> CaptureOutcome {
    if !state.is_active() {
        log::debug!("Capture of {} ignored: round not active", id);
        return CaptureOutcome::Ignored(IgnoreReason::Inactive);
    }

    let Some(index) = state.particles.iter().position(|p| p.id == id) else {
        log::debug!("Capture of {} ignored: not in live batch", id);
        return CaptureOutcome::Ignored(IgnoreReason::UnknownId);
    };

    let points = state.particles[index].points();
    state.score += points;

    let mut leveled_up = None;
    if state.score % state.settings.level_up_score == 0 {
        state.level += 1;
        leveled_up = Some(state.level);
        log::info!("Level up! Now level {} (score {})", state.level, state.score);
    }

    state.particles.remove(index);

    let regenerated = if state.particles.is_empty() {
        Some(generate_batch(state))
    } else if leveled_up.is_some() && state.settings.refresh_on_level_up {
        Some(generate_batch(state))
    } else {
        None
    };

    log::debug!(
        "Caught {} for {} (score {}, {} left)",
        id,
        points,
        state.score,
        state.particles.len()
    );

    CaptureOutcome::Caught {
        points,
        score: state.score,
        leveled_up,
        regenerated,
    }
}
