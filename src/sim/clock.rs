//! One-second round countdown

use super::state::{GamePhase, GameState};

/// Result of one countdown tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockTick {
    /// Round not active (or already at zero); nothing happened
    Idle,
    /// One second elapsed, round continues
    Counted { time_left: u32 },
    /// Clock reached zero and the round ended
    Expired { final_score: u32 },
}

/// Count one second off the clock. Ends the round when it reaches zero.
pub fn tick_clock(state: &mut GameState) -> ClockTick {
    if !state.is_active() || state.time_left == 0 {
        return ClockTick::Idle;
    }

    state.time_left -= 1;

    if state.time_left == 0 {
        state.phase = GamePhase::GameOver;
        log::info!(
            "Time up - final score {} at level {}",
            state.score,
            state.level
        );
        return ClockTick::Expired {
            final_score: state.score,
        };
    }

    log::trace!("Clock: {}s left", state.time_left);
    ClockTick::Counted {
        time_left: state.time_left,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::state::Viewport;

    fn active_state() -> GameState {
        let mut state = GameState::new(1, Viewport::default(), Settings::default());
        state.phase = GamePhase::Active;
        state
    }

    #[test]
    fn test_counts_down_once_per_tick() {
        let mut state = active_state();
        for n in 1..30 {
            assert_eq!(
                tick_clock(&mut state),
                ClockTick::Counted { time_left: 30 - n }
            );
            assert!(state.is_active());
        }
        assert_eq!(state.time_left, 1);
    }

    #[test]
    fn test_expires_at_zero() {
        let mut state = active_state();
        state.score = 17;
        state.time_left = 1;
        assert_eq!(
            tick_clock(&mut state),
            ClockTick::Expired { final_score: 17 }
        );
        assert_eq!(state.time_left, 0);
        assert_eq!(state.phase, GamePhase::GameOver);

        // Floor at zero
        assert_eq!(tick_clock(&mut state), ClockTick::Idle);
        assert_eq!(state.time_left, 0);
    }

    #[test]
    fn test_idle_when_not_active() {
        let mut state = GameState::new(1, Viewport::default(), Settings::default());
        assert_eq!(tick_clock(&mut state), ClockTick::Idle);
        assert_eq!(state.time_left, 30);
    }
}
