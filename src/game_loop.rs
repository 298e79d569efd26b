//! Host-agnostic frame driver
//!
//! The host feeds monotonic timestamps (`requestAnimationFrame` time on the
//! web, a synthetic clock in the native demo and in tests). Each frame fires
//! every countdown tick that became due, then moves particles one step.
//! `wants_frame` turns false as soon as the round stops, which is the host's
//! cue to stop scheduling.

use crate::consts::CLOCK_TICK_MS;
use crate::renderer::RenderFrame;
use crate::sim::{ClockTick, GameInput, GameState, advance, apply_input, tick_clock};

/// What happened during one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// Countdown ticks fired this frame
    pub ticks: u32,
    /// Particles were advanced
    pub moved: bool,
    /// Final score if the round ended this frame
    pub round_over: Option<u32>,
}

/// Owns the game state and the timing needed to drive it
#[derive(Debug, Clone)]
pub struct GameLoop {
    state: GameState,
    /// Milliseconds not yet converted into countdown ticks
    accumulator: f64,
    /// Timestamp of the previous frame; `None` until the first frame of a round
    last_time: Option<f64>,
    frame_count: u64,
}

impl GameLoop {
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            accumulator: 0.0,
            last_time: None,
            frame_count: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Frames run since the last round started
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Whether the host should schedule another frame
    pub fn wants_frame(&self) -> bool {
        self.state.is_active()
    }

    /// Apply a UI input. Returns true if the state changed.
    pub fn handle(&mut self, input: GameInput) -> bool {
        let was_active = self.state.is_active();
        let changed = apply_input(&mut self.state, &input);

        if !was_active && self.state.is_active() {
            self.restart_timing();
        }
        changed
    }

    /// Forget the time baseline so the next frame does not count the gap
    /// since the last one. Used when the page is hidden but kept alive.
    pub fn suspend(&mut self) {
        self.accumulator = 0.0;
        self.last_time = None;
    }

    fn restart_timing(&mut self) {
        self.accumulator = 0.0;
        self.last_time = None;
        self.frame_count = 0;
    }

    /// Run one frame at `now_ms`. The first frame of a round only sets the
    /// time baseline for the clock; particles still move.
    ///
    /// Wall time is only observed through frames. Browsers stop delivering
    /// animation frames to hidden pages, so a backgrounded round pauses, and
    /// on return at most `max_clock_catchup` seconds are applied; the rest of
    /// the hidden time is dropped.
    pub fn frame(&mut self, now_ms: f64) -> FrameReport {
        let mut report = FrameReport::default();
        if !self.state.is_active() {
            self.last_time = None;
            return report;
        }

        let elapsed = self.last_time.map_or(0.0, |last| (now_ms - last).max(0.0));
        self.last_time = Some(now_ms);
        self.accumulator += elapsed;

        let max_ticks = self.state.settings.max_clock_catchup;
        while self.accumulator >= CLOCK_TICK_MS && report.ticks < max_ticks {
            self.accumulator -= CLOCK_TICK_MS;
            report.ticks += 1;
            if let ClockTick::Expired { final_score } = tick_clock(&mut self.state) {
                report.round_over = Some(final_score);
                self.accumulator = 0.0;
                break;
            }
        }

        // Long stall (background tab): drop the time we could not catch up on
        if self.accumulator >= CLOCK_TICK_MS {
            log::warn!(
                "Dropping {:.0}ms of clock time after a stalled frame",
                self.accumulator
            );
            self.accumulator = 0.0;
        }

        if self.state.is_active() {
            advance(&mut self.state);
            report.moved = true;
        }

        self.frame_count += 1;
        report
    }

    /// Snapshot for the presentation layer
    pub fn render_frame(&self) -> RenderFrame {
        RenderFrame::from_state(&self.state)
    }
}
