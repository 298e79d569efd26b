//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Motion advances per frame, the clock per whole second, both driven by the caller
//! - No rendering or platform dependencies

pub mod capture;
pub mod clock;
pub mod motion;
pub mod spawn;
pub mod state;
pub mod tick;

pub use crate::settings::Difficulty;
pub use capture::{CaptureOutcome, IgnoreReason, capture};
pub use clock::{ClockTick, tick_clock};
pub use motion::{advance, step_particle};
pub use spawn::generate_batch;
pub use state::{GamePhase, GameState, Hsla, Particle, ParticleKind, Viewport};
pub use tick::{GameInput, apply_input, play_again, resize, select_difficulty, start_round};
