//! Quantum Catcher - click the drifting particles before the clock runs out
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, motion, clock, captures)
//! - `game_loop`: Host-agnostic frame driver fed with monotonic timestamps
//! - `renderer`: Read-only render snapshot (plus the DOM painter on wasm)
//! - `platform`: Browser handles that clean up after themselves
//! - `settings`: Data-driven round tuning

pub mod error;
pub mod game_loop;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::SettingsError;
pub use game_loop::{FrameReport, GameLoop};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Round length in seconds
    pub const ROUND_SECONDS: u32 = 30;
    /// A level is gained whenever the score lands on a multiple of this
    pub const LEVEL_UP_SCORE: u32 = 50;
    /// Particles per batch at the Medium multiplier
    pub const BASE_BATCH_SIZE: u32 = 20;
    /// Upper bound accepted for a configured base batch size
    pub const MAX_BASE_BATCH_SIZE: u32 = 1000;

    /// Milliseconds per countdown tick
    pub const CLOCK_TICK_MS: f64 = 1000.0;
    /// Maximum countdown ticks applied in one frame (tab was in background)
    pub const MAX_CLOCK_CATCHUP: u32 = 3;

    /// Viewport used before the host reports a real size
    pub const DEFAULT_VIEWPORT_WIDTH: f32 = 1280.0;
    pub const DEFAULT_VIEWPORT_HEIGHT: f32 = 720.0;

    /// Rotation speed spread in degrees/frame (before difficulty scaling)
    pub const ROTATION_SPEED_SPREAD: f32 = 5.0;
}

/// Wrap a coordinate that left `[0, max]` back onto the opposite edge.
///
/// Leaving past the far edge lands exactly on 0, leaving below 0 lands
/// exactly on `max`. In-range values are returned untouched.
#[inline]
pub fn wrap_coord(value: f32, max: f32) -> f32 {
    if value < 0.0 {
        max
    } else if value > max {
        0.0
    } else {
        value
    }
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(angle: f32) -> f32 {
    angle.rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_coord() {
        assert_eq!(wrap_coord(50.0, 100.0), 50.0);
        assert_eq!(wrap_coord(100.5, 100.0), 0.0);
        assert_eq!(wrap_coord(-0.1, 100.0), 100.0);
        // Edges themselves are in range
        assert_eq!(wrap_coord(0.0, 100.0), 0.0);
        assert_eq!(wrap_coord(100.0, 100.0), 100.0);
    }

    #[test]
    fn test_normalize_degrees() {
        assert!((normalize_degrees(370.0) - 10.0).abs() < 1e-4);
        assert!((normalize_degrees(-10.0) - 350.0).abs() < 1e-4);
        assert_eq!(normalize_degrees(0.0), 0.0);
    }
}
